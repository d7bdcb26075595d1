use anchor_lang::prelude::*;

use crate::error::DistributionError;
use crate::state::{CharityStatus, RegistryState};

/// Clears the verification flags without closing the account. Existing
/// schedules for this charity keep distributing; only new schedule creation
/// is blocked.
pub fn remove_charity(ctx: Context<RemoveCharity>) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ctx.accounts.registry.owner,
        DistributionError::UnauthorizedOwner
    );

    let status = &mut ctx.accounts.charity_status;
    status.is_verified = false;
    status.is_active = false;

    emit!(CharityRemoved {
        charity: status.charity,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct RemoveCharity<'info> {
    #[account(seeds = [b"registry"], bump = registry.bump)]
    pub registry: Account<'info, RegistryState>,

    #[account(
        mut,
        seeds = [b"charity", charity_status.charity.as_ref()],
        bump = charity_status.bump
    )]
    pub charity_status: Account<'info, CharityStatus>,

    pub owner: Signer<'info>,
}

#[event]
pub struct CharityRemoved {
    pub charity: Pubkey,
}
