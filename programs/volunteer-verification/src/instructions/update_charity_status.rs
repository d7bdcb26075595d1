use anchor_lang::prelude::*;

use crate::error::VerificationError;
use crate::state::{CharityAccount, VerificationState};

/// Owner-only active toggle. Leaves `is_registered` and already-committed
/// records untouched.
pub fn update_charity_status(ctx: Context<UpdateCharityStatus>, is_active: bool) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ctx.accounts.verification_state.owner,
        VerificationError::UnauthorizedOwner
    );

    let account = &mut ctx.accounts.charity_account;
    require!(
        account.is_registered,
        VerificationError::CharityNotRegistered
    );
    account.is_active = is_active;

    emit!(CharityStatusUpdated {
        charity: account.charity,
        is_active,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateCharityStatus<'info> {
    #[account(seeds = [b"verification"], bump = verification_state.bump)]
    pub verification_state: Account<'info, VerificationState>,

    #[account(
        mut,
        seeds = [b"charity", charity_account.charity.as_ref()],
        bump = charity_account.bump
    )]
    pub charity_account: Account<'info, CharityAccount>,

    pub owner: Signer<'info>,
}

#[event]
pub struct CharityStatusUpdated {
    pub charity: Pubkey,
    pub is_active: bool,
}
