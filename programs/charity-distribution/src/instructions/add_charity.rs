use anchor_lang::prelude::*;

use crate::error::DistributionError;
use crate::state::{CharityStatus, RegistryState};

/// Idempotent upsert: re-adding a removed or already-verified charity marks
/// it verified and active again and re-emits the event.
pub fn add_charity(ctx: Context<AddCharity>, charity: Pubkey) -> Result<()> {
    require!(charity != Pubkey::default(), DistributionError::InvalidPubkey);
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ctx.accounts.registry.owner,
        DistributionError::UnauthorizedOwner
    );

    let status = &mut ctx.accounts.charity_status;
    status.charity = charity;
    status.is_verified = true;
    status.is_active = true;
    status.bump = ctx.bumps.charity_status;

    emit!(CharityAdded { charity });
    Ok(())
}

#[derive(Accounts)]
#[instruction(charity: Pubkey)]
pub struct AddCharity<'info> {
    #[account(seeds = [b"registry"], bump = registry.bump)]
    pub registry: Account<'info, RegistryState>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + CharityStatus::SIZE,
        seeds = [b"charity", charity.as_ref()],
        bump
    )]
    pub charity_status: Account<'info, CharityStatus>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct CharityAdded {
    pub charity: Pubkey,
}
