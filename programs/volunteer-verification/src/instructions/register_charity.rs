use anchor_lang::prelude::*;

use crate::error::VerificationError;
use crate::state::{CharityAccount, VerificationState};

/// Unlike the distribution registry's idempotent add, re-registering an
/// existing charity is a distinct failure.
pub fn register_charity(ctx: Context<RegisterCharity>, charity: Pubkey) -> Result<()> {
    require!(charity != Pubkey::default(), VerificationError::InvalidPubkey);
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ctx.accounts.verification_state.owner,
        VerificationError::UnauthorizedOwner
    );

    let account = &mut ctx.accounts.charity_account;
    require!(
        !account.is_registered,
        VerificationError::CharityAlreadyRegistered
    );

    let now = Clock::get()?.unix_timestamp;
    account.charity = charity;
    account.is_registered = true;
    account.is_active = true;
    account.registered_at = now;
    account.bump = ctx.bumps.charity_account;

    emit!(CharityRegistered {
        charity,
        timestamp: now,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(charity: Pubkey)]
pub struct RegisterCharity<'info> {
    #[account(seeds = [b"verification"], bump = verification_state.bump)]
    pub verification_state: Account<'info, VerificationState>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + CharityAccount::SIZE,
        seeds = [b"charity", charity.as_ref()],
        bump
    )]
    pub charity_account: Account<'info, CharityAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct CharityRegistered {
    pub charity: Pubkey,
    pub timestamp: i64,
}
