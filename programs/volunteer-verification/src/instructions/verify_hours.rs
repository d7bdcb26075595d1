use anchor_lang::prelude::*;

use crate::error::VerificationError;
use crate::state::{check_verifier, CharityAccount, HoursRecord, VerificationState};

/// Called by a registered, active charity to attest approved volunteer
/// hours, keyed by the content hash of the off-chain approval.
pub fn verify_hours(
    ctx: Context<VerifyHours>,
    hours_hash: [u8; 32],
    volunteer: Pubkey,
    hours: u32,
) -> Result<()> {
    require!(volunteer != Pubkey::default(), VerificationError::InvalidPubkey);

    let state = &ctx.accounts.verification_state;
    let charity = &ctx.accounts.charity_account;
    check_verifier(state.paused, charity)?;

    let now = Clock::get()?.unix_timestamp;
    let record = &mut ctx.accounts.hours_record;
    record.commit(hours_hash, volunteer, charity.charity, hours, now)?;
    record.bump = ctx.bumps.hours_record;

    emit!(HoursVerified {
        hours_hash,
        volunteer,
        charity: charity.charity,
        hours,
        timestamp: now,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(hours_hash: [u8; 32])]
pub struct VerifyHours<'info> {
    #[account(seeds = [b"verification"], bump = verification_state.bump)]
    pub verification_state: Account<'info, VerificationState>,

    #[account(
        seeds = [b"charity", charity.key().as_ref()],
        bump = charity_account.bump
    )]
    pub charity_account: Account<'info, CharityAccount>,

    #[account(
        init_if_needed,
        payer = charity,
        space = 8 + HoursRecord::SIZE,
        seeds = [b"hours", hours_hash.as_ref()],
        bump
    )]
    pub hours_record: Account<'info, HoursRecord>,

    #[account(mut)]
    pub charity: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct HoursVerified {
    pub hours_hash: [u8; 32],
    pub volunteer: Pubkey,
    pub charity: Pubkey,
    pub hours: u32,
    pub timestamp: i64,
}
