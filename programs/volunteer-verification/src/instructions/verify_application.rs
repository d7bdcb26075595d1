use anchor_lang::prelude::*;

use crate::error::VerificationError;
use crate::state::{check_verifier, ApplicationRecord, CharityAccount, VerificationState};

/// Called by a registered, active charity to attest an off-chain-approved
/// application. The record is keyed by its content hash and write-once.
pub fn verify_application(
    ctx: Context<VerifyApplication>,
    application_hash: [u8; 32],
    applicant: Pubkey,
) -> Result<()> {
    require!(applicant != Pubkey::default(), VerificationError::InvalidPubkey);

    let state = &ctx.accounts.verification_state;
    let charity = &ctx.accounts.charity_account;
    check_verifier(state.paused, charity)?;

    let now = Clock::get()?.unix_timestamp;
    let record = &mut ctx.accounts.application_record;
    record.commit(application_hash, applicant, charity.charity, now)?;
    record.bump = ctx.bumps.application_record;

    emit!(ApplicationVerified {
        application_hash,
        applicant,
        charity: charity.charity,
        timestamp: now,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(application_hash: [u8; 32])]
pub struct VerifyApplication<'info> {
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
        space = 8 + ApplicationRecord::SIZE,
        seeds = [b"application", application_hash.as_ref()],
        bump
    )]
    pub application_record: Account<'info, ApplicationRecord>,

    #[account(mut)]
    pub charity: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct ApplicationVerified {
    pub application_hash: [u8; 32],
    pub applicant: Pubkey,
    pub charity: Pubkey,
    pub timestamp: i64,
}
