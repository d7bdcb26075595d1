use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::DistributionError;
use crate::state::{DonationSchedule, DonorIndex};

/// Permissionless single-schedule release. A schedule that is inactive or not
/// yet due is a silent no-op so keepers can retry stale ids freely.
pub fn execute_distribution(ctx: Context<ExecuteDistribution>) -> Result<()> {
    // Capture before taking mutable borrows.
    let schedule_ai = ctx.accounts.schedule.to_account_info();

    let schedule = &mut ctx.accounts.schedule;
    require_keys_eq!(
        ctx.accounts.charity_token_account.mint,
        schedule.mint,
        DistributionError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.charity_token_account.owner,
        schedule.charity,
        DistributionError::InvalidCharityTokenAccount
    );

    let now = Clock::get()?.unix_timestamp;
    let Some(amount) = schedule.plan_distribution(now, ctx.accounts.vault.amount) else {
        return Ok(());
    };
    require!(
        ctx.accounts.vault.amount >= amount,
        DistributionError::InsufficientVaultBalance
    );

    let id_bytes = schedule.id.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[b"schedule", id_bytes.as_ref(), &[schedule.bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.charity_token_account.to_account_info(),
                authority: schedule_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    schedule.apply_distribution()?;
    if !schedule.active {
        ctx.accounts.donor_index.remove(schedule.id);
    }

    emit!(DistributionExecuted {
        schedule_id: schedule.id,
        charity: schedule.charity,
        mint: schedule.mint,
        amount,
        months_remaining: schedule.months_remaining,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ExecuteDistribution<'info> {
    #[account(
        mut,
        seeds = [b"schedule", schedule.id.to_le_bytes().as_ref()],
        bump = schedule.bump
    )]
    pub schedule: Account<'info, DonationSchedule>,

    #[account(
        mut,
        seeds = [b"vault", schedule.key().as_ref()],
        bump = schedule.vault_bump,
        constraint = vault.mint == schedule.mint @ DistributionError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub charity_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [b"donor", schedule.donor.as_ref()],
        bump = donor_index.bump
    )]
    pub donor_index: Account<'info, DonorIndex>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct DistributionExecuted {
    pub schedule_id: u64,
    pub charity: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub months_remaining: u8,
}
