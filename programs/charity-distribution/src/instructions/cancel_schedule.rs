use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::DistributionError;
use crate::state::{DonationSchedule, DonorIndex};

/// Donor-only early termination. Refunds everything still in custody —
/// `amount_per_month * months_remaining` plus any division dust — and leaves
/// the schedule permanently inactive.
pub fn cancel_schedule(ctx: Context<CancelSchedule>) -> Result<()> {
    let schedule_ai = ctx.accounts.schedule.to_account_info();

    let schedule = &mut ctx.accounts.schedule;
    require_keys_eq!(
        ctx.accounts.donor.key(),
        schedule.donor,
        DistributionError::NotTheDonor
    );
    require_keys_eq!(
        ctx.accounts.donor_token_account.mint,
        schedule.mint,
        DistributionError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.donor_token_account.owner,
        schedule.donor,
        DistributionError::InvalidTokenAccount
    );

    // Errors on a cancelled or exhausted schedule, so the refund below can
    // never run twice.
    schedule.cancel()?;

    let refund = ctx.accounts.vault.amount;
    if refund > 0 {
        let id_bytes = schedule.id.to_le_bytes();
        let signer_seeds: &[&[&[u8]]] = &[&[b"schedule", id_bytes.as_ref(), &[schedule.bump]]];
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.donor_token_account.to_account_info(),
                    authority: schedule_ai,
                },
                signer_seeds,
            ),
            refund,
        )?;
    }

    ctx.accounts.donor_index.remove(schedule.id);

    emit!(ScheduleCancelled {
        schedule_id: schedule.id,
        refund,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct CancelSchedule<'info> {
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
    pub donor_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [b"donor", schedule.donor.as_ref()],
        bump = donor_index.bump
    )]
    pub donor_index: Account<'info, DonorIndex>,

    pub donor: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct ScheduleCancelled {
    pub schedule_id: u64,
    pub refund: u64,
}
