use anchor_lang::prelude::*;
use anchor_spl::token::{self, TokenAccount, Transfer};

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;

use constants::{BATCH_ACCOUNTS_PER_SCHEDULE, MAX_BATCH_EXECUTE};
use error::DistributionError;
use instructions::*;
use state::{DonationSchedule, DonorIndex};

declare_id!("Cdk2R9NyF5d7pbKzSZGGZNbof3W8nBJVb8sMWJhGpQc1");

#[program]
pub mod charity_distribution {
    use super::*;

    pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
        instructions::initialize_registry(ctx)
    }

    pub fn add_charity(ctx: Context<AddCharity>, charity: Pubkey) -> Result<()> {
        instructions::add_charity(ctx, charity)
    }

    pub fn remove_charity(ctx: Context<RemoveCharity>) -> Result<()> {
        instructions::remove_charity(ctx)
    }

    pub fn set_token_price(
        ctx: Context<SetTokenPrice>,
        mint: Pubkey,
        usd_price: u64,
    ) -> Result<()> {
        instructions::set_token_price(ctx, mint, usd_price)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership(ctx, new_owner)
    }

    pub fn create_schedule(
        ctx: Context<CreateSchedule>,
        schedule_id: u64,
        total_amount: u64,
    ) -> Result<()> {
        instructions::create_schedule(ctx, schedule_id, total_amount)
    }

    pub fn execute_distribution(ctx: Context<ExecuteDistribution>) -> Result<()> {
        instructions::execute_distribution(ctx)
    }

    pub fn cancel_schedule(ctx: Context<CancelSchedule>) -> Result<()> {
        instructions::cancel_schedule(ctx)
    }

    pub fn emit_donor_schedules(ctx: Context<EmitDonorSchedules>) -> Result<()> {
        instructions::emit_donor_schedules(ctx)
    }

    /// Permissionless batch driver: forwards the per-schedule release logic
    /// over `remaining_accounts` quadruples (schedule, vault, charity token
    /// account, donor index). A schedule that is inactive or not yet due is
    /// skipped, never aborting the rest of the batch; a malformed account
    /// list does abort, since that is a caller bug rather than scheduling
    /// drift. No business logic beyond the loop lives here.
    pub fn execute_distribution_batch<'info>(
        ctx: Context<'_, '_, 'info, 'info, ExecuteDistributionBatch<'info>>,
    ) -> Result<()> {
        let entries = ctx.remaining_accounts;
        require!(!entries.is_empty(), DistributionError::EmptyBatch);
        require!(
            entries.len() % BATCH_ACCOUNTS_PER_SCHEDULE == 0,
            DistributionError::InvalidBatchAccounts
        );
        require!(
            entries.len() / BATCH_ACCOUNTS_PER_SCHEDULE <= MAX_BATCH_EXECUTE,
            DistributionError::BatchTooLarge
        );

        let now = Clock::get()?.unix_timestamp;

        for chunk in entries.chunks_exact(BATCH_ACCOUNTS_PER_SCHEDULE) {
            let schedule_ai = &chunk[0];
            let vault_ai = &chunk[1];
            let charity_token_ai = &chunk[2];
            let donor_index_ai = &chunk[3];

            let mut schedule: Account<DonationSchedule> = Account::try_from(schedule_ai)?;

            // Re-derive every PDA from the schedule's stored id and bumps; a
            // forged or mismatched account fails the batch here.
            let id_bytes = schedule.id.to_le_bytes();
            let expected_schedule = Pubkey::create_program_address(
                &[b"schedule", id_bytes.as_ref(), &[schedule.bump]],
                &crate::ID,
            )
            .map_err(|_| error!(DistributionError::InvalidBatchAccounts))?;
            require_keys_eq!(
                schedule_ai.key(),
                expected_schedule,
                DistributionError::InvalidBatchAccounts
            );

            let expected_vault = Pubkey::create_program_address(
                &[b"vault", schedule_ai.key.as_ref(), &[schedule.vault_bump]],
                &crate::ID,
            )
            .map_err(|_| error!(DistributionError::InvalidBatchAccounts))?;
            require_keys_eq!(
                vault_ai.key(),
                expected_vault,
                DistributionError::InvalidBatchAccounts
            );

            let vault: Account<TokenAccount> = Account::try_from(vault_ai)?;
            let charity_token: Account<TokenAccount> = Account::try_from(charity_token_ai)?;
            require_keys_eq!(
                charity_token.mint,
                schedule.mint,
                DistributionError::InvalidTokenMint
            );
            require_keys_eq!(
                charity_token.owner,
                schedule.charity,
                DistributionError::InvalidCharityTokenAccount
            );

            let mut donor_index: Account<DonorIndex> = Account::try_from(donor_index_ai)?;
            require_keys_eq!(
                donor_index.donor,
                schedule.donor,
                DistributionError::InvalidBatchAccounts
            );

            let Some(amount) = schedule.plan_distribution(now, vault.amount) else {
                continue;
            };
            require!(
                vault.amount >= amount,
                DistributionError::InsufficientVaultBalance
            );

            let signer_seeds: &[&[&[u8]]] =
                &[&[b"schedule", id_bytes.as_ref(), &[schedule.bump]]];
            token::transfer(
                CpiContext::new_with_signer(
                    ctx.accounts.token_program.to_account_info(),
                    Transfer {
                        from: vault_ai.clone(),
                        to: charity_token_ai.clone(),
                        authority: schedule_ai.clone(),
                    },
                    signer_seeds,
                ),
                amount,
            )?;

            schedule.apply_distribution()?;
            if !schedule.active {
                donor_index.remove(schedule.id);
                donor_index.exit(&crate::ID)?;
            }

            emit!(DistributionExecuted {
                schedule_id: schedule.id,
                charity: schedule.charity,
                mint: schedule.mint,
                amount,
                months_remaining: schedule.months_remaining,
            });

            // Manually loaded accounts are written back explicitly.
            schedule.exit(&crate::ID)?;
        }

        Ok(())
    }
}
