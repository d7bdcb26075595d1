use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::error::DistributionError;
use crate::state::{CharityStatus, DonationSchedule, DonorIndex, RegistryState, TokenPrice};

pub fn create_schedule(
    ctx: Context<CreateSchedule>,
    schedule_id: u64,
    total_amount: u64,
) -> Result<()> {
    require!(total_amount > 0, DistributionError::InvalidAmount);

    let registry = &mut ctx.accounts.registry;
    require!(
        schedule_id == registry.next_schedule_id,
        DistributionError::InvalidScheduleId
    );

    let status = &ctx.accounts.charity_status;
    require!(
        status.is_verified && status.is_active,
        DistributionError::CharityNotVerified
    );

    let price = &ctx.accounts.token_price;
    require_keys_eq!(
        price.mint,
        ctx.accounts.mint.key(),
        DistributionError::TokenNotSupported
    );
    require!(price.usd_price > 0, DistributionError::TokenNotSupported);

    require_keys_eq!(
        ctx.accounts.donor_token_account.mint,
        ctx.accounts.mint.key(),
        DistributionError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.donor_token_account.owner,
        ctx.accounts.donor.key(),
        DistributionError::InvalidTokenAccount
    );
    require!(
        ctx.accounts.donor_token_account.amount >= total_amount,
        DistributionError::InsufficientDonorBalance
    );

    let now = Clock::get()?.unix_timestamp;
    let schedule = &mut ctx.accounts.schedule;
    schedule.init(
        schedule_id,
        ctx.accounts.donor.key(),
        status.charity,
        ctx.accounts.mint.key(),
        total_amount,
        now,
        ctx.bumps.schedule,
        ctx.bumps.vault,
    )?;

    // Custody moves in the same instruction as the bookkeeping: if this
    // transfer fails, schedule creation rolls back with it.
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.donor_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.donor.to_account_info(),
            },
        ),
        total_amount,
    )?;

    let index = &mut ctx.accounts.donor_index;
    if index.donor == Pubkey::default() {
        index.donor = ctx.accounts.donor.key();
        index.bump = ctx.bumps.donor_index;
    }
    index.push(schedule_id)?;

    registry.next_schedule_id = registry
        .next_schedule_id
        .checked_add(1)
        .ok_or(DistributionError::MathOverflow)?;

    emit!(ScheduleCreated {
        schedule_id,
        donor: schedule.donor,
        charity: schedule.charity,
        mint: schedule.mint,
        total_amount: schedule.total_amount,
        amount_per_month: schedule.amount_per_month,
        months_remaining: schedule.months_remaining,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(schedule_id: u64)]
pub struct CreateSchedule<'info> {
    #[account(mut, seeds = [b"registry"], bump = registry.bump)]
    pub registry: Account<'info, RegistryState>,

    #[account(
        seeds = [b"charity", charity_status.charity.as_ref()],
        bump = charity_status.bump
    )]
    pub charity_status: Account<'info, CharityStatus>,

    #[account(
        seeds = [b"token_price", mint.key().as_ref()],
        bump = token_price.bump
    )]
    pub token_price: Account<'info, TokenPrice>,

    #[account(
        init,
        payer = donor,
        space = 8 + DonationSchedule::SIZE,
        seeds = [b"schedule", schedule_id.to_le_bytes().as_ref()],
        bump
    )]
    pub schedule: Account<'info, DonationSchedule>,

    #[account(
        init,
        payer = donor,
        token::mint = mint,
        token::authority = schedule,
        seeds = [b"vault", schedule.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = donor,
        space = 8 + DonorIndex::SIZE,
        seeds = [b"donor", donor.key().as_ref()],
        bump
    )]
    pub donor_index: Account<'info, DonorIndex>,

    #[account(mut)]
    pub donor_token_account: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub donor: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct ScheduleCreated {
    pub schedule_id: u64,
    pub donor: Pubkey,
    pub charity: Pubkey,
    pub mint: Pubkey,
    pub total_amount: u64,
    pub amount_per_month: u64,
    pub months_remaining: u8,
}
