use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("82ptJhgiqEsUfrh1y3or7bFXL7s7Q87Tj7okpRe1CoWj");

#[program]
pub mod volunteer_verification {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    pub fn register_charity(ctx: Context<RegisterCharity>, charity: Pubkey) -> Result<()> {
        instructions::register_charity(ctx, charity)
    }

    pub fn update_charity_status(
        ctx: Context<UpdateCharityStatus>,
        is_active: bool,
    ) -> Result<()> {
        instructions::update_charity_status(ctx, is_active)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership(ctx, new_owner)
    }

    pub fn pause(ctx: Context<Pause>) -> Result<()> {
        instructions::pause(ctx)
    }

    pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
        instructions::unpause(ctx)
    }

    pub fn verify_application(
        ctx: Context<VerifyApplication>,
        application_hash: [u8; 32],
        applicant: Pubkey,
    ) -> Result<()> {
        instructions::verify_application(ctx, application_hash, applicant)
    }

    pub fn verify_hours(
        ctx: Context<VerifyHours>,
        hours_hash: [u8; 32],
        volunteer: Pubkey,
        hours: u32,
    ) -> Result<()> {
        instructions::verify_hours(ctx, hours_hash, volunteer, hours)
    }
}
