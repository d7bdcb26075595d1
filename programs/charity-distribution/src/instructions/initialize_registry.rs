use anchor_lang::prelude::*;

use crate::state::RegistryState;

pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.owner = ctx.accounts.owner.key();
    registry.next_schedule_id = 1;
    registry.bump = ctx.bumps.registry;

    emit!(RegistryInitialized {
        owner: registry.owner,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + RegistryState::SIZE,
        seeds = [b"registry"],
        bump
    )]
    pub registry: Account<'info, RegistryState>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct RegistryInitialized {
    pub owner: Pubkey,
}
