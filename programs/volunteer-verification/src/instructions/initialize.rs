use anchor_lang::prelude::*;

use crate::state::VerificationState;

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let state = &mut ctx.accounts.verification_state;
    state.owner = ctx.accounts.owner.key();
    state.paused = false;
    state.bump = ctx.bumps.verification_state;

    emit!(VerificationInitialized { owner: state.owner });
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + VerificationState::SIZE,
        seeds = [b"verification"],
        bump
    )]
    pub verification_state: Account<'info, VerificationState>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct VerificationInitialized {
    pub owner: Pubkey,
}
