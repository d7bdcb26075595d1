use anchor_lang::prelude::*;

use crate::error::VerificationError;
use crate::state::VerificationState;

pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
    let state = &mut ctx.accounts.verification_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        state.owner,
        VerificationError::UnauthorizedOwner
    );
    require!(state.paused, VerificationError::RegistryNotPaused);
    state.paused = false;

    emit!(RegistryUnpausedEvent { owner: state.owner });
    Ok(())
}

#[derive(Accounts)]
pub struct Unpause<'info> {
    #[account(mut, seeds = [b"verification"], bump = verification_state.bump)]
    pub verification_state: Account<'info, VerificationState>,

    pub owner: Signer<'info>,
}

#[event]
pub struct RegistryUnpausedEvent {
    pub owner: Pubkey,
}
