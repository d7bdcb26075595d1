use anchor_lang::prelude::*;

use crate::error::VerificationError;
use crate::state::VerificationState;

pub fn pause(ctx: Context<Pause>) -> Result<()> {
    let state = &mut ctx.accounts.verification_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        state.owner,
        VerificationError::UnauthorizedOwner
    );
    require!(!state.paused, VerificationError::RegistryPaused);
    state.paused = true;

    emit!(RegistryPausedEvent { owner: state.owner });
    Ok(())
}

#[derive(Accounts)]
pub struct Pause<'info> {
    #[account(mut, seeds = [b"verification"], bump = verification_state.bump)]
    pub verification_state: Account<'info, VerificationState>,

    pub owner: Signer<'info>,
}

#[event]
pub struct RegistryPausedEvent {
    pub owner: Pubkey,
}
