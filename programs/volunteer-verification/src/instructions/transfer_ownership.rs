use anchor_lang::prelude::*;

use crate::error::VerificationError;
use crate::state::VerificationState;

pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    require!(new_owner != Pubkey::default(), VerificationError::InvalidPubkey);

    let state = &mut ctx.accounts.verification_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        state.owner,
        VerificationError::UnauthorizedOwner
    );

    let previous_owner = state.owner;
    state.owner = new_owner;

    emit!(OwnershipTransferred {
        previous_owner,
        new_owner,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(mut, seeds = [b"verification"], bump = verification_state.bump)]
    pub verification_state: Account<'info, VerificationState>,

    pub owner: Signer<'info>,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
