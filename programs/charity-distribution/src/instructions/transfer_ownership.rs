use anchor_lang::prelude::*;

use crate::error::DistributionError;
use crate::state::RegistryState;

pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    require!(new_owner != Pubkey::default(), DistributionError::InvalidPubkey);

    let registry = &mut ctx.accounts.registry;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        registry.owner,
        DistributionError::UnauthorizedOwner
    );

    let previous_owner = registry.owner;
    registry.owner = new_owner;

    emit!(OwnershipTransferred {
        previous_owner,
        new_owner,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(mut, seeds = [b"registry"], bump = registry.bump)]
    pub registry: Account<'info, RegistryState>,

    pub owner: Signer<'info>,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
