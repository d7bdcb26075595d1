use anchor_lang::prelude::*;

use crate::error::DistributionError;
use crate::state::{RegistryState, TokenPrice};

/// Owner-only upsert of a supported-token price entry (USD fixed point,
/// 8 decimals).
pub fn set_token_price(ctx: Context<SetTokenPrice>, mint: Pubkey, usd_price: u64) -> Result<()> {
    require!(mint != Pubkey::default(), DistributionError::InvalidPubkey);
    require!(usd_price > 0, DistributionError::TokenNotSupported);
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ctx.accounts.registry.owner,
        DistributionError::UnauthorizedOwner
    );

    let price = &mut ctx.accounts.token_price;
    price.mint = mint;
    price.usd_price = usd_price;
    price.bump = ctx.bumps.token_price;

    emit!(TokenPriceSet { mint, usd_price });
    Ok(())
}

#[derive(Accounts)]
#[instruction(mint: Pubkey)]
pub struct SetTokenPrice<'info> {
    #[account(seeds = [b"registry"], bump = registry.bump)]
    pub registry: Account<'info, RegistryState>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + TokenPrice::SIZE,
        seeds = [b"token_price", mint.as_ref()],
        bump
    )]
    pub token_price: Account<'info, TokenPrice>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct TokenPriceSet {
    pub mint: Pubkey,
    pub usd_price: u64,
}
