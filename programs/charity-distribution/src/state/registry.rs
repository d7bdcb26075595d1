use anchor_lang::prelude::*;

/// Global registry PDA: owner authority plus the monotonic schedule id counter.
#[account]
pub struct RegistryState {
    pub owner: Pubkey,
    /// Id handed to the next schedule. Starts at 1, never reused.
    pub next_schedule_id: u64,
    pub bump: u8,
}

impl RegistryState {
    pub const SIZE: usize =
        32 + // owner
        8 +  // next_schedule_id
        1;   // bump
}

/// Per-charity verification flags, keyed by the charity wallet.
///
/// Never closed: `remove_charity` clears the flags so existing schedules keep
/// their history while new schedule creation is blocked.
#[account]
pub struct CharityStatus {
    pub charity: Pubkey,
    pub is_verified: bool,
    pub is_active: bool,
    pub bump: u8,
}

impl CharityStatus {
    pub const SIZE: usize =
        32 + // charity
        1 +  // is_verified
        1 +  // is_active
        1;   // bump
}

/// Accepted-token price entry, keyed by mint.
///
/// The price is informational (USD fixed point, 8 decimals); existence of the
/// entry is what marks a mint as supported for schedule creation.
#[account]
pub struct TokenPrice {
    pub mint: Pubkey,
    pub usd_price: u64,
    pub bump: u8,
}

impl TokenPrice {
    pub const SIZE: usize =
        32 + // mint
        8 +  // usd_price
        1;   // bump
}
