use anchor_lang::prelude::*;

/// Custom error codes for the scheduled distribution program.
#[error_code]
pub enum DistributionError {
    #[msg("Unauthorized: owner signature required")]
    UnauthorizedOwner,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Charity not verified")]
    CharityNotVerified,

    #[msg("Token not supported")]
    TokenNotSupported,

    #[msg("Invalid amount (must cover at least one unit per month)")]
    InvalidAmount,

    #[msg("Schedule id does not match the registry counter")]
    InvalidScheduleId,

    #[msg("Not the donor")]
    NotTheDonor,

    #[msg("Schedule is not active")]
    ScheduleNotActive,

    #[msg("Donor schedule list is full")]
    DonorScheduleListFull,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Charity token account does not belong to the schedule charity")]
    InvalidCharityTokenAccount,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Donor token account does not cover the deposit")]
    InsufficientDonorBalance,

    #[msg("Empty batch")]
    EmptyBatch,

    #[msg("Batch size too large")]
    BatchTooLarge,

    #[msg("Malformed batch account list")]
    InvalidBatchAccounts,

    #[msg("Math overflow")]
    MathOverflow,
}
