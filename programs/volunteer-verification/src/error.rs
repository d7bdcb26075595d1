use anchor_lang::prelude::*;

/// Custom error codes for the volunteer verification program.
#[error_code]
pub enum VerificationError {
    #[msg("Unauthorized: owner signature required")]
    UnauthorizedOwner,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Hash must be non-zero")]
    ZeroHash,

    #[msg("Hours must be greater than zero")]
    InvalidHours,

    #[msg("Charity already registered")]
    CharityAlreadyRegistered,

    #[msg("Charity not registered")]
    CharityNotRegistered,

    #[msg("Charity not active")]
    CharityNotActive,

    #[msg("Hash already verified")]
    HashAlreadyVerified,

    #[msg("Registry is paused")]
    RegistryPaused,

    #[msg("Registry is not paused")]
    RegistryNotPaused,
}
