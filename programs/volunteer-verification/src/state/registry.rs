use anchor_lang::prelude::*;

use crate::error::VerificationError;

/// Global verification registry PDA: owner authority and the pause switch.
#[account]
pub struct VerificationState {
    pub owner: Pubkey,
    /// While set, both verification paths fail; reads stay available.
    pub paused: bool,
    pub bump: u8,
}

impl VerificationState {
    pub const SIZE: usize =
        32 + // owner
        1 +  // paused
        1;   // bump
}

/// Per-charity registration record, keyed by the charity wallet.
#[account]
#[derive(Default)]
pub struct CharityAccount {
    pub charity: Pubkey,
    /// Write-once by `register_charity`; never cleared.
    pub is_registered: bool,
    /// Owner-toggled; deactivation blocks new verifications only.
    pub is_active: bool,
    pub registered_at: i64,
    pub bump: u8,
}

impl CharityAccount {
    pub const SIZE: usize =
        32 + // charity
        1 +  // is_registered
        1 +  // is_active
        8 +  // registered_at
        1;   // bump
}

/// Shared precondition gate for both verification paths. Ordered so the
/// paused state reports first, independent of the caller's charity state.
pub fn check_verifier(
    paused: bool,
    charity: &CharityAccount,
) -> core::result::Result<(), VerificationError> {
    if paused {
        return Err(VerificationError::RegistryPaused);
    }
    if !charity.is_registered {
        return Err(VerificationError::CharityNotRegistered);
    }
    if !charity.is_active {
        return Err(VerificationError::CharityNotActive);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registered(active: bool) -> CharityAccount {
        CharityAccount {
            charity: Pubkey::new_unique(),
            is_registered: true,
            is_active: active,
            registered_at: 1_700_000_000,
            bump: 255,
        }
    }

    #[test]
    fn registered_active_charity_passes() {
        assert!(check_verifier(false, &registered(true)).is_ok());
    }

    #[test]
    fn unregistered_and_inactive_fail_distinctly() {
        let unregistered = CharityAccount::default();
        assert!(matches!(
            check_verifier(false, &unregistered),
            Err(VerificationError::CharityNotRegistered)
        ));
        assert!(matches!(
            check_verifier(false, &registered(false)),
            Err(VerificationError::CharityNotActive)
        ));
    }

    #[test]
    fn paused_wins_over_charity_state() {
        // Even a caller that would fail the charity checks sees the paused
        // error first.
        assert!(matches!(
            check_verifier(true, &CharityAccount::default()),
            Err(VerificationError::RegistryPaused)
        ));
        assert!(matches!(
            check_verifier(true, &registered(true)),
            Err(VerificationError::RegistryPaused)
        ));
    }
}
