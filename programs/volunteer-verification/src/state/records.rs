//! Write-once verification records, keyed by content hash.
//!
//! A record commits exactly once: there is no update or delete path, and a
//! second commit against the same hash fails without touching the stored
//! tuple.

use anchor_lang::prelude::*;

use crate::constants::ZERO_HASH;
use crate::error::VerificationError;

/// Attestation that a charity approved an off-chain application.
#[account]
#[derive(Default)]
pub struct ApplicationRecord {
    pub application_hash: [u8; 32],
    pub applicant: Pubkey,
    pub charity: Pubkey,
    pub verified_at: i64,
    pub is_verified: bool,
    pub bump: u8,
}

impl ApplicationRecord {
    pub const SIZE: usize =
        32 + // application_hash
        32 + // applicant
        32 + // charity
        8 +  // verified_at
        1 +  // is_verified
        1;   // bump

    pub fn commit(
        &mut self,
        application_hash: [u8; 32],
        applicant: Pubkey,
        charity: Pubkey,
        now: i64,
    ) -> core::result::Result<(), VerificationError> {
        if application_hash == ZERO_HASH {
            return Err(VerificationError::ZeroHash);
        }
        if self.is_verified {
            return Err(VerificationError::HashAlreadyVerified);
        }
        self.application_hash = application_hash;
        self.applicant = applicant;
        self.charity = charity;
        self.verified_at = now;
        self.is_verified = true;
        Ok(())
    }
}

/// Attestation of approved volunteer hours.
#[account]
#[derive(Default)]
pub struct HoursRecord {
    pub hours_hash: [u8; 32],
    pub volunteer: Pubkey,
    pub charity: Pubkey,
    pub hours: u32,
    pub verified_at: i64,
    pub is_verified: bool,
    pub bump: u8,
}

impl HoursRecord {
    pub const SIZE: usize =
        32 + // hours_hash
        32 + // volunteer
        32 + // charity
        4 +  // hours
        8 +  // verified_at
        1 +  // is_verified
        1;   // bump

    pub fn commit(
        &mut self,
        hours_hash: [u8; 32],
        volunteer: Pubkey,
        charity: Pubkey,
        hours: u32,
        now: i64,
    ) -> core::result::Result<(), VerificationError> {
        if hours_hash == ZERO_HASH {
            return Err(VerificationError::ZeroHash);
        }
        if hours == 0 {
            return Err(VerificationError::InvalidHours);
        }
        if self.is_verified {
            return Err(VerificationError::HashAlreadyVerified);
        }
        self.hours_hash = hours_hash;
        self.volunteer = volunteer;
        self.charity = charity;
        self.hours = hours;
        self.verified_at = now;
        self.is_verified = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    fn hash(payload: &[u8]) -> [u8; 32] {
        blake3::hash(payload).into()
    }

    #[test]
    fn application_commit_is_write_once() {
        let mut record = ApplicationRecord::default();
        let first_applicant = Pubkey::new_unique();
        let charity = Pubkey::new_unique();
        let h = hash(b"application1");

        record.commit(h, first_applicant, charity, NOW).unwrap();
        assert!(record.is_verified);
        assert_eq!(record.applicant, first_applicant);

        // Second commit with a different applicant fails and the stored
        // tuple keeps the first applicant.
        let res = record.commit(h, Pubkey::new_unique(), charity, NOW + 1);
        assert!(matches!(res, Err(VerificationError::HashAlreadyVerified)));
        assert_eq!(record.applicant, first_applicant);
        assert_eq!(record.verified_at, NOW);
    }

    #[test]
    fn application_commit_rejects_zero_hash() {
        let mut record = ApplicationRecord::default();
        let res = record.commit(ZERO_HASH, Pubkey::new_unique(), Pubkey::new_unique(), NOW);
        assert!(matches!(res, Err(VerificationError::ZeroHash)));
        assert!(!record.is_verified);
    }

    #[test]
    fn hours_commit_records_the_full_tuple() {
        let mut record = HoursRecord::default();
        let volunteer = Pubkey::new_unique();
        let charity = Pubkey::new_unique();

        record
            .commit(hash(b"hours1"), volunteer, charity, 8, NOW)
            .unwrap();
        assert!(record.is_verified);
        assert_eq!(record.volunteer, volunteer);
        assert_eq!(record.charity, charity);
        assert_eq!(record.hours, 8);
        assert_eq!(record.verified_at, NOW);
    }

    #[test]
    fn hours_commit_is_write_once() {
        let mut record = HoursRecord::default();
        let h = hash(b"hours1");
        record
            .commit(h, Pubkey::new_unique(), Pubkey::new_unique(), 8, NOW)
            .unwrap();
        let res = record.commit(h, Pubkey::new_unique(), Pubkey::new_unique(), 9, NOW + 1);
        assert!(matches!(res, Err(VerificationError::HashAlreadyVerified)));
        assert_eq!(record.hours, 8);
    }

    #[test]
    fn hours_commit_rejects_zero_hours() {
        let mut record = HoursRecord::default();
        let res = record.commit(
            hash(b"hours2"),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            0,
            NOW,
        );
        assert!(matches!(res, Err(VerificationError::InvalidHours)));
        assert!(!record.is_verified);
    }
}
