//! Donation schedule account and its pure state transitions.
//!
//! Handlers own the account plumbing and the token CPIs; everything that
//! decides *whether* and *how much* to move lives here so it can be tested
//! off-chain:
//! - a tranche is due once `now >= next_distribution_ts` and the schedule is
//!   still active;
//! - the final tranche sweeps the whole vault, so the `total / 12` division
//!   remainder is paid with month 12 instead of staying locked;
//! - cancellation and exhaustion are terminal.

use anchor_lang::prelude::*;

use crate::constants::{DISTRIBUTION_INTERVAL, DURATION_MONTHS};
use crate::error::DistributionError;

/// One monthly donation schedule with its own vault PDA as custody.
#[account]
#[derive(Default)]
pub struct DonationSchedule {
    pub id: u64,
    /// Immutable owner of the schedule; only this wallet may cancel.
    pub donor: Pubkey,
    /// Recipient, fixed at creation. Deactivating the charity later does not
    /// stop distributions already committed to the donor.
    pub charity: Pubkey,
    pub mint: Pubkey,
    /// Original deposit, fixed at creation.
    pub total_amount: u64,
    /// `total_amount / 12`, fixed at creation.
    pub amount_per_month: u64,
    /// Decrements by one per distribution; 0 is terminal.
    pub months_remaining: u8,
    /// A distribution is only valid at or after this time (Unix seconds).
    pub next_distribution_ts: i64,
    /// False once cancelled or exhausted, permanently.
    pub active: bool,
    pub bump: u8,
    pub vault_bump: u8,
}

impl DonationSchedule {
    pub const SIZE: usize =
        8 +  // id
        32 + // donor
        32 + // charity
        32 + // mint
        8 +  // total_amount
        8 +  // amount_per_month
        1 +  // months_remaining
        8 +  // next_distribution_ts
        1 +  // active
        1 +  // bump
        1;   // vault_bump

    #[allow(clippy::too_many_arguments)]
    pub fn init(
        &mut self,
        id: u64,
        donor: Pubkey,
        charity: Pubkey,
        mint: Pubkey,
        total_amount: u64,
        now: i64,
        bump: u8,
        vault_bump: u8,
    ) -> core::result::Result<(), DistributionError> {
        let amount_per_month = total_amount / DURATION_MONTHS as u64;
        if amount_per_month == 0 {
            return Err(DistributionError::InvalidAmount);
        }
        let next_distribution_ts = now
            .checked_add(DISTRIBUTION_INTERVAL)
            .ok_or(DistributionError::MathOverflow)?;

        self.id = id;
        self.donor = donor;
        self.charity = charity;
        self.mint = mint;
        self.total_amount = total_amount;
        self.amount_per_month = amount_per_month;
        self.months_remaining = DURATION_MONTHS;
        self.next_distribution_ts = next_distribution_ts;
        self.active = true;
        self.bump = bump;
        self.vault_bump = vault_bump;
        Ok(())
    }

    pub fn is_due(&self, now: i64) -> bool {
        self.active && now >= self.next_distribution_ts
    }

    /// Tranche to pay out now, or `None` when the schedule is inactive or not
    /// yet due (the skip condition for batch execution).
    pub fn plan_distribution(&self, now: i64, vault_balance: u64) -> Option<u64> {
        if !self.is_due(now) {
            return None;
        }
        if self.months_remaining == 1 {
            // Final tranche: drain the vault, dust included.
            Some(vault_balance)
        } else {
            Some(self.amount_per_month)
        }
    }

    /// Commit one distribution after the tranche from `plan_distribution` has
    /// left the vault. Exhaustion deactivates the schedule.
    pub fn apply_distribution(&mut self) -> core::result::Result<(), DistributionError> {
        self.months_remaining = self
            .months_remaining
            .checked_sub(1)
            .ok_or(DistributionError::MathOverflow)?;
        self.next_distribution_ts = self
            .next_distribution_ts
            .checked_add(DISTRIBUTION_INTERVAL)
            .ok_or(DistributionError::MathOverflow)?;
        if self.months_remaining == 0 {
            self.active = false;
        }
        Ok(())
    }

    /// Undistributed obligation still covered by the vault (dust excluded).
    pub fn outstanding(&self) -> u64 {
        self.amount_per_month
            .saturating_mul(self.months_remaining as u64)
    }

    /// Deactivate for cancellation. Double-cancel is an error, not a no-op,
    /// so a refund can never be paid twice.
    pub fn cancel(&mut self) -> core::result::Result<(), DistributionError> {
        if !self.active {
            return Err(DistributionError::ScheduleNotActive);
        }
        self.months_remaining = 0;
        self.active = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    fn schedule(total: u64) -> DonationSchedule {
        let mut s = DonationSchedule::default();
        s.init(
            1,
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            total,
            NOW,
            254,
            253,
        )
        .unwrap();
        s
    }

    #[test]
    fn creation_splits_into_twelve_tranches() {
        let s = schedule(12_000);
        assert_eq!(s.amount_per_month, 1_000);
        assert_eq!(s.months_remaining, 12);
        assert!(s.active);
        assert_eq!(s.next_distribution_ts, NOW + DISTRIBUTION_INTERVAL);
        assert_eq!(s.outstanding(), 12_000);
    }

    #[test]
    fn creation_rejects_amount_below_one_per_month() {
        let mut s = DonationSchedule::default();
        let res = s.init(
            1,
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            11,
            NOW,
            254,
            253,
        );
        assert!(matches!(res, Err(DistributionError::InvalidAmount)));
    }

    #[test]
    fn tranche_is_time_gated() {
        let s = schedule(12_000);
        // Immediately after creation and one second before the boundary:
        // nothing to pay.
        assert_eq!(s.plan_distribution(NOW, 12_000), None);
        assert_eq!(
            s.plan_distribution(NOW + DISTRIBUTION_INTERVAL - 1, 12_000),
            None
        );
        // Boundary is inclusive.
        assert_eq!(
            s.plan_distribution(NOW + DISTRIBUTION_INTERVAL, 12_000),
            Some(1_000)
        );
    }

    #[test]
    fn repeat_execution_in_same_window_is_noop() {
        let mut s = schedule(12_000);
        let due = NOW + DISTRIBUTION_INTERVAL;
        assert_eq!(s.plan_distribution(due, 12_000), Some(1_000));
        s.apply_distribution().unwrap();
        assert_eq!(s.months_remaining, 11);
        // Same time window again: the next boundary has moved forward.
        assert_eq!(s.plan_distribution(due, 11_000), None);
        assert_eq!(s.next_distribution_ts, due + DISTRIBUTION_INTERVAL);
    }

    #[test]
    fn late_execution_delays_but_never_skips_tranches() {
        let mut s = schedule(12_000);
        // Keeper shows up five intervals late: still exactly one tranche.
        let late = NOW + 5 * DISTRIBUTION_INTERVAL;
        assert_eq!(s.plan_distribution(late, 12_000), Some(1_000));
        s.apply_distribution().unwrap();
        assert_eq!(s.months_remaining, 11);
        // Previous lateness carries over, so the next tranche is due at once.
        assert_eq!(s.plan_distribution(late, 11_000), Some(1_000));
    }

    #[test]
    fn twelve_distributions_exhaust_the_schedule() {
        let mut s = schedule(12_000);
        let mut vault = 12_000u64;
        let mut distributed = 0u64;
        for month in 1..=12u8 {
            let now = NOW + month as i64 * DISTRIBUTION_INTERVAL;
            let amount = s.plan_distribution(now, vault).unwrap();
            vault -= amount;
            distributed += amount;
            s.apply_distribution().unwrap();
            // Custody invariant: the vault always covers what is still owed.
            assert!(vault >= s.outstanding());
            assert_eq!(distributed + s.outstanding(), s.total_amount);
        }
        assert_eq!(s.months_remaining, 0);
        assert!(!s.active);
        assert_eq!(vault, 0);
        assert_eq!(distributed, 12_000);
        // Terminal: nothing more is ever due.
        assert_eq!(
            s.plan_distribution(NOW + 100 * DISTRIBUTION_INTERVAL, 0),
            None
        );
    }

    #[test]
    fn final_tranche_sweeps_division_dust() {
        // 100 / 12 = 8 per month; 11 * 8 = 88, so the vault holds 12 at the
        // final month (8 + 4 dust).
        let mut s = schedule(100);
        assert_eq!(s.amount_per_month, 8);
        let mut vault = 100u64;
        for month in 1..=11u8 {
            let now = NOW + month as i64 * DISTRIBUTION_INTERVAL;
            assert_eq!(s.plan_distribution(now, vault), Some(8));
            vault -= 8;
            s.apply_distribution().unwrap();
        }
        let now = NOW + 12 * DISTRIBUTION_INTERVAL;
        assert_eq!(s.plan_distribution(now, vault), Some(12));
        s.apply_distribution().unwrap();
        assert!(!s.active);
    }

    #[test]
    fn cancel_refunds_remaining_months() {
        let mut s = schedule(12_000);
        // Two tranches already paid.
        s.apply_distribution().unwrap();
        s.apply_distribution().unwrap();
        assert_eq!(s.outstanding(), 10_000);
        s.cancel().unwrap();
        assert_eq!(s.months_remaining, 0);
        assert!(!s.active);
    }

    #[test]
    fn double_cancel_is_rejected() {
        let mut s = schedule(12_000);
        s.cancel().unwrap();
        assert!(matches!(s.cancel(), Err(DistributionError::ScheduleNotActive)));
    }

    #[test]
    fn exhausted_schedule_cannot_be_cancelled() {
        let mut s = schedule(12_000);
        for _ in 0..12 {
            s.apply_distribution().unwrap();
        }
        assert!(matches!(s.cancel(), Err(DistributionError::ScheduleNotActive)));
    }
}
