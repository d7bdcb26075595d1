use anchor_lang::prelude::*;

use crate::constants::MAX_DONOR_SCHEDULES;
use crate::error::DistributionError;

/// Per-donor list of *active* schedule ids in insertion (ascending id) order.
///
/// Serves the donor-schedules query directly: ids are pushed on creation and
/// removed on cancellation or exhaustion, so cancelled and exhausted
/// schedules never appear in the view.
#[account]
#[derive(Default)]
pub struct DonorIndex {
    pub donor: Pubkey,
    pub schedule_ids: Vec<u64>,
    pub bump: u8,
}

impl DonorIndex {
    pub const SIZE: usize =
        32 +                         // donor
        4 + 8 * MAX_DONOR_SCHEDULES + // schedule_ids vec
        1;                           // bump

    pub fn push(&mut self, schedule_id: u64) -> core::result::Result<(), DistributionError> {
        if self.schedule_ids.len() >= MAX_DONOR_SCHEDULES {
            return Err(DistributionError::DonorScheduleListFull);
        }
        self.schedule_ids.push(schedule_id);
        Ok(())
    }

    /// Drop a schedule that went inactive. Unknown ids are ignored so the
    /// index never blocks a terminal transition.
    pub fn remove(&mut self, schedule_id: u64) {
        self.schedule_ids.retain(|&id| id != schedule_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut index = DonorIndex::default();
        index.push(1).unwrap();
        index.push(2).unwrap();
        index.push(5).unwrap();
        assert_eq!(index.schedule_ids, vec![1, 2, 5]);
    }

    #[test]
    fn remove_preserves_order_of_the_rest() {
        let mut index = DonorIndex::default();
        for id in [1, 2, 3] {
            index.push(id).unwrap();
        }
        index.remove(2);
        assert_eq!(index.schedule_ids, vec![1, 3]);
        // Removing an id that is not present is a no-op.
        index.remove(42);
        assert_eq!(index.schedule_ids, vec![1, 3]);
    }

    #[test]
    fn rejects_overflowing_the_list() {
        let mut index = DonorIndex::default();
        for id in 0..MAX_DONOR_SCHEDULES as u64 {
            index.push(id).unwrap();
        }
        assert!(matches!(
            index.push(99),
            Err(DistributionError::DonorScheduleListFull)
        ));
    }
}
