use anchor_lang::prelude::*;

use crate::state::DonorIndex;

/// Read-style query: emits the donor's active schedule ids in insertion
/// order. Off-chain consumers may also read the index account directly.
pub fn emit_donor_schedules(ctx: Context<EmitDonorSchedules>) -> Result<()> {
    let index = &ctx.accounts.donor_index;

    emit!(DonorSchedules {
        donor: index.donor,
        schedule_ids: index.schedule_ids.clone(),
    });
    Ok(())
}

#[derive(Accounts)]
pub struct EmitDonorSchedules<'info> {
    #[account(
        seeds = [b"donor", donor_index.donor.as_ref()],
        bump = donor_index.bump
    )]
    pub donor_index: Account<'info, DonorIndex>,
}

#[event]
pub struct DonorSchedules {
    pub donor: Pubkey,
    pub schedule_ids: Vec<u64>,
}
