use anchor_lang::prelude::*;
use anchor_spl::token::Token;

// NOTE: the `execute_distribution_batch` handler logic lives in `src/lib.rs`
// to avoid Anchor `Context` lifetime invariance issues when delegating across
// modules. Batch entries are passed as `remaining_accounts` quadruples
// (schedule, vault, charity token account, donor index).

#[derive(Accounts)]
pub struct ExecuteDistributionBatch<'info> {
    pub token_program: Program<'info, Token>,
}
