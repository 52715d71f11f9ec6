use anchor_lang::prelude::*;

use crate::errors::RegistryError;
use crate::reputation;
use crate::state::{load_record, AgentProfile};

#[derive(Accounts)]
pub struct ComputeReputation<'info> {
    /// Profile to score (read-only)
    /// CHECK: Ownership and discriminator validated in the handler
    pub agent_profile: UncheckedAccount<'info>,
}

/// Score the profile against the current clock without touching the cache.
/// The value is returned through program return data.
pub fn handler(ctx: Context<ComputeReputation>) -> Result<u8> {
    let info = ctx.accounts.agent_profile.to_account_info();
    let profile: AgentProfile = load_record(&info, RegistryError::NotFound)?;

    let clock = Clock::get()?;
    Ok(reputation::compute(
        &profile.reputation_inputs(clock.unix_timestamp),
    ))
}
