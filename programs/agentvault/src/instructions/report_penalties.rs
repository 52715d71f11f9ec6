use anchor_lang::prelude::*;

use crate::address::REGISTRY_STATS_SEED;
use crate::errors::RegistryError;
use crate::events::PenaltiesReported;
use crate::state::{load_record, store_record, AgentProfile, RegistryStats};

#[derive(Accounts)]
pub struct ReportPenalties<'info> {
    /// Penalty oracle (must match the registry authority)
    pub authority: Signer<'info>,

    #[account(
        seeds = [REGISTRY_STATS_SEED],
        bump = registry_stats.bump,
        has_one = authority @ RegistryError::Unauthorized
    )]
    pub registry_stats: Account<'info, RegistryStats>,

    /// Profile receiving the penalty inputs
    /// CHECK: Ownership and discriminator validated in the handler
    #[account(mut)]
    pub agent_profile: UncheckedAccount<'info>,
}

/// Replace a profile's penalty inputs with the oracle's current absolute
/// counts. Only the penalty fields and the cached score change.
pub fn handler(
    ctx: Context<ReportPenalties>,
    slash_count: u32,
    reported_issue_count: u32,
) -> Result<()> {
    let info = ctx.accounts.agent_profile.to_account_info();
    let mut profile: AgentProfile = load_record(&info, RegistryError::NotFound)?;

    let clock = Clock::get()?;
    profile.set_penalties(slash_count, reported_issue_count, clock.unix_timestamp);
    store_record(&profile, &info)?;

    emit!(PenaltiesReported {
        wallet: profile.wallet,
        slash_count,
        reported_issue_count,
        reputation: profile.reputation,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
