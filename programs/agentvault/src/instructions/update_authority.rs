use anchor_lang::prelude::*;

use crate::address::REGISTRY_STATS_SEED;
use crate::errors::RegistryError;
use crate::events::PenaltyOracleChanged;
use crate::state::RegistryStats;

#[derive(Accounts)]
pub struct UpdateRegistryAuthority<'info> {
    /// Penalty oracle currently recorded on the registry
    pub authority: Signer<'info>,

    /// `authority` on the stats singleton is the only key that may call
    /// `report_penalties`
    #[account(
        mut,
        seeds = [REGISTRY_STATS_SEED],
        bump = registry_stats.bump,
        has_one = authority @ RegistryError::Unauthorized,
        constraint = !registry_stats.is_immutable() @ RegistryError::ImmutableAuthority
    )]
    pub registry_stats: Account<'info, RegistryStats>,
}

/// Hand the penalty oracle role to `new_oracle`, or retire it with `None`.
/// A retired oracle leaves every profile's slash and reported-issue counts
/// fixed at their last reported values.
pub fn handler(ctx: Context<UpdateRegistryAuthority>, new_oracle: Option<Pubkey>) -> Result<()> {
    let stats = &mut ctx.accounts.registry_stats;
    let previous_oracle = stats.authority;

    // The default key can never sign, so it doubles as "no oracle"
    stats.authority = new_oracle.unwrap_or_default();

    emit!(PenaltyOracleChanged {
        previous_oracle,
        new_oracle,
        penalties_frozen: stats.is_immutable(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
