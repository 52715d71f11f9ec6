use anchor_lang::prelude::*;

use crate::address::REGISTRY_STATS_SEED;
use crate::events::RegistryInitialized;
use crate::state::RegistryStats;

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    /// Initial penalty oracle authority, pays for the stats account
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Registry stats PDA (singleton)
    #[account(
        init,
        payer = authority,
        space = RegistryStats::SIZE,
        seeds = [REGISTRY_STATS_SEED],
        bump
    )]
    pub registry_stats: Account<'info, RegistryStats>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeRegistry>) -> Result<()> {
    let authority = ctx.accounts.authority.key();

    let stats = &mut ctx.accounts.registry_stats;
    stats.total_agents = 0;
    stats.total_endorsements = 0;
    stats.authority = authority;
    stats.bump = ctx.bumps.registry_stats;

    emit!(RegistryInitialized { authority });

    Ok(())
}
