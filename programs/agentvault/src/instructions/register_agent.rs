use anchor_lang::prelude::*;

use crate::address::{AGENT_SEED, REGISTRY_STATS_SEED};
use crate::errors::RegistryError;
use crate::events::AgentRegistered;
use crate::state::{AgentProfile, RegistryStats};
use crate::validation::{validate_metadata_uri, validate_name, validate_skills};

#[derive(Accounts)]
pub struct RegisterAgent<'info> {
    /// Identity key being registered, pays for the profile
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Profile PDA. `init_if_needed` so that an occupied address surfaces as
    /// AlreadyRegistered instead of a system program error.
    #[account(
        init_if_needed,
        payer = owner,
        space = AgentProfile::SIZE,
        seeds = [AGENT_SEED, owner.key().as_ref()],
        bump
    )]
    pub agent_profile: Account<'info, AgentProfile>,

    /// Registry stats
    #[account(
        mut,
        seeds = [REGISTRY_STATS_SEED],
        bump = registry_stats.bump
    )]
    pub registry_stats: Account<'info, RegistryStats>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<RegisterAgent>,
    name: String,
    metadata_uri: String,
    skills: Vec<String>,
) -> Result<()> {
    // === Input Validation ===
    require!(
        !ctx.accounts.agent_profile.is_initialized(),
        RegistryError::AlreadyRegistered
    );
    validate_skills(&skills)?;
    validate_name(&name)?;
    validate_metadata_uri(&metadata_uri)?;

    let clock = Clock::get()?;
    let wallet = ctx.accounts.owner.key();

    // === Write state ===
    let member_number = ctx.accounts.registry_stats.record_agent()?;

    let profile = &mut ctx.accounts.agent_profile;
    profile.initialize(
        wallet,
        name.clone(),
        metadata_uri,
        skills,
        clock.unix_timestamp,
        ctx.bumps.agent_profile,
    );

    emit!(AgentRegistered {
        wallet,
        name,
        member_number,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
