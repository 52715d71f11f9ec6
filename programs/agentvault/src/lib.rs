use anchor_lang::prelude::*;

pub mod address;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod query;
pub mod reputation;
pub mod state;
pub mod validation;

use instructions::*;

declare_id!("AgntVLT1111111111111111111111111111111111111");

// Security contact information (embedded on-chain)
#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "AgentVault",
    project_url: "https://github.com/agentvault/agentvault",
    contacts: "email:security@agentvault.dev",
    policy: "https://github.com/agentvault/agentvault/blob/main/SECURITY.md",
    preferred_languages: "en",
    source_code: "https://github.com/agentvault/agentvault"
}

#[program]
pub mod agentvault {
    use super::*;

    // =========================================================================
    // Registry Instructions
    // =========================================================================

    /// One-time setup of the registry stats singleton.
    /// The signer becomes the penalty oracle authority.
    pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Hand the penalty oracle role to another key, or retire it with None.
    pub fn update_registry_authority(
        ctx: Context<UpdateRegistryAuthority>,
        new_oracle: Option<Pubkey>,
    ) -> Result<()> {
        instructions::update_authority::handler(ctx, new_oracle)
    }

    // =========================================================================
    // Profile Instructions
    // =========================================================================

    /// Register the signer's identity key with reputation 50.
    pub fn register_agent(
        ctx: Context<RegisterAgent>,
        name: String,
        metadata_uri: String,
        skills: Vec<String>,
    ) -> Result<()> {
        instructions::register_agent::handler(ctx, name, metadata_uri, skills)
    }

    /// Partially update the signer's profile.
    pub fn update_profile(
        ctx: Context<UpdateProfile>,
        metadata_uri: Option<String>,
        skills: Option<Vec<String>>,
    ) -> Result<()> {
        instructions::update_profile::handler(ctx, metadata_uri, skills)
    }

    /// Oracle entry point for slash / reported-issue penalty inputs.
    pub fn report_penalties(
        ctx: Context<ReportPenalties>,
        slash_count: u32,
        reported_issue_count: u32,
    ) -> Result<()> {
        instructions::report_penalties::handler(ctx, slash_count, reported_issue_count)
    }

    /// Read-only: score a profile against the current clock.
    pub fn compute_reputation(ctx: Context<ComputeReputation>) -> Result<u8> {
        instructions::compute_reputation::handler(ctx)
    }

    // =========================================================================
    // Endorsement Instructions
    // =========================================================================

    /// Endorse a skill the target has declared. One endorsement per
    /// (endorser, target, skill).
    pub fn endorse_skill(ctx: Context<EndorseSkill>, skill: String) -> Result<()> {
        instructions::endorse_skill::handler(ctx, skill)
    }

    /// Revoke an endorsement. Only the original endorser may revoke.
    pub fn revoke_endorsement(ctx: Context<RevokeEndorsement>) -> Result<()> {
        instructions::revoke_endorsement::handler(ctx)
    }
}
