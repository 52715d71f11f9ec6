use anchor_lang::prelude::*;

use crate::address::{agent_profile_address, endorsement_address, REGISTRY_STATS_SEED};
use crate::errors::RegistryError;
use crate::events::EndorsementRevoked;
use crate::state::{
    close_record, load_record, store_record, AgentProfile, Endorsement, RegistryStats,
};

#[derive(Accounts)]
pub struct RevokeEndorsement<'info> {
    /// Original endorser (must sign), receives the record's rent back
    #[account(mut)]
    pub endorser: Signer<'info>,

    /// Endorsement to revoke, addressed directly by the caller
    /// CHECK: Ownership, discriminator, address and endorser validated in the handler
    #[account(mut)]
    pub endorsement: UncheckedAccount<'info>,

    /// Profile of the endorsement's target
    /// CHECK: Must be the profile PDA of `endorsement.target`; validated in the handler
    #[account(mut)]
    pub target_profile: UncheckedAccount<'info>,

    /// Registry stats
    #[account(
        mut,
        seeds = [REGISTRY_STATS_SEED],
        bump = registry_stats.bump
    )]
    pub registry_stats: Account<'info, RegistryStats>,
}

pub fn handler(ctx: Context<RevokeEndorsement>) -> Result<()> {
    // === PHASE 1: Validate ===
    let endorsement_info = ctx.accounts.endorsement.to_account_info();
    let endorsement: Endorsement = load_record(&endorsement_info, RegistryError::NotFound)?;

    require_keys_eq!(
        endorsement.endorser,
        ctx.accounts.endorser.key(),
        RegistryError::Unauthorized
    );
    require_keys_eq!(
        endorsement_info.key(),
        endorsement_address(
            &endorsement.endorser,
            &endorsement.target,
            &endorsement.skill_hash,
            endorsement.bump,
        )?,
        RegistryError::InvalidRecordAddress
    );

    let target_info = ctx.accounts.target_profile.to_account_info();
    let mut target: AgentProfile = load_record(&target_info, RegistryError::NotFound)?;
    require_keys_eq!(
        target_info.key(),
        agent_profile_address(&endorsement.target, target.bump)?,
        RegistryError::InvalidRecordAddress
    );

    // === PHASE 2: Write state ===
    let clock = Clock::get()?;

    target.withdraw_endorsement(&endorsement, clock.unix_timestamp);
    ctx.accounts.registry_stats.release_endorsement();
    store_record(&target, &target_info)?;

    // Frees the derived address: the same triple may be endorsed again
    close_record(&endorsement_info, &ctx.accounts.endorser.to_account_info())?;

    emit!(EndorsementRevoked {
        endorser: endorsement.endorser,
        target: endorsement.target,
        skill: endorsement.skill,
        reputation: target.reputation,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
