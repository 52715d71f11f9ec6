use anchor_lang::prelude::*;

use crate::errors::RegistryError;
use crate::events::ProfileUpdated;
use crate::state::{load_record, store_record, AgentProfile};
use crate::validation::{validate_metadata_uri, validate_skills};

#[derive(Accounts)]
pub struct UpdateProfile<'info> {
    /// Profile owner (must sign)
    pub owner: Signer<'info>,

    /// Profile to update. Resolved by address rather than by seeds so that a
    /// foreign profile is rejected as Unauthorized and a missing one as NotFound.
    /// CHECK: Ownership, discriminator and wallet are validated in the handler
    #[account(mut)]
    pub agent_profile: UncheckedAccount<'info>,
}

pub fn handler(
    ctx: Context<UpdateProfile>,
    metadata_uri: Option<String>,
    skills: Option<Vec<String>>,
) -> Result<()> {
    let info = ctx.accounts.agent_profile.to_account_info();
    let mut profile: AgentProfile = load_record(&info, RegistryError::NotFound)?;

    require_keys_eq!(
        profile.wallet,
        ctx.accounts.owner.key(),
        RegistryError::Unauthorized
    );

    // === Input Validation ===
    if let Some(ref uri) = metadata_uri {
        validate_metadata_uri(uri)?;
    }
    if let Some(ref new_skills) = skills {
        validate_skills(new_skills)?;
    }

    // === Write state ===
    // Endorsements for skills dropped here stay live; declaration is only
    // checked when an endorsement is created.
    let clock = Clock::get()?;
    let metadata_uri_changed = metadata_uri.is_some();
    let skills_changed = skills.is_some();

    if let Some(uri) = metadata_uri {
        profile.metadata_uri = uri;
    }
    if let Some(new_skills) = skills {
        profile.skills = new_skills;
    }
    profile.record_activity(clock.unix_timestamp)?;

    store_record(&profile, &info)?;

    emit!(ProfileUpdated {
        wallet: profile.wallet,
        metadata_uri_changed,
        skills_changed,
        reputation: profile.reputation,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
