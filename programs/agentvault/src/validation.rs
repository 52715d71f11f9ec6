//! Input bounds shared by registration and profile updates.
//!
//! Every variable-length field is bounded so profile records keep the fixed
//! size computed by `InitSpace`.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::RegistryError;

pub fn validate_name(name: &str) -> Result<()> {
    require!(
        !name.is_empty() && name.len() <= MAX_NAME_LENGTH,
        RegistryError::InvalidName
    );
    Ok(())
}

pub fn validate_metadata_uri(uri: &str) -> Result<()> {
    require!(uri.len() <= MAX_URI_LENGTH, RegistryError::InvalidMetadataUri);
    Ok(())
}

/// Count is checked before individual entries.
pub fn validate_skills(skills: &[String]) -> Result<()> {
    require!(
        (MIN_SKILLS..=MAX_SKILLS).contains(&skills.len()),
        RegistryError::InvalidSkillCount
    );
    for skill in skills {
        require!(
            !skill.is_empty() && skill.len() <= MAX_SKILL_LENGTH,
            RegistryError::InvalidSkill
        );
    }
    Ok(())
}
