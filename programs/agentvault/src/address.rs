//! Record address derivation.
//!
//! Every record lives at a program-derived address computed from the fields
//! that identify it, so a record's existence at its address *is* the
//! uniqueness check:
//!
//! - AgentProfile:  `["agent", wallet]`
//! - Endorsement:   `["endorsement", endorser, target, keccak256(skill)]`
//! - RegistryStats: `["registry_stats"]`
//!
//! The skill is the only variable-length field, so it is reduced to a 32-byte
//! Keccak digest before derivation. All derivation inputs are therefore
//! fixed-size and never exceed the runtime's per-seed limit.

use anchor_lang::prelude::*;
use sha3::{Digest, Keccak256};

use crate::errors::RegistryError;

pub const AGENT_SEED: &[u8] = b"agent";
pub const ENDORSEMENT_SEED: &[u8] = b"endorsement";
pub const REGISTRY_STATS_SEED: &[u8] = b"registry_stats";

/// Fixed-width seed for a skill name.
pub fn skill_seed(skill: &str) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(skill.as_bytes());
    hasher.finalize().into()
}

pub fn find_agent_profile_address(wallet: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[AGENT_SEED, wallet.as_ref()], &crate::ID)
}

pub fn find_endorsement_address(endorser: &Pubkey, target: &Pubkey, skill: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            ENDORSEMENT_SEED,
            endorser.as_ref(),
            target.as_ref(),
            &skill_seed(skill),
        ],
        &crate::ID,
    )
}

pub fn find_registry_stats_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[REGISTRY_STATS_SEED], &crate::ID)
}

/// Re-derive a profile address from its stored bump (no bump search).
pub fn agent_profile_address(wallet: &Pubkey, bump: u8) -> Result<Pubkey> {
    Pubkey::create_program_address(&[AGENT_SEED, wallet.as_ref(), &[bump]], &crate::ID)
        .map_err(|_| error!(RegistryError::InvalidRecordAddress))
}

/// Re-derive an endorsement address from its stored skill hash and bump.
pub fn endorsement_address(
    endorser: &Pubkey,
    target: &Pubkey,
    skill_hash: &[u8; 32],
    bump: u8,
) -> Result<Pubkey> {
    Pubkey::create_program_address(
        &[
            ENDORSEMENT_SEED,
            endorser.as_ref(),
            target.as_ref(),
            skill_hash,
            &[bump],
        ],
        &crate::ID,
    )
    .map_err(|_| error!(RegistryError::InvalidRecordAddress))
}
