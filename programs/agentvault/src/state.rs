use anchor_lang::prelude::*;

use crate::constants::BASE_REPUTATION;
use crate::errors::RegistryError;
use crate::reputation::{self, ReputationInputs};

// ============================================================================
// Profile Store
// ============================================================================

/// Agent profile account, one per identity key
/// PDA seeds: ["agent", wallet]
#[account]
#[derive(InitSpace, Debug, PartialEq)]
pub struct AgentProfile {
    /// Identity key that controls this profile (immutable)
    pub wallet: Pubkey,

    /// Display name
    #[max_len(32)]
    pub name: String,

    /// Off-chain descriptor location (empty when absent)
    #[max_len(200)]
    pub metadata_uri: String,

    /// Declared skills, checked when an endorsement is created
    #[max_len(10, 32)]
    pub skills: Vec<String>,

    /// Cached 0-100 score, recomputed on every input change
    pub reputation: u8,

    /// Live endorsements targeting this profile
    pub endorsement_count: u32,

    /// Sum of the weight snapshots of live endorsements (centi-points)
    pub endorsement_weight: u64,

    /// Owner-signed profile updates since registration
    pub activity_count: u64,

    /// Penalty inputs supplied by the oracle authority
    pub slash_count: u32,
    pub reported_issue_count: u32,

    pub registered_at: i64,
    pub last_active: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl AgentProfile {
    /// Account discriminator (8) + fields at their maximum lengths
    pub const SIZE: usize = 8 + Self::INIT_SPACE;

    /// A zeroed account (fresh `init_if_needed`) has no wallet yet
    pub fn is_initialized(&self) -> bool {
        self.wallet != Pubkey::default()
    }

    pub fn initialize(
        &mut self,
        wallet: Pubkey,
        name: String,
        metadata_uri: String,
        skills: Vec<String>,
        now: i64,
        bump: u8,
    ) {
        self.wallet = wallet;
        self.name = name;
        self.metadata_uri = metadata_uri;
        self.skills = skills;
        self.reputation = BASE_REPUTATION;
        self.endorsement_count = 0;
        self.endorsement_weight = 0;
        self.activity_count = 0;
        self.slash_count = 0;
        self.reported_issue_count = 0;
        self.registered_at = now;
        self.last_active = now;
        self.bump = bump;
    }

    pub fn declares_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|declared| declared == skill)
    }

    pub fn reputation_inputs(&self, now: i64) -> ReputationInputs {
        ReputationInputs {
            endorsement_weight: self.endorsement_weight,
            activity_count: self.activity_count,
            registered_at: self.registered_at,
            now,
            slash_count: self.slash_count,
            reported_issue_count: self.reported_issue_count,
        }
    }

    /// Recompute and cache the reputation score
    pub fn refresh_reputation(&mut self, now: i64) -> u8 {
        self.reputation = reputation::compute(&self.reputation_inputs(now));
        self.reputation
    }

    /// `last_active` never moves backwards, even if the clock does
    pub fn touch(&mut self, now: i64) {
        self.last_active = self.last_active.max(now);
    }

    /// Owner-signed mutation of the profile
    pub fn record_activity(&mut self, now: i64) -> Result<()> {
        self.activity_count = self
            .activity_count
            .checked_add(1)
            .ok_or(RegistryError::Overflow)?;
        self.touch(now);
        self.refresh_reputation(now);
        Ok(())
    }

    pub fn apply_endorsement(&mut self, weight: u16, now: i64) -> Result<()> {
        self.endorsement_count = self
            .endorsement_count
            .checked_add(1)
            .ok_or(RegistryError::Overflow)?;
        self.endorsement_weight = self
            .endorsement_weight
            .checked_add(weight as u64)
            .ok_or(RegistryError::Overflow)?;
        self.touch(now);
        self.refresh_reputation(now);
        Ok(())
    }

    /// Undo an endorsement. If the cached score is still the one the
    /// endorsement produced, nothing else has moved since and the score it
    /// replaced is restored. Otherwise the score is recomputed.
    pub fn withdraw_endorsement(&mut self, endorsement: &Endorsement, now: i64) {
        self.endorsement_count = self.endorsement_count.saturating_sub(1);
        self.endorsement_weight = self
            .endorsement_weight
            .saturating_sub(endorsement.weight as u64);

        if self.reputation == endorsement.reputation_after {
            self.reputation = endorsement.reputation_before;
        } else {
            self.refresh_reputation(now);
        }
    }

    pub fn set_penalties(&mut self, slash_count: u32, reported_issue_count: u32, now: i64) {
        self.slash_count = slash_count;
        self.reported_issue_count = reported_issue_count;
        self.refresh_reputation(now);
    }
}

// ============================================================================
// Endorsement Store
// ============================================================================

/// One endorsement per (endorser, target, skill)
/// PDA seeds: ["endorsement", endorser, target, keccak256(skill)]
#[account]
#[derive(InitSpace, Debug, PartialEq)]
pub struct Endorsement {
    /// Identity key that vouched (memcmp offset 8)
    pub endorser: Pubkey,

    /// Identity key being vouched for (memcmp offset 40)
    pub target: Pubkey,

    #[max_len(32)]
    pub skill: String,

    /// Address seed derived from `skill`
    pub skill_hash: [u8; 32],

    /// Endorser weight frozen at creation (centi-points)
    pub weight: u16,

    /// Target's cached reputation just before and just after this endorsement
    pub reputation_before: u8,
    pub reputation_after: u8,

    pub timestamp: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl Endorsement {
    pub const SIZE: usize = 8 + Self::INIT_SPACE;

    pub fn is_initialized(&self) -> bool {
        self.endorser != Pubkey::default()
    }
}

// ============================================================================
// Stats Aggregator
// ============================================================================

/// Global registry counters
/// PDA seeds: [b"registry_stats"]
#[account]
#[derive(InitSpace, Debug, PartialEq)]
pub struct RegistryStats {
    /// Total agents registered (counter)
    pub total_agents: u64,

    /// Live endorsements across all profiles
    pub total_endorsements: u64,

    /// Penalty oracle authority
    /// Set to Pubkey::default() to make immutable
    pub authority: Pubkey,

    /// PDA bump seed
    pub bump: u8,
}

impl RegistryStats {
    /// Account discriminator (8) + total_agents (8) + total_endorsements (8) + authority (32) + bump (1)
    pub const SIZE: usize = 8 + Self::INIT_SPACE; // 57 bytes

    /// Check if registry is immutable (authority renounced)
    pub fn is_immutable(&self) -> bool {
        self.authority == Pubkey::default()
    }

    /// Count a new agent, returning its registration ordinal
    pub fn record_agent(&mut self) -> Result<u64> {
        self.total_agents = self
            .total_agents
            .checked_add(1)
            .ok_or(RegistryError::Overflow)?;
        Ok(self.total_agents)
    }

    pub fn record_endorsement(&mut self) -> Result<()> {
        self.total_endorsements = self
            .total_endorsements
            .checked_add(1)
            .ok_or(RegistryError::Overflow)?;
        Ok(())
    }

    pub fn release_endorsement(&mut self) {
        self.total_endorsements = self.total_endorsements.saturating_sub(1);
    }
}

// ============================================================================
// Record access for accounts resolved by address
// ============================================================================

/// Deserialize a program-owned record, mapping an empty or foreign account to
/// `missing` so callers can report which record was absent.
pub fn load_record<T: AccountDeserialize>(info: &AccountInfo, missing: RegistryError) -> Result<T> {
    if info.owner != &crate::ID || info.data_is_empty() {
        return Err(missing.into());
    }
    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..])
}

/// Serialize a record back into its (fixed-size) account
pub fn store_record<T: AccountSerialize>(record: &T, info: &AccountInfo) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    record.try_serialize(&mut writer)
}

/// Close a record: refund its lamports and hand the address back to the
/// system program so the same derived address can be created again.
#[allow(deprecated)]
pub fn close_record(info: &AccountInfo, destination: &AccountInfo) -> Result<()> {
    let refund = info.lamports();
    let destination_lamports = destination.lamports();

    **destination.try_borrow_mut_lamports()? = destination_lamports
        .checked_add(refund)
        .ok_or(RegistryError::Overflow)?;
    **info.try_borrow_mut_lamports()? = 0;

    info.assign(&anchor_lang::system_program::ID);
    info.realloc(0, false)?;
    Ok(())
}
