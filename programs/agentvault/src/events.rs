use anchor_lang::prelude::*;

// ============================================================================
// Registry Events
// ============================================================================

#[event]
pub struct RegistryInitialized {
    pub authority: Pubkey,
}

/// The key allowed to report penalties changed hands or was retired
#[event]
pub struct PenaltyOracleChanged {
    pub previous_oracle: Pubkey,
    pub new_oracle: Option<Pubkey>,
    /// No oracle remains; penalty inputs can no longer change
    pub penalties_frozen: bool,
    pub timestamp: i64,
}

// ============================================================================
// Profile Events
// ============================================================================

#[event]
pub struct AgentRegistered {
    pub wallet: Pubkey,
    pub name: String,
    /// Registration ordinal (value of `total_agents` after this registration)
    pub member_number: u64,
    pub timestamp: i64,
}

#[event]
pub struct ProfileUpdated {
    pub wallet: Pubkey,
    pub metadata_uri_changed: bool,
    pub skills_changed: bool,
    pub reputation: u8,
    pub timestamp: i64,
}

/// Emitted when the penalty oracle replaces a profile's penalty inputs
#[event]
pub struct PenaltiesReported {
    pub wallet: Pubkey,
    pub slash_count: u32,
    pub reported_issue_count: u32,
    pub reputation: u8,
    pub timestamp: i64,
}

// ============================================================================
// Endorsement Events
// ============================================================================

#[event]
pub struct SkillEndorsed {
    pub endorser: Pubkey,
    pub target: Pubkey,
    pub skill: String,
    /// Weight snapshot applied to the target (centi-points)
    pub weight: u16,
    /// Target reputation after recomputation
    pub reputation: u8,
    pub timestamp: i64,
}

#[event]
pub struct EndorsementRevoked {
    pub endorser: Pubkey,
    pub target: Pubkey,
    pub skill: String,
    pub reputation: u8,
    pub timestamp: i64,
}
