use anchor_lang::prelude::*;

#[error_code]
pub enum RegistryError {
    // ========================================================================
    // Profile Errors
    // ========================================================================
    #[msg("Agent is already registered for this wallet")]
    AlreadyRegistered,

    #[msg("Record not found")]
    NotFound,

    #[msg("Signer is not authorized for this record")]
    Unauthorized,

    #[msg("Invalid skill count (must declare 1 to 10 skills)")]
    InvalidSkillCount,

    #[msg("Invalid name (must be 1 to 32 bytes)")]
    InvalidName,

    // ========================================================================
    // Endorsement Errors
    // ========================================================================
    #[msg("Cannot endorse yourself")]
    SelfEndorsement,

    #[msg("Target agent is not registered")]
    TargetNotFound,

    #[msg("Target agent has not declared this skill")]
    SkillNotDeclared,

    #[msg("Endorsement already exists for this endorser, target and skill")]
    DuplicateEndorsement,

    #[msg("Record was modified by a concurrent write - resubmit with fresh state")]
    Conflict,

    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[msg("Metadata URI too long (max 200 bytes)")]
    InvalidMetadataUri,

    #[msg("Invalid skill name (must be 1 to 32 bytes)")]
    InvalidSkill,

    #[msg("Account address does not match its derived address")]
    InvalidRecordAddress,

    // ========================================================================
    // Registry Errors
    // ========================================================================
    #[msg("Authority is immutable (renounced)")]
    ImmutableAuthority,

    #[msg("Arithmetic overflow")]
    Overflow,
}
