use anchor_lang::prelude::*;

use crate::address::{skill_seed, AGENT_SEED, ENDORSEMENT_SEED, REGISTRY_STATS_SEED};
use crate::errors::RegistryError;
use crate::events::SkillEndorsed;
use crate::reputation::endorser_weight;
use crate::state::{load_record, store_record, AgentProfile, Endorsement, RegistryStats};

#[derive(Accounts)]
#[instruction(skill: String)]
pub struct EndorseSkill<'info> {
    /// Endorsing identity (must sign), pays for the endorsement record
    #[account(mut)]
    pub endorser: Signer<'info>,

    /// Endorser's profile - its cached reputation sets the endorsement weight
    /// and its `last_active` is bumped
    /// CHECK: Seeds verified; existence and layout validated in the handler
    #[account(
        mut,
        seeds = [AGENT_SEED, endorser.key().as_ref()],
        bump
    )]
    pub endorser_profile: UncheckedAccount<'info>,

    /// Identity key of the endorsed agent
    /// CHECK: Used only as a seed and compared against the endorser
    #[account(
        constraint = target.key() != endorser.key() @ RegistryError::SelfEndorsement
    )]
    pub target: UncheckedAccount<'info>,

    /// Target's profile
    /// CHECK: Seeds verified; existence and layout validated in the handler
    #[account(
        mut,
        seeds = [AGENT_SEED, target.key().as_ref()],
        bump
    )]
    pub target_profile: UncheckedAccount<'info>,

    /// Endorsement PDA - its address is the (endorser, target, skill)
    /// uniqueness check. `init_if_needed` so that an occupied address surfaces
    /// as DuplicateEndorsement.
    #[account(
        init_if_needed,
        payer = endorser,
        space = Endorsement::SIZE,
        seeds = [
            ENDORSEMENT_SEED,
            endorser.key().as_ref(),
            target.key().as_ref(),
            skill_seed(&skill).as_ref()
        ],
        bump
    )]
    pub endorsement: Account<'info, Endorsement>,

    /// Registry stats
    #[account(
        mut,
        seeds = [REGISTRY_STATS_SEED],
        bump = registry_stats.bump
    )]
    pub registry_stats: Account<'info, RegistryStats>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<EndorseSkill>, skill: String) -> Result<()> {
    // === PHASE 1: Validate ===
    let target_info = ctx.accounts.target_profile.to_account_info();
    let mut target: AgentProfile = load_record(&target_info, RegistryError::TargetNotFound)?;

    let endorser_info = ctx.accounts.endorser_profile.to_account_info();
    let mut endorser: AgentProfile = load_record(&endorser_info, RegistryError::NotFound)?;

    require!(
        target.declares_skill(&skill),
        RegistryError::SkillNotDeclared
    );
    require!(
        !ctx.accounts.endorsement.is_initialized(),
        RegistryError::DuplicateEndorsement
    );

    // === PHASE 2: Write state ===
    let clock = Clock::get()?;
    let weight = endorser_weight(endorser.reputation);
    let reputation_before = target.reputation;

    target.apply_endorsement(weight, clock.unix_timestamp)?;
    endorser.touch(clock.unix_timestamp);
    ctx.accounts.registry_stats.record_endorsement()?;

    let endorsement = &mut ctx.accounts.endorsement;
    endorsement.endorser = ctx.accounts.endorser.key();
    endorsement.target = target.wallet;
    endorsement.skill_hash = skill_seed(&skill);
    endorsement.skill = skill.clone();
    endorsement.weight = weight;
    endorsement.reputation_before = reputation_before;
    endorsement.reputation_after = target.reputation;
    endorsement.timestamp = clock.unix_timestamp;
    endorsement.bump = ctx.bumps.endorsement;

    store_record(&target, &target_info)?;
    store_record(&endorser, &endorser_info)?;

    emit!(SkillEndorsed {
        endorser: ctx.accounts.endorser.key(),
        target: target.wallet,
        skill,
        weight,
        reputation: target.reputation,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
