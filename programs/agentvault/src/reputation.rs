//! Reputation engine.
//!
//! ```text
//! reputation = clamp(0, 100,
//!     offset + base*0.3 + endorsement*0.4 + activity*0.2 + time*0.1 - penalties)
//! ```
//!
//! All arithmetic is integer and carried in centi-points so every node
//! computes the same value. `offset` is the share of `base` not covered by its
//! 0.3 weight, which anchors a profile without any signal at exactly `base`.
//!
//! Endorser weight is taken from the endorser's *stored* reputation and frozen
//! onto the endorsement record. Scoring never recurses into other profiles, so
//! it is O(1) per update and cycle-safe; the price is that weights reflect the
//! endorser's standing at endorsement time.

use crate::constants::*;

const MAX_SCORE: i64 = MAX_REPUTATION as i64 * CENTI;

/// Everything the score depends on, as stored on a profile plus the clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReputationInputs {
    /// Sum of live endorsement weight snapshots (centi-points)
    pub endorsement_weight: u64,
    /// Owner-signed profile transactions after registration
    pub activity_count: u64,
    pub registered_at: i64,
    pub now: i64,
    /// Oracle-supplied penalty inputs
    pub slash_count: u32,
    pub reported_issue_count: u32,
}

/// Weight an endorsement carries, from the endorser's cached reputation.
pub fn endorser_weight(endorser_reputation: u8) -> u16 {
    let reputation = endorser_reputation.min(MAX_REPUTATION) as u16;
    reputation * CENTI as u16 / ENDORSER_WEIGHT_DIVISOR
}

pub fn endorsement_score(total_weight: u64) -> i64 {
    total_weight.min(MAX_SCORE as u64) as i64
}

/// `min(100, 10 * log10(activity_count + 1))` in centi-points.
///
/// Integer log10: the decade contributes 10 points each, the leading digit is
/// resolved through a mantissa table.
pub fn activity_score(activity_count: u64) -> i64 {
    let x = activity_count.saturating_add(1);
    let decade = x.ilog10();
    let leading = x / 10u64.pow(decade);

    let score = decade as i64 * 10 * CENTI + LOG10_MANTISSA[leading as usize];
    score.min(MAX_SCORE)
}

/// `min(100, 0.5 * whole_days_since_registration)` in centi-points.
pub fn time_score(registered_at: i64, now: i64) -> i64 {
    let elapsed = now.saturating_sub(registered_at).max(0);
    let days = elapsed / SECONDS_PER_DAY;
    days.saturating_mul(TIME_SCORE_PER_DAY).min(MAX_SCORE)
}

pub fn penalty_points(slash_count: u32, reported_issue_count: u32) -> i64 {
    (slash_count as i64 + reported_issue_count as i64) * CENTI
}

/// Compute the 0-100 reputation score.
pub fn compute(inputs: &ReputationInputs) -> u8 {
    let base = BASE_REPUTATION as i64 * CENTI;
    let offset = base * (100 - BASE_WEIGHT_PCT) / 100;

    let weighted = base * BASE_WEIGHT_PCT
        + endorsement_score(inputs.endorsement_weight) * ENDORSEMENT_WEIGHT_PCT
        + activity_score(inputs.activity_count) * ACTIVITY_WEIGHT_PCT
        + time_score(inputs.registered_at, inputs.now) * TIME_WEIGHT_PCT;

    let score = offset + weighted / 100
        - penalty_points(inputs.slash_count, inputs.reported_issue_count);

    (score.clamp(0, MAX_SCORE) / CENTI) as u8
}
