// ============================================================================
// Profile Constants
// ============================================================================

/// Maximum length for agent name (bytes)
pub const MAX_NAME_LENGTH: usize = 32;

/// Maximum length for metadata URI (bytes)
pub const MAX_URI_LENGTH: usize = 200;

/// Maximum number of declared skills per profile
pub const MAX_SKILLS: usize = 10;

/// Minimum number of declared skills per profile
pub const MIN_SKILLS: usize = 1;

/// Maximum length for a single skill name (bytes)
pub const MAX_SKILL_LENGTH: usize = 32;

// ============================================================================
// Reputation Constants
// ============================================================================

/// Reputation assigned at registration and the `base` input of the score
pub const BASE_REPUTATION: u8 = 50;

/// Upper bound of the reputation score and of every score component (points)
pub const MAX_REPUTATION: u8 = 100;

/// Fixed-point scale used by the reputation engine (1 point = 100 centi-points)
pub const CENTI: i64 = 100;

/// Component weights in percent. They sum to 100.
pub const BASE_WEIGHT_PCT: i64 = 30;
pub const ENDORSEMENT_WEIGHT_PCT: i64 = 40;
pub const ACTIVITY_WEIGHT_PCT: i64 = 20;
pub const TIME_WEIGHT_PCT: i64 = 10;

/// An endorser contributes `reputation / ENDORSER_WEIGHT_DIVISOR` points to the
/// endorsement component, so ten endorsers at full standing saturate it.
pub const ENDORSER_WEIGHT_DIVISOR: u16 = 10;

/// Time component gained per whole day since registration (centi-points).
pub const TIME_SCORE_PER_DAY: i64 = 50;

pub const SECONDS_PER_DAY: i64 = 86_400;

/// `10 * log10(d)` in centi-points for leading digit `d` (index 0 unused).
pub const LOG10_MANTISSA: [i64; 10] = [0, 0, 301, 477, 602, 699, 778, 845, 903, 954];
