//! Domain-level constants.
//!
//! These constants define the registration rules and strength policy.

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement, in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Email shape accepted at registration: `local@domain.tld`, no whitespace.
/// Domain labels are non-empty on both sides of every dot.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$";

// =============================================================================
// Password Strength
// =============================================================================

/// Highest score still classified as weak
pub const WEAK_MAX_SCORE: u8 = 1;

/// Highest score still classified as medium
pub const MEDIUM_MAX_SCORE: u8 = 3;

/// Number of independent strength criteria
pub const STRENGTH_CRITERIA_COUNT: u8 = 5;

// =============================================================================
// Identity Provider
// =============================================================================

/// Message reported by identity providers when an email is already taken
pub const PROVIDER_EMAIL_EXISTS: &str = "EMAIL_EXISTS";
