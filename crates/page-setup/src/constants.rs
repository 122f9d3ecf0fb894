//! Shared constants for page setup
//!
//! This module centralizes the unit conventions and the fixed limits used by
//! the geometry validator and the text scaling model.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Length units per inch (1 inch = 72 points = 72000 units)
pub const UNITS_PER_INCH: i64 = 72_000;

/// Length units per point
pub const UNITS_PER_POINT: i64 = 1_000;

/// Millimetres per inch
pub const MM_PER_INCH: f64 = 25.4;

// =============================================================================
// Geometry
// =============================================================================

/// Default tolerance when matching free-form dimensions against named sizes
/// (5 points)
pub const DEFAULT_MATCH_TOLERANCE: i64 = 5_000;

/// Smallest printable strip that must remain once margins are taken out
/// (half an inch)
pub const MIN_PRINTABLE_MARGIN: i64 = UNITS_PER_INCH / 2;

// =============================================================================
// Text Scaling
// =============================================================================

/// Standard leading: line spacing is 1.2 times the font size
pub const STANDARD_LEADING_FACTOR: f64 = 1.2;

/// The standard leading factor as an exact ratio (6/5)
pub const STANDARD_LEADING_RATIO: (i64, i64) = (6, 5);

/// Smallest base font size offered by default (1pt)
pub const DEFAULT_MIN_FONT_SIZE: i64 = UNITS_PER_POINT;

/// Largest base font size offered by default (256pt)
pub const DEFAULT_MAX_FONT_SIZE: i64 = 256 * UNITS_PER_POINT;

/// Default base font size (11pt)
pub const DEFAULT_FONT_SIZE: i64 = 11 * UNITS_PER_POINT;
