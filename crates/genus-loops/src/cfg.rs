//! Fixed constants (internal policy).
//!
//! Policy
//! - The edge-parameter window keeps on-edge positions away from polygon
//!   corners, where two sides (and possibly two edges) meet.
//! - Values are constants rather than runtime configuration; presentation
//!   layers clamp into the window with `EdgeParam::clamped`.

/// Lower bound of an on-edge parameter: `PARAM_MIN_NUM / PARAM_DEN`.
pub const PARAM_MIN_NUM: i64 = 1;
/// Upper bound of an on-edge parameter: `PARAM_MAX_NUM / PARAM_DEN`.
pub const PARAM_MAX_NUM: i64 = 99;
pub const PARAM_DEN: i64 = 100;

/// Largest genus accepted by `FundamentalPolygon::new` (1024 sides).
pub const MAX_GENUS: usize = 256;

/// Genus used when a caller does not pick one.
pub const DEFAULT_GENUS: usize = 2;
