//! Display density classes, in dots per inch.
//!
//! The mobile side reports one of these buckets rather than the exact panel
//! density; the encoder uses it to scale UI content rendered into the stream.

pub const DENSITY_LOW: i32 = 120;
pub const DENSITY_MEDIUM: i32 = 160;
pub const DENSITY_TV: i32 = 213;
pub const DENSITY_HIGH: i32 = 240;
pub const DENSITY_XHIGH: i32 = 320;
pub const DENSITY_XXHIGH: i32 = 480;
pub const DENSITY_XXXHIGH: i32 = 640;

/// Density assumed by the platform when a display reports none.
pub const DENSITY_DEFAULT: i32 = DENSITY_MEDIUM;
