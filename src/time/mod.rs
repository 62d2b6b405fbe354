//! Clock and zone handling.
//!
//! - [`source`]: where "now" comes from (real clock, fixed instant, day offset)
//! - [`zone`]: reading instants on another zone's wall clock

pub mod source;
pub mod zone;

pub use source::{FixedTimeSource, OffsetTimeSource, RealTimeSource, TimeSource};
pub use zone::{
    TimeZoneAdjuster, WallClock, ZoneAdjusted, format_offset, offset_seconds,
    wall_clock_components,
};
