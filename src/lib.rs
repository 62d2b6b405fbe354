//! # Daylight Library
//!
//! Library behind the `daylight` binary: solar phase times, daylight spans
//! with polar fallbacks, and day-over-day comparisons for any location.
//!
//! This library exists to enable testing of the calculation internals and
//! provide clean separation between CLI dispatch (main.rs) and the domain.
//!
//! ## Architecture
//!
//! The library is organized into several layers:
//!
//! - **Inputs**: `geo` validates coordinates and pins a calendar day to a
//!   location and zone ([`SolarDay`])
//! - **Calculation**: `solar` computes the eight horizon crossings of a day,
//!   `daylight` resolves them into a single [`DaylightInterval`]
//! - **Comparison**: `comparison` measures and describes the change in
//!   daylight between two days
//! - **Composition**: `almanac` bundles one day's results, `solstice` finds
//!   the surrounding solstices
//! - **Time**: `time` holds the injectable clock and the device-zone
//!   display adjustment
//! - **CLI**: `args`, `commands` and `config` wire everything to the command
//!   line and the TOML configuration
//! - **Infrastructure**: `logger`, `constants` and `error`

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod almanac;
pub mod args;
pub mod commands;
pub mod comparison;
pub mod config;
pub mod constants;
pub mod daylight;
pub mod error;
pub mod geo;
pub mod solar;
pub mod solstice;
pub mod time;

pub use almanac::Almanac;
pub use comparison::{DayLabel, DaylightComparison, compare, describe, humanize_duration};
pub use daylight::{DaylightInterval, resolve};
pub use error::{DaylightError, Result};
pub use geo::{Coordinate, SolarDay};
pub use solar::{Phase, SolarEvent, SolarEvents};
