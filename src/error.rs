//! Error types for the calculation API.

/// Errors raised at the boundary of the calculation API.
///
/// Solar computations themselves never fail: a phase the sun does not reach is
/// an absent event, not an error. Only malformed caller input is rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DaylightError {
    /// Latitude outside [-90, 90] or longitude outside [-180, 180].
    #[error(
        "invalid coordinate ({latitude}, {longitude}): latitude must be within [-90, 90] and longitude within [-180, 180]"
    )]
    InvalidCoordinate {
        /// The rejected latitude in degrees.
        latitude: f64,
        /// The rejected longitude in degrees.
        longitude: f64,
    },

    /// A time zone identifier that is not in the IANA database.
    #[error("unknown time zone identifier '{0}'")]
    UnknownTimeZone(String),
}

pub type Result<T> = std::result::Result<T, DaylightError>;
