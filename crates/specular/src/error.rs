use std::io;
use std::panic::Location;

use thiserror::Error;

/// Failures surfaced while encoding.
///
/// Shape errors (an undescribed type, a map keyed by something that is not
/// string-like) are rejected by the compiler when the encoder is bound to
/// the type and never reach this enum.
#[derive(Debug, Error)]
pub enum Error {
    /// A numeric value could not be converted to text.
    #[error("{message} (at {location})")]
    NumberFormat {
        message: String,
        location: &'static Location<'static>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    #[track_caller]
    pub(crate) fn number(message: impl Into<String>) -> Self {
        Error::NumberFormat {
            message: message.into(),
            location: Location::caller(),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
