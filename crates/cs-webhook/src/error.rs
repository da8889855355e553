use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("Invalid signing secret: {message} {location}")]
    InvalidSecret {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid timestamp header: {value} {location}")]
    InvalidTimestamp {
        value: String,
        location: ErrorLocation,
    },

    #[error("Timestamp outside tolerance: {skew_secs}s exceeds {tolerance_secs}s {location}")]
    TimestampOutOfTolerance {
        skew_secs: i64,
        tolerance_secs: u64,
        location: ErrorLocation,
    },

    #[error("Signature mismatch {location}")]
    SignatureMismatch { location: ErrorLocation },
}

pub type Result<T> = std::result::Result<T, VerifyError>;
