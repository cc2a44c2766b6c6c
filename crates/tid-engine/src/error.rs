use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Engine stopped: {message} {location}")]
    Stopped {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
