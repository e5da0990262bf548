use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown body '{0}' (run `vertical_launch bodies` for the list)")]
    UnknownBody(String),

    #[error("plot error: {0}")]
    Plot(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
