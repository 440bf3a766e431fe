use thiserror::Error;

pub type RulerResult<T> = Result<T, RulerError>;

#[derive(Debug, Error)]
pub enum RulerError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("render backend failure: {0}")]
    Backend(String),
}
