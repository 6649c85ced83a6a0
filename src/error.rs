use thiserror::Error;

pub type CalendarResult<T> = Result<T, CalendarError>;

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("degenerate orbit for body `{body}`: orbital period must be finite and non-zero")]
    DegenerateOrbit { body: String },

    #[error("unknown body: {0}")]
    UnknownBody(String),

    #[error("invalid zoom level index: {0}")]
    InvalidZoomLevel(u8),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
