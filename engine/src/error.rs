use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MuxError {
    /// A raw id or index fell outside the range the multiplexer understands.
    #[error("invalid {what}: {value}")]
    InvalidArgument { what: &'static str, value: usize },
}

pub type Result<T> = std::result::Result<T, MuxError>;
