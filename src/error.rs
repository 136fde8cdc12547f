use thiserror::Error;

/// A malformed render request. Always raised before any output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid alignment {0:?} (expected left, center or right)")]
    Alignment(String),
    #[error("padding must be at least 1, got {0}")]
    Padding(usize),
    #[error("expected exactly one character, got {0:?}")]
    NotSingleChar(String),
    #[error("property/value tokens must come in pairs, got {0} tokens")]
    OddPairCount(usize),
    #[error("line width not given and terminal size unavailable")]
    WidthUnavailable,
    #[error("line width must be positive")]
    ZeroWidth,
    #[error("invalid {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("terminal width too small, minimum is {required}")]
    InsufficientWidth { required: usize },
    #[error("unknown heading style: {0}")]
    UnknownStyle(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl LayoutError {
    /// Minimum line width the failed render would have needed, if that was the cause.
    pub fn required_width(&self) -> Option<usize> {
        match self {
            LayoutError::InsufficientWidth { required } => Some(*required),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LayoutError>;
