//! Error types for win detection.

/// Error returned when a caller breaks the win-checking contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum WinError {
    /// The marker byte is neither `X` nor `O` (in either case).
    #[display("player must be X or O, not {:?}", char::from(*_0))]
    InvalidMarker(u8),
}

impl std::error::Error for WinError {}
