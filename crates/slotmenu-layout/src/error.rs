#![forbid(unsafe_code)]

//! Error types.

use std::fmt;

use crate::MenuKind;

/// Invalid parameters rejected by [`MenuConfigurationBuilder::build`](crate::MenuConfigurationBuilder::build).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigurationError {
    /// Slot margin below zero.
    NegativeMargin(f32),
    /// Slot margin is NaN or infinite.
    NonFiniteMargin(f32),
    /// Slot limit of zero.
    ZeroSlotLimit,
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeMargin(margin) => {
                write!(f, "slot margin must be >= 0, got {margin}")
            }
            Self::NonFiniteMargin(margin) => {
                write!(f, "slot margin must be finite, got {margin}")
            }
            Self::ZeroSlotLimit => write!(f, "slot limit must be >= 1"),
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Failure signal from a [`Menu`](crate::Menu) operation.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuError {
    /// The configuration could not be built.
    Configuration(ConfigurationError),
    /// Layout or navigation queried before any options were filled.
    Unfilled,
    /// The operation is not available for this menu's configuration.
    UnsupportedOperation {
        /// Name of the rejected operation.
        operation: &'static str,
    },
    /// The option list does not match what the menu kind requires.
    InvalidOptionCount {
        /// Kind that constrains the count.
        kind: MenuKind,
        /// Count the kind requires.
        expected: usize,
        /// Count that was supplied.
        actual: usize,
    },
    /// A slot index past the end of the filled list.
    SlotOutOfRange {
        /// Requested slot index.
        index: usize,
        /// Number of filled slots.
        len: usize,
    },
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(err) => write!(f, "invalid menu configuration: {err}"),
            Self::Unfilled => write!(f, "menu has not been filled with any options"),
            Self::UnsupportedOperation { operation } => write!(
                f,
                "{operation} is unsupported: menu was built without navigation buttons"
            ),
            Self::InvalidOptionCount {
                kind,
                expected,
                actual,
            } => write!(
                f,
                "{kind:?} menu requires exactly {expected} options, got {actual}"
            ),
            Self::SlotOutOfRange { index, len } => {
                write!(f, "slot index {index} out of range for {len} slots")
            }
        }
    }
}

impl std::error::Error for MenuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Self::Configuration(err) = self {
            return Some(err);
        }
        None
    }
}

impl From<ConfigurationError> for MenuError {
    fn from(err: ConfigurationError) -> Self {
        Self::Configuration(err)
    }
}

/// Standard result type for menu operations.
pub type Result<T> = std::result::Result<T, MenuError>;
