use core::fmt;
use std::io;

/// Caller-side misuse of the manipulation callback contract.
///
/// Never produced for ordinary input: unrecognized motion resolves to
/// [`GestureVerdict::None`](crate::GestureVerdict::None) instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineError {
    ContractViolation {
        state: &'static str,
        event: &'static str,
    },
    Disabled {
        event: &'static str,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContractViolation { state, event } => {
                write!(f, "`{event}` is not valid while the recognizer is {state}")
            }
            Self::Disabled { event } => {
                write!(f, "`{event}` delivered while gesture recognition is disabled")
            }
        }
    }
}

impl std::error::Error for EngineError {}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(String),
    Validation(String),
}

impl From<io::Error> for ConfigError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Parse(value.to_string())
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read gesture config: {err}"),
            Self::Parse(msg) => write!(f, "failed to parse gesture config: {msg}"),
            Self::Validation(msg) => write!(f, "invalid gesture config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(_) | Self::Validation(_) => None,
        }
    }
}
