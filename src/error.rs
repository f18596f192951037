use colored::Colorize;
use std::fmt;

use crate::descriptor::ValueKind;

/// Errors that can occur while loading or accessing configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The variable is absent from the environment and no default was declared
    MissingVariable { key: String },
    /// The variable is present but violates a not-empty constraint
    EmptyValue { key: String },
    /// The variable is present but cannot be parsed as the declared kind
    InvalidFormat {
        key: String,
        value: String,
        expected: &'static str,
    },
    /// A getter, setter or flag binding referenced a key that was never
    /// declared; `kind` names the partition that was searched, or `None`
    /// when every partition was
    UnknownKey {
        key: String,
        kind: Option<ValueKind>,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingVariable { key } => {
                write!(
                    f,
                    "{}: is missing from the environment and has no default",
                    key.magenta().bold()
                )
            }
            ConfigError::EmptyValue { key } => {
                write!(f, "{}: must not be empty", key.magenta().bold())
            }
            ConfigError::InvalidFormat {
                key,
                value,
                expected,
            } => {
                write!(
                    f,
                    "{}: invalid value {}, expected {}",
                    key.magenta().bold(),
                    format!("'{}'", value).red(),
                    expected
                )
            }
            ConfigError::UnknownKey { key, kind } => match kind {
                Some(kind) => write!(f, "{}: not declared as {}", key.magenta().bold(), kind),
                None => write!(f, "{}: not declared", key.magenta().bold()),
            },
        }
    }
}

impl std::error::Error for ConfigError {}
