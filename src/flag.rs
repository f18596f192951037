use crate::descriptor::{ConfigValue, ValueKind};
use crate::error::ConfigError;
use crate::loader::{split_list, EXPECTED_INT};
use crate::store::ConfigStore;

/// A parsed command-line flag, reduced to its name and rendered value.
///
/// Only these two pieces are consumed when binding a flag over a loaded
/// entry, so any argument parser can feed this type.
#[derive(Debug, Clone, PartialEq)]
pub struct Flag {
    pub name: String,
    pub value: String,
}

impl Flag {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl From<(&str, &str)> for Flag {
    fn from((name, value): (&str, &str)) -> Self {
        Self::new(name, value)
    }
}

impl ConfigStore {
    /// Override the loaded entry `key` with a command-line flag.
    ///
    /// A `None` flag is a no-op. The flag's rendered value is re-parsed
    /// according to the entry's declared kind; `provided` is left
    /// untouched. Returns [`ConfigError::UnknownKey`] when no partition
    /// contains `key`.
    pub fn bind_flag(&mut self, key: &str, flag: Option<&Flag>) -> Result<(), ConfigError> {
        let Some(flag) = flag else {
            return Ok(());
        };

        if let Some(descriptor) = self.descriptor_mut(ValueKind::String, key) {
            descriptor.value = ConfigValue::String(flag.value.clone());
            return Ok(());
        }

        if let Some(descriptor) = self.descriptor_mut(ValueKind::StringList, key) {
            descriptor.value = ConfigValue::StringList(split_list(&flag.value));
            return Ok(());
        }

        if let Some(descriptor) = self.descriptor_mut(ValueKind::Bool, key) {
            descriptor.value = ConfigValue::Bool(flag.value.eq_ignore_ascii_case("true"));
            return Ok(());
        }

        if let Some(descriptor) = self.descriptor_mut(ValueKind::Int, key) {
            let number: i64 = flag.value.parse().map_err(|_| ConfigError::InvalidFormat {
                key: key.to_string(),
                value: flag.value.clone(),
                expected: EXPECTED_INT,
            })?;
            descriptor.value = ConfigValue::Int(number);
            return Ok(());
        }

        Err(ConfigError::UnknownKey {
            key: key.to_string(),
            kind: None,
        })
    }
}
