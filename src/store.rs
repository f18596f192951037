use std::collections::HashMap;

use crate::declare::Declaration;
use crate::descriptor::{ConfigValue, Descriptor, ValueKind};
use crate::error::ConfigError;
use crate::loader::{self, LoadOptions};

/// The resolved configuration registry, partitioned by declared kind.
///
/// A store is produced by a successful [`load`](Self::load) and owns its
/// descriptors; re-loading builds a new store rather than merging into an
/// old one. The store has no interior mutability, so sharing it across
/// threads is the caller's choice of wrapper.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    strings: HashMap<String, Descriptor>,
    string_lists: HashMap<String, Descriptor>,
    bools: HashMap<String, Descriptor>,
    ints: HashMap<String, Descriptor>,
}

impl ConfigStore {
    /// Resolve `declarations` against the process environment, attempting
    /// to merge the conventional `./.env` file first.
    pub fn load(declarations: Vec<Declaration>) -> Result<Self, ConfigError> {
        Self::load_with_options(declarations, &LoadOptions::default())
    }

    /// Resolve `declarations` against the process environment after merging
    /// the environment files named in `options`.
    pub fn load_with_options(
        declarations: Vec<Declaration>,
        options: &LoadOptions,
    ) -> Result<Self, ConfigError> {
        loader::load(declarations, options)
    }

    pub(crate) fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, descriptor: Descriptor) {
        self.partition_mut(descriptor.kind)
            .insert(descriptor.key.clone(), descriptor);
    }

    fn partition(&self, kind: ValueKind) -> &HashMap<String, Descriptor> {
        match kind {
            ValueKind::String => &self.strings,
            ValueKind::StringList => &self.string_lists,
            ValueKind::Bool => &self.bools,
            ValueKind::Int => &self.ints,
        }
    }

    fn partition_mut(&mut self, kind: ValueKind) -> &mut HashMap<String, Descriptor> {
        match kind {
            ValueKind::String => &mut self.strings,
            ValueKind::StringList => &mut self.string_lists,
            ValueKind::Bool => &mut self.bools,
            ValueKind::Int => &mut self.ints,
        }
    }

    /// Look up the resolved descriptor for `key` within one kind partition.
    pub fn descriptor(&self, kind: ValueKind, key: &str) -> Option<&Descriptor> {
        self.partition(kind).get(key)
    }

    pub(crate) fn descriptor_mut(&mut self, kind: ValueKind, key: &str) -> Option<&mut Descriptor> {
        self.partition_mut(kind).get_mut(key)
    }

    /// All resolved descriptors, sorted by variable name ascending.
    pub fn snapshot(&self) -> Vec<&Descriptor> {
        let mut all: Vec<&Descriptor> = self
            .strings
            .values()
            .chain(self.string_lists.values())
            .chain(self.bools.values())
            .chain(self.ints.values())
            .collect();
        all.sort_by(|a, b| a.key.cmp(&b.key));
        all
    }

    pub fn len(&self) -> usize {
        self.strings.len() + self.string_lists.len() + self.bools.len() + self.ints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The resolved string value for `key`.
    ///
    /// # Panics
    /// Panics if `key` was never declared as a string. Use
    /// [`try_string`](Self::try_string) to handle the error instead.
    pub fn string(&self, key: &str) -> &str {
        match self.try_string(key) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }

    pub fn try_string(&self, key: &str) -> Result<&str, ConfigError> {
        match self.strings.get(key) {
            Some(Descriptor {
                value: ConfigValue::String(value),
                ..
            }) => Ok(value.as_str()),
            _ => Err(ConfigError::UnknownKey {
                key: key.to_string(),
                kind: Some(ValueKind::String),
            }),
        }
    }

    /// The resolved string-list value for `key`.
    ///
    /// # Panics
    /// Panics if `key` was never declared as a string list. Use
    /// [`try_string_list`](Self::try_string_list) to handle the error instead.
    pub fn string_list(&self, key: &str) -> &[String] {
        match self.try_string_list(key) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }

    pub fn try_string_list(&self, key: &str) -> Result<&[String], ConfigError> {
        match self.string_lists.get(key) {
            Some(Descriptor {
                value: ConfigValue::StringList(values),
                ..
            }) => Ok(values.as_slice()),
            _ => Err(ConfigError::UnknownKey {
                key: key.to_string(),
                kind: Some(ValueKind::StringList),
            }),
        }
    }

    /// The resolved boolean value for `key`.
    ///
    /// # Panics
    /// Panics if `key` was never declared as a boolean. Use
    /// [`try_boolean`](Self::try_boolean) to handle the error instead.
    pub fn boolean(&self, key: &str) -> bool {
        match self.try_boolean(key) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }

    pub fn try_boolean(&self, key: &str) -> Result<bool, ConfigError> {
        match self.bools.get(key) {
            Some(Descriptor {
                value: ConfigValue::Bool(value),
                ..
            }) => Ok(*value),
            _ => Err(ConfigError::UnknownKey {
                key: key.to_string(),
                kind: Some(ValueKind::Bool),
            }),
        }
    }

    /// The resolved integer value for `key`.
    ///
    /// # Panics
    /// Panics if `key` was never declared as an integer. Use
    /// [`try_integer`](Self::try_integer) to handle the error instead.
    pub fn integer(&self, key: &str) -> i64 {
        match self.try_integer(key) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }

    pub fn try_integer(&self, key: &str) -> Result<i64, ConfigError> {
        match self.ints.get(key) {
            Some(Descriptor {
                value: ConfigValue::Int(value),
                ..
            }) => Ok(*value),
            _ => Err(ConfigError::UnknownKey {
                key: key.to_string(),
                kind: Some(ValueKind::Int),
            }),
        }
    }

    /// Override the string value for `key`, leaving `provided` untouched.
    pub fn set_string(&mut self, key: &str, value: impl Into<String>) -> Result<(), ConfigError> {
        match self.strings.get_mut(key) {
            Some(descriptor) => {
                descriptor.value = ConfigValue::String(value.into());
                Ok(())
            }
            None => Err(ConfigError::UnknownKey {
                key: key.to_string(),
                kind: Some(ValueKind::String),
            }),
        }
    }

    /// Override the string-list value for `key`, leaving `provided` untouched.
    pub fn set_string_list(&mut self, key: &str, value: Vec<String>) -> Result<(), ConfigError> {
        match self.string_lists.get_mut(key) {
            Some(descriptor) => {
                descriptor.value = ConfigValue::StringList(value);
                Ok(())
            }
            None => Err(ConfigError::UnknownKey {
                key: key.to_string(),
                kind: Some(ValueKind::StringList),
            }),
        }
    }

    /// Override the boolean value for `key`, leaving `provided` untouched.
    pub fn set_boolean(&mut self, key: &str, value: bool) -> Result<(), ConfigError> {
        match self.bools.get_mut(key) {
            Some(descriptor) => {
                descriptor.value = ConfigValue::Bool(value);
                Ok(())
            }
            None => Err(ConfigError::UnknownKey {
                key: key.to_string(),
                kind: Some(ValueKind::Bool),
            }),
        }
    }

    /// Override the integer value for `key`, leaving `provided` untouched.
    pub fn set_integer(&mut self, key: &str, value: i64) -> Result<(), ConfigError> {
        match self.ints.get_mut(key) {
            Some(descriptor) => {
                descriptor.value = ConfigValue::Int(value);
                Ok(())
            }
            None => Err(ConfigError::UnknownKey {
                key: key.to_string(),
                kind: Some(ValueKind::Int),
            }),
        }
    }
}
