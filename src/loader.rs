use std::env;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::declare::{
    BoolDeclaration, Declaration, IntDeclaration, StringDeclaration, StringListDeclaration,
};
use crate::descriptor::{ConfigValue, Descriptor, ValueKind};
use crate::error::ConfigError;
use crate::store::ConfigStore;

pub(crate) const EXPECTED_BOOL: &str = "'true' or 'false'";
pub(crate) const EXPECTED_INT: &str = "a base-10 integer";

/// Options for a load cycle.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Environment files merged into the process environment before
    /// resolution, in order. Already-set variables are never overridden.
    /// When empty, the conventional `./.env` is attempted instead.
    pub env_files: Vec<PathBuf>,
}

/// Resolve every declaration against the process environment.
///
/// Resolution is buffered into a fresh store that is only returned when
/// every entry resolved; the first failure aborts the load and nothing is
/// published.
pub(crate) fn load(
    declarations: Vec<Declaration>,
    options: &LoadOptions,
) -> Result<ConfigStore, ConfigError> {
    merge_env_files(&options.env_files);

    let mut store = ConfigStore::empty();
    for declaration in declarations {
        store.insert(resolve(declaration)?);
    }
    Ok(store)
}

fn merge_env_files(env_files: &[PathBuf]) {
    if env_files.is_empty() {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "merged environment file"),
            Err(_) => warn!("no .env file found, relying on the process environment"),
        }
        return;
    }

    for file in env_files {
        match dotenvy::from_filename(file) {
            Ok(path) => debug!(path = %path.display(), "merged environment file"),
            Err(error) => {
                warn!(path = %file.display(), %error, "skipping unreadable environment file");
            }
        }
    }
}

fn resolve(declaration: Declaration) -> Result<Descriptor, ConfigError> {
    let raw = env::var(declaration.key()).ok();
    match declaration {
        Declaration::String(decl) => resolve_string(decl, raw),
        Declaration::StringList(decl) => resolve_string_list(decl, raw),
        Declaration::Bool(decl) => resolve_bool(decl, raw),
        Declaration::Int(decl) => resolve_int(decl, raw),
    }
}

fn resolve_string(
    decl: StringDeclaration,
    raw: Option<String>,
) -> Result<Descriptor, ConfigError> {
    let StringDeclaration {
        key,
        default,
        not_empty,
        sensitive,
    } = decl;

    let Some(value) = raw else {
        let Some(fallback) = default else {
            return Err(ConfigError::MissingVariable { key });
        };
        return Ok(Descriptor {
            key,
            kind: ValueKind::String,
            default: Some(ConfigValue::String(fallback.clone())),
            not_empty,
            sensitive,
            provided: false,
            value: ConfigValue::String(fallback),
        });
    };

    if not_empty && value.is_empty() {
        return Err(ConfigError::EmptyValue { key });
    }

    Ok(Descriptor {
        key,
        kind: ValueKind::String,
        default: default.map(ConfigValue::String),
        not_empty,
        sensitive,
        provided: true,
        value: ConfigValue::String(value),
    })
}

fn resolve_string_list(
    decl: StringListDeclaration,
    raw: Option<String>,
) -> Result<Descriptor, ConfigError> {
    let StringListDeclaration {
        key,
        default,
        not_empty,
        sensitive,
    } = decl;

    let Some(value) = raw else {
        let Some(fallback) = default else {
            return Err(ConfigError::MissingVariable { key });
        };
        return Ok(Descriptor {
            key,
            kind: ValueKind::StringList,
            default: Some(ConfigValue::StringList(fallback.clone())),
            not_empty,
            sensitive,
            provided: false,
            value: ConfigValue::StringList(fallback),
        });
    };

    let items = split_list(&value);
    if not_empty && items.is_empty() {
        return Err(ConfigError::EmptyValue { key });
    }

    Ok(Descriptor {
        key,
        kind: ValueKind::StringList,
        default: default.map(ConfigValue::StringList),
        not_empty,
        sensitive,
        provided: true,
        value: ConfigValue::StringList(items),
    })
}

fn resolve_bool(decl: BoolDeclaration, raw: Option<String>) -> Result<Descriptor, ConfigError> {
    let BoolDeclaration {
        key,
        default,
        sensitive,
    } = decl;

    let Some(value) = raw else {
        let Some(fallback) = default else {
            return Err(ConfigError::MissingVariable { key });
        };
        return Ok(Descriptor {
            key,
            kind: ValueKind::Bool,
            default: Some(ConfigValue::Bool(fallback)),
            not_empty: false,
            sensitive,
            provided: false,
            value: ConfigValue::Bool(fallback),
        });
    };

    let parsed = if value.eq_ignore_ascii_case("true") {
        true
    } else if value.eq_ignore_ascii_case("false") {
        false
    } else {
        return Err(ConfigError::InvalidFormat {
            key,
            value,
            expected: EXPECTED_BOOL,
        });
    };

    Ok(Descriptor {
        key,
        kind: ValueKind::Bool,
        default: default.map(ConfigValue::Bool),
        not_empty: false,
        sensitive,
        provided: true,
        value: ConfigValue::Bool(parsed),
    })
}

fn resolve_int(decl: IntDeclaration, raw: Option<String>) -> Result<Descriptor, ConfigError> {
    let IntDeclaration {
        key,
        default,
        sensitive,
    } = decl;

    let Some(value) = raw else {
        let Some(fallback) = default else {
            return Err(ConfigError::MissingVariable { key });
        };
        return Ok(Descriptor {
            key,
            kind: ValueKind::Int,
            default: Some(ConfigValue::Int(fallback)),
            not_empty: false,
            sensitive,
            provided: false,
            value: ConfigValue::Int(fallback),
        });
    };

    let Ok(number) = value.parse::<i64>() else {
        return Err(ConfigError::InvalidFormat {
            key,
            value,
            expected: EXPECTED_INT,
        });
    };

    Ok(Descriptor {
        key,
        kind: ValueKind::Int,
        default: default.map(ConfigValue::Int),
        not_empty: false,
        sensitive,
        provided: true,
        value: ConfigValue::Int(number),
    })
}

/// Split a raw comma-separated value: trim each element, drop empties.
pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
