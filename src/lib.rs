pub mod declare;
pub mod descriptor;
pub mod error;
pub mod flag;
pub mod loader;
pub mod macros;
pub mod report;
pub mod store;

// Re-export main types
pub use declare::{boolean, integer, string, string_list, Declaration};
pub use descriptor::{ConfigValue, Descriptor, ValueKind};
pub use error::ConfigError;
pub use flag::Flag;
pub use loader::LoadOptions;
pub use store::ConfigStore;
