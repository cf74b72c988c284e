mod manager;

pub use manager::{
    AduanConfig, ConfigFile, ConfigManager, ResolveOptions, ResolvedConfig, resolve_config,
    validate_endpoint,
};
