//! Configuration for PaperIQ
//!
//! Provider settings come from defaults tuned per vendor, overridden by
//! environment variables (optionally loaded from a `.env` file by the binary).

pub mod env_loader;
pub mod provider;

pub use env_loader::{
    default_provider, default_provider_with, load_provider_config, load_provider_config_with,
};
pub use provider::ProviderConfig;
