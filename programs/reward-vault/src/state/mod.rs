pub mod vault_config;

pub use vault_config::*;
