/// PDA seeds
pub const VAULT_CONFIG_SEED: &[u8] = b"vault_config";

/// Allow-list capacity, per list
pub const MAX_ALLOWED_CALLERS: usize = 16;
pub const MAX_ALLOWED_ASSETS: usize = 16;

/// Current layout version of `VaultConfig`
pub const VAULT_VERSION: u8 = 1;
