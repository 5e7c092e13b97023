use anchor_lang::prelude::*;

use crate::state::VaultConfig;

/// Marks the vault busy and writes the flag through to account data, so an
/// invocation nested inside the current instruction sees it.
pub fn acquire(vault_config: &mut Account<VaultConfig>) -> Result<()> {
    vault_config.enter()?;
    vault_config.exit(&crate::ID)
}
