use anchor_lang::prelude::*;

use crate::{
    constants::*,
    events::VaultInitialized,
    state::VaultConfig,
};

#[derive(Accounts)]
pub struct InitializeVault<'info> {
    #[account(
        init,
        payer = admin,
        space = VaultConfig::LEN,
        seeds = [VAULT_CONFIG_SEED],
        bump
    )]
    pub vault_config: Account<'info, VaultConfig>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_vault(ctx: Context<InitializeVault>) -> Result<()> {
    let vault_config = &mut ctx.accounts.vault_config;

    vault_config.admin = ctx.accounts.admin.key();
    vault_config.allowed_callers = Vec::new();
    vault_config.allowed_assets = Vec::new();
    vault_config.busy = false;
    vault_config.version = VAULT_VERSION;
    vault_config.bump = ctx.bumps.vault_config;

    emit!(VaultInitialized {
        vault_config: vault_config.key(),
        admin: vault_config.admin,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
