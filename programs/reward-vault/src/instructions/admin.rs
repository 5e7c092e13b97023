use anchor_lang::prelude::*;

use crate::{
    constants::*,
    errors::VaultError,
    events::VaultAdminTransferred,
    guard,
    state::VaultConfig,
};

#[derive(Accounts)]
pub struct VaultAdmin<'info> {
    #[account(
        mut,
        seeds = [VAULT_CONFIG_SEED],
        bump = vault_config.bump
    )]
    pub vault_config: Account<'info, VaultConfig>,

    pub admin: Signer<'info>,
}

impl<'info> VaultAdmin<'info> {
    fn update_callers(&mut self, callers: &[Pubkey], allowed: bool) -> Result<()> {
        self.vault_config.require_admin(&self.admin.key())?;
        self.vault_config.set_callers_allowed(callers, allowed)
    }

    fn update_assets(&mut self, assets: &[Pubkey], allowed: bool) -> Result<()> {
        self.vault_config.require_admin(&self.admin.key())?;
        self.vault_config.set_assets_allowed(assets, allowed)
    }

    fn hand_over(&mut self, new_admin: Pubkey) -> Result<()> {
        self.vault_config.require_admin(&self.admin.key())?;
        require!(new_admin != Pubkey::default(), VaultError::InvalidAddress);

        let previous_admin = self.vault_config.admin;
        self.vault_config.admin = new_admin;

        emit!(VaultAdminTransferred {
            previous_admin,
            new_admin,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }
}

/// Adds (`allowed = true`) or removes ledgers that may call `disburse`
pub fn set_caller_allowed(ctx: Context<VaultAdmin>, callers: Vec<Pubkey>, allowed: bool) -> Result<()> {
    let accounts = ctx.accounts;
    guard::acquire(&mut accounts.vault_config)?;
    let result = accounts.update_callers(&callers, allowed);
    accounts.vault_config.leave();
    result?;

    msg!("caller allow-list updated: {} entries, allowed={}", callers.len(), allowed);
    Ok(())
}

/// Adds or removes mints the vault may release
pub fn set_asset_allowed(ctx: Context<VaultAdmin>, assets: Vec<Pubkey>, allowed: bool) -> Result<()> {
    let accounts = ctx.accounts;
    guard::acquire(&mut accounts.vault_config)?;
    let result = accounts.update_assets(&assets, allowed);
    accounts.vault_config.leave();
    result?;

    msg!("asset allow-list updated: {} entries, allowed={}", assets.len(), allowed);
    Ok(())
}

pub fn transfer_vault_admin(ctx: Context<VaultAdmin>, new_admin: Pubkey) -> Result<()> {
    let accounts = ctx.accounts;
    guard::acquire(&mut accounts.vault_config)?;
    let result = accounts.hand_over(new_admin);
    accounts.vault_config.leave();
    result
}
