use anchor_lang::prelude::*;

pub mod constants;
pub mod custody;
pub mod errors;
pub mod events;
pub mod guard;
pub mod instructions;
pub mod state;

pub use instructions::*;

declare_id!("RwdVau1t11111111111111111111111111111111111");

#[program]
pub mod reward_vault {
    use super::*;

    /// Create the vault configuration with the signer as admin
    pub fn initialize_vault(ctx: Context<InitializeVault>) -> Result<()> {
        instructions::initialize_vault(ctx)
    }

    /// Deposit an allow-listed reward asset into custody (permissionless)
    pub fn fund_vault(ctx: Context<FundVault>, amount: u64) -> Result<()> {
        instructions::fund_vault(ctx, amount)
    }

    /// Release `amount` of an allow-listed asset to an allow-listed caller
    pub fn disburse(ctx: Context<Disburse>, amount: u64) -> Result<()> {
        instructions::disburse(ctx, amount)
    }

    /// Emergency drain to the admin; `take_all` empties the custody account
    pub fn admin_withdraw(ctx: Context<AdminWithdraw>, amount: u64, take_all: bool) -> Result<()> {
        instructions::admin_withdraw(ctx, amount, take_all)
    }

    /// Add or remove ledgers that may call `disburse`
    pub fn set_caller_allowed(ctx: Context<VaultAdmin>, callers: Vec<Pubkey>, allowed: bool) -> Result<()> {
        instructions::set_caller_allowed(ctx, callers, allowed)
    }

    /// Add or remove mints the vault may release
    pub fn set_asset_allowed(ctx: Context<VaultAdmin>, assets: Vec<Pubkey>, allowed: bool) -> Result<()> {
        instructions::set_asset_allowed(ctx, assets, allowed)
    }

    /// Hand the admin role to `new_admin`
    pub fn transfer_vault_admin(ctx: Context<VaultAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::transfer_vault_admin(ctx, new_admin)
    }
}
