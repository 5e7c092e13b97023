//! Token account checks for `disburse` and `admin_withdraw`.
//!
//! Custody and destination accounts arrive unchecked and are validated here,
//! after the allow-list gate, so an unlisted caller or asset is reported as
//! such even when no custody account exists for it.

use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;
use anchor_spl::token::{self, TokenAccount};

use crate::{errors::VaultError, state::VaultConfig};

/// Balance the vault holds for `asset`. A custody account that was never
/// created holds nothing.
pub fn custody_balance(custody: &AccountInfo, vault_config: &Pubkey, asset: &Pubkey) -> Result<u64> {
    require_keys_eq!(
        custody.key(),
        get_associated_token_address(vault_config, asset),
        VaultError::InvalidTokenAccount
    );
    if custody.data_is_empty() {
        return Ok(0);
    }

    let account = read_token_account(custody)?;
    require_keys_eq!(account.mint, *asset, VaultError::InvalidTokenAccount);
    Ok(account.amount)
}

/// Full gate for `disburse`: caller, amount, asset, balance, then the
/// destination, which must be the caller's own account for `asset`.
pub fn check_release(
    config: &VaultConfig,
    vault_config: &Pubkey,
    caller: &Pubkey,
    asset: &Pubkey,
    amount: u64,
    custody: &AccountInfo,
    destination: &AccountInfo,
) -> Result<()> {
    config.authorize_disbursement(caller, asset, amount)?;

    let balance = custody_balance(custody, vault_config, asset)?;
    require!(balance >= amount, VaultError::InsufficientVaultBalance);

    let destination = read_token_account(destination)?;
    require_keys_eq!(destination.owner, *caller, VaultError::CallerNotAuthorized);
    require_keys_eq!(destination.mint, *asset, VaultError::AssetNotAllowed);
    Ok(())
}

/// Full gate for `admin_withdraw`. Returns the resolved amount.
#[allow(clippy::too_many_arguments)]
pub fn check_withdrawal(
    config: &VaultConfig,
    vault_config: &Pubkey,
    admin: &Pubkey,
    asset: &Pubkey,
    amount: u64,
    take_all: bool,
    custody: &AccountInfo,
    destination: &AccountInfo,
) -> Result<u64> {
    config.require_admin(admin)?;
    require!(config.is_asset_allowed(asset), VaultError::AssetNotAllowed);

    let balance = custody_balance(custody, vault_config, asset)?;
    let amount = config.withdrawal_amount(asset, amount, take_all, balance)?;

    let destination = read_token_account(destination)?;
    require_keys_eq!(destination.owner, *admin, VaultError::InvalidTokenAccount);
    require_keys_eq!(destination.mint, *asset, VaultError::InvalidTokenAccount);
    Ok(amount)
}

fn read_token_account(info: &AccountInfo) -> Result<TokenAccount> {
    require_keys_eq!(*info.owner, token::ID, VaultError::InvalidTokenAccount);
    let data = info.try_borrow_data()?;
    TokenAccount::try_deserialize(&mut &data[..]).map_err(|_| error!(VaultError::InvalidTokenAccount))
}
