use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_ALLOWED_ASSETS, MAX_ALLOWED_CALLERS},
    errors::VaultError,
};

#[account]
#[derive(Default)]
pub struct VaultConfig {
    /// Authority for allow-list updates and emergency withdrawals
    pub admin: Pubkey,

    /// Programs/PDAs permitted to request disbursement
    pub allowed_callers: Vec<Pubkey>,

    /// Mints permitted to leave custody
    pub allowed_assets: Vec<Pubkey>,

    /// Set while an instruction holds the vault
    pub busy: bool,

    /// Layout version
    pub version: u8,

    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Reserved space for future upgrades
    pub _reserved: [u8; 32],
}

impl VaultConfig {
    pub const LEN: usize = 8 + // discriminator
        32 + // admin
        4 + 32 * MAX_ALLOWED_CALLERS + // allowed_callers
        4 + 32 * MAX_ALLOWED_ASSETS + // allowed_assets
        1 + // busy
        1 + // version
        1 + // bump
        32; // _reserved

    pub fn require_admin(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(*signer, self.admin, VaultError::Unauthorized);
        Ok(())
    }

    pub fn is_caller_allowed(&self, caller: &Pubkey) -> bool {
        self.allowed_callers.contains(caller)
    }

    pub fn is_asset_allowed(&self, asset: &Pubkey) -> bool {
        self.allowed_assets.contains(asset)
    }

    /// Gate for `disburse`: caller, then amount, then asset.
    pub fn authorize_disbursement(&self, caller: &Pubkey, asset: &Pubkey, amount: u64) -> Result<()> {
        require!(self.is_caller_allowed(caller), VaultError::CallerNotAuthorized);
        require!(amount > 0, VaultError::ZeroAmount);
        require!(self.is_asset_allowed(asset), VaultError::AssetNotAllowed);
        Ok(())
    }

    /// Resolves the amount for an emergency withdrawal. `take_all` overrides
    /// `amount` with the whole custody balance.
    pub fn withdrawal_amount(
        &self,
        asset: &Pubkey,
        amount: u64,
        take_all: bool,
        custody_balance: u64,
    ) -> Result<u64> {
        require!(self.is_asset_allowed(asset), VaultError::AssetNotAllowed);
        let amount = if take_all { custody_balance } else { amount };
        require!(amount > 0, VaultError::ZeroAmount);
        require!(amount <= custody_balance, VaultError::InsufficientVaultBalance);
        Ok(amount)
    }

    pub fn set_callers_allowed(&mut self, callers: &[Pubkey], allowed: bool) -> Result<()> {
        apply_membership(&mut self.allowed_callers, callers, allowed, MAX_ALLOWED_CALLERS)
    }

    pub fn set_assets_allowed(&mut self, assets: &[Pubkey], allowed: bool) -> Result<()> {
        apply_membership(&mut self.allowed_assets, assets, allowed, MAX_ALLOWED_ASSETS)
    }

    pub fn enter(&mut self) -> Result<()> {
        require!(!self.busy, VaultError::ReentrantCall);
        self.busy = true;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.busy = false;
    }
}

/// Batch insert/remove. The batch is validated up front so a bad entry
/// leaves the list untouched.
fn apply_membership(list: &mut Vec<Pubkey>, entries: &[Pubkey], allowed: bool, capacity: usize) -> Result<()> {
    require!(
        entries.iter().all(|key| *key != Pubkey::default()),
        VaultError::InvalidAddress
    );

    if allowed {
        let mut next = list.clone();
        for key in entries {
            if !next.contains(key) {
                next.push(*key);
            }
        }
        require!(next.len() <= capacity, VaultError::AllowListFull);
        *list = next;
    } else {
        list.retain(|key| !entries.contains(key));
    }
    Ok(())
}
