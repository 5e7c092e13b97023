use anchor_lang::prelude::*;

#[event]
pub struct VaultInitialized {
    pub vault_config: Pubkey,
    pub admin: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct VaultFunded {
    pub funder: Pubkey,
    pub asset: Pubkey,
    pub amount: u64,
    pub custody_balance_after: u64,
    pub timestamp: i64,
}

#[event]
pub struct RewardDisbursed {
    pub caller: Pubkey,
    pub asset: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct AdminWithdrawal {
    pub admin: Pubkey,
    pub asset: Pubkey,
    pub amount: u64,
    pub took_all: bool,
    pub timestamp: i64,
}

#[event]
pub struct VaultAdminTransferred {
    pub previous_admin: Pubkey,
    pub new_admin: Pubkey,
    pub timestamp: i64,
}
