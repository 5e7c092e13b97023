use anchor_lang::prelude::*;

use crate::state::LockTier;

#[event]
pub struct LedgerInitialized {
    pub ledger: Pubkey,
    pub authority: Pubkey,
    pub stake_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub reward_vault: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct PositionOpened {
    pub owner: Pubkey,
    pub position_id: u64,
    pub principal: u64,
    pub tier: LockTier,
    pub start_time: i64,
    pub end_time: i64,
}

#[event]
pub struct RewardClaimed {
    pub owner: Pubkey,
    pub position_id: u64,
    pub reward_amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct PositionTerminated {
    pub owner: Pubkey,
    pub position_id: u64,
    pub principal: u64,
    pub reward_amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct TierRateChanged {
    pub tier: LockTier,
    pub old_rate_bps: u16,
    pub new_rate_bps: u16,
    pub timestamp: i64,
}

#[event]
pub struct TierStatusChanged {
    pub tier: LockTier,
    pub enabled: bool,
    pub timestamp: i64,
}

#[event]
pub struct AuthorityTransferred {
    pub ledger: Pubkey,
    pub previous_authority: Pubkey,
    pub new_authority: Pubkey,
    pub timestamp: i64,
}
