use anchor_lang::prelude::*;

pub mod accrual;
pub mod constants;
pub mod errors;
pub mod events;
pub mod guard;
pub mod instructions;
pub mod lookup;
pub mod payout;
pub mod state;

pub use instructions::*;
pub use state::{LockTier, LockTierConfig, StakePosition};

declare_id!("StakeTiers111111111111111111111111111111111");

#[program]
pub mod tiered_staking {
    use super::*;

    /// Create the ledger, its tier catalog and both custody accounts
    pub fn initialize_ledger(ctx: Context<InitializeLedger>, rates_bps: [u16; 5]) -> Result<()> {
        instructions::initialize_ledger(ctx, rates_bps)
    }

    /// Lock `principal` in `tier`; returns the new position id
    pub fn open_position(ctx: Context<OpenPosition>, principal: u64, tier: LockTier) -> Result<u64> {
        instructions::open_position(ctx, principal, tier)
    }

    /// Pay out everything accrued so far without touching principal
    pub fn claim_reward(ctx: Context<ClaimReward>, position_id: u64) -> Result<()> {
        instructions::claim_reward(ctx, position_id)
    }

    /// Close a matured position, paying principal plus final reward
    pub fn terminate_position(ctx: Context<TerminatePosition>, position_id: u64) -> Result<()> {
        instructions::terminate_position(ctx, position_id)
    }

    /// Change a tier's rate; applies to future accrual of open positions
    pub fn set_rate(ctx: Context<TierAdmin>, tier: LockTier, new_rate_bps: u16) -> Result<()> {
        instructions::set_rate(ctx, tier, new_rate_bps)
    }

    /// Gate new stakes in `tier`; existing positions are unaffected
    pub fn set_enabled(ctx: Context<TierAdmin>, tier: LockTier, enabled: bool) -> Result<()> {
        instructions::set_enabled(ctx, tier, enabled)
    }

    /// Hand the ledger authority to `new_authority`
    pub fn transfer_ledger_authority(ctx: Context<LedgerAdmin>, new_authority: Pubkey) -> Result<()> {
        instructions::transfer_ledger_authority(ctx, new_authority)
    }

    /// Current configuration of one tier
    pub fn get_tier(ctx: Context<ReadTiers>, tier: LockTier) -> Result<LockTierConfig> {
        instructions::get_tier(ctx, tier)
    }

    /// All five tiers in canonical order
    pub fn get_all_tiers(ctx: Context<ReadTiers>) -> Result<Vec<LockTierConfig>> {
        instructions::get_all_tiers(ctx)
    }

    /// Persisted state of one of `owner`'s positions, without accrual
    pub fn get_position(ctx: Context<ReadPosition>, owner: Pubkey, position_id: u64) -> Result<StakePosition> {
        instructions::get_position(ctx, owner, position_id)
    }
}
