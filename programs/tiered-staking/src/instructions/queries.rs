//! Read-only views. Values are returned as persisted; nothing is accrued.

use anchor_lang::prelude::*;

use crate::{
    constants::*,
    lookup::load_position,
    state::{LockTier, LockTierConfig, StakePosition, StakingLedger, TierRegistry},
};

#[derive(Accounts)]
pub struct ReadTiers<'info> {
    #[account(
        seeds = [TIER_REGISTRY_SEED, tier_registry.ledger.as_ref()],
        bump = tier_registry.bump
    )]
    pub tier_registry: Account<'info, TierRegistry>,
}

pub fn get_tier(ctx: Context<ReadTiers>, tier: LockTier) -> Result<LockTierConfig> {
    Ok(ctx.accounts.tier_registry.get_tier(tier))
}

pub fn get_all_tiers(ctx: Context<ReadTiers>) -> Result<Vec<LockTierConfig>> {
    Ok(ctx.accounts.tier_registry.all_tiers())
}

#[derive(Accounts)]
pub struct ReadPosition<'info> {
    #[account(
        seeds = [LEDGER_SEED, ledger.stake_mint.as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, StakingLedger>,

    /// CHECK: resolved against (ledger, owner, position_id) in `load_position`
    pub position: UncheckedAccount<'info>,
}

pub fn get_position(ctx: Context<ReadPosition>, owner: Pubkey, position_id: u64) -> Result<StakePosition> {
    load_position(
        &ctx.accounts.position.to_account_info(),
        &ctx.accounts.ledger.key(),
        &owner,
        position_id,
    )
}
