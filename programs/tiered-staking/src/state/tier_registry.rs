use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_RATE_BPS, TIER_DURATIONS},
    errors::StakingError,
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LockTier {
    #[default]
    OneDay,
    OneWeek,
    OneMonth,
    SixMonths,
    OneYear,
}

impl LockTier {
    /// Canonical order
    pub const ALL: [LockTier; 5] = [
        LockTier::OneDay,
        LockTier::OneWeek,
        LockTier::OneMonth,
        LockTier::SixMonths,
        LockTier::OneYear,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LockTierConfig {
    pub tier: LockTier,

    /// Annualized yield in basis points (max 10000)
    pub rate_bps: u16,

    /// Lock length applied to positions opened in this tier
    pub duration_seconds: i64,

    /// Gates new stakes only
    pub enabled: bool,
}

impl LockTierConfig {
    pub const LEN: usize = 1 + // tier
        2 + // rate_bps
        8 + // duration_seconds
        1; // enabled
}

/// One record per tier, indexed by `LockTier::index`. No tier is ever
/// absent, only disabled.
#[account]
#[derive(Default)]
pub struct TierRegistry {
    /// Ledger this catalog belongs to
    pub ledger: Pubkey,

    pub tiers: [LockTierConfig; 5],

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl TierRegistry {
    pub const LEN: usize = 8 + // discriminator
        32 + // ledger
        5 * LockTierConfig::LEN + // tiers
        1; // bump

    /// Fills every tier with its default duration, enabled.
    pub fn configure(&mut self, ledger: Pubkey, rates_bps: [u16; 5], bump: u8) -> Result<()> {
        require!(
            rates_bps.iter().all(|rate| *rate <= MAX_RATE_BPS),
            StakingError::RateExceedsMaximum
        );

        self.ledger = ledger;
        self.bump = bump;
        for tier in LockTier::ALL {
            self.tiers[tier.index()] = LockTierConfig {
                tier,
                rate_bps: rates_bps[tier.index()],
                duration_seconds: TIER_DURATIONS[tier.index()],
                enabled: true,
            };
        }
        Ok(())
    }

    pub fn get_tier(&self, tier: LockTier) -> LockTierConfig {
        self.tiers[tier.index()]
    }

    pub fn all_tiers(&self) -> Vec<LockTierConfig> {
        LockTier::ALL.iter().map(|tier| self.get_tier(*tier)).collect()
    }

    /// Returns the previous rate.
    pub fn set_rate(&mut self, tier: LockTier, new_rate_bps: u16) -> Result<u16> {
        require!(new_rate_bps <= MAX_RATE_BPS, StakingError::RateExceedsMaximum);

        let config = &mut self.tiers[tier.index()];
        let old_rate_bps = config.rate_bps;
        config.rate_bps = new_rate_bps;
        Ok(old_rate_bps)
    }

    pub fn set_enabled(&mut self, tier: LockTier, enabled: bool) {
        self.tiers[tier.index()].enabled = enabled;
    }
}
