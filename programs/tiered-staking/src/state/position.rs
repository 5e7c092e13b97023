use anchor_lang::prelude::*;

use crate::{
    accrual,
    constants::POSITION_SEED,
    errors::StakingError,
    state::{LockTier, LockTierConfig},
};

#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct StakePosition {
    /// Wallet that opened the position; lookups are scoped to it
    pub owner: Pubkey,

    /// Ledger-wide id, never reused
    pub position_id: u64,

    /// Staked amount; zero means no such position
    pub principal: u64,

    /// Fixed at creation
    pub tier: LockTier,

    pub start_time: i64,

    /// `start_time` plus the tier duration at creation
    pub end_time: i64,

    /// Settled but unpaid reward
    pub accrued_reward: u64,

    /// Accrual watermark
    pub last_accrual_time: i64,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

/// Amounts released by a termination
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub principal: u64,
    pub reward: u64,
}

impl StakePosition {
    pub const LEN: usize = 8 + // discriminator
        32 + // owner
        8 + // position_id
        8 + // principal
        1 + // tier
        8 + // start_time
        8 + // end_time
        8 + // accrued_reward
        8 + // last_accrual_time
        1; // bump

    pub fn address(ledger: &Pubkey, owner: &Pubkey, position_id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[POSITION_SEED, ledger.as_ref(), owner.as_ref(), &position_id.to_le_bytes()],
            &crate::ID,
        )
    }

    /// Fresh position with the watermark at `now`.
    pub fn open(
        owner: Pubkey,
        position_id: u64,
        principal: u64,
        tier: &LockTierConfig,
        now: i64,
        bump: u8,
    ) -> Result<Self> {
        require!(principal > 0, StakingError::ZeroAmount);
        require!(tier.enabled, StakingError::TierDisabled);

        let end_time = now
            .checked_add(tier.duration_seconds)
            .ok_or(StakingError::MathOverflow)?;

        Ok(Self {
            owner,
            position_id,
            principal,
            tier: tier.tier,
            start_time: now,
            end_time,
            accrued_reward: 0,
            last_accrual_time: now,
            bump,
        })
    }

    pub fn is_active(&self) -> bool {
        self.principal > 0
    }

    pub fn is_owned_by(&self, owner: &Pubkey) -> bool {
        self.owner == *owner && self.is_active()
    }

    pub fn lock_elapsed(&self, now: i64) -> bool {
        now >= self.end_time
    }

    /// Accrues to `now`, then takes the whole accrued reward.
    pub fn settle_claim(&mut self, now: i64, tier: &LockTierConfig) -> Result<u64> {
        accrual::accrue(self, now, tier)?;
        require!(self.accrued_reward > 0, StakingError::NothingToClaim);

        let reward = self.accrued_reward;
        self.accrued_reward = 0;
        Ok(reward)
    }

    /// Accrues to `now` and empties the position. The caller closes the
    /// account afterwards.
    pub fn settle_termination(&mut self, now: i64, tier: &LockTierConfig) -> Result<Settlement> {
        require!(self.lock_elapsed(now), StakingError::LockNotElapsed);
        accrual::accrue(self, now, tier)?;

        let settlement = Settlement {
            principal: self.principal,
            reward: self.accrued_reward,
        };
        self.principal = 0;
        self.accrued_reward = 0;
        Ok(settlement)
    }
}
