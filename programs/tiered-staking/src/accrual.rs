//! Time-proportional reward arithmetic.
//!
//! `reward = floor(principal * rate_bps * elapsed / (SECONDS_PER_YEAR * 10_000))`
//!
//! Each call truncates independently and the remainder is dropped for good,
//! so accruing over many short intervals yields at most one unit less per
//! call than a single accrual over the same span.

use anchor_lang::prelude::*;

use crate::{
    constants::{BPS_DENOMINATOR, SECONDS_PER_YEAR},
    errors::StakingError,
    state::{LockTierConfig, StakePosition},
};

/// Reward earned by `principal` at `rate_bps` over `elapsed` seconds.
pub fn reward_for(principal: u64, rate_bps: u16, elapsed: u64) -> Result<u64> {
    let numerator = (principal as u128)
        .checked_mul(rate_bps as u128)
        .ok_or(StakingError::MathOverflow)?
        .checked_mul(elapsed as u128)
        .ok_or(StakingError::MathOverflow)?;
    let reward = numerator / (SECONDS_PER_YEAR as u128 * BPS_DENOMINATOR as u128);

    u64::try_from(reward).map_err(|_| error!(StakingError::MathOverflow))
}

/// Brings `position` current to `now` using the tier's live rate and returns
/// the amount added. No-op when no time has passed since the watermark.
pub fn accrue(position: &mut StakePosition, now: i64, tier: &LockTierConfig) -> Result<u64> {
    let elapsed = now.saturating_sub(position.last_accrual_time);
    if elapsed <= 0 {
        return Ok(0);
    }

    let delta = reward_for(position.principal, tier.rate_bps, elapsed as u64)?;
    position.accrued_reward = position
        .accrued_reward
        .checked_add(delta)
        .ok_or(StakingError::MathOverflow)?;
    position.last_accrual_time = now;

    Ok(delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_DAY;
    use crate::state::LockTier;

    const START: i64 = 1_700_000_000;

    fn tier(rate_bps: u16) -> LockTierConfig {
        LockTierConfig {
            tier: LockTier::OneMonth,
            rate_bps,
            duration_seconds: 30 * SECONDS_PER_DAY,
            enabled: true,
        }
    }

    fn position(principal: u64) -> StakePosition {
        StakePosition {
            owner: Pubkey::new_unique(),
            position_id: 1,
            principal,
            tier: LockTier::OneMonth,
            start_time: START,
            end_time: START + 30 * SECONDS_PER_DAY,
            accrued_reward: 0,
            last_accrual_time: START,
            bump: 255,
        }
    }

    #[test]
    fn test_one_day_at_five_percent() {
        // 1000 * 500 * 86400 / (31536000 * 10000) truncates to zero
        assert_eq!(reward_for(1_000, 500, 86_400).unwrap(), 0);

        let expected = (1_000_000_000u128 * 500 * 86_400 / (31_536_000u128 * 10_000)) as u64;
        assert_eq!(expected, 136_986);
        assert_eq!(reward_for(1_000_000_000, 500, 86_400).unwrap(), expected);
    }

    #[test]
    fn test_full_year_pays_rate() {
        assert_eq!(reward_for(10_000, 500, SECONDS_PER_YEAR).unwrap(), 500);
        assert_eq!(reward_for(10_000, 10_000, SECONDS_PER_YEAR).unwrap(), 10_000);
        assert_eq!(reward_for(10_000, 0, SECONDS_PER_YEAR).unwrap(), 0);
    }

    #[test]
    fn test_accrue_is_idempotent_at_same_instant() {
        let mut position = position(5_000_000);
        let config = tier(1_200);

        let first = accrue(&mut position, START + 3_600, &config).unwrap();
        let snapshot = (position.accrued_reward, position.last_accrual_time);

        assert_eq!(accrue(&mut position, START + 3_600, &config).unwrap(), 0);
        assert_eq!((position.accrued_reward, position.last_accrual_time), snapshot);
        assert_eq!(position.accrued_reward, first);
    }

    #[test]
    fn test_accrue_ignores_clock_behind_watermark() {
        let mut position = position(5_000_000);
        position.last_accrual_time = START + 100;

        assert_eq!(accrue(&mut position, START, &tier(1_200)).unwrap(), 0);
        assert_eq!(position.last_accrual_time, START + 100);
        assert_eq!(position.accrued_reward, 0);
    }

    #[test]
    fn test_split_accrual_matches_single_within_truncation() {
        let config = tier(730);
        let (t1, t2) = (12_345i64, 987_654i64);

        let mut split = position(123_456_789);
        accrue(&mut split, START + t1, &config).unwrap();
        accrue(&mut split, START + t1 + t2, &config).unwrap();

        let mut single = position(123_456_789);
        accrue(&mut single, START + t1 + t2, &config).unwrap();

        // Two truncations can lose at most one unit each relative to one
        assert!(split.accrued_reward <= single.accrued_reward);
        assert!(single.accrued_reward - split.accrued_reward < 2);
        assert_eq!(split.last_accrual_time, single.last_accrual_time);
    }

    #[test]
    fn test_reward_never_decreases_between_accruals() {
        let config = tier(2_500);
        let mut position = position(42_000_000);
        let mut previous = 0;

        for step in 1..=48 {
            accrue(&mut position, START + step * 1_800, &config).unwrap();
            assert!(position.accrued_reward >= previous);
            previous = position.accrued_reward;
        }
    }

    #[test]
    fn test_large_principal_does_not_overflow_intermediate() {
        // u64::MAX * 10000 * one year fits comfortably in u128
        let reward = reward_for(u64::MAX, 10_000, SECONDS_PER_YEAR).unwrap();
        assert_eq!(reward, u64::MAX);

        assert_eq!(
            reward_for(u64::MAX, 10_000, 2 * SECONDS_PER_YEAR).unwrap_err(),
            StakingError::MathOverflow.into()
        );
    }

    #[test]
    fn test_rate_is_read_at_accrual_time() {
        let mut position = position(10_000);
        let year = SECONDS_PER_YEAR as i64;

        accrue(&mut position, START + year, &tier(500)).unwrap();
        assert_eq!(position.accrued_reward, 500);

        // A later rate change applies to time after the watermark only
        accrue(&mut position, START + 2 * year, &tier(1_000)).unwrap();
        assert_eq!(position.accrued_reward, 1_500);
    }
}
