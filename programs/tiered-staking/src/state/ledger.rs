use anchor_lang::prelude::*;

use crate::errors::StakingError;

#[account]
#[derive(Default)]
pub struct StakingLedger {
    /// Admin for tier configuration
    pub authority: Pubkey,

    /// Asset locked as principal
    pub stake_mint: Pubkey,

    /// Asset paid out as reward
    pub reward_mint: Pubkey,

    /// Ledger-owned token account holding principal
    pub stake_custody: Pubkey,

    /// Ledger-owned token account that receives vault disbursements
    pub reward_custody: Pubkey,

    /// `VaultConfig` this ledger draws rewards from
    pub reward_vault: Pubkey,

    /// Next id handed out by `open_position`
    pub next_position_id: u64,

    /// Principal currently locked
    pub total_staked: u64,

    /// Lifetime reward forwarded to owners
    pub total_rewards_paid: u64,

    /// Set while an instruction holds the ledger
    pub busy: bool,

    /// Layout version
    pub version: u8,

    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Reserved space for future upgrades
    pub _reserved: [u8; 32],
}

impl StakingLedger {
    pub const LEN: usize = 8 + // discriminator
        32 + // authority
        32 + // stake_mint
        32 + // reward_mint
        32 + // stake_custody
        32 + // reward_custody
        32 + // reward_vault
        8 + // next_position_id
        8 + // total_staked
        8 + // total_rewards_paid
        1 + // busy
        1 + // version
        1 + // bump
        32; // _reserved

    pub fn require_admin(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(*signer, self.authority, StakingError::Unauthorized);
        Ok(())
    }

    /// Hands out the next id. Ids never repeat.
    pub fn allocate_position_id(&mut self) -> Result<u64> {
        let position_id = self.next_position_id;
        self.next_position_id = position_id
            .checked_add(1)
            .ok_or(StakingError::MathOverflow)?;
        Ok(position_id)
    }

    pub fn record_stake(&mut self, principal: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_add(principal)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }

    pub fn record_unstake(&mut self, principal: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_sub(principal)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }

    pub fn record_reward_paid(&mut self, reward: u64) -> Result<()> {
        self.total_rewards_paid = self
            .total_rewards_paid
            .checked_add(reward)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }

    pub fn enter(&mut self) -> Result<()> {
        require!(!self.busy, StakingError::ReentrantCall);
        self.busy = true;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.busy = false;
    }
}
