use anchor_lang::prelude::*;

use crate::{
    constants::*,
    errors::StakingError,
    events::{AuthorityTransferred, TierRateChanged, TierStatusChanged},
    guard,
    state::{LockTier, StakingLedger, TierRegistry},
};

#[derive(Accounts)]
pub struct TierAdmin<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.stake_mint.as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, StakingLedger>,

    #[account(
        mut,
        seeds = [TIER_REGISTRY_SEED, ledger.key().as_ref()],
        bump = tier_registry.bump
    )]
    pub tier_registry: Account<'info, TierRegistry>,

    pub authority: Signer<'info>,
}

impl<'info> TierAdmin<'info> {
    fn update_rate(&mut self, tier: LockTier, new_rate_bps: u16) -> Result<()> {
        self.ledger.require_admin(&self.authority.key())?;
        let old_rate_bps = self.tier_registry.set_rate(tier, new_rate_bps)?;

        emit!(TierRateChanged {
            tier,
            old_rate_bps,
            new_rate_bps,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }

    fn update_enabled(&mut self, tier: LockTier, enabled: bool) -> Result<()> {
        self.ledger.require_admin(&self.authority.key())?;
        self.tier_registry.set_enabled(tier, enabled);

        emit!(TierStatusChanged {
            tier,
            enabled,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }
}

pub fn set_rate(ctx: Context<TierAdmin>, tier: LockTier, new_rate_bps: u16) -> Result<()> {
    let accounts = ctx.accounts;
    guard::acquire(&mut accounts.ledger)?;
    let result = accounts.update_rate(tier, new_rate_bps);
    accounts.ledger.leave();
    result
}

pub fn set_enabled(ctx: Context<TierAdmin>, tier: LockTier, enabled: bool) -> Result<()> {
    let accounts = ctx.accounts;
    guard::acquire(&mut accounts.ledger)?;
    let result = accounts.update_enabled(tier, enabled);
    accounts.ledger.leave();
    result
}

#[derive(Accounts)]
pub struct LedgerAdmin<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.stake_mint.as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, StakingLedger>,

    pub authority: Signer<'info>,
}

impl<'info> LedgerAdmin<'info> {
    fn hand_over(&mut self, new_authority: Pubkey) -> Result<()> {
        self.ledger.require_admin(&self.authority.key())?;
        require!(new_authority != Pubkey::default(), StakingError::InvalidAddress);

        let previous_authority = self.ledger.authority;
        self.ledger.authority = new_authority;

        emit!(AuthorityTransferred {
            ledger: self.ledger.key(),
            previous_authority,
            new_authority,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }
}

pub fn transfer_ledger_authority(ctx: Context<LedgerAdmin>, new_authority: Pubkey) -> Result<()> {
    let accounts = ctx.accounts;
    guard::acquire(&mut accounts.ledger)?;
    let result = accounts.hand_over(new_authority);
    accounts.ledger.leave();
    result
}
