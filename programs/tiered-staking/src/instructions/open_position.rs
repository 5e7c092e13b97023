use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    constants::*,
    events::PositionOpened,
    guard,
    state::{LockTier, StakePosition, StakingLedger, TierRegistry},
};

#[derive(Accounts)]
pub struct OpenPosition<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.stake_mint.as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Box<Account<'info, StakingLedger>>,

    #[account(
        seeds = [TIER_REGISTRY_SEED, ledger.key().as_ref()],
        bump = tier_registry.bump
    )]
    pub tier_registry: Box<Account<'info, TierRegistry>>,

    /// Keyed by the id this call will allocate
    #[account(
        init,
        payer = owner,
        space = StakePosition::LEN,
        seeds = [
            POSITION_SEED,
            ledger.key().as_ref(),
            owner.key().as_ref(),
            &ledger.next_position_id.to_le_bytes()
        ],
        bump
    )]
    pub position: Box<Account<'info, StakePosition>>,

    #[account(
        mut,
        address = ledger.stake_custody
    )]
    pub stake_custody: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = owner_stake_account.owner == owner.key(),
        constraint = owner_stake_account.mint == ledger.stake_mint
    )]
    pub owner_stake_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> OpenPosition<'info> {
    fn open(&mut self, principal: u64, tier: LockTier, bump: u8) -> Result<u64> {
        let config = self.tier_registry.get_tier(tier);
        let now = Clock::get()?.unix_timestamp;
        let position = StakePosition::open(
            self.owner.key(),
            self.ledger.next_position_id,
            principal,
            &config,
            now,
            bump,
        )?;

        token::transfer(
            CpiContext::new(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.owner_stake_account.to_account_info(),
                    to: self.stake_custody.to_account_info(),
                    authority: self.owner.to_account_info(),
                },
            ),
            principal,
        )?;

        let position_id = self.ledger.allocate_position_id()?;
        self.ledger.record_stake(principal)?;

        emit!(PositionOpened {
            owner: position.owner,
            position_id,
            principal,
            tier,
            start_time: position.start_time,
            end_time: position.end_time,
        });
        self.position.set_inner(position);

        Ok(position_id)
    }
}

pub fn open_position(ctx: Context<OpenPosition>, principal: u64, tier: LockTier) -> Result<u64> {
    let bump = ctx.bumps.position;
    let accounts = ctx.accounts;
    guard::acquire(&mut accounts.ledger)?;
    let result = accounts.open(principal, tier, bump);
    accounts.ledger.leave();
    result
}
