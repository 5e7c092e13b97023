use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use reward_vault::program::RewardVault;

use crate::{
    constants::*,
    events::PositionTerminated,
    guard,
    lookup::{close_position, load_position},
    payout::{LedgerSigner, RewardRoute},
    state::{StakingLedger, TierRegistry},
};

#[derive(Accounts)]
#[instruction(position_id: u64)]
pub struct TerminatePosition<'info> {
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

    /// CHECK: resolved against (ledger, owner, position_id) in `load_position`
    #[account(mut)]
    pub position: UncheckedAccount<'info>,

    /// Receives principal, reward and the position's rent
    #[account(mut)]
    pub owner: Signer<'info>,

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

    #[account(
        mut,
        address = ledger.reward_custody
    )]
    pub reward_custody: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = owner_reward_account.owner == owner.key(),
        constraint = owner_reward_account.mint == ledger.reward_mint
    )]
    pub owner_reward_account: Box<Account<'info, TokenAccount>>,

    #[account(address = ledger.reward_mint)]
    pub reward_mint: Box<Account<'info, Mint>>,

    /// CHECK: pinned to the ledger's vault; validated by the vault program
    #[account(
        mut,
        address = ledger.reward_vault
    )]
    pub vault_config: UncheckedAccount<'info>,

    /// CHECK: validated by the vault program
    #[account(mut)]
    pub vault_custody: UncheckedAccount<'info>,

    pub reward_vault_program: Program<'info, RewardVault>,
    pub token_program: Program<'info, Token>,
}

impl<'info> TerminatePosition<'info> {
    fn terminate(&mut self, position_id: u64) -> Result<()> {
        let ledger_key = self.ledger.key();
        let owner = self.owner.key();
        let position_info = self.position.to_account_info();

        let mut position = load_position(&position_info, &ledger_key, &owner, position_id)?;
        let tier = self.tier_registry.get_tier(position.tier);
        let now = Clock::get()?.unix_timestamp;

        let settlement = position.settle_termination(now, &tier)?;

        let signer = LedgerSigner {
            ledger: self.ledger.to_account_info(),
            stake_mint: self.ledger.stake_mint,
            bump: self.ledger.bump,
            token_program: self.token_program.to_account_info(),
        };

        if settlement.reward > 0 {
            let route = RewardRoute {
                reward_vault_program: self.reward_vault_program.to_account_info(),
                vault_config: self.vault_config.to_account_info(),
                vault_custody: self.vault_custody.to_account_info(),
                reward_mint: self.reward_mint.to_account_info(),
                reward_custody: self.reward_custody.to_account_info(),
                recipient: self.owner_reward_account.to_account_info(),
            };
            signer.pay_reward(&route, settlement.reward)?;
        }

        signer.transfer_from_custody(
            &self.stake_custody.to_account_info(),
            &self.owner_stake_account.to_account_info(),
            settlement.principal,
        )?;

        self.ledger.record_unstake(settlement.principal)?;
        self.ledger.record_reward_paid(settlement.reward)?;
        close_position(&position_info, &self.owner.to_account_info())?;

        msg!(
            "position {} closed: principal {} reward {}",
            position_id,
            settlement.principal,
            settlement.reward
        );
        emit!(PositionTerminated {
            owner,
            position_id,
            principal: settlement.principal,
            reward_amount: settlement.reward,
            timestamp: now,
        });

        Ok(())
    }
}

pub fn terminate_position(ctx: Context<TerminatePosition>, position_id: u64) -> Result<()> {
    let accounts = ctx.accounts;
    guard::acquire(&mut accounts.ledger)?;
    let result = accounts.terminate(position_id);
    accounts.ledger.leave();
    result
}
