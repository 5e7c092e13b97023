use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use reward_vault::state::VaultConfig;

use crate::{
    constants::*,
    events::LedgerInitialized,
    state::{StakingLedger, TierRegistry},
};

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(
        init,
        payer = authority,
        space = StakingLedger::LEN,
        seeds = [LEDGER_SEED, stake_mint.key().as_ref()],
        bump
    )]
    pub ledger: Box<Account<'info, StakingLedger>>,

    #[account(
        init,
        payer = authority,
        space = TierRegistry::LEN,
        seeds = [TIER_REGISTRY_SEED, ledger.key().as_ref()],
        bump
    )]
    pub tier_registry: Box<Account<'info, TierRegistry>>,

    pub stake_mint: Box<Account<'info, Mint>>,

    pub reward_mint: Box<Account<'info, Mint>>,

    /// Ledger-owned principal custody
    #[account(
        init,
        payer = authority,
        seeds = [STAKE_CUSTODY_SEED, ledger.key().as_ref()],
        bump,
        token::mint = stake_mint,
        token::authority = ledger,
    )]
    pub stake_custody: Box<Account<'info, TokenAccount>>,

    /// Ledger-owned landing account for vault disbursements
    #[account(
        init,
        payer = authority,
        seeds = [REWARD_CUSTODY_SEED, ledger.key().as_ref()],
        bump,
        token::mint = reward_mint,
        token::authority = ledger,
    )]
    pub reward_custody: Box<Account<'info, TokenAccount>>,

    /// Vault this ledger draws rewards from
    pub reward_vault: Box<Account<'info, VaultConfig>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn initialize_ledger(ctx: Context<InitializeLedger>, rates_bps: [u16; 5]) -> Result<()> {
    let ledger_key = ctx.accounts.ledger.key();
    ctx.accounts
        .tier_registry
        .configure(ledger_key, rates_bps, ctx.bumps.tier_registry)?;

    let ledger = &mut ctx.accounts.ledger;
    ledger.authority = ctx.accounts.authority.key();
    ledger.stake_mint = ctx.accounts.stake_mint.key();
    ledger.reward_mint = ctx.accounts.reward_mint.key();
    ledger.stake_custody = ctx.accounts.stake_custody.key();
    ledger.reward_custody = ctx.accounts.reward_custody.key();
    ledger.reward_vault = ctx.accounts.reward_vault.key();
    ledger.next_position_id = FIRST_POSITION_ID;
    ledger.total_staked = 0;
    ledger.total_rewards_paid = 0;
    ledger.busy = false;
    ledger.version = LEDGER_VERSION;
    ledger.bump = ctx.bumps.ledger;

    msg!("ledger {} rates {:?}", ledger_key, rates_bps);
    emit!(LedgerInitialized {
        ledger: ledger_key,
        authority: ledger.authority,
        stake_mint: ledger.stake_mint,
        reward_mint: ledger.reward_mint,
        reward_vault: ledger.reward_vault,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
