use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::{
    constants::*,
    errors::VaultError,
    events::VaultFunded,
    guard,
    state::VaultConfig,
};

#[derive(Accounts)]
pub struct FundVault<'info> {
    #[account(
        mut,
        seeds = [VAULT_CONFIG_SEED],
        bump = vault_config.bump
    )]
    pub vault_config: Account<'info, VaultConfig>,

    pub asset_mint: Account<'info, Mint>,

    /// Vault custody for `asset_mint`, created on first deposit
    #[account(
        init_if_needed,
        payer = funder,
        associated_token::mint = asset_mint,
        associated_token::authority = vault_config,
    )]
    pub vault_custody: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = funder_token_account.owner == funder.key(),
        constraint = funder_token_account.mint == asset_mint.key()
    )]
    pub funder_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub funder: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> FundVault<'info> {
    fn deposit(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, VaultError::ZeroAmount);
        require!(
            self.vault_config.is_asset_allowed(&self.asset_mint.key()),
            VaultError::AssetNotAllowed
        );

        token::transfer(
            CpiContext::new(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.funder_token_account.to_account_info(),
                    to: self.vault_custody.to_account_info(),
                    authority: self.funder.to_account_info(),
                },
            ),
            amount,
        )?;
        self.vault_custody.reload()?;

        emit!(VaultFunded {
            funder: self.funder.key(),
            asset: self.asset_mint.key(),
            amount,
            custody_balance_after: self.vault_custody.amount,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}

pub fn fund_vault(ctx: Context<FundVault>, amount: u64) -> Result<()> {
    let accounts = ctx.accounts;
    guard::acquire(&mut accounts.vault_config)?;
    let result = accounts.deposit(amount);
    accounts.vault_config.leave();
    result
}
