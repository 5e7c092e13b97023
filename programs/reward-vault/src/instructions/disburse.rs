use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, Transfer};

use crate::{
    constants::*,
    custody,
    events::RewardDisbursed,
    guard,
    state::VaultConfig,
};

#[derive(Accounts)]
pub struct Disburse<'info> {
    #[account(
        mut,
        seeds = [VAULT_CONFIG_SEED],
        bump = vault_config.bump
    )]
    pub vault_config: Account<'info, VaultConfig>,

    /// The requesting ledger; must be on the caller allow-list
    pub caller: Signer<'info>,

    pub asset_mint: Account<'info, Mint>,

    /// CHECK: must be the vault's ATA for `asset_mint`; checked in `custody::check_release`
    #[account(mut)]
    pub vault_custody: UncheckedAccount<'info>,

    /// CHECK: must be the caller's own account for `asset_mint`; funds only
    /// ever go back to the caller, which forwards them onward
    #[account(mut)]
    pub destination: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}

impl<'info> Disburse<'info> {
    fn release(&mut self, amount: u64) -> Result<()> {
        let caller = self.caller.key();
        let asset = self.asset_mint.key();

        custody::check_release(
            &self.vault_config,
            &self.vault_config.key(),
            &caller,
            &asset,
            amount,
            &self.vault_custody,
            &self.destination,
        )?;

        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.vault_custody.to_account_info(),
                    to: self.destination.to_account_info(),
                    authority: self.vault_config.to_account_info(),
                },
                &[&[VAULT_CONFIG_SEED, &[self.vault_config.bump]]],
            ),
            amount,
        )?;

        msg!("disbursed {} of {} to {}", amount, asset, caller);
        emit!(RewardDisbursed {
            caller,
            asset,
            amount,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}

pub fn disburse(ctx: Context<Disburse>, amount: u64) -> Result<()> {
    let accounts = ctx.accounts;
    guard::acquire(&mut accounts.vault_config)?;
    let result = accounts.release(amount);
    accounts.vault_config.leave();
    result
}
