use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, Transfer};

use crate::{
    constants::*,
    custody,
    events::AdminWithdrawal,
    guard,
    state::VaultConfig,
};

#[derive(Accounts)]
pub struct AdminWithdraw<'info> {
    #[account(
        mut,
        seeds = [VAULT_CONFIG_SEED],
        bump = vault_config.bump
    )]
    pub vault_config: Account<'info, VaultConfig>,

    pub admin: Signer<'info>,

    pub asset_mint: Account<'info, Mint>,

    /// CHECK: must be the vault's ATA for `asset_mint`; checked in `custody::check_withdrawal`
    #[account(mut)]
    pub vault_custody: UncheckedAccount<'info>,

    /// CHECK: must be the admin's own account for `asset_mint`
    #[account(mut)]
    pub admin_token_account: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}

impl<'info> AdminWithdraw<'info> {
    fn drain(&mut self, amount: u64, take_all: bool) -> Result<()> {
        let asset = self.asset_mint.key();
        let amount = custody::check_withdrawal(
            &self.vault_config,
            &self.vault_config.key(),
            &self.admin.key(),
            &asset,
            amount,
            take_all,
            &self.vault_custody,
            &self.admin_token_account,
        )?;

        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.vault_custody.to_account_info(),
                    to: self.admin_token_account.to_account_info(),
                    authority: self.vault_config.to_account_info(),
                },
                &[&[VAULT_CONFIG_SEED, &[self.vault_config.bump]]],
            ),
            amount,
        )?;

        msg!("admin withdrew {} of {}", amount, asset);
        emit!(AdminWithdrawal {
            admin: self.admin.key(),
            asset,
            amount,
            took_all: take_all,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}

pub fn admin_withdraw(ctx: Context<AdminWithdraw>, amount: u64, take_all: bool) -> Result<()> {
    let accounts = ctx.accounts;
    guard::acquire(&mut accounts.vault_config)?;
    let result = accounts.drain(amount, take_all);
    accounts.vault_config.leave();
    result
}
