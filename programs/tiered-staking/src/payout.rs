use anchor_lang::prelude::*;
use anchor_spl::token::{self, Transfer};
use reward_vault::cpi::accounts::Disburse;

use crate::constants::LEDGER_SEED;

/// Accounts a ledger needs to sign for its custody and vault requests
pub struct LedgerSigner<'info> {
    pub ledger: AccountInfo<'info>,
    pub stake_mint: Pubkey,
    pub bump: u8,
    pub token_program: AccountInfo<'info>,
}

/// Vault-to-owner reward path
pub struct RewardRoute<'info> {
    pub reward_vault_program: AccountInfo<'info>,
    pub vault_config: AccountInfo<'info>,
    pub vault_custody: AccountInfo<'info>,
    pub reward_mint: AccountInfo<'info>,
    pub reward_custody: AccountInfo<'info>,
    pub recipient: AccountInfo<'info>,
}

impl<'info> LedgerSigner<'info> {
    /// Requests `amount` from the vault into reward custody, then forwards it
    /// to the recipient. The vault only ever pays the ledger itself.
    pub fn pay_reward(&self, route: &RewardRoute<'info>, amount: u64) -> Result<()> {
        let bump = [self.bump];
        let seeds: &[&[u8]] = &[LEDGER_SEED, self.stake_mint.as_ref(), &bump];

        reward_vault::cpi::disburse(
            CpiContext::new_with_signer(
                route.reward_vault_program.clone(),
                Disburse {
                    vault_config: route.vault_config.clone(),
                    caller: self.ledger.clone(),
                    asset_mint: route.reward_mint.clone(),
                    vault_custody: route.vault_custody.clone(),
                    destination: route.reward_custody.clone(),
                    token_program: self.token_program.clone(),
                },
                &[seeds],
            ),
            amount,
        )?;

        self.transfer_from_custody(&route.reward_custody, &route.recipient, amount)
    }

    /// Signed transfer out of a ledger-owned token account.
    pub fn transfer_from_custody(
        &self,
        custody: &AccountInfo<'info>,
        recipient: &AccountInfo<'info>,
        amount: u64,
    ) -> Result<()> {
        let bump = [self.bump];
        let seeds: &[&[u8]] = &[LEDGER_SEED, self.stake_mint.as_ref(), &bump];

        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                Transfer {
                    from: custody.clone(),
                    to: recipient.clone(),
                    authority: self.ledger.clone(),
                },
                &[seeds],
            ),
            amount,
        )
    }
}
