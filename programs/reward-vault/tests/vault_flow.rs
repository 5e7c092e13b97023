//! Vault instructions run inside LiteSVM.
//!
//! Needs `target/deploy/reward_vault.so` from an SBF build, then
//! `cargo test -- --ignored`.

use std::fs;

use anchor_lang::{InstructionData, ToAccountMetas};
use anchor_spl::associated_token::{self, get_associated_token_address};
use anchor_spl::token::spl_token;
use litesvm::{
    types::{FailedTransactionMetadata, TransactionMetadata},
    LiteSVM,
};
use solana_sdk::{
    instruction::{Instruction, InstructionError},
    program_pack::Pack,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    system_instruction, system_program,
    transaction::{Transaction, TransactionError},
};

use reward_vault::{constants::VAULT_CONFIG_SEED, errors::VaultError};

struct Vault {
    svm: LiteSVM,
    admin: Keypair,
    caller: Keypair,
    asset: Pubkey,
    vault_config: Pubkey,
    custody: Pubkey,
    admin_account: Pubkey,
}

fn send(
    svm: &mut LiteSVM,
    instructions: &[Instruction],
    payer: &Keypair,
    signers: &[&Keypair],
) -> Result<TransactionMetadata, FailedTransactionMetadata> {
    let mut all_signers = vec![payer];
    all_signers.extend_from_slice(signers);
    let transaction = Transaction::new_signed_with_payer(
        instructions,
        Some(&payer.pubkey()),
        &all_signers,
        svm.latest_blockhash(),
    );
    let result = svm.send_transaction(transaction);
    svm.expire_blockhash();
    result
}

fn custom_code(result: Result<TransactionMetadata, FailedTransactionMetadata>) -> u32 {
    match result.map(|_| ()).unwrap_err().err {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => code,
        other => panic!("expected a program error, got {:?}", other),
    }
}

fn create_mint(svm: &mut LiteSVM, authority: &Keypair) -> Pubkey {
    let mint = Keypair::new();
    let rent = svm.minimum_balance_for_rent_exemption(spl_token::state::Mint::LEN);
    let instructions = [
        system_instruction::create_account(
            &authority.pubkey(),
            &mint.pubkey(),
            rent,
            spl_token::state::Mint::LEN as u64,
            &spl_token::ID,
        ),
        spl_token::instruction::initialize_mint2(&spl_token::ID, &mint.pubkey(), &authority.pubkey(), None, 6)
            .unwrap(),
    ];
    send(svm, &instructions, authority, &[&mint]).unwrap();
    mint.pubkey()
}

fn create_token_account(svm: &mut LiteSVM, payer: &Keypair, mint: &Pubkey, owner: &Pubkey) -> Pubkey {
    let account = Keypair::new();
    let rent = svm.minimum_balance_for_rent_exemption(spl_token::state::Account::LEN);
    let instructions = [
        system_instruction::create_account(
            &payer.pubkey(),
            &account.pubkey(),
            rent,
            spl_token::state::Account::LEN as u64,
            &spl_token::ID,
        ),
        spl_token::instruction::initialize_account3(&spl_token::ID, &account.pubkey(), mint, owner).unwrap(),
    ];
    send(svm, &instructions, payer, &[&account]).unwrap();
    account.pubkey()
}

fn balance(svm: &LiteSVM, account: &Pubkey) -> u64 {
    let account = svm.get_account(account).unwrap();
    spl_token::state::Account::unpack(&account.data).unwrap().amount
}

impl Vault {
    /// Vault with one allowed caller and one allowed asset, holding `funding`.
    fn new(funding: u64) -> Self {
        let mut svm = LiteSVM::new();
        let path = format!("{}/../../target/deploy/reward_vault.so", env!("CARGO_MANIFEST_DIR"));
        let bytes = fs::read(&path).unwrap_or_else(|e| panic!("Failed to read program bytes at {}: {}", path, e));
        svm.add_program(reward_vault::ID, &bytes);

        let admin = Keypair::new();
        let caller = Keypair::new();
        svm.airdrop(&admin.pubkey(), 100_000_000_000).unwrap();
        svm.airdrop(&caller.pubkey(), 1_000_000_000).unwrap();

        let asset = create_mint(&mut svm, &admin);
        let (vault_config, _) = Pubkey::find_program_address(&[VAULT_CONFIG_SEED], &reward_vault::ID);
        let custody = get_associated_token_address(&vault_config, &asset);
        let admin_account = create_token_account(&mut svm, &admin, &asset, &admin.pubkey());

        let mut vault = Vault {
            svm,
            admin,
            caller,
            asset,
            vault_config,
            custody,
            admin_account,
        };

        let initialize = Instruction {
            program_id: reward_vault::ID,
            accounts: reward_vault::accounts::InitializeVault {
                vault_config,
                admin: vault.admin.pubkey(),
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: reward_vault::instruction::InitializeVault {}.data(),
        };
        let allow_caller = vault.admin_instruction(
            reward_vault::instruction::SetCallerAllowed {
                callers: vec![vault.caller.pubkey()],
                allowed: true,
            }
            .data(),
        );
        let allow_asset = vault.admin_instruction(
            reward_vault::instruction::SetAssetAllowed {
                assets: vec![asset],
                allowed: true,
            }
            .data(),
        );
        send(&mut vault.svm, &[initialize, allow_caller, allow_asset], &vault.admin, &[]).unwrap();

        if funding > 0 {
            let mint_to = spl_token::instruction::mint_to(
                &spl_token::ID,
                &asset,
                &vault.admin_account,
                &vault.admin.pubkey(),
                &[],
                funding,
            )
            .unwrap();
            let fund = vault.fund_instruction(asset, vault.admin_account, funding);
            send(&mut vault.svm, &[mint_to, fund], &vault.admin, &[]).unwrap();
        }
        vault
    }

    fn admin_instruction(&self, data: Vec<u8>) -> Instruction {
        Instruction {
            program_id: reward_vault::ID,
            accounts: reward_vault::accounts::VaultAdmin {
                vault_config: self.vault_config,
                admin: self.admin.pubkey(),
            }
            .to_account_metas(None),
            data,
        }
    }

    fn fund_instruction(&self, asset: Pubkey, funder_account: Pubkey, amount: u64) -> Instruction {
        Instruction {
            program_id: reward_vault::ID,
            accounts: reward_vault::accounts::FundVault {
                vault_config: self.vault_config,
                asset_mint: asset,
                vault_custody: get_associated_token_address(&self.vault_config, &asset),
                funder_token_account: funder_account,
                funder: self.admin.pubkey(),
                token_program: spl_token::ID,
                associated_token_program: associated_token::ID,
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: reward_vault::instruction::FundVault { amount }.data(),
        }
    }

    fn disburse(
        &mut self,
        caller: &Keypair,
        asset: Pubkey,
        destination: Pubkey,
        amount: u64,
    ) -> Result<TransactionMetadata, FailedTransactionMetadata> {
        let instruction = Instruction {
            program_id: reward_vault::ID,
            accounts: reward_vault::accounts::Disburse {
                vault_config: self.vault_config,
                caller: caller.pubkey(),
                asset_mint: asset,
                vault_custody: get_associated_token_address(&self.vault_config, &asset),
                destination,
                token_program: spl_token::ID,
            }
            .to_account_metas(None),
            data: reward_vault::instruction::Disburse { amount }.data(),
        };
        send(&mut self.svm, &[instruction], caller, &[])
    }

    fn admin_withdraw(&mut self, amount: u64, take_all: bool) -> Result<TransactionMetadata, FailedTransactionMetadata> {
        let instruction = Instruction {
            program_id: reward_vault::ID,
            accounts: reward_vault::accounts::AdminWithdraw {
                vault_config: self.vault_config,
                admin: self.admin.pubkey(),
                asset_mint: self.asset,
                vault_custody: self.custody,
                admin_token_account: self.admin_account,
                token_program: spl_token::ID,
            }
            .to_account_metas(None),
            data: reward_vault::instruction::AdminWithdraw { amount, take_all }.data(),
        };
        send(&mut self.svm, &[instruction], &self.admin, &[])
    }
}

#[test]
#[ignore = "needs target/deploy/reward_vault.so from an SBF build"]
fn test_disburse_pays_the_caller() {
    let mut vault = Vault::new(10_000);
    let caller = vault.caller.insecure_clone();
    let destination = create_token_account(&mut vault.svm, &vault.admin, &vault.asset, &caller.pubkey());

    vault.disburse(&caller, vault.asset, destination, 2_500).unwrap();
    assert_eq!(balance(&vault.svm, &destination), 2_500);
    assert_eq!(balance(&vault.svm, &vault.custody), 7_500);

    assert_eq!(
        custom_code(vault.disburse(&caller, vault.asset, destination, 7_501)),
        u32::from(VaultError::InsufficientVaultBalance)
    );
}

#[test]
#[ignore = "needs target/deploy/reward_vault.so from an SBF build"]
fn test_unlisted_asset_without_custody() {
    let mut vault = Vault::new(10_000);
    let caller = vault.caller.insecure_clone();
    let stranger = Keypair::new();
    vault.svm.airdrop(&stranger.pubkey(), 1_000_000_000).unwrap();

    // Never funded, so the vault has no account for this mint
    let unlisted = create_mint(&mut vault.svm, &vault.admin);
    assert!(vault
        .svm
        .get_account(&get_associated_token_address(&vault.vault_config, &unlisted))
        .is_none());
    let destination = create_token_account(&mut vault.svm, &vault.admin, &unlisted, &caller.pubkey());

    assert_eq!(
        custom_code(vault.disburse(&caller, unlisted, destination, 10)),
        u32::from(VaultError::AssetNotAllowed)
    );
    assert_eq!(
        custom_code(vault.disburse(&caller, unlisted, destination, 0)),
        u32::from(VaultError::ZeroAmount)
    );
    assert_eq!(
        custom_code(vault.disburse(&stranger, unlisted, destination, 10)),
        u32::from(VaultError::CallerNotAuthorized)
    );
}

#[test]
#[ignore = "needs target/deploy/reward_vault.so from an SBF build"]
fn test_unlisted_caller_with_mismatched_destination() {
    let mut vault = Vault::new(10_000);
    let stranger = Keypair::new();
    vault.svm.airdrop(&stranger.pubkey(), 1_000_000_000).unwrap();

    let other_mint = create_mint(&mut vault.svm, &vault.admin);
    let destination = create_token_account(&mut vault.svm, &vault.admin, &other_mint, &stranger.pubkey());

    assert_eq!(
        custom_code(vault.disburse(&stranger, vault.asset, destination, 10)),
        u32::from(VaultError::CallerNotAuthorized)
    );
    assert_eq!(balance(&vault.svm, &vault.custody), 10_000);
}

#[test]
#[ignore = "needs target/deploy/reward_vault.so from an SBF build"]
fn test_fund_rejects_unlisted_asset() {
    let mut vault = Vault::new(0);
    let admin = vault.admin.insecure_clone();
    let unlisted = create_mint(&mut vault.svm, &admin);
    let funder_account = create_token_account(&mut vault.svm, &admin, &unlisted, &admin.pubkey());
    let mint_to =
        spl_token::instruction::mint_to(&spl_token::ID, &unlisted, &funder_account, &admin.pubkey(), &[], 100)
            .unwrap();
    send(&mut vault.svm, &[mint_to], &admin, &[]).unwrap();

    let fund = vault.fund_instruction(unlisted, funder_account, 100);
    assert_eq!(
        custom_code(send(&mut vault.svm, &[fund], &admin, &[])),
        u32::from(VaultError::AssetNotAllowed)
    );
}

#[test]
#[ignore = "needs target/deploy/reward_vault.so from an SBF build"]
fn test_admin_withdraw_take_all() {
    let mut vault = Vault::new(9_000);

    vault.admin_withdraw(1, true).unwrap();
    assert_eq!(balance(&vault.svm, &vault.custody), 0);
    assert_eq!(balance(&vault.svm, &vault.admin_account), 9_000);

    assert_eq!(
        custom_code(vault.admin_withdraw(1, true)),
        u32::from(VaultError::ZeroAmount)
    );
}
