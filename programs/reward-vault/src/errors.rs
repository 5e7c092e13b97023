use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    #[msg("Caller is not on the vault's caller allow-list")]
    CallerNotAuthorized,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Asset is not on the vault's asset allow-list")]
    AssetNotAllowed,

    #[msg("Allow-list entry must not be the zero address")]
    InvalidAddress,

    #[msg("Unauthorized authority for this operation")]
    Unauthorized,

    #[msg("Vault custody balance is lower than the requested amount")]
    InsufficientVaultBalance,

    #[msg("Allow-list capacity reached")]
    AllowListFull,

    #[msg("Vault is already processing an instruction")]
    ReentrantCall,

    #[msg("Token account does not match the vault or asset")]
    InvalidTokenAccount,
}
