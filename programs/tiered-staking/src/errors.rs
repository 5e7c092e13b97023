use anchor_lang::prelude::*;

#[error_code]
pub enum StakingError {
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Lock tier is disabled for new stakes")]
    TierDisabled,

    #[msg("No active position with this id for the signer")]
    PositionNotFound,

    #[msg("Lock period has not elapsed")]
    LockNotElapsed,

    #[msg("No reward accrued")]
    NothingToClaim,

    #[msg("Rate exceeds 10000 basis points")]
    RateExceedsMaximum,

    #[msg("Address must not be the zero address")]
    InvalidAddress,

    #[msg("Unauthorized authority for this operation")]
    Unauthorized,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Ledger is already processing an instruction")]
    ReentrantCall,
}
