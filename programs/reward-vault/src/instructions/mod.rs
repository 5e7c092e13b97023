pub mod initialize_vault;
pub mod fund_vault;
pub mod disburse;
pub mod admin_withdraw;
pub mod admin;

pub use initialize_vault::*;
pub use fund_vault::*;
pub use disburse::*;
pub use admin_withdraw::*;
pub use admin::*;
