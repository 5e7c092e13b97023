pub mod initialize_ledger;
pub mod open_position;
pub mod claim_reward;
pub mod terminate_position;
pub mod admin;
pub mod queries;

pub use initialize_ledger::*;
pub use open_position::*;
pub use claim_reward::*;
pub use terminate_position::*;
pub use admin::*;
pub use queries::*;
