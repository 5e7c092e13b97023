pub mod ledger;
pub mod position;
pub mod tier_registry;

pub use ledger::*;
pub use position::*;
pub use tier_registry::*;
