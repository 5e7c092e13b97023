/// PDA seeds
pub const LEDGER_SEED: &[u8] = b"ledger";
pub const TIER_REGISTRY_SEED: &[u8] = b"tier_registry";
pub const POSITION_SEED: &[u8] = b"position";
pub const STAKE_CUSTODY_SEED: &[u8] = b"stake_custody";
pub const REWARD_CUSTODY_SEED: &[u8] = b"reward_custody";

/// Time constants
pub const SECONDS_PER_DAY: i64 = 86_400;
pub const SECONDS_PER_YEAR: u64 = 365 * 86_400;

/// Rate constants
pub const MAX_RATE_BPS: u16 = 10_000;
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Lock durations in canonical tier order
pub const TIER_DURATIONS: [i64; 5] = [
    SECONDS_PER_DAY,       // 1 day
    7 * SECONDS_PER_DAY,   // 1 week
    30 * SECONDS_PER_DAY,  // 1 month
    180 * SECONDS_PER_DAY, // 6 months
    365 * SECONDS_PER_DAY, // 1 year
];

/// Position ids start here and only ever increase
pub const FIRST_POSITION_ID: u64 = 1;

/// Current layout version of ledger accounts
pub const LEDGER_VERSION: u8 = 1;
