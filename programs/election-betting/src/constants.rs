pub const SEED_MARKET: &[u8] = b"market";
pub const SEED_BET: &[u8] = b"bet";
pub const DISCRIMINATOR_SIZE: usize = 8;
pub const OUTCOME_COUNT: usize = 2;
