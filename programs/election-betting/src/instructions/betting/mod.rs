pub mod place_stake;
pub mod claim_winnings;

pub use place_stake::*;
pub use claim_winnings::*;
