use anchor_lang::prelude::*;
use crate::state::market::Outcome;

#[event]
pub struct MarketCreated {
    pub market_id: u64,
    pub arbiter: Pubkey,
    pub betting_deadline: i64,
}

#[event]
pub struct StakePlaced {
    pub market_id: u64,
    pub bettor: Pubkey,
    pub outcome: Outcome,
    pub amount: u64,
    pub new_a_total: u64,
    pub new_b_total: u64,
    pub timestamp: i64,
}

#[event]
pub struct ElectionResolved {
    pub market_id: u64,
    pub outcome: Outcome,
    pub total_a: u64,
    pub total_b: u64,
    pub timestamp: i64,
}

#[event]
pub struct WinningsClaimed {
    pub market_id: u64,
    pub bettor: Pubkey,
    pub amount: u64,
}
