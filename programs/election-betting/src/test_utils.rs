use std::fmt::Debug;

use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use crate::errors::ElectionError;
use crate::state::Market;

pub const DEADLINE: i64 = 3_600;

/// Escrow balance large enough that it never limits a claim.
pub const UNLIMITED_ESCROW: u64 = u64::MAX;

/// Fresh market created at t=0 closing at [`DEADLINE`], with its arbiter.
pub fn market_with_deadline() -> (Market, Pubkey) {
    let arbiter = Pubkey::new_unique();
    let market = Market::new(7, arbiter, DEADLINE, 0, 255).unwrap();
    (market, arbiter)
}

pub fn assert_election_err<T: Debug>(result: Result<T>, expected: ElectionError) {
    let expected_code = u32::from(expected);
    match result {
        Err(Error::AnchorError(err)) => assert_eq!(
            err.error_code_number, expected_code,
            "expected {expected_code}, got {} ({})",
            err.error_name, err.error_msg
        ),
        other => panic!("expected error code {expected_code}, got {other:?}"),
    }
}
