use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use election_betting::errors::{ElectionError, ErrorClass};
use election_betting::state::{BetRecord, Market, MarketPhase, Outcome, PoolTotals};

const NOW: i64 = 1_700_000_000;
const DEADLINE: i64 = NOW + 3_600;
const AFTER: i64 = DEADLINE + 1;

struct Ledger {
    market: Market,
    arbiter: Pubkey,
}

impl Ledger {
    fn open() -> Self {
        let arbiter = Pubkey::new_unique();
        let market = Market::new(1, arbiter, DEADLINE, NOW, 254).unwrap();
        Self { market, arbiter }
    }

    fn stake(&mut self, record: &mut BetRecord, outcome: Outcome, amount: u64) {
        record.place(&mut self.market, outcome, amount, NOW).unwrap();
    }

    fn resolve(&mut self, outcome: Outcome) {
        let arbiter = self.arbiter;
        self.market.resolve(&arbiter, outcome, AFTER).unwrap();
    }
}

fn code_of<T: std::fmt::Debug>(result: Result<T>) -> u32 {
    match result {
        Err(Error::AnchorError(err)) => err.error_code_number,
        other => panic!("expected anchor error, got {other:?}"),
    }
}

fn class_of<T: std::fmt::Debug>(result: Result<T>) -> ErrorClass {
    let code = code_of(result);
    let all = [
        ElectionError::BettingClosed,
        ElectionError::BettingStillOpen,
        ElectionError::NotArbiter,
        ElectionError::AlreadyResolved,
        ElectionError::NotResolved,
        ElectionError::NoWinningStake,
        ElectionError::AlreadyClaimed,
        ElectionError::ZeroStake,
        ElectionError::DeadlineInPast,
        ElectionError::MathOverflow,
        ElectionError::InsufficientEscrow,
    ];
    all.into_iter()
        .find(|err| u32::from(*err) == code)
        .map(|err| err.class())
        .unwrap_or_else(|| panic!("unknown error code {code}"))
}

#[test]
fn scenario_a_lone_winner_gets_stake_back() {
    let mut ledger = Ledger::open();
    let mut x = BetRecord::default();
    ledger.stake(&mut x, Outcome::A, 1);
    ledger.resolve(Outcome::A);

    assert_eq!(x.claim(&mut ledger.market, u64::MAX).unwrap(), 1);
}

#[test]
fn scenario_b_winners_split_losing_pool() {
    let mut ledger = Ledger::open();
    let (mut x, mut y, mut z) = (BetRecord::default(), BetRecord::default(), BetRecord::default());
    ledger.stake(&mut x, Outcome::A, 1);
    ledger.stake(&mut y, Outcome::A, 1);
    ledger.stake(&mut z, Outcome::B, 2);
    ledger.resolve(Outcome::A);

    assert_eq!(x.claim(&mut ledger.market, u64::MAX).unwrap(), 2);
    assert_eq!(y.claim(&mut ledger.market, u64::MAX).unwrap(), 2);
    assert_eq!(class_of(z.claim(&mut ledger.market, u64::MAX)), ErrorClass::State);
    assert_eq!(ledger.market.total_paid_out, 4);
    assert_eq!(ledger.market.claims_count, 2);
}

#[test]
fn scenario_c_late_stake_rejected_first_stake_survives() {
    let mut ledger = Ledger::open();
    let mut x = BetRecord::default();
    ledger.stake(&mut x, Outcome::B, 5);

    let late = x.place(&mut ledger.market, Outcome::B, 5, AFTER);
    assert_eq!(class_of(late), ErrorClass::Phase);
    assert_eq!(x.stake_on(Outcome::B), 5);
    assert_eq!(ledger.market.pool_totals(), PoolTotals { outcome_a: 0, outcome_b: 5 });

    ledger.resolve(Outcome::B);
    assert_eq!(x.claim(&mut ledger.market, u64::MAX).unwrap(), 5);
}

#[test]
fn pool_totals_equal_sum_of_stakes() {
    let mut ledger = Ledger::open();
    let mut records: Vec<BetRecord> = (0..12).map(|_| BetRecord::default()).collect();
    let mut staked = 0u64;
    for (i, record) in records.iter_mut().enumerate() {
        let amount = (i as u64 + 1) * 37;
        let outcome = if i % 3 == 0 { Outcome::B } else { Outcome::A };
        ledger.stake(record, outcome, amount);
        staked += amount;
    }

    let from_records: u64 = records
        .iter()
        .map(|r| r.stake_on(Outcome::A) + r.stake_on(Outcome::B))
        .sum();
    assert_eq!(ledger.market.total_pool().unwrap(), staked);
    assert_eq!(from_records, staked);
}

#[test]
fn resolution_guards_by_caller_and_time() {
    let mut ledger = Ledger::open();
    let arbiter = ledger.arbiter;
    let stranger = Pubkey::new_unique();

    for caller in [arbiter, stranger] {
        let early = ledger.market.resolve(&caller, Outcome::A, NOW);
        let expected = if caller == arbiter { ErrorClass::Phase } else { ErrorClass::Authorization };
        assert_eq!(class_of(early), expected);
    }
    assert_eq!(class_of(ledger.market.resolve(&stranger, Outcome::A, AFTER)), ErrorClass::Authorization);

    ledger.market.resolve(&arbiter, Outcome::A, AFTER).unwrap();
    assert_eq!(class_of(ledger.market.resolve(&arbiter, Outcome::B, AFTER + 60)), ErrorClass::State);
    assert_eq!(ledger.market.phase(AFTER + 60), MarketPhase::Resolved);
}

#[test]
fn claims_before_resolution_are_state_errors() {
    let mut ledger = Ledger::open();
    let mut x = BetRecord::default();
    ledger.stake(&mut x, Outcome::A, 3);
    assert_eq!(class_of(x.claim(&mut ledger.market, u64::MAX)), ErrorClass::State);
    assert!(!x.claimed);
}

#[test]
fn payouts_never_exceed_pool_and_dust_is_bounded() {
    let mut ledger = Ledger::open();
    let mut winners: Vec<BetRecord> = (0..7).map(|_| BetRecord::default()).collect();
    let mut loser = BetRecord::default();
    for (i, record) in winners.iter_mut().enumerate() {
        ledger.stake(record, Outcome::A, 3 + i as u64 * 11);
    }
    ledger.stake(&mut loser, Outcome::B, 1_000_003);
    ledger.resolve(Outcome::A);

    let total_pool = ledger.market.total_pool().unwrap();
    let paid: u64 = winners
        .iter_mut()
        .map(|record| record.claim(&mut ledger.market, u64::MAX).unwrap())
        .sum();

    assert!(paid <= total_pool);
    assert!(total_pool - paid <= winners.len() as u64 - 1);
    assert_eq!(ledger.market.total_paid_out, paid);

    for record in winners.iter_mut() {
        assert_eq!(class_of(record.claim(&mut ledger.market, u64::MAX)), ErrorClass::State);
    }
    assert_eq!(ledger.market.total_paid_out, paid);
}
