use anchor_lang::prelude::*;
use crate::constants::{DISCRIMINATOR_SIZE, OUTCOME_COUNT};
use crate::errors::ElectionError;
use crate::utils::pari_mutuel_payout;

/// One betting market. Also the escrow: staked lamports sit on this account
/// above its rent-exempt reserve until they are claimed.
#[account]
#[derive(Debug)]
pub struct Market {
    pub market_id: u64,
    pub arbiter: Pubkey,
    pub betting_deadline: i64,
    pub outcome_stakes: [u64; OUTCOME_COUNT],
    pub resolved: bool,
    pub winning_outcome: Option<Outcome>,
    pub created_at: i64,
    pub resolved_at: Option<i64>,
    pub total_paid_out: u64,
    pub claims_count: u64,
    pub bump: u8,
}

impl Market {
    // 8 (discriminator)
    // 8 (market_id) + 32 (arbiter) + 8 (betting_deadline)
    // 8 * 2 (outcome_stakes)
    // 1 (resolved) + 1+1 (winning_outcome option)
    // 8 (created_at) + 1+8 (resolved_at option)
    // 8 (total_paid_out) + 8 (claims_count)
    // 1 (bump)
    pub const LEN: usize = DISCRIMINATOR_SIZE + 8 + 32 + 8 + 8 * OUTCOME_COUNT + 1 + 2 + 8 + 9 + 8 + 8 + 1;

    pub fn new(market_id: u64, arbiter: Pubkey, betting_deadline: i64, now: i64, bump: u8) -> Result<Self> {
        require!(betting_deadline > now, ElectionError::DeadlineInPast);
        Ok(Self {
            market_id,
            arbiter,
            betting_deadline,
            outcome_stakes: [0; OUTCOME_COUNT],
            resolved: false,
            winning_outcome: None,
            created_at: now,
            resolved_at: None,
            total_paid_out: 0,
            claims_count: 0,
            bump,
        })
    }

    pub fn phase(&self, now: i64) -> MarketPhase {
        if self.resolved {
            MarketPhase::Resolved
        } else if now < self.betting_deadline {
            MarketPhase::Open
        } else {
            MarketPhase::Closed
        }
    }

    pub fn pool(&self, outcome: Outcome) -> u64 {
        self.outcome_stakes[outcome.index()]
    }

    pub fn pool_totals(&self) -> PoolTotals {
        PoolTotals {
            outcome_a: self.pool(Outcome::A),
            outcome_b: self.pool(Outcome::B),
        }
    }

    pub fn total_pool(&self) -> Result<u64> {
        self.outcome_stakes
            .iter()
            .try_fold(0u64, |acc, stake| acc.checked_add(*stake))
            .ok_or(error!(ElectionError::MathOverflow))
    }

    /// Adds `amount` to the `outcome` pool while betting is open.
    pub fn record_stake(&mut self, outcome: Outcome, amount: u64, now: i64) -> Result<()> {
        require!(amount > 0, ElectionError::ZeroStake);
        require!(now < self.betting_deadline, ElectionError::BettingClosed);

        let pool = self.outcome_stakes[outcome.index()]
            .checked_add(amount)
            .ok_or(ElectionError::MathOverflow)?;
        // Combined pool must stay representable for payout arithmetic.
        self.total_pool()?
            .checked_add(amount)
            .ok_or(ElectionError::MathOverflow)?;

        self.outcome_stakes[outcome.index()] = pool;
        Ok(())
    }

    /// One-shot arbiter decision. Checks identity, then time, then state.
    pub fn resolve(&mut self, caller: &Pubkey, outcome: Outcome, now: i64) -> Result<()> {
        require_keys_eq!(*caller, self.arbiter, ElectionError::NotArbiter);
        require!(now >= self.betting_deadline, ElectionError::BettingStillOpen);
        require!(!self.resolved, ElectionError::AlreadyResolved);

        self.winning_outcome = Some(outcome);
        self.resolved = true;
        self.resolved_at = Some(now);
        Ok(())
    }

    pub fn winning_outcome(&self) -> Result<Outcome> {
        match self.winning_outcome {
            Some(outcome) if self.resolved => Ok(outcome),
            _ => err!(ElectionError::NotResolved),
        }
    }

    /// Payout owed to a winning stake of `stake` lamports. Does not mutate.
    pub fn payout_for(&self, stake: u64) -> Result<u64> {
        let winner = self.winning_outcome()?;
        require!(stake > 0, ElectionError::NoWinningStake);
        let payout = pari_mutuel_payout(stake, self.pool(winner), self.total_pool()?)
            .ok_or(ElectionError::MathOverflow)?;
        Ok(payout)
    }

    /// `total_paid_out` after disbursing `payout`, if that stays within the
    /// lamports ever staked.
    pub fn checked_paid_out(&self, payout: u64) -> Result<u64> {
        let paid_out = self
            .total_paid_out
            .checked_add(payout)
            .ok_or(ElectionError::MathOverflow)?;
        require!(paid_out <= self.total_pool()?, ElectionError::InsufficientEscrow);
        Ok(paid_out)
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug)]
pub enum Outcome {
    A,
    B,
}

impl Outcome {
    pub const ALL: [Outcome; OUTCOME_COUNT] = [Outcome::A, Outcome::B];

    pub fn index(self) -> usize {
        match self {
            Outcome::A => 0,
            Outcome::B => 1,
        }
    }
}

/// Derived from the clock and the `resolved` flag; never stored.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum MarketPhase {
    Open,
    Closed,
    Resolved,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PoolTotals {
    pub outcome_a: u64,
    pub outcome_b: u64,
}
