use anchor_lang::prelude::*;
use crate::constants::{DISCRIMINATOR_SIZE, OUTCOME_COUNT};
use crate::errors::ElectionError;
use crate::state::market::{Market, Outcome};

/// A bettor's cumulative stakes in one market and whether they have claimed.
#[account]
#[derive(Default, Debug)]
pub struct BetRecord {
    pub market: Pubkey,
    pub bettor: Pubkey,
    pub stakes: [u64; OUTCOME_COUNT],
    pub claimed: bool,
    pub payout: u64,
    pub last_stake_at: i64,
    pub bump: u8,
}

impl BetRecord {
    pub const LEN: usize = DISCRIMINATOR_SIZE + 32 + 32 + 8 * OUTCOME_COUNT + 1 + 8 + 8 + 1;

    /// Decodes raw account data. An uninitialized account reads as a record
    /// with no stakes that has not claimed.
    pub fn from_account_data(data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return Ok(Self::default());
        }
        let record = Self::try_deserialize(&mut &data[..])?;
        Ok(record)
    }

    pub fn stake_on(&self, outcome: Outcome) -> u64 {
        self.stakes[outcome.index()]
    }

    /// Records a stake in both the market pool and this record. The market
    /// enforces the betting window.
    pub fn place(&mut self, market: &mut Market, outcome: Outcome, amount: u64, now: i64) -> Result<()> {
        let stake = self.stakes[outcome.index()]
            .checked_add(amount)
            .ok_or(ElectionError::MathOverflow)?;
        market.record_stake(outcome, amount, now)?;

        self.stakes[outcome.index()] = stake;
        self.last_stake_at = now;
        Ok(())
    }

    /// Settles this record against a resolved market and returns the payout.
    ///
    /// `escrow_available` is what the market account can pay out above its
    /// rent reserve. Every check runs before the first write. The caller moves
    /// the lamports only after this returns, so `claimed` is already set when
    /// the recipient is credited.
    pub fn claim(&mut self, market: &mut Market, escrow_available: u64) -> Result<u64> {
        let winner = market.winning_outcome()?;
        let stake = self.stake_on(winner);
        require!(stake > 0, ElectionError::NoWinningStake);
        require!(!self.claimed, ElectionError::AlreadyClaimed);

        let payout = market.payout_for(stake)?;
        require!(payout <= escrow_available, ElectionError::InsufficientEscrow);
        let paid_out = market.checked_paid_out(payout)?;
        let claims_count = market
            .claims_count
            .checked_add(1)
            .ok_or(ElectionError::MathOverflow)?;

        self.claimed = true;
        self.payout = payout;
        market.total_paid_out = paid_out;
        market.claims_count = claims_count;
        Ok(payout)
    }
}
