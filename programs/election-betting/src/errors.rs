use anchor_lang::prelude::*;

#[error_code]
pub enum ElectionError {
    #[msg("Betting period has ended")]
    BettingClosed,
    #[msg("Betting period has not ended")]
    BettingStillOpen,
    #[msg("Only the arbiter may resolve")]
    NotArbiter,
    #[msg("Election has already been resolved")]
    AlreadyResolved,
    #[msg("Election not yet resolved")]
    NotResolved,
    #[msg("No stake on winning outcome")]
    NoWinningStake,
    #[msg("Winnings already claimed")]
    AlreadyClaimed,
    #[msg("Stake amount must be greater than 0")]
    ZeroStake,
    #[msg("Betting deadline must be in the future")]
    DeadlineInPast,
    #[msg("Arithmetic overflow")]
    MathOverflow,
    #[msg("Escrow balance insufficient for payout")]
    InsufficientEscrow,
}

/// Coarse grouping of [`ElectionError`] by what the caller can do about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Wrong time window. Retrying in the right window may succeed.
    Phase,
    /// Caller is not the required identity.
    Authorization,
    /// A one-shot transition was already taken, or its prerequisite was not.
    State,
    /// Malformed instruction arguments.
    Input,
    /// Overflow or escrow shortfall. Indicates a broken ledger invariant.
    Arithmetic,
}

impl ElectionError {
    pub fn class(&self) -> ErrorClass {
        match self {
            ElectionError::BettingClosed | ElectionError::BettingStillOpen => ErrorClass::Phase,
            ElectionError::NotArbiter => ErrorClass::Authorization,
            ElectionError::AlreadyResolved
            | ElectionError::NotResolved
            | ElectionError::NoWinningStake
            | ElectionError::AlreadyClaimed => ErrorClass::State,
            ElectionError::ZeroStake | ElectionError::DeadlineInPast => ErrorClass::Input,
            ElectionError::MathOverflow | ElectionError::InsufficientEscrow => {
                ErrorClass::Arithmetic
            }
        }
    }
}
