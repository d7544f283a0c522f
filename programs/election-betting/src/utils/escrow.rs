use anchor_lang::prelude::*;
use crate::errors::ElectionError;

/// Lamports an escrow account can release while staying rent-exempt.
pub fn escrow_available(lamports: u64, data_len: usize, rent: &Rent) -> u64 {
    lamports.saturating_sub(rent.minimum_balance(data_len))
}

/// Moves `amount` lamports out of a program-owned escrow account.
///
/// Both balances are computed before either is written.
pub fn release_from_escrow(escrow: &AccountInfo, recipient: &AccountInfo, amount: u64) -> Result<()> {
    let escrow_balance = escrow
        .lamports()
        .checked_sub(amount)
        .ok_or(ElectionError::InsufficientEscrow)?;
    let recipient_balance = recipient
        .lamports()
        .checked_add(amount)
        .ok_or(ElectionError::MathOverflow)?;

    **escrow.try_borrow_mut_lamports()? = escrow_balance;
    **recipient.try_borrow_mut_lamports()? = recipient_balance;
    Ok(())
}
