/// Pari-mutuel share of the combined pool for one winning stake.
///
/// payout = stake * total_pool / winning_pool
///
/// Intermediate product is taken in `u128` and the quotient truncates toward
/// zero, so summed payouts fall short of `total_pool` by at most
/// `winners - 1` lamports. Returns `None` when `winning_pool` is zero or the
/// result does not fit in a `u64`.
pub fn pari_mutuel_payout(stake: u64, winning_pool: u64, total_pool: u64) -> Option<u64> {
    if winning_pool == 0 {
        return None;
    }
    let payout = (stake as u128)
        .checked_mul(total_pool as u128)?
        .checked_div(winning_pool as u128)?;
    u64::try_from(payout).ok()
}
