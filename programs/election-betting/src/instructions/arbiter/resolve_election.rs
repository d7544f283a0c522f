use anchor_lang::prelude::*;
use crate::constants::SEED_MARKET;
use crate::state::{Market, Outcome};
use crate::events::ElectionResolved;

#[derive(Accounts)]
pub struct ResolveElection<'info> {
    #[account(
        mut,
        seeds = [SEED_MARKET, market.market_id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Account<'info, Market>,

    // Identity is checked in `Market::resolve` so the ordering of
    // authorization, phase and state failures stays in one place.
    pub arbiter: Signer<'info>,
}

pub fn process_resolve_election(
    ctx: Context<ResolveElection>,
    outcome: Outcome,
) -> Result<()> {
    let market = &mut ctx.accounts.market;
    let clock = Clock::get()?;

    market.resolve(&ctx.accounts.arbiter.key(), outcome, clock.unix_timestamp)?;

    let totals = market.pool_totals();
    msg!(
        "Market #{} resolved: outcome={:?}, a_pool={}, b_pool={}",
        market.market_id,
        outcome,
        totals.outcome_a,
        totals.outcome_b,
    );

    emit!(ElectionResolved {
        market_id: market.market_id,
        outcome,
        total_a: totals.outcome_a,
        total_b: totals.outcome_b,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
