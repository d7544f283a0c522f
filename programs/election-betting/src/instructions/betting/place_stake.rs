use anchor_lang::prelude::*;
use anchor_lang::system_program;
use crate::constants::{SEED_BET, SEED_MARKET};
use crate::state::{BetRecord, Market, Outcome};
use crate::events::StakePlaced;

#[derive(Accounts)]
pub struct PlaceStake<'info> {
    /// Market account doubles as the escrow that receives the stake.
    #[account(
        mut,
        seeds = [SEED_MARKET, market.market_id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Account<'info, Market>,

    #[account(
        init_if_needed,
        seeds = [SEED_BET, market.key().as_ref(), bettor.key().as_ref()],
        bump,
        payer = bettor,
        space = BetRecord::LEN
    )]
    pub bet_record: Account<'info, BetRecord>,

    #[account(mut)]
    pub bettor: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_place_stake(
    ctx: Context<PlaceStake>,
    outcome: Outcome,
    amount: u64,
) -> Result<()> {
    let clock = Clock::get()?;
    let market = &mut ctx.accounts.market;
    let record = &mut ctx.accounts.bet_record;

    // Guards run inside `place`; nothing below executes on a rejected stake.
    record.place(market, outcome, amount, clock.unix_timestamp)?;
    record.market = market.key();
    record.bettor = ctx.accounts.bettor.key();
    record.bump = ctx.bumps.bet_record;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.bettor.to_account_info(),
                to: market.to_account_info(),
            },
        ),
        amount,
    )?;

    let totals = market.pool_totals();
    msg!(
        "Stake placed: {} lamports on {:?} by {} for market #{}",
        amount,
        outcome,
        ctx.accounts.bettor.key(),
        market.market_id,
    );

    emit!(StakePlaced {
        market_id: market.market_id,
        bettor: ctx.accounts.bettor.key(),
        outcome,
        amount,
        new_a_total: totals.outcome_a,
        new_b_total: totals.outcome_b,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
