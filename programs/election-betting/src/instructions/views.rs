use anchor_lang::prelude::*;
use crate::constants::{SEED_BET, SEED_MARKET};
use crate::state::{BetRecord, Market, MarketPhase, Outcome, PoolTotals};

// Read-only instructions. Values reach the client as instruction return data.

#[derive(Accounts)]
pub struct ViewMarket<'info> {
    #[account(
        seeds = [SEED_MARKET, market.market_id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Account<'info, Market>,
}

#[derive(Accounts)]
#[instruction(bettor: Pubkey)]
pub struct ViewBet<'info> {
    #[account(
        seeds = [SEED_MARKET, market.market_id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Account<'info, Market>,

    /// CHECK: Address pinned by seeds; may be uninitialized for a bettor who never staked.
    #[account(
        seeds = [SEED_BET, market.key().as_ref(), bettor.as_ref()],
        bump,
    )]
    pub bet_record: UncheckedAccount<'info>,
}

impl<'info> ViewBet<'info> {
    /// Missing record reads as no stakes and unclaimed.
    fn load_record(&self) -> Result<BetRecord> {
        let info = self.bet_record.to_account_info();
        let data = info.try_borrow_data()?;
        BetRecord::from_account_data(&data)
    }
}

pub fn get_pool_totals(ctx: Context<ViewMarket>) -> Result<PoolTotals> {
    Ok(ctx.accounts.market.pool_totals())
}

pub fn get_deadline(ctx: Context<ViewMarket>) -> Result<i64> {
    Ok(ctx.accounts.market.betting_deadline)
}

pub fn is_resolved(ctx: Context<ViewMarket>) -> Result<bool> {
    Ok(ctx.accounts.market.resolved)
}

pub fn get_winning_outcome(ctx: Context<ViewMarket>) -> Result<Option<Outcome>> {
    Ok(ctx.accounts.market.winning_outcome)
}

pub fn get_market_phase(ctx: Context<ViewMarket>) -> Result<MarketPhase> {
    let clock = Clock::get()?;
    Ok(ctx.accounts.market.phase(clock.unix_timestamp))
}

pub fn get_bet(ctx: Context<ViewBet>, _bettor: Pubkey, outcome: Outcome) -> Result<u64> {
    Ok(ctx.accounts.load_record()?.stake_on(outcome))
}

pub fn has_claimed(ctx: Context<ViewBet>, _bettor: Pubkey) -> Result<bool> {
    Ok(ctx.accounts.load_record()?.claimed)
}
