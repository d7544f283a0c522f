use anchor_lang::prelude::*;
use crate::constants::SEED_MARKET;
use crate::state::Market;
use crate::events::MarketCreated;

#[derive(Accounts)]
#[instruction(market_id: u64)] // market_id is passed as instruction arg to derive seeds
pub struct CreateMarket<'info> {
    #[account(
        init,
        seeds = [SEED_MARKET, market_id.to_le_bytes().as_ref()],
        bump,
        payer = arbiter,
        space = Market::LEN
    )]
    pub market: Account<'info, Market>,

    /// Creator of the market. Becomes its only resolver.
    #[account(mut)]
    pub arbiter: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct CreateMarketParams {
    pub betting_deadline: i64,
}

pub fn process_create_market(
    ctx: Context<CreateMarket>,
    market_id: u64,
    params: CreateMarketParams,
) -> Result<()> {
    let clock = Clock::get()?;

    let market = Market::new(
        market_id,
        ctx.accounts.arbiter.key(),
        params.betting_deadline,
        clock.unix_timestamp,
        ctx.bumps.market,
    )?;
    ctx.accounts.market.set_inner(market);

    msg!(
        "Market #{} created | arbiter: {} | deadline: {}",
        market_id,
        ctx.accounts.arbiter.key(),
        params.betting_deadline,
    );

    emit!(MarketCreated {
        market_id,
        arbiter: ctx.accounts.arbiter.key(),
        betting_deadline: params.betting_deadline,
    });

    Ok(())
}
