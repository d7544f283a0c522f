use anchor_lang::prelude::*;
use crate::constants::{SEED_BET, SEED_MARKET};
use crate::state::{BetRecord, Market};
use crate::events::WinningsClaimed;
use crate::utils::{escrow_available, release_from_escrow};

#[derive(Accounts)]
pub struct ClaimWinnings<'info> {
    #[account(
        mut,
        seeds = [SEED_MARKET, market.market_id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Account<'info, Market>,

    // A bettor who never staked gets a zeroed record here and fails the
    // stake check; the transaction reverts, so the record is never kept.
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

pub fn process_claim_winnings(ctx: Context<ClaimWinnings>) -> Result<u64> {
    let market = &mut ctx.accounts.market;
    let record = &mut ctx.accounts.bet_record;

    // Escrow keeps its rent-exempt reserve.
    let market_info = market.to_account_info();
    let available = escrow_available(market_info.lamports(), market_info.data_len(), &Rent::get()?);

    // Marks the record claimed before any lamports move.
    let payout = record.claim(market, available)?;
    release_from_escrow(&market_info, &ctx.accounts.bettor.to_account_info(), payout)?;

    msg!(
        "Claimed: bettor={} payout={} pool_total={} market #{}",
        ctx.accounts.bettor.key(),
        payout,
        market.total_pool()?,
        market.market_id,
    );

    emit!(WinningsClaimed {
        market_id: market.market_id,
        bettor: ctx.accounts.bettor.key(),
        amount: payout,
    });

    Ok(payout)
}
