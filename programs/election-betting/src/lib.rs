use anchor_lang::prelude::*;

pub mod constants;
pub mod state;
pub mod instructions;
pub mod errors;
pub mod events;
pub mod utils;

#[cfg(test)]
mod test_utils;

use instructions::*;
use state::{MarketPhase, Outcome, PoolTotals};

declare_id!("AzXsxRLHM49hb6C1ZLna3reo5BdnUvWCNPtXT8yxY3Me");

#[program]
pub mod election_betting {
    use super::*;

    pub fn create_market(ctx: Context<CreateMarket>, market_id: u64, params: CreateMarketParams) -> Result<()> {
        instructions::admin::create_market::process_create_market(ctx, market_id, params)
    }

    /// Stake `amount` lamports on `outcome` while betting is open.
    pub fn place_stake(ctx: Context<PlaceStake>, outcome: Outcome, amount: u64) -> Result<()> {
        instructions::betting::place_stake::process_place_stake(ctx, outcome, amount)
    }

    /// Arbiter-only, once, at or after the deadline.
    pub fn resolve_election(ctx: Context<ResolveElection>, outcome: Outcome) -> Result<()> {
        instructions::arbiter::resolve_election::process_resolve_election(ctx, outcome)
    }

    /// Pays the signer's share of the combined pool and returns the amount.
    pub fn claim_winnings(ctx: Context<ClaimWinnings>) -> Result<u64> {
        instructions::betting::claim_winnings::process_claim_winnings(ctx)
    }

    pub fn get_pool_totals(ctx: Context<ViewMarket>) -> Result<PoolTotals> {
        instructions::views::get_pool_totals(ctx)
    }

    pub fn get_deadline(ctx: Context<ViewMarket>) -> Result<i64> {
        instructions::views::get_deadline(ctx)
    }

    pub fn is_resolved(ctx: Context<ViewMarket>) -> Result<bool> {
        instructions::views::is_resolved(ctx)
    }

    pub fn get_winning_outcome(ctx: Context<ViewMarket>) -> Result<Option<Outcome>> {
        instructions::views::get_winning_outcome(ctx)
    }

    pub fn get_market_phase(ctx: Context<ViewMarket>) -> Result<MarketPhase> {
        instructions::views::get_market_phase(ctx)
    }

    pub fn get_bet(ctx: Context<ViewBet>, bettor: Pubkey, outcome: Outcome) -> Result<u64> {
        instructions::views::get_bet(ctx, bettor, outcome)
    }

    pub fn has_claimed(ctx: Context<ViewBet>, bettor: Pubkey) -> Result<bool> {
        instructions::views::has_claimed(ctx, bettor)
    }
}
