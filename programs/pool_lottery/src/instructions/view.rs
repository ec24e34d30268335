use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::state::Lottery;

/// Read-only access to the lottery, shared by every view instruction.
#[derive(Accounts)]
pub struct ReadLottery<'info> {
    #[account(
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,
}

/// One page of players. Callers walk the list with `offset` until a short
/// or empty page comes back; `limit` is capped at `MAX_PLAYERS_PER_PAGE`.
pub fn process_get_players(ctx: Context<ReadLottery>, offset: u32, limit: u32) -> Result<Vec<Pubkey>> {
    Ok(ctx.accounts.lottery.players_page(offset, limit))
}

pub fn process_get_player_count(ctx: Context<ReadLottery>) -> Result<u32> {
    Ok(ctx.accounts.lottery.players.len() as u32)
}

pub fn process_get_pool_value(ctx: Context<ReadLottery>) -> Result<u64> {
    Ok(ctx.accounts.lottery.pool_value)
}

pub fn process_lottery_open(ctx: Context<ReadLottery>) -> Result<bool> {
    Ok(ctx.accounts.lottery.is_open)
}

pub fn process_ticket_price(ctx: Context<ReadLottery>) -> Result<u64> {
    Ok(ctx.accounts.lottery.ticket_price)
}

pub fn process_get_operator(ctx: Context<ReadLottery>) -> Result<Pubkey> {
    Ok(ctx.accounts.lottery.operator)
}
