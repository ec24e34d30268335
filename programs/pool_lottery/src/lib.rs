use anchor_lang::prelude::*;
pub use instructions::*;

pub mod client;
pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod randomness;
pub mod state;

declare_id!("5vhxQ41WgTgAmjMSzHDXkMHPq8nCaDGJtWpEFvBvhGLH");

#[program]
pub mod pool_lottery {
    use super::*;

    pub fn initialize_lottery(ctx: Context<InitializeLottery>, price: u64) -> Result<()> {
        process_initialize_lottery(ctx, price)
    }

    pub fn buy_ticket(ctx: Context<BuyTicket>, amount: u64) -> Result<()> {
        process_buy_ticket(ctx, amount)
    }

    pub fn pick_winner<'info>(ctx: Context<'_, '_, '_, 'info, PickWinner<'info>>) -> Result<()> {
        process_pick_winner(ctx)
    }

    pub fn toggle_lottery(ctx: Context<ToggleLottery>) -> Result<()> {
        process_toggle_lottery(ctx)
    }

    pub fn get_players(ctx: Context<ReadLottery>, offset: u32, limit: u32) -> Result<Vec<Pubkey>> {
        process_get_players(ctx, offset, limit)
    }

    pub fn get_player_count(ctx: Context<ReadLottery>) -> Result<u32> {
        process_get_player_count(ctx)
    }

    pub fn get_pool_value(ctx: Context<ReadLottery>) -> Result<u64> {
        process_get_pool_value(ctx)
    }

    pub fn lottery_open(ctx: Context<ReadLottery>) -> Result<bool> {
        process_lottery_open(ctx)
    }

    pub fn ticket_price(ctx: Context<ReadLottery>) -> Result<u64> {
        process_ticket_price(ctx)
    }

    pub fn get_operator(ctx: Context<ReadLottery>) -> Result<Pubkey> {
        process_get_operator(ctx)
    }
}
