use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::LOTTERY_SEED;
use crate::state::Lottery;

/// Accounts required to buy a lottery ticket.
#[derive(Accounts)]
pub struct BuyTicket<'info> {
    /// The account paying for the ticket. Recorded as the player.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Lottery state account, also the vault holding the pot.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,

    /// System program interface
    pub system_program: Program<'info, System>,
}

/// Buys one lottery ticket for the caller.
///
/// Steps performed:
/// 1. Check the lottery is open and `amount` equals the ticket price.
/// 2. Record the player and grow the pot.
/// 3. Transfer `amount` lamports from payer to the lottery account.
///
/// A failed transfer aborts the transaction, which also discards step 2.
///
/// # Arguments
/// * `ctx` - Context containing BuyTicket accounts
/// * `amount` - Lamports attached to the purchase
pub fn process_buy_ticket(ctx: Context<BuyTicket>, amount: u64) -> Result<()> {
    let purchased = ctx
        .accounts
        .lottery
        .buy_ticket(ctx.accounts.payer.key(), amount)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.payer.to_account_info(),
                to: ctx.accounts.lottery.to_account_info(),
            },
        ),
        amount,
    )?;

    msg!("Ticket bought by {}", purchased.participant);
    msg!("Tickets sold: {}", ctx.accounts.lottery.players.len());
    emit!(purchased);

    Ok(())
}
