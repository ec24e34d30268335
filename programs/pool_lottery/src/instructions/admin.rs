use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::state::Lottery;

/// Accounts required to create the lottery.
/// The PDA can only be initialized once per deployment.
#[derive(Accounts)]
pub struct InitializeLottery<'info> {
    /// Becomes the operator and pays for the account.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The Lottery state account holding tickets and the pot.
    #[account(
        init,
        payer = payer,
        space = 8 + Lottery::INIT_SPACE,
        seeds = [LOTTERY_SEED],
        bump
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Accounts required to open or close ticket sales.
#[derive(Accounts)]
pub struct ToggleLottery<'info> {
    /// Must be the lottery operator, checked by the handler.
    pub operator: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,
}

/// Initializes the lottery with the signer as operator.
///
/// # Arguments
/// * `ctx` - Context holding the InitializeLottery accounts
/// * `price` - Ticket price in lamports, must be non-zero
pub fn process_initialize_lottery(ctx: Context<InitializeLottery>, price: u64) -> Result<()> {
    let lottery = Lottery::new(ctx.accounts.payer.key(), price, ctx.bumps.lottery)?;
    ctx.accounts.lottery.set_inner(lottery);

    msg!("Lottery created by {}", ctx.accounts.payer.key());
    msg!("Ticket price: {}", price);

    Ok(())
}

pub fn process_toggle_lottery(ctx: Context<ToggleLottery>) -> Result<()> {
    let toggled = ctx.accounts.lottery.toggle(ctx.accounts.operator.key())?;

    msg!("Lottery open: {}", toggled.is_open);
    emit!(toggled);

    Ok(())
}
