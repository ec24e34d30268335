use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::error::ErrorCode;
use crate::events::WinnerPicked;
use crate::randomness::draw_entropy;
use crate::state::Lottery;

/// Accounts required to draw a winner and pay out the pot.
///
/// Every distinct player of the round is expected in `remaining_accounts`
/// (writable), since the winner is only known once the draw runs.
#[derive(Accounts)]
pub struct PickWinner<'info> {
    /// Must be the lottery operator, checked by the handler.
    pub operator: Signer<'info>,

    /// The main lottery state account.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,
}

pub fn process_pick_winner<'info>(
    ctx: Context<'_, '_, '_, 'info, PickWinner<'info>>,
) -> Result<()> {
    let clock = Clock::get()?;
    let entropy = draw_entropy(
        clock.slot,
        clock.unix_timestamp,
        &ctx.accounts.lottery.players,
    );

    msg!("Current slot: {}", clock.slot);
    msg!("Ticket num: {}", ctx.accounts.lottery.players.len());

    let vault = ctx.accounts.lottery.to_account_info();
    let reserve = Rent::get()?.minimum_balance(vault.data_len());
    let candidates = ctx.remaining_accounts;
    let operator = ctx.accounts.operator.key();

    let picked = ctx
        .accounts
        .lottery
        .pick_winner(operator, &entropy, |_, picked| {
            pay_winner(&vault, candidates, picked, reserve)
        })?;

    msg!("Winner: {}", picked.winner);
    msg!("Prize: {}", picked.amount);
    emit!(picked);

    Ok(())
}

/// Moves the pot from the lottery account to the winner's account.
/// The lottery account keeps at least `reserve` lamports.
fn pay_winner<'info>(
    vault: &AccountInfo<'info>,
    candidates: &[AccountInfo<'info>],
    picked: &WinnerPicked,
    reserve: u64,
) -> Result<()> {
    let Some(winner) = candidates.iter().find(|a| *a.key == picked.winner) else {
        msg!("Winner account {} was not supplied", picked.winner);
        return err!(ErrorCode::TransferFailed);
    };
    require!(winner.is_writable, ErrorCode::TransferFailed);

    let vault_after = vault
        .lamports()
        .checked_sub(picked.amount)
        .filter(|left| *left >= reserve)
        .ok_or(ErrorCode::TransferFailed)?;
    let winner_after = winner
        .lamports()
        .checked_add(picked.amount)
        .ok_or(ErrorCode::TransferFailed)?;

    **vault.try_borrow_mut_lamports()? = vault_after;
    **winner.try_borrow_mut_lamports()? = winner_after;

    Ok(())
}
