use anchor_lang::prelude::*;

use crate::constants::{MAX_PLAYERS, MAX_PLAYERS_PER_PAGE};
use crate::error::ErrorCode;
use crate::events::{LotteryToggled, TicketPurchased, WinnerPicked};
use crate::randomness::winner_index;

#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Lottery {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The account that created the lottery. Only it may draw or toggle.
    pub operator: Pubkey,

    /// The price (in lamports) required to purchase a single ticket.
    pub ticket_price: u64,

    /// Whether tickets can currently be bought.
    pub is_open: bool,

    /// Lamports owed to the next winner. Always `players.len() * ticket_price`.
    /// The account balance also carries the rent reserve on top of this.
    pub pool_value: u64,

    /// Number of completed draws.
    pub round: u64,

    /// One entry per ticket sold since the last draw, in purchase order.
    #[max_len(MAX_PLAYERS)]
    pub players: Vec<Pubkey>,
}

impl Lottery {
    pub fn new(operator: Pubkey, ticket_price: u64, bump: u8) -> Result<Self> {
        require!(ticket_price > 0, ErrorCode::InvalidTicketPrice);

        Ok(Self {
            bump,
            operator,
            ticket_price,
            is_open: true,
            pool_value: 0,
            round: 0,
            players: Vec::new(),
        })
    }

    /// Up to `limit` players starting at ticket `offset`, clamped to what
    /// a single view call can return.
    pub fn players_page(&self, offset: u32, limit: u32) -> Vec<Pubkey> {
        let limit = (limit as usize).min(MAX_PLAYERS_PER_PAGE);
        self.players
            .iter()
            .skip(offset as usize)
            .take(limit)
            .copied()
            .collect()
    }

    fn only_operator(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.operator, ErrorCode::NotOperator);
        Ok(())
    }

    /// Records one ticket for `buyer` who attached `paid` lamports.
    ///
    /// Nothing changes unless every check passes. The caller moves the
    /// lamports only after this returns `Ok`.
    pub fn buy_ticket(&mut self, buyer: Pubkey, paid: u64) -> Result<TicketPurchased> {
        require!(self.is_open, ErrorCode::LotteryClosed);
        require_eq!(paid, self.ticket_price, ErrorCode::IncorrectTicketPrice);
        require!(self.players.len() < MAX_PLAYERS, ErrorCode::LotteryFull);

        let pool_value = self
            .pool_value
            .checked_add(paid)
            .ok_or(ErrorCode::MathOverflow)?;

        self.players.push(buyer);
        self.pool_value = pool_value;

        Ok(TicketPurchased { participant: buyer })
    }

    /// Draws a winner from `entropy` and hands the whole pot to `payout`.
    ///
    /// The round is cleared before `payout` runs, so a reentrant draw sees an
    /// empty pool. If `payout` fails, the account is put back exactly as it
    /// was before the call and the error is returned.
    pub fn pick_winner<F>(
        &mut self,
        caller: Pubkey,
        entropy: &[u8; 32],
        payout: F,
    ) -> Result<WinnerPicked>
    where
        F: FnOnce(&mut Self, &WinnerPicked) -> Result<()>,
    {
        self.only_operator(&caller)?;
        let index = winner_index(entropy, self.players.len()).ok_or(ErrorCode::EmptyPool)?;

        let snapshot = self.clone();
        let event = WinnerPicked {
            winner: self.players[index],
            amount: self.pool_value,
            round: self.round.checked_add(1).ok_or(ErrorCode::MathOverflow)?,
        };

        self.players.clear();
        self.pool_value = 0;
        self.round = event.round;

        if let Err(err) = payout(self, &event) {
            *self = snapshot;
            return Err(err);
        }

        Ok(event)
    }

    /// Opens a closed lottery or closes an open one. Sold tickets stay.
    pub fn toggle(&mut self, caller: Pubkey) -> Result<LotteryToggled> {
        self.only_operator(&caller)?;

        self.is_open = !self.is_open;

        Ok(LotteryToggled {
            is_open: self.is_open,
        })
    }
}
