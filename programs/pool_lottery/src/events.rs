use anchor_lang::prelude::*;

#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct TicketPurchased {
    pub participant: Pubkey,
}

#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct WinnerPicked {
    pub winner: Pubkey,
    /// Lamports paid out, the whole pot of the round.
    pub amount: u64,
    /// Number of completed draws, this one included.
    pub round: u64,
}

#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct LotteryToggled {
    pub is_open: bool,
}
