use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    /// Purchases are blocked until the operator reopens the lottery.
    #[msg("Lottery is closed")]
    LotteryClosed,

    /// The attached amount must equal the ticket price exactly.
    #[msg("Incorrect ticket price")]
    IncorrectTicketPrice,

    #[msg("Only owner can call this")]
    NotOperator,

    #[msg("No tickets have been sold in this round")]
    EmptyPool,

    /// The pot could not be delivered to the drawn player.
    #[msg("Prize transfer to the winner failed")]
    TransferFailed,

    #[msg("The lottery has sold the maximum number of tickets")]
    LotteryFull,

    #[msg("Ticket price must be greater than zero")]
    InvalidTicketPrice,

    #[msg("Arithmetic overflow")]
    MathOverflow,
}
