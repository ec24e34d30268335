use anchor_lang::prelude::*;

/// Seed of the lottery PDA. There is one lottery per program deployment.
#[constant]
pub const LOTTERY_SEED: &[u8] = b"lottery";

/// 0.01 SOL, the price the bootstrap script configures by default.
#[constant]
pub const DEFAULT_TICKET_PRICE: u64 = 10_000_000;

/// Tickets a single cycle can hold. Sizes `Lottery::players`.
pub const MAX_PLAYERS: usize = 256;

/// Players returned by one `get_players` call. A `Vec<Pubkey>` of this
/// length (4 + 31 * 32 bytes) fits in the 1024 byte return data limit.
pub const MAX_PLAYERS_PER_PAGE: usize = 31;

/// Off-chain rule: clients wait for this many tickets before offering a draw.
/// The program itself accepts a draw with a single player.
pub const MIN_TICKETS_FOR_DRAW: usize = 3;
