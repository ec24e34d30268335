pub mod admin;
pub mod buy_ticket;
pub mod pick_winner;
pub mod view;

pub use admin::*;
pub use buy_ticket::*;
pub use pick_winner::*;
pub use view::*;
