pub mod client;
pub mod consts;
pub mod counter;
pub mod error;
pub mod export;
pub mod instruction;
pub mod leaderboard;
pub mod lifetime;
pub mod sdk;
pub mod session;
pub mod state;
pub mod theme;
pub mod view;

pub mod prelude {
    pub use crate::client::*;
    pub use crate::consts::*;
    pub use crate::counter::*;
    pub use crate::error::*;
    pub use crate::export::*;
    pub use crate::instruction::*;
    pub use crate::leaderboard::*;
    pub use crate::lifetime::*;
    pub use crate::sdk::*;
    pub use crate::session::*;
    pub use crate::state::*;
    pub use crate::theme::*;
    pub use crate::view::*;
}

pub use solana_program;

use solana_program::declare_id;

declare_id!("5jpNRVZQyCQWrtBNgUapzm6oaYnwC6kytPKT1YcEhnt");
