pub mod ledger;

mod bridge;
mod state;
mod token;

pub use {bridge::*, state::*, token::*};
