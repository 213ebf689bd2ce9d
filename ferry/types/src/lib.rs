mod address;
pub mod chains;
mod error;
mod event;
mod fee;
mod hex_binary;
mod message;
mod recipient;
mod result;
mod route;

pub use {
    address::*, chains::ChainId, error::*, event::*, fee::*, hex_binary::*, message::*,
    recipient::*, result::*, route::*,
};
