mod endpoint;
mod packet;

pub use {endpoint::*, packet::*};
