mod counter;
mod item;
mod key;
mod map;
mod path;
mod storage;

pub use {counter::*, item::*, key::*, map::*, path::*, storage::*};
