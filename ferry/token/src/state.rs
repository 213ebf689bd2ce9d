use {
    ferry_storage::{Counters, Item, Map},
    ferry_types::{Addr, ChainId, Route},
};

pub const OWNER: Item<Addr> = Item::new("owner");

// remote chain => (remote bridge, local bridge)
pub const TRUSTED_REMOTES: Map<ChainId, Route> = Map::new("trusted_remote");

// (remote chain, remote bridge) => last nonce assigned on the channel
pub const OUTBOUND_NONCES: Counters<(ChainId, Addr)> = Counters::new("outbound_nonce", 0, 1);

// (remote chain, remote bridge) => last nonce accepted on the channel
pub const INBOUND_NONCES: Counters<(ChainId, Addr)> = Counters::new("inbound_nonce", 0, 1);

// account => balance
pub const BALANCES: Map<Addr, u128> = Map::new("balance");

pub const SUPPLY: Item<u128> = Item::new("supply");

// (owner, spender) => allowance
pub const ALLOWANCES: Map<(Addr, Addr), u128> = Map::new("allowance");
