/// Identifies a chain on the messaging layer. Note, these are messaging-layer
/// identifiers, not EVM chain ids: Ethereum mainnet is 101 here, not 1.
pub type ChainId = u16;

pub const ETHEREUM: ChainId = 101;

pub const BSC: ChainId = 102;

pub const AVALANCHE: ChainId = 106;

pub const POLYGON: ChainId = 109;

pub const ARBITRUM: ChainId = 110;

pub const OPTIMISM: ChainId = 111;

pub const BSC_TESTNET: ChainId = 10102;

pub const FUJI: ChainId = 10106;

pub const MUMBAI: ChainId = 10109;

pub const OPTIMISM_GOERLI: ChainId = 10132;

pub const ARBITRUM_GOERLI: ChainId = 10143;

pub const SEPOLIA: ChainId = 10161;
