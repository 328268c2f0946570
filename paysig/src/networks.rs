//! Numeric chain identifiers for known EVM networks.

/// A numeric EIP-155 chain identifier.
pub type ChainId = u64;

/// Ethereum Mainnet chain ID.
pub const ETHEREUM_MAINNET: ChainId = 1;

/// Base Mainnet chain ID.
pub const BASE_MAINNET: ChainId = 8453;

/// Base Sepolia (testnet) chain ID.
pub const BASE_SEPOLIA: ChainId = 84532;

/// Avalanche C-Chain chain ID.
pub const AVALANCHE_MAINNET: ChainId = 43114;

/// Avalanche Fuji (testnet) chain ID.
///
/// The default target network for payment signature normalization; see
/// `XPaymentNormalizer::new` in `paysig-http`.
pub const AVALANCHE_FUJI: ChainId = 43113;

/// Polygon Mainnet chain ID.
pub const POLYGON_MAINNET: ChainId = 137;
