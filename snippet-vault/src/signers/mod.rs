mod ethereum;

pub use ethereum::EthereumSigner;
