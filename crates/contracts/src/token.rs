//! Read only access to deployed tokens.

use {
    alloy::{
        primitives::{Address, U256},
        providers::DynProvider,
    },
    IERC20Metadata::IERC20MetadataInstance,
};

alloy::sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IERC20Metadata {
        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
        function balanceOf(address account) external view returns (uint256);
    }
}

/// A token contract bound to a node connection. Only `view` functions are
/// exposed, nothing here sends transactions.
#[derive(Clone, Debug)]
pub struct Token {
    instance: IERC20MetadataInstance<DynProvider>,
}

impl Token {
    pub fn new(address: Address, provider: DynProvider) -> Self {
        Self {
            instance: IERC20MetadataInstance::new(address, provider),
        }
    }

    pub fn address(&self) -> Address {
        *self.instance.address()
    }

    pub async fn name(&self) -> Result<String, alloy::contract::Error> {
        self.instance.name().call().await
    }

    pub async fn symbol(&self) -> Result<String, alloy::contract::Error> {
        self.instance.symbol().call().await
    }

    pub async fn decimals(&self) -> Result<u8, alloy::contract::Error> {
        self.instance.decimals().call().await
    }

    pub async fn balance_of(&self, holder: Address) -> Result<U256, alloy::contract::Error> {
        self.instance.balanceOf(holder).call().await
    }
}
