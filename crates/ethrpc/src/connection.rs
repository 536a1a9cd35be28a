use {
    crate::{AlloyProvider, arguments::Arguments, networks::Network},
    alloy::{
        network::EthereumWallet,
        primitives::Address,
        providers::{Provider, ProviderBuilder},
        rpc::client::ClientBuilder,
        signers::local::PrivateKeySigner,
        transports::TransportError,
    },
    url::Url,
};

#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error("PRIVATE_KEY must be set to sign transactions on {network}")]
    MissingPrivateKey { network: Network },
    #[error("node at {host} reports chain {actual} but {network} is chain {expected}")]
    ChainMismatch {
        network: Network,
        host: String,
        expected: u64,
        actual: u64,
    },
    #[error("configured deployer {expected} does not match signer {actual}")]
    DeployerMismatch { expected: Address, actual: Address },
    #[error("the node does not expose any unlocked accounts")]
    NoAccounts,
    #[error(transparent)]
    Rpc(#[from] TransportError),
}

/// A node connection together with the identity that signs transactions sent
/// through it. Built once per process and shared by reference.
#[derive(Debug, Clone)]
pub struct Connection {
    pub network: Network,
    pub provider: AlloyProvider,
    signers: Vec<Address>,
    deployer: Address,
}

impl Connection {
    /// Connects to the node configured by `args`.
    ///
    /// Fails before any request is sent when a remote network is selected
    /// without a private key.
    pub async fn initialize(args: &Arguments) -> Result<Self, ConnectionError> {
        let signers = signers(args)?;
        let provider = provider(&args.rpc_url(), &signers);
        Self::with_provider(args, provider, &signers).await
    }

    /// Checks an already built provider against `args`: the node must serve
    /// the configured network and the deploying account must match
    /// `DEPLOYER` if that is set.
    pub async fn with_provider(
        args: &Arguments,
        provider: AlloyProvider,
        signers: &[PrivateKeySigner],
    ) -> Result<Self, ConnectionError> {
        let host = args.rpc_url().host_str().unwrap_or_default().to_string();
        let chain_id = provider.get_chain_id().await?;
        if chain_id != args.network.chain_id() {
            return Err(ConnectionError::ChainMismatch {
                network: args.network,
                host,
                expected: args.network.chain_id(),
                actual: chain_id,
            });
        }

        let deployer = match signers.first() {
            Some(signer) => signer.address(),
            None => provider
                .get_accounts()
                .await?
                .first()
                .copied()
                .ok_or(ConnectionError::NoAccounts)?,
        };
        if let Some(expected) = args.deployer {
            if expected != deployer {
                return Err(ConnectionError::DeployerMismatch {
                    expected,
                    actual: deployer,
                });
            }
        }

        tracing::info!(
            network = %args.network,
            %host,
            chain_id,
            %deployer,
            signers = signers.len(),
            "connected to node"
        );
        Ok(Self {
            network: args.network,
            provider,
            signers: signers.iter().map(PrivateKeySigner::address).collect(),
            deployer,
        })
    }

    /// The account deployments are sent from.
    pub fn deployer(&self) -> Address {
        self.deployer
    }

    /// Addresses of all locally held keys, primary first. Empty when the
    /// node's unlocked accounts are used instead.
    pub fn signers(&self) -> &[Address] {
        &self.signers
    }
}

/// Resolves the configured keys into signers, primary first.
pub fn signers(args: &Arguments) -> Result<Vec<PrivateKeySigner>, ConnectionError> {
    match (&args.private_key, args.network.is_local()) {
        (Some(primary), _) => Ok(std::iter::once(primary.clone())
            .chain(args.private_key_2.clone())
            .collect()),
        (None, true) => {
            if args.private_key_2.is_some() {
                tracing::warn!("PRIVATE_KEY_2 is ignored without PRIVATE_KEY");
            }
            Ok(Vec::new())
        }
        (None, false) => Err(ConnectionError::MissingPrivateKey {
            network: args.network,
        }),
    }
}

/// Builds a provider that signs with `signers`, or relies on the node's
/// unlocked accounts if there are none.
pub fn provider(url: &Url, signers: &[PrivateKeySigner]) -> AlloyProvider {
    let rpc = ClientBuilder::default().http(url.clone());
    match signers.split_first() {
        Some((primary, additional)) => {
            let mut wallet = EthereumWallet::new(primary.clone());
            for signer in additional {
                wallet.register_signer(signer.clone());
            }
            ProviderBuilder::new()
                .wallet(wallet)
                .connect_client(rpc)
                .erased()
        }
        None => ProviderBuilder::new().connect_client(rpc).erased(),
    }
}
