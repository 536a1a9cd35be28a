use {
    crate::networks::Network,
    alloy::{primitives::Address, signers::local::PrivateKeySigner},
    std::fmt::{self, Display, Formatter},
    url::Url,
};

/// Chain access configuration. Populated once from the command line and the
/// process environment and then passed to everything that talks to a node.
#[derive(clap::Parser)]
#[group(skip)]
pub struct Arguments {
    /// The network to connect to.
    #[clap(long, env, default_value = "localhost")]
    pub network: Network,

    /// RPC endpoint that takes precedence over the per-network URLs below.
    #[clap(long, env)]
    pub node_url: Option<Url>,

    #[clap(long, env)]
    pub sepolia_rpc_url: Option<Url>,

    #[clap(long, env)]
    pub mumbai_rpc_url: Option<Url>,

    #[clap(long, env)]
    pub holesky_rpc_url: Option<Url>,

    /// Hex encoded private key of the account that signs deployments.
    /// Required for every network that isn't local.
    #[clap(long, env, hide_env_values = true)]
    pub private_key: Option<PrivateKeySigner>,

    /// Hex encoded private key of a secondary account, registered with the
    /// wallet next to the primary one.
    #[clap(long, env, hide_env_values = true)]
    pub private_key_2: Option<PrivateKeySigner>,

    /// Address the deployments are expected to come from. Connecting fails
    /// if the configured signer has a different address.
    #[clap(long, env)]
    pub deployer: Option<Address>,

    /// Log the gas used by every deployment transaction at info level.
    #[clap(long, env)]
    pub report_gas: bool,
}

impl Arguments {
    /// The RPC endpoint to use for the selected network.
    pub fn rpc_url(&self) -> Url {
        let configured = match self.network {
            Network::Localhost | Network::Hardhat => None,
            Network::Sepolia => self.sepolia_rpc_url.as_ref(),
            Network::Mumbai => self.mumbai_rpc_url.as_ref(),
            Network::Holesky => self.holesky_rpc_url.as_ref(),
        };
        self.node_url
            .as_ref()
            .or(configured)
            .cloned()
            .unwrap_or_else(|| self.network.default_rpc_url())
    }
}

impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let Self {
            network,
            node_url,
            sepolia_rpc_url,
            mumbai_rpc_url,
            holesky_rpc_url,
            private_key,
            private_key_2,
            deployer,
            report_gas,
        } = self;

        writeln!(f, "network: {network}")?;
        // URLs of hosted nodes regularly embed API keys.
        display_secret_option(f, "node_url", node_url)?;
        display_secret_option(f, "sepolia_rpc_url", sepolia_rpc_url)?;
        display_secret_option(f, "mumbai_rpc_url", mumbai_rpc_url)?;
        display_secret_option(f, "holesky_rpc_url", holesky_rpc_url)?;
        display_secret_option(f, "private_key", private_key)?;
        display_secret_option(f, "private_key_2", private_key_2)?;
        display_option(f, "deployer", deployer)?;
        writeln!(f, "report_gas: {report_gas}")?;
        Ok(())
    }
}

pub fn display_secret_option<T>(f: &mut Formatter<'_>, name: &str, option: &Option<T>) -> fmt::Result {
    display_option(f, name, &option.as_ref().map(|_| "SECRET"))
}

pub fn display_option(f: &mut Formatter<'_>, name: &str, option: &Option<impl Display>) -> fmt::Result {
    write!(f, "{name}: ")?;
    match option {
        Some(display) => writeln!(f, "{display}"),
        None => writeln!(f, "None"),
    }
}
