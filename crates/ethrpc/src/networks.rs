use {std::fmt, url::Url};

/// Networks the deployment tooling knows how to reach.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, clap::ValueEnum, strum::EnumIter)]
pub enum Network {
    /// A development node on the local machine (anvil, hardhat node).
    Localhost,
    /// The in-process hardhat network exposed on the default port.
    Hardhat,
    Sepolia,
    Mumbai,
    Holesky,
}

impl Network {
    pub fn chain_id(self) -> u64 {
        match self {
            Self::Localhost | Self::Hardhat => 31337,
            Self::Sepolia => 11155111,
            Self::Mumbai => 80001,
            Self::Holesky => 17000,
        }
    }

    /// Local networks expose unlocked accounts, so they can be used without a
    /// private key.
    pub fn is_local(self) -> bool {
        matches!(self, Self::Localhost | Self::Hardhat)
    }

    /// Public endpoint used when no RPC URL was configured for the network.
    pub fn default_rpc_url(self) -> Url {
        let url = match self {
            Self::Localhost | Self::Hardhat => "http://127.0.0.1:8545",
            Self::Sepolia => "https://ethereum-sepolia-rpc.publicnode.com",
            Self::Mumbai => "https://rpc-mumbai.maticvigil.com",
            Self::Holesky => "https://ethereum-holesky-rpc.publicnode.com",
        };
        Url::parse(url).expect("hardcoded URLs are valid")
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Localhost => "localhost",
            Self::Hardhat => "hardhat",
            Self::Sepolia => "sepolia",
            Self::Mumbai => "mumbai",
            Self::Holesky => "holesky",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use {super::*, strum::IntoEnumIterator};

    #[test]
    fn default_urls_are_http() {
        for network in Network::iter() {
            let url = network.default_rpc_url();
            assert!(matches!(url.scheme(), "http" | "https"), "{network}");
        }
    }

    #[test]
    fn only_development_networks_are_local() {
        let local: Vec<_> = Network::iter().filter(|n| n.is_local()).collect();
        assert_eq!(local, [Network::Localhost, Network::Hardhat]);
    }

    #[test]
    fn display_matches_cli_name() {
        use clap::ValueEnum;
        for network in Network::iter() {
            let value = network.to_possible_value().unwrap();
            assert_eq!(value.get_name(), network.to_string());
        }
    }
}
