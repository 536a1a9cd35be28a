//! Entry points of the individual deployer subcommands.

pub mod claim_topics;
pub mod list_instances;
pub mod token_info;
pub mod tokens;
pub mod trex;

use {
    crate::{arguments::DeployArguments, record::Recorder},
    alloy_primitives::Address,
    anyhow::Context,
    contracts::{Artifacts, ConstructorArgs, ContractDeployer, NodeDeployer},
    ethrpc::Connection,
};

/// Everything a deployment script needs: where it deploys, who deploys and the
/// deployer that resolves artifacts and sends transactions.
pub struct Session {
    pub network: String,
    pub deployer: Address,
    /// Address of the secondary key, if one is configured.
    pub secondary: Option<Address>,
    pub contracts: ContractDeployer,
}

impl Session {
    pub async fn connect(args: &DeployArguments) -> anyhow::Result<Self> {
        let connection = Connection::initialize(&args.chain)
            .await
            .context("failed to connect to node")?;
        let node = NodeDeployer::new(
            connection.provider.clone(),
            connection.deployer(),
            args.chain.report_gas,
        );
        Ok(Self {
            network: connection.network.to_string(),
            deployer: connection.deployer(),
            secondary: connection.signers().get(1).copied(),
            contracts: ContractDeployer::new(Box::new(node), Artifacts::new(&args.artifacts_dir)),
        })
    }

    /// Deploys one contract and adds it to `recorder`. A failure logs the
    /// contracts deployed so far before it is returned.
    pub async fn deploy(
        &self,
        recorder: &mut Recorder,
        args: &dyn ConstructorArgs,
    ) -> anyhow::Result<Address> {
        match self.contracts.deploy(args).await {
            Ok(address) => {
                recorder.add(args.contract(), address);
                Ok(address)
            }
            Err(err) => {
                recorder.log_partial();
                Err(err).with_context(|| format!("failed to deploy {}", args.contract()))
            }
        }
    }

    pub fn recorder(&self) -> Recorder {
        Recorder::new(&self.network, self.deployer)
    }
}
