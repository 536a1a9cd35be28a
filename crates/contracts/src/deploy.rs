//! Submitting contract deployments and waiting for them to be mined.

use {
    crate::{
        artifact::{ArtifactError, Artifacts},
        constructor::{self, ConstructorArgs, ConstructorError},
    },
    alloy::{
        contract::RawCallBuilder,
        network::{Ethereum, ReceiptResponse as _},
        primitives::{Address, Bytes, TxHash},
        providers::{DynProvider, PendingTransactionError},
    },
};

#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
    #[error(transparent)]
    Constructor(#[from] ConstructorError),
    #[error("failed to submit {contract} deployment")]
    Submit {
        contract: String,
        #[source]
        source: alloy::contract::Error,
    },
    #[error("{contract} deployment was not confirmed")]
    Confirm {
        contract: String,
        #[source]
        source: PendingTransactionError,
    },
    #[error("{contract} deployment {transaction} reverted")]
    Reverted { contract: String, transaction: TxHash },
    #[error("{contract} deployment {transaction} did not create a contract")]
    NotDeployed { contract: String, transaction: TxHash },
}

/// A validated deployment ready to be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployRequest {
    pub contract: String,
    /// Bytecode followed by the encoded constructor arguments.
    pub code: Bytes,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deployment {
    pub address: Address,
    pub transaction: TxHash,
    pub gas_used: u64,
}

/// Sends deployment transactions.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait::async_trait]
pub trait Deploy: Send + Sync {
    /// Submits the deployment and waits for its receipt. There are no retries:
    /// whatever the node reports is returned to the caller.
    async fn deploy(&self, request: DeployRequest) -> Result<Deployment, DeployError>;
}

/// Deploys through a node connection.
pub struct NodeDeployer {
    provider: DynProvider,
    from: Address,
    report_gas: bool,
}

impl NodeDeployer {
    pub fn new(provider: DynProvider, from: Address, report_gas: bool) -> Self {
        Self {
            provider,
            from,
            report_gas,
        }
    }
}

#[async_trait::async_trait]
impl Deploy for NodeDeployer {
    async fn deploy(&self, request: DeployRequest) -> Result<Deployment, DeployError> {
        let DeployRequest { contract, code } = request;
        let pending = RawCallBuilder::<_, Ethereum>::new_raw_deploy(self.provider.clone(), code)
            .from(self.from)
            .send()
            .await
            .map_err(|source| DeployError::Submit {
                contract: contract.clone(),
                source,
            })?;
        let transaction = *pending.tx_hash();
        tracing::debug!(%contract, ?transaction, "deployment submitted");

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|source| DeployError::Confirm {
                contract: contract.clone(),
                source,
            })?;
        if !receipt.status() {
            return Err(DeployError::Reverted {
                contract,
                transaction,
            });
        }
        let Some(address) = receipt.contract_address else {
            return Err(DeployError::NotDeployed {
                contract,
                transaction,
            });
        };

        if self.report_gas {
            tracing::info!(%contract, gas_used = receipt.gas_used, "deployment gas");
        }
        Ok(Deployment {
            address,
            transaction,
            gas_used: receipt.gas_used,
        })
    }
}

/// Resolves typed constructor arguments to artifacts and deploys them one at a
/// time.
pub struct ContractDeployer {
    deploy: Box<dyn Deploy>,
    artifacts: Artifacts,
}

impl ContractDeployer {
    pub fn new(deploy: Box<dyn Deploy>, artifacts: Artifacts) -> Self {
        Self { deploy, artifacts }
    }

    /// Deploys the contract `args` belong to and returns its address once the
    /// deployment is mined. Arguments are checked against the artifact's ABI
    /// first so mistakes never reach the network.
    pub async fn deploy(&self, args: &dyn ConstructorArgs) -> Result<Address, DeployError> {
        let contract = args.contract();
        let artifact = self.artifacts.load(contract)?;
        let code = constructor::init_code(&artifact, args)?;

        tracing::info!(contract, ?args, "deploying contract");
        let deployment = self
            .deploy
            .deploy(DeployRequest {
                contract: contract.to_string(),
                code,
            })
            .await?;
        tracing::info!(
            contract,
            address = %deployment.address,
            transaction = %deployment.transaction,
            "contract deployed"
        );
        Ok(deployment.address)
    }
}
