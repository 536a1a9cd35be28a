pub mod artifact;
pub mod claim_topics;
pub mod constructor;
pub mod deploy;
pub mod token;
pub mod trex;

#[cfg(any(test, feature = "test-util"))]
pub mod test_util;

pub use {
    artifact::{Artifact, ArtifactError, Artifacts},
    claim_topics::{CLAIM_TOPICS, ClaimTopic},
    constructor::{ConstructorArgs, ConstructorError, NoArgs},
    deploy::{ContractDeployer, Deploy, DeployError, DeployRequest, Deployment, NodeDeployer},
    token::Token,
};

#[cfg(any(test, feature = "test-util"))]
pub use deploy::MockDeploy;
