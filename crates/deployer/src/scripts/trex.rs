//! Deploys the ERC-3643 (T-REX) suite and hands its addresses to the token API
//! and frontend through the factory configuration file.

use {
    super::Session,
    crate::{
        arguments::TrexArguments,
        config_file::{self, FactoryConfiguration},
        record::DeploymentRecord,
    },
    alloy_primitives::Address,
    anyhow::Context,
    contracts::{
        NoArgs,
        trex::{
            ClaimIssuer,
            IMPLEMENTATIONS,
            IdFactory,
            Identity,
            ImplementationAuthority,
            TrexFactory,
            TrexGateway,
            TrexImplementationAuthority,
        },
    },
    std::path::Path,
};

/// Lock contract the frontend uses for escrowed transfers.
pub const TOKEN_LOCK: &str = "TokenLock";

/// Accounts written to the configuration next to the contract addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Roles {
    pub ir_agent: Address,
    pub token_agent: Address,
    pub user: Address,
    pub claim_issuer: Address,
}

impl Roles {
    /// Agents default to the deployer. The investor and the claim issuer key
    /// default to the secondary key so they differ from the agents when one is
    /// configured.
    pub fn resolve(args: &TrexArguments, deployer: Address, secondary: Option<Address>) -> Self {
        let other = secondary.unwrap_or(deployer);
        Self {
            ir_agent: args.ir_agent.unwrap_or(deployer),
            token_agent: args.token_agent.unwrap_or(deployer),
            user: args.user.unwrap_or(other),
            claim_issuer: args.claim_issuer.unwrap_or(other),
        }
    }
}

pub async fn run(
    session: &Session,
    roles: Roles,
    public_deployment: bool,
    config_path: &Path,
) -> anyhow::Result<(DeploymentRecord, FactoryConfiguration)> {
    let mut recorder = session.recorder();

    for implementation in IMPLEMENTATIONS {
        session
            .deploy(&mut recorder, &NoArgs::new(implementation))
            .await?;
    }

    let identity = session
        .deploy(
            &mut recorder,
            &Identity {
                initial_management_key: session.deployer,
                is_library: true,
            },
        )
        .await?;
    let implementation_authority = session
        .deploy(
            &mut recorder,
            &ImplementationAuthority {
                implementation: identity,
            },
        )
        .await?;
    let id_factory = session
        .deploy(
            &mut recorder,
            &IdFactory {
                implementation_authority,
            },
        )
        .await?;
    let trex_implementation_authority = session
        .deploy(
            &mut recorder,
            &TrexImplementationAuthority {
                reference_status: true,
                trex_factory: Address::ZERO,
                ia_factory: Address::ZERO,
            },
        )
        .await?;
    let trex_factory = session
        .deploy(
            &mut recorder,
            &TrexFactory {
                implementation_authority: trex_implementation_authority,
                id_factory,
            },
        )
        .await?;
    let gateway = session
        .deploy(
            &mut recorder,
            &TrexGateway {
                factory: trex_factory,
                public_deployment_status: public_deployment,
            },
        )
        .await?;
    let claim_issuer = session
        .deploy(
            &mut recorder,
            &ClaimIssuer {
                initial_management_key: roles.claim_issuer,
            },
        )
        .await?;
    let token_lock = session
        .deploy(&mut recorder, &NoArgs::new(TOKEN_LOCK))
        .await?;

    let record = recorder.finish();
    let config = FactoryConfiguration {
        trex_factory_contract_address: trex_factory,
        gateway_contract_address: gateway,
        claim_issuer_contract_address: claim_issuer,
        token_lock_smart_contract: token_lock,
        deployer: session.deployer,
        ir_agent: roles.ir_agent,
        token_agent: roles.token_agent,
        user: roles.user,
        claim_issuer: roles.claim_issuer,
    };
    config_file::write(config_path, &config).context("failed to write factory configuration")?;
    Ok((record, config))
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::scripts::tests::{DEPLOYER, sequential_deploy, session},
        contracts::{DeployRequest, Deployment, MockDeploy, test_util},
    };

    const SECONDARY: Address = Address::with_last_byte(0x2);

    fn artifacts() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in IMPLEMENTATIONS.into_iter().chain([TOKEN_LOCK]) {
            test_util::write_artifact(dir.path(), name, &[]);
        }
        let constructors: [(&str, &[(&str, &str)]); 7] = [
            (
                "Identity",
                &[("initialManagementKey", "address"), ("_isLibrary", "bool")],
            ),
            ("ImplementationAuthority", &[("implementation", "address")]),
            ("IdFactory", &[("implementationAuthority", "address")]),
            (
                "TREXImplementationAuthority",
                &[
                    ("referenceStatus", "bool"),
                    ("trexFactory", "address"),
                    ("iaFactory", "address"),
                ],
            ),
            (
                "TREXFactory",
                &[
                    ("implementationAuthority_", "address"),
                    ("idFactory_", "address"),
                ],
            ),
            (
                "TREXGateway",
                &[("factory", "address"), ("publicDeploymentStatus", "bool")],
            ),
            ("ClaimIssuer", &[("initialManagementKey", "address")]),
        ];
        for (name, inputs) in constructors {
            test_util::write_artifact(dir.path(), name, inputs);
        }
        dir
    }

    fn roles() -> Roles {
        Roles {
            ir_agent: DEPLOYER,
            token_agent: DEPLOYER,
            user: SECONDARY,
            claim_issuer: SECONDARY,
        }
    }

    #[tokio::test]
    async fn deploys_suite_and_writes_configuration() {
        let dir = artifacts();
        let (deploy, deployed) = sequential_deploy();
        let session = session(dir.path(), deploy);
        let path = dir.path().join(config_file::FILE_NAME);

        let (record, config) = run(&session, roles(), false, &path).await.unwrap();

        assert_eq!(
            *deployed.lock().unwrap(),
            [
                "Token",
                "ClaimTopicsRegistry",
                "IdentityRegistry",
                "IdentityRegistryStorage",
                "TrustedIssuersRegistry",
                "ModularCompliance",
                "Identity",
                "ImplementationAuthority",
                "IdFactory",
                "TREXImplementationAuthority",
                "TREXFactory",
                "TREXGateway",
                "ClaimIssuer",
                "TokenLock",
            ]
        );
        assert_eq!(record.contracts().len(), 14);
        assert_eq!(record.contracts()["TREXFactory"], Address::with_last_byte(11));

        assert_eq!(config.trex_factory_contract_address, Address::with_last_byte(11));
        assert_eq!(config.gateway_contract_address, Address::with_last_byte(12));
        assert_eq!(config.claim_issuer_contract_address, Address::with_last_byte(13));
        assert_eq!(config.token_lock_smart_contract, Address::with_last_byte(14));
        assert_eq!(config.deployer, DEPLOYER);
        assert_eq!(config.user, SECONDARY);
        assert_eq!(config_file::read(&path).unwrap(), config);
    }

    #[tokio::test]
    async fn later_contracts_receive_earlier_addresses() {
        let dir = artifacts();
        let mut deploy = MockDeploy::new();
        let mut count = 0u8;
        deploy
            .expect_deploy()
            .times(11)
            .returning(move |_| {
                count += 1;
                Ok(deployment(count))
            });
        // The gateway's init code ends with its encoded arguments: the factory
        // deployed just before it, then the public deployment flag.
        deploy
            .expect_deploy()
            .withf(|request: &DeployRequest| {
                let code = &request.code[request.code.len() - 64..];
                request.contract == "TREXGateway"
                    && code[12..32] == Address::with_last_byte(11)[..]
                    && code[63] == 1
            })
            .times(1)
            .returning(|_| Ok(deployment(12)));
        deploy
            .expect_deploy()
            .times(2)
            .returning(|request| {
                Ok(deployment(if request.contract == "ClaimIssuer" {
                    13
                } else {
                    14
                }))
            });
        let session = session(dir.path(), deploy);

        let path = dir.path().join("factory.json");
        let (_, config) = run(&session, roles(), true, &path).await.unwrap();
        assert_eq!(config.gateway_contract_address, Address::with_last_byte(12));
    }

    #[tokio::test]
    async fn failure_leaves_configuration_untouched() {
        let dir = artifacts();
        std::fs::remove_file(dir.path().join("TREXGateway.json")).unwrap();
        let (deploy, deployed) = sequential_deploy();
        let session = session(dir.path(), deploy);
        let path = dir.path().join(config_file::FILE_NAME);

        let err = run(&session, roles(), false, &path).await.unwrap_err();
        assert_eq!(err.to_string(), "failed to deploy TREXGateway");
        assert_eq!(deployed.lock().unwrap().len(), 11);
        assert!(!path.exists());
    }

    #[test]
    fn roles_default_to_deployer_and_secondary_key() {
        use clap::Parser;
        let args = crate::arguments::Arguments::try_parse_from([
            "deployer",
            "trex",
            "--token-agent",
            "0x0000000000000000000000000000000000000007",
        ])
        .unwrap();
        let crate::arguments::Command::Trex(args) = args.command else {
            panic!("expected trex command");
        };

        let roles = Roles::resolve(&args, DEPLOYER, Some(SECONDARY));
        assert_eq!(roles.ir_agent, DEPLOYER);
        assert_eq!(roles.token_agent, Address::with_last_byte(7));
        assert_eq!(roles.user, SECONDARY);
        assert_eq!(roles.claim_issuer, SECONDARY);

        let roles = Roles::resolve(&args, DEPLOYER, None);
        assert_eq!(roles.user, DEPLOYER);
    }

    fn deployment(last_byte: u8) -> Deployment {
        Deployment {
            address: Address::with_last_byte(last_byte),
            transaction: Default::default(),
            gas_used: 0,
        }
    }
}
