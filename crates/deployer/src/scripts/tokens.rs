//! Deploys a batch of contracts without constructor arguments.

use {
    super::Session,
    crate::record::DeploymentRecord,
    anyhow::ensure,
    contracts::NoArgs,
    std::collections::HashSet,
};

pub async fn run(session: &Session, names: &[String]) -> anyhow::Result<DeploymentRecord> {
    ensure!(!names.is_empty(), "no contracts to deploy");
    let mut unique = HashSet::new();
    if let Some(duplicate) = names.iter().find(|name| !unique.insert(name.as_str())) {
        anyhow::bail!("{duplicate} is listed more than once");
    }

    let mut recorder = session.recorder();
    for name in names {
        session.deploy(&mut recorder, &NoArgs::new(name)).await?;
    }
    Ok(recorder.finish())
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::scripts::tests::{DEPLOYER, sequential_deploy, session},
        chrono::DateTime,
        contracts::{DeployError, MockDeploy, test_util},
    };

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    fn artifacts(names: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in names {
            test_util::write_artifact(dir.path(), name, &[]);
        }
        dir
    }

    #[tokio::test]
    async fn deploys_gold_silver_rare() {
        observe::tracing::initialize_reentrant("deployer=debug");
        let dir = artifacts(&["GOLD", "SILVER", "RARE"]);
        let (deploy, deployed) = sequential_deploy();
        let session = session(dir.path(), deploy);

        let record = run(&session, &names(&["GOLD", "SILVER", "RARE"]))
            .await
            .unwrap();

        assert_eq!(*deployed.lock().unwrap(), ["GOLD", "SILVER", "RARE"]);
        assert_eq!(record.contracts().len(), 3);
        let addresses: HashSet<_> = record.contracts().values().collect();
        assert_eq!(addresses.len(), 3);
        assert!(addresses.iter().all(|address| !address.is_zero()));
        assert_eq!(record.deployer(), DEPLOYER);

        let json = serde_json::to_value(&record).unwrap();
        let timestamp = json["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[tokio::test]
    async fn rejects_duplicate_names() {
        let dir = artifacts(&["GOLD"]);
        let mut deploy = MockDeploy::new();
        deploy.expect_deploy().never();
        let session = session(dir.path(), deploy);

        let err = run(&session, &names(&["GOLD", "GOLD"])).await.unwrap_err();
        assert_eq!(err.to_string(), "GOLD is listed more than once");
        assert!(run(&session, &[]).await.is_err());
    }

    #[tokio::test]
    async fn stops_at_first_failure() {
        let dir = artifacts(&["GOLD", "SILVER", "RARE"]);
        let mut deploy = MockDeploy::new();
        let mut calls = 0u8;
        deploy.expect_deploy().times(2).returning(move |request| {
            calls += 1;
            if calls == 2 {
                return Err(DeployError::Reverted {
                    contract: request.contract,
                    transaction: Default::default(),
                });
            }
            Ok(contracts::Deployment {
                address: alloy_primitives::Address::with_last_byte(calls),
                transaction: Default::default(),
                gas_used: 0,
            })
        });
        let session = session(dir.path(), deploy);

        let err = run(&session, &names(&["GOLD", "SILVER", "RARE"]))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "failed to deploy SILVER");
        assert!(matches!(
            err.downcast_ref::<DeployError>(),
            Some(DeployError::Reverted { .. })
        ));
    }
}
