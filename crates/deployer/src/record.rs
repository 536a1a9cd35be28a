use {
    alloy_primitives::Address,
    chrono::{DateTime, Utc},
    indexmap::IndexMap,
    serde::Serialize,
    std::fmt::{self, Display, Formatter},
};

/// Outcome of one deployment run. Contracts are kept in deployment order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeploymentRecord {
    network: String,
    deployer: Address,
    contracts: IndexMap<String, Address>,
    timestamp: DateTime<Utc>,
}

impl DeploymentRecord {
    pub fn new(
        network: impl Into<String>,
        deployer: Address,
        contracts: IndexMap<String, Address>,
    ) -> Self {
        Self {
            network: network.into(),
            deployer,
            contracts,
            timestamp: Utc::now(),
        }
    }

    pub fn network(&self) -> &str {
        &self.network
    }

    pub fn deployer(&self) -> Address {
        self.deployer
    }

    pub fn contracts(&self) -> &IndexMap<String, Address> {
        &self.contracts
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl Display for DeploymentRecord {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(f, "network: {}", self.network)?;
        writeln!(f, "deployer: {}", self.deployer)?;
        writeln!(f, "timestamp: {}", self.timestamp.to_rfc3339())?;
        writeln!(f, "contracts:")?;
        for (name, address) in &self.contracts {
            writeln!(f, "  {name}: {address}")?;
        }
        Ok(())
    }
}

/// Builds the record for a finished run and logs it.
pub fn record(
    network: &str,
    deployer: Address,
    contracts: IndexMap<String, Address>,
) -> DeploymentRecord {
    let record = DeploymentRecord::new(network, deployer, contracts);
    tracing::info!("deployment finished\n{record}");
    record
}

/// Collects addresses while a multi-contract run is in progress.
#[derive(Debug)]
pub struct Recorder {
    network: String,
    deployer: Address,
    contracts: IndexMap<String, Address>,
}

impl Recorder {
    pub fn new(network: impl Into<String>, deployer: Address) -> Self {
        Self {
            network: network.into(),
            deployer,
            contracts: IndexMap::new(),
        }
    }

    pub fn add(&mut self, name: impl Into<String>, address: Address) {
        self.contracts.insert(name.into(), address);
    }

    /// Logs what was deployed before a run was aborted. These addresses are
    /// not written anywhere else.
    pub fn log_partial(&self) {
        let deployed = self
            .contracts
            .iter()
            .map(|(name, address)| format!("{name}: {address}"))
            .collect::<Vec<_>>();
        tracing::error!(
            network = %self.network,
            deployer = %self.deployer,
            ?deployed,
            "deployment aborted"
        );
    }

    pub fn finish(self) -> DeploymentRecord {
        record(&self.network, self.deployer, self.contracts)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, alloy_primitives::address, serde_json::json};

    const DEPLOYER: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

    #[test]
    fn keeps_deployment_order() {
        let mut recorder = Recorder::new("localhost", DEPLOYER);
        recorder.add("SILVER", Address::with_last_byte(2));
        recorder.add("GOLD", Address::with_last_byte(1));

        let record = recorder.finish();
        let names: Vec<_> = record.contracts().keys().cloned().collect();
        assert_eq!(names, ["SILVER", "GOLD"]);
        assert_eq!(record.network(), "localhost");
        assert_eq!(record.deployer(), DEPLOYER);
    }

    #[test]
    fn serializes_with_iso_timestamp() {
        let record = record(
            "sepolia",
            DEPLOYER,
            IndexMap::from([("GOLD".to_string(), Address::with_last_byte(1))]),
        );

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["network"], json!("sepolia"));
        assert_eq!(
            json["contracts"]["GOLD"],
            json!("0x0000000000000000000000000000000000000001")
        );
        let timestamp = json["timestamp"].as_str().unwrap();
        assert_eq!(
            DateTime::parse_from_rfc3339(timestamp).unwrap(),
            record.timestamp()
        );
    }

    #[test]
    fn display_lists_every_contract() {
        let record = DeploymentRecord::new(
            "holesky",
            DEPLOYER,
            IndexMap::from([
                ("GOLD".to_string(), Address::with_last_byte(1)),
                ("RARE".to_string(), Address::with_last_byte(3)),
            ]),
        );
        let shown = record.to_string();
        assert!(shown.starts_with("network: holesky\n"));
        assert!(shown.contains("  GOLD: 0x0000000000000000000000000000000000000001\n"));
        assert!(shown.contains("  RARE: 0x0000000000000000000000000000000000000003\n"));
    }
}
