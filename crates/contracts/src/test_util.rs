//! Helpers for writing contract artifacts in tests.

use {
    crate::artifact::Artifact,
    serde_json::{Value, json},
    std::{fs, path::Path},
};

/// Creation code of an empty contract. Deploying it to a development node
/// works, which keeps the helpers usable against anvil as well.
pub const EMPTY_CONTRACT_CODE: &str = "0x6080604052348015600f57600080fd5b50603f80601d6000396000f3fe";

/// JSON of a Hardhat style artifact whose constructor takes `inputs` given as
/// `(name, type)` pairs. No constructor entry is emitted for empty inputs.
pub fn artifact_json(name: &str, inputs: &[(&str, &str)]) -> Value {
    let abi = if inputs.is_empty() {
        json!([])
    } else {
        let inputs: Vec<_> = inputs
            .iter()
            .map(|(name, ty)| json!({ "name": name, "type": ty, "internalType": ty }))
            .collect();
        json!([{
            "type": "constructor",
            "inputs": inputs,
            "stateMutability": "nonpayable",
        }])
    };
    json!({
        "_format": "hh-sol-artifact-1",
        "contractName": name,
        "abi": abi,
        "bytecode": EMPTY_CONTRACT_CODE,
    })
}

pub fn artifact(name: &str, inputs: &[(&str, &str)]) -> Artifact {
    Artifact::from_json(name, &artifact_json(name, inputs).to_string())
        .expect("test artifact is valid")
}

/// Writes `<dir>/<name>.json`.
pub fn write_artifact(dir: &Path, name: &str, inputs: &[(&str, &str)]) {
    let path = dir.join(format!("{name}.json"));
    fs::write(&path, artifact_json(name, inputs).to_string())
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", path.display()));
}
