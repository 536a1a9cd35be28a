//! Compiled contract artifacts as emitted by Hardhat (`artifacts/contracts/
//! <File>.sol/<Name>.json`) or Foundry (`out/<File>.sol/<Name>.json`).

use {
    alloy::{
        json_abi::JsonAbi,
        primitives::{Bytes, hex},
    },
    serde::Deserialize,
    std::{
        ffi::OsStr,
        fs,
        io,
        path::{Path, PathBuf},
    },
};

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("no artifact for {name} below {}", root.display())]
    NotFound { name: String, root: PathBuf },
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("artifact for {name} is not valid JSON")]
    Json {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("artifact for {name} contains invalid bytecode")]
    InvalidBytecode {
        name: String,
        #[source]
        source: hex::FromHexError,
    },
    #[error("artifact for {name} has unlinked library references")]
    Unlinked { name: String },
    #[error("artifact for {name} has no bytecode, is it abstract or an interface?")]
    NoBytecode { name: String },
}

/// The parts of a compiled contract needed to deploy it.
#[derive(Clone, Debug)]
pub struct Artifact {
    pub name: String,
    pub abi: JsonAbi,
    pub bytecode: Bytes,
}

#[derive(Deserialize)]
struct RawArtifact {
    abi: JsonAbi,
    bytecode: RawBytecode,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    /// Hardhat stores the creation code as a plain hex string.
    Hex(String),
    /// Foundry nests it together with source maps and link references.
    Object { object: String },
}

impl Artifact {
    pub fn from_json(name: &str, json: &str) -> Result<Self, ArtifactError> {
        let raw: RawArtifact = serde_json::from_str(json).map_err(|source| ArtifactError::Json {
            name: name.to_string(),
            source,
        })?;
        let code = match raw.bytecode {
            RawBytecode::Hex(code) | RawBytecode::Object { object: code } => code,
        };
        if code.contains("__") {
            return Err(ArtifactError::Unlinked {
                name: name.to_string(),
            });
        }
        let bytecode = hex::decode(code.trim()).map_err(|source| ArtifactError::InvalidBytecode {
            name: name.to_string(),
            source,
        })?;
        if bytecode.is_empty() {
            return Err(ArtifactError::NoBytecode {
                name: name.to_string(),
            });
        }

        Ok(Self {
            name: name.to_string(),
            abi: raw.abi,
            bytecode: bytecode.into(),
        })
    }
}

/// Looks up artifacts by contract name below a build output directory.
#[derive(Clone, Debug)]
pub struct Artifacts {
    root: PathBuf,
}

impl Artifacts {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn load(&self, name: &str) -> Result<Artifact, ArtifactError> {
        let path = self.find(name)?;
        tracing::debug!(name, path = %path.display(), "loading artifact");
        let json = fs::read_to_string(&path).map_err(|source| ArtifactError::Io {
            path: path.clone(),
            source,
        })?;
        Artifact::from_json(name, &json)
    }

    fn find(&self, name: &str) -> Result<PathBuf, ArtifactError> {
        let file_name = format!("{name}.json");
        let flat = self.root.join(&file_name);
        if flat.is_file() {
            return Ok(flat);
        }
        find_nested(&self.root, OsStr::new(&file_name))
            .map_err(|source| ArtifactError::Io {
                path: self.root.clone(),
                source,
            })?
            .ok_or_else(|| ArtifactError::NotFound {
                name: name.to_string(),
                root: self.root.clone(),
            })
    }
}

/// Depth first search in lexical order so that lookups are deterministic.
/// Symlinked directories are not followed, so link cycles can't recurse
/// forever.
fn find_nested(dir: &Path, file_name: &OsStr) -> io::Result<Option<PathBuf>> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| -> io::Result<_> {
            let entry = entry?;
            Ok((entry.path(), entry.file_type()?))
        })
        .collect::<io::Result<Vec<_>>>()?;
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));

    for (path, file_type) in entries {
        if file_type.is_symlink() && path.is_dir() {
            continue;
        }
        if file_type.is_dir() {
            if let Some(found) = find_nested(&path, file_name)? {
                return Ok(Some(found));
            }
        } else if path.file_name() == Some(file_name) {
            return Ok(Some(path));
        }
    }
    Ok(None)
}
