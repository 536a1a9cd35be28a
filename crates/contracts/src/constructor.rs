//! Typed constructor arguments and their validation against the ABI of the
//! contract they are meant for.

use {
    crate::artifact::Artifact,
    alloy::{
        dyn_abi::{DynSolType, DynSolValue, JsonAbiExt, Specifier},
        primitives::Bytes,
    },
    std::fmt::Debug,
};

/// Arguments for the constructor of one specific contract.
///
/// Implementors name their fields after the constructor parameters and return
/// the values in declaration order; [`init_code`] checks them against the
/// artifact before anything is sent to the network.
pub trait ConstructorArgs: Debug + Send + Sync {
    /// Name of the artifact these arguments are meant for.
    fn contract(&self) -> &str;

    fn values(&self) -> Vec<DynSolValue>;
}

/// Arguments for a contract whose constructor takes no parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoArgs(pub String);

impl NoArgs {
    pub fn new(contract: impl Into<String>) -> Self {
        Self(contract.into())
    }
}

impl ConstructorArgs for NoArgs {
    fn contract(&self) -> &str {
        &self.0
    }

    fn values(&self) -> Vec<DynSolValue> {
        Vec::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConstructorError {
    #[error("{contract} constructor takes {expected} arguments but {actual} were given")]
    Arity {
        contract: String,
        expected: usize,
        actual: usize,
    },
    #[error("{contract} constructor argument {index} ({name}) must be of type {expected}")]
    Type {
        contract: String,
        index: usize,
        name: String,
        expected: String,
    },
    #[error("{contract} constructor uses unsupported type {ty}")]
    UnsupportedType {
        contract: String,
        ty: String,
        #[source]
        source: alloy::dyn_abi::Error,
    },
    #[error("failed to encode {contract} constructor arguments")]
    Encoding {
        contract: String,
        #[source]
        source: alloy::dyn_abi::Error,
    },
}

/// Creation code for `artifact`: its bytecode followed by the ABI encoded
/// constructor arguments.
pub fn init_code(
    artifact: &Artifact,
    args: &dyn ConstructorArgs,
) -> Result<Bytes, ConstructorError> {
    let encoded = encode_arguments(artifact, &args.values())?;
    let mut code = artifact.bytecode.to_vec();
    code.extend(encoded);
    Ok(code.into())
}

fn encode_arguments(
    artifact: &Artifact,
    values: &[DynSolValue],
) -> Result<Vec<u8>, ConstructorError> {
    let contract = || artifact.name.clone();
    let Some(constructor) = &artifact.abi.constructor else {
        return match values.len() {
            0 => Ok(Vec::new()),
            actual => Err(ConstructorError::Arity {
                contract: contract(),
                expected: 0,
                actual,
            }),
        };
    };

    if constructor.inputs.len() != values.len() {
        return Err(ConstructorError::Arity {
            contract: contract(),
            expected: constructor.inputs.len(),
            actual: values.len(),
        });
    }
    for (index, (param, value)) in constructor.inputs.iter().zip(values).enumerate() {
        let ty: DynSolType = param
            .resolve()
            .map_err(|source| ConstructorError::UnsupportedType {
                contract: contract(),
                ty: param.ty.clone(),
                source,
            })?;
        if !ty.matches(value) {
            return Err(ConstructorError::Type {
                contract: contract(),
                index,
                name: param.name.clone(),
                expected: param.ty.clone(),
            });
        }
    }

    constructor
        .abi_encode_input(values)
        .map_err(|source| ConstructorError::Encoding {
            contract: contract(),
            source,
        })
}
