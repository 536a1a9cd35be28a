//! Constructor arguments for the ERC-3643 (T-REX) security token suite.
//!
//! The suite's token and registry contracts are deployed as logic
//! implementations behind proxies, so their constructors take no arguments
//! ([`IMPLEMENTATIONS`]). Everything else gets a dedicated struct.

use {
    crate::constructor::ConstructorArgs,
    alloy::{dyn_abi::DynSolValue, primitives::Address},
};

/// Logic contracts registered with the implementation authority.
pub const IMPLEMENTATIONS: [&str; 6] = [
    "Token",
    "ClaimTopicsRegistry",
    "IdentityRegistry",
    "IdentityRegistryStorage",
    "TrustedIssuersRegistry",
    "ModularCompliance",
];

/// OnchainID identity. Deployed once as the library the identity proxies
/// delegate to.
#[derive(Clone, Debug)]
pub struct Identity {
    pub initial_management_key: Address,
    pub is_library: bool,
}

impl ConstructorArgs for Identity {
    fn contract(&self) -> &str {
        "Identity"
    }

    fn values(&self) -> Vec<DynSolValue> {
        vec![
            self.initial_management_key.into(),
            self.is_library.into(),
        ]
    }
}

/// Points identity proxies at the identity implementation.
#[derive(Clone, Debug)]
pub struct ImplementationAuthority {
    pub implementation: Address,
}

impl ConstructorArgs for ImplementationAuthority {
    fn contract(&self) -> &str {
        "ImplementationAuthority"
    }

    fn values(&self) -> Vec<DynSolValue> {
        vec![self.implementation.into()]
    }
}

#[derive(Clone, Debug)]
pub struct IdFactory {
    pub implementation_authority: Address,
}

impl ConstructorArgs for IdFactory {
    fn contract(&self) -> &str {
        "IdFactory"
    }

    fn values(&self) -> Vec<DynSolValue> {
        vec![self.implementation_authority.into()]
    }
}

/// Versioned registry of the suite's logic contracts. The reference authority
/// is deployed without a factory; the factory is attached afterwards.
#[derive(Clone, Debug)]
pub struct TrexImplementationAuthority {
    pub reference_status: bool,
    pub trex_factory: Address,
    pub ia_factory: Address,
}

impl ConstructorArgs for TrexImplementationAuthority {
    fn contract(&self) -> &str {
        "TREXImplementationAuthority"
    }

    fn values(&self) -> Vec<DynSolValue> {
        vec![
            self.reference_status.into(),
            self.trex_factory.into(),
            self.ia_factory.into(),
        ]
    }
}

#[derive(Clone, Debug)]
pub struct TrexFactory {
    pub implementation_authority: Address,
    pub id_factory: Address,
}

impl ConstructorArgs for TrexFactory {
    fn contract(&self) -> &str {
        "TREXFactory"
    }

    fn values(&self) -> Vec<DynSolValue> {
        vec![
            self.implementation_authority.into(),
            self.id_factory.into(),
        ]
    }
}

#[derive(Clone, Debug)]
pub struct TrexGateway {
    pub factory: Address,
    pub public_deployment_status: bool,
}

impl ConstructorArgs for TrexGateway {
    fn contract(&self) -> &str {
        "TREXGateway"
    }

    fn values(&self) -> Vec<DynSolValue> {
        vec![self.factory.into(), self.public_deployment_status.into()]
    }
}

#[derive(Clone, Debug)]
pub struct ClaimIssuer {
    pub initial_management_key: Address,
}

impl ConstructorArgs for ClaimIssuer {
    fn contract(&self) -> &str {
        "ClaimIssuer"
    }

    fn values(&self) -> Vec<DynSolValue> {
        vec![self.initial_management_key.into()]
    }
}
