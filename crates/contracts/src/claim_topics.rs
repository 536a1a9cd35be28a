//! Claim topics used by the identity registry of the security token suite.

use alloy::primitives::{U256, keccak256};

/// Claim topic tags in registration order.
pub const CLAIM_TOPICS: [&str; 3] = ["PROPERTY", "KYC", "POLICY"];

/// Named access to [`CLAIM_TOPICS`]. Each variant resolves to the tag at its
/// position in the list, so the two can't drift apart.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, strum::EnumIter)]
pub enum ClaimTopic {
    Institution = 0,
    Student = 1,
    Certificate = 2,
}

impl ClaimTopic {
    pub fn tag(self) -> &'static str {
        CLAIM_TOPICS[self as usize]
    }

    /// The key this topic is published under.
    pub fn key(self) -> &'static str {
        match self {
            Self::Institution => "INSTITUTION",
            Self::Student => "STUDENT",
            Self::Certificate => "CERTIFICATE",
        }
    }

    /// Numeric topic id registered on chain: `keccak256(tag)`.
    pub fn id(self) -> U256 {
        U256::from_be_bytes(keccak256(self.tag()).0)
    }
}
