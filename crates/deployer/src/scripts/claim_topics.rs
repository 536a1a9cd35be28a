use {
    contracts::{CLAIM_TOPICS, ClaimTopic},
    indexmap::IndexMap,
    serde::Serialize,
    strum::IntoEnumIterator,
};

/// The claim topics in the shape the frontend imports them.
#[derive(Debug, Serialize)]
pub struct ClaimTopics {
    pub topics: [&'static str; 3],
    /// Topic key to tag, e.g. `INSTITUTION` to `PROPERTY`.
    pub lookup: IndexMap<&'static str, &'static str>,
    /// Tag to the numeric id registered on chain.
    pub ids: IndexMap<&'static str, String>,
}

pub fn run() -> ClaimTopics {
    ClaimTopics {
        topics: CLAIM_TOPICS,
        lookup: ClaimTopic::iter()
            .map(|topic| (topic.key(), topic.tag()))
            .collect(),
        ids: ClaimTopic::iter()
            .map(|topic| (topic.tag(), format!("{:#x}", topic.id())))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use {super::*, serde_json::json};

    #[test]
    fn lookup_follows_topic_order() {
        let topics = serde_json::to_value(run()).unwrap();
        assert_eq!(topics["topics"], json!(["PROPERTY", "KYC", "POLICY"]));
        assert_eq!(
            topics["lookup"],
            json!({
                "INSTITUTION": "PROPERTY",
                "STUDENT": "KYC",
                "CERTIFICATE": "POLICY",
            })
        );
        assert_eq!(
            topics["ids"]["KYC"],
            json!(format!("{:#x}", ClaimTopic::Student.id()))
        );
    }
}
