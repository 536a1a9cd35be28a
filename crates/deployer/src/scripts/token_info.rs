use {
    crate::arguments::TokenInfoArguments,
    alloy_primitives::{Address, U256},
    anyhow::Context,
    contracts::Token,
    serde::Serialize,
};

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct TokenInfo {
    pub address: Address,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holder: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<U256>,
}

/// Reads the token through a plain connection. No key is needed since nothing
/// is signed.
pub async fn run(args: &TokenInfoArguments) -> anyhow::Result<TokenInfo> {
    let provider = ethrpc::connection::provider(&args.chain.rpc_url(), &[]);
    read(&Token::new(args.token, provider), args.holder).await
}

pub async fn read(token: &Token, holder: Option<Address>) -> anyhow::Result<TokenInfo> {
    let name = token
        .name()
        .await
        .with_context(|| format!("failed to read name of {}", token.address()))?;
    let balance = match holder {
        Some(holder) => Some(
            token
                .balance_of(holder)
                .await
                .with_context(|| format!("failed to read balance of {holder}"))?,
        ),
        None => None,
    };
    Ok(TokenInfo {
        address: token.address(),
        name,
        holder,
        balance,
    })
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        alloy::{
            primitives::{Bytes, address},
            providers::{Provider, ProviderBuilder, mock::Asserter},
            sol_types::SolValue,
        },
        serde_json::json,
    };

    const GOLD: Address = address!("0x5FbDB2315678afecb367f032d93F642f64180aa3");
    const HOLDER: Address = address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8");

    fn mocked() -> (Token, Asserter) {
        let asserter = Asserter::new();
        let provider = ProviderBuilder::new()
            .connect_mocked_client(asserter.clone())
            .erased();
        (Token::new(GOLD, provider), asserter)
    }

    #[tokio::test]
    async fn reads_name_and_balance() {
        let (token, asserter) = mocked();
        asserter.push_success(&Bytes::from(("GOLD".to_string(),).abi_encode_params()));
        asserter.push_success(&Bytes::from(U256::from(42).abi_encode()));

        let info = read(&token, Some(HOLDER)).await.unwrap();
        assert_eq!(info.name, "GOLD");
        assert_eq!(info.balance, Some(U256::from(42)));
        assert_eq!(
            serde_json::to_value(&info).unwrap(),
            json!({
                "address": GOLD,
                "name": "GOLD",
                "holder": HOLDER,
                "balance": "0x2a",
            })
        );
    }

    #[tokio::test]
    async fn balance_is_optional() {
        let (token, asserter) = mocked();
        asserter.push_success(&Bytes::from(("SILVER".to_string(),).abi_encode_params()));

        let info = read(&token, None).await.unwrap();
        assert_eq!(info.balance, None);
        assert_eq!(
            serde_json::to_value(&info).unwrap(),
            json!({ "address": GOLD, "name": "SILVER" })
        );
    }

    #[tokio::test]
    async fn node_errors_carry_context() {
        let (token, asserter) = mocked();
        asserter.push_failure_msg("execution reverted");

        let err = read(&token, None).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to read name of 0x5FbDB2315678afecb367f032d93F642f64180aa3"
        );
    }
}
