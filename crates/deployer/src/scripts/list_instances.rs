use {
    crate::arguments::ListInstancesArguments,
    anyhow::Context,
    entity_api::{EntityClient, http_client::HttpClientFactory},
    serde_json::Value,
};

pub async fn run(args: &ListInstancesArguments) -> anyhow::Result<Value> {
    let client = EntityClient::new(
        HttpClientFactory::new(&args.http_client).create(),
        args.entity_api_url.clone(),
    );
    client
        .list_instances(
            &args.filter,
            &args.schema_id,
            args.entity_api_token.as_deref(),
            args.page_size,
        )
        .await
        .with_context(|| format!("failed to list instances of schema {}", args.schema_id))
}
