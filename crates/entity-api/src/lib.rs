//! Client for the entity instance listing service the token API reads its
//! data from.

pub mod http_client;

use {
    reqwest::{StatusCode, Url},
    serde::Serialize,
    serde_json::{Map, Value},
};

/// Storage engine tag every listing request carries.
pub const DB_TYPE: &str = "TIDB";

/// Page size used when the caller doesn't pass one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Filter object forwarded to the service as is.
pub type Filter = Map<String, Value>;

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("base URL {0} cannot carry a path")]
    BaseUrl(Url),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {status} error: {body}")]
    Status { status: StatusCode, body: String },
    #[error("response is not valid JSON")]
    Decode(#[from] serde_json::Error),
}

pub struct EntityClient {
    client: reqwest::Client,
    base: Url,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListRequest<'a> {
    db_type: &'static str,
    filter: &'a Filter,
}

impl EntityClient {
    pub fn new(client: reqwest::Client, base: Url) -> Self {
        Self { client, base }
    }

    /// Lists the instances of `schema_id` that match `filter`, returning the
    /// service's response body untouched.
    ///
    /// Only the first page is requested. The token API always asks for
    /// [`DEFAULT_PAGE_SIZE`] instances, which is what `None` sends; any other
    /// `page_size` is passed through as given.
    pub async fn list_instances(
        &self,
        filter: &Filter,
        schema_id: &str,
        token: Option<&str>,
        page_size: Option<u32>,
    ) -> Result<Value, QueryError> {
        self.try_list_instances(filter, schema_id, token, page_size)
            .await
            .inspect_err(|err| tracing::warn!(?err, schema_id, "listing entity instances failed"))
    }

    async fn try_list_instances(
        &self,
        filter: &Filter,
        schema_id: &str,
        token: Option<&str>,
        page_size: Option<u32>,
    ) -> Result<Value, QueryError> {
        let url = self.list_url(schema_id, resolve_page_size(page_size))?;
        let mut request = self.client.post(url).json(&ListRequest {
            db_type: DB_TYPE,
            filter,
        });
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(QueryError::Status { status, body });
        }
        tracing::trace!(schema_id, %body, "entity instances");
        Ok(serde_json::from_str(&body)?)
    }

    fn list_url(&self, schema_id: &str, page_size: u32) -> Result<Url, QueryError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| QueryError::BaseUrl(self.base.clone()))?
            .pop_if_empty()
            .extend([
                "pi-entity-instances-service",
                "v2.0",
                "schemas",
                schema_id,
                "instances",
                "list",
            ]);
        url.query_pairs_mut()
            .append_pair("page", "0")
            .append_pair("size", &page_size.to_string())
            .append_pair("showDBaaSReservedKeywords", "false")
            .append_pair("showPageableMetaData", "true");
        Ok(url)
    }
}

fn resolve_page_size(requested: Option<u32>) -> u32 {
    match requested {
        Some(size) if size != DEFAULT_PAGE_SIZE => {
            tracing::debug!(size, default = DEFAULT_PAGE_SIZE, "non-default page size");
            size
        }
        _ => DEFAULT_PAGE_SIZE,
    }
}
