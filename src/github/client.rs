use anyhow::Context;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Everything needed to issue the query. Built once in `main`.
#[derive(Clone)]
pub(crate) struct QueryConfig {
    pub endpoint: String,
    pub authorization: String,
    pub query: String,
}

impl QueryConfig {
    pub(crate) fn new(endpoint: impl Into<String>, token: Option<&str>, query: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            authorization: format!("Bearer {}", token.unwrap_or_default()),
            query: query.into(),
        }
    }
}

impl std::fmt::Debug for QueryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryConfig")
            .field("endpoint", &self.endpoint)
            .field("authorization", &"Bearer <redacted>")
            .field("query", &self.query)
            .finish()
    }
}

/// A 2xx answer from the endpoint, kept exactly as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub(crate) fn json(&self) -> anyhow::Result<serde_json::Value> {
        serde_json::from_str(&self.body).context("failed to decode GraphQL response body")
    }
}

/// Sends one JSON payload to a GraphQL endpoint.
///
/// Implementations return `Err` for anything the caller cannot use: a
/// connection failure, a timeout, or a non-2xx status.
pub(crate) trait GraphqlTransport {
    async fn post_json(
        &self,
        url: &str,
        authorization: &str,
        payload: &serde_json::Value,
    ) -> anyhow::Result<RawResponse>;
}

pub(crate) struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub(crate) fn new() -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { http })
    }
}

impl GraphqlTransport for HttpTransport {
    async fn post_json(
        &self,
        url: &str,
        authorization: &str,
        payload: &serde_json::Value,
    ) -> anyhow::Result<RawResponse> {
        let response = self
            .http
            .post(url)
            .header(reqwest::header::AUTHORIZATION, authorization)
            .json(payload)
            .send()
            .await?
            .error_for_status()?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .context("failed to read GraphQL response body")?;
        Ok(RawResponse { status, body })
    }
}

pub(crate) fn graphql_endpoint(host: &str) -> String {
    if host.eq_ignore_ascii_case("github.com") {
        "https://api.github.com/graphql".to_string()
    } else {
        format!("https://{host}/api/graphql")
    }
}
