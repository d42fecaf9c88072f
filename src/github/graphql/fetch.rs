use crate::github::client::{GraphqlTransport, QueryConfig, RawResponse};
use crate::log_sink::LogSink;

/// Sends `config.query` once.
///
/// Returns `None` when no usable response could be obtained; the failure
/// has already been written to `sink` by then. There is no retry.
pub(crate) async fn execute_graphql_query<T, S>(
    transport: &T,
    sink: &S,
    config: &QueryConfig,
) -> Option<RawResponse>
where
    T: GraphqlTransport,
    S: LogSink,
{
    let payload = serde_json::json!({ "query": config.query });

    match transport
        .post_json(&config.endpoint, &config.authorization, &payload)
        .await
    {
        Ok(response) => Some(response),
        Err(err) => {
            sink.error(&format!("Request failed due to an error. {err:#}"));
            None
        }
    }
}
