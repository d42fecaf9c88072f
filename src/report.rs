use crate::formatter::format_table;
use crate::github::prelude::*;
use crate::log_sink::LogSink;

/// Renders the executor's result.
///
/// `None` produces nothing. A 200 response is decoded and logged as a table
/// at info level; any other status is logged as an error with the raw body.
/// GraphQL errors that arrive next to usable data are logged as errors after
/// the table. A 200 whose body cannot be decoded into repositories is
/// returned as an error for the caller to abort on.
pub(crate) fn handle_graphql_response<S: LogSink>(
    sink: &S,
    response: Option<RawResponse>,
) -> anyhow::Result<()> {
    let Some(response) = response else {
        return Ok(());
    };

    if response.status != 200 {
        sink.error(&format!(
            "Request failed with status code {}",
            response.status
        ));
        sink.error(&response.body);
        return Ok(());
    }

    let listing = repository_listing(response.json()?)?;
    let table = format_table(&listing.records);
    sink.info(&format!("\n{table}"));
    for message in &listing.errors {
        sink.error(&format!("GraphQL returned an error: {message}"));
    }

    Ok(())
}
