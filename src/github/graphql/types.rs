/// One row of the rendered table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRecord {
    pub name: String,
    pub created_at: String,
    pub description: Option<String>,
    pub stargazer_count: i64,
    pub fork_count: i64,
    pub watcher_count: i64,
    pub issue_count: i64,
    pub pull_request_count: i64,
}

/// Rows for the table plus any GraphQL error messages that came back
/// alongside usable data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RepositoryListing {
    pub records: Vec<RepositoryRecord>,
    pub errors: Vec<String>,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct GraphqlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct GraphqlError {
    pub message: String,
}
