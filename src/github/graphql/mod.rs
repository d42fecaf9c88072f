mod fetch;
mod queries;
mod repositories;
mod types;

pub use types::RepositoryRecord;

pub(crate) use fetch::execute_graphql_query;
pub(crate) use queries::VIEWER_REPOSITORIES_QUERY;
pub(crate) use repositories::repository_listing;
