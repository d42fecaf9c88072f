mod auth;
mod client;
mod graphql;

pub use graphql::RepositoryRecord;
pub(crate) use auth::fetch_token;
pub(crate) use client::{HttpTransport, QueryConfig, RawResponse, graphql_endpoint};
pub(crate) use graphql::{VIEWER_REPOSITORIES_QUERY, execute_graphql_query, repository_listing};

pub(crate) mod prelude {
    pub use super::RepositoryRecord;
    pub(crate) use super::{
        HttpTransport, QueryConfig, RawResponse, VIEWER_REPOSITORIES_QUERY, execute_graphql_query,
        fetch_token, graphql_endpoint, repository_listing,
    };
}
