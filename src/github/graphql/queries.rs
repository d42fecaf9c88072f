pub(crate) const VIEWER_REPOSITORIES_QUERY: &str =
    include_str!("queries/viewer_repositories.graphql");
