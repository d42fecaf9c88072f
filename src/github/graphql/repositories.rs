use anyhow::Context;
use valq::query_value;

use super::types::{GraphqlResponse, RepositoryListing, RepositoryRecord};

/// Walks `data.viewer.repositories.nodes` of a decoded response body and
/// builds one record per node, in the order the API returned them.
///
/// GraphQL `errors` next to usable `data` (partial results) are carried
/// along in the listing; they only fail the call when `data` is absent.
pub(crate) fn repository_listing(body: serde_json::Value) -> anyhow::Result<RepositoryListing> {
    let resp: GraphqlResponse<serde_json::Value> =
        serde_json::from_value(body).context("unexpected GraphQL response shape")?;
    let (data, errors) = graphql_data(resp)?;

    let nodes = query_value!(data.viewer.repositories.nodes -> array)
        .context("GraphQL response missing viewer.repositories.nodes")?;

    let records = nodes
        .iter()
        .map(repository_record)
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(RepositoryListing { records, errors })
}

fn repository_record(node: &serde_json::Value) -> anyhow::Result<RepositoryRecord> {
    let name = query_value!(node.name -> str).context("repository node missing name")?;
    let created_at =
        query_value!(node["createdAt"] -> str).context("repository node missing createdAt")?;

    Ok(RepositoryRecord {
        name: name.to_string(),
        created_at: created_at.to_string(),
        description: query_value!(node.description -> str).map(str::to_string),
        stargazer_count: count(node, query_value!(node["stargazerCount"] -> i64), "stargazerCount")?,
        fork_count: count(node, query_value!(node["forkCount"] -> i64), "forkCount")?,
        watcher_count: count(
            node,
            query_value!(node.watchers["totalCount"] -> i64),
            "watchers.totalCount",
        )?,
        issue_count: count(
            node,
            query_value!(node.issues["totalCount"] -> i64),
            "issues.totalCount",
        )?,
        pull_request_count: count(
            node,
            query_value!(node["pullRequests"]["totalCount"] -> i64),
            "pullRequests.totalCount",
        )?,
    })
}

fn count(node: &serde_json::Value, value: Option<i64>, field: &str) -> anyhow::Result<i64> {
    value.with_context(|| {
        let name = query_value!(node.name -> str).unwrap_or("<unnamed>");
        format!("repository node {name} missing {field}")
    })
}

fn graphql_data<T>(resp: GraphqlResponse<T>) -> anyhow::Result<(T, Vec<String>)> {
    let errors: Vec<String> = resp
        .errors
        .unwrap_or_default()
        .into_iter()
        .map(|e| e.message)
        .collect();

    match resp.data {
        Some(data) => Ok((data, errors)),
        None if errors.is_empty() => anyhow::bail!("GraphQL response missing data"),
        None => anyhow::bail!("GraphQL returned errors: {}", errors.join("; ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(name: &str, stars: i64) -> serde_json::Value {
        json!({
            "name": name,
            "createdAt": "2021-01-01T00:00:00Z",
            "description": null,
            "stargazerCount": stars,
            "forkCount": 1,
            "watchers": { "totalCount": 2 },
            "issues": { "totalCount": 0 },
            "pullRequests": { "totalCount": 0 }
        })
    }

    fn body(nodes: Vec<serde_json::Value>) -> serde_json::Value {
        json!({
            "data": {
                "viewer": {
                    "login": "test",
                    "repositories": { "nodes": nodes }
                }
            }
        })
    }

    #[test]
    fn builds_record_from_node() {
        let records = repository_listing(body(vec![node("repo-a", 5)])).unwrap().records;
        assert_eq!(
            records,
            vec![RepositoryRecord {
                name: "repo-a".to_string(),
                created_at: "2021-01-01T00:00:00Z".to_string(),
                description: None,
                stargazer_count: 5,
                fork_count: 1,
                watcher_count: 2,
                issue_count: 0,
                pull_request_count: 0,
            }]
        );
    }

    #[test]
    fn keeps_api_order() {
        let records =
            repository_listing(body(vec![node("newest", 1), node("middle", 9), node("oldest", 3)]))
                .unwrap()
                .records;
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["newest", "middle", "oldest"]);
    }

    #[test]
    fn keeps_description_text() {
        let mut n = node("repo-b", 0);
        n["description"] = json!("a tool");
        let records = repository_listing(body(vec![n])).unwrap().records;
        assert_eq!(records[0].description.as_deref(), Some("a tool"));
    }

    #[test]
    fn empty_node_list_is_not_an_error() {
        let listing = repository_listing(body(vec![])).unwrap();
        assert!(listing.records.is_empty());
        assert!(listing.errors.is_empty());
    }

    #[test]
    fn missing_count_is_reported_with_repository_name() {
        let mut n = node("repo-c", 0);
        n["watchers"] = json!({});
        let err = repository_listing(body(vec![n])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "repository node repo-c missing watchers.totalCount"
        );
    }

    #[test]
    fn partial_data_keeps_records_and_errors() {
        let mut partial = body(vec![node("repo-a", 5)]);
        partial["errors"] =
            json!([{ "message": "Resource protected by organization SAML enforcement" }]);

        let listing = repository_listing(partial).unwrap();

        assert_eq!(listing.records.len(), 1);
        assert_eq!(listing.records[0].name, "repo-a");
        assert_eq!(
            listing.errors,
            ["Resource protected by organization SAML enforcement"]
        );
    }

    #[test]
    fn missing_data_without_errors_is_an_error() {
        let err = repository_listing(json!({})).unwrap_err();
        assert_eq!(err.to_string(), "GraphQL response missing data");
    }

    #[test]
    fn errors_without_data_are_surfaced() {
        let err = repository_listing(json!({
            "data": null,
            "errors": [{ "message": "Bad credentials" }, { "message": "try again" }]
        }))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "GraphQL returned errors: Bad credentials; try again"
        );
    }

    #[test]
    fn missing_viewer_path_is_an_error() {
        let err = repository_listing(json!({ "data": { "viewer": null } })).unwrap_err();
        assert!(err.to_string().contains("viewer.repositories.nodes"));
    }
}
