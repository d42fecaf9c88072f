const GITHUB_COM_TOKEN_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];
const ENTERPRISE_TOKEN_VARS: [&str; 2] = ["GITHUB_ENTERPRISE_TOKEN", "GH_ENTERPRISE_TOKEN"];

/// Reads the access token for `host` from the environment.
///
/// The first non-blank variable wins. `None` is not an error here: the
/// request still goes out and the API answers for the missing credentials.
pub(crate) fn fetch_token(host: &str) -> Option<String> {
    let vars = if host.eq_ignore_ascii_case("github.com") {
        GITHUB_COM_TOKEN_VARS
    } else {
        ENTERPRISE_TOKEN_VARS
    };

    vars.into_iter().find_map(|var| {
        let value = std::env::var(var).ok()?;
        let token = value.trim();
        if token.is_empty() {
            return None;
        }
        tracing::debug!(var, "access token read from environment");
        Some(token.to_string())
    })
}
