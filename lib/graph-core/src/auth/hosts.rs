use indexmap::IndexSet;
use url::Url;

/// Hosts of the Microsoft Graph deployments.
pub const GRAPH_HOSTS: [&str; 6] = [
    "graph.microsoft.com",
    "graph.microsoft.us",
    "dod-graph.microsoft.us",
    "graph.microsoft.de",
    "microsoftgraph.chinacloudapi.cn",
    "canary.graph.microsoft.com",
];

/// Restricts the hosts receiving access tokens.
///
/// An empty validator allows every host.
///
/// ```rust
/// use graph_core::auth::AllowedHostsValidator;
/// use url::Url;
///
/// let validator = AllowedHostsValidator::graph();
///
/// assert!(validator.is_url_allowed(&Url::parse("https://graph.microsoft.com/v1.0/me")?));
/// assert!(!validator.is_url_allowed(&Url::parse("https://contoso.com/api")?));
/// # Ok::<(), url::ParseError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedHostsValidator {
    hosts: IndexSet<String>,
}

impl AllowedHostsValidator {
    /// Creates a validator for the given hosts, case insensitive.
    pub fn new(hosts: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        let hosts = hosts
            .into_iter()
            .map(|host| host.as_ref().trim().to_ascii_lowercase())
            .filter(|host| !host.is_empty())
            .collect();
        Self { hosts }
    }

    /// Creates a validator allowing the Microsoft Graph hosts only.
    pub fn graph() -> Self {
        Self::new(GRAPH_HOSTS)
    }

    /// Returns the allowed hosts.
    pub fn hosts(&self) -> impl Iterator<Item = &str> {
        self.hosts.iter().map(String::as_str)
    }

    /// Checks if the URL host can receive a token.
    pub fn is_url_allowed(&self, url: &Url) -> bool {
        if self.hosts.is_empty() {
            return true;
        }
        url.host_str()
            .is_some_and(|host| self.hosts.contains(&host.to_ascii_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("https://graph.microsoft.com/v1.0/solutions", true)]
    #[case("https://GRAPH.microsoft.us/beta/solutions", true)]
    #[case("https://microsoftgraph.chinacloudapi.cn/v1.0", true)]
    #[case("https://contoso.sharepoint.com/sites", false)]
    #[case("https://graph.microsoft.com.evil.io/v1.0", false)]
    fn should_validate_graph_hosts(#[case] url: &str, #[case] expected: bool) {
        let url = Url::parse(url).expect("a valid url");

        assert_eq!(AllowedHostsValidator::graph().is_url_allowed(&url), expected);
    }

    #[test]
    fn should_allow_everything_when_empty() {
        let validator = AllowedHostsValidator::default();
        let url = Url::parse("https://contoso.com").expect("a valid url");

        assert!(validator.is_url_allowed(&url));
    }

    #[test]
    fn should_normalize_hosts() {
        let validator = AllowedHostsValidator::new([" Localhost ", ""]);

        assert_eq!(validator.hosts().collect::<Vec<_>>(), vec!["localhost"]);
    }
}
