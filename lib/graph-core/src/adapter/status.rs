use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::model::ODataError;

/// Decodes the body of a failed response into a typed error.
pub type ErrorFactory = fn(&[u8]) -> Result<ODataError, serde_json::Error>;

/// Status codes an [`ErrorFactory`] is registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCodePattern {
    /// A single status code, such as `404`.
    Exact(u16),
    /// Any client error, `4XX`.
    ClientError,
    /// Any server error, `5XX`.
    ServerError,
    /// Any failure, `XXX`.
    Any,
}

impl StatusCodePattern {
    /// Checks if the pattern covers the status code.
    pub fn matches(self, status: u16) -> bool {
        match self {
            Self::Exact(code) => code == status,
            Self::ClientError => (400..500).contains(&status),
            Self::ServerError => (500..600).contains(&status),
            Self::Any => (400..600).contains(&status),
        }
    }
}

impl fmt::Display for StatusCodePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(code) => write!(f, "{code}"),
            Self::ClientError => f.write_str("4XX"),
            Self::ServerError => f.write_str("5XX"),
            Self::Any => f.write_str("XXX"),
        }
    }
}

/// Error returned when parsing an invalid [`StatusCodePattern`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error, derive_more::Display)]
#[display("Invalid status code pattern '{pattern}', expected a code in 400..=599, 4XX, 5XX or XXX")]
pub struct InvalidStatusCodePattern {
    /// The rejected pattern.
    pub pattern: String,
}

impl FromStr for StatusCodePattern {
    type Err = InvalidStatusCodePattern;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        match pattern.to_ascii_uppercase().as_str() {
            "4XX" => Ok(Self::ClientError),
            "5XX" => Ok(Self::ServerError),
            "XXX" => Ok(Self::Any),
            code => code
                .parse::<u16>()
                .ok()
                .filter(|code| (400..600).contains(code))
                .map(Self::Exact)
                .ok_or_else(|| InvalidStatusCodePattern {
                    pattern: pattern.to_owned(),
                }),
        }
    }
}

/// Error factories of an endpoint, by status code pattern.
///
/// Lookup tries the exact status code first, then its class (`4XX` or `5XX`),
/// then `XXX`.
///
/// # Example
///
/// ```rust
/// use graph_core::adapter::{ErrorMappings, StatusCodePattern};
///
/// let mappings = ErrorMappings::odata();
/// assert!(mappings.find(404).is_some());
/// assert!(mappings.find(302).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ErrorMappings {
    factories: IndexMap<StatusCodePattern, ErrorFactory>,
}

impl ErrorMappings {
    /// Creates mappings without any factory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the mappings used by Microsoft Graph: every failure is an [`ODataError`].
    pub fn odata() -> Self {
        Self::new().with(StatusCodePattern::Any, ODataError::from_json)
    }

    /// Registers a factory for a pattern, replacing any previous one.
    #[must_use]
    pub fn with(mut self, pattern: StatusCodePattern, factory: ErrorFactory) -> Self {
        self.factories.insert(pattern, factory);
        self
    }

    /// Finds the factory responsible for a status code.
    pub fn find(&self, status: u16) -> Option<ErrorFactory> {
        let class = if (400..500).contains(&status) {
            StatusCodePattern::ClientError
        } else {
            StatusCodePattern::ServerError
        };
        [StatusCodePattern::Exact(status), class, StatusCodePattern::Any]
            .into_iter()
            .filter(|pattern| pattern.matches(status))
            .find_map(|pattern| self.factories.get(&pattern).copied())
    }

    /// Checks if no factory is registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn not_found_factory(_body: &[u8]) -> Result<ODataError, serde_json::Error> {
        Ok(ODataError::new("NotFound", "exact"))
    }

    fn client_factory(_body: &[u8]) -> Result<ODataError, serde_json::Error> {
        Ok(ODataError::new("ClientError", "class"))
    }

    fn any_factory(_body: &[u8]) -> Result<ODataError, serde_json::Error> {
        Ok(ODataError::new("Any", "fallback"))
    }

    fn mappings() -> ErrorMappings {
        ErrorMappings::new()
            .with(StatusCodePattern::Any, any_factory)
            .with(StatusCodePattern::ClientError, client_factory)
            .with(StatusCodePattern::Exact(404), not_found_factory)
    }

    #[rstest]
    #[case::exact(404, Some("NotFound"))]
    #[case::class(409, Some("ClientError"))]
    #[case::fallback(503, Some("Any"))]
    #[case::success(200, None)]
    #[case::redirect(304, None)]
    fn should_find_most_specific_factory(#[case] status: u16, #[case] expected: Option<&str>) {
        let code = mappings()
            .find(status)
            .and_then(|factory| factory(b"{}").ok())
            .and_then(|error| error.code().map(str::to_owned));

        assert_eq!(code.as_deref(), expected);
    }

    #[rstest]
    #[case("404", StatusCodePattern::Exact(404))]
    #[case("4XX", StatusCodePattern::ClientError)]
    #[case("5xx", StatusCodePattern::ServerError)]
    #[case("XXX", StatusCodePattern::Any)]
    fn should_parse_patterns(#[case] input: &str, #[case] expected: StatusCodePattern) {
        let pattern = input.parse::<StatusCodePattern>().expect("valid pattern");

        assert_eq!(pattern, expected);
        assert!(pattern.to_string().eq_ignore_ascii_case(input));
    }

    #[rstest]
    #[case("200")]
    #[case("6XX")]
    #[case("abc")]
    fn should_reject_invalid_patterns(#[case] input: &str) {
        let result = input.parse::<StatusCodePattern>();

        assert!(result.is_err());
    }
}
