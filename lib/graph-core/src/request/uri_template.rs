//! RFC 6570 URI template expansion.
//!
//! Request builders describe their endpoints with templates such as
//! `{+baseurl}/solutions/bookingBusinesses/{bookingBusiness%2Did}{?%24expand,%24select}`.
//! This module expands them against the path and query parameters of a request.
//!
//! All operators of level 3 are supported, together with the explode (`*`) and
//! prefix (`:n`) modifiers of level 4. Associative values are not.

use indexmap::IndexMap;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters copied verbatim by every expansion: `ALPHA / DIGIT / "-" / "." / "_" / "~"`.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Characters copied verbatim by reserved (`+`) and fragment (`#`) expansion.
///
/// `%` stays encoded here, pct-encoded triplets are detected separately.
const RESERVED: &AsciiSet = &UNRESERVED
    .remove(b':')
    .remove(b'/')
    .remove(b'?')
    .remove(b'#')
    .remove(b'[')
    .remove(b']')
    .remove(b'@')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

/// Largest prefix length accepted by the `:n` modifier.
const MAX_PREFIX: usize = 9999;

/// Errors raised while expanding a URI template.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error, derive_more::Display)]
pub enum UriTemplateError {
    /// The template is not syntactically valid.
    #[display("Malformed URI template '{template}' at byte {position}: {reason}")]
    Malformed {
        /// The template being expanded.
        template: String,
        /// Byte offset of the offending expression.
        position: usize,
        /// What is wrong with the expression.
        reason: &'static str,
    },

    /// Path expressions reference variables that have no value.
    #[display("URI template '{template}' is missing required variables: {missing:?}")]
    MissingVariables {
        /// The template being expanded.
        template: String,
        /// Names of the undefined variables.
        missing: Vec<String>,
    },
}

/// Value bound to a template variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateValue {
    /// A single string value.
    Text(String),
    /// A list of values, comma joined unless exploded.
    List(Vec<String>),
}

impl From<String> for TemplateValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for TemplateValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<&String> for TemplateValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<bool> for TemplateValue {
    fn from(value: bool) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i32> for TemplateValue {
    fn from(value: i32) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for TemplateValue {
    fn from(value: i64) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<u32> for TemplateValue {
    fn from(value: u32) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Vec<String>> for TemplateValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<&[&str]> for TemplateValue {
    fn from(value: &[&str]) -> Self {
        Self::List(value.iter().map(|item| (*item).to_owned()).collect())
    }
}

#[derive(Debug, Clone, Copy)]
struct Operator {
    first: &'static str,
    separator: &'static str,
    named: bool,
    if_empty: &'static str,
    allow_reserved: bool,
}

impl Operator {
    const SIMPLE: Self = Self {
        first: "",
        separator: ",",
        named: false,
        if_empty: "",
        allow_reserved: false,
    };

    fn from_char(operator: char) -> Option<Self> {
        let result = match operator {
            '+' => Self {
                allow_reserved: true,
                ..Self::SIMPLE
            },
            '#' => Self {
                first: "#",
                allow_reserved: true,
                ..Self::SIMPLE
            },
            '.' => Self {
                first: ".",
                separator: ".",
                ..Self::SIMPLE
            },
            '/' => Self {
                first: "/",
                separator: "/",
                ..Self::SIMPLE
            },
            ';' => Self {
                first: ";",
                separator: ";",
                named: true,
                ..Self::SIMPLE
            },
            '?' => Self {
                first: "?",
                separator: "&",
                named: true,
                if_empty: "=",
                allow_reserved: false,
            },
            '&' => Self {
                first: "&",
                separator: "&",
                named: true,
                if_empty: "=",
                allow_reserved: false,
            },
            _ => return None,
        };
        Some(result)
    }

    /// Query style expressions are optional by nature.
    fn is_optional(self) -> bool {
        self.if_empty == "="
    }

    fn encode(self, value: &str) -> String {
        if self.allow_reserved {
            encode_reserved(value)
        } else {
            utf8_percent_encode(value, UNRESERVED).to_string()
        }
    }
}

#[derive(Debug)]
struct VarSpec<'a> {
    name: &'a str,
    explode: bool,
    prefix: Option<usize>,
}

impl<'a> VarSpec<'a> {
    fn parse(spec: &'a str) -> Result<Self, &'static str> {
        let (name, explode, prefix) = if let Some(name) = spec.strip_suffix('*') {
            (name, true, None)
        } else if let Some((name, length)) = spec.split_once(':') {
            let length = length
                .parse::<usize>()
                .ok()
                .filter(|length| (1..=MAX_PREFIX).contains(length))
                .ok_or("invalid prefix modifier")?;
            (name, false, Some(length))
        } else {
            (spec, false, None)
        };

        if name.is_empty() {
            return Err("empty variable name");
        }
        Ok(Self {
            name,
            explode,
            prefix,
        })
    }

    fn render(&self, operator: Operator, value: &TemplateValue) -> Option<String> {
        match value {
            TemplateValue::Text(text) => {
                let text = match self.prefix {
                    Some(length) => text.chars().take(length).collect(),
                    None => text.clone(),
                };
                Some(self.render_item(operator, &text))
            }
            TemplateValue::List(items) if items.is_empty() => None,
            TemplateValue::List(items) if self.explode => {
                let rendered = items
                    .iter()
                    .map(|item| self.render_item(operator, item))
                    .collect::<Vec<_>>();
                Some(rendered.join(operator.separator))
            }
            TemplateValue::List(items) => {
                let joined = items
                    .iter()
                    .map(|item| operator.encode(item))
                    .collect::<Vec<_>>()
                    .join(",");
                if operator.named {
                    Some(format!("{}={joined}", self.name))
                } else {
                    Some(joined)
                }
            }
        }
    }

    fn render_item(&self, operator: Operator, item: &str) -> String {
        if !operator.named {
            return operator.encode(item);
        }
        if item.is_empty() {
            return [self.name, operator.if_empty].concat();
        }
        format!("{}={}", self.name, operator.encode(item))
    }
}

/// Encodes a value for reserved expansion, keeping existing pct-encoded triplets.
fn encode_reserved(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(index) = rest.find('%') {
        let (head, tail) = rest.split_at(index);
        result.extend(utf8_percent_encode(head, RESERVED));

        let triplet = tail
            .get(..3)
            .filter(|triplet| triplet.bytes().skip(1).all(|byte| byte.is_ascii_hexdigit()));
        if let Some(triplet) = triplet {
            result.push_str(triplet);
            rest = tail.get(3..).unwrap_or_default();
        } else {
            result.push_str("%25");
            rest = tail.get(1..).unwrap_or_default();
        }
    }
    result.extend(utf8_percent_encode(rest, RESERVED));
    result
}

/// Expands a URI template with the given variables.
///
/// Undefined variables are skipped in query expressions (`?` and `&`).
/// Any other expression referencing an undefined variable makes the expansion fail,
/// as the resulting URL would address the wrong resource.
///
/// # Errors
///
/// Returns [`UriTemplateError::Malformed`] for syntax errors and
/// [`UriTemplateError::MissingVariables`] for undefined path variables.
///
/// # Example
///
/// ```rust
/// use graph_core::request::uri_template::{expand, TemplateValue};
/// use indexmap::IndexMap;
///
/// let mut variables = IndexMap::new();
/// variables.insert("baseurl".to_string(), TemplateValue::from("https://graph.microsoft.com/v1.0"));
/// variables.insert("bookingBusiness%2Did".to_string(), TemplateValue::from("Contoso@contoso.com"));
/// variables.insert("%24select".to_string(), TemplateValue::from(vec!["id".to_string(), "displayName".to_string()]));
///
/// let url = expand(
///     "{+baseurl}/solutions/bookingBusinesses/{bookingBusiness%2Did}{?%24expand,%24select}",
///     &variables,
/// )?;
/// assert_eq!(
///     url,
///     "https://graph.microsoft.com/v1.0/solutions/bookingBusinesses/Contoso%40contoso.com?%24select=id,displayName"
/// );
/// # Ok::<(), graph_core::request::uri_template::UriTemplateError>(())
/// ```
pub fn expand(
    template: &str,
    variables: &IndexMap<String, TemplateValue>,
) -> Result<String, UriTemplateError> {
    let mut result = String::with_capacity(template.len() * 2);
    let mut missing = Vec::new();
    let mut rest = template;

    while let Some((literal, after)) = rest.split_once('{') {
        result.push_str(literal);
        let position = template.len() - after.len() - 1;
        let malformed = |reason| UriTemplateError::Malformed {
            template: template.to_owned(),
            position,
            reason,
        };

        let (expression, remaining) = after.split_once('}').ok_or_else(|| malformed("unclosed expression"))?;
        if expression.is_empty() || expression.contains('{') {
            return Err(malformed("invalid expression"));
        }
        expand_expression(expression, variables, &mut result, &mut missing).map_err(malformed)?;
        rest = remaining;
    }
    result.push_str(rest);

    if missing.is_empty() {
        Ok(result)
    } else {
        Err(UriTemplateError::MissingVariables {
            template: template.to_owned(),
            missing,
        })
    }
}

fn expand_expression(
    expression: &str,
    variables: &IndexMap<String, TemplateValue>,
    output: &mut String,
    missing: &mut Vec<String>,
) -> Result<(), &'static str> {
    let mut chars = expression.chars();
    let (operator, variable_list) = match chars.next().and_then(Operator::from_char) {
        Some(operator) => (operator, chars.as_str()),
        None => (Operator::SIMPLE, expression),
    };

    let mut first = true;
    for spec in variable_list.split(',') {
        let spec = VarSpec::parse(spec)?;
        let Some(value) = variables.get(spec.name) else {
            if !operator.is_optional() {
                missing.push(spec.name.to_owned());
            }
            continue;
        };
        let Some(rendered) = spec.render(operator, value) else {
            continue;
        };
        output.push_str(if first {
            operator.first
        } else {
            operator.separator
        });
        output.push_str(&rendered);
        first = false;
    }
    Ok(())
}

/// Lists the variable names referenced by a template, in order of appearance.
///
/// Malformed expressions are ignored.
pub fn variable_names(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some((_, after)) = rest.split_once('{') {
        let Some((expression, remaining)) = after.split_once('}') else {
            break;
        };
        let variable_list = expression
            .strip_prefix(['+', '#', '.', '/', ';', '?', '&'])
            .unwrap_or(expression);
        names.extend(
            variable_list
                .split(',')
                .filter_map(|spec| VarSpec::parse(spec).ok())
                .map(|spec| spec.name),
        );
        rest = remaining;
    }
    names
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn rfc_variables() -> IndexMap<String, TemplateValue> {
        let mut variables = IndexMap::new();
        variables.insert("var".to_string(), TemplateValue::from("value"));
        variables.insert("hello".to_string(), TemplateValue::from("Hello World!"));
        variables.insert("half".to_string(), TemplateValue::from("50%"));
        variables.insert("path".to_string(), TemplateValue::from("/foo/bar"));
        variables.insert("empty".to_string(), TemplateValue::from(""));
        variables.insert("x".to_string(), TemplateValue::from("1024"));
        variables.insert("y".to_string(), TemplateValue::from("768"));
        variables.insert(
            "list".to_string(),
            TemplateValue::from(["red", "green", "blue"].as_slice()),
        );
        variables.insert("empty_list".to_string(), TemplateValue::List(vec![]));
        variables
    }

    #[rstest]
    #[case::simple("{var}", "value")]
    #[case::simple_encoded("{hello}", "Hello%20World%21")]
    #[case::simple_percent("{half}", "50%25")]
    #[case::reserved("{+hello}", "Hello%20World!")]
    #[case::reserved_percent("{+half}", "50%25")]
    #[case::reserved_path("{+path}/here", "/foo/bar/here")]
    #[case::multiple("{x,y}", "1024,768")]
    #[case::reserved_multiple("{+x,hello,y}", "1024,Hello%20World!,768")]
    #[case::fragment("{#x,hello,y}", "#1024,Hello%20World!,768")]
    #[case::label("X{.var}", "X.value")]
    #[case::path_segments("{/var,x}/here", "/value/1024/here")]
    #[case::path_style("{;x,y,empty}", ";x=1024;y=768;empty")]
    #[case::form_query("{?x,y,empty}", "?x=1024&y=768&empty=")]
    #[case::form_continuation("?fixed=yes{&x}", "?fixed=yes&x=1024")]
    #[case::prefix("{var:3}", "val")]
    #[case::list("{list}", "red,green,blue")]
    #[case::list_explode("{list*}", "red,green,blue")]
    #[case::list_path_explode("{/list*}", "/red/green/blue")]
    #[case::list_query("{?list}", "?list=red,green,blue")]
    #[case::list_query_explode("{?list*}", "?list=red&list=green&list=blue")]
    #[case::empty_list_query("{?empty_list}", "")]
    #[case::undefined_query("{?undef,x}", "?x=1024")]
    #[case::literal_only("/solutions/$count", "/solutions/$count")]
    fn should_expand_rfc_examples(#[case] template: &str, #[case] expected: &str) {
        let result = expand(template, &rfc_variables()).expect("template should expand");

        assert_eq!(result, expected);
    }

    #[test]
    fn should_expand_graph_item_template() {
        let mut variables = IndexMap::new();
        variables.insert(
            "baseurl".to_string(),
            TemplateValue::from("https://graph.microsoft.com/v1.0"),
        );
        variables.insert(
            "exchangeProtectionPolicy%2Did".to_string(),
            TemplateValue::from("71633878-8321-4950-bfaf-ed285bdd1461"),
        );
        variables.insert(
            "%24select".to_string(),
            TemplateValue::from(vec!["id".to_string(), "status".to_string()]),
        );

        let result = expand(
            "{+baseurl}/solutions/backupRestore/exchangeProtectionPolicies/{exchangeProtectionPolicy%2Did}{?%24expand,%24select}",
            &variables,
        )
        .expect("template should expand");

        insta::assert_snapshot!(result, @"https://graph.microsoft.com/v1.0/solutions/backupRestore/exchangeProtectionPolicies/71633878-8321-4950-bfaf-ed285bdd1461?%24select=id,status");
    }

    #[test]
    fn should_encode_function_parameters() {
        let mut variables = IndexMap::new();
        variables.insert("baseurl".to_string(), TemplateValue::from("http://localhost"));
        variables.insert("role".to_string(), TemplateValue::from("co organizer"));

        let result = expand(
            "{+baseurl}/solutions/virtualEvents/townhalls/getByUserRole(role='{role}')",
            &variables,
        )
        .expect("template should expand");

        assert_eq!(
            result,
            "http://localhost/solutions/virtualEvents/townhalls/getByUserRole(role='co%20organizer')"
        );
    }

    #[test]
    fn should_report_missing_path_variables() {
        let variables = IndexMap::new();

        let result = expand("{+baseurl}/users/{user%2Did}{?%24select}", &variables);

        insta::assert_debug_snapshot!(result, @r#"
        Err(
            MissingVariables {
                template: "{+baseurl}/users/{user%2Did}{?%24select}",
                missing: [
                    "baseurl",
                    "user%2Did",
                ],
            },
        )
        "#);
    }

    #[rstest]
    #[case::unclosed("/users/{id", 7, "unclosed expression")]
    #[case::empty("/users/{}", 7, "invalid expression")]
    #[case::nested("/users/{a{b}", 7, "invalid expression")]
    #[case::bad_prefix("{var:0}", 0, "invalid prefix modifier")]
    #[case::empty_name("{x,}", 0, "empty variable name")]
    fn should_reject_malformed_templates(
        #[case] template: &str,
        #[case] position: usize,
        #[case] reason: &'static str,
    ) {
        let result = expand(template, &rfc_variables());

        assert_eq!(
            result,
            Err(UriTemplateError::Malformed {
                template: template.to_string(),
                position,
                reason,
            })
        );
    }

    #[test]
    fn should_list_variable_names() {
        let names = variable_names(
            "{+baseurl}/solutions/bookingBusinesses/{bookingBusiness%2Did}/calendarView{?%24count,end*,start*}",
        );

        assert_eq!(
            names,
            vec!["baseurl", "bookingBusiness%2Did", "%24count", "end", "start"]
        );
    }
}
