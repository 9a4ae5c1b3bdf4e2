use std::fmt::Debug;

use indexmap::IndexMap;

use super::uri_template::TemplateValue;

/// Template name of the `$count` query option.
pub const COUNT: &str = "%24count";
/// Template name of the `$expand` query option.
pub const EXPAND: &str = "%24expand";
/// Template name of the `$filter` query option.
pub const FILTER: &str = "%24filter";
/// Template name of the `$orderby` query option.
pub const ORDERBY: &str = "%24orderby";
/// Template name of the `$search` query option.
pub const SEARCH: &str = "%24search";
/// Template name of the `$select` query option.
pub const SELECT: &str = "%24select";
/// Template name of the `$skip` query option.
pub const SKIP: &str = "%24skip";
/// Template name of the `$top` query option.
pub const TOP: &str = "%24top";

/// Typed query parameters accepted by a request builder.
///
/// `TEMPLATE` is the RFC 6570 query expression appended to the builder path,
/// and `write_to` binds the values that are set. Unset values must not be written,
/// the expansion then leaves them out of the URL.
pub trait QueryParameters: Debug + Send + Sync + 'static {
    /// Query expression of the URL template, such as `{?%24expand,%24select}`.
    const TEMPLATE: &'static str;

    /// Writes the values that are set into the query variables of a request.
    fn write_to(&self, query: &mut IndexMap<String, TemplateValue>);
}

fn put(query: &mut IndexMap<String, TemplateValue>, name: &str, value: Option<impl Into<TemplateValue>>) {
    if let Some(value) = value {
        query.insert(name.to_owned(), value.into());
    }
}

fn put_list(query: &mut IndexMap<String, TemplateValue>, name: &str, values: &[String]) {
    if !values.is_empty() {
        query.insert(name.to_owned(), TemplateValue::List(values.to_vec()));
    }
}

fn to_strings(values: impl IntoIterator<Item = impl Into<String>>) -> Vec<String> {
    values.into_iter().map(Into::into).collect()
}

/// Query parameters of endpoints without query options, such as actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoQueryParameters;

impl QueryParameters for NoQueryParameters {
    const TEMPLATE: &'static str = "";

    fn write_to(&self, _query: &mut IndexMap<String, TemplateValue>) {}
}

/// `$expand` and `$select` options of single entity requests.
///
/// # Example
///
/// ```rust
/// use graph_core::EntityQueryParameters;
///
/// let query = EntityQueryParameters::default()
///     .select(["id", "displayName"])
///     .expand(["services"]);
/// assert_eq!(query.select, vec!["id", "displayName"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityQueryParameters {
    /// Related entities to expand.
    pub expand: Vec<String>,
    /// Properties to be returned.
    pub select: Vec<String>,
}

impl EntityQueryParameters {
    /// Sets the related entities to expand.
    #[must_use]
    pub fn expand(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.expand = to_strings(values);
        self
    }

    /// Sets the properties to be returned.
    #[must_use]
    pub fn select(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.select = to_strings(values);
        self
    }
}

impl QueryParameters for EntityQueryParameters {
    const TEMPLATE: &'static str = "{?%24expand,%24select}";

    fn write_to(&self, query: &mut IndexMap<String, TemplateValue>) {
        put_list(query, EXPAND, &self.expand);
        put_list(query, SELECT, &self.select);
    }
}

/// OData query options of collection requests.
///
/// # Example
///
/// ```rust
/// use graph_core::CollectionQueryParameters;
///
/// let query = CollectionQueryParameters::default()
///     .filter("status eq 'active'")
///     .orderby(["displayName desc"])
///     .top(10)
///     .count(true);
/// assert_eq!(query.top, Some(10));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionQueryParameters {
    /// Include count of items.
    pub count: Option<bool>,
    /// Related entities to expand.
    pub expand: Vec<String>,
    /// Filter items by property values.
    pub filter: Option<String>,
    /// Order items by property values.
    pub orderby: Vec<String>,
    /// Search items by search phrases.
    pub search: Option<String>,
    /// Properties to be returned.
    pub select: Vec<String>,
    /// Skip the first n items.
    pub skip: Option<i32>,
    /// Show only the first n items.
    pub top: Option<i32>,
}

impl CollectionQueryParameters {
    /// Requests the `@odata.count` of the collection.
    #[must_use]
    pub fn count(mut self, count: bool) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets the related entities to expand.
    #[must_use]
    pub fn expand(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.expand = to_strings(values);
        self
    }

    /// Sets the `$filter` expression.
    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Sets the `$orderby` clauses.
    #[must_use]
    pub fn orderby(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.orderby = to_strings(values);
        self
    }

    /// Sets the `$search` phrase.
    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Sets the properties to be returned.
    #[must_use]
    pub fn select(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.select = to_strings(values);
        self
    }

    /// Skips the first `skip` items.
    #[must_use]
    pub fn skip(mut self, skip: i32) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Limits the page to `top` items.
    #[must_use]
    pub fn top(mut self, top: i32) -> Self {
        self.top = Some(top);
        self
    }
}

impl QueryParameters for CollectionQueryParameters {
    const TEMPLATE: &'static str =
        "{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";

    fn write_to(&self, query: &mut IndexMap<String, TemplateValue>) {
        put(query, COUNT, self.count);
        put_list(query, EXPAND, &self.expand);
        put(query, FILTER, self.filter.as_ref());
        put_list(query, ORDERBY, &self.orderby);
        put(query, SEARCH, self.search.as_ref());
        put_list(query, SELECT, &self.select);
        put(query, SKIP, self.skip);
        put(query, TOP, self.top);
    }
}

/// `$filter` and `$search` options of `/$count` requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountQueryParameters {
    /// Filter items by property values.
    pub filter: Option<String>,
    /// Search items by search phrases.
    pub search: Option<String>,
}

impl CountQueryParameters {
    /// Sets the `$filter` expression.
    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Sets the `$search` phrase.
    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

impl QueryParameters for CountQueryParameters {
    const TEMPLATE: &'static str = "{?%24filter,%24search}";

    fn write_to(&self, query: &mut IndexMap<String, TemplateValue>) {
        put(query, FILTER, self.filter.as_ref());
        put(query, SEARCH, self.search.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_skip_unset_collection_parameters() {
        let query = CollectionQueryParameters::default()
            .filter("isPublished eq true")
            .top(5);
        let mut values = IndexMap::new();

        query.write_to(&mut values);

        insta::assert_debug_snapshot!(values, @r#"
        {
            "%24filter": Text(
                "isPublished eq true",
            ),
            "%24top": Text(
                "5",
            ),
        }
        "#);
    }

    #[test]
    fn should_write_lists_for_entity_parameters() {
        let query = EntityQueryParameters::default().select(["id", "displayName"]);
        let mut values = IndexMap::new();

        query.write_to(&mut values);

        assert_eq!(
            values.get(SELECT),
            Some(&TemplateValue::List(vec![
                "id".to_string(),
                "displayName".to_string()
            ]))
        );
        assert!(!values.contains_key(EXPAND));
    }

    #[test]
    fn should_write_count_parameters() {
        let query = CountQueryParameters::default().search("\"contoso\"");
        let mut values = IndexMap::new();

        query.write_to(&mut values);

        assert_eq!(values.len(), 1);
        assert_eq!(values.get(SEARCH), Some(&TemplateValue::from("\"contoso\"")));
    }
}
