use std::time::Duration;

/// Typed options attached to a single request.
///
/// Options are keyed by their type, adding a second value of the same type replaces the first.
/// Adapters read the options they understand and ignore the others.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use graph_core::request::{RequestOptions, RequestTimeout};
///
/// let mut options = RequestOptions::new();
/// options.add(RequestTimeout(Duration::from_secs(5)));
///
/// assert_eq!(options.get::<RequestTimeout>(), Some(&RequestTimeout(Duration::from_secs(5))));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    options: http::Extensions,
}

impl RequestOptions {
    /// Creates an empty set of options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an option, returning the previous option of the same type.
    pub fn add<T>(&mut self, option: T) -> Option<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        self.options.insert(option)
    }

    /// Returns the option of the given type.
    pub fn get<T>(&self) -> Option<&T>
    where
        T: Send + Sync + 'static,
    {
        self.options.get()
    }

    /// Removes the option of the given type.
    pub fn remove<T>(&mut self) -> Option<T>
    where
        T: Send + Sync + 'static,
    {
        self.options.remove()
    }

    /// Moves every option of `other` into this set, replacing options of the same type.
    pub fn extend(&mut self, other: Self) {
        self.options.extend(other.options);
    }

    /// Returns the number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Checks if no option is set.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Overrides the transport timeout of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTimeout(pub Duration);
