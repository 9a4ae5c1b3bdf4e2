use indexmap::IndexSet;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::ModelError;

/// Key of the OData type discriminator.
pub const ODATA_TYPE_KEY: &str = "@odata.type";

/// Property values of a model, with change tracking.
///
/// Values received from the service are the initial state; every value set afterwards
/// is recorded as a change. Updates only send the changes, leaving untouched properties
/// as they are on the service.
///
/// # Example
///
/// ```rust
/// use graph_core::BackingStore;
///
/// let mut store: BackingStore = serde_json::from_str(r#"{"id":"1","displayName":"Contoso"}"#)?;
/// assert!(!store.has_changes());
///
/// store.set("displayName", "Contoso Ltd")?;
/// assert_eq!(store.get::<String>("displayName")?.as_deref(), Some("Contoso Ltd"));
/// assert_eq!(serde_json::Value::Object(store.changed_values()), serde_json::json!({"displayName": "Contoso Ltd"}));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct BackingStore {
    values: Map<String, Value>,
    changed: IndexSet<String>,
}

impl BackingStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store tagged with an `@odata.type`, recorded as a change.
    pub fn with_odata_type(odata_type: &str) -> Self {
        let mut store = Self::default();
        store.set_raw(ODATA_TYPE_KEY, Value::from(odata_type));
        store
    }

    /// Creates a store holding received values, without changes.
    pub fn from_values(values: Map<String, Value>) -> Self {
        Self {
            values,
            changed: IndexSet::new(),
        }
    }

    /// Returns the typed value of a property.
    ///
    /// Absent and `null` properties are `None`.
    ///
    /// # Errors
    ///
    /// Fails when the value does not match the requested type.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ModelError> {
        match self.values.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::deserialize(value)
                .map(Some)
                .map_err(|error| ModelError::UnexpectedType {
                    key: key.to_owned(),
                    error,
                }),
        }
    }

    /// Returns the raw JSON value of a property.
    pub fn get_raw(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Sets a property and records the change.
    ///
    /// # Errors
    ///
    /// Fails when the value cannot be represented as JSON.
    pub fn set<T: Serialize>(&mut self, key: &str, value: T) -> Result<(), ModelError> {
        let value = serde_json::to_value(value).map_err(|error| ModelError::Serialization {
            key: key.to_owned(),
            error,
        })?;
        self.set_raw(key, value);
        Ok(())
    }

    /// Sets a raw JSON value and records the change.
    pub fn set_raw(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_owned(), value);
        self.changed.insert(key.to_owned());
    }

    /// Sets a property to `null` and records the change.
    pub fn clear(&mut self, key: &str) {
        self.set_raw(key, Value::Null);
    }

    /// Returns the `@odata.type` discriminator.
    pub fn odata_type(&self) -> Option<&str> {
        self.values.get(ODATA_TYPE_KEY).and_then(Value::as_str)
    }

    /// Checks if a property changed since the store was received.
    pub fn is_changed(&self, key: &str) -> bool {
        self.changed.contains(key)
    }

    /// Checks if any property changed since the store was received.
    pub fn has_changes(&self) -> bool {
        !self.changed.is_empty()
    }

    /// Returns the changed properties with their current values.
    pub fn changed_values(&self) -> Map<String, Value> {
        self.changed
            .iter()
            .filter_map(|key| self.values.get(key).map(|value| (key.clone(), value.clone())))
            .collect()
    }

    /// Forgets the recorded changes, the current values become the initial state.
    pub fn accept_changes(&mut self) {
        self.changed.clear();
    }

    /// Returns every property.
    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Returns the number of properties.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Checks if the store holds no property.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PartialEq for BackingStore {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl Serialize for BackingStore {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.values.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BackingStore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Map::deserialize(deserializer).map(Self::from_values)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn received() -> BackingStore {
        serde_json::from_value(json!({
            "id": "AAMkADc7",
            "displayName": "Contoso Lunch Delivery",
            "isPublished": true,
            "phone": null,
            "businessHours": [{ "day": "monday", "timeSlots": [] }]
        }))
        .expect("an object")
    }

    #[test]
    fn should_start_without_changes() {
        let store = received();

        assert!(!store.has_changes());
        assert!(store.changed_values().is_empty());
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn should_read_typed_values() {
        let store = received();

        assert_eq!(store.get::<bool>("isPublished").expect("a bool"), Some(true));
        assert_eq!(store.get::<String>("phone").expect("null"), None);
        assert_eq!(store.get::<String>("email").expect("absent"), None);
    }

    #[test]
    fn should_report_unexpected_types() {
        let store = received();

        let result = store.get::<i32>("displayName");

        assert!(matches!(
            result,
            Err(ModelError::UnexpectedType { ref key, .. }) if key == "displayName"
        ));
    }

    #[test]
    fn should_track_changes() {
        let mut store = received();

        store.set("displayName", "Contoso").expect("serializable");
        store.clear("isPublished");

        insta::assert_debug_snapshot!(store.changed_values(), @r#"
        {
            "displayName": String("Contoso"),
            "isPublished": Null,
        }
        "#);
    }

    #[test]
    fn should_accept_changes() {
        let mut store = received();
        store.set("displayName", "Contoso").expect("serializable");

        store.accept_changes();

        assert!(!store.has_changes());
        assert_eq!(
            store.get::<String>("displayName").expect("a string").as_deref(),
            Some("Contoso")
        );
    }

    #[test]
    fn should_tag_new_store_with_odata_type() {
        let store = BackingStore::with_odata_type("#microsoft.graph.bookingBusiness");

        assert_eq!(store.odata_type(), Some("#microsoft.graph.bookingBusiness"));
        assert!(store.is_changed(ODATA_TYPE_KEY));
    }

    #[test]
    fn should_serialize_all_values() {
        let mut store = BackingStore::new();
        store.set("symbol", "$").expect("serializable");

        let json = serde_json::to_string(&store).expect("serializable");

        assert_eq!(json, r#"{"symbol":"$"}"#);
    }
}
