//! Models exchanged with the service.
//!
//! Schema types are declared with [`graph_model!`](crate::graph_model),
//! base types with [`graph_properties!`](crate::graph_properties) and polymorphic
//! payloads with [`graph_union!`](crate::graph_union). All of them keep their
//! properties in a [`BackingStore`], so unknown properties survive a round trip
//! and updates only send what changed.

use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;

mod backing_store;
mod collection;
mod macros;
mod odata_error;

pub use self::backing_store::{BackingStore, ODATA_TYPE_KEY};
pub use self::collection::CollectionResponse;
pub use self::odata_error::{ApiError, ErrorDetails, InnerError, MainError, ODataError};

/// Errors raised when reading or writing model properties.
#[derive(Debug, derive_more::Error, derive_more::Display)]
pub enum ModelError {
    /// A received property does not match its declared type.
    #[display("Property '{key}' has an unexpected value: {error}")]
    UnexpectedType {
        /// JSON key of the property.
        key: String,
        /// The deserialization error.
        error: serde_json::Error,
    },

    /// A value cannot be represented as JSON.
    #[display("Property '{key}' cannot be serialized: {error}")]
    Serialization {
        /// JSON key of the property.
        key: String,
        /// The serialization error.
        error: serde_json::Error,
    },
}

/// A model backed by a [`BackingStore`].
///
/// Implementations are generated by the declaration macros.
pub trait Parsable: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static {
    /// The OData type of the model, such as `#microsoft.graph.bookingBusiness`.
    const ODATA_TYPE: &'static str;

    /// Returns the properties of the model.
    fn backing_store(&self) -> &BackingStore;

    /// Returns the properties of the model, for updates.
    fn backing_store_mut(&mut self) -> &mut BackingStore;

    /// Builds the model from received properties.
    ///
    /// Polymorphic models select the variant matching the `@odata.type` discriminator.
    fn from_backing_store(store: BackingStore) -> Self;

    /// Returns the `@odata.type` discriminator of the value.
    fn odata_type(&self) -> Option<&str> {
        self.backing_store().odata_type()
    }

    /// Returns the name of the path variable addressing an entity of this type,
    /// such as `bookingBusiness%2Did`.
    fn id_parameter() -> String {
        let name = Self::ODATA_TYPE
            .rsplit('.')
            .next()
            .unwrap_or(Self::ODATA_TYPE);
        [name, "%2Did"].concat()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    crate::graph_properties! {
        /// Base entity.
        pub trait EntityProperties {
            /// Identifier.
            id, set_id: String => "id";
        }
    }

    crate::graph_properties! {
        /// Base protection policy.
        pub trait PolicyProperties: EntityProperties {
            /// Display name.
            display_name, set_display_name: String => "displayName";
        }
    }

    crate::graph_model! {
        /// Exchange policy.
        pub struct ExchangePolicy: "#microsoft.graph.exchangeProtectionPolicy" {
            /// Inclusion rules.
            rules, set_rules: Vec<serde_json::Value> => "mailboxInclusionRules";
        }
    }

    crate::graph_model! {
        /// SharePoint policy.
        pub struct SharePointPolicy: "#microsoft.graph.sharePointProtectionPolicy" {}
    }

    crate::graph_union! {
        /// Any policy.
        pub enum Policy: "#microsoft.graph.protectionPolicyBase" {
            /// Exchange.
            Exchange(ExchangePolicy),
            /// SharePoint.
            SharePoint(SharePointPolicy),
        }
    }

    impl EntityProperties for ExchangePolicy {}
    impl PolicyProperties for ExchangePolicy {}
    impl EntityProperties for Policy {}
    impl PolicyProperties for Policy {}

    #[test]
    fn should_dispatch_on_discriminator() {
        let policies: Vec<Policy> = serde_json::from_value(json!([
            { "@odata.type": "#microsoft.graph.exchangeProtectionPolicy", "id": "1" },
            { "@odata.type": "#microsoft.graph.sharePointProtectionPolicy", "id": "2" },
            { "@odata.type": "#microsoft.graph.oneDriveForBusinessProtectionPolicy", "id": "3" },
            { "id": "4" }
        ]))
        .expect("valid policies");

        let kinds = policies
            .iter()
            .map(|policy| match policy {
                Policy::Exchange(_) => "exchange",
                Policy::SharePoint(_) => "sharePoint",
                Policy::Other(_) => "other",
            })
            .collect::<Vec<_>>();
        assert_eq!(kinds, vec!["exchange", "sharePoint", "other", "other"]);
    }

    #[test]
    fn should_read_inherited_properties_through_union() {
        let policy: Policy = serde_json::from_value(json!({
            "@odata.type": "#microsoft.graph.oneDriveForBusinessProtectionPolicy",
            "id": "3",
            "displayName": "OneDrive policy"
        }))
        .expect("valid policy");

        assert_eq!(policy.id().expect("a string").as_deref(), Some("3"));
        assert_eq!(
            policy.display_name().expect("a string").as_deref(),
            Some("OneDrive policy")
        );
        assert_eq!(
            policy.odata_type(),
            Some("#microsoft.graph.oneDriveForBusinessProtectionPolicy")
        );
    }

    #[test]
    fn should_record_changes_through_setters() {
        let mut policy: ExchangePolicy = serde_json::from_value(json!({
            "@odata.type": "#microsoft.graph.exchangeProtectionPolicy",
            "id": "1",
            "displayName": "Before"
        }))
        .expect("valid policy");

        policy
            .set_display_name("After")
            .expect("serializable")
            .set_rules(vec![json!({ "mailboxExpression": "Department eq 'Sales'" })])
            .expect("serializable");

        insta::assert_snapshot!(
            serde_json::Value::Object(policy.backing_store().changed_values()),
            @r#"{"displayName":"After","mailboxInclusionRules":[{"mailboxExpression":"Department eq 'Sales'"}]}"#
        );
    }

    #[test]
    fn should_tag_new_models() {
        let policy = ExchangePolicy::new();

        let json = serde_json::to_string(&policy).expect("serializable");

        assert_eq!(
            json,
            r##"{"@odata.type":"#microsoft.graph.exchangeProtectionPolicy"}"##
        );
    }

    #[test]
    fn should_wrap_variant_into_union() {
        let policy = Policy::from(SharePointPolicy::new());

        assert!(matches!(policy, Policy::SharePoint(_)));
        assert_eq!(Policy::default().odata_type(), Some(Policy::ODATA_TYPE));
    }

    #[test]
    fn should_derive_id_parameter_from_odata_type() {
        assert_eq!(ExchangePolicy::id_parameter(), "exchangeProtectionPolicy%2Did");
        assert_eq!(Policy::id_parameter(), "protectionPolicyBase%2Did");
    }
}
