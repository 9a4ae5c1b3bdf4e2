//! Models of the solutions API.
//!
//! Every model is backed by a [`BackingStore`](graph_core::BackingStore): the getters read
//! the received JSON lazily and the setters record changes, so a `PATCH` only sends what
//! was modified.
//!
//! Properties inherited from a base type, such as `id` or `displayName`, come from the
//! `*Properties` traits; bring them in scope with [`crate::prelude`].

pub mod backup_restore;
pub mod booking;
pub mod common;
pub mod virtual_events;

pub use self::backup_restore::*;
pub use self::booking::*;
pub use self::common::*;
pub use self::virtual_events::*;

graph_core::graph_properties! {
    /// Properties shared by every entity.
    pub trait EntityProperties {
        /// The unique identifier of the entity.
        id, set_id: String => "id";
    }
}

graph_core::graph_model! {
    /// The root of the solutions, `/solutions`.
    pub struct SolutionsRoot: "#microsoft.graph.solutionsRoot" {
        /// The backup and restore root, when expanded.
        backup_restore, set_backup_restore: BackupRestoreRoot => "backupRestore";
        /// The booking businesses, when expanded.
        booking_businesses, set_booking_businesses: Vec<BookingBusiness> => "bookingBusinesses";
        /// The booking currencies, when expanded.
        booking_currencies, set_booking_currencies: Vec<BookingCurrency> => "bookingCurrencies";
        /// The virtual events root, when expanded.
        virtual_events, set_virtual_events: VirtualEventsRoot => "virtualEvents";
    }
}

/// Implements property traits, with their default accessors, for models.
///
/// `impl_properties!([EntityProperties, ProtectionPolicyProperties] => ExchangeProtectionPolicy)`
macro_rules! impl_properties {
    (@one [$($trait_:ident),+] $ty:ty) => {
        $( impl $trait_ for $ty {} )+
    };
    ($traits:tt => $($ty:ty),+ $(,)?) => {
        $( impl_properties!(@one $traits $ty); )+
    };
}

/// Declares a string enumeration of the API.
///
/// Values unknown to this version of the crate deserialize as `UnknownFutureValue`.
macro_rules! graph_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
            /// A value added to the API after this version.
            #[serde(other)]
            UnknownFutureValue,
        }
    };
}

pub(crate) use {graph_enum, impl_properties};

#[cfg(test)]
mod tests {
    use graph_core::Parsable;
    use serde_json::json;

    use super::*;

    #[test]
    fn should_read_unknown_enum_values() {
        let status: BackupServiceStatus = serde_json::from_value(json!("hibernating")).expect("a status");
        assert_eq!(status, BackupServiceStatus::UnknownFutureValue);

        let status: BackupServiceStatus = serde_json::from_value(json!("protectionChangeLocked")).expect("a status");
        assert_eq!(status, BackupServiceStatus::ProtectionChangeLocked);
    }

    #[test]
    fn should_tag_new_models_with_odata_type() {
        let business = BookingBusiness::new();

        assert_eq!(business.odata_type(), Some("#microsoft.graph.bookingBusiness"));
        assert_eq!(BookingBusiness::id_parameter(), "bookingBusiness%2Did");
    }

    #[test]
    fn should_read_inherited_properties() -> anyhow::Result<()> {
        let staff: BookingStaffMemberBase = serde_json::from_value(json!({
            "@odata.type": "#microsoft.graph.bookingStaffMember",
            "id": "8ee1c803-a1fa-4be6-8f7c-d84a4a2f0e3c",
            "displayName": "Dana Swope",
            "role": "scheduler"
        }))?;

        assert_eq!(staff.id()?.as_deref(), Some("8ee1c803-a1fa-4be6-8f7c-d84a4a2f0e3c"));
        let BookingStaffMemberBase::StaffMember(staff) = staff else {
            panic!("expected a staff member, got {staff:?}");
        };
        assert_eq!(staff.display_name()?.as_deref(), Some("Dana Swope"));
        assert_eq!(staff.role()?, Some(BookingStaffRole::Scheduler));
        Ok(())
    }
}
