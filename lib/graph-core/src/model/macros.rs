//! Declaration macros of backed models.

/// Declares a model backed by a [`BackingStore`](crate::model::BackingStore).
///
/// Each property gets a getter returning `Result<Option<T>, ModelError>` and a setter
/// recording the change, both bound to the JSON key of the property.
///
/// ```rust
/// graph_core::graph_model! {
///     /// A currency used by Microsoft Bookings.
///     pub struct BookingCurrency: "#microsoft.graph.bookingCurrency" {
///         /// The currency symbol, such as `$`.
///         symbol, set_symbol: String => "symbol";
///     }
/// }
///
/// let mut currency = BookingCurrency::new();
/// currency.set_symbol("€")?;
/// assert_eq!(currency.symbol()?.as_deref(), Some("€"));
/// # Ok::<(), graph_core::ModelError>(())
/// ```
#[macro_export]
macro_rules! graph_model {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $odata_type:literal {
            $(
                $(#[$field_meta:meta])*
                $getter:ident, $setter:ident : $ty:ty => $key:literal;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        $vis struct $name {
            store: $crate::model::BackingStore,
        }

        impl $name {
            /// Creates an instance tagged with its OData type.
            #[must_use]
            pub fn new() -> Self {
                Self {
                    store: $crate::model::BackingStore::with_odata_type($odata_type),
                }
            }

            $crate::__graph_accessors! {
                pub accessors {
                    $( $(#[$field_meta])* $getter, $setter : $ty => $key; )*
                }
            }
        }

        impl $crate::model::Parsable for $name {
            const ODATA_TYPE: &'static str = $odata_type;

            fn backing_store(&self) -> &$crate::model::BackingStore {
                &self.store
            }

            fn backing_store_mut(&mut self) -> &mut $crate::model::BackingStore {
                &mut self.store
            }

            fn from_backing_store(store: $crate::model::BackingStore) -> Self {
                Self { store }
            }
        }

        $crate::__graph_serde!($name);
    };
}

/// Declares the properties of a base type as a trait.
///
/// Every model deriving from the base implements the trait, with an empty `impl` block,
/// and gets the accessors of the inherited properties.
///
/// ```rust
/// graph_core::graph_properties! {
///     /// Properties shared by every entity.
///     pub trait EntityProperties {
///         /// The unique identifier of the entity.
///         id, set_id: String => "id";
///     }
/// }
///
/// graph_core::graph_model! {
///     /// A currency used by Microsoft Bookings.
///     pub struct BookingCurrency: "#microsoft.graph.bookingCurrency" {
///         symbol, set_symbol: String => "symbol";
///     }
/// }
///
/// impl EntityProperties for BookingCurrency {}
///
/// let currency: BookingCurrency = serde_json::from_str(r#"{"id":"USD","symbol":"$"}"#)?;
/// assert_eq!(currency.id()?.as_deref(), Some("USD"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[macro_export]
macro_rules! graph_properties {
    (
        $(#[$meta:meta])*
        $vis:vis trait $name:ident $(: $($parent:ident),+)? {
            $(
                $(#[$field_meta:meta])*
                $getter:ident, $setter:ident : $ty:ty => $key:literal;
            )*
        }
    ) => {
        $(#[$meta])*
        $vis trait $name: $crate::model::Parsable $($(+ $parent)+)? {
            $crate::__graph_accessors! {
                accessors {
                    $( $(#[$field_meta])* $getter, $setter : $ty => $key; )*
                }
            }
        }
    };
}

/// Declares a polymorphic base type.
///
/// Deserialization reads the `@odata.type` discriminator and builds the matching variant.
/// Values of the base type itself, or of derived types without a variant, are kept in
/// `Other` with all their properties.
///
/// ```rust
/// use graph_core::Parsable;
///
/// graph_core::graph_model! {
///     pub struct VirtualEventWebinar: "#microsoft.graph.virtualEventWebinar" {}
/// }
/// graph_core::graph_model! {
///     pub struct VirtualEventTownhall: "#microsoft.graph.virtualEventTownhall" {}
/// }
/// graph_core::graph_union! {
///     pub enum VirtualEvent: "#microsoft.graph.virtualEvent" {
///         Webinar(VirtualEventWebinar),
///         Townhall(VirtualEventTownhall),
///     }
/// }
///
/// let event: VirtualEvent = serde_json::from_str(r##"{"@odata.type":"#microsoft.graph.virtualEventWebinar"}"##)?;
/// assert!(matches!(event, VirtualEvent::Webinar(_)));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[macro_export]
macro_rules! graph_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $odata_type:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident($ty:ty),
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant($ty),
            )+
            /// A value of the base type, or of a derived type without a dedicated variant.
            Other($crate::model::BackingStore),
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self::Other($crate::model::BackingStore::with_odata_type($odata_type))
            }
        }

        impl $crate::model::Parsable for $name {
            const ODATA_TYPE: &'static str = $odata_type;

            fn backing_store(&self) -> &$crate::model::BackingStore {
                match self {
                    $( Self::$variant(value) => $crate::model::Parsable::backing_store(value), )+
                    Self::Other(store) => store,
                }
            }

            fn backing_store_mut(&mut self) -> &mut $crate::model::BackingStore {
                match self {
                    $( Self::$variant(value) => $crate::model::Parsable::backing_store_mut(value), )+
                    Self::Other(store) => store,
                }
            }

            fn from_backing_store(store: $crate::model::BackingStore) -> Self {
                let odata_type = store.odata_type().map(str::to_owned);
                $(
                    if odata_type.as_deref()
                        == ::core::option::Option::Some(<$ty as $crate::model::Parsable>::ODATA_TYPE)
                    {
                        return Self::$variant(<$ty as $crate::model::Parsable>::from_backing_store(store));
                    }
                )+
                Self::Other(store)
            }
        }

        $(
            impl ::core::convert::From<$ty> for $name {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )+

        $crate::__graph_serde!($name);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __graph_accessors {
    (
        $vis:vis accessors {
            $(
                $(#[$meta:meta])*
                $getter:ident, $setter:ident : $ty:ty => $key:literal;
            )*
        }
    ) => {
        $(
            $(#[$meta])*
            ///
            /// # Errors
            ///
            /// Fails when the received value does not match the property type.
            $vis fn $getter(
                &self,
            ) -> ::core::result::Result<::core::option::Option<$ty>, $crate::model::ModelError> {
                $crate::model::Parsable::backing_store(self).get($key)
            }

            #[doc = concat!("Sets the `", $key, "` property.")]
            ///
            /// # Errors
            ///
            /// Fails when the value cannot be represented as JSON.
            $vis fn $setter(
                &mut self,
                value: impl ::core::convert::Into<$ty>,
            ) -> ::core::result::Result<&mut Self, $crate::model::ModelError> {
                $crate::model::Parsable::backing_store_mut(self).set($key, value.into())?;
                ::core::result::Result::Ok(self)
            }
        )*
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __graph_serde {
    ($name:ident) => {
        impl $crate::__serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__serde::Serializer,
            {
                $crate::__serde::Serialize::serialize(
                    $crate::model::Parsable::backing_store(self),
                    serializer,
                )
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__serde::Deserializer<'de>,
            {
                <$crate::model::BackingStore as $crate::__serde::Deserialize<'de>>::deserialize(
                    deserializer,
                )
                .map(<Self as $crate::model::Parsable>::from_backing_store)
            }
        }
    };
}
