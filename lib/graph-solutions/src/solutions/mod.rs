//! Navigation from `/solutions` to every resource.
//!
//! Navigation methods are defined on the builders of the models they start from, so
//! `client.solutions().booking_businesses().by_id(id).appointments()` follows the URL
//! structure of the API.

mod backup_restore;
mod booking;
mod virtual_events;

pub use self::booking::CalendarViewQueryParameters;

use crate::builders::{EntityCollectionRequestBuilder, EntityRequestBuilder};
use crate::models::{BackupRestoreRoot, BookingBusiness, BookingCurrency, SolutionsRoot, VirtualEventsRoot};

impl EntityRequestBuilder<SolutionsRoot> {
    /// `/solutions/backupRestore`
    pub fn backup_restore(&self) -> EntityRequestBuilder<BackupRestoreRoot> {
        EntityRequestBuilder::at(self.base(), "backupRestore")
    }

    /// `/solutions/bookingBusinesses`
    pub fn booking_businesses(&self) -> EntityCollectionRequestBuilder<BookingBusiness> {
        EntityCollectionRequestBuilder::at(self.base(), "bookingBusinesses")
    }

    /// `/solutions/bookingCurrencies`
    pub fn booking_currencies(&self) -> EntityCollectionRequestBuilder<BookingCurrency> {
        EntityCollectionRequestBuilder::at(self.base(), "bookingCurrencies")
    }

    /// `/solutions/virtualEvents`
    pub fn virtual_events(&self) -> EntityRequestBuilder<VirtualEventsRoot> {
        EntityRequestBuilder::at(self.base(), "virtualEvents")
    }
}

/// Escapes a string literal of an OData function or key segment, `'` becomes `''`.
fn odata_literal(value: impl Into<String>) -> String {
    value.into().replace('\'', "''")
}
