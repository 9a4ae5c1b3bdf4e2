use chrono::{DateTime, SecondsFormat, Utc};
use graph_core::request::TemplateValue;
use graph_core::{CollectionQueryParameters, CollectionResponse, QueryParameters};
use indexmap::IndexMap;

use crate::builders::{
    ActionRequestBuilder, EntityCollectionRequestBuilder, EntityRequestBuilder,
    NoContentActionRequestBuilder,
};
use crate::models::{
    BookingAppointment, BookingBusiness, BookingCustomQuestion, BookingCustomerBase,
    BookingService, BookingStaffMemberBase, CancelAppointmentBody, GetStaffAvailabilityBody,
    StaffAvailabilityItem,
};

/// Query parameters of `/solutions/bookingBusinesses/{id}/calendarView`.
///
/// The period is required; the other options are those of any collection.
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use graph_solutions::solutions::CalendarViewQueryParameters;
///
/// let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2024, 6, 30, 0, 0, 0).unwrap();
/// let query = CalendarViewQueryParameters::new(start, end).with_options(|options| options.top(20));
/// assert_eq!(query.options.top, Some(20));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarViewQueryParameters {
    /// The start of the period.
    pub start: DateTime<Utc>,
    /// The end of the period.
    pub end: DateTime<Utc>,
    /// The collection options.
    pub options: CollectionQueryParameters,
}

impl CalendarViewQueryParameters {
    /// Creates the parameters of a period.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            options: CollectionQueryParameters::default(),
        }
    }

    /// Sets the collection options.
    #[must_use]
    pub fn with_options(
        mut self,
        options: impl FnOnce(CollectionQueryParameters) -> CollectionQueryParameters,
    ) -> Self {
        self.options = options(self.options);
        self
    }
}

impl QueryParameters for CalendarViewQueryParameters {
    // `start` and `end` are plain expressions, expanding the template fails without them.
    const TEMPLATE: &'static str = "?end={end}&start={start}{&%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";

    fn write_to(&self, query: &mut IndexMap<String, TemplateValue>) {
        query.insert(
            "start".to_owned(),
            self.start.to_rfc3339_opts(SecondsFormat::Secs, true).into(),
        );
        query.insert(
            "end".to_owned(),
            self.end.to_rfc3339_opts(SecondsFormat::Secs, true).into(),
        );
        self.options.write_to(query);
    }
}

impl EntityRequestBuilder<BookingBusiness> {
    /// Makes the scheduling page of the business available to customers.
    pub fn publish(&self) -> NoContentActionRequestBuilder<()> {
        NoContentActionRequestBuilder::at(self.base(), "publish")
    }

    /// Makes the scheduling page of the business unavailable.
    pub fn unpublish(&self) -> NoContentActionRequestBuilder<()> {
        NoContentActionRequestBuilder::at(self.base(), "unpublish")
    }

    /// Gets the availability of staff members over a period.
    pub fn get_staff_availability(
        &self,
    ) -> ActionRequestBuilder<GetStaffAvailabilityBody, CollectionResponse<StaffAvailabilityItem>> {
        ActionRequestBuilder::at(self.base(), "getStaffAvailability")
    }

    /// The appointments.
    pub fn appointments(&self) -> EntityCollectionRequestBuilder<BookingAppointment> {
        EntityCollectionRequestBuilder::at(self.base(), "appointments")
    }

    /// The appointments of a period, recurring ones expanded.
    pub fn calendar_view(&self) -> EntityCollectionRequestBuilder<BookingAppointment, CalendarViewQueryParameters> {
        EntityCollectionRequestBuilder::at(self.base(), "calendarView")
    }

    /// The customers.
    pub fn customers(&self) -> EntityCollectionRequestBuilder<BookingCustomerBase> {
        EntityCollectionRequestBuilder::at(self.base(), "customers")
    }

    /// The custom questions asked when booking.
    pub fn custom_questions(&self) -> EntityCollectionRequestBuilder<BookingCustomQuestion> {
        EntityCollectionRequestBuilder::at(self.base(), "customQuestions")
    }

    /// The services.
    pub fn services(&self) -> EntityCollectionRequestBuilder<BookingService> {
        EntityCollectionRequestBuilder::at(self.base(), "services")
    }

    /// The staff members.
    pub fn staff_members(&self) -> EntityCollectionRequestBuilder<BookingStaffMemberBase> {
        EntityCollectionRequestBuilder::at(self.base(), "staffMembers")
    }
}

impl EntityRequestBuilder<BookingAppointment> {
    /// Cancels the appointment and notifies the customer.
    pub fn cancel(&self) -> NoContentActionRequestBuilder<CancelAppointmentBody> {
        NoContentActionRequestBuilder::at(self.base(), "cancel")
    }
}
