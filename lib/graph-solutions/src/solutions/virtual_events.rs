use graph_core::{CollectionQueryParameters, CollectionResponse, EntityQueryParameters, QueryParameters};

use super::odata_literal;
use crate::builders::{
    EntityCollectionRequestBuilder, EntityRequestBuilder, FunctionRequestBuilder,
    NoContentActionRequestBuilder,
};
use crate::models::{
    AttendanceRecord, MeetingAttendanceReport, VirtualEvent, VirtualEventPresenter,
    VirtualEventRegistration, VirtualEventRegistrationConfiguration,
    VirtualEventRegistrationQuestionBase, VirtualEventSession, VirtualEventTownhall,
    VirtualEventWebinar, VirtualEventsRoot,
};

impl EntityRequestBuilder<VirtualEventsRoot> {
    /// Every virtual event, whatever its kind.
    pub fn events(&self) -> EntityCollectionRequestBuilder<VirtualEvent> {
        EntityCollectionRequestBuilder::at(self.base(), "events")
    }

    /// The town halls.
    pub fn townhalls(&self) -> EntityCollectionRequestBuilder<VirtualEventTownhall> {
        EntityCollectionRequestBuilder::at(self.base(), "townhalls")
    }

    /// The webinars.
    pub fn webinars(&self) -> EntityCollectionRequestBuilder<VirtualEventWebinar> {
        EntityCollectionRequestBuilder::at(self.base(), "webinars")
    }
}

/// Navigation shared by every kind of event.
macro_rules! event_navigation {
    ($($event:ty),+) => {
        $(
            impl EntityRequestBuilder<$event> {
                /// The presenters.
                pub fn presenters(&self) -> EntityCollectionRequestBuilder<VirtualEventPresenter> {
                    EntityCollectionRequestBuilder::at(self.base(), "presenters")
                }

                /// The sessions.
                pub fn sessions(&self) -> EntityCollectionRequestBuilder<VirtualEventSession> {
                    EntityCollectionRequestBuilder::at(self.base(), "sessions")
                }
            }
        )+
    };
}

event_navigation!(VirtualEvent, VirtualEventTownhall, VirtualEventWebinar);

/// Functions listing the events of a user.
macro_rules! events_of_user {
    ($($event:ty),+) => {
        $(
            impl EntityCollectionRequestBuilder<$event> {
                /// The events where the signed-in user has a role, such as `organizer`.
                pub fn get_by_user_role(
                    &self,
                    role: impl Into<String>,
                ) -> FunctionRequestBuilder<CollectionResponse<$event>, CollectionQueryParameters> {
                    FunctionRequestBuilder::at(
                        self.base(),
                        "getByUserRole(role='{role}')",
                        [("role", odata_literal(role))],
                    )
                }

                /// The events where a user has a role.
                pub fn get_by_user_id_and_role(
                    &self,
                    user_id: impl Into<String>,
                    role: impl Into<String>,
                ) -> FunctionRequestBuilder<CollectionResponse<$event>, CollectionQueryParameters> {
                    FunctionRequestBuilder::at(
                        self.base(),
                        "getByUserIdAndRole(userId='{userId}',role='{role}')",
                        [("userId", odata_literal(user_id)), ("role", odata_literal(role))],
                    )
                }
            }
        )+
    };
}

events_of_user!(VirtualEventTownhall, VirtualEventWebinar);

impl EntityRequestBuilder<VirtualEvent> {
    /// Cancels the event.
    pub fn cancel(&self) -> NoContentActionRequestBuilder<()> {
        NoContentActionRequestBuilder::at(self.base(), "cancel")
    }

    /// Publishes the event.
    pub fn publish(&self) -> NoContentActionRequestBuilder<()> {
        NoContentActionRequestBuilder::at(self.base(), "publish")
    }
}

impl EntityRequestBuilder<VirtualEventWebinar> {
    /// The registrations.
    pub fn registrations(&self) -> EntityCollectionRequestBuilder<VirtualEventRegistration> {
        EntityCollectionRequestBuilder::at(self.base(), "registrations")
    }

    /// The registration of an attendee, by email address.
    pub fn registrations_with_email(&self, email: impl Into<String>) -> EntityRequestBuilder<VirtualEventRegistration> {
        EntityRequestBuilder::new(
            self.base()
                .navigate("registrations(email='{email}')", EntityQueryParameters::TEMPLATE)
                .with_parameter("email", odata_literal(email)),
        )
    }

    /// The registration of an attendee, by directory identifier.
    pub fn registrations_with_user_id(
        &self,
        user_id: impl Into<String>,
    ) -> EntityRequestBuilder<VirtualEventRegistration> {
        EntityRequestBuilder::new(
            self.base()
                .navigate("registrations(userId='{userId}')", EntityQueryParameters::TEMPLATE)
                .with_parameter("userId", odata_literal(user_id)),
        )
    }

    /// The registration settings.
    pub fn registration_configuration(&self) -> EntityRequestBuilder<VirtualEventRegistrationConfiguration> {
        EntityRequestBuilder::at(self.base(), "registrationConfiguration")
    }
}

impl EntityRequestBuilder<VirtualEventRegistration> {
    /// Cancels the registration.
    pub fn cancel(&self) -> NoContentActionRequestBuilder<()> {
        NoContentActionRequestBuilder::at(self.base(), "cancel")
    }

    /// The sessions the attendee registered to.
    pub fn sessions(&self) -> EntityCollectionRequestBuilder<VirtualEventSession> {
        EntityCollectionRequestBuilder::at(self.base(), "sessions")
    }
}

impl EntityRequestBuilder<VirtualEventRegistrationConfiguration> {
    /// The registration questions.
    pub fn questions(&self) -> EntityCollectionRequestBuilder<VirtualEventRegistrationQuestionBase> {
        EntityCollectionRequestBuilder::at(self.base(), "questions")
    }
}

impl EntityRequestBuilder<VirtualEventSession> {
    /// The attendance reports.
    pub fn attendance_reports(&self) -> EntityCollectionRequestBuilder<MeetingAttendanceReport> {
        EntityCollectionRequestBuilder::at(self.base(), "attendanceReports")
    }
}

impl EntityRequestBuilder<MeetingAttendanceReport> {
    /// The attendance records.
    pub fn attendance_records(&self) -> EntityCollectionRequestBuilder<AttendanceRecord> {
        EntityCollectionRequestBuilder::at(self.base(), "attendanceRecords")
    }
}
