//! Models of Microsoft Teams virtual events, under `/solutions/virtualEvents`.

use chrono::{DateTime, Utc};
use graph_core::{graph_model, graph_properties, graph_union};

use super::common::{DateTimeTimeZone, Identity, IdentitySet, ItemBody};
use super::{EntityProperties, graph_enum, impl_properties};

graph_model! {
    /// The root of the virtual events.
    pub struct VirtualEventsRoot: "#microsoft.graph.virtualEventsRoot" {
        /// The events, when expanded.
        events, set_events: Vec<VirtualEvent> => "events";
        /// The town halls, when expanded.
        townhalls, set_townhalls: Vec<VirtualEventTownhall> => "townhalls";
        /// The webinars, when expanded.
        webinars, set_webinars: Vec<VirtualEventWebinar> => "webinars";
    }
}

graph_enum! {
    /// The state of a virtual event.
    pub enum VirtualEventStatus {
        /// Not published yet.
        Draft,
        /// Published.
        Published,
        /// Canceled.
        Canceled,
    }
}

graph_enum! {
    /// Who can attend a virtual event.
    pub enum MeetingAudience {
        /// Anyone.
        Everyone,
        /// Members of the organization.
        Organization,
    }
}

graph_model! {
    /// The settings of a virtual event.
    pub struct VirtualEventSettings: "#microsoft.graph.virtualEventSettings" {
        /// Whether attendees receive email notifications.
        is_attendee_email_notification_enabled, set_is_attendee_email_notification_enabled: bool => "isAttendeeEmailNotificationEnabled";
    }
}

graph_properties! {
    /// Properties shared by every virtual event.
    pub trait VirtualEventProperties: EntityProperties {
        /// The identity of the organizer.
        created_by, set_created_by: IdentitySet => "createdBy";
        /// The description.
        description, set_description: ItemBody => "description";
        /// The title.
        display_name, set_display_name: String => "displayName";
        /// The end of the event.
        end_date_time, set_end_date_time: DateTimeTimeZone => "endDateTime";
        /// The settings.
        settings, set_settings: VirtualEventSettings => "settings";
        /// The start of the event.
        start_date_time, set_start_date_time: DateTimeTimeZone => "startDateTime";
        /// The state of the event.
        status, set_status: VirtualEventStatus => "status";
    }
}

graph_model! {
    /// A webinar, with registration.
    pub struct VirtualEventWebinar: "#microsoft.graph.virtualEventWebinar" {
        /// Who can attend.
        audience, set_audience: MeetingAudience => "audience";
        /// The co-organizers.
        co_organizers, set_co_organizers: Vec<Identity> => "coOrganizers";
        /// The registration settings, when expanded.
        registration_configuration, set_registration_configuration: VirtualEventRegistrationConfiguration => "registrationConfiguration";
    }
}

graph_model! {
    /// A town hall, a one-to-many event.
    pub struct VirtualEventTownhall: "#microsoft.graph.virtualEventTownhall" {
        /// Who can attend.
        audience, set_audience: MeetingAudience => "audience";
        /// The co-organizers.
        co_organizers, set_co_organizers: Vec<Identity> => "coOrganizers";
        /// The attendees invited to an invite-only town hall.
        invited_attendees, set_invited_attendees: Vec<Identity> => "invitedAttendees";
        /// Whether only invited attendees can join.
        is_invite_only, set_is_invite_only: bool => "isInviteOnly";
    }
}

graph_union! {
    /// Any virtual event.
    pub enum VirtualEvent: "#microsoft.graph.virtualEvent" {
        /// A webinar.
        Webinar(VirtualEventWebinar),
        /// A town hall.
        Townhall(VirtualEventTownhall),
    }
}

impl_properties!([EntityProperties, VirtualEventProperties] =>
    VirtualEventWebinar,
    VirtualEventTownhall,
    VirtualEvent,
);

graph_model! {
    /// The public profile of a presenter.
    pub struct VirtualEventPresenterDetails: "#microsoft.graph.virtualEventPresenterDetails" {
        /// The biography.
        bio, set_bio: ItemBody => "bio";
        /// The company.
        company, set_company: String => "company";
        /// The job title.
        job_title, set_job_title: String => "jobTitle";
        /// The LinkedIn profile.
        linked_in_profile_web_url, set_linked_in_profile_web_url: String => "linkedInProfileWebUrl";
        /// The personal website.
        personal_site_web_url, set_personal_site_web_url: String => "personalSiteWebUrl";
        /// The X profile.
        twitter_profile_web_url, set_twitter_profile_web_url: String => "twitterProfileWebUrl";
    }
}

graph_model! {
    /// A presenter of a virtual event.
    pub struct VirtualEventPresenter: "#microsoft.graph.virtualEventPresenter" {
        /// The email address.
        email, set_email: String => "email";
        /// The identity, for presenters of the organization.
        identity, set_identity: Identity => "identity";
        /// The public profile.
        presenter_details, set_presenter_details: VirtualEventPresenterDetails => "presenterDetails";
    }
}

graph_model! {
    /// A session of a virtual event.
    pub struct VirtualEventSession: "#microsoft.graph.virtualEventSession" {
        /// The end of the session.
        end_date_time, set_end_date_time: DateTimeTimeZone => "endDateTime";
        /// The URL to join the session.
        join_web_url, set_join_web_url: String => "joinWebUrl";
        /// The start of the session.
        start_date_time, set_start_date_time: DateTimeTimeZone => "startDateTime";
        /// The title.
        subject, set_subject: String => "subject";
    }
}

graph_model! {
    /// An interval of attendance.
    pub struct AttendanceInterval: "#microsoft.graph.attendanceInterval" {
        /// The length of the interval, in seconds.
        duration_in_seconds, set_duration_in_seconds: i32 => "durationInSeconds";
        /// When the attendee joined.
        join_date_time, set_join_date_time: DateTime<Utc> => "joinDateTime";
        /// When the attendee left.
        leave_date_time, set_leave_date_time: DateTime<Utc> => "leaveDateTime";
    }
}

graph_model! {
    /// The attendance of a participant.
    pub struct AttendanceRecord: "#microsoft.graph.attendanceRecord" {
        /// The intervals of attendance.
        attendance_intervals, set_attendance_intervals: Vec<AttendanceInterval> => "attendanceIntervals";
        /// The email address.
        email_address, set_email_address: String => "emailAddress";
        /// The identity.
        identity, set_identity: Identity => "identity";
        /// The registration of the participant, for webinars.
        registration_id, set_registration_id: String => "registrationId";
        /// The role, such as `Presenter` or `Attendee`.
        role, set_role: String => "role";
        /// The total attendance, in seconds.
        total_attendance_in_seconds, set_total_attendance_in_seconds: i32 => "totalAttendanceInSeconds";
    }
}

graph_model! {
    /// The attendance report of a session.
    pub struct MeetingAttendanceReport: "#microsoft.graph.meetingAttendanceReport" {
        /// The attendance records, when expanded.
        attendance_records, set_attendance_records: Vec<AttendanceRecord> => "attendanceRecords";
        /// When the session ended.
        meeting_end_date_time, set_meeting_end_date_time: DateTime<Utc> => "meetingEndDateTime";
        /// When the session started.
        meeting_start_date_time, set_meeting_start_date_time: DateTime<Utc> => "meetingStartDateTime";
        /// The number of participants.
        total_participant_count, set_total_participant_count: i32 => "totalParticipantCount";
    }
}

graph_enum! {
    /// The state of a registration.
    pub enum VirtualEventAttendeeRegistrationStatus {
        /// Registered.
        Registered,
        /// Canceled.
        Canceled,
        /// On the waiting list.
        Waitlisted,
        /// Waiting for the approval of the organizer.
        PendingApproval,
        /// Rejected by the organizer.
        RejectedByOrganizer,
    }
}

graph_model! {
    /// The answer of a registrant to a registration question.
    pub struct VirtualEventRegistrationQuestionAnswer: "#microsoft.graph.virtualEventRegistrationQuestionAnswer" {
        /// The answer to a boolean question.
        boolean_value, set_boolean_value: bool => "booleanValue";
        /// The question.
        display_name, set_display_name: String => "displayName";
        /// The answers to a multiple choice question.
        multi_choice_values, set_multi_choice_values: Vec<String> => "multiChoiceValues";
        /// The identifier of the question.
        question_id, set_question_id: String => "questionId";
        /// The answer to a text or single choice question.
        value, set_value: String => "value";
    }
}

graph_model! {
    /// The registration of an attendee to a webinar.
    pub struct VirtualEventRegistration: "#microsoft.graph.virtualEventRegistration" {
        /// When the registration was canceled.
        cancelation_date_time, set_cancelation_date_time: DateTime<Utc> => "cancelationDateTime";
        /// The email address.
        email, set_email: String => "email";
        /// The first name.
        first_name, set_first_name: String => "firstName";
        /// The last name.
        last_name, set_last_name: String => "lastName";
        /// The preferred language.
        preferred_language, set_preferred_language: String => "preferredLanguage";
        /// The preferred time zone.
        preferred_timezone, set_preferred_timezone: String => "preferredTimezone";
        /// When the attendee registered.
        registration_date_time, set_registration_date_time: DateTime<Utc> => "registrationDateTime";
        /// The answers to the registration questions.
        registration_question_answers, set_registration_question_answers: Vec<VirtualEventRegistrationQuestionAnswer> => "registrationQuestionAnswers";
        /// The state of the registration.
        status, set_status: VirtualEventAttendeeRegistrationStatus => "status";
        /// The identifier of the attendee in the directory.
        user_id, set_user_id: String => "userId";
    }
}

graph_properties! {
    /// Properties shared by every registration configuration.
    pub trait VirtualEventRegistrationConfigurationProperties: EntityProperties {
        /// The maximum number of registrations.
        capacity, set_capacity: i32 => "capacity";
        /// The URL of the registration page.
        registration_web_url, set_registration_web_url: String => "registrationWebUrl";
    }
}

graph_model! {
    /// The registration settings of a webinar.
    pub struct VirtualEventWebinarRegistrationConfiguration: "#microsoft.graph.virtualEventWebinarRegistrationConfiguration" {
        /// Whether registrations need the approval of a manager.
        is_manager_approval_enabled, set_is_manager_approval_enabled: bool => "isManagerApprovalEnabled";
        /// Whether a waiting list is kept once the capacity is reached.
        is_waitlist_enabled, set_is_waitlist_enabled: bool => "isWaitlistEnabled";
    }
}

graph_union! {
    /// Any registration configuration.
    pub enum VirtualEventRegistrationConfiguration: "#microsoft.graph.virtualEventRegistrationConfiguration" {
        /// The configuration of a webinar.
        Webinar(VirtualEventWebinarRegistrationConfiguration),
    }
}

impl_properties!([EntityProperties, VirtualEventRegistrationConfigurationProperties] =>
    VirtualEventWebinarRegistrationConfiguration,
    VirtualEventRegistrationConfiguration,
);

graph_enum! {
    /// How a custom registration question is answered.
    pub enum VirtualEventRegistrationQuestionAnswerInputType {
        /// A single line of text.
        Text,
        /// Several lines of text.
        MultilineText,
        /// One of the choices.
        SingleChoice,
        /// Any of the choices.
        MultiChoice,
        /// Yes or no.
        Boolean,
    }
}

graph_enum! {
    /// The information asked by a predefined registration question.
    pub enum VirtualEventRegistrationPredefinedQuestionLabel {
        /// The street.
        Street,
        /// The city.
        City,
        /// The state.
        State,
        /// The postal code.
        PostalCode,
        /// The country or region.
        CountryOrRegion,
        /// The industry.
        Industry,
        /// The job title.
        JobTitle,
        /// The organization.
        Organization,
    }
}

graph_properties! {
    /// Properties shared by every registration question.
    pub trait VirtualEventRegistrationQuestionProperties: EntityProperties {
        /// The question.
        display_name, set_display_name: String => "displayName";
        /// Whether an answer is required.
        is_required, set_is_required: bool => "isRequired";
    }
}

graph_model! {
    /// A registration question written by the organizer.
    pub struct VirtualEventRegistrationCustomQuestion: "#microsoft.graph.virtualEventRegistrationCustomQuestion" {
        /// The choices of a choice question.
        answer_choices, set_answer_choices: Vec<String> => "answerChoices";
        /// How the question is answered.
        answer_input_type, set_answer_input_type: VirtualEventRegistrationQuestionAnswerInputType => "answerInputType";
    }
}

graph_model! {
    /// A registration question asking for a standard piece of information.
    pub struct VirtualEventRegistrationPredefinedQuestion: "#microsoft.graph.virtualEventRegistrationPredefinedQuestion" {
        /// The information asked.
        label, set_label: VirtualEventRegistrationPredefinedQuestionLabel => "label";
    }
}

graph_union! {
    /// Any registration question.
    pub enum VirtualEventRegistrationQuestionBase: "#microsoft.graph.virtualEventRegistrationQuestionBase" {
        /// A custom question.
        Custom(VirtualEventRegistrationCustomQuestion),
        /// A predefined question.
        Predefined(VirtualEventRegistrationPredefinedQuestion),
    }
}

impl_properties!([EntityProperties, VirtualEventRegistrationQuestionProperties] =>
    VirtualEventRegistrationCustomQuestion,
    VirtualEventRegistrationPredefinedQuestion,
    VirtualEventRegistrationQuestionBase,
);

impl_properties!([EntityProperties] =>
    VirtualEventsRoot,
    VirtualEventPresenter,
    VirtualEventSession,
    AttendanceRecord,
    MeetingAttendanceReport,
    VirtualEventRegistration,
);

#[cfg(test)]
mod tests {
    use graph_core::Parsable;
    use serde_json::json;

    use super::*;

    #[test]
    fn should_materialize_events_by_type() -> anyhow::Result<()> {
        let events: Vec<VirtualEvent> = serde_json::from_value(json!([
            {
                "@odata.type": "#microsoft.graph.virtualEventTownhall",
                "id": "88b245ac-b0b2-44ab-9122-65a1a29dbbfa@a1a56d21-2d39-4ae2-bd4c-9cba59d1de0b",
                "displayName": "The Impact of Tech on Our Lives",
                "status": "published",
                "isInviteOnly": false,
                "audience": "everyone"
            },
            {
                "@odata.type": "#microsoft.graph.virtualEventWebinar",
                "id": "f4b39f1c-520e-4e75-805a-4b0f2016a0c6@a1a56d21-2d39-4ae2-bd4c-9cba59d1de0b",
                "status": "draft"
            }
        ]))?;

        let statuses = events.iter().map(VirtualEventProperties::status).collect::<Result<Vec<_>, _>>()?;
        assert_eq!(statuses, vec![Some(VirtualEventStatus::Published), Some(VirtualEventStatus::Draft)]);

        let Some(VirtualEvent::Townhall(townhall)) = events.first() else {
            panic!("expected a town hall, got {events:?}");
        };
        assert_eq!(townhall.is_invite_only()?, Some(false));
        assert_eq!(townhall.audience()?, Some(MeetingAudience::Everyone));
        assert!(matches!(events.get(1), Some(VirtualEvent::Webinar(_))));
        Ok(())
    }

    #[test]
    fn should_read_registration_questions() -> anyhow::Result<()> {
        let questions: Vec<VirtualEventRegistrationQuestionBase> = serde_json::from_value(json!([
            {
                "@odata.type": "#microsoft.graph.virtualEventRegistrationCustomQuestion",
                "id": "95320781-96b3-4b8f-8cf8-e6561d23447a",
                "displayName": "Which sessions will you attend?",
                "isRequired": true,
                "answerInputType": "multiChoice",
                "answerChoices": ["Keynote", "Roadmap"]
            },
            {
                "@odata.type": "#microsoft.graph.virtualEventRegistrationPredefinedQuestion",
                "id": "8b9a8e9f-8b2d-4a7c-8b1a-1e2d3c4b5a69",
                "label": "jobTitle",
                "isRequired": false
            }
        ]))?;

        let [custom, predefined] = questions.as_slice() else {
            panic!("expected two questions, got {questions:?}");
        };
        let VirtualEventRegistrationQuestionBase::Custom(custom) = custom else {
            panic!("expected a custom question, got {custom:?}");
        };
        assert_eq!(
            custom.answer_input_type()?,
            Some(VirtualEventRegistrationQuestionAnswerInputType::MultiChoice)
        );
        assert_eq!(custom.is_required()?, Some(true));
        let VirtualEventRegistrationQuestionBase::Predefined(predefined) = predefined else {
            panic!("expected a predefined question, got {predefined:?}");
        };
        assert_eq!(
            predefined.label()?,
            Some(VirtualEventRegistrationPredefinedQuestionLabel::JobTitle)
        );
        Ok(())
    }

    #[test]
    fn should_build_registration() -> anyhow::Result<()> {
        let mut registration = VirtualEventRegistration::new();
        registration
            .set_first_name("Emilee")?
            .set_last_name("Pham")?
            .set_email("EmileeMPham@contoso.com")?
            .set_preferred_timezone("Pacific Standard Time")?;
        let mut answer = VirtualEventRegistrationQuestionAnswer::new();
        answer.set_question_id("95320781-96b3-4b8f-8cf8-e6561d23447a")?.set_value("Keynote")?;
        registration.set_registration_question_answers(vec![answer])?;

        insta::assert_json_snapshot!(registration.backing_store().changed_values(), @r##"
        {
          "@odata.type": "#microsoft.graph.virtualEventRegistration",
          "email": "EmileeMPham@contoso.com",
          "firstName": "Emilee",
          "lastName": "Pham",
          "preferredTimezone": "Pacific Standard Time",
          "registrationQuestionAnswers": [
            {
              "@odata.type": "#microsoft.graph.virtualEventRegistrationQuestionAnswer",
              "questionId": "95320781-96b3-4b8f-8cf8-e6561d23447a",
              "value": "Keynote"
            }
          ]
        }
        "##);
        Ok(())
    }

    #[test]
    fn should_read_attendance_intervals() -> anyhow::Result<()> {
        let record: AttendanceRecord = serde_json::from_value(json!({
            "emailAddress": "frederick.cormier@contoso.com",
            "totalAttendanceInSeconds": 322,
            "role": "Presenter",
            "attendanceIntervals": [{
                "joinDateTime": "2021-10-05T04:38:27.6027225Z",
                "leaveDateTime": "2021-10-05T04:43:49.7702391Z",
                "durationInSeconds": 322
            }]
        }))?;

        let intervals = record.attendance_intervals()?.unwrap_or_default();
        let interval = intervals.first().expect("an interval");
        assert_eq!(interval.duration_in_seconds()?, Some(322));
        let joined = interval.join_date_time()?.expect("a join date");
        assert_eq!(joined.timestamp(), 1_633_408_707);
        Ok(())
    }
}
