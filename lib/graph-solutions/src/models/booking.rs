//! Models of Microsoft Bookings, under `/solutions/bookingBusinesses` and
//! `/solutions/bookingCurrencies`.
//!
//! Durations such as `preBuffer` are ISO 8601 strings, for example `PT15M`.

use chrono::{DateTime, Utc};
use graph_core::{graph_model, graph_union};
use serde::{Deserialize, Serialize};

use super::common::{DateTimeTimeZone, Location, Phone, PhysicalAddress};
use super::{EntityProperties, graph_enum, impl_properties};

graph_enum! {
    /// How the price of a service is displayed.
    pub enum BookingPriceType {
        /// The price is not defined.
        Undefined,
        /// A fixed price.
        FixedPrice,
        /// A starting price.
        StartingAt,
        /// An hourly rate.
        Hourly,
        /// Free.
        Free,
        /// The price varies.
        PriceVaries,
        /// The customer must call.
        CallUs,
        /// Not set.
        NotSet,
    }
}

graph_enum! {
    /// A day of the week.
    pub enum DayOfWeek {
        /// Sunday.
        Sunday,
        /// Monday.
        Monday,
        /// Tuesday.
        Tuesday,
        /// Wednesday.
        Wednesday,
        /// Thursday.
        Thursday,
        /// Friday.
        Friday,
        /// Saturday.
        Saturday,
    }
}

graph_model! {
    /// A period of a working day, such as `08:00:00.0000000` to `17:00:00.0000000`.
    pub struct BookingWorkTimeSlot: "#microsoft.graph.bookingWorkTimeSlot" {
        /// The end time of day.
        end_time, set_end_time: String => "endTime";
        /// The start time of day.
        start_time, set_start_time: String => "startTime";
    }
}

graph_model! {
    /// The working hours of a day.
    pub struct BookingWorkHours: "#microsoft.graph.bookingWorkHours" {
        /// The day.
        day, set_day: DayOfWeek => "day";
        /// The working periods of the day, none for a day off.
        time_slots, set_time_slots: Vec<BookingWorkTimeSlot> => "timeSlots";
    }
}

graph_model! {
    /// The rules customers follow when booking.
    pub struct BookingSchedulingPolicy: "#microsoft.graph.bookingSchedulingPolicy" {
        /// Whether customers can choose a staff member.
        allow_staff_selection, set_allow_staff_selection: bool => "allowStaffSelection";
        /// How far in advance a booking can be made.
        maximum_advance, set_maximum_advance: String => "maximumAdvance";
        /// How late before the appointment a booking can be made.
        minimum_lead_time, set_minimum_lead_time: String => "minimumLeadTime";
        /// Whether the business receives the confirmations sent to customers.
        send_confirmations_to_owner, set_send_confirmations_to_owner: bool => "sendConfirmationsToOwner";
        /// The interval between available time slots.
        time_slot_interval, set_time_slot_interval: String => "timeSlotInterval";
    }
}

graph_model! {
    /// The settings of the public booking page.
    pub struct BookingPageSettings: "#microsoft.graph.bookingPageSettings" {
        /// The theme color of the page.
        booking_page_color_code, set_booking_page_color_code: String => "bookingPageColorCode";
        /// The time zone of the business.
        business_time_zone, set_business_time_zone: String => "businessTimeZone";
        /// The consent message shown to customers.
        customer_consent_message, set_customer_consent_message: String => "customerConsentMessage";
        /// Whether customers confirm their email with a one-time password.
        enforce_one_time_password, set_enforce_one_time_password: bool => "enforceOneTimePassword";
        /// Whether the business logo is displayed.
        is_business_logo_display_enabled, set_is_business_logo_display_enabled: bool => "isBusinessLogoDisplayEnabled";
        /// The URL of the privacy policy.
        privacy_policy_web_url, set_privacy_policy_web_url: String => "privacyPolicyWebUrl";
        /// The URL of the terms and conditions.
        terms_and_conditions_web_url, set_terms_and_conditions_web_url: String => "termsAndConditionsWebUrl";
    }
}

graph_model! {
    /// A business offering services to book.
    pub struct BookingBusiness: "#microsoft.graph.bookingBusiness" {
        /// The street address of the business.
        address, set_address: PhysicalAddress => "address";
        /// The settings of the public booking page.
        booking_page_settings, set_booking_page_settings: BookingPageSettings => "bookingPageSettings";
        /// The opening hours.
        business_hours, set_business_hours: Vec<BookingWorkHours> => "businessHours";
        /// The kind of business.
        business_type, set_business_type: String => "businessType";
        /// When the business was created.
        created_date_time, set_created_date_time: DateTime<Utc> => "createdDateTime";
        /// The currency code of the prices, such as `USD`.
        default_currency_iso, set_default_currency_iso: String => "defaultCurrencyIso";
        /// The name of the business.
        display_name, set_display_name: String => "displayName";
        /// The email address of the business.
        email, set_email: String => "email";
        /// Whether the scheduling page is published.
        is_published, set_is_published: bool => "isPublished";
        /// The language of the page, such as `en-US`.
        language_tag, set_language_tag: String => "languageTag";
        /// When the business was last updated.
        last_updated_date_time, set_last_updated_date_time: DateTime<Utc> => "lastUpdatedDateTime";
        /// The phone number of the business.
        phone, set_phone: String => "phone";
        /// The URL of the scheduling page.
        public_url, set_public_url: String => "publicUrl";
        /// The booking rules.
        scheduling_policy, set_scheduling_policy: BookingSchedulingPolicy => "schedulingPolicy";
        /// The website of the business.
        web_site_url, set_web_site_url: String => "webSiteUrl";
        /// The appointments, when expanded.
        appointments, set_appointments: Vec<BookingAppointment> => "appointments";
        /// The services, when expanded.
        services, set_services: Vec<BookingService> => "services";
        /// The staff members, when expanded.
        staff_members, set_staff_members: Vec<BookingStaffMemberBase> => "staffMembers";
        /// The appointments of a period, when expanded through `calendarView`.
        calendar_view, set_calendar_view: Vec<BookingAppointment> => "calendarView";
        /// The customers, when expanded.
        customers, set_customers: Vec<BookingCustomerBase> => "customers";
        /// The custom questions, when expanded.
        custom_questions, set_custom_questions: Vec<BookingCustomQuestion> => "customQuestions";
    }
}

graph_model! {
    /// A currency available to price services.
    ///
    /// The identifier is the currency code, such as `USD`.
    pub struct BookingCurrency: "#microsoft.graph.bookingCurrency" {
        /// The currency symbol, such as `$`.
        symbol, set_symbol: String => "symbol";
    }
}

graph_enum! {
    /// Who receives a reminder.
    pub enum BookingReminderRecipients {
        /// The customers and the staff.
        AllAttendees,
        /// The staff.
        Staff,
        /// The customers.
        Customer,
    }
}

graph_model! {
    /// A reminder sent before an appointment.
    pub struct BookingReminder: "#microsoft.graph.bookingReminder" {
        /// The message.
        message, set_message: String => "message";
        /// How long before the appointment the reminder is sent.
        offset, set_offset: String => "offset";
        /// Who receives the reminder.
        recipients, set_recipients: BookingReminderRecipients => "recipients";
    }
}

graph_enum! {
    /// How a custom question is answered.
    pub enum AnswerInputType {
        /// Free text.
        Text,
        /// A choice between options.
        RadioButton,
    }
}

graph_model! {
    /// The answer of a customer to a custom question.
    pub struct BookingQuestionAnswer: "#microsoft.graph.bookingQuestionAnswer" {
        /// The free text answer.
        answer, set_answer: String => "answer";
        /// How the question is answered.
        answer_input_type, set_answer_input_type: AnswerInputType => "answerInputType";
        /// The options of the question.
        answer_options, set_answer_options: Vec<String> => "answerOptions";
        /// Whether an answer is required.
        is_required, set_is_required: bool => "isRequired";
        /// The question.
        question, set_question: String => "question";
        /// The identifier of the question.
        question_id, set_question_id: String => "questionId";
        /// The chosen options.
        selected_options, set_selected_options: Vec<String> => "selectedOptions";
    }
}

graph_model! {
    /// A customer attending an appointment.
    pub struct BookingCustomerInformation: "#microsoft.graph.bookingCustomerInformation" {
        /// The answers to the custom questions.
        custom_question_answers, set_custom_question_answers: Vec<BookingQuestionAnswer> => "customQuestionAnswers";
        /// The identifier of the customer.
        customer_id, set_customer_id: String => "customerId";
        /// The email address.
        email_address, set_email_address: String => "emailAddress";
        /// The location of the customer.
        location, set_location: Location => "location";
        /// The name.
        name, set_name: String => "name";
        /// Notes about the customer.
        notes, set_notes: String => "notes";
        /// The phone number.
        phone, set_phone: String => "phone";
        /// The time zone.
        time_zone, set_time_zone: String => "timeZone";
    }
}

graph_model! {
    /// An appointment with a business.
    pub struct BookingAppointment: "#microsoft.graph.bookingAppointment" {
        /// Additional information sent to the customer.
        additional_information, set_additional_information: String => "additionalInformation";
        /// The URL to join the online meeting anonymously.
        anonymous_join_web_url, set_anonymous_join_web_url: String => "anonymousJoinWebUrl";
        /// A label shown on the appointment, such as `Follow-up`.
        appointment_label, set_appointment_label: String => "appointmentLabel";
        /// When the appointment was created.
        created_date_time, set_created_date_time: DateTime<Utc> => "createdDateTime";
        /// The email address of the customer.
        customer_email_address, set_customer_email_address: String => "customerEmailAddress";
        /// The name of the customer.
        customer_name, set_customer_name: String => "customerName";
        /// The notes of the customer.
        customer_notes, set_customer_notes: String => "customerNotes";
        /// The phone number of the customer.
        customer_phone, set_customer_phone: String => "customerPhone";
        /// The customers attending.
        customers, set_customers: Vec<BookingCustomerInformation> => "customers";
        /// The time zone of the customer.
        customer_time_zone, set_customer_time_zone: String => "customerTimeZone";
        /// The length of the appointment.
        duration, set_duration: String => "duration";
        /// The end of the appointment.
        end_date_time, set_end_date_time: DateTimeTimeZone => "endDateTime";
        /// The number of customers attending.
        filled_attendees_count, set_filled_attendees_count: i32 => "filledAttendeesCount";
        /// Whether customers can manage the appointment.
        is_customer_allowed_to_manage_booking, set_is_customer_allowed_to_manage_booking: bool => "isCustomerAllowedToManageBooking";
        /// Whether the appointment is online.
        is_location_online, set_is_location_online: bool => "isLocationOnline";
        /// The URL to join the online meeting.
        join_web_url, set_join_web_url: String => "joinWebUrl";
        /// When the appointment was last updated.
        last_updated_date_time, set_last_updated_date_time: DateTime<Utc> => "lastUpdatedDateTime";
        /// The maximum number of customers.
        maximum_attendees_count, set_maximum_attendees_count: i32 => "maximumAttendeesCount";
        /// Whether the customer opted out of email notifications.
        opt_out_of_customer_email, set_opt_out_of_customer_email: bool => "optOutOfCustomerEmail";
        /// Time reserved after the appointment.
        post_buffer, set_post_buffer: String => "postBuffer";
        /// Time reserved before the appointment.
        pre_buffer, set_pre_buffer: String => "preBuffer";
        /// The price.
        price, set_price: f64 => "price";
        /// How the price is displayed.
        price_type, set_price_type: BookingPriceType => "priceType";
        /// The reminders.
        reminders, set_reminders: Vec<BookingReminder> => "reminders";
        /// The identifier of the appointment for the customer.
        self_service_appointment_id, set_self_service_appointment_id: String => "selfServiceAppointmentId";
        /// The booked service.
        service_id, set_service_id: String => "serviceId";
        /// Where the service is delivered.
        service_location, set_service_location: Location => "serviceLocation";
        /// The name of the booked service.
        service_name, set_service_name: String => "serviceName";
        /// Notes from the staff.
        service_notes, set_service_notes: String => "serviceNotes";
        /// Whether SMS notifications are sent.
        sms_notifications_enabled, set_sms_notifications_enabled: bool => "smsNotificationsEnabled";
        /// The staff members assigned.
        staff_member_ids, set_staff_member_ids: Vec<String> => "staffMemberIds";
        /// The start of the appointment.
        start_date_time, set_start_date_time: DateTimeTimeZone => "startDateTime";
    }
}

graph_model! {
    /// A customer of a business.
    pub struct BookingCustomer: "#microsoft.graph.bookingCustomer" {
        /// The addresses.
        addresses, set_addresses: Vec<PhysicalAddress> => "addresses";
        /// When the customer was created.
        created_date_time, set_created_date_time: DateTime<Utc> => "createdDateTime";
        /// The name.
        display_name, set_display_name: String => "displayName";
        /// The email address.
        email_address, set_email_address: String => "emailAddress";
        /// When the customer was last updated.
        last_updated_date_time, set_last_updated_date_time: DateTime<Utc> => "lastUpdatedDateTime";
        /// The phone numbers.
        phones, set_phones: Vec<Phone> => "phones";
    }
}

graph_union! {
    /// Any customer of a business.
    pub enum BookingCustomerBase: "#microsoft.graph.bookingCustomerBase" {
        /// A customer.
        Customer(BookingCustomer),
    }
}

graph_model! {
    /// A question asked to customers when booking.
    pub struct BookingCustomQuestion: "#microsoft.graph.bookingCustomQuestion" {
        /// How the question is answered.
        answer_input_type, set_answer_input_type: AnswerInputType => "answerInputType";
        /// The options of a choice question.
        answer_options, set_answer_options: Vec<String> => "answerOptions";
        /// When the question was created.
        created_date_time, set_created_date_time: DateTime<Utc> => "createdDateTime";
        /// The question.
        display_name, set_display_name: String => "displayName";
        /// When the question was last updated.
        last_updated_date_time, set_last_updated_date_time: DateTime<Utc> => "lastUpdatedDateTime";
    }
}

graph_model! {
    /// A custom question asked when booking a service.
    pub struct BookingQuestionAssignment: "#microsoft.graph.bookingQuestionAssignment" {
        /// Whether an answer is required.
        is_required, set_is_required: bool => "isRequired";
        /// The identifier of the question.
        question_id, set_question_id: String => "questionId";
    }
}

graph_model! {
    /// A service offered by a business.
    pub struct BookingService: "#microsoft.graph.bookingService" {
        /// Additional information sent to the customer.
        additional_information, set_additional_information: String => "additionalInformation";
        /// When the service was created.
        created_date_time, set_created_date_time: DateTime<Utc> => "createdDateTime";
        /// The custom questions asked when booking.
        custom_questions, set_custom_questions: Vec<BookingQuestionAssignment> => "customQuestions";
        /// The default length of an appointment.
        default_duration, set_default_duration: String => "defaultDuration";
        /// Where the service is delivered by default.
        default_location, set_default_location: Location => "defaultLocation";
        /// The default price.
        default_price, set_default_price: f64 => "defaultPrice";
        /// How the default price is displayed.
        default_price_type, set_default_price_type: BookingPriceType => "defaultPriceType";
        /// The default reminders.
        default_reminders, set_default_reminders: Vec<BookingReminder> => "defaultReminders";
        /// The description.
        description, set_description: String => "description";
        /// The name.
        display_name, set_display_name: String => "displayName";
        /// Whether anonymous users can join the online meeting.
        is_anonymous_join_enabled, set_is_anonymous_join_enabled: bool => "isAnonymousJoinEnabled";
        /// Whether customers can manage their appointments.
        is_customer_allowed_to_manage_booking, set_is_customer_allowed_to_manage_booking: bool => "isCustomerAllowedToManageBooking";
        /// Whether the service is hidden from the booking page.
        is_hidden_from_customers, set_is_hidden_from_customers: bool => "isHiddenFromCustomers";
        /// Whether appointments are online.
        is_location_online, set_is_location_online: bool => "isLocationOnline";
        /// The language of the self-service booking page.
        language_tag, set_language_tag: String => "languageTag";
        /// When the service was last updated.
        last_updated_date_time, set_last_updated_date_time: DateTime<Utc> => "lastUpdatedDateTime";
        /// The maximum number of customers per appointment.
        maximum_attendees_count, set_maximum_attendees_count: i32 => "maximumAttendeesCount";
        /// Notes for the staff.
        notes, set_notes: String => "notes";
        /// Time reserved after an appointment.
        post_buffer, set_post_buffer: String => "postBuffer";
        /// Time reserved before an appointment.
        pre_buffer, set_pre_buffer: String => "preBuffer";
        /// The booking rules of the service.
        scheduling_policy, set_scheduling_policy: BookingSchedulingPolicy => "schedulingPolicy";
        /// Whether SMS notifications are sent.
        sms_notifications_enabled, set_sms_notifications_enabled: bool => "smsNotificationsEnabled";
        /// The staff members delivering the service.
        staff_member_ids, set_staff_member_ids: Vec<String> => "staffMemberIds";
        /// The URL of the service booking page.
        web_url, set_web_url: String => "webUrl";
    }
}

graph_enum! {
    /// The role of a staff member.
    pub enum BookingStaffRole {
        /// A guest.
        Guest,
        /// An administrator of the business.
        Administrator,
        /// A viewer.
        Viewer,
        /// A guest outside the organization.
        ExternalGuest,
        /// Manages the appointments.
        Scheduler,
        /// A member of the team.
        TeamMember,
    }
}

graph_enum! {
    /// Whether a staff member is active.
    pub enum BookingStaffMembershipStatus {
        /// Active.
        Active,
        /// Inactive.
        Inactive,
    }
}

graph_model! {
    /// A member of the staff of a business.
    pub struct BookingStaffMember: "#microsoft.graph.bookingStaffMember" {
        /// Whether the personal calendar blocks availability.
        availability_is_affected_by_personal_calendar, set_availability_is_affected_by_personal_calendar: bool => "availabilityIsAffectedByPersonalCalendar";
        /// When the staff member was created.
        created_date_time, set_created_date_time: DateTime<Utc> => "createdDateTime";
        /// The name.
        display_name, set_display_name: String => "displayName";
        /// The email address.
        email_address, set_email_address: String => "emailAddress";
        /// Whether email notifications are sent.
        is_email_notification_enabled, set_is_email_notification_enabled: bool => "isEmailNotificationEnabled";
        /// When the staff member was last updated.
        last_updated_date_time, set_last_updated_date_time: DateTime<Utc> => "lastUpdatedDateTime";
        /// Whether the staff member is active.
        membership_status, set_membership_status: BookingStaffMembershipStatus => "membershipStatus";
        /// The role.
        role, set_role: BookingStaffRole => "role";
        /// The time zone.
        time_zone, set_time_zone: String => "timeZone";
        /// Whether the business hours apply.
        use_business_hours, set_use_business_hours: bool => "useBusinessHours";
        /// The working hours, when not the business hours.
        working_hours, set_working_hours: Vec<BookingWorkHours> => "workingHours";
    }
}

graph_union! {
    /// Any member of the staff of a business.
    pub enum BookingStaffMemberBase: "#microsoft.graph.bookingStaffMemberBase" {
        /// A staff member.
        StaffMember(BookingStaffMember),
    }
}

impl_properties!([EntityProperties] =>
    BookingBusiness,
    BookingCurrency,
    BookingAppointment,
    BookingCustomer,
    BookingCustomerBase,
    BookingCustomQuestion,
    BookingService,
    BookingStaffMember,
    BookingStaffMemberBase,
);

graph_enum! {
    /// The availability of a staff member.
    pub enum BookingsAvailabilityStatus {
        /// Available.
        Available,
        /// Busy.
        Busy,
        /// Some slots are available.
        SlotsAvailable,
        /// Out of office.
        OutOfOffice,
    }
}

graph_model! {
    /// A period of availability.
    pub struct AvailabilityItem: "#microsoft.graph.availabilityItem" {
        /// The end of the period.
        end_date_time, set_end_date_time: DateTimeTimeZone => "endDateTime";
        /// The service, for `slotsAvailable` periods.
        service_id, set_service_id: String => "serviceId";
        /// The start of the period.
        start_date_time, set_start_date_time: DateTimeTimeZone => "startDateTime";
        /// The availability.
        status, set_status: BookingsAvailabilityStatus => "status";
    }
}

graph_model! {
    /// The availability of a staff member.
    pub struct StaffAvailabilityItem: "#microsoft.graph.staffAvailabilityItem" {
        /// The periods of availability.
        availability_items, set_availability_items: Vec<AvailabilityItem> => "availabilityItems";
        /// The staff member.
        staff_id, set_staff_id: String => "staffId";
    }
}

/// Body of `POST /solutions/bookingBusinesses/{id}/getStaffAvailability`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetStaffAvailabilityBody {
    /// The staff members.
    pub staff_ids: Vec<String>,
    /// The start of the searched period.
    pub start_date_time: DateTimeTimeZone,
    /// The end of the searched period.
    pub end_date_time: DateTimeTimeZone,
}

/// Body of `POST /solutions/bookingBusinesses/{id}/appointments/{id}/cancel`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelAppointmentBody {
    /// The message sent to the customer.
    pub cancellation_message: String,
}
