//! Complex types shared by the solutions models.

use graph_core::{graph_model, graph_properties};

use super::graph_enum;

graph_model! {
    /// A postal address.
    pub struct PhysicalAddress: "#microsoft.graph.physicalAddress" {
        /// The city.
        city, set_city: String => "city";
        /// The country or region, a free-format string such as `United States`.
        country_or_region, set_country_or_region: String => "countryOrRegion";
        /// The postal code.
        postal_code, set_postal_code: String => "postalCode";
        /// The state.
        state, set_state: String => "state";
        /// The street.
        street, set_street: String => "street";
    }
}

graph_properties! {
    /// Properties of an identity, such as a user or an application.
    pub trait IdentityProperties {
        /// The display name, which may have changed since the identity was recorded.
        display_name, set_display_name: String => "displayName";
        /// The unique identifier.
        id, set_id: String => "id";
    }
}

graph_model! {
    /// An identity of an actor.
    pub struct Identity: "#microsoft.graph.identity" {}
}

impl IdentityProperties for Identity {}

graph_model! {
    /// The identities involved in an action: application, device and user.
    pub struct IdentitySet: "#microsoft.graph.identitySet" {
        /// The application.
        application, set_application: Identity => "application";
        /// The device.
        device, set_device: Identity => "device";
        /// The user.
        user, set_user: Identity => "user";
    }
}

graph_model! {
    /// A date and time in a given time zone.
    pub struct DateTimeTimeZone: "#microsoft.graph.dateTimeTimeZone" {
        /// The date and time, such as `2024-06-03T09:00:00.0000000`.
        date_time, set_date_time: String => "dateTime";
        /// The time zone, such as `Pacific Standard Time`.
        time_zone, set_time_zone: String => "timeZone";
    }
}

impl DateTimeTimeZone {
    /// Creates a date and time in a time zone.
    ///
    /// # Errors
    ///
    /// Fails when the values cannot be stored.
    pub fn at(date_time: impl Into<String>, time_zone: impl Into<String>) -> Result<Self, graph_core::ModelError> {
        let mut value = Self::new();
        value.set_date_time(date_time)?.set_time_zone(time_zone)?;
        Ok(value)
    }
}

graph_enum! {
    /// The content type of an [`ItemBody`].
    pub enum BodyType {
        /// Plain text.
        Text,
        /// HTML.
        Html,
    }
}

graph_model! {
    /// A formatted text body.
    pub struct ItemBody: "#microsoft.graph.itemBody" {
        /// The content.
        content, set_content: String => "content";
        /// The type of the content.
        content_type, set_content_type: BodyType => "contentType";
    }
}

graph_model! {
    /// An error detail reported by a service.
    pub struct PublicErrorDetail: "#microsoft.graph.publicErrorDetail" {
        /// The error code.
        code, set_code: String => "code";
        /// The error message.
        message, set_message: String => "message";
        /// The target of the error.
        target, set_target: String => "target";
    }
}

graph_model! {
    /// An error reported by a service, such as the failure of a restore.
    pub struct PublicError: "#microsoft.graph.publicError" {
        /// The error code.
        code, set_code: String => "code";
        /// The details of the error.
        details, set_details: Vec<PublicErrorDetail> => "details";
        /// The error message.
        message, set_message: String => "message";
        /// The target of the error.
        target, set_target: String => "target";
    }
}

graph_model! {
    /// A location, such as the place of an appointment.
    pub struct Location: "#microsoft.graph.location" {
        /// The street address.
        address, set_address: PhysicalAddress => "address";
        /// The name of the location.
        display_name, set_display_name: String => "displayName";
        /// The email address.
        location_email_address, set_location_email_address: String => "locationEmailAddress";
        /// The URI of the location.
        location_uri, set_location_uri: String => "locationUri";
        /// The identifier of the location in the directory.
        unique_id, set_unique_id: String => "uniqueId";
    }
}

graph_enum! {
    /// The kind of a [`Phone`] number.
    pub enum PhoneType {
        /// Home.
        Home,
        /// Business.
        Business,
        /// Mobile.
        Mobile,
        /// Other.
        Other,
        /// Assistant.
        Assistant,
        /// Home fax.
        HomeFax,
        /// Business fax.
        BusinessFax,
        /// Other fax.
        OtherFax,
        /// Pager.
        Pager,
        /// Radio.
        Radio,
    }
}

graph_model! {
    /// A phone number.
    pub struct Phone: "#microsoft.graph.phone" {
        /// The phone number.
        number, set_number: String => "number";
        /// The kind of number.
        phone_type, set_phone_type: PhoneType => "type";
    }
}

graph_model! {
    /// A period between two dates and times.
    pub struct TimeSlot: "#microsoft.graph.timeSlot" {
        /// The end of the period.
        end, set_end: DateTimeTimeZone => "end";
        /// The start of the period.
        start, set_start: DateTimeTimeZone => "start";
    }
}

#[cfg(test)]
mod tests {
    use graph_core::Parsable;
    use serde_json::json;

    use super::*;

    #[test]
    fn should_read_nested_complex_types() -> anyhow::Result<()> {
        let location: Location = serde_json::from_value(json!({
            "displayName": "Contoso Lunch Delivery",
            "address": {
                "street": "4567 First Street",
                "city": "Buffalo",
                "state": "NY",
                "postalCode": "98052",
                "countryOrRegion": "USA"
            }
        }))?;

        let address = location.address()?.expect("an address");
        assert_eq!(address.city()?.as_deref(), Some("Buffalo"));
        assert_eq!(address.postal_code()?.as_deref(), Some("98052"));
        Ok(())
    }

    #[test]
    fn should_map_phone_type_to_type_key() -> anyhow::Result<()> {
        let mut phone = Phone::new();
        phone.set_number("206-555-0100")?.set_phone_type(PhoneType::Mobile)?;

        insta::assert_json_snapshot!(phone.backing_store().changed_values(), @r##"
        {
          "@odata.type": "#microsoft.graph.phone",
          "number": "206-555-0100",
          "type": "mobile"
        }
        "##);
        Ok(())
    }

    #[test]
    fn should_report_mistyped_property() {
        let body: ItemBody = serde_json::from_value(json!({ "contentType": 42 })).expect("a body");

        let error = body.content_type().expect_err("a type mismatch");
        assert!(error.to_string().contains("contentType"), "{error}");
    }
}
