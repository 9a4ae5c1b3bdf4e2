#![allow(missing_docs, clippy::expect_used)]

use std::sync::Arc;

use graph_core::adapter::NativeResponse;
use graph_core::testing::MockRequestAdapter;
use graph_core::{CollectionQueryParameters, GraphError, RequestConfiguration, RequestInformation};
use graph_solutions::GraphServiceClient;
use graph_solutions::models::{
    BookingBusiness, CancelAppointmentBody, ProtectionPolicyBase, ProtectionPolicyStatus, VirtualEvent,
};
use graph_solutions::prelude::*;
use http::{Method, StatusCode};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

fn init_tracing() {
    // should be run once, fail otherwise, we skip that error
    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[fixture]
fn adapter() -> Arc<MockRequestAdapter> {
    init_tracing();
    Arc::new(MockRequestAdapter::new())
}

fn client(adapter: &Arc<MockRequestAdapter>) -> GraphServiceClient {
    GraphServiceClient::with_adapter(Arc::clone(adapter) as _)
}

fn last_request(adapter: &MockRequestAdapter) -> RequestInformation {
    adapter.last_request().expect("a request")
}

fn json_body(request: &RequestInformation) -> Value {
    let content = request.content.as_ref().expect("a body");
    serde_json::from_slice(content).expect("a JSON body")
}

#[rstest]
#[tokio::test]
async fn should_list_booking_businesses(adapter: Arc<MockRequestAdapter>) -> anyhow::Result<()> {
    adapter.push_response(NativeResponse::new(StatusCode::OK).with_json(&json!({
        "@odata.context": "https://graph.microsoft.com/v1.0/$metadata#solutions/bookingBusinesses",
        "value": [
            { "id": "Contosolunchdelivery@contoso.onmicrosoft.com", "displayName": "Contoso Lunch Delivery" },
            { "id": "Fabrikam@contoso.onmicrosoft.com", "displayName": "Fabrikam" }
        ]
    })));
    let query = CollectionQueryParameters::default()
        .select(["id", "displayName"])
        .filter("isPublished eq true");

    let page = client(&adapter)
        .solutions()
        .booking_businesses()
        .get(Some(RequestConfiguration::new().with_query(query)))
        .await?
        .expect("a page");

    let names = page
        .value
        .iter()
        .map(BookingBusiness::display_name)
        .collect::<Result<Vec<_>, _>>()?;
    assert_eq!(
        names,
        vec![Some("Contoso Lunch Delivery".to_owned()), Some("Fabrikam".to_owned())]
    );
    assert_eq!(page.next_link, None);

    let request = last_request(&adapter);
    assert_eq!(request.method, Method::GET);
    insta::assert_snapshot!(
        request.uri()?,
        @"https://graph.microsoft.com/v1.0/solutions/bookingBusinesses?%24filter=isPublished%20eq%20true&%24select=id,displayName"
    );
    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_count_currencies_as_text(adapter: Arc<MockRequestAdapter>) -> anyhow::Result<()> {
    adapter.push_response(NativeResponse::new(StatusCode::OK).with_body("42", "text/plain; charset=utf-8"));

    let count = client(&adapter)
        .solutions()
        .booking_currencies()
        .count()
        .get(None)
        .await?;

    assert_eq!(count, Some(42));
    let request = last_request(&adapter);
    let accept = request.headers.get("Accept").expect("an accept header");
    assert!(accept.contains("text/plain;q=0.9"), "{accept:?}");
    insta::assert_snapshot!(
        request.uri()?,
        @"https://graph.microsoft.com/v1.0/solutions/bookingCurrencies/$count"
    );
    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_patch_only_changed_properties(adapter: Arc<MockRequestAdapter>) -> anyhow::Result<()> {
    adapter.push_response(NativeResponse::new(StatusCode::OK).with_json(&json!({
        "id": "Contosolunchdelivery@contoso.onmicrosoft.com",
        "displayName": "Contoso Lunch Delivery",
        "phone": "206-555-0100",
        "email": "manager@contoso.com"
    })));
    adapter.push_response(NativeResponse::new(StatusCode::NO_CONTENT));
    let business = client(&adapter)
        .solutions()
        .booking_businesses()
        .by_id("Contosolunchdelivery@contoso.onmicrosoft.com");

    let mut current = business.get(None).await?.expect("a business");
    current.set_email("bookings@contoso.com")?;
    let updated = business.patch(&current, None).await?;

    assert!(updated.is_none());
    let request = last_request(&adapter);
    assert_eq!(request.method, Method::PATCH);
    insta::assert_json_snapshot!(json_body(&request), @r#"
    {
      "email": "bookings@contoso.com"
    }
    "#);
    let content_type = request.headers.get("Content-Type").expect("a content type");
    assert!(content_type.contains("application/json"), "{content_type:?}");
    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_post_every_property_of_new_business(adapter: Arc<MockRequestAdapter>) -> anyhow::Result<()> {
    adapter.push_response(NativeResponse::new(StatusCode::CREATED).with_json(&json!({
        "id": "Fourthcoffee@contoso.onmicrosoft.com",
        "displayName": "Fourth Coffee",
        "phone": "206-555-0100"
    })));
    let mut business = BookingBusiness::new();
    business
        .set_display_name("Fourth Coffee")?
        .set_phone("206-555-0100")?;

    let created = client(&adapter)
        .solutions()
        .booking_businesses()
        .post(&business, None)
        .await?
        .expect("a created business");

    assert_eq!(created.id()?.as_deref(), Some("Fourthcoffee@contoso.onmicrosoft.com"));
    let request = last_request(&adapter);
    assert_eq!(request.method, Method::POST);
    insta::assert_json_snapshot!(json_body(&request), @r##"
    {
      "@odata.type": "#microsoft.graph.bookingBusiness",
      "displayName": "Fourth Coffee",
      "phone": "206-555-0100"
    }
    "##);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_activate_policy_without_body(adapter: Arc<MockRequestAdapter>) -> anyhow::Result<()> {
    adapter.push_response(NativeResponse::new(StatusCode::OK).with_json(&json!({
        "@odata.type": "#microsoft.graph.exchangeProtectionPolicy",
        "id": "845457dc-4bb2-4815-bef3-8628ebd1952e",
        "displayName": "Exchange Protection Policy",
        "status": "activeRequested"
    })));

    let policy = client(&adapter)
        .solutions()
        .backup_restore()
        .protection_policies()
        .by_id("845457dc-4bb2-4815-bef3-8628ebd1952e")
        .activate()
        .invoke(None)
        .await?
        .expect("a policy");

    assert!(matches!(policy, ProtectionPolicyBase::Exchange(_)));
    assert_eq!(policy.status()?, Some(ProtectionPolicyStatus::ActiveRequested));
    let request = last_request(&adapter);
    assert_eq!(request.method, Method::POST);
    assert!(request.content.is_none());
    insta::assert_snapshot!(
        request.uri()?,
        @"https://graph.microsoft.com/v1.0/solutions/backupRestore/protectionPolicies/845457dc-4bb2-4815-bef3-8628ebd1952e/activate"
    );
    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_cancel_appointment_with_message(adapter: Arc<MockRequestAdapter>) -> anyhow::Result<()> {
    adapter.push_response(NativeResponse::new(StatusCode::NO_CONTENT));
    let body = CancelAppointmentBody {
        cancellation_message: "Your appointment has been successfully cancelled.".to_owned(),
    };

    client(&adapter)
        .solutions()
        .booking_businesses()
        .by_id("Contosolunchdelivery@contoso.onmicrosoft.com")
        .appointments()
        .by_id("AAMkADKnAAA=")
        .cancel()
        .post(&body, None)
        .await?;

    let request = last_request(&adapter);
    insta::assert_json_snapshot!(json_body(&request), @r#"
    {
      "cancellationMessage": "Your appointment has been successfully cancelled."
    }
    "#);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_publish_business(adapter: Arc<MockRequestAdapter>) -> anyhow::Result<()> {
    adapter.push_response(NativeResponse::new(StatusCode::NO_CONTENT));

    client(&adapter)
        .solutions()
        .booking_businesses()
        .by_id("Contosolunchdelivery@contoso.onmicrosoft.com")
        .publish()
        .invoke(None)
        .await?;

    let request = last_request(&adapter);
    assert_eq!(request.method, Method::POST);
    assert!(request.content.is_none());
    insta::assert_snapshot!(
        request.uri()?,
        @"https://graph.microsoft.com/v1.0/solutions/bookingBusinesses/Contosolunchdelivery%40contoso.onmicrosoft.com/publish"
    );
    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_delete_event_session(adapter: Arc<MockRequestAdapter>) -> anyhow::Result<()> {
    adapter.push_response(NativeResponse::new(StatusCode::NO_CONTENT));

    client(&adapter)
        .solutions()
        .virtual_events()
        .webinars()
        .by_id("f4b39f1c")
        .sessions()
        .by_id("session-1")
        .delete(None)
        .await?;

    let request = last_request(&adapter);
    assert_eq!(request.method, Method::DELETE);
    insta::assert_snapshot!(
        request.uri()?,
        @"https://graph.microsoft.com/v1.0/solutions/virtualEvents/webinars/f4b39f1c/sessions/session-1"
    );
    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_map_not_found_to_odata_error(adapter: Arc<MockRequestAdapter>) {
    adapter.push_response(NativeResponse::new(StatusCode::NOT_FOUND).with_json(&json!({
        "error": {
            "code": "ErrorItemNotFound",
            "message": "The specified object was not found in the store.",
            "innerError": {
                "date": "2024-05-02T10:00:00",
                "request-id": "0f3c2a5e-5a1d-4c1b-9a5e-8d7f6e5d4c3b"
            }
        }
    })));

    let error = client(&adapter)
        .solutions()
        .booking_businesses()
        .by_id("missing@contoso.onmicrosoft.com")
        .get(None)
        .await
        .expect_err("a missing business");

    assert_eq!(error.status_code(), Some(404));
    let odata = error.as_odata().expect("an OData error");
    assert_eq!(odata.code(), Some("ErrorItemNotFound"));
    assert_eq!(odata.request_id(), Some("0f3c2a5e-5a1d-4c1b-9a5e-8d7f6e5d4c3b"));
}

#[rstest]
#[case::bad_request(StatusCode::BAD_REQUEST)]
#[case::forbidden(StatusCode::FORBIDDEN)]
#[case::unavailable(StatusCode::SERVICE_UNAVAILABLE)]
#[tokio::test]
async fn should_fail_on_error_status(adapter: Arc<MockRequestAdapter>, #[case] status: StatusCode) {
    adapter.push_response(NativeResponse::new(status).with_json(&json!({
        "error": { "code": "generalException", "message": "General exception while processing" }
    })));

    let result = client(&adapter)
        .solutions()
        .virtual_events()
        .events()
        .get(None)
        .await;

    let error = result.expect_err("a failure");
    assert!(matches!(error, GraphError::OData(_)), "{error:?}");
    assert_eq!(error.status_code(), Some(status.as_u16()));
}

#[rstest]
#[tokio::test]
async fn should_follow_next_links(adapter: Arc<MockRequestAdapter>) -> anyhow::Result<()> {
    adapter.push_response(NativeResponse::new(StatusCode::OK).with_json(&json!({
        "value": [
            { "@odata.type": "#microsoft.graph.virtualEventWebinar", "id": "webinar-1" },
            { "@odata.type": "#microsoft.graph.virtualEventTownhall", "id": "townhall-1" }
        ],
        "@odata.nextLink": "https://graph.microsoft.com/v1.0/solutions/virtualEvents/events?%24skiptoken=page-2"
    })));
    adapter.push_response(NativeResponse::new(StatusCode::OK).with_json(&json!({
        "value": [
            { "@odata.type": "#microsoft.graph.virtualEventWebinar", "id": "webinar-2" }
        ]
    })));
    let client = client(&adapter);
    let first_page = client
        .solutions()
        .virtual_events()
        .events()
        .get(None)
        .await?
        .expect("a first page");

    let mut ids = Vec::new();
    let mut pages = client.page_iterator::<VirtualEvent>(first_page);
    let completed = pages
        .iterate(|event| {
            ids.push(event.id().ok().flatten().unwrap_or_default());
            true
        })
        .await?;

    assert!(completed);
    assert_eq!(ids, vec!["webinar-1", "townhall-1", "webinar-2"]);
    insta::assert_snapshot!(
        adapter.last_uri().expect("a request"),
        @"https://graph.microsoft.com/v1.0/solutions/virtualEvents/events?%24skiptoken=page-2"
    );
    Ok(())
}
