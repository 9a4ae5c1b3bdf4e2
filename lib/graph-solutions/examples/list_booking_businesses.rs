#![allow(missing_docs)]
//! Lists the booking businesses of the tenant with their services.
//!
//! ```shell
//! GRAPH_TOKEN=eyJ0eXAi... cargo run --example list_booking_businesses
//! ```

use anyhow::{Context, Result};
use graph_core::auth::{BaseBearerTokenAuthenticationProvider, StaticTokenProvider};
use graph_core::{CollectionQueryParameters, GraphAdapter, RequestConfiguration};
use graph_solutions::GraphServiceClient;
use graph_solutions::models::BookingBusiness;
use graph_solutions::prelude::*;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().pretty().init();

    let token = std::env::var("GRAPH_TOKEN").context("reading GRAPH_TOKEN")?;
    let adapter = GraphAdapter::builder()
        .with_authentication(BaseBearerTokenAuthenticationProvider::new(StaticTokenProvider::new(token)))
        .build()
        .context("building the adapter")?;
    let client = GraphServiceClient::new(adapter);

    let query = CollectionQueryParameters::default()
        .select(["id", "displayName", "isPublished"])
        .top(20);
    let first_page = client
        .solutions()
        .booking_businesses()
        .get(Some(RequestConfiguration::new().with_query(query)))
        .await
        .context("listing booking businesses")?
        .unwrap_or_default();

    let mut businesses = Vec::<BookingBusiness>::new();
    client
        .page_iterator(first_page)
        .iterate(|business| {
            businesses.push(business);
            true
        })
        .await
        .context("following the next pages")?;

    for business in &businesses {
        let Some(id) = business.id()? else {
            warn!("business without id");
            continue;
        };
        let name = business.display_name()?.unwrap_or_default();
        let published = business.is_published()?.unwrap_or_default();
        info!(%id, %name, published, "business");

        let services = client
            .solutions()
            .booking_businesses()
            .by_id(&id)
            .services()
            .get(None)
            .await
            .with_context(|| format!("listing the services of {id}"))?
            .unwrap_or_default();
        for service in &services.value {
            info!(
                service = %service.display_name()?.unwrap_or_default(),
                "  service"
            );
        }
    }

    info!(count = businesses.len(), "Bye!");
    Ok(())
}
