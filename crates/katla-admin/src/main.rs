//! # Katla Admin Demo
//!
//! Starts the admin system, walks one hive and one category through their whole
//! lifecycle via the HTTP handlers, and shuts down.
//!
//! ```bash
//! RUST_LOG=info cargo run -p katla-admin
//! RUST_LOG=debug cargo run -p katla-admin   # every store request
//! ```

use katla_admin::config::AdminConfig;
use katla_admin::runtime::{setup_tracing, AdminError, AdminSystem};
use katla_admin::transport::AdminApi;
use serde_json::json;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), AdminError> {
    let config = AdminConfig::load()?;
    setup_tracing(&config.log_filter);

    info!(user = config.acting_user_id, "Starting Katla admin");
    let system = AdminSystem::new(&config)?;
    let api = AdminApi::new(&system);

    let span = tracing::info_span!("hive_lifecycle");
    async {
        let body = json!({ "code": "H-001", "name": "North hive", "address": "Dock 4" });
        let hive = api.hives().create(Some(&body.to_string())).await;
        info!(status = %hive.status, location = ?hive.location, "Hive created");

        let body = json!({
            "code": "S-001",
            "name": "Cold shelf",
            "hiveSectionCount": 3,
            "storeHiveId": 1
        });
        let section = api.sections().create(Some(&body.to_string())).await;
        info!(status = %section.status, "Section created");

        // Live section: purge is refused.
        api.hives().set_status(1, true).await;
        let refused = api.hives().delete(1).await;
        warn!(status = %refused.status, "Hive purge with live section");

        api.sections().set_status(1, true).await;
        let purged = api.hives().delete(1).await;
        info!(status = %purged.status, "Hive purged");
    }
    .instrument(span)
    .await;

    let span = tracing::info_span!("catalogue");
    async {
        let category = api
            .categories()
            .create(Some(&json!({ "code": "C-01", "name": "Honey" }).to_string()))
            .await;
        info!(status = %category.status, location = ?category.location, "Category created");

        for n in 1..=3 {
            let body = json!({
                "code": format!("P-{n:02}"),
                "manufacturerCode": format!("M-{n}"),
                "name": format!("Jar {n}"),
                "categoryId": 1
            });
            api.products().create(Some(&body.to_string())).await;
        }

        let page = api.product_page(1, 2).await;
        info!(status = %page.status, body = ?page.body, "Product page");

        let duplicate = api
            .products()
            .create(Some(
                &json!({ "code": "P-01", "name": "Again", "categoryId": 1 }).to_string(),
            ))
            .await;
        warn!(status = %duplicate.status, "Duplicate product code");
    }
    .instrument(span)
    .await;

    system.shutdown().await?;
    info!("Katla admin stopped");
    Ok(())
}
