//! Services over scripted stores: failures the in-memory store cannot produce.

use chrono::Utc;
use http::StatusCode;
use katla_admin::model::{HiveId, HiveRecord, SectionRecord, UpdateHiveRequest};
use katla_admin::services::{HiveService, ManagedService};
use katla_admin::transport::Endpoint;
use lifecycle_framework::mock::MockStore;
use lifecycle_framework::{ErrorKind, FixedUser, StoreError};
use std::sync::Arc;

fn hive(id: u32, code: &str, deleted: bool) -> HiveRecord {
    HiveRecord {
        id: HiveId(id),
        code: code.to_string(),
        name: "North".to_string(),
        address: String::new(),
        is_deleted: deleted,
        created_by: 1,
        last_updated_by: 1,
        last_updated: Utc::now(),
    }
}

fn service(hives: &MockStore<HiveRecord>, sections: &MockStore<SectionRecord>) -> HiveService {
    HiveService::new(
        Arc::new(hives.client()),
        Arc::new(FixedUser(3)),
        Arc::new(sections.client()),
    )
    .unwrap()
}

#[tokio::test]
async fn test_store_failure_on_list_is_unexpected() {
    let hives = MockStore::<HiveRecord>::new();
    let sections = MockStore::<SectionRecord>::new();
    hives
        .expect_list()
        .return_err(StoreError::Backend("connection reset".into()));

    let err = service(&hives, &sections).get_hives().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unexpected);
    hives.verify();
}

#[tokio::test]
async fn test_store_failure_on_save_maps_to_500() {
    let hives = MockStore::<HiveRecord>::new();
    let sections = MockStore::<SectionRecord>::new();
    hives.expect_get().return_ok(Some(hive(1, "H1", false)));
    hives
        .expect_save()
        .return_err(StoreError::Backend("disk full".into()));

    let service = service(&hives, &sections);
    let endpoint = Endpoint::<HiveRecord>::new(&service, "/api/hives");
    let response = endpoint.set_status(1, true).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.error_body().unwrap().message, "internal error");
    hives.verify();
}

#[tokio::test]
async fn test_create_checks_code_then_inserts_stamped_record() {
    let hives = MockStore::<HiveRecord>::new();
    let sections = MockStore::<SectionRecord>::new();
    hives.expect_find().return_ok(Vec::new());
    hives.expect_insert().return_ok(hive(7, "H7", false));

    let created = service(&hives, &sections)
        .create_hive(UpdateHiveRequest {
            code: "H7".into(),
            name: "North".into(),
            address: String::new(),
        })
        .await
        .unwrap();
    assert_eq!(created.id, HiveId(7));
    hives.verify();
}

#[tokio::test]
async fn test_purge_consults_section_store() {
    let hives = MockStore::<HiveRecord>::new();
    let sections = MockStore::<SectionRecord>::new();
    hives.expect_get().return_ok(Some(hive(2, "H2", true)));
    sections
        .expect_find()
        .return_err(StoreError::Closed);

    let err = service(&hives, &sections)
        .delete_hive(HiveId(2))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unexpected);
    hives.verify();
    sections.verify();
}

#[tokio::test]
async fn test_set_status_of_missing_hive_does_not_save() {
    let hives = MockStore::<HiveRecord>::new();
    let sections = MockStore::<SectionRecord>::new();
    hives.expect_get().return_ok(None);

    let err = service(&hives, &sections)
        .set_status(HiveId(8), true)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    hives.verify();
}

#[tokio::test]
async fn test_endpoint_serves_through_hive_service() {
    let hives = MockStore::<HiveRecord>::new();
    let sections = MockStore::<SectionRecord>::new();
    hives.expect_find().return_ok(Vec::new());
    hives.expect_insert().return_ok(hive(7, "H7", false));
    hives.expect_get().return_ok(Some(hive(7, "H7", true)));
    sections.expect_find().return_ok(Vec::new());
    hives.expect_remove().return_ok(hive(7, "H7", true));

    let service = service(&hives, &sections);
    let endpoint = Endpoint::<HiveRecord>::new(&service, "/api/hives");

    let created = endpoint
        .create(Some(r#"{"code":"H7","name":"North"}"#))
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.location.as_deref(), Some("/api/hives/7"));

    let purged = endpoint.delete(7).await;
    assert_eq!(purged.status, StatusCode::NO_CONTENT);
    hives.verify();
    sections.verify();
}
