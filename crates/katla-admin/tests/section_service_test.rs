mod common;

use common::{section_request, seed_hives, start};
use katla_admin::model::{HiveId, HiveSectionId};
use katla_admin::services::ManagedService;
use lifecycle_framework::{ErrorKind, LifecycleError};

#[tokio::test]
async fn test_create_section_on_existing_hive() {
    let system = start();
    let hive = seed_hives(&system, 1).await.remove(0);

    let section = system
        .sections
        .create_hive_section(section_request("S1", hive.id))
        .await
        .unwrap();
    assert_eq!(section.store_hive_id, hive.id);
    assert_eq!(section.code, "S1");
    assert_eq!(section.hive_section_count, 1);

    let fetched = system.sections.get_hive_section(section.id).await.unwrap();
    assert_eq!(fetched, section);
}

#[tokio::test]
async fn test_create_section_on_missing_hive_is_not_found() {
    let system = start();
    let err = system
        .sections
        .create_hive_section(section_request("S1", HiveId(5)))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(system.sections.get_hive_sections().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_sections_by_hive() {
    let system = start();
    let hives = seed_hives(&system, 2).await;
    for (code, hive) in [("A", 0), ("B", 1), ("C", 0)] {
        system
            .sections
            .create_hive_section(section_request(code, hives[hive].id))
            .await
            .unwrap();
    }
    system
        .sections
        .set_status(HiveSectionId(3), true)
        .await
        .unwrap();

    let first: Vec<String> = system
        .sections
        .get_hive_sections_for(hives[0].id)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.code)
        .collect();
    assert_eq!(first, ["A", "C"]);

    let unknown = system
        .sections
        .get_hive_sections_for(HiveId(99))
        .await
        .unwrap();
    assert!(unknown.is_empty());
}

#[tokio::test]
async fn test_move_section_between_hives() {
    let system = start();
    let hives = seed_hives(&system, 2).await;
    let section = system
        .sections
        .create_hive_section(section_request("S1", hives[0].id))
        .await
        .unwrap();

    let moved = system
        .sections
        .update_hive_section(section.id, section_request("S1", hives[1].id))
        .await
        .unwrap();
    assert_eq!(moved.store_hive_id, hives[1].id);

    let err = system
        .sections
        .update_hive_section(section.id, section_request("S1", HiveId(42)))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    let unchanged = system.sections.get_hive_section(section.id).await.unwrap();
    assert_eq!(unchanged.store_hive_id, hives[1].id);
}

#[tokio::test]
async fn test_section_two_phase_delete() {
    let system = start();
    let hive = seed_hives(&system, 1).await.remove(0);
    let section = system
        .sections
        .create_hive_section(section_request("S1", hive.id))
        .await
        .unwrap();

    let err = system
        .sections
        .delete_hive_section(section.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);

    system.sections.set_status(section.id, true).await.unwrap();
    system.sections.delete_hive_section(section.id).await.unwrap();

    let err = system
        .sections
        .set_status(section.id, false)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_restore_section_after_hive_purge_is_refused() {
    let system = start();
    let hive = seed_hives(&system, 1).await.remove(0);
    let section = system
        .sections
        .create_hive_section(section_request("S1", hive.id))
        .await
        .unwrap();

    system.sections.set_status(section.id, true).await.unwrap();
    system.hives.set_status(hive.id, true).await.unwrap();
    system.hives.delete_hive(hive.id).await.unwrap();

    let err = system
        .sections
        .set_status(section.id, false)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(
        matches!(err, LifecycleError::NotFound { kind, .. } if kind == "hive"),
        "restore must report the missing hive"
    );
    assert!(system.sections.get_hive_section(section.id).await.unwrap().is_deleted);
}

#[tokio::test]
async fn test_restore_section_under_soft_deleted_hive() {
    let system = start();
    let hive = seed_hives(&system, 1).await.remove(0);
    let section = system
        .sections
        .create_hive_section(section_request("S1", hive.id))
        .await
        .unwrap();

    system.sections.set_status(section.id, true).await.unwrap();
    system.hives.set_status(hive.id, true).await.unwrap();

    system.sections.set_status(section.id, false).await.unwrap();
    assert!(!system.sections.get_hive_section(section.id).await.unwrap().is_deleted);
}
