use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lifecycle_framework::{
    ErrorKind, FixedUser, LifecycleEntity, LifecycleError, LifecycleService, MissingPolicy,
    Record, SharedStore, Stamp, StoreActor,
};
use std::sync::Arc;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Widget {
    id: u32,
    code: String,
    label: String,
    deleted: bool,
    created_by: i32,
    updated_by: i32,
    updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug)]
struct WidgetRequest {
    code: String,
    label: String,
}

/// Purge guard standing in for a child-store lookup.
struct WidgetRules {
    purge_blocked: bool,
}

impl Record for Widget {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn assign_id(&mut self, id: u32) {
        self.id = id;
    }
}

#[async_trait]
impl LifecycleEntity for Widget {
    type Request = WidgetRequest;
    type Detail = Widget;
    type Summary = (u32, String, bool);
    type Context = WidgetRules;

    const KIND: &'static str = "widget";

    fn code(&self) -> &str {
        &self.code
    }

    fn request_code(request: &WidgetRequest) -> &str {
        &request.code
    }

    fn is_deleted(&self) -> bool {
        self.deleted
    }

    fn set_deleted(&mut self, deleted: bool) {
        self.deleted = deleted;
    }

    fn touch(&mut self, stamp: &Stamp) {
        self.updated_by = stamp.user_id;
        self.updated_at = stamp.at;
    }

    fn validate(request: &WidgetRequest) -> Result<(), LifecycleError> {
        if request.code.trim().is_empty() {
            return Err(LifecycleError::invalid("code is required"));
        }
        Ok(())
    }

    fn from_request(request: WidgetRequest, stamp: &Stamp) -> Self {
        Self {
            id: 0,
            code: request.code,
            label: request.label,
            deleted: false,
            created_by: stamp.user_id,
            updated_by: stamp.user_id,
            updated_at: stamp.at,
        }
    }

    fn apply(&mut self, request: WidgetRequest) {
        self.code = request.code;
        self.label = request.label;
    }

    fn detail(&self) -> Widget {
        self.clone()
    }

    fn summary(&self) -> (u32, String, bool) {
        (self.id, self.code.clone(), self.deleted)
    }

    async fn on_delete(&self, ctx: &WidgetRules) -> Result<(), LifecycleError> {
        if ctx.purge_blocked {
            return Err(LifecycleError::conflict(Self::KIND, "purge blocked"));
        }
        Ok(())
    }
}

/// Same shape, but reports unknown ids on `set_status` as a conflict.
#[derive(Clone, Debug)]
struct LegacyWidget(Widget);

impl Record for LegacyWidget {
    type Id = u32;

    fn id(&self) -> u32 {
        self.0.id
    }

    fn assign_id(&mut self, id: u32) {
        self.0.id = id;
    }
}

#[async_trait]
impl LifecycleEntity for LegacyWidget {
    type Request = WidgetRequest;
    type Detail = Widget;
    type Summary = (u32, String, bool);
    type Context = ();

    const KIND: &'static str = "legacy widget";
    const MISSING_ON_STATUS: MissingPolicy = MissingPolicy::Conflict;

    fn code(&self) -> &str {
        &self.0.code
    }

    fn request_code(request: &WidgetRequest) -> &str {
        &request.code
    }

    fn is_deleted(&self) -> bool {
        self.0.deleted
    }

    fn set_deleted(&mut self, deleted: bool) {
        self.0.deleted = deleted;
    }

    fn touch(&mut self, stamp: &Stamp) {
        self.0.touch(stamp);
    }

    fn validate(request: &WidgetRequest) -> Result<(), LifecycleError> {
        Widget::validate(request)
    }

    fn from_request(request: WidgetRequest, stamp: &Stamp) -> Self {
        Self(Widget::from_request(request, stamp))
    }

    fn apply(&mut self, request: WidgetRequest) {
        self.0.apply(request);
    }

    fn detail(&self) -> Widget {
        self.0.clone()
    }

    fn summary(&self) -> (u32, String, bool) {
        self.0.summary()
    }
}

// --- Helpers ---

fn request(code: &str, label: &str) -> WidgetRequest {
    WidgetRequest {
        code: code.to_string(),
        label: label.to_string(),
    }
}

fn spawn_service(purge_blocked: bool) -> LifecycleService<Widget> {
    let (actor, client) = StoreActor::<Widget>::new(16);
    tokio::spawn(actor.run());
    let store: SharedStore<Widget> = Arc::new(client);
    LifecycleService::builder()
        .store(store)
        .audit(Arc::new(FixedUser(7)))
        .context(WidgetRules { purge_blocked })
        .build()
        .unwrap()
}

// --- Tests ---

#[tokio::test]
async fn test_create_then_get_returns_submitted_fields() {
    let service = spawn_service(false);
    let before = Utc::now();

    let created = service.create(request("W1", "First")).await.unwrap();
    assert_eq!(created.id, 1);

    let fetched = service.get(created.id).await.unwrap();
    assert_eq!(fetched.code, "W1");
    assert_eq!(fetched.label, "First");
    assert!(!fetched.deleted);
    assert_eq!(fetched.created_by, 7);
    assert_eq!(fetched.updated_by, 7);
    assert!(fetched.updated_at >= before);
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let service = spawn_service(false);
    let err = service.get(99).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_create_rejects_blank_code() {
    let service = spawn_service(false);
    let err = service.create(request("  ", "Blank")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(service.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_duplicate_live_code_conflicts_but_deleted_code_is_reusable() {
    let service = spawn_service(false);
    let first = service.create(request("DUP", "One")).await.unwrap();

    let err = service.create(request("DUP", "Two")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);

    service.set_status(first.id, true).await.unwrap();
    let second = service.create(request("DUP", "Two")).await.unwrap();
    assert_ne!(second.id, first.id);
}

#[tokio::test]
async fn test_update_rules() {
    let service = spawn_service(false);
    let a = service.create(request("A", "Alpha")).await.unwrap();
    let b = service.create(request("B", "Beta")).await.unwrap();

    // Keeping its own code is fine.
    let updated = service.update(a.id, request("A", "Alpha 2")).await.unwrap();
    assert_eq!(updated.id, a.id);
    assert_eq!(updated.label, "Alpha 2");

    // Taking another live row's code is not.
    let err = service.update(a.id, request("B", "Clash")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(service.get(a.id).await.unwrap().code, "A");

    // Unknown id wins over a colliding code.
    let err = service.update(99, request("B", "Ghost")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    // A deleted row's code can be taken over.
    service.set_status(b.id, true).await.unwrap();
    let moved = service.update(a.id, request("B", "Alpha as B")).await.unwrap();
    assert_eq!(moved.code, "B");
}

#[tokio::test]
async fn test_set_status_is_idempotent_and_reversible() {
    let service = spawn_service(false);
    let w = service.create(request("S1", "Status")).await.unwrap();

    service.set_status(w.id, true).await.unwrap();
    service.set_status(w.id, true).await.unwrap();
    assert!(service.get(w.id).await.unwrap().deleted);

    service.set_status(w.id, false).await.unwrap();
    service.set_status(w.id, false).await.unwrap();
    let restored = service.get(w.id).await.unwrap();
    assert!(!restored.deleted);
    assert!(restored.updated_at >= w.updated_at);
}

#[tokio::test]
async fn test_restore_conflicts_when_code_was_taken_over() {
    let service = spawn_service(false);
    let old = service.create(request("R1", "Old")).await.unwrap();
    service.set_status(old.id, true).await.unwrap();
    service.create(request("R1", "New")).await.unwrap();

    let err = service.set_status(old.id, false).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert!(service.get(old.id).await.unwrap().deleted);
}

#[tokio::test]
async fn test_set_status_missing_follows_policy() {
    let service = spawn_service(false);
    let err = service.set_status(5, true).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let (actor, client) = StoreActor::<LegacyWidget>::new(4);
    tokio::spawn(actor.run());
    let legacy = LifecycleService::<LegacyWidget>::builder()
        .store(Arc::new(client))
        .audit(Arc::new(FixedUser(1)))
        .context(())
        .build()
        .unwrap();
    let err = legacy.set_status(5, true).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
}

#[tokio::test]
async fn test_two_phase_delete() {
    let service = spawn_service(false);
    let w = service.create(request("D1", "Doomed")).await.unwrap();

    let err = service.delete(w.id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);

    service.set_status(w.id, true).await.unwrap();
    service.delete(w.id).await.unwrap();

    assert_eq!(service.get(w.id).await.unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(service.delete(w.id).await.unwrap_err().kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_delete_hook_can_block_purge() {
    let service = spawn_service(true);
    let w = service.create(request("P1", "Pinned")).await.unwrap();
    service.set_status(w.id, true).await.unwrap();

    let err = service.delete(w.id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert!(service.get(w.id).await.is_ok());
}

#[tokio::test]
async fn test_list_includes_deleted_rows_and_pages() {
    let service = spawn_service(false);
    for i in 0..6 {
        service
            .create(request(&format!("L{i}"), "Listed"))
            .await
            .unwrap();
    }
    service.set_status(2, true).await.unwrap();

    let all = service.list().await.unwrap();
    assert_eq!(all.len(), 6);
    assert!(all.iter().any(|(id, _, deleted)| *id == 2 && *deleted));

    let page = service.list_page(2, 3).await.unwrap();
    let codes: Vec<&str> = page.iter().map(|(_, code, _)| code.as_str()).collect();
    assert_eq!(codes, ["L2", "L3", "L4"]);

    assert_eq!(service.list_page(5, 10).await.unwrap().len(), 1);
    assert!(service.list_page(10, 3).await.unwrap().is_empty());

    let live = service
        .list_where(Box::new(|w: &Widget| !w.deleted))
        .await
        .unwrap();
    assert_eq!(live.len(), 5);
}

#[tokio::test]
async fn test_builder_requires_every_collaborator() {
    let (_actor, client) = StoreActor::<Widget>::new(4);
    let store: SharedStore<Widget> = Arc::new(client);

    let missing_store = LifecycleService::<Widget>::builder()
        .audit(Arc::new(FixedUser(1)))
        .context(WidgetRules {
            purge_blocked: false,
        })
        .build();
    assert!(matches!(
        missing_store,
        Err(LifecycleError::InvalidArgument(_))
    ));

    let missing_audit = LifecycleService::<Widget>::builder()
        .store(store.clone())
        .context(WidgetRules {
            purge_blocked: false,
        })
        .build();
    assert!(matches!(
        missing_audit,
        Err(LifecycleError::InvalidArgument(_))
    ));

    let missing_context = LifecycleService::<Widget>::builder()
        .store(store)
        .audit(Arc::new(FixedUser(1)))
        .build();
    assert!(matches!(
        missing_context,
        Err(LifecycleError::InvalidArgument(_))
    ));
}

#[tokio::test]
async fn test_concurrent_creates_with_same_code() {
    let service = Arc::new(spawn_service(false));

    let mut tasks = Vec::new();
    for i in 0..8 {
        let service = service.clone();
        tasks.push(tokio::spawn(async move {
            service.create(request("RACE", &format!("Racer {i}"))).await
        }));
    }

    let mut created = 0;
    let mut conflicts = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => created += 1,
            Err(e) => {
                assert_eq!(e.kind(), ErrorKind::Conflict);
                conflicts += 1;
            }
        }
    }
    assert_eq!(created, 1);
    assert_eq!(conflicts, 7);
}
