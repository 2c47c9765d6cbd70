use crate::model::{Hive, HiveId, HiveListItem, HiveRecord, SectionRecord, UpdateHiveRequest};
use async_trait::async_trait;
use lifecycle_framework::{
    ensure_no_live_children, LifecycleEntity, LifecycleError, Record, SharedStore, Stamp,
};

impl Record for HiveRecord {
    type Id = HiveId;

    fn id(&self) -> HiveId {
        self.id
    }

    fn assign_id(&mut self, id: HiveId) {
        self.id = id;
    }
}

/// Hives see the section store so a purge can be refused while sections still point at them.
#[async_trait]
impl LifecycleEntity for HiveRecord {
    type Request = UpdateHiveRequest;
    type Detail = Hive;
    type Summary = HiveListItem;
    type Context = SharedStore<SectionRecord>;

    const KIND: &'static str = "hive";

    fn code(&self) -> &str {
        &self.code
    }

    fn request_code(request: &UpdateHiveRequest) -> &str {
        &request.code
    }

    fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn set_deleted(&mut self, deleted: bool) {
        self.is_deleted = deleted;
    }

    fn touch(&mut self, stamp: &Stamp) {
        self.last_updated_by = stamp.user_id;
        self.last_updated = stamp.at;
    }

    fn validate(request: &UpdateHiveRequest) -> Result<(), LifecycleError> {
        request.validate()
    }

    fn from_request(request: UpdateHiveRequest, stamp: &Stamp) -> Self {
        Self {
            id: HiveId(0),
            code: request.code,
            name: request.name,
            address: request.address,
            is_deleted: false,
            created_by: stamp.user_id,
            last_updated_by: stamp.user_id,
            last_updated: stamp.at,
        }
    }

    fn apply(&mut self, request: UpdateHiveRequest) {
        self.code = request.code;
        self.name = request.name;
        self.address = request.address;
    }

    fn detail(&self) -> Hive {
        Hive::from(self)
    }

    fn summary(&self) -> HiveListItem {
        HiveListItem::from(self)
    }

    async fn on_delete(&self, sections: &SharedStore<SectionRecord>) -> Result<(), LifecycleError> {
        let hive_id = self.id;
        ensure_no_live_children(sections, Self::KIND, hive_id, move |s: &SectionRecord| {
            s.store_hive_id == hive_id
        })
        .await
    }
}
