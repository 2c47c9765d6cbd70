use crate::model::{
    HiveRecord, HiveSection, HiveSectionId, HiveSectionListItem, SectionRecord,
    UpdateHiveSectionRequest,
};
use async_trait::async_trait;
use lifecycle_framework::{
    ensure_parent_exists, LifecycleEntity, LifecycleError, Record, SharedStore, Stamp,
};

impl Record for SectionRecord {
    type Id = HiveSectionId;

    fn id(&self) -> HiveSectionId {
        self.id
    }

    fn assign_id(&mut self, id: HiveSectionId) {
        self.id = id;
    }
}

#[async_trait]
impl LifecycleEntity for SectionRecord {
    type Request = UpdateHiveSectionRequest;
    type Detail = HiveSection;
    type Summary = HiveSectionListItem;
    type Context = SharedStore<HiveRecord>;

    const KIND: &'static str = "hive section";

    fn code(&self) -> &str {
        &self.code
    }

    fn request_code(request: &UpdateHiveSectionRequest) -> &str {
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

    fn validate(request: &UpdateHiveSectionRequest) -> Result<(), LifecycleError> {
        request.validate()
    }

    fn from_request(request: UpdateHiveSectionRequest, stamp: &Stamp) -> Self {
        Self {
            id: HiveSectionId(0),
            code: request.code,
            name: request.name,
            hive_section_count: request.hive_section_count,
            store_hive_id: request.store_hive_id,
            is_deleted: false,
            created_by: stamp.user_id,
            last_updated_by: stamp.user_id,
            last_updated: stamp.at,
        }
    }

    fn apply(&mut self, request: UpdateHiveSectionRequest) {
        self.code = request.code;
        self.name = request.name;
        self.hive_section_count = request.hive_section_count;
        self.store_hive_id = request.store_hive_id;
    }

    fn detail(&self) -> HiveSection {
        HiveSection::from(self)
    }

    fn summary(&self) -> HiveSectionListItem {
        HiveSectionListItem::from(self)
    }

    async fn on_create(&self, hives: &SharedStore<HiveRecord>) -> Result<(), LifecycleError> {
        ensure_parent_exists(hives, self.store_hive_id).await
    }

    async fn on_update(&self, hives: &SharedStore<HiveRecord>) -> Result<(), LifecycleError> {
        ensure_parent_exists(hives, self.store_hive_id).await
    }

    /// The parent may have been purged while this row was deleted.
    async fn on_restore(&self, hives: &SharedStore<HiveRecord>) -> Result<(), LifecycleError> {
        ensure_parent_exists(hives, self.store_hive_id).await
    }
}
