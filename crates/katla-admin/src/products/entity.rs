use crate::model::{
    CatalogueProduct, CategoryRecord, ProductId, ProductListItem, ProductRecord,
    UpdateProductRequest,
};
use async_trait::async_trait;
use lifecycle_framework::{
    ensure_parent_exists, LifecycleEntity, LifecycleError, Record, SharedStore, Stamp,
};

impl Record for ProductRecord {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }

    fn assign_id(&mut self, id: ProductId) {
        self.id = id;
    }
}

#[async_trait]
impl LifecycleEntity for ProductRecord {
    type Request = UpdateProductRequest;
    type Detail = CatalogueProduct;
    type Summary = ProductListItem;
    type Context = SharedStore<CategoryRecord>;

    const KIND: &'static str = "product";

    fn code(&self) -> &str {
        &self.code
    }

    fn request_code(request: &UpdateProductRequest) -> &str {
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

    fn validate(request: &UpdateProductRequest) -> Result<(), LifecycleError> {
        request.validate()
    }

    fn from_request(request: UpdateProductRequest, stamp: &Stamp) -> Self {
        Self {
            id: ProductId(0),
            code: request.code,
            manufacturer_code: request.manufacturer_code,
            name: request.name,
            description: request.description,
            category_id: request.category_id,
            is_deleted: false,
            created_by: stamp.user_id,
            last_updated_by: stamp.user_id,
            last_updated: stamp.at,
        }
    }

    fn apply(&mut self, request: UpdateProductRequest) {
        self.code = request.code;
        self.manufacturer_code = request.manufacturer_code;
        self.name = request.name;
        self.description = request.description;
        self.category_id = request.category_id;
    }

    fn detail(&self) -> CatalogueProduct {
        CatalogueProduct::from(self)
    }

    fn summary(&self) -> ProductListItem {
        ProductListItem::from(self)
    }

    async fn on_create(
        &self,
        categories: &SharedStore<CategoryRecord>,
    ) -> Result<(), LifecycleError> {
        ensure_parent_exists(categories, self.category_id).await
    }

    async fn on_update(
        &self,
        categories: &SharedStore<CategoryRecord>,
    ) -> Result<(), LifecycleError> {
        ensure_parent_exists(categories, self.category_id).await
    }

    /// The parent may have been purged while this row was deleted.
    async fn on_restore(
        &self,
        categories: &SharedStore<CategoryRecord>,
    ) -> Result<(), LifecycleError> {
        ensure_parent_exists(categories, self.category_id).await
    }
}
