use crate::model::{
    CategoryRecord, ProductCategory, ProductCategoryId, ProductCategoryListItem, ProductRecord,
    UpdateProductCategoryRequest,
};
use async_trait::async_trait;
use lifecycle_framework::{
    ensure_no_live_children, LifecycleEntity, LifecycleError, Record, SharedStore, Stamp,
};

impl Record for CategoryRecord {
    type Id = ProductCategoryId;

    fn id(&self) -> ProductCategoryId {
        self.id
    }

    fn assign_id(&mut self, id: ProductCategoryId) {
        self.id = id;
    }
}

#[async_trait]
impl LifecycleEntity for CategoryRecord {
    type Request = UpdateProductCategoryRequest;
    type Detail = ProductCategory;
    type Summary = ProductCategoryListItem;
    type Context = SharedStore<ProductRecord>;

    const KIND: &'static str = "product category";

    fn code(&self) -> &str {
        &self.code
    }

    fn request_code(request: &UpdateProductCategoryRequest) -> &str {
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

    fn validate(request: &UpdateProductCategoryRequest) -> Result<(), LifecycleError> {
        request.validate()
    }

    fn from_request(request: UpdateProductCategoryRequest, stamp: &Stamp) -> Self {
        Self {
            id: ProductCategoryId(0),
            code: request.code,
            name: request.name,
            description: request.description,
            is_deleted: false,
            created_by: stamp.user_id,
            last_updated_by: stamp.user_id,
            last_updated: stamp.at,
        }
    }

    fn apply(&mut self, request: UpdateProductCategoryRequest) {
        self.code = request.code;
        self.name = request.name;
        self.description = request.description;
    }

    fn detail(&self) -> ProductCategory {
        ProductCategory::from(self)
    }

    fn summary(&self) -> ProductCategoryListItem {
        ProductCategoryListItem::from(self)
    }

    async fn on_delete(&self, products: &SharedStore<ProductRecord>) -> Result<(), LifecycleError> {
        let category_id = self.id;
        ensure_no_live_children(products, Self::KIND, category_id, move |p: &ProductRecord| {
            p.category_id == category_id
        })
        .await
    }
}
