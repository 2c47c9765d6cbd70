//! # Product Category Service
use crate::model::{
    CategoryRecord, ProductCategory, ProductCategoryId, ProductCategoryListItem, ProductRecord,
    UpdateProductCategoryRequest,
};
use crate::services::ManagedService;
use async_trait::async_trait;
use lifecycle_framework::{AuditContext, LifecycleError, LifecycleService, SharedStore};
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct ProductCategoryService {
    inner: LifecycleService<CategoryRecord>,
}

#[async_trait]
impl ManagedService<CategoryRecord> for ProductCategoryService {
    fn inner(&self) -> &LifecycleService<CategoryRecord> {
        &self.inner
    }

    async fn list(&self) -> Result<Vec<ProductCategoryListItem>, LifecycleError> {
        self.get_categories().await
    }

    async fn fetch(&self, id: ProductCategoryId) -> Result<ProductCategory, LifecycleError> {
        self.get_category(id).await
    }

    async fn create(
        &self,
        request: UpdateProductCategoryRequest,
    ) -> Result<ProductCategory, LifecycleError> {
        self.create_category(request).await
    }

    async fn update(
        &self,
        id: ProductCategoryId,
        request: UpdateProductCategoryRequest,
    ) -> Result<ProductCategory, LifecycleError> {
        self.update_category(id, request).await
    }

    async fn purge(&self, id: ProductCategoryId) -> Result<(), LifecycleError> {
        self.delete_category(id).await
    }
}

impl ProductCategoryService {
    pub fn new(
        store: SharedStore<CategoryRecord>,
        audit: Arc<dyn AuditContext>,
        products: SharedStore<ProductRecord>,
    ) -> Result<Self, LifecycleError> {
        let inner = LifecycleService::builder()
            .store(store)
            .audit(audit)
            .context(products)
            .build()?;
        Ok(Self { inner })
    }

    #[instrument(skip(self))]
    pub async fn get_categories(&self) -> Result<Vec<ProductCategoryListItem>, LifecycleError> {
        debug!("Sending request");
        self.inner.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_category(
        &self,
        id: ProductCategoryId,
    ) -> Result<ProductCategory, LifecycleError> {
        debug!("Sending request");
        self.inner.get(id).await
    }

    #[instrument(skip(self))]
    pub async fn create_category(
        &self,
        request: UpdateProductCategoryRequest,
    ) -> Result<ProductCategory, LifecycleError> {
        debug!("Sending request");
        self.inner.create(request).await
    }

    #[instrument(skip(self))]
    pub async fn update_category(
        &self,
        id: ProductCategoryId,
        request: UpdateProductCategoryRequest,
    ) -> Result<ProductCategory, LifecycleError> {
        debug!("Sending request");
        self.inner.update(id, request).await
    }

    /// Purges a category. It must be soft-deleted and have no live products.
    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: ProductCategoryId) -> Result<(), LifecycleError> {
        debug!("Sending request");
        self.inner.delete(id).await
    }
}
