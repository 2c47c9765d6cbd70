//! # Product Catalogue Service
use crate::model::{
    CatalogueProduct, CategoryRecord, ProductCategoryId, ProductId, ProductListItem,
    ProductRecord, UpdateProductRequest,
};
use crate::services::ManagedService;
use async_trait::async_trait;
use lifecycle_framework::{AuditContext, LifecycleError, LifecycleService, SharedStore};
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct ProductCatalogueService {
    inner: LifecycleService<ProductRecord>,
}

#[async_trait]
impl ManagedService<ProductRecord> for ProductCatalogueService {
    fn inner(&self) -> &LifecycleService<ProductRecord> {
        &self.inner
    }

    async fn list(&self) -> Result<Vec<ProductListItem>, LifecycleError> {
        self.get_products().await
    }

    async fn fetch(&self, id: ProductId) -> Result<CatalogueProduct, LifecycleError> {
        self.get_product(id).await
    }

    async fn create(
        &self,
        request: UpdateProductRequest,
    ) -> Result<CatalogueProduct, LifecycleError> {
        self.create_product(request).await
    }

    async fn update(
        &self,
        id: ProductId,
        request: UpdateProductRequest,
    ) -> Result<CatalogueProduct, LifecycleError> {
        self.update_product(id, request).await
    }

    async fn purge(&self, id: ProductId) -> Result<(), LifecycleError> {
        self.delete_product(id).await
    }
}

impl ProductCatalogueService {
    pub fn new(
        store: SharedStore<ProductRecord>,
        audit: Arc<dyn AuditContext>,
        categories: SharedStore<CategoryRecord>,
    ) -> Result<Self, LifecycleError> {
        let inner = LifecycleService::builder()
            .store(store)
            .audit(audit)
            .context(categories)
            .build()?;
        Ok(Self { inner })
    }

    #[instrument(skip(self))]
    pub async fn get_products(&self) -> Result<Vec<ProductListItem>, LifecycleError> {
        debug!("Sending request");
        self.inner.list().await
    }

    /// Skips `offset` products (store order) and returns at most `count`.
    #[instrument(skip(self))]
    pub async fn get_products_page(
        &self,
        offset: usize,
        count: usize,
    ) -> Result<Vec<ProductListItem>, LifecycleError> {
        debug!("Sending request");
        self.inner.list_page(offset, count).await
    }

    #[instrument(skip(self))]
    pub async fn get_products_for_category(
        &self,
        category_id: ProductCategoryId,
    ) -> Result<Vec<ProductListItem>, LifecycleError> {
        debug!("Sending request");
        self.inner
            .list_where(Box::new(move |p: &ProductRecord| p.category_id == category_id))
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<CatalogueProduct, LifecycleError> {
        debug!("Sending request");
        self.inner.get(id).await
    }

    #[instrument(skip(self))]
    pub async fn create_product(
        &self,
        request: UpdateProductRequest,
    ) -> Result<CatalogueProduct, LifecycleError> {
        debug!("Sending request");
        self.inner.create(request).await
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        request: UpdateProductRequest,
    ) -> Result<CatalogueProduct, LifecycleError> {
        debug!("Sending request");
        self.inner.update(id, request).await
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), LifecycleError> {
        debug!("Sending request");
        self.inner.delete(id).await
    }
}
