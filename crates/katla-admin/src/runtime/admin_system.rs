use crate::categories;
use crate::config::AdminConfig;
use crate::hives;
use crate::model::{CategoryRecord, HiveRecord, ProductRecord, SectionRecord};
use crate::products;
use crate::runtime::AdminError;
use crate::sections;
use crate::services::{
    HiveSectionService, HiveService, ProductCatalogueService, ProductCategoryService,
};
use lifecycle_framework::{AuditContext, FixedUser, SharedStore};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Owns the four entity stores and the services built on them.
///
/// ```ignore
/// let system = AdminSystem::new(&AdminConfig::default())?;
/// let hive = system.hives.create_hive(request).await?;
/// system.shutdown().await?;
/// ```
pub struct AdminSystem {
    pub hives: HiveService,
    pub sections: HiveSectionService,
    pub categories: ProductCategoryService,
    pub products: ProductCatalogueService,

    /// Store actor tasks, awaited on shutdown.
    handles: Vec<JoinHandle<()>>,
}

impl AdminSystem {
    /// Starts the system, attributing changes to the configured acting user.
    pub fn new(config: &AdminConfig) -> Result<Self, AdminError> {
        Self::with_audit(config, Arc::new(FixedUser(config.acting_user_id)))
    }

    /// Starts the system with a caller-supplied audit context. Must run inside a tokio runtime.
    pub fn with_audit(
        config: &AdminConfig,
        audit: Arc<dyn AuditContext>,
    ) -> Result<Self, AdminError> {
        let (hive_actor, hive_client) = hives::new(config.store_buffer);
        let (section_actor, section_client) = sections::new(config.store_buffer);
        let (category_actor, category_client) = categories::new(config.store_buffer);
        let (product_actor, product_client) = products::new(config.store_buffer);

        let hive_store: SharedStore<HiveRecord> = Arc::new(hive_client);
        let section_store: SharedStore<SectionRecord> = Arc::new(section_client);
        let category_store: SharedStore<CategoryRecord> = Arc::new(category_client);
        let product_store: SharedStore<ProductRecord> = Arc::new(product_client);

        // Each kind sees the store of the kind it is related to.
        let hives = HiveService::new(hive_store.clone(), audit.clone(), section_store.clone())?;
        let sections = HiveSectionService::new(section_store, audit.clone(), hive_store)?;
        let categories = ProductCategoryService::new(
            category_store.clone(),
            audit.clone(),
            product_store.clone(),
        )?;
        let products = ProductCatalogueService::new(product_store, audit, category_store)?;

        let handles = vec![
            tokio::spawn(hive_actor.run()),
            tokio::spawn(section_actor.run()),
            tokio::spawn(category_actor.run()),
            tokio::spawn(product_actor.run()),
        ];
        info!(buffer = config.store_buffer, "Admin system started");

        Ok(Self {
            hives,
            sections,
            categories,
            products,
            handles,
        })
    }

    /// Drops every service (and with them every store client), then waits for the
    /// store tasks to drain and exit.
    pub async fn shutdown(self) -> Result<(), AdminError> {
        info!("Shutting down admin system...");
        let Self {
            hives,
            sections,
            categories,
            products,
            handles,
        } = self;
        drop(hives);
        drop(sections);
        drop(categories);
        drop(products);

        for handle in handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Store task failed");
                return Err(e.into());
            }
        }

        info!("Admin system shutdown complete.");
        Ok(())
    }
}
