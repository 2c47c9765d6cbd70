#![allow(dead_code)]

use katla_admin::config::AdminConfig;
use katla_admin::model::{
    Hive, HiveId, ProductCategory, ProductCategoryId, UpdateHiveRequest, UpdateHiveSectionRequest,
    UpdateProductCategoryRequest, UpdateProductRequest,
};
use katla_admin::runtime::AdminSystem;

pub fn start() -> AdminSystem {
    AdminSystem::new(&AdminConfig::default()).expect("system starts")
}

pub fn hive_request(code: &str) -> UpdateHiveRequest {
    UpdateHiveRequest {
        code: code.to_string(),
        name: format!("Hive {code}"),
        address: format!("Dock {code}"),
    }
}

pub fn section_request(code: &str, hive: HiveId) -> UpdateHiveSectionRequest {
    UpdateHiveSectionRequest {
        code: code.to_string(),
        name: format!("Section {code}"),
        hive_section_count: 1,
        store_hive_id: hive,
    }
}

pub fn category_request(code: &str) -> UpdateProductCategoryRequest {
    UpdateProductCategoryRequest {
        code: code.to_string(),
        name: format!("Category {code}"),
        description: String::new(),
    }
}

pub fn product_request(code: &str, category: ProductCategoryId) -> UpdateProductRequest {
    UpdateProductRequest {
        code: code.to_string(),
        manufacturer_code: format!("M{code}"),
        name: format!("Product {code}"),
        description: String::new(),
        category_id: category,
    }
}

/// Creates `count` hives coded `H00`, `H01`, ...
pub async fn seed_hives(system: &AdminSystem, count: usize) -> Vec<Hive> {
    let mut hives = Vec::with_capacity(count);
    for n in 0..count {
        let hive = system
            .hives
            .create_hive(hive_request(&format!("H{n:02}")))
            .await
            .expect("seed hive");
        hives.push(hive);
    }
    hives
}

pub async fn seed_category(system: &AdminSystem, code: &str) -> ProductCategory {
    system
        .categories
        .create_category(category_request(code))
        .await
        .expect("seed category")
}
