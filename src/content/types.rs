/**
 * Content Form Types
 *
 * Admin forms for category and friend-link CRUD.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pagination::Pagination;

/// Category list query: keyword + type filter + pagination
///
/// page/size are kept inline (not flattened) because query-string
/// deserialization does not support flattened numeric fields.
#[derive(Deserialize, Debug, Default)]
pub struct CategoryPageQuery {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub category_type: Option<i16>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub size: u32,
}

impl CategoryPageQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination { page: self.page, size: self.size }
    }
}

/// Add-category form
#[derive(Deserialize, Serialize, Debug)]
pub struct CategoryAddForm {
    /// 0 = article category, 1 = link category
    #[serde(default)]
    pub category_type: i16,
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
}

/// Edit-category form
#[derive(Deserialize, Serialize, Debug)]
pub struct CategoryEditForm {
    #[serde(default)]
    pub category_type: i16,
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
}

/// Link list query: keyword + category filter + pagination
#[derive(Deserialize, Debug, Default)]
pub struct LinkPageQuery {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub size: u32,
}

impl LinkPageQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination { page: self.page, size: self.size }
    }
}

/// Add-link form
#[derive(Deserialize, Serialize, Debug)]
pub struct LinkAddForm {
    #[serde(default)]
    pub category_id: Option<Uuid>,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

/// Edit-link form
#[derive(Deserialize, Serialize, Debug)]
pub struct LinkEditForm {
    #[serde(default)]
    pub category_id: Option<Uuid>,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

/// Batch-delete form
#[derive(Deserialize, Serialize, Debug)]
pub struct DeleteIdsForm {
    pub ids: Vec<Uuid>,
}
