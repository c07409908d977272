/**
 * Category and Link Models
 *
 * Database operations for the two admin-managed content tables. Both use
 * soft delete: `deleted_at` is set instead of removing the row, and every
 * read filters `deleted_at IS NULL`, so historical references (a link's
 * category, a child category's parent) stay resolvable.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::pagination::Pagination;

/// Category type marker: article categories.
pub const CATEGORY_TYPE_ARTICLE: i16 = 0;
/// Category type marker: friend-link categories.
pub const CATEGORY_TYPE_LINK: i16 = 1;

/// A node in the self-referential category hierarchy
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: Uuid,
    /// 0 = article category, 1 = link category
    pub category_type: i16,
    pub name: String,
    pub url: String,
    /// Parent node, `None` for roots
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A friend-link record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Link {
    pub id: Uuid,
    pub category_id: Option<Uuid>,
    pub name: String,
    pub url: String,
    pub description: String,
    pub icon: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

const CATEGORY_COLUMNS: &str =
    "id, category_type, name, url, parent_id, created_at, updated_at";
const LINK_COLUMNS: &str =
    "id, category_id, name, url, description, icon, created_at, updated_at";

/// Paged category listing with optional keyword and type filters.
pub async fn list_categories(
    pool: &PgPool,
    pagination: Pagination,
    key: Option<&str>,
    category_type: Option<i16>,
) -> Result<(Vec<Category>, i64), sqlx::Error> {
    let total: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM categories
        WHERE deleted_at IS NULL
          AND ($1::text IS NULL OR name LIKE '%' || $1 || '%')
          AND ($2::smallint IS NULL OR category_type = $2)
        "#,
    )
    .bind(key)
    .bind(category_type)
    .fetch_one(pool)
    .await?;

    let list = sqlx::query_as::<_, Category>(&format!(
        r#"
        SELECT {CATEGORY_COLUMNS} FROM categories
        WHERE deleted_at IS NULL
          AND ($1::text IS NULL OR name LIKE '%' || $1 || '%')
          AND ($2::smallint IS NULL OR category_type = $2)
        ORDER BY created_at DESC
        LIMIT $3 OFFSET $4
        "#
    ))
    .bind(key)
    .bind(category_type)
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_all(pool)
    .await?;

    Ok((list, total))
}

/// Get one live category by id.
pub async fn get_category_by_id(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(&format!(
        "SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1 AND deleted_at IS NULL"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Create a category.
pub async fn create_category(
    pool: &PgPool,
    category_type: i16,
    name: &str,
    url: &str,
    parent_id: Option<Uuid>,
) -> Result<Category, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, Category>(&format!(
        r#"
        INSERT INTO categories (id, category_type, name, url, parent_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $6)
        RETURNING {CATEGORY_COLUMNS}
        "#
    ))
    .bind(Uuid::new_v4())
    .bind(category_type)
    .bind(name)
    .bind(url)
    .bind(parent_id)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Update a live category; returns `None` if the id is unknown or deleted.
pub async fn update_category(
    pool: &PgPool,
    id: Uuid,
    category_type: i16,
    name: &str,
    url: &str,
    parent_id: Option<Uuid>,
) -> Result<Option<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(&format!(
        r#"
        UPDATE categories
        SET category_type = $2, name = $3, url = $4, parent_id = $5, updated_at = $6
        WHERE id = $1 AND deleted_at IS NULL
        RETURNING {CATEGORY_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(category_type)
    .bind(name)
    .bind(url)
    .bind(parent_id)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}

/// Soft-delete categories by id; returns the number of rows marked.
pub async fn delete_categories(pool: &PgPool, ids: &[Uuid]) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE categories SET deleted_at = $2
        WHERE id = ANY($1) AND deleted_at IS NULL
        "#,
    )
    .bind(ids)
    .bind(Utc::now())
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

/// All live links, newest first.
pub async fn get_all_links(pool: &PgPool) -> Result<Vec<Link>, sqlx::Error> {
    sqlx::query_as::<_, Link>(&format!(
        "SELECT {LINK_COLUMNS} FROM links WHERE deleted_at IS NULL ORDER BY created_at DESC"
    ))
    .fetch_all(pool)
    .await
}

/// Paged link listing with optional keyword and category filters.
pub async fn list_links(
    pool: &PgPool,
    pagination: Pagination,
    key: Option<&str>,
    category_id: Option<Uuid>,
) -> Result<(Vec<Link>, i64), sqlx::Error> {
    let total: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM links
        WHERE deleted_at IS NULL
          AND ($1::text IS NULL OR name LIKE '%' || $1 || '%')
          AND ($2::uuid IS NULL OR category_id = $2)
        "#,
    )
    .bind(key)
    .bind(category_id)
    .fetch_one(pool)
    .await?;

    let list = sqlx::query_as::<_, Link>(&format!(
        r#"
        SELECT {LINK_COLUMNS} FROM links
        WHERE deleted_at IS NULL
          AND ($1::text IS NULL OR name LIKE '%' || $1 || '%')
          AND ($2::uuid IS NULL OR category_id = $2)
        ORDER BY created_at DESC
        LIMIT $3 OFFSET $4
        "#
    ))
    .bind(key)
    .bind(category_id)
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_all(pool)
    .await?;

    Ok((list, total))
}

/// Create a friend link.
pub async fn create_link(
    pool: &PgPool,
    category_id: Option<Uuid>,
    name: &str,
    url: &str,
    description: &str,
    icon: &str,
) -> Result<Link, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, Link>(&format!(
        r#"
        INSERT INTO links (id, category_id, name, url, description, icon, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
        RETURNING {LINK_COLUMNS}
        "#
    ))
    .bind(Uuid::new_v4())
    .bind(category_id)
    .bind(name)
    .bind(url)
    .bind(description)
    .bind(icon)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Update a live link; returns `None` if the id is unknown or deleted.
pub async fn update_link(
    pool: &PgPool,
    id: Uuid,
    category_id: Option<Uuid>,
    name: &str,
    url: &str,
    description: &str,
    icon: &str,
) -> Result<Option<Link>, sqlx::Error> {
    sqlx::query_as::<_, Link>(&format!(
        r#"
        UPDATE links
        SET category_id = $2, name = $3, url = $4, description = $5, icon = $6, updated_at = $7
        WHERE id = $1 AND deleted_at IS NULL
        RETURNING {LINK_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(category_id)
    .bind(name)
    .bind(url)
    .bind(description)
    .bind(icon)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}

/// Soft-delete links by id; returns the number of rows marked.
pub async fn delete_links(pool: &PgPool, ids: &[Uuid]) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE links SET deleted_at = $2
        WHERE id = ANY($1) AND deleted_at IS NULL
        "#,
    )
    .bind(ids)
    .bind(Utc::now())
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}
