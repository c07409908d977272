/**
 * Content Handlers
 *
 * Admin CRUD endpoints for categories and friend links. All of these sit
 * behind the auth middleware.
 *
 * # Routes
 *
 * - `GET    /api/v1/categories`       - paged list (keyword/type filters)
 * - `POST   /api/v1/categories`       - create
 * - `PUT    /api/v1/categories/{id}`  - update
 * - `DELETE /api/v1/categories/{id}`  - soft-delete one
 * - `POST   /api/v1/categories/batch_delete` - soft-delete many
 * - `GET    /api/v1/links`            - paged list (keyword/category filters)
 * - `GET    /api/v1/links/all`        - unpaged list
 * - `POST   /api/v1/links`            - create
 * - `PUT    /api/v1/links/{id}`       - update
 * - `DELETE /api/v1/links/{id}`       - soft-delete one
 * - `POST   /api/v1/links/batch_delete` - soft-delete many
 */

use axum::extract::{Path, Query, State};
use axum::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::content::db;
use crate::content::db::{Category, Link};
use crate::content::types::{
    CategoryAddForm, CategoryEditForm, CategoryPageQuery, DeleteIdsForm, LinkAddForm,
    LinkEditForm, LinkPageQuery,
};
use crate::error::ApiError;
use crate::pagination::Paged;
use crate::response::ApiResponse;

/// Paged category listing.
pub async fn list_categories(
    State(pool): State<PgPool>,
    Query(query): Query<CategoryPageQuery>,
) -> Result<ApiResponse<Paged<Category>>, ApiError> {
    let pagination = query.pagination();
    let (list, total) = db::list_categories(
        &pool,
        pagination,
        query.key.as_deref(),
        query.category_type,
    )
    .await?;

    Ok(ApiResponse::ok_with(
        "获取成功",
        Paged::new(list, total, pagination),
    ))
}

/// Create a category.
pub async fn create_category(
    State(pool): State<PgPool>,
    Json(form): Json<CategoryAddForm>,
) -> Result<ApiResponse<Category>, ApiError> {
    if form.name.is_empty() {
        return Err(ApiError::request("分类名称不能为空"));
    }
    if let Some(parent_id) = form.parent_id {
        if db::get_category_by_id(&pool, parent_id).await?.is_none() {
            return Err(ApiError::request("不存在该父级分类"));
        }
    }

    let category =
        db::create_category(&pool, form.category_type, &form.name, &form.url, form.parent_id)
            .await?;
    Ok(ApiResponse::ok_with("添加成功", category))
}

/// Update a category.
pub async fn update_category(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
    Json(form): Json<CategoryEditForm>,
) -> Result<ApiResponse<Category>, ApiError> {
    if form.name.is_empty() {
        return Err(ApiError::request("分类名称不能为空"));
    }
    if form.parent_id == Some(id) {
        return Err(ApiError::request("分类不能作为自身的父级"));
    }

    let category =
        db::update_category(&pool, id, form.category_type, &form.name, &form.url, form.parent_id)
            .await?
            .ok_or_else(|| ApiError::request("不存在该分类"))?;
    Ok(ApiResponse::ok_with("修改成功", category))
}

/// Soft-delete one category.
pub async fn delete_category(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<serde_json::Value>, ApiError> {
    let deleted = db::delete_categories(&pool, &[id]).await?;
    if deleted == 0 {
        return Err(ApiError::request("不存在该分类"));
    }
    Ok(ApiResponse::ok("删除成功"))
}

/// Soft-delete a batch of categories.
pub async fn batch_delete_categories(
    State(pool): State<PgPool>,
    Json(form): Json<DeleteIdsForm>,
) -> Result<ApiResponse<serde_json::Value>, ApiError> {
    if form.ids.is_empty() {
        return Err(ApiError::request("请选择要删除的分类"));
    }
    db::delete_categories(&pool, &form.ids).await?;
    Ok(ApiResponse::ok("删除成功"))
}

/// Paged link listing.
pub async fn list_links(
    State(pool): State<PgPool>,
    Query(query): Query<LinkPageQuery>,
) -> Result<ApiResponse<Paged<Link>>, ApiError> {
    let pagination = query.pagination();
    let (list, total) =
        db::list_links(&pool, pagination, query.key.as_deref(), query.category_id).await?;

    Ok(ApiResponse::ok_with(
        "获取成功",
        Paged::new(list, total, pagination),
    ))
}

/// Unpaged link listing (for the public sidebar).
pub async fn get_all_links(
    State(pool): State<PgPool>,
) -> Result<ApiResponse<Vec<Link>>, ApiError> {
    let list = db::get_all_links(&pool).await?;
    Ok(ApiResponse::ok_with("获取成功", list))
}

/// Create a friend link.
pub async fn create_link(
    State(pool): State<PgPool>,
    Json(form): Json<LinkAddForm>,
) -> Result<ApiResponse<Link>, ApiError> {
    if form.name.is_empty() || form.url.is_empty() {
        return Err(ApiError::request("网站名称和网站地址不能为空"));
    }

    let link = db::create_link(
        &pool,
        form.category_id,
        &form.name,
        &form.url,
        &form.description,
        &form.icon,
    )
    .await?;
    Ok(ApiResponse::ok_with("添加成功", link))
}

/// Update a friend link.
pub async fn update_link(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
    Json(form): Json<LinkEditForm>,
) -> Result<ApiResponse<Link>, ApiError> {
    if form.name.is_empty() || form.url.is_empty() {
        return Err(ApiError::request("网站名称和网站地址不能为空"));
    }

    let link = db::update_link(
        &pool,
        id,
        form.category_id,
        &form.name,
        &form.url,
        &form.description,
        &form.icon,
    )
    .await?
    .ok_or_else(|| ApiError::request("不存在该友链"))?;
    Ok(ApiResponse::ok_with("修改成功", link))
}

/// Soft-delete one link.
pub async fn delete_link(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<serde_json::Value>, ApiError> {
    let deleted = db::delete_links(&pool, &[id]).await?;
    if deleted == 0 {
        return Err(ApiError::request("不存在该友链"));
    }
    Ok(ApiResponse::ok("删除成功"))
}

/// Soft-delete a batch of links.
pub async fn batch_delete_links(
    State(pool): State<PgPool>,
    Json(form): Json<DeleteIdsForm>,
) -> Result<ApiResponse<serde_json::Value>, ApiError> {
    if form.ids.is_empty() {
        return Err(ApiError::request("请选择要删除的友链"));
    }
    db::delete_links(&pool, &form.ids).await?;
    Ok(ApiResponse::ok("删除成功"))
}
