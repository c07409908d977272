/**
 * Settings Handlers
 *
 * Admin endpoints for the named settings groups:
 *
 * - `GET  /api/v1/setting?name=...`   - fetch a group's items as a map
 * - `POST /api/v1/setting/site`       - save the site settings group
 * - `POST /api/v1/setting/email`      - save the SMTP settings group
 * - `POST /api/v1/setting/email/test` - send a test mail over the relay
 *
 * Saving is a batch upsert keyed by (group id, key) inside one transaction,
 * the same primitive the registration flow uses to seed site settings.
 */

use std::collections::BTreeMap;

use axum::extract::{Query, State};
use axum::Json;
use sqlx::PgPool;

use crate::error::ApiError;
use crate::mailer::Mailer;
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::settings::db::{
    create_group, get_group_by_name, items_for_group, upsert_items, EMAIL_SETTINGS_GROUP,
    SITE_SETTINGS_GROUP,
};
use crate::settings::types::{EmailForm, EmailSendForm, SettingsQuery, SiteForm};

/// Fetch a settings group by type name; data is a key→value map.
pub async fn get_settings(
    State(pool): State<PgPool>,
    Query(query): Query<SettingsQuery>,
) -> Result<ApiResponse<BTreeMap<String, String>>, ApiError> {
    let group = get_group_by_name(&pool, &query.name)
        .await?
        .ok_or_else(|| ApiError::request("不存在该设置"))?;

    let items = items_for_group(&pool, group.id).await?;
    let map: BTreeMap<String, String> =
        items.into_iter().map(|item| (item.key, item.val)).collect();

    Ok(ApiResponse::ok_with("获取成功", map))
}

/// Save the site settings group.
pub async fn save_site_settings(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Json(form): Json<SiteForm>,
) -> Result<ApiResponse<serde_json::Value>, ApiError> {
    if form.site_name.is_empty() || form.site_url.is_empty() {
        return Err(ApiError::request("网站名称和网站地址不能为空"));
    }

    save_group(&pool, SITE_SETTINGS_GROUP, &form.items()).await?;
    tracing::info!("site settings saved by {}", user.username);
    Ok(ApiResponse::ok("保存成功"))
}

/// Save the SMTP settings group.
pub async fn save_email_settings(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Json(form): Json<EmailForm>,
) -> Result<ApiResponse<serde_json::Value>, ApiError> {
    if form.address.is_empty() || form.port.is_empty() || form.account.is_empty() {
        return Err(ApiError::request("SMTP 地址、端口和帐号不能为空"));
    }
    if !form.account.contains('@') {
        return Err(ApiError::request("邮箱帐号格式有误"));
    }

    save_group(&pool, EMAIL_SETTINGS_GROUP, &form.items()).await?;
    tracing::info!("smtp settings saved by {}", user.username);
    Ok(ApiResponse::ok("保存成功"))
}

/// Send a test mail through the configured relay.
pub async fn send_test_email(
    State(mailer): State<Mailer>,
    Json(form): Json<EmailSendForm>,
) -> Result<ApiResponse<serde_json::Value>, ApiError> {
    if form.receive_email.is_empty() || form.title.is_empty() {
        return Err(ApiError::request("接收邮箱和邮件标题不能为空"));
    }

    mailer
        .send_html(&form.receive_email, &form.title, form.content)
        .await?;

    Ok(ApiResponse::ok("邮件发送成功"))
}

async fn save_group(
    pool: &PgPool,
    group_name: &str,
    items: &[(&str, &str)],
) -> Result<(), ApiError> {
    let mut tx = pool.begin().await?;
    let group = create_group(&mut *tx, group_name).await?;
    // type_name identifies the group on reads, mirroring the seeded items.
    upsert_items(&mut tx, group.id, &[("type_name", group_name)]).await?;
    upsert_items(&mut tx, group.id, items).await?;
    tx.commit().await?;
    Ok(())
}
