/**
 * Settings Model and Database Operations
 *
 * A settings group (`sys_settings`) names a logical settings type — site
 * settings, SMTP settings — and owns key/value items (`sys_setting_items`)
 * upserted as a batch keyed by (group id, key).
 *
 * One group exists per logical type; `create_group` is therefore an upsert
 * on the group name.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, PgPool, Postgres, Transaction};
use uuid::Uuid;

/// Name of the group seeded at registration.
pub const SITE_SETTINGS_GROUP: &str = "网站设置";

/// Name of the group holding the admin-managed SMTP form.
pub const EMAIL_SETTINGS_GROUP: &str = "邮件设置";

/// A named settings group
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SysSetting {
    pub id: Uuid,
    /// Logical type name, unique ("网站设置", "邮件设置", ...)
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A key/value item inside a group
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SysSettingItem {
    pub sys_id: Uuid,
    pub key: String,
    pub val: String,
    pub updated_at: DateTime<Utc>,
}

/// Get or create the group named `name`.
pub async fn create_group<'a>(
    executor: impl PgExecutor<'a>,
    name: &str,
) -> Result<SysSetting, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, SysSetting>(
        r#"
        INSERT INTO sys_settings (id, name, created_at, updated_at)
        VALUES ($1, $2, $3, $3)
        ON CONFLICT (name) DO UPDATE SET updated_at = EXCLUDED.updated_at
        RETURNING id, name, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .bind(now)
    .fetch_one(executor)
    .await
}

/// Look up a group by its type name.
pub async fn get_group_by_name(
    pool: &PgPool,
    name: &str,
) -> Result<Option<SysSetting>, sqlx::Error> {
    sqlx::query_as::<_, SysSetting>(
        r#"
        SELECT id, name, created_at, updated_at
        FROM sys_settings
        WHERE name = $1
        "#,
    )
    .bind(name)
    .fetch_optional(pool)
    .await
}

/// All items of a group.
pub async fn items_for_group(
    pool: &PgPool,
    sys_id: Uuid,
) -> Result<Vec<SysSettingItem>, sqlx::Error> {
    sqlx::query_as::<_, SysSettingItem>(
        r#"
        SELECT sys_id, key, val, updated_at
        FROM sys_setting_items
        WHERE sys_id = $1
        ORDER BY key
        "#,
    )
    .bind(sys_id)
    .fetch_all(pool)
    .await
}

/// Insert or update one item of a group.
pub async fn upsert_item<'a>(
    executor: impl PgExecutor<'a>,
    sys_id: Uuid,
    key: &str,
    val: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO sys_setting_items (sys_id, key, val, updated_at)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (sys_id, key) DO UPDATE
        SET val = EXCLUDED.val, updated_at = EXCLUDED.updated_at
        "#,
    )
    .bind(sys_id)
    .bind(key)
    .bind(val)
    .bind(Utc::now())
    .execute(executor)
    .await?;
    Ok(())
}

/// Batch-upsert items inside an open transaction.
pub async fn upsert_items(
    tx: &mut Transaction<'_, Postgres>,
    sys_id: Uuid,
    items: &[(&str, &str)],
) -> Result<(), sqlx::Error> {
    for (key, val) in items {
        upsert_item(&mut **tx, sys_id, key, val).await?;
    }
    Ok(())
}
