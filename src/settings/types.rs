/**
 * Settings Form Types
 *
 * Admin-facing forms for the site and SMTP settings groups, plus the test
 * delivery form. Each save form flattens into the key/value items of its
 * group.
 */

use serde::{Deserialize, Serialize};

/// Site settings form ("网站设置")
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SiteForm {
    pub site_name: String,
    pub site_url: String,
    #[serde(default)]
    pub site_desc: String,
    #[serde(default)]
    pub site_logo: String,
    #[serde(default)]
    pub seo_key_words: String,
    #[serde(default)]
    pub head_content: String,
    #[serde(default)]
    pub footer_content: String,
}

impl SiteForm {
    /// Flatten into (key, value) items for the batch upsert.
    pub fn items(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("site_name", self.site_name.as_str()),
            ("site_url", self.site_url.as_str()),
            ("site_desc", self.site_desc.as_str()),
            ("site_logo", self.site_logo.as_str()),
            ("seo_key_words", self.seo_key_words.as_str()),
            ("head_content", self.head_content.as_str()),
            ("footer_content", self.footer_content.as_str()),
        ]
    }
}

/// SMTP settings form ("邮件设置")
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct EmailForm {
    pub address: String,
    pub port: String,
    pub account: String,
    pub pwd: String,
    pub sender: String,
}

impl EmailForm {
    pub fn items(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("address", self.address.as_str()),
            ("port", self.port.as_str()),
            ("account", self.account.as_str()),
            ("pwd", self.pwd.as_str()),
            ("sender", self.sender.as_str()),
        ]
    }
}

/// Test mail delivery form
#[derive(Deserialize, Serialize, Debug)]
pub struct EmailSendForm {
    pub receive_email: String,
    pub title: String,
    pub content: String,
}

/// Query for fetching a settings group by type name
#[derive(Deserialize, Debug)]
pub struct SettingsQuery {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_form_flattens_every_field() {
        let form = SiteForm {
            site_name: "Blog".to_string(),
            site_url: "https://blog.example.com".to_string(),
            ..Default::default()
        };
        let items = form.items();
        assert_eq!(items.len(), 7);
        assert!(items.contains(&("site_name", "Blog")));
        assert!(items.contains(&("site_url", "https://blog.example.com")));
    }
}
