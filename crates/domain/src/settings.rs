//! Site settings payloads, one section per settings screen.
//!
//! Branding and SEO carry uploaded assets and are sent as multipart; the
//! structs here hold the scalar fields plus the server-side asset URLs.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralSettings {
    #[serde(default)]
    pub site_name: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandingSettings {
    pub primary_color: String,
    pub secondary_color: String,
    pub font_family: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub favicon_url: Option<String>,
}

impl Default for BrandingSettings {
    fn default() -> Self {
        Self {
            primary_color: "#3b82f6".into(),
            secondary_color: "#64748b".into(),
            font_family: "Inter".into(),
            logo_url: None,
            favicon_url: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomepageFeature {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomepageSettings {
    #[serde(default)]
    pub hero_title: String,
    #[serde(default)]
    pub hero_subtitle: String,
    #[serde(default)]
    pub hero_cta_text: String,
    #[serde(default)]
    pub hero_cta_link: String,
    #[serde(default)]
    pub about_title: String,
    #[serde(default)]
    pub about_description: String,
    #[serde(default)]
    pub features: Vec<HomepageFeature>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoSettings {
    #[serde(default)]
    pub meta_title: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub meta_keywords: String,
    #[serde(default)]
    pub og_title: String,
    #[serde(default)]
    pub og_description: String,
    #[serde(default)]
    pub og_image_url: Option<String>,
    #[serde(default)]
    pub twitter_card: String,
    #[serde(default)]
    pub twitter_site: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmtpEncryption {
    #[default]
    Tls,
    Ssl,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailSettings {
    #[serde(default)]
    pub smtp_host: String,
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default)]
    pub smtp_encryption: SmtpEncryption,
    #[serde(default)]
    pub from_email: String,
    #[serde(default)]
    pub from_name: String,
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            smtp_host: String::new(),
            smtp_port: 587,
            smtp_username: String::new(),
            smtp_password: String::new(),
            smtp_encryption: SmtpEncryption::Tls,
            from_email: String::new(),
            from_name: String::new(),
        }
    }
}

/// The full settings document from the read endpoint. Sections a deployment
/// has never saved come back absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default)]
    pub general: Option<GeneralSettings>,
    #[serde(default)]
    pub branding: Option<BrandingSettings>,
    #[serde(default)]
    pub homepage: Option<HomepageSettings>,
    #[serde(default)]
    pub seo: Option<SeoSettings>,
    #[serde(default)]
    pub email: Option<EmailSettings>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_settings_document_deserializes() {
        let doc: SiteSettings = serde_json::from_str(
            r#"{"general":{"site_name":"Civic Portal","contact_email":"","contact_phone":"","address":""}}"#,
        )
        .unwrap();
        assert_eq!(doc.general.unwrap().site_name, "Civic Portal");
        assert!(doc.branding.is_none());
        assert!(doc.email.is_none());
    }

    #[test]
    fn smtp_encryption_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SmtpEncryption::Tls).unwrap(),
            "\"tls\""
        );
    }
}
