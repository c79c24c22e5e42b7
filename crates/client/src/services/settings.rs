//! Site settings endpoints.
//!
//! Branding and SEO carry uploaded assets, so their writes go out as
//! multipart; the rest are plain JSON puts.

use std::sync::Arc;

use civiport_core::PortalResult;
use civiport_domain::{
    BrandingSettings, EmailSettings, GeneralSettings, HomepageSettings, SeoSettings, SiteSettings,
};
use reqwest::multipart::{Form, Part};

use crate::envelope::ApiEnvelope;
use crate::http::ApiClient;

/// A file picked for upload.
#[derive(Debug, Clone)]
pub struct AssetUpload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl AssetUpload {
    fn into_part(self) -> PortalResult<Part> {
        let part = Part::bytes(self.bytes)
            .file_name(self.filename)
            .mime_str(&self.content_type)
            .map_err(|err| {
                civiport_core::PortalError::validation("file", format!("bad content type: {err}"))
            })?;
        Ok(part)
    }
}

/// Branding write: scalar fields plus optional new assets.
#[derive(Debug, Clone)]
pub struct BrandingUpdate {
    pub primary_color: String,
    pub secondary_color: String,
    pub font_family: String,
    pub logo: Option<AssetUpload>,
    pub favicon: Option<AssetUpload>,
}

/// SEO write: scalar fields plus an optional new share image.
#[derive(Debug, Clone)]
pub struct SeoUpdate {
    pub meta_title: String,
    pub meta_description: String,
    pub meta_keywords: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: Option<AssetUpload>,
    pub twitter_card: String,
    pub twitter_site: String,
}

pub struct SettingsService {
    api: Arc<ApiClient>,
}

impl SettingsService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Read every settings section in one call. Sections never saved come
    /// back absent.
    pub async fn get(&self) -> PortalResult<SiteSettings> {
        let envelope: ApiEnvelope<SiteSettings> =
            self.api.get_json("admin/settings", &[]).await?;
        envelope.into_data()
    }

    pub async fn update_general(&self, settings: &GeneralSettings) -> PortalResult<GeneralSettings> {
        let envelope: ApiEnvelope<GeneralSettings> = self
            .api
            .put_json("admin/settings/general", settings)
            .await?;
        envelope.into_data()
    }

    pub async fn update_homepage(
        &self,
        settings: &HomepageSettings,
    ) -> PortalResult<HomepageSettings> {
        let envelope: ApiEnvelope<HomepageSettings> = self
            .api
            .put_json("admin/settings/homepage", settings)
            .await?;
        envelope.into_data()
    }

    pub async fn update_email(&self, settings: &EmailSettings) -> PortalResult<EmailSettings> {
        let envelope: ApiEnvelope<EmailSettings> =
            self.api.put_json("admin/settings/email", settings).await?;
        envelope.into_data()
    }

    pub async fn update_branding(&self, update: BrandingUpdate) -> PortalResult<BrandingSettings> {
        let mut form = Form::new()
            .text("primary_color", update.primary_color)
            .text("secondary_color", update.secondary_color)
            .text("font_family", update.font_family);
        if let Some(logo) = update.logo {
            form = form.part("logo", logo.into_part()?);
        }
        if let Some(favicon) = update.favicon {
            form = form.part("favicon", favicon.into_part()?);
        }

        let envelope: ApiEnvelope<BrandingSettings> = self
            .api
            .post_multipart("admin/settings/branding", form)
            .await?;
        envelope.into_data()
    }

    pub async fn update_seo(&self, update: SeoUpdate) -> PortalResult<SeoSettings> {
        let mut form = Form::new()
            .text("meta_title", update.meta_title)
            .text("meta_description", update.meta_description)
            .text("meta_keywords", update.meta_keywords)
            .text("og_title", update.og_title)
            .text("og_description", update.og_description)
            .text("twitter_card", update.twitter_card)
            .text("twitter_site", update.twitter_site);
        if let Some(image) = update.og_image {
            form = form.part("og_image", image.into_part()?);
        }

        let envelope: ApiEnvelope<SeoSettings> =
            self.api.post_multipart("admin/settings/seo", form).await?;
        envelope.into_data()
    }
}
