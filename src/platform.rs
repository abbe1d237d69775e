//! Platform configuration: static, process-wide settings for image delivery
//! and constants injected into runtime code.
//!
//! Initialized once on first access and never mutated. Changing any value
//! requires a code change.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Output image encodings, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ImageFormat {
    #[serde(rename = "image/avif")]
    Avif,
    #[serde(rename = "image/webp")]
    Webp,
}

impl ImageFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Avif => "image/avif",
            ImageFormat::Webp => "image/webp",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageConfig {
    /// Remote hosts images may be served from
    pub domains: Vec<&'static str>,

    /// Supported encodings, first-preferred
    pub formats: Vec<ImageFormat>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlatformConfig {
    pub images: ImageConfig,

    /// Key/value constants exposed to runtime code
    pub env: BTreeMap<&'static str, &'static str>,
}

static PLATFORM: OnceLock<PlatformConfig> = OnceLock::new();

impl PlatformConfig {
    /// Get the process-wide platform configuration.
    pub fn get() -> &'static PlatformConfig {
        PLATFORM.get_or_init(|| PlatformConfig {
            images: ImageConfig {
                domains: vec!["localhost", "res.cloudinary.com"],
                formats: vec![ImageFormat::Avif, ImageFormat::Webp],
            },
            env: BTreeMap::from([("CUSTOM_KEY", "my-value")]),
        })
    }

    /// Exact host match against the allowed image domains.
    pub fn is_allowed_image_host(&self, host: &str) -> bool {
        self.images.domains.iter().any(|domain| *domain == host)
    }

    /// Most preferred encoding the client accepts, if any.
    pub fn preferred_format(&self, accepted: &[&str]) -> Option<ImageFormat> {
        self.images
            .formats
            .iter()
            .copied()
            .find(|format| accepted.contains(&format.mime_type()))
    }

    pub fn env_value(&self, key: &str) -> Option<&'static str> {
        self.env.get(key).copied()
    }
}
