use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Backend {
    pub url: String,
}

impl Default for Backend {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:8000".into(),
        }
    }
}

/// Unsigned-upload parameters for the external image host.
#[derive(Debug, Clone, Deserialize)]
pub struct Photos {
    pub upload: String,
    pub preset: String,
    pub folder: String,
}

impl Default for Photos {
    fn default() -> Self {
        Self {
            upload: "https://api.cloudinary.com/v1_1/ddmbdyidp/image/upload".into(),
            preset: "subletswipe_photoupload".into(),
            folder: "subletswipe/listingphotos".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    pub backend: Backend,
    pub photos: Photos,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("backend.url", "http://127.0.0.1:8000")?
            .set_default(
                "photos.upload",
                "https://api.cloudinary.com/v1_1/ddmbdyidp/image/upload",
            )?
            .set_default("photos.preset", "subletswipe_photoupload")?
            .set_default("photos.folder", "subletswipe/listingphotos")?
            .add_source(
                File::with_name("subletswipe.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::default().separator("_"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::set_var;

    #[test]
    fn test_settings() {
        set_var("BACKEND_URL", "http://10.0.2.2:8000");
        let settings = Settings::new().unwrap_or_default();
        assert_eq!(settings.backend.url, "http://10.0.2.2:8000");
        assert_eq!(settings.photos.preset, "subletswipe_photoupload");
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.backend.url, "http://127.0.0.1:8000");
        assert!(settings.photos.upload.contains("cloudinary"));
    }
}
