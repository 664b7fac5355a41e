use crate::model::{Catalog, Game, Project, Testimonial};
use crate::samples;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

/// Where the static catalog files live unless overridden on the CLI.
pub const DEFAULT_BASE_URL: &str = "https://mirsol.pages.dev/data";

/// Third-party avatar endpoint; returns a JSON envelope with a nested
/// image URL.
const AVATAR_URL: &str = "https://thumbnails.roblox.com/v1/users/avatar-headshot?userIds=272664542&size=420x420&format=Png&isCircular=false";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum DataError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("endpoint returned HTTP {status} for {url}")]
    Status { status: u16, url: String },
}

/// Fetches the three catalog collections and the avatar URL.
pub struct DataSource {
    client: reqwest::Client,
    base: String,
}

impl DataSource {
    pub fn new(base: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            base: base.into(),
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, DataError> {
        let url = format!("{}/{}", self.base.trim_end_matches('/'), file);
        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(DataError::Status {
                status: resp.status().as_u16(),
                url,
            });
        }
        Ok(resp.json().await?)
    }

    /// Fetch all three collections concurrently. Any failure fails the
    /// whole load; there is no partial success.
    pub async fn fetch_all(&self) -> Result<Catalog, DataError> {
        let (projects, games, testimonials) = tokio::try_join!(
            self.fetch::<Project>("projects.json"),
            self.fetch::<Game>("games.json"),
            self.fetch::<Testimonial>("testimonials.json"),
        )?;
        Ok(Catalog {
            projects,
            games,
            testimonials,
        })
    }

    /// Load the catalog, falling back to the embedded samples for ALL
    /// THREE collections if anything goes wrong. Deliberately
    /// all-or-nothing; no retry.
    pub async fn load(&self) -> Catalog {
        match self.fetch_all().await {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("Warning: could not fetch catalog data, using fallback samples: {e}");
                samples::catalog()
            }
        }
    }

    /// Fetch the avatar image URL. `None` on any failure; the caller keeps
    /// its placeholder.
    pub async fn avatar_url(&self) -> Option<String> {
        match self.fetch_avatar().await {
            Ok(Some(url)) => Some(url),
            Ok(None) => {
                eprintln!("Warning: avatar response had no image URL; using placeholder.");
                None
            }
            Err(e) => {
                eprintln!("Warning: avatar fetch failed; using placeholder: {e}");
                None
            }
        }
    }

    async fn fetch_avatar(&self) -> Result<Option<String>, DataError> {
        let resp = self.client.get(AVATAR_URL).send().await?;
        if !resp.status().is_success() {
            return Err(DataError::Status {
                status: resp.status().as_u16(),
                url: AVATAR_URL.to_string(),
            });
        }
        let envelope: AvatarEnvelope = resp.json().await?;
        Ok(envelope
            .data
            .into_iter()
            .next()
            .map(|e| e.image_url)
            .filter(|u| !u.is_empty()))
    }
}

#[derive(Debug, Deserialize)]
struct AvatarEnvelope {
    #[serde(default)]
    data: Vec<AvatarEntry>,
}

#[derive(Debug, Deserialize)]
struct AvatarEntry {
    #[serde(rename = "imageUrl", default)]
    image_url: String,
}
