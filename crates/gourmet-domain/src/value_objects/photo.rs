//! Photo value object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An uploaded photo. Photo lists are always replaced wholesale, never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub url: String,
    pub upload_date: DateTime<Utc>,
}

impl Photo {
    #[must_use]
    pub fn new(url: impl Into<String>, upload_date: DateTime<Utc>) -> Self {
        Self {
            url: url.into(),
            upload_date,
        }
    }

    /// Builds a fresh photo list from uploaded photo references.
    #[must_use]
    pub fn from_urls<I, S>(urls: I, uploaded_at: DateTime<Utc>) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        urls.into_iter()
            .map(|url| Self::new(url, uploaded_at))
            .collect()
    }
}
