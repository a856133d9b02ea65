use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::{format_timestamp, truncate_string};

/// Maximum title length shown in list views
const LIST_TITLE_WIDTH: usize = 60;

/// A generated video: title, script, and an inline thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub script: String,
    /// `data:` URI carrying the encoded thumbnail image
    #[serde(rename = "thumbnailUrl")]
    pub thumbnail_url: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Video {
    /// Title shortened for single-line listings
    pub fn display_title(&self) -> String {
        truncate_string(&self.title, LIST_TITLE_WIDTH)
    }

    pub fn display_created_at(&self) -> String {
        format_timestamp(&self.created_at)
    }

    /// Script split on the paragraph breaks the model was asked to emit
    pub fn paragraphs(&self) -> Vec<&str> {
        self.script
            .split('\n')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }
}
