//! Project record data model
//!
//! Records are supplied externally and decoded tolerantly: absent or `null`
//! fields fall back to empty strings, empty collections or zero. Numeric fields
//! accept either JSON numbers or numeric strings.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single portfolio project as stored in the data file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectRecord {
    /// Project title
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,

    /// Year of the project (number or string in the source data)
    pub year: Option<Numeric>,

    /// Display rank used by the order sort modes
    pub order: Option<Numeric>,

    /// Tags in display order (numbers in the source data become strings)
    #[serde(deserialize_with = "tag_list")]
    pub tags: Vec<String>,

    /// One-line subtitle shown on the card and in the modal
    #[serde(deserialize_with = "null_as_default")]
    pub desc_short: String,

    /// English long description (may contain `[label](url)` links)
    #[serde(deserialize_with = "null_as_default")]
    pub desc_en: String,

    /// Korean long description (may contain `[label](url)` links)
    #[serde(deserialize_with = "null_as_default")]
    pub desc_ko: String,

    /// Thumbnail image reference
    #[serde(deserialize_with = "null_as_default")]
    pub thumb: String,

    /// Detail images in display order
    #[serde(deserialize_with = "null_as_default")]
    pub images: Vec<String>,

    /// Optional video embed URL, shown before the images
    pub vimeo_embed_url: Option<String>,

    /// Explicit visibility flag; only `Some(false)` hides the record
    pub visible: Option<bool>,
}

/// A JSON value that is either a number or a string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(f64),
    Text(String),
}

/// One entry of a project's combined media list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaItem {
    /// Video embed URL
    Video(String),
    /// Image reference
    Image(String),
}

impl Numeric {
    /// Coerce to a number the way a loosely typed page would: numeric strings
    /// parse, anything else (including NaN) becomes zero.
    #[must_use]
    pub fn value(&self) -> f64 {
        let n = match self {
            Self::Number(n) => *n,
            Self::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse().unwrap_or(0.0)
                }
            }
        };
        if n.is_finite() { n } else { 0.0 }
    }

    /// Display form: integral numbers without a fractional part
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Number(n) if n.fract() == 0.0 && n.is_finite() => format!("{n:.0}"),
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.trim().to_string(),
        }
    }
}

impl MediaItem {
    /// The URL or image path of this item
    #[must_use]
    pub fn source(&self) -> &str {
        match self {
            Self::Video(src) | Self::Image(src) => src,
        }
    }

    /// Whether this item is the video embed
    #[must_use]
    pub const fn is_video(&self) -> bool {
        matches!(self, Self::Video(_))
    }
}

impl ProjectRecord {
    /// Records explicitly marked `visible: false` are excluded from the working set
    #[must_use]
    pub fn is_listed(&self) -> bool {
        self.visible != Some(false)
    }

    /// Numeric year, zero when missing or not a number
    #[must_use]
    pub fn year_value(&self) -> f64 {
        self.year.as_ref().map_or(0.0, Numeric::value)
    }

    /// Year as shown on screen, empty when missing
    #[must_use]
    pub fn year_label(&self) -> String {
        self.year.as_ref().map(Numeric::label).unwrap_or_default()
    }

    /// Numeric display rank, zero when missing
    #[must_use]
    pub fn order_value(&self) -> f64 {
        self.order.as_ref().map_or(0.0, Numeric::value)
    }

    /// Trim every tag and drop blank ones
    pub fn normalize_tags(&mut self) {
        self.tags = normalized(std::mem::take(&mut self.tags));
    }

    /// Whether the record carries `tag`
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Combined media list: the video embed (if any) followed by the images
    #[must_use]
    pub fn media(&self) -> Vec<MediaItem> {
        let video = self
            .vimeo_embed_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(|url| MediaItem::Video(url.to_string()));

        video
            .into_iter()
            .chain(
                self.images
                    .iter()
                    .map(|src| src.trim())
                    .filter(|src| !src.is_empty())
                    .map(|src| MediaItem::Image(src.to_string())),
            )
            .collect()
    }
}

fn normalized(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .filter_map(|tag| {
            let trimmed = tag.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect()
}

/// Tags as strings: numbers are converted, other values are skipped
fn tag_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    let tags = values
        .into_iter()
        .filter_map(|value| match value {
            Value::String(s) => Some(s),
            Value::Number(n) => n.as_f64().map(|n| Numeric::Number(n).label()),
            _ => None,
        })
        .collect();
    Ok(normalized(tags))
}

/// Treat an explicit `null` like an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
