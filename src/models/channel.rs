// ABOUTME: Channel data model as returned by the channel search service
// Thumbnails are upgraded to https once, while the JSON is decoded

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub channel_id: String,
    pub name: String,
    #[serde(deserialize_with = "deserialize_thumbnail")]
    pub thumbnail: String,
    pub navigation_endpoint: String,
}

impl Channel {
    pub fn new(
        channel_id: impl Into<String>,
        name: impl Into<String>,
        thumbnail: &str,
        navigation_endpoint: impl Into<String>,
    ) -> Self {
        Self {
            channel_id: channel_id.into(),
            name: name.into(),
            thumbnail: secure_thumbnail_url(thumbnail),
            navigation_endpoint: navigation_endpoint.into(),
        }
    }
}

/// Rewrite a thumbnail URL so it is always fetched over https.
///
/// The search service hands out protocol-relative URLs (`//host/path`).
pub fn secure_thumbnail_url(raw: &str) -> String {
    let raw = raw.trim();
    if let Some(rest) = raw.strip_prefix("//") {
        format!("https://{}", rest)
    } else if let Some(rest) = raw.strip_prefix("http://") {
        format!("https://{}", rest)
    } else {
        raw.to_string()
    }
}

fn deserialize_thumbnail<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(secure_thumbnail_url(&raw))
}
