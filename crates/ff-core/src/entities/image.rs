use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One size variant of an uploaded image.
///
/// Accepts both `{"url": "..."}` objects and bare URL strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ImageSource {
    Object { url: String },
    Url(String),
}

impl ImageSource {
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Object { url } | Self::Url(url) => url,
        }
    }
}

/// Image property as returned by the backend: size name to source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ImageRef(pub BTreeMap<String, ImageSource>);

impl ImageRef {
    /// URL of the named size, if present and non-empty.
    #[must_use]
    pub fn size_url(&self, size: &str) -> Option<&str> {
        self.0
            .get(size)
            .map(ImageSource::url)
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_object_and_string_sizes() {
        let image: ImageRef = serde_json::from_str(
            r#"{"thumbnail":{"url":"https://cdn/t.jpg"},"small":"https://cdn/s.jpg","large":{"url":""}}"#,
        )
        .unwrap();
        assert_eq!(image.size_url("thumbnail"), Some("https://cdn/t.jpg"));
        assert_eq!(image.size_url("small"), Some("https://cdn/s.jpg"));
        assert_eq!(image.size_url("large"), None);
        assert_eq!(image.size_url("huge"), None);
    }
}
