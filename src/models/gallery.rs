use serde::{Deserialize, Serialize};

/// Reference (path or URL) to a stored graph image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct GalleryItem(String);

impl GalleryItem {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn reference(&self) -> &str {
        &self.0
    }

    /// Last `/`-separated segment of the reference.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

/// Body of the delete endpoint: `{"success":true}` or `{"error":"..."}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_is_last_path_segment() {
        let item = GalleryItem::new("gallery/sub/graph-2024-04-19-13-30-35.png");
        assert_eq!(item.file_name(), "graph-2024-04-19-13-30-35.png");
        assert_eq!(GalleryItem::new("plain.png").file_name(), "plain.png");
    }

    #[test]
    fn list_deserializes_from_string_array() {
        let items: Vec<GalleryItem> =
            serde_json::from_str(r#"["gallery/a.png","gallery/b.png"]"#).unwrap();
        assert_eq!(items, vec![GalleryItem::new("gallery/a.png"), GalleryItem::new("gallery/b.png")]);
    }

    #[test]
    fn error_body_is_not_success() {
        let response: DeleteResponse =
            serde_json::from_str(r#"{"error":"File does not exist"}"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("File does not exist"));
    }
}
