//! Content loading with fallback.
//!
//! The content document is a single static JSON asset. Loading either
//! yields the parsed document or, via [`load_or_fallback`], the built-in
//! fallback content so the book always has something to show.

use std::path::Path;

use crate::content::InvitationContent;
use crate::error::{InvitationError, InvitationResult};
use crate::fallback::fallback_content;

/// Where the content document lives relative to the working directory.
pub const DEFAULT_CONTENT_PATH: &str = "./data/content.json";

/// Where the shown content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentOrigin {
    Loaded,
    Fallback,
}

/// Content ready to render, tagged with its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedContent {
    pub content: InvitationContent,
    pub origin: ContentOrigin,
}

impl LoadedContent {
    pub fn fallback() -> Self {
        Self {
            content: fallback_content(),
            origin: ContentOrigin::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == ContentOrigin::Fallback
    }
}

/// Read and parse the content document at `path`.
pub async fn load(path: impl AsRef<Path>) -> InvitationResult<InvitationContent> {
    let path = path.as_ref();
    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(InvitationError::ContentNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    Ok(InvitationContent::from_json(&text)?)
}

/// Load the content document, substituting the fallback content on failure.
///
/// Only a missing or unreadable file and malformed JSON count as failure.
pub async fn load_or_fallback(path: impl AsRef<Path>) -> LoadedContent {
    let path = path.as_ref();
    match load(path).await {
        Ok(content) => {
            tracing::info!(path = %path.display(), "Content loaded successfully");
            if content.ceremonies.is_none() {
                tracing::warn!("Ceremony data not found; ceremony pages left as they are");
            }
            LoadedContent {
                content,
                origin: ContentOrigin::Loaded,
            }
        }
        Err(e) => {
            tracing::error!(path = %path.display(), "Failed to load content: {}", e);
            tracing::info!("Using fallback content");
            LoadedContent::fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_valid_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content.json");
        std::fs::write(&path, r#"{ "event": { "title_en": "Shinpyu 2026" } }"#).unwrap();

        let loaded = load_or_fallback(&path).await;
        assert_eq!(loaded.origin, ContentOrigin::Loaded);
        assert_eq!(loaded.content.document_title(), "Shinpyu 2026");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load(dir.path().join("absent.json")).await.unwrap_err();
        assert!(matches!(err, InvitationError::ContentNotFound(_)));
    }

    #[tokio::test]
    async fn test_mistyped_fields_still_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content.json");
        std::fs::write(
            &path,
            r#"{ "event": { "title_en": "Real Title", "family": 12 },
                 "ceremonies": [ { "date": null } ] }"#,
        )
        .unwrap();

        let loaded = load_or_fallback(&path).await;
        assert_eq!(loaded.origin, ContentOrigin::Loaded);
        assert_eq!(loaded.content.document_title(), "Real Title");
        assert_eq!(loaded.content.ceremonies()[0].date, "");
    }

    #[tokio::test]
    async fn test_malformed_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load(&path).await, Err(InvitationError::Parse(_))));
        let loaded = load_or_fallback(&path).await;
        assert!(loaded.is_fallback());
        assert_eq!(loaded.content, fallback_content());
    }
}
