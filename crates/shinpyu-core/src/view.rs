//! What the book currently shows, built up across loads.
//!
//! A load writes only what its document provides: absent sections keep the
//! text already on the page and an absent ceremony list keeps the ceremony
//! pages. Fallback content replaces everything.

use crate::ceremony::Ceremony;
use crate::content::{PageText, DEFAULT_DOCUMENT_TITLE};
use crate::loader::{ContentOrigin, LoadedContent};
use crate::media::MediaConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct InvitationView {
    pub text: PageText,
    pub ceremonies: Vec<Ceremony>,
    pub media: Option<MediaConfig>,
    pub title: String,
    pub origin: Option<ContentOrigin>,
}

impl Default for InvitationView {
    fn default() -> Self {
        Self {
            text: PageText::new(),
            ceremonies: Vec::new(),
            media: None,
            title: DEFAULT_DOCUMENT_TITLE.to_string(),
            origin: None,
        }
    }
}

impl InvitationView {
    pub fn new() -> Self {
        Self::default()
    }

    /// View after a first load into an empty template.
    pub fn from_loaded(loaded: &LoadedContent) -> Self {
        let mut view = Self::new();
        view.apply(loaded);
        view
    }

    /// Merge a load result into what is shown.
    pub fn apply(&mut self, loaded: &LoadedContent) {
        let content = &loaded.content;
        if loaded.is_fallback() {
            self.text = PageText::from_content(content);
            self.ceremonies = content.ceremonies().to_vec();
            self.media = content.media.clone();
        } else {
            self.text.apply(content);
            if let Some(ceremonies) = &content.ceremonies {
                self.ceremonies = ceremonies.clone();
            }
            if let Some(media) = &content.media {
                self.media = Some(media.clone());
            }
        }
        self.title = content.document_title();
        self.origin = Some(loaded.origin);
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == Some(ContentOrigin::Fallback)
    }
}
