//! Book context for the invitation.
//!
//! Provides the loaded content and the page navigator to all components via
//! use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let book = use_book();
//! turn_page(book, |nav| nav.next());
//! ```

use std::path::PathBuf;

use dioxus::prelude::*;
use shinpyu_core::{load_or_fallback, BookNavigator, Flip, InvitationView, FLIP_DURATION};

use crate::components::audio;

/// Content shown in the book; `None` until the first load finishes.
pub type SharedContent = Signal<Option<InvitationView>>;

/// Get the content document path.
/// Uses the global path set from command line args.
pub fn get_content_path() -> PathBuf {
    crate::get_content_path()
}

/// Hook to access the page navigator from context.
pub fn use_book() -> Signal<BookNavigator> {
    use_context::<Signal<BookNavigator>>()
}

/// Hook to access the loaded content from context.
pub fn use_content() -> SharedContent {
    use_context::<SharedContent>()
}

/// Run a navigator transition and, when accepted, ring the bell and release
/// the flip lock once the turn animation is over.
pub fn turn_page(
    mut book: Signal<BookNavigator>,
    request: impl FnOnce(&mut BookNavigator) -> Option<Flip>,
) -> Option<Flip> {
    let flip = {
        let mut nav = book.write();
        request(&mut nav)
    };

    if flip.is_some() {
        audio::play_temple_bell();
        spawn(async move {
            tokio::time::sleep(FLIP_DURATION).await;
            book.write().release();
        });
    }
    flip
}

/// (Re)load the content document and merge it into what the book shows.
pub fn reload_content(mut content: SharedContent) {
    spawn(async move {
        let loaded = load_or_fallback(get_content_path()).await;
        content
            .write()
            .get_or_insert_with(InvitationView::new)
            .apply(&loaded);
    });
}
