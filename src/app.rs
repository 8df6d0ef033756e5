use dioxus::prelude::*;
use shinpyu_core::{content::DEFAULT_DOCUMENT_TITLE, BookNavigator, InvitationView};

use crate::components::Book;
use crate::context::{reload_content, SharedContent};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the book context, and loads the content document
/// before the book is shown.
#[component]
pub fn App() -> Element {
    let book: Signal<BookNavigator> = use_signal(BookNavigator::new);
    let content: SharedContent = use_signal(|| None::<InvitationView>);

    // Provide book context to all child components
    use_context_provider(|| book);
    use_context_provider(|| content);

    // Load content on mount
    use_effect(move || reload_content(content));

    let title = content
        .read()
        .as_ref()
        .map(|view| view.title.clone())
        .unwrap_or_else(|| DEFAULT_DOCUMENT_TITLE.to_string());

    rsx! {
        document::Title { "{title}" }
        style { {GLOBAL_STYLES} }
        if content.read().is_some() {
            Book {}
        } else {
            div { class: "book-loading", "ဖိတ်စာ ဖွင့်နေသည်..." }
        }
    }
}
