//! Previous/next buttons and the page indicator.

use dioxus::prelude::*;

use crate::context::{turn_page, use_book};

/// Navigation bar under the book.
#[component]
pub fn NavControls() -> Element {
    let book = use_book();
    let nav = book.read();

    rsx! {
        nav { class: "book-nav",
            button {
                class: "nav-btn prev-btn",
                "aria-label": "Previous page",
                disabled: nav.prev_disabled(),
                onclick: move |_| {
                    turn_page(book, |nav| nav.prev());
                },
                "\u{2039}"
            }
            span { class: "page-indicator", "{nav.indicator()}" }
            button {
                class: "nav-btn next-btn",
                "aria-label": "Next page",
                disabled: nav.next_disabled(),
                onclick: move |_| {
                    turn_page(book, |nav| nav.next());
                },
                "\u{203A}"
            }
        }
    }
}
