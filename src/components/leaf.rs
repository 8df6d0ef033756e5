//! A single leaf of the book: a front and a back side turning together.

use dioxus::prelude::*;

use crate::context::{turn_page, use_book};

#[derive(Props, Clone, PartialEq)]
pub struct LeafProps {
    /// Position of the leaf in the book, from the cover
    pub index: usize,
    /// Background image for both sides
    #[props(!optional)]
    pub background: Option<String>,
    /// Content of the front side
    pub front: Element,
    /// Content of the back side
    pub back: Element,
}

/// Leaf positioned and rotated from the navigator state.
///
/// Clicking the top leaf turns it; clicking the last turned leaf brings it
/// back.
#[component]
pub fn Leaf(props: LeafProps) -> Element {
    let book = use_book();
    let index = props.index;
    let (flipped, z_index) = {
        let nav = book.read();
        (nav.is_flipped(index), nav.z_index(index))
    };

    let side_style = props
        .background
        .as_ref()
        .map(|bg| format!("background-image: url({});", bg))
        .unwrap_or_default();

    rsx! {
        div {
            class: if flipped { "page flipped" } else { "page" },
            "data-page-index": "{index}",
            style: "z-index: {z_index};",
            onclick: move |_| {
                turn_page(book, |nav| nav.leaf_clicked(index));
            },
            div { class: "page-front", style: "{side_style}",
                div { class: "page-content", {props.front} }
            }
            div { class: "page-back", style: "{side_style}",
                div { class: "page-content", {props.back} }
            }
        }
    }
}
