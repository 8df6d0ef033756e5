//! Ceremony blocks for one locale page.

use dioxus::prelude::*;
use shinpyu_core::{ceremony_blocks, Ceremony, Locale};

#[derive(Props, Clone, PartialEq)]
pub struct CeremonyListProps {
    pub ceremonies: Vec<Ceremony>,
    pub locale: Locale,
}

/// All ceremonies rendered in the page's locale.
#[component]
pub fn CeremonyList(props: CeremonyListProps) -> Element {
    let blocks = ceremony_blocks(&props.ceremonies, props.locale);
    let code = props.locale.code();

    rsx! {
        div { id: props.locale.container_id(), class: "ceremony-list",
            for (i, block) in blocks.into_iter().enumerate() {
                div { key: "{i}", class: "{block.block_class()}",
                    h3 { class: "ceremony-label-{code}", "{block.label}" }
                    if let Some(image) = &block.image {
                        img {
                            class: "ceremony-image",
                            src: "{image.src}",
                            alt: "{image.alt}",
                            loading: "lazy",
                            decoding: "async",
                        }
                    }
                    p { class: "ceremony-desc-{code}", "{block.description}" }
                    div { class: "ceremony-details-{code}",
                        for row in block.details.iter() {
                            p {
                                strong { "{row.label}" }
                                " {row.value}"
                            }
                        }
                        p { "{block.address}" }
                    }
                }
            }
        }
    }
}
