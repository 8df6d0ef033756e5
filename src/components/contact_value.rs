//! Contact number that copies itself to the clipboard when clicked.

use dioxus::prelude::*;
use shinpyu_core::contact::{copyable_contact, COPIED_COLOR, COPIED_DURATION, COPIED_LABEL};

#[derive(Props, Clone, PartialEq)]
pub struct ContactValueProps {
    /// Contact number as given in the content
    pub number: String,
}

/// Contact number with click-to-copy and a short "Copied!" confirmation.
///
/// Clicks here never turn the page.
#[component]
pub fn ContactValue(props: ContactValueProps) -> Element {
    let mut copied: Signal<bool> = use_signal(|| false);

    let on_click = {
        let number = props.number.clone();
        move |evt: MouseEvent| {
            evt.stop_propagation();
            if copied() {
                return;
            }
            let Some(text) = copyable_contact(&number) else {
                return;
            };

            // Use arboard for cross-platform clipboard access
            match arboard::Clipboard::new() {
                Ok(mut clipboard) => {
                    if let Err(e) = clipboard.set_text(text) {
                        tracing::error!("Failed to copy: {}", e);
                        return;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to copy: {}", e);
                    return;
                }
            }

            copied.set(true);
            spawn(async move {
                tokio::time::sleep(COPIED_DURATION).await;
                copied.set(false);
            });
        }
    };

    rsx! {
        span {
            id: "contactNumber",
            class: "contact-value",
            title: "Tap to copy",
            style: if copied() { "color: {COPIED_COLOR};" } else { "" },
            onclick: on_click,
            if copied() { "{COPIED_LABEL}" } else { "{props.number}" }
        }
    }
}
