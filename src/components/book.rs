//! The flip-book: four leaves, navigation, gestures and audio.

use dioxus::prelude::*;
use shinpyu_core::{
    key_action, KeyAction, Locale, MusicLatch, MusicPlan, SwipeTracker, TextSlot,
};

use super::audio::{start_background_music, BookAudio};
use super::{CeremonyList, ContactValue, Leaf, NavControls};
use crate::context::{reload_content, turn_page, use_book, use_content};

/// Whole invitation book.
///
/// Keyboard: left arrow turns back, right arrow or space turns forward,
/// `R` reloads the content document. Touch: swipe left/right.
#[component]
pub fn Book() -> Element {
    let book = use_book();
    let content = use_content();
    let mut swipe: Signal<SwipeTracker> = use_signal(SwipeTracker::default);
    let music_latch: Signal<MusicLatch> = use_signal(MusicLatch::default);

    let Some(view) = content.read().clone() else {
        return rsx! {};
    };
    let is_fallback = view.is_fallback();
    let text = view.text;
    let ceremonies = view.ceremonies;
    let backgrounds = view
        .media
        .as_ref()
        .map(|media| media.page_backgrounds())
        .unwrap_or_default();
    let music = view.media.as_ref().and_then(|media| media.music());

    let on_keydown = move |evt: KeyboardEvent| {
        let Some(action) = key_action(&evt.key().to_string()) else {
            return;
        };
        evt.prevent_default();
        match action {
            KeyAction::Turn(direction) => {
                turn_page(book, |nav| nav.step(direction));
            }
            KeyAction::Reload => {
                tracing::info!("Reloading content");
                reload_content(content);
            }
        }
    };

    let on_click = {
        let music = music.clone();
        move |_: MouseEvent| start_music_once(music_latch, music.as_ref())
    };

    let on_touchstart = move |evt: TouchEvent| {
        start_music_once(music_latch, music.as_ref());
        if let Some(x) = first_touch_x(&evt) {
            swipe.write().touch_start(x);
        }
    };

    let on_touchend = move |evt: TouchEvent| {
        let Some(x) = first_touch_x(&evt) else {
            return;
        };
        let direction = swipe.read().touch_end(x);
        if let Some(direction) = direction {
            turn_page(book, |nav| nav.step(direction));
        }
    };

    let event_title = text.get(TextSlot::EventTitle);
    let event_subtitle = text.get(TextSlot::EventSubtitle);
    let event_family = text.get(TextSlot::EventFamily);
    let event_year = text.get(TextSlot::EventYear);
    let invitation_mm = text.get(TextSlot::InvitationMm);
    let invitation_en = text.get(TextSlot::InvitationEn);
    let blessing_mm = text.get(TextSlot::BlessingMm);
    let blessing_en = text.get(TextSlot::BlessingEn);
    let rsvp_details = text.get(TextSlot::RsvpDetails);
    let contact_number = text.get(TextSlot::ContactNumber);
    let footer_text = text.get(TextSlot::FooterText);
    let bg = |leaf: usize| backgrounds.get(leaf).cloned().flatten();

    rsx! {
        div {
            class: "book-stage",
            tabindex: "0",
            autofocus: true,
            onkeydown: on_keydown,
            onclick: on_click,
            ontouchstart: on_touchstart,
            ontouchend: on_touchend,

            if is_fallback {
                div { class: "fallback-note", "offline copy" }
            }

            div { class: "book",
                // Cover and invitation
                Leaf {
                    index: 0,
                    background: bg(0),
                    front: rsx! {
                        div { class: "cover",
                            h1 { id: TextSlot::EventTitle.element_id(), class: "event-title", "{event_title}" }
                            h2 { id: TextSlot::EventSubtitle.element_id(), class: "event-subtitle", "{event_subtitle}" }
                            p { id: TextSlot::EventFamily.element_id(), class: "event-family", "{event_family}" }
                            p { id: TextSlot::EventYear.element_id(), class: "event-year", "{event_year}" }
                        }
                    },
                    back: rsx! {
                        div { class: "invitation",
                            p { id: TextSlot::InvitationMm.element_id(), class: "text-mm", "{invitation_mm}" }
                            p { id: TextSlot::InvitationEn.element_id(), class: "text-en", "{invitation_en}" }
                        }
                    },
                }

                // Myanmar ceremonies and blessing
                Leaf {
                    index: 1,
                    background: bg(1),
                    front: rsx! {
                        CeremonyList { ceremonies: ceremonies.clone(), locale: Locale::Myanmar }
                    },
                    back: rsx! {
                        p { id: TextSlot::BlessingMm.element_id(), class: "blessing text-mm", "{blessing_mm}" }
                    },
                }

                // English ceremonies and blessing
                Leaf {
                    index: 2,
                    background: bg(2),
                    front: rsx! {
                        CeremonyList { ceremonies: ceremonies.clone(), locale: Locale::English }
                    },
                    back: rsx! {
                        p { id: TextSlot::BlessingEn.element_id(), class: "blessing text-en", "{blessing_en}" }
                    },
                }

                // RSVP and closing
                Leaf {
                    index: 3,
                    background: bg(3),
                    front: rsx! {
                        div { class: "rsvp",
                            p { id: TextSlot::RsvpDetails.element_id(), class: "rsvp-details", "{rsvp_details}" }
                            ContactValue { number: contact_number.to_string() }
                        }
                    },
                    back: rsx! {
                        footer { id: TextSlot::FooterText.element_id(), class: "footer-text", "{footer_text}" }
                    },
                }
            }

            NavControls {}
            BookAudio {}
        }
    }
}

/// Start the background music on the first click or touch that has music
/// to play.
fn start_music_once(mut latch: Signal<MusicLatch>, plan: Option<&MusicPlan>) {
    if latch.read().has_started() {
        return;
    }
    if let Some(plan) = latch.write().begin(plan) {
        start_background_music(plan);
    }
}

fn first_touch_x(evt: &TouchEvent) -> Option<f64> {
    evt.data()
        .touches_changed()
        .first()
        .map(|touch| touch.screen_coordinates().x)
}
