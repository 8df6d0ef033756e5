//! Copy-to-clipboard behaviour of the contact number.

use std::time::Duration;

/// Text shown in place of the number while the copy confirmation is up.
pub const COPIED_LABEL: &str = "Copied!";

/// Colour of the confirmation text.
pub const COPIED_COLOR: &str = "#2e7d32";

/// How long the confirmation stays before the number comes back.
pub const COPIED_DURATION: Duration = Duration::from_millis(1500);

/// Placeholder that must never be copied.
pub const CONTACT_UNAVAILABLE: &str = "Contact Not Available";

/// Text to put on the clipboard for a click on the contact value, if any.
pub fn copyable_contact(text: &str) -> Option<&str> {
    let text = text.trim();
    if text.is_empty() || text == CONTACT_UNAVAILABLE || text == COPIED_LABEL {
        None
    } else {
        Some(text)
    }
}
