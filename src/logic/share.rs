//! Share payloads for campsites

use crate::api::{join_url, Campsite};

/// What gets handed to the share sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub message: String,
    pub url: String,
    pub dialog_title: String,
}

/// Build the share payload for `(title, message, url)`
///
/// # Examples
/// ```
/// use camptui::logic::share::share_payload;
///
/// let payload = share_payload("Lake", "Calm water", "http://h/images/lake.jpg");
/// assert_eq!(payload.message, "Lake: Calm water http://h/images/lake.jpg");
/// assert_eq!(payload.dialog_title, "Share Lake");
/// ```
pub fn share_payload(title: &str, message: &str, url: &str) -> SharePayload {
    SharePayload {
        title: title.to_string(),
        message: format!("{}: {} {}", title, message, url),
        url: url.to_string(),
        dialog_title: format!("Share {}", title),
    }
}

/// Share payload for a campsite, pointing at its image on the backend
pub fn campsite_share(campsite: &Campsite, base_url: &str) -> SharePayload {
    let url = join_url(base_url, &campsite.image);
    share_payload(&campsite.name, &campsite.description, &url)
}
