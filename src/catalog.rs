//! Dashboard side-panel image catalog.
//!
//! The patient dashboard decorates its right-hand panel with a small set of
//! images, each carrying a title and a one-line caption. The set is fixed at
//! build time and compiled into the binary — there is no content directory
//! to scan and no runtime source to fetch from.
//!
//! The catalog is an ordered sequence: [`side_images`] returns records in
//! display order, first to last. Consumers (the dashboard shell) own cycling,
//! lazy loading, and fallback behavior for unreachable URLs; this module only
//! promises that the data itself is well-formed, which [`check`] verifies.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("image {0} has an empty {1}")]
    EmptyField(usize, &'static str),
    #[error("image {0} url is not https: {1}")]
    NotHttps(usize, &'static str),
}

/// A single decorative image: where it lives and how it is captioned.
#[derive(Debug, Clone, Serialize)]
pub struct ImageRecord {
    /// Externally hosted HTTPS URL. No local asset pipeline is involved.
    pub url: &'static str,
    /// Short display title, also used as the image alt text.
    pub title: &'static str,
    /// One-line caption shown under the title.
    pub caption: &'static str,
}

const SIDE_IMAGES: &[ImageRecord] = &[
    ImageRecord {
        url: "https://images.unsplash.com/photo-1506744038136-46273834b3fb?auto=format&fit=crop&w=400&q=80",
        title: "Doctor Consultation",
        caption: "Connect with top doctors online.",
    },
    ImageRecord {
        url: "https://images.unsplash.com/photo-1519494080410-f9aa8f52f1e7?auto=format&fit=crop&w=400&q=80",
        title: "Telemedicine",
        caption: "Book video appointments instantly.",
    },
    ImageRecord {
        url: "https://images.unsplash.com/photo-1465101046530-73398c7f28ca?auto=format&fit=crop&w=400&q=80",
        title: "Health Records",
        caption: "Access your health history anytime.",
    },
];

/// The side-panel images in display order.
pub fn side_images() -> &'static [ImageRecord] {
    SIDE_IMAGES
}

/// Validate the compiled-in catalog.
///
/// Every record must have a non-empty url, title, and caption, and the url
/// must be HTTPS. Rendering never calls this — the data is static and
/// assumed well-formed — but the `check` CLI verb runs it so a bad edit is
/// caught before anything ships.
pub fn check() -> Result<(), CheckError> {
    check_records(SIDE_IMAGES)
}

fn check_records(records: &[ImageRecord]) -> Result<(), CheckError> {
    for (idx, record) in records.iter().enumerate() {
        let pos = idx + 1;
        if record.url.is_empty() {
            return Err(CheckError::EmptyField(pos, "url"));
        }
        if record.title.is_empty() {
            return Err(CheckError::EmptyField(pos, "title"));
        }
        if record.caption.is_empty() {
            return Err(CheckError::EmptyField(pos, "caption"));
        }
        if !record.url.starts_with("https://") {
            return Err(CheckError::NotHttps(pos, record.url));
        }
    }
    Ok(())
}
