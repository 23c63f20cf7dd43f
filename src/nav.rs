//! Footer navigation taxonomy.
//!
//! The footer groups its links into four fixed categories, rendered left to
//! right in the order of [`Category::ALL`]: product, company, support, legal.
//! Entries within a category render in stored order. Both the taxonomy and
//! the link data are compiled in; nothing is loaded at runtime.
//!
//! An `href` is either an absolute path (`/about`) or a path with an anchor
//! fragment (`/#features`). Resolving them — client-side routing, scroll to
//! anchor — is the host application's concern.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("category {0} has no entries")]
    EmptyCategory(&'static str),
    #[error("duplicate link name {0:?} in category {1}")]
    DuplicateName(&'static str, &'static str),
    #[error("link {0:?} in category {1} has a non-path href: {2:?}")]
    NotAPath(&'static str, &'static str, &'static str),
}

/// A single footer link: display name and target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub name: &'static str,
    pub href: &'static str,
}

/// One of the four fixed footer link groupings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Product,
    Company,
    Support,
    Legal,
}

const PRODUCT: &[NavEntry] = &[
    NavEntry { name: "Features", href: "/#features" },
    NavEntry { name: "Pricing", href: "/pricing" },
    NavEntry { name: "Security", href: "/security" },
];

const COMPANY: &[NavEntry] = &[
    NavEntry { name: "About", href: "/about" },
    NavEntry { name: "Blog", href: "/blog" },
    NavEntry { name: "Careers", href: "/careers" },
];

const SUPPORT: &[NavEntry] = &[
    NavEntry { name: "Help Center", href: "/help" },
    NavEntry { name: "Contact", href: "/contact" },
    NavEntry { name: "Status", href: "/status" },
];

const LEGAL: &[NavEntry] = &[
    NavEntry { name: "Privacy", href: "/privacy" },
    NavEntry { name: "Terms", href: "/terms" },
    NavEntry { name: "HIPAA", href: "/hipaa" },
];

impl Category {
    /// Display order across the footer, left to right.
    pub const ALL: [Category; 4] = [
        Category::Product,
        Category::Company,
        Category::Support,
        Category::Legal,
    ];

    /// Column heading shown above the category's links.
    pub fn title(self) -> &'static str {
        match self {
            Category::Product => "Product",
            Category::Company => "Company",
            Category::Support => "Support",
            Category::Legal => "Legal",
        }
    }

    /// The category's links in stored order.
    pub fn entries(self) -> &'static [NavEntry] {
        match self {
            Category::Product => PRODUCT,
            Category::Company => COMPANY,
            Category::Support => SUPPORT,
            Category::Legal => LEGAL,
        }
    }
}

/// Validate the compiled-in taxonomy.
///
/// Every category must be non-empty, names must be unique within their
/// category, and every href must start with `/`.
pub fn check() -> Result<(), CheckError> {
    for category in Category::ALL {
        check_entries(category.title(), category.entries())?;
    }
    Ok(())
}

fn check_entries(title: &'static str, entries: &[NavEntry]) -> Result<(), CheckError> {
    if entries.is_empty() {
        return Err(CheckError::EmptyCategory(title));
    }
    for (idx, entry) in entries.iter().enumerate() {
        if entries[..idx].iter().any(|e| e.name == entry.name) {
            return Err(CheckError::DuplicateName(entry.name, title));
        }
        if !entry.href.starts_with('/') {
            return Err(CheckError::NotAPath(entry.name, title, entry.href));
        }
    }
    Ok(())
}
