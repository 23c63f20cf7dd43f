//! Site footer fragment.
//!
//! The footer is a pure function of the current year. [`render_footer`]
//! takes the year explicitly so tests can pin it; [`footer`] is the
//! zero-argument render the write stage uses, reading the year once from
//! the system clock. Nothing is cached — two renders in different years
//! produce different bottom bars, renders within a year are byte-identical.
//!
//! Structure:
//!
//! 1. Brand block: inline SVG mark + product name + tagline, linking to `/`
//! 2. One column per [`Category`], in [`Category::ALL`] order
//! 3. Bottom bar: copyright line + credit line

use crate::nav::Category;
use chrono::{Datelike, Local};
use maud::{Markup, html};

/// Product name shown in the brand block and the copyright line.
const BRAND_NAME: &str = "CareConnect";

/// One-line tagline under the brand mark.
const TAGLINE: &str = "Modern healthcare for everyone, everywhere.";

/// Render the footer with the year read from the system clock.
pub fn footer() -> Markup {
    render_footer(Local::now().year())
}

/// Render the footer for a specific copyright year.
pub fn render_footer(year: i32) -> Markup {
    html! {
        footer.site-footer {
            div.footer-inner {
                div.footer-grid {
                    div.footer-brand {
                        a.brand-link href="/" {
                            (brand_mark())
                            span.brand-name { (BRAND_NAME) }
                        }
                        p.brand-tagline { (TAGLINE) }
                    }
                    @for category in Category::ALL {
                        div.footer-column {
                            h3.column-title { (category.title()) }
                            ul.column-links {
                                @for entry in category.entries() {
                                    li {
                                        a href=(entry.href) { (entry.name) }
                                    }
                                }
                            }
                        }
                    }
                }
                div.footer-bottom {
                    p.footer-copyright {
                        "© " (year) " " (BRAND_NAME) ". All rights reserved."
                    }
                    p.footer-credit {
                        "Made with " span.credit-heart { "♥" } " for better healthcare"
                    }
                }
            }
        }
    }
}

/// Inline SVG brand mark: a cross in a circle, colored by `currentColor`.
fn brand_mark() -> Markup {
    html! {
        svg.brand-mark viewBox="0 0 24 24" width="28" height="28" aria-hidden="true" {
            circle cx="12" cy="12" r="11" fill="none" stroke="currentColor" stroke-width="2" {}
            path d="M12 7v10M7 12h10" stroke="currentColor" stroke-width="2" stroke-linecap="round" {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_columns_in_fixed_order() {
        let html = render_footer(2026).into_string();
        let product = html.find("Product").unwrap();
        let company = html.find("Company").unwrap();
        let support = html.find("Support").unwrap();
        let legal = html.find("Legal").unwrap();
        assert!(product < company);
        assert!(company < support);
        assert!(support < legal);
        assert_eq!(html.matches("footer-column").count(), 4);
    }

    #[test]
    fn columns_list_entries_in_stored_order() {
        let html = render_footer(2026).into_string();
        let features = html.find(r#"href="/#features""#).unwrap();
        let pricing = html.find(r#"href="/pricing""#).unwrap();
        let security = html.find(r#"href="/security""#).unwrap();
        assert!(features < pricing);
        assert!(pricing < security);
    }

    #[test]
    fn every_entry_renders_name_and_href() {
        let html = render_footer(2026).into_string();
        for category in Category::ALL {
            for entry in category.entries() {
                assert!(html.contains(entry.name), "{}", entry.name);
                assert!(
                    html.contains(&format!(r#"href="{}""#, entry.href)),
                    "{}",
                    entry.href
                );
            }
        }
    }

    #[test]
    fn brand_links_to_site_root() {
        let html = render_footer(2026).into_string();
        assert!(html.contains(r#"class="brand-link" href="/""#));
        assert!(html.contains("CareConnect"));
        assert!(html.contains("Modern healthcare for everyone, everywhere."));
    }

    #[test]
    fn copyright_line_uses_given_year() {
        let html = render_footer(2031).into_string();
        assert!(html.contains("© 2031 CareConnect. All rights reserved."));
    }

    #[test]
    fn footer_uses_current_system_year() {
        let html = footer().into_string();
        let year = Local::now().year();
        assert!(html.contains(&format!("© {year} CareConnect. All rights reserved.")));
    }

    #[test]
    fn rerender_within_a_year_is_byte_identical() {
        // The clock read can only change the output at a year boundary
        assert_eq!(footer().into_string(), footer().into_string());
    }

    #[test]
    fn credit_line_present() {
        let html = render_footer(2026).into_string();
        assert!(html.contains("for better healthcare"));
    }

    #[test]
    fn brand_mark_is_inline_svg() {
        let html = render_footer(2026).into_string();
        assert!(html.contains("<svg"));
        assert!(html.contains(r#"aria-hidden="true""#));
    }
}
