//! Dashboard side-panel and health-tips fragments.
//!
//! Consumer-side markup for the static data modules: the image catalog
//! becomes a column of figure cards, the tips become an ordered list. Both
//! renderers are pure — the host app mounts the fragments and owns cycling
//! and image-load fallback.

use crate::{catalog, tips};
use maud::{Markup, html};

/// Render the side-panel image cards in catalog order.
pub fn render_side_panel() -> Markup {
    html! {
        aside.side-panel {
            @for record in catalog::side_images() {
                figure.side-card {
                    img src=(record.url) alt=(record.title) loading="lazy";
                    figcaption {
                        span.side-title { (record.title) }
                        span.side-caption { (record.caption) }
                    }
                }
            }
        }
    }
}

/// Render the health tips as an ordered list, rotation order preserved.
pub fn render_tips() -> Markup {
    html! {
        section.health-tips {
            h2.tips-heading { "Health Tips" }
            ol.tips-list {
                @for tip in tips::health_tips() {
                    li { (tip.text) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_panel_renders_every_image() {
        let html = render_side_panel().into_string();
        for record in catalog::side_images() {
            assert!(html.contains(record.title), "{}", record.title);
            assert!(html.contains(record.caption), "{}", record.caption);
        }
        assert_eq!(html.matches("<figure").count(), catalog::side_images().len());
    }

    #[test]
    fn side_panel_images_lazy_load() {
        let html = render_side_panel().into_string();
        assert_eq!(
            html.matches(r#"loading="lazy""#).count(),
            catalog::side_images().len()
        );
    }

    #[test]
    fn side_panel_titles_double_as_alt_text() {
        let html = render_side_panel().into_string();
        assert!(html.contains(r#"alt="Doctor Consultation""#));
    }

    #[test]
    fn side_panel_preserves_catalog_order() {
        let html = render_side_panel().into_string();
        let first = html.find("Doctor Consultation").unwrap();
        let second = html.find("Telemedicine").unwrap();
        let third = html.find("Health Records").unwrap();
        assert!(first < second);
        assert!(second < third);
    }

    #[test]
    fn tips_render_as_ordered_list() {
        let html = render_tips().into_string();
        assert!(html.contains("<ol"));
        assert_eq!(html.matches("<li>").count(), tips::health_tips().len());
    }

    #[test]
    fn tips_keep_rotation_order() {
        let html = render_tips().into_string();
        let hydration = html.find("stay hydrated").unwrap();
        let sunscreen = html.find("wearing sunscreen").unwrap();
        assert!(hydration < sunscreen);
    }
}
