//! Fragment generation.
//!
//! The write stage. Renders every fragment and writes the output directory
//! the host application consumes:
//!
//! ```text
//! dist/
//! ├── footer.html       # Site footer fragment
//! ├── side-panel.html   # Dashboard side-panel image cards
//! ├── health-tips.html  # Dashboard health tips list
//! ├── side-images.json  # Image catalog manifest
//! └── index.html        # Preview page embedding every fragment
//! ```
//!
//! The fragments are bare markup — no document shell, no styles — so the
//! host includes them verbatim. Only the preview page is a full document:
//! it inlines the config-derived CSS custom properties plus the embedded
//! stylesheet so the fragments can be eyeballed in a browser without the
//! host app.

use crate::config::{self, SiteConfig};
use crate::{catalog, footer, nav, panel, tips};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// What the write stage produced, for CLI reporting.
#[derive(Debug)]
pub struct GenerateSummary {
    /// Filenames written under the output directory, in write order.
    pub files: Vec<&'static str>,
    pub columns: usize,
    pub links: usize,
    pub images: usize,
    pub tips: usize,
}

pub fn generate(output_dir: &Path, config: &SiteConfig) -> Result<GenerateSummary, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let footer_markup = footer::footer();
    let side_panel = panel::render_side_panel();
    let tips_markup = panel::render_tips();

    fs::write(
        output_dir.join("footer.html"),
        footer_markup.clone().into_string(),
    )?;
    fs::write(
        output_dir.join("side-panel.html"),
        side_panel.clone().into_string(),
    )?;
    fs::write(
        output_dir.join("health-tips.html"),
        tips_markup.clone().into_string(),
    )?;

    let manifest = serde_json::to_string_pretty(catalog::side_images())?;
    fs::write(output_dir.join("side-images.json"), manifest)?;

    let css = format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        config::generate_theme_css(&config.theme),
        CSS_STATIC,
    );
    let preview = preview_document(&css, footer_markup, side_panel, tips_markup);
    fs::write(output_dir.join("index.html"), preview.into_string())?;

    Ok(GenerateSummary {
        files: vec![
            "footer.html",
            "side-panel.html",
            "health-tips.html",
            "side-images.json",
            "index.html",
        ],
        columns: nav::Category::ALL.len(),
        links: nav::Category::ALL.iter().map(|c| c.entries().len()).sum(),
        images: catalog::side_images().len(),
        tips: tips::health_tips().len(),
    })
}

/// Full HTML document embedding every fragment, used for the preview page.
fn preview_document(css: &str, footer: Markup, side_panel: Markup, tips: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "CareConnect fragment preview" }
                style { (PreEscaped(css)) }
            }
            body {
                main.preview-main {
                    (side_panel)
                    (tips)
                }
                (footer)
            }
        }
    }
}
