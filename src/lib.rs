//! # CareConnect Site
//!
//! Static fragment generator for the CareConnect web shell. The site's fixed
//! presentational data — footer navigation, dashboard side-panel images,
//! health tips — is compiled into this binary and rendered to self-contained
//! HTML fragments the host application includes verbatim.
//!
//! # Architecture: Data → Render → Write
//!
//! ```text
//! 1. Data     catalog / nav / tips   (compiled-in ordered tables)
//! 2. Render   footer / panel         (pure maud markup functions)
//! 3. Write    generate               (dist/: fragments + manifest + preview)
//! ```
//!
//! The stages are kept separate for two reasons:
//!
//! - **Testability**: everything before the write stage is a pure function,
//!   so unit tests can assert on markup without touching the filesystem.
//! - **Host independence**: fragments carry no document shell or styles, so
//!   the host app controls where and how they mount. Only the preview page
//!   is a full document.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Dashboard side-panel image catalog: ordered records + validation |
//! | [`nav`] | Footer link taxonomy: four fixed categories, ordered entries |
//! | [`tips`] | Dashboard health tips, in rotation order |
//! | [`footer`] | Site footer renderer — pure in the copyright year |
//! | [`panel`] | Side-panel and tips fragment renderers |
//! | [`config`] | `config.toml` loading and CSS custom-property generation |
//! | [`generate`] | Write stage — fragments, JSON manifest, preview page |
//! | [`output`] | CLI output formatting — content inventory and render summaries |
//!
//! # Design Decisions
//!
//! ## Data Is Compiled In
//!
//! The catalog, taxonomy, and tips change only when the site's content
//! owners change them, which happens in code review, not at runtime. Static
//! tables of `&'static str` make the ordering and immutability invariants
//! structural: there is nothing to load, cache, or invalidate, and a bad
//! edit fails `check` before anything ships.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error, interpolation is
//! auto-escaped, and there is no template directory to ship or drift out of
//! sync with the data modules.
//!
//! ## Fragments, Not Pages
//!
//! The host application owns routing, theming, and layout. This crate emits
//! bare fragments plus CSS custom properties, so the host can restyle
//! everything by supplying its own property values — the embedded stylesheet
//! only ever consumes the properties.
//!
//! ## The Clock Stops at the Year
//!
//! The only non-static input anywhere is the copyright year, read once per
//! render in [`footer::footer`]. The underlying [`footer::render_footer`]
//! takes the year as a parameter, so every test can pin it and the
//! year-boundary behavior is exercised without mocking a clock.

pub mod catalog;
pub mod config;
pub mod footer;
pub mod generate;
pub mod nav;
pub mod output;
pub mod panel;
pub mod tips;
