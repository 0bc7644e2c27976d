//! Wiki-markup cleaning pipelines and emphasis resolution.
//!
//! This crate turns raw MediaWiki markup into the cleaned text forms the
//! rest of wikimill consumes, built on the region primitives in
//! [`wm_regions`]. It is deliberately lenient: real wiki markup is full of
//! authoring mistakes, and a construct that doesn't parse simply passes
//! through as plain text.
//!
//! # Pipelines
//!
//! - [`strip_all_but_links_and_emphasis`]: everything discardable goes;
//!   internal links, headings, list markers and emphasis stay.
//! - [`strip_internal_links`]: links are replaced by their visible text.
//! - [`strip_to_plain_text`]: both of the above composed.
//! - [`ArticleCleaner`]: the section-aware entry points, configured with
//!   locale-specific [`CleanOptions`].
//! - [`resolve_emphasis`]: apostrophe runs re-rendered as nested `<b>`/`<i>`
//!   tags, for display rather than deletion.
//!
//! Every pipeline optionally blanks regions with a filler character instead
//! of deleting them, so character offsets computed against the original
//! markup stay valid in the cleaned text:
//!
//! ```
//! use wm_markup::strip_to_plain_text;
//!
//! let markup = "A [[pip|seed]] grows.";
//! assert_eq!(strip_to_plain_text(markup, None), "A seed grows.");
//! assert_eq!(strip_to_plain_text(markup, Some('*')), "A ******seed** grows.");
//! ```

mod cleaner;
mod emphasis;
pub mod gather;
mod patterns;
mod sections;
mod stripper;

pub use cleaner::{ArticleCleaner, CleanOptions, DEFAULT_LIST_MARKERS, DEFAULT_UNWANTED_SECTIONS};
pub use emphasis::resolve_emphasis;
pub use sections::{section_regions, strip_sections};
pub use stripper::{
    clean_with_regions, strip_all_but_links_and_emphasis, strip_emphasis, strip_excess_newlines,
    strip_internal_links, strip_list_markers, strip_non_article_links, strip_section_headers,
    strip_to_plain_text,
};
