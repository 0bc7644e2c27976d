//! High-level article cleaning for training and display.
//!
//! Wraps the pipelines in [`crate::stripper`] with the locale-specific
//! configuration they need: which section titles are boilerplate and which
//! characters mark list items. Nothing here is markup syntax; a non-English
//! wiki supplies its own [`CleanOptions`].

use wm_regions::PatternError;

use crate::{sections, stripper};

/// Section titles that carry no prose worth keeping, for English Wikipedia.
pub const DEFAULT_UNWANTED_SECTIONS: &[&str] = &[
    "see also",
    "references",
    "further sources",
    "further reading",
    "footnotes",
    "external links",
    "bibliography",
    "notes",
    "notes and references",
    "other websites",
];

/// List and indent marker characters, for English Wikipedia.
pub const DEFAULT_LIST_MARKERS: &str = "#*:;";

/// Locale configuration for article cleaning.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CleanOptions {
    /// Section titles to strip wholesale, matched case-insensitively.
    pub unwanted_sections: Vec<String>,
    /// Characters that mark list items and indentation at line starts.
    pub list_markers: String,
    /// Blank stripped spans with this character instead of deleting them,
    /// keeping the output the same length as the input.
    pub filler: Option<char>,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            unwanted_sections: DEFAULT_UNWANTED_SECTIONS
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
            list_markers: DEFAULT_LIST_MARKERS.to_owned(),
            filler: None,
        }
    }
}

/// Cleans wiki articles into the two forms the rest of the system consumes:
/// links-only text for mining anchor/target training pairs, and plain text
/// for snippets and document statistics.
#[derive(Debug, Clone, Default)]
pub struct ArticleCleaner {
    options: CleanOptions,
}

impl ArticleCleaner {
    /// Create a cleaner with the given locale options.
    #[must_use]
    pub fn new(options: CleanOptions) -> Self {
        Self { options }
    }

    /// The options this cleaner was built with.
    #[must_use]
    pub fn options(&self) -> &CleanOptions {
        &self.options
    }

    /// Strip everything except internal links: unwanted sections, section
    /// headers and emphasis go too. What remains is prose with `[[...]]`
    /// markup intact, ready for anchor/target pair extraction.
    #[must_use]
    pub fn links_only(&self, markup: &str) -> String {
        let filler = self.options.filler;
        let text = stripper::strip_all_but_links_and_emphasis(markup, filler);
        let text = sections::strip_sections(&text, &self.options.unwanted_sections, filler);
        let text = stripper::strip_section_headers(&text, filler);
        stripper::strip_emphasis(&text, filler)
    }

    /// Strip all markup, links included. With no filler configured,
    /// list markers are removed and the gaps left by deleted constructs are
    /// closed up; with a filler, every surviving character keeps its
    /// original offset instead.
    pub fn plain_text(&self, markup: &str) -> Result<String, PatternError> {
        let filler = self.options.filler;
        let text = stripper::strip_to_plain_text(markup, filler);
        let text = sections::strip_sections(&text, &self.options.unwanted_sections, filler);
        let text = stripper::strip_section_headers(&text, filler);
        let text = stripper::strip_emphasis(&text, filler);
        let text = stripper::strip_list_markers(&text, &self.options.list_markers, filler)?;
        Ok(if filler.is_none() {
            stripper::strip_excess_newlines(&text)
        } else {
            text
        })
    }
}
