//! Gatherers for the constructs the cleaning pipelines care about.
//!
//! Each function returns regions in the shape the merger expects: simple
//! gatherers yield disjoint sorted lists, complex gatherers yield end-sorted
//! disjoint-or-nested lists, and the functions that combine several detectors
//! return an already-merged disjoint list.

use regex::Regex;
use wm_regions::{PatternError, Region, gather_matches, merge_regions};

use crate::patterns;

/// Internal links, `[[...]]`, including nested image-caption links.
#[must_use]
pub fn internal_links(text: &str) -> Vec<Region> {
    patterns::INTERNAL_LINK.gather(text)
}

/// Templates, `{{...}}`, including templates inside templates.
#[must_use]
pub fn templates(text: &str) -> Vec<Region> {
    patterns::TEMPLATE.gather(text)
}

/// Tables, `{|...|}`.
#[must_use]
pub fn tables(text: &str) -> Vec<Region> {
    patterns::TABLE.gather(text)
}

/// References: self-closing `<ref/>` tags and `<ref>...</ref>` pairs with
/// their contents, merged into one disjoint list. Reference bodies support
/// claims rather than stating them, so the whole span is discarded.
#[must_use]
pub fn references(text: &str) -> Vec<Region> {
    let self_closing = gather_matches(text, &patterns::REF_SELF_CLOSING);
    merge_regions(&self_closing, &patterns::REF_PAIR.gather(text))
}

/// HTML regions: references and `<div>` pairs with their contents, plus
/// every remaining single tag (tag only; text between ordinary open/close
/// tags is kept).
#[must_use]
pub fn html_regions(text: &str) -> Vec<Region> {
    let regions = references(text);
    let regions = merge_regions(&regions, &patterns::DIV.gather(text));
    merge_regions(&regions, &gather_matches(text, &patterns::HTML_TAG))
}

/// Magic words such as `__NOTOC__`.
#[must_use]
pub fn magic_words(text: &str) -> Vec<Region> {
    gather_matches(text, &patterns::MAGIC_WORD)
}

/// External links, `[http://...]`.
#[must_use]
pub fn external_links(text: &str) -> Vec<Region> {
    gather_matches(text, &patterns::EXTERNAL_LINK)
}

/// Runs of two or more apostrophes.
#[must_use]
pub fn emphasis_runs(text: &str) -> Vec<Region> {
    gather_matches(text, &patterns::EMPHASIS_RUN)
}

/// Section headings, `== Title ==` lines.
#[must_use]
pub fn section_headings(text: &str) -> Vec<Region> {
    gather_matches(text, &patterns::HEADING)
}

/// List and indent markers at line starts, built from the given marker
/// character set (`#*:;` for English Wikipedia).
///
/// Newline-anchored matches are shifted one byte right so the newline itself
/// is never part of the region, then merged with a match on the very first
/// line, which has no newline before it.
pub fn list_and_indent_markers(text: &str, markers: &str) -> Result<Vec<Region>, PatternError> {
    let class = regex::escape(markers);
    let after_newline = Regex::new(&format!("\n( *)([{class}]+)"))?;
    let at_start = Regex::new(&format!(r"\A( *)([{class}]+)"))?;

    let mut regions = gather_matches(text, &after_newline);
    for region in &mut regions {
        region.start += 1;
    }
    Ok(merge_regions(&regions, &gather_matches(text, &at_start)))
}

/// The "misformatted start" heuristic: leading lines that are blank or
/// colon-indented correspond to quotes and disambiguation notes the author
/// should have marked up with templates, but didn't. Returns at most one
/// region, anchored at offset zero. Only meaningful after templates have
/// been cleared and before list markers are.
#[must_use]
pub fn misformatted_start(text: &str) -> Vec<Region> {
    let mut ignore_until = 0;
    for line in text.split('\n') {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with(':') {
            // +1 for the newline; the last line may not have one.
            ignore_until = (ignore_until + line.len() + 1).min(text.len());
        } else {
            break;
        }
    }

    if ignore_until == 0 {
        vec![]
    } else {
        vec![Region::new(0, ignore_until)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_template_of_templates() {
        let text = "{{outer {{inner}} }}";
        let regions = templates(text);
        assert_eq!(regions, vec![Region::new(8, 17), Region::new(0, 20)]);
    }

    #[test]
    fn test_references_merge_both_forms() {
        let text = "a<ref name=x/>b<ref>cite</ref>c";
        let regions = references(text);
        assert_eq!(regions, vec![Region::new(1, 14), Region::new(15, 30)]);
    }

    #[test]
    fn test_html_regions_keep_ordinary_tag_contents() {
        let text = "<b>kept</b> <div>gone</div>";
        let regions = html_regions(text);
        // The <b> tags are regions but "kept" is not; the div span is whole.
        assert_eq!(
            regions,
            vec![
                Region::new(0, 3),
                Region::new(7, 11),
                Region::new(12, 27),
            ]
        );
    }

    #[test]
    fn test_magic_words() {
        assert_eq!(magic_words("__TOC__ x"), vec![Region::new(0, 7)]);
        assert_eq!(magic_words("__lower__ x"), vec![]);
    }

    #[test]
    fn test_external_link_forms() {
        let text = "[http://x.org y] and [ftp://z]";
        let regions = external_links(text);
        assert_eq!(regions, vec![Region::new(0, 16), Region::new(21, 30)]);
    }

    #[test]
    fn test_list_markers_exclude_the_newline() {
        let text = "* first\n** second\n: indent";
        let regions = list_and_indent_markers(text, "#*:;").unwrap();
        assert_eq!(
            regions,
            vec![Region::new(0, 1), Region::new(8, 10), Region::new(18, 19)]
        );
    }

    #[test]
    fn test_list_markers_empty_set_is_config_error() {
        assert!(list_and_indent_markers("* a", "").is_err());
    }

    #[test]
    fn test_misformatted_start_gathers_leading_boilerplate() {
        let text = "\n:''For the fruit, see...''\n\nThe article.";
        let regions = misformatted_start(text);
        assert_eq!(regions, vec![Region::new(0, 29)]);
        assert!(text[29..].starts_with("The article"));
    }

    #[test]
    fn test_misformatted_start_clean_article_has_no_region() {
        assert_eq!(misformatted_start("The article begins."), vec![]);
    }

    #[test]
    fn test_misformatted_start_whole_text() {
        // Every line indented, final line without a newline: the region is
        // clamped to the text length.
        let text = ": a\n: b";
        assert_eq!(misformatted_start(text), vec![Region::new(0, 7)]);
    }

    #[test]
    fn test_section_headings() {
        let text = "intro\n== See also ==\n* x\n=== Deep ===\n";
        let regions = section_headings(text);
        assert_eq!(regions, vec![Region::new(6, 20), Region::new(25, 37)]);
    }
}
