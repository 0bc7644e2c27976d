//! Stripping whole sections by heading title.
//!
//! Articles end in boilerplate sections ("see also", "references", ...) that
//! carry no prose worth training on. A section spans from its heading line to
//! the next heading at the same or a shallower level, or to the end of the
//! text. Which titles are unwanted is locale configuration, passed in by the
//! caller.

use wm_regions::{Region, collapse_regions, strip_regions};

use crate::patterns;

/// Remove every section whose heading title matches one of `titles`,
/// case-insensitively. Heading depth does not matter for matching, only for
/// finding where the section ends.
#[must_use]
pub fn strip_sections<S: AsRef<str>>(text: &str, titles: &[S], filler: Option<char>) -> String {
    strip_regions(text, &section_regions(text, titles), filler)
}

/// Gather the regions covered by unwanted sections, end-sorted and
/// pairwise disjoint.
#[must_use]
pub fn section_regions<S: AsRef<str>>(text: &str, titles: &[S]) -> Vec<Region> {
    let headings: Vec<Heading> = patterns::HEADING
        .captures_iter(text)
        .map(|caps| {
            let whole = caps.get(0).expect("whole match is always present");
            Heading {
                start: whole.start(),
                level: caps.get(1).map_or(2, |m| m.len()),
                title: caps.get(2).map_or("", |m| m.as_str()),
            }
        })
        .collect();

    let mut regions = Vec::new();
    for (i, heading) in headings.iter().enumerate() {
        if !heading.is_any_of(titles) {
            continue;
        }
        let end = headings[i + 1..]
            .iter()
            .find(|next| next.level <= heading.level)
            .map_or(text.len(), |next| next.start);
        regions.push(Region::new(heading.start, end));
    }

    // An unwanted subsection inside an unwanted section produces nesting;
    // order by end (inner before outer) and collapse to a disjoint set.
    regions.sort_by(|a, b| a.end.cmp(&b.end).then(b.start.cmp(&a.start)));
    collapse_regions(&regions)
}

struct Heading<'t> {
    start: usize,
    level: usize,
    title: &'t str,
}

impl Heading<'_> {
    fn is_any_of<S: AsRef<str>>(&self, titles: &[S]) -> bool {
        let title = self.title.trim().to_lowercase();
        titles.iter().any(|t| t.as_ref().to_lowercase() == title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ARTICLE: &str = "Intro.\n\
         == History ==\n\
         Old times.\n\
         == See also ==\n\
         * [[Other]]\n\
         == Legacy ==\n\
         Still here.\n";

    #[test]
    fn test_strips_matched_section_until_next_heading() {
        let out = strip_sections(ARTICLE, &["see also"], None);
        assert_eq!(
            out,
            "Intro.\n== History ==\nOld times.\n== Legacy ==\nStill here.\n"
        );
    }

    #[test]
    fn test_title_match_is_case_insensitive() {
        let out = strip_sections(ARTICLE, &["SEE ALSO"], None);
        assert!(!out.contains("[[Other]]"));
    }

    #[test]
    fn test_subsections_go_with_their_section() {
        let text = "a\n== References ==\ncites\n=== Web ===\nurls\n== Next ==\nkept\n";
        let out = strip_sections(text, &["references"], None);
        assert_eq!(out, "a\n== Next ==\nkept\n");
    }

    #[test]
    fn test_section_at_end_of_text() {
        let text = "a\n== Notes ==\ntrailing";
        assert_eq!(strip_sections(text, &["notes"], None), "a\n");
    }

    #[test]
    fn test_unmatched_titles_strip_nothing() {
        assert_eq!(strip_sections(ARTICLE, &["bibliography"], None), ARTICLE);
    }

    #[test]
    fn test_filler_preserves_length() {
        let out = strip_sections(ARTICLE, &["see also"], Some(' '));
        assert_eq!(out.len(), ARTICLE.len());
        assert!(out.contains("Still here."));
    }

    #[test]
    fn test_nested_unwanted_sections_collapse() {
        let text = "x\n== See also ==\n=== Notes ===\nboth gone\n";
        let regions = section_regions(text, &["see also", "notes"]);
        assert_eq!(regions, vec![Region::new(2, text.len())]);
    }
}
