//! Markup cleaning pipelines.
//!
//! Cleaning runs in a fixed gather/merge/strip order because later detectors
//! only work on text earlier stages have cleared: comment and math bodies
//! contain braces and pipes that would corrupt template and table detection,
//! and a template's trailing `}}` reads as a table close `|}` until templates
//! are gone.
//!
//! Every pipeline takes an optional filler character. With a filler, regions
//! are blanked instead of deleted, so the output keeps the input's byte
//! length and all surviving text keeps its original offsets -- the contract
//! downstream consumers (link position indices, sentence boundaries) depend
//! on.

use tracing::debug;
use wm_regions::{Region, gather_matches, merge_regions, strip_regions};

use crate::{gather, patterns};

/// Remove all markup except internal links, section headings, list markers
/// and emphasis.
///
/// Stages, in order: comments and math; templates; tables, HTML, external
/// links and magic words together; then the misformatted leading paragraph
/// heuristic on the cleared text.
#[must_use]
pub fn strip_all_but_links_and_emphasis(text: &str, filler: Option<char>) -> String {
    let (cleared, _) = clean_stages(text, filler);
    cleared
}

/// Like [`strip_all_but_links_and_emphasis`] with a mandatory filler, but
/// also returns the merged list of every blanked region, in original-text
/// offsets.
///
/// Because blanking preserves offsets across stages, regions gathered from
/// later, partially-cleared text still index correctly into the original;
/// callers that store link positions against the raw markup intersect them
/// with this list.
#[must_use]
pub fn clean_with_regions(text: &str, filler: char) -> (String, Vec<Region>) {
    clean_stages(text, Some(filler))
}

// The accumulated region list is only meaningful with a filler, which keeps
// offsets stable across stages; the delete path discards it.
fn clean_stages(text: &str, filler: Option<char>) -> (String, Vec<Region>) {
    // Comments and math first; their bodies mislead every later detector.
    let mut regions = gather_matches(text, &patterns::COMMENT);
    regions = merge_regions(&regions, &patterns::MATH.gather(text));
    let mut all = regions.clone();
    let cleared = strip_regions(text, &regions, filler);
    debug!(regions = regions.len(), "stripped comments and math");

    // Templates next; `}}` confuses table gathering.
    let regions = gather::templates(&cleared);
    all = merge_regions(&all, &regions);
    let cleared = strip_regions(&cleared, &regions, filler);
    debug!(regions = regions.len(), "stripped templates");

    // Everything else we discard, in one merged pass.
    let mut regions = gather::tables(&cleared);
    regions = merge_regions(&regions, &gather::html_regions(&cleared));
    regions = merge_regions(&regions, &gather::external_links(&cleared));
    regions = merge_regions(&regions, &gather::magic_words(&cleared));
    all = merge_regions(&all, &regions);
    let cleared = strip_regions(&cleared, &regions, filler);
    debug!(regions = regions.len(), "stripped tables, html and links");

    // Leading boilerplate only shows once the above is cleared.
    let starts = gather::misformatted_start(&cleared);
    all = merge_regions(&all, &starts);
    let cleared = strip_regions(&cleared, &starts, filler);

    (cleared, all)
}

/// How [`rewrite_internal_links`] treats links without a namespace prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkPolicy {
    /// Replace article links with their visible text (anchor or destination).
    KeepVisibleText,
    /// Leave article links untouched; only prefixed links go.
    KeepArticleLinks,
}

/// Remove internal links, keeping each article link's visible text.
///
/// A link with a namespace prefix (`[[Category:...]]`, interlanguage links)
/// is removed entirely. A piped link keeps only its anchor text; a bare link
/// keeps its destination. With a filler, the markup characters are blanked
/// instead so the visible text keeps its original offsets.
#[must_use]
pub fn strip_internal_links(text: &str, filler: Option<char>) -> String {
    rewrite_internal_links(text, filler, LinkPolicy::KeepVisibleText)
}

/// Remove only internal links that do not point at articles (categories,
/// interlanguage links and other namespace-prefixed destinations), leaving
/// article links intact.
#[must_use]
pub fn strip_non_article_links(text: &str, filler: Option<char>) -> String {
    rewrite_internal_links(text, filler, LinkPolicy::KeepArticleLinks)
}

fn rewrite_internal_links(text: &str, filler: Option<char>, policy: LinkPolicy) -> String {
    let regions = gather::internal_links(text);

    // Only the outermost link regions are rewritten; anything nested is
    // caption markup inside them and goes along for the ride.
    let mut outermost = Vec::with_capacity(regions.len());
    let mut last_pos = text.len();
    for region in regions.iter().rev() {
        if region.start < last_pos {
            outermost.push(*region);
            last_pos = region.start;
        }
    }
    outermost.reverse();

    let mut stripped = String::with_capacity(text.len());
    let mut cursor = 0;
    for region in &outermost {
        stripped.push_str(&text[cursor..region.start]);
        stripped.push_str(&rewrite_link(&text[region.start..region.end], filler, policy));
        cursor = region.end;
    }
    stripped.push_str(&text[cursor..]);
    stripped
}

fn rewrite_link(link: &str, filler: Option<char>, policy: LinkPolicy) -> String {
    let Some(caps) = patterns::LINK_PARTS.captures(link) else {
        // Not a shape we understand; keep the markup untouched.
        return link.to_owned();
    };

    let prefix = caps.get(1);
    let dest = caps.get(2).map_or("", |m| m.as_str());
    let anchor = caps.get(3);

    if prefix.is_some() {
        // Not a link to an article: the whole construct goes.
        return match filler {
            Some(fill) => blank(link, fill),
            None => String::new(),
        };
    }
    if policy == LinkPolicy::KeepArticleLinks {
        return link.to_owned();
    }

    match (anchor, filler) {
        // [[dest|anchor]] -> anchor, with the brackets, destination and
        // pipe blanked: 2 + dest + 1 fillers, the anchor, 2 fillers.
        (Some(anchor), Some(fill)) => {
            let mut out = String::with_capacity(link.len());
            out.push(fill);
            out.push(fill);
            out.push_str(&blank(dest, fill));
            out.push(fill);
            out.push_str(anchor.as_str());
            out.push(fill);
            out.push(fill);
            out
        }
        (Some(anchor), None) => anchor.as_str().to_owned(),
        // [[dest]] -> dest, brackets blanked.
        (None, Some(fill)) => format!("{fill}{fill}{dest}{fill}{fill}"),
        (None, None) => dest.to_owned(),
    }
}

/// Blank every byte except newlines, preserving length.
fn blank(text: &str, fill: char) -> String {
    text.bytes()
        .map(|b| if b == b'\n' { '\n' } else { fill })
        .collect()
}

/// Remove everything: the plain reading text of an article.
///
/// Composition of [`strip_all_but_links_and_emphasis`] and
/// [`strip_internal_links`]; emphasis runs and headings survive and can be
/// handled separately (resolved, stripped, or used as boundaries).
#[must_use]
pub fn strip_to_plain_text(text: &str, filler: Option<char>) -> String {
    let cleared = strip_all_but_links_and_emphasis(text, filler);
    strip_internal_links(&cleared, filler)
}

/// Remove section heading lines (`== Title ==`).
#[must_use]
pub fn strip_section_headers(text: &str, filler: Option<char>) -> String {
    strip_regions(text, &gather::section_headings(text), filler)
}

/// Remove bold/italic apostrophe runs.
#[must_use]
pub fn strip_emphasis(text: &str, filler: Option<char>) -> String {
    strip_regions(text, &gather::emphasis_runs(text), filler)
}

/// Remove list and indent markers at line starts.
pub fn strip_list_markers(
    text: &str,
    markers: &str,
    filler: Option<char>,
) -> Result<String, wm_regions::PatternError> {
    let regions = gather::list_and_indent_markers(text, markers)?;
    Ok(strip_regions(text, &regions, filler))
}

/// Collapse runs of three or more newlines to two, closing the gaps that
/// deleting templates and tables leaves behind. Changes offsets; never used
/// in the filler pipelines.
#[must_use]
pub fn strip_excess_newlines(text: &str) -> String {
    patterns::EXCESS_NEWLINES.replace_all(text, "\n\n").into_owned()
}
