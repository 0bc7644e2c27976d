//! Region gatherers.
//!
//! Simple gathering is one regex scan and is used for constructs that can
//! never contain themselves (magic words, external links, emphasis runs, list
//! markers, single HTML tags). Complex gathering pairs distinct start and end
//! delimiters through an explicit stack and is used for constructs that nest
//! (internal links, templates, tables, ref/div pairs).

use regex::{Regex, RegexBuilder};
use tracing::trace;

use crate::{PatternError, Region};

/// Gather every match of `pattern` as a region.
///
/// The pattern is compiled in dot-matches-all mode, since wiki constructs
/// routinely span line breaks. Matches cannot overlap, so the output is both
/// start- and end-sorted and pairwise disjoint.
pub fn gather_simple(text: &str, pattern: &str) -> Result<Vec<Region>, PatternError> {
    let re = RegexBuilder::new(pattern).dot_matches_new_line(true).build()?;
    Ok(gather_matches(text, &re))
}

/// Gather every match of a pre-compiled regex as a region.
///
/// Same contract as [`gather_simple`], for callers that keep their patterns
/// compiled. Dot-matches-all behavior is whatever the regex was built with.
#[must_use]
pub fn gather_matches(text: &str, re: &Regex) -> Vec<Region> {
    re.find_iter(text)
        .map(|m| Region::new(m.start(), m.end()))
        .collect()
}

/// Gather regions delimited by distinct, possibly nested start/end markers.
///
/// See [`DelimiterPair::gather`] for the matching rules. Use a
/// [`DelimiterPair`] directly when the same pattern pair is applied to many
/// texts.
pub fn gather_complex(
    text: &str,
    start_pattern: &str,
    end_pattern: &str,
) -> Result<Vec<Region>, PatternError> {
    Ok(DelimiterPair::new(start_pattern, end_pattern)?.gather(text))
}

/// A compiled start/end delimiter pattern pair for complex region gathering.
///
/// The two patterns are combined into one alternation using the named groups
/// `open` and `close`, so patterns containing their own capture groups cannot
/// shift anything. Patterns that themselves define groups with those names
/// fail to compile.
#[derive(Debug, Clone)]
pub struct DelimiterPair {
    re: Regex,
}

impl DelimiterPair {
    /// Compile a start/end pattern pair, in dot-matches-all mode.
    pub fn new(start_pattern: &str, end_pattern: &str) -> Result<Self, PatternError> {
        let re = RegexBuilder::new(&format!("(?P<open>{start_pattern})|(?P<close>{end_pattern})"))
            .dot_matches_new_line(true)
            .build()?;
        Ok(Self { re })
    }

    /// Gather matched (start, end) delimiter pairs as regions.
    ///
    /// A single left-to-right scan matches either delimiter. A start match
    /// pushes its position; an end match pops the most recent start and emits
    /// the enclosed region. An end with nothing open is an orphan and is
    /// silently ignored, and starts still open when the scan finishes are
    /// discarded -- both are routine wiki authoring mistakes, not errors.
    ///
    /// The output is end-sorted: a region always appears after every region
    /// nested inside it, and regions are either disjoint or cleanly nested,
    /// never partially overlapping.
    #[must_use]
    pub fn gather(&self, text: &str) -> Vec<Region> {
        let mut regions = Vec::new();
        let mut open_stack: Vec<usize> = Vec::new();

        for caps in self.re.captures_iter(text) {
            if let Some(open) = caps.name("open") {
                open_stack.push(open.start());
            } else if let Some(close) = caps.name("close") {
                if let Some(start) = open_stack.pop() {
                    regions.push(Region::new(start, close.end()));
                } else {
                    trace!(offset = close.start(), "ignoring orphan end delimiter");
                }
            }
        }

        if !open_stack.is_empty() {
            trace!(
                count = open_stack.len(),
                "discarding unterminated constructs"
            );
        }

        regions
    }
}
