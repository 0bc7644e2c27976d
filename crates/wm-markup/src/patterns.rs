//! Compiled patterns for MediaWiki constructs.
//!
//! Simple (non-nesting) constructs are plain regexes; nesting constructs are
//! start/end [`DelimiterPair`]s. Everything here describes markup syntax, not
//! locale conventions -- those live in
//! [`CleanOptions`](crate::cleaner::CleanOptions).

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use wm_regions::DelimiterPair;

fn dotall(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .dot_matches_new_line(true)
        .build()
        .unwrap()
}

/// HTML comments, `<!-- ... -->`.
pub(crate) static COMMENT: LazyLock<Regex> = LazyLock::new(|| dotall(r"<!--(.*?)-->"));

/// `<math>` ... `</math>` pairs. Their bodies look confusingly like
/// templates, so they are cleared before anything brace-shaped is gathered.
pub(crate) static MATH: LazyLock<DelimiterPair> =
    LazyLock::new(|| DelimiterPair::new(r"<math(\s*?)([^>/]*?)>", r"</math(\s*?)>").unwrap());

/// Template braces, `{{` ... `}}`.
pub(crate) static TEMPLATE: LazyLock<DelimiterPair> =
    LazyLock::new(|| DelimiterPair::new(r"\{\{", r"\}\}").unwrap());

/// Table braces, `{|` ... `|}`.
pub(crate) static TABLE: LazyLock<DelimiterPair> =
    LazyLock::new(|| DelimiterPair::new(r"\{\|", r"\|\}").unwrap());

/// Internal link brackets, `[[` ... `]]`. These nest (links inside image
/// captions), hence a delimiter pair rather than one regex.
pub(crate) static INTERNAL_LINK: LazyLock<DelimiterPair> =
    LazyLock::new(|| DelimiterPair::new(r"\[\[", r"\]\]").unwrap());

/// `<div>` ... `</div>` pairs, contents included.
pub(crate) static DIV: LazyLock<DelimiterPair> =
    LazyLock::new(|| DelimiterPair::new(r"<div(\s*?)([^>/]*?)>", r"</div(\s*?)>").unwrap());

/// `<ref>` ... `</ref>` pairs, contents included.
pub(crate) static REF_PAIR: LazyLock<DelimiterPair> =
    LazyLock::new(|| DelimiterPair::new(r"<ref(\s*?)([^>/]*?)>", r"</ref(\s*?)>").unwrap());

/// Self-closing references, `<ref ... />`.
pub(crate) static REF_SELF_CLOSING: LazyLock<Regex> =
    LazyLock::new(|| dotall(r"<ref(\s*?)([^>]*?)/>"));

/// Any remaining single HTML tag. Only the tag itself; text between an
/// open/close pair of ordinary tags is kept.
pub(crate) static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| dotall(r"<(.*?)>"));

/// Magic words such as `__NOTOC__`.
pub(crate) static MAGIC_WORD: LazyLock<Regex> = LazyLock::new(|| dotall(r"__([A-Z]+)__"));

/// External links, `[http://...]` and friends.
pub(crate) static EXTERNAL_LINK: LazyLock<Regex> =
    LazyLock::new(|| dotall(r"\[(http|www|ftp).*?\]"));

/// Runs of two or more apostrophes (bold/italic markup).
pub(crate) static EMPHASIS_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new("'{2,}").unwrap());

/// Section headings, `== Title ==` on a line of their own.
pub(crate) static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(={2,6})[ \t]*(.*?)[ \t]*(={2,6})[ \t]*$").unwrap());

/// Three or more consecutive newlines, the gaps left by deleted templates
/// and tables.
pub(crate) static EXCESS_NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new("\n{3,}").unwrap());

/// The parts of one internal link: optional namespace prefix, destination,
/// optional anchor after a pipe.
pub(crate) static LINK_PARTS: LazyLock<Regex> =
    LazyLock::new(|| dotall(r"\A\[\[(?:(.*?):)?(.*?)(?:\|(.*?))?\]\]\z"));
