//! Half-open text regions: gathering, merging and stripping.
//!
//! This crate provides the primitives the wikimill markup pipelines are
//! built from. A [`Region`] marks a `[start, end)` byte span of some text as
//! special (a template, a comment, a link, ...). Regions are produced by two
//! gatherers:
//!
//! - [`gather_simple`] / [`gather_matches`]: one regex scan for constructs
//!   that cannot nest. Output is disjoint and sorted.
//! - [`gather_complex`] / [`DelimiterPair`]: a stack-based scan pairing
//!   distinct start and end delimiters, for constructs that nest inside
//!   themselves (`[[a [[b]] c]]`). Output is end-sorted, with inner regions
//!   before the region that encloses them.
//!
//! Independent detectors are reconciled into one consistent view with
//! [`merge_regions`] (or [`collapse_regions`] for a single list), and the
//! result is applied to the text with [`strip_regions`], which either
//! deletes each region or blanks it with a filler character so that the
//! offsets of all untouched text are preserved.
//!
//! All offsets are byte offsets, the native unit of the regex crate. Every
//! function here is a pure function of its input; nothing is shared or
//! retained between calls.

mod error;
mod gather;
mod merge;
mod region;
mod strip;

pub use error::PatternError;
pub use gather::{DelimiterPair, gather_complex, gather_matches, gather_simple};
pub use merge::{collapse_regions, merge_regions};
pub use region::Region;
pub use strip::strip_regions;
