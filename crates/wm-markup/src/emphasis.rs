//! Resolving apostrophe emphasis into nested HTML tags.
//!
//! MediaWiki marks emphasis with runs of apostrophes: two for italic, three
//! for bold, five for both at once. The same run both opens and closes, and a
//! five-run can close a bold and an italic that were opened separately, so
//! the runs cannot be resolved pairwise -- a stack machine walks them left to
//! right, splitting five-runs against whatever is open.
//!
//! Runs of any other length (four, six or more) carry no defined meaning and
//! pass through as plain apostrophes, as does anything still open when the
//! text ends.

use tracing::trace;

use crate::patterns;

const ITALIC_WIDTH: usize = 2;
const BOLD_WIDTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Italic,
    Bold,
    BoldItalic,
}

impl Kind {
    fn from_run(len: usize) -> Option<Self> {
        match len {
            2 => Some(Self::Italic),
            3 => Some(Self::Bold),
            5 => Some(Self::BoldItalic),
            _ => None,
        }
    }
}

/// An apostrophe run that has been seen but not yet closed.
#[derive(Debug, Clone, Copy)]
struct Open {
    start: usize,
    end: usize,
    kind: Kind,
}

/// One edge of a resolved emphasis span: the run (or part of a run) it
/// replaces, and which tag it becomes.
#[derive(Debug, Clone, Copy)]
struct Edge {
    start: usize,
    end: usize,
    kind: Kind,
    closing: bool,
}

impl Edge {
    fn open(start: usize, end: usize, kind: Kind) -> Self {
        Self {
            start,
            end,
            kind,
            closing: false,
        }
    }

    fn close(start: usize, end: usize, kind: Kind) -> Self {
        Self {
            start,
            end,
            kind,
            closing: true,
        }
    }

    fn tag(&self) -> &'static str {
        match (self.closing, self.kind) {
            (false, Kind::Italic) => "<i>",
            (false, Kind::Bold) => "<b>",
            (false, Kind::BoldItalic) => "<b><i>",
            (true, Kind::Italic) => "</i>",
            (true, Kind::Bold) => "</b>",
            (true, Kind::BoldItalic) => "</i></b>",
        }
    }
}

/// Replace bold and italic apostrophe runs with the equivalent properly
/// nested `<b>` and `<i>` tags.
#[must_use]
pub fn resolve_emphasis(text: &str) -> String {
    let mut resolved: Vec<Edge> = Vec::new();
    let mut stack: Vec<Open> = Vec::new();

    for m in patterns::EMPHASIS_RUN.find_iter(text) {
        let Some(kind) = Kind::from_run(m.len()) else {
            continue;
        };
        let curr = Open {
            start: m.start(),
            end: m.end(),
            kind,
        };

        match kind {
            Kind::Italic | Kind::Bold => close_run(&mut stack, &mut resolved, curr, kind),
            Kind::BoldItalic => close_double_run(&mut stack, &mut resolved, curr),
        }
    }

    if !stack.is_empty() {
        trace!(count = stack.len(), "unclosed emphasis left as apostrophes");
    }

    splice(text, resolved)
}

/// Handle an italic or bold run: close a matching open span, or push a new
/// open. When the matching open was a five-run, only this run's half of it
/// closes; the leading part is pushed back as an open of the other kind.
fn close_run(stack: &mut Vec<Open>, resolved: &mut Vec<Edge>, curr: Open, kind: Kind) {
    let Some(prev) = stack.pop() else {
        stack.push(curr);
        return;
    };

    if prev.kind != kind && prev.kind != Kind::BoldItalic {
        stack.push(prev);
        stack.push(curr);
        return;
    }

    let mut open = Edge::open(prev.start, prev.end, kind);
    if prev.kind == Kind::BoldItalic {
        let (closed_width, leftover_kind) = match kind {
            Kind::Italic => (ITALIC_WIDTH, Kind::Bold),
            _ => (BOLD_WIDTH, Kind::Italic),
        };
        // The closed half is the run's trailing characters.
        open.start += 5 - closed_width;
        stack.push(Open {
            start: prev.start,
            end: prev.end - closed_width,
            kind: leftover_kind,
        });
    }
    resolved.push(open);
    resolved.push(Edge::close(curr.start, curr.end, kind));
}

/// Handle a five-run: it closes whatever is on top of the stack, and its
/// remaining half then tries to close the next entry too.
fn close_double_run(stack: &mut Vec<Open>, resolved: &mut Vec<Edge>, curr: Open) {
    let Some(prev) = stack.pop() else {
        stack.push(curr);
        return;
    };

    match prev.kind {
        Kind::Bold => {
            resolved.push(Edge::open(prev.start, prev.end, Kind::Bold));
            resolved.push(Edge::close(curr.start, curr.end - ITALIC_WIDTH, Kind::Bold));
            if let Some(prev2) = stack.pop() {
                if prev2.kind == Kind::Italic {
                    resolved.push(Edge::open(prev2.start, prev2.end, Kind::Italic));
                    resolved.push(Edge::close(curr.start + BOLD_WIDTH, curr.end, Kind::Italic));
                }
                // A second entry of any other kind stays dropped; its run
                // renders as apostrophes.
            }
        }
        Kind::Italic => {
            resolved.push(Edge::open(prev.start, prev.end, Kind::Italic));
            resolved.push(Edge::close(curr.start, curr.end - BOLD_WIDTH, Kind::Italic));
            if let Some(prev2) = stack.pop() {
                if prev2.kind == Kind::Bold {
                    resolved.push(Edge::open(prev2.start, prev2.end, Kind::Bold));
                    resolved.push(Edge::close(curr.start + ITALIC_WIDTH, curr.end, Kind::Bold));
                }
            }
        }
        Kind::BoldItalic => {
            resolved.push(Edge::open(prev.start, prev.end, Kind::BoldItalic));
            resolved.push(Edge::close(curr.start, curr.end, Kind::BoldItalic));
        }
    }
}

/// Sort the resolved edges by position and splice their tags into the text,
/// copying everything between them.
fn splice(text: &str, mut resolved: Vec<Edge>) -> String {
    resolved.sort_by_key(|edge| edge.start);

    let mut out = String::with_capacity(text.len() + resolved.len() * 4);
    let mut cursor = 0;
    for edge in &resolved {
        if edge.start < cursor {
            // Pathological nesting can resolve overlapping edges; keep the
            // earlier tag and let this run render as apostrophes.
            continue;
        }
        out.push_str(&text[cursor..edge.start]);
        out.push_str(edge.tag());
        cursor = edge.end;
    }
    out.push_str(&text[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bold() {
        assert_eq!(resolve_emphasis("a '''b''' c"), "a <b>b</b> c");
    }

    #[test]
    fn test_italic() {
        assert_eq!(resolve_emphasis("a ''b'' c"), "a <i>b</i> c");
    }

    #[test]
    fn test_bold_italic_together() {
        assert_eq!(resolve_emphasis("a '''''b''''' c"), "a <b><i>b</i></b> c");
    }

    #[test]
    fn test_italic_nested_in_bold() {
        assert_eq!(
            resolve_emphasis("'''a''b'' c'''"),
            "<b>a<i>b</i> c</b>"
        );
    }

    #[test]
    fn test_five_run_closes_bold_opened_alone() {
        // ''i '''both''''' -- the five-run closes the bold first, then the
        // italic with its leftover half.
        assert_eq!(
            resolve_emphasis("''i '''both'''''."),
            "<i>i <b>both</b></i>."
        );
    }

    #[test]
    fn test_five_run_opens_both_closed_separately() {
        assert_eq!(
            resolve_emphasis("'''''x'' y'''"),
            "<b><i>x</i> y</b>"
        );
    }

    #[test]
    fn test_unterminated_emphasis_stays_plain() {
        assert_eq!(resolve_emphasis("a '''b"), "a '''b");
        assert_eq!(resolve_emphasis("''a '''b"), "''a '''b");
    }

    #[test]
    fn test_four_run_is_meaningless() {
        assert_eq!(resolve_emphasis("a ''''b'''' c"), "a ''''b'''' c");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(resolve_emphasis("it's o'clock"), "it's o'clock");
    }

    #[test]
    fn test_mixed_emphasis_sentence() {
        let markup = "Parsing '''bold''' and ''italic'' is a '''''deceptively''' difficult'' task.";
        assert_eq!(
            resolve_emphasis(markup),
            "Parsing <b>bold</b> and <i>italic</i> is a <i><b>deceptively</b> difficult</i> task."
        );
    }
}
