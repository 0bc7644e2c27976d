//! Applying a region list to text.

use crate::Region;

/// Return a copy of `text` with every region deleted, or blanked with a
/// filler character.
///
/// `regions` must be end-sorted; it is walked from highest end position to
/// lowest so a region whose start falls inside one already handled is simply
/// skipped, which also makes raw (nested) gatherer output safe to pass.
/// Region bounds must lie on character boundaries, as gatherer output always
/// does.
///
/// With `filler` set, every byte of a stripped region except newlines is
/// replaced by the filler, so the output has exactly the byte length of the
/// input and every offset outside a stripped region is unchanged. Newlines
/// survive blanking because downstream sentence and paragraph boundaries are
/// computed on the cleaned text and must still be real. The filler must be
/// ASCII for the length guarantee to hold.
///
/// With `filler` unset, regions are deleted outright and offsets shift.
#[must_use]
pub fn strip_regions(text: &str, regions: &[Region], filler: Option<char>) -> String {
    debug_assert!(filler.is_none_or(|c| c.is_ascii()), "filler must be ASCII");

    // First pass, back to front: keep only the outermost regions, clipping
    // any that reach into space a later region already claimed.
    let mut kept = Vec::with_capacity(regions.len());
    let mut last_pos = text.len();
    for region in regions.iter().rev() {
        if region.start < last_pos {
            kept.push(Region::new(region.start, region.end.min(last_pos)));
            last_pos = region.start;
        }
    }
    kept.reverse();

    // Second pass, front to back: splice untouched spans and fillers.
    let mut stripped = String::with_capacity(text.len());
    let mut cursor = 0;
    for region in &kept {
        stripped.push_str(&text[cursor..region.start]);
        if let Some(fill) = filler {
            for byte in text[region.start..region.end].bytes() {
                stripped.push(if byte == b'\n' { '\n' } else { fill });
            }
        }
        cursor = region.end;
    }
    stripped.push_str(&text[cursor..]);
    stripped
}
