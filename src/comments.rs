//! Comment blanking pre-pass.
//!
//! Comment spans are overwritten with spaces in place, so byte offsets of
//! everything outside the span are preserved. String literals are tracked
//! (with their escapes) and comment openers inside them are left alone.
//! An opening token with no closing token ends the pass, leaving the
//! remainder of the buffer unchanged.

/// Blanks every `open`..`close` span outside string literals.
///
/// Called once per comment style by the comment-tolerant parse entry
/// points: first for block comments, then for line comments with `close`
/// being the newline. The closing token itself is blanked along with the
/// span.
pub(crate) fn strip(buf: &mut [u8], open: &[u8], close: &[u8]) {
    let mut in_string = false;
    let mut escaped = false;
    let mut i = 0;
    while i < buf.len() {
        let b = buf[i];
        if b == b'\\' && !escaped {
            escaped = true;
            i += 1;
            continue;
        }
        if b == b'"' && !escaped {
            in_string = !in_string;
        } else if !in_string && buf[i..].starts_with(open) {
            let body = i + open.len();
            let Some(found) = find(&buf[body..], close) else {
                return;
            };
            let end = body + found + close.len();
            for slot in &mut buf[i..end] {
                *slot = b' ';
            }
            i = end;
            escaped = false;
            continue;
        }
        escaped = false;
        i += 1;
    }
}

/// First occurrence of `needle` in `haystack`.
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
