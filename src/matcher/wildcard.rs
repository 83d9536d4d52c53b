//! Wildcard matching: `*` matches zero or more bytes, `?` matches exactly
//! one byte, everything else matches itself literally.
//!
//! The search is unanchored: the pattern may match a substring starting at
//! any offset of the line. Matching is iterative backtracking with an
//! explicit stack of resume points, so memory stays bounded by the number
//! of `*` in the pattern. Time is still exponential in the worst case for
//! adversarial many-star patterns; on single bounded lines that is a
//! documented limitation rather than a practical problem.

/// Does `pattern` match anywhere in `text`?
///
/// Every start offset is tried in order, including the empty suffix, so
/// `*` matches the empty line.
pub fn is_match(text: &[u8], pattern: &[u8]) -> bool {
    (0..=text.len()).any(|start| match_at(&text[start..], pattern))
}

/// Does `pattern` match a prefix of `text`?
///
/// A `*` first consumes zero bytes; a resume point is pushed so that on a
/// later dead end the star is retried with one more byte consumed. Popping
/// in LIFO order reproduces the depth-first order of the classic recursive
/// matcher, so the first success found is the same one.
fn match_at(text: &[u8], pattern: &[u8]) -> bool {
    let mut resume: Vec<(usize, usize)> = Vec::new();
    let mut ti = 0;
    let mut pi = 0;

    loop {
        if pi == pattern.len() {
            return true;
        }
        let stepped = match pattern[pi] {
            b'*' => {
                if ti < text.len() {
                    resume.push((ti + 1, pi));
                }
                pi += 1;
                true
            }
            b'?' if ti < text.len() => {
                ti += 1;
                pi += 1;
                true
            }
            byte if ti < text.len() && text[ti] == byte => {
                ti += 1;
                pi += 1;
                true
            }
            _ => false,
        };
        if !stepped {
            match resume.pop() {
                Some((t, p)) => {
                    ti = t;
                    pi = p;
                }
                None => return false,
            }
        }
    }
}
