//! Anchored matching: `^` pins the pattern to the start of the line, `$`
//! to the end. A pattern with neither anchor falls back to a plain
//! substring search.

use memchr::memmem;

/// Does `pattern` match `text` under anchor rules?
///
/// Branches are checked in priority order: a leading `^` wins, then a
/// trailing `$`, then substring search. A pattern shaped `^...$` therefore
/// takes only the `^` branch and its `$` is an ordinary literal byte.
///
/// For the `$` branch exactly one trailing `\n` is stripped from the text
/// before the suffix comparison, so the pattern does not have to spell out
/// the terminator.
pub fn is_match(text: &[u8], pattern: &[u8]) -> bool {
    if let Some(prefix) = pattern.strip_prefix(b"^") {
        return text.starts_with(prefix);
    }
    if let Some(suffix) = pattern.strip_suffix(b"$") {
        let body = text.strip_suffix(b"\n").unwrap_or(text);
        return body.ends_with(suffix);
    }
    memmem::find(text, pattern).is_some()
}
