//! Single-line recognizer for `describe(...)` / `it(...)` declarations

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

use crate::types::BlockKind;

/// A declaration recognized on one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'a> {
    pub kind: BlockKind,
    /// The literal's value, with escape sequences resolved
    pub label: Cow<'a, str>,
    /// Character offset of the first non-whitespace character
    pub column: u32,
}

fn declaration_regex() -> &'static Regex {
    static DECLARATION: OnceLock<Regex> = OnceLock::new();
    DECLARATION.get_or_init(|| {
        // The regex crate has no backreferences, so each quote style gets
        // its own alternative to keep the closing quote matched. A backslash
        // escapes the next character, and the literal must be the whole
        // first argument.
        Regex::new(
            r#"^\s*(describe|it)(?:\.(?:only|skip))?\(\s*(?:'((?:[^'\\]|\\.)*)'|"((?:[^"\\]|\\.)*)"|`((?:[^`\\]|\\.)*)`)\s*[,)]"#,
        )
        .expect("declaration regex is valid")
    })
}

/// Recognize a declaration on a single line of source
///
/// Returns `None` for anything else, including declarations whose label
/// spans several lines or is built from an expression.
pub fn match_declaration(line: &str) -> Option<Declaration<'_>> {
    let captures = declaration_regex().captures(line)?;
    let kind = BlockKind::from_keyword(captures.get(1)?.as_str())?;
    let label = captures
        .get(2)
        .or_else(|| captures.get(3))
        .or_else(|| captures.get(4))?
        .as_str();
    Some(Declaration {
        kind,
        label: unescape(label),
        column: indent_column(line),
    })
}

/// Resolve the escape sequences of a string literal body
///
/// Unknown escapes yield the escaped character itself, so `\'`, `\"`,
/// `` \` `` and `\\` all drop their backslash.
pub fn unescape(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\\') {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('v') => out.push('\u{b}'),
            Some('0') => out.push('\0'),
            Some('x') => push_code_point(&mut out, &mut chars, 'x', 2),
            Some('u') => push_code_point(&mut out, &mut chars, 'u', 4),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    Cow::Owned(out)
}

/// Decode `\xHH`, `\uHHHH` or `\u{H..}`; an invalid sequence yields the marker letter
fn push_code_point(out: &mut String, chars: &mut std::str::Chars<'_>, marker: char, width: usize) {
    let rest = chars.as_str();
    let (digits, consumed) = match rest.strip_prefix('{') {
        Some(braced) if marker == 'u' => match braced.find('}') {
            Some(end) => (&braced[..end], end + 2),
            None => ("", 0),
        },
        _ => (rest.get(..width).unwrap_or(""), width),
    };

    match u32::from_str_radix(digits, 16).ok().and_then(char::from_u32) {
        Some(decoded)
            if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_hexdigit()) =>
        {
            out.push(decoded);
            *chars = rest[consumed..].chars();
        }
        _ => out.push(marker),
    }
}

/// Count of leading whitespace characters; tabs count as one
pub fn indent_column(line: &str) -> u32 {
    line.chars().take_while(|c| c.is_whitespace()).count() as u32
}
