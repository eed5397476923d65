//! Nesting depth guard run before the source reaches the parser.
//!
//! Types and expressions are parsed recursively, so pathological input such
//! as thousands of nested parentheses would exhaust the stack. This scan
//! skips strings, comments, template text and regular expression literals,
//! and measures how deep the remaining code nests. Open brackets count one
//! level each. So does every link of a prefix chain (`keyof keyof T`,
//! `() => () => T`, `a ? b : c ? d : e`), since those recurse the same way.
//! Sources deeper than [`MAX_NESTING`] are rejected.

use super::{line_column, ParseError};

/// Deepest nesting accepted in a source file.
pub const MAX_NESTING: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Open {
    Paren,
    Bracket,
    Brace,
    /// `<`, which may also be a comparison and is popped leniently.
    Angle,
    /// `${` inside a template literal.
    Substitution,
}

/// Words after which a `/` starts a regular expression.
const EXPRESSION_KEYWORDS: &[&str] = &[
    "await", "case", "delete", "do", "else", "in", "instanceof", "new", "of", "return", "throw",
    "typeof", "void", "yield",
];

/// Prefix words whose operand is parsed recursively.
const PREFIX_KEYWORDS: &[&str] = &[
    "await", "delete", "infer", "keyof", "new", "readonly", "typeof", "unique", "void", "yield",
];

#[derive(Debug, Default)]
struct Depth {
    /// Open brackets, each with the prefix chain it interrupted.
    stack: Vec<(Open, usize)>,
    /// Sum of the chains saved in `stack`.
    outer: usize,
    /// Prefix chain at the current bracket level.
    chain: usize,
}

impl Depth {
    fn level(&self) -> usize {
        self.stack.len() + self.outer + self.chain
    }

    fn top(&self) -> Option<Open> {
        self.stack.last().map(|(open, _)| *open)
    }

    fn open(&mut self, open: Open) {
        self.stack.push((open, self.chain));
        self.outer += self.chain;
        self.chain = 0;
    }

    fn pop(&mut self) {
        if let Some((_, saved)) = self.stack.pop() {
            self.outer -= saved;
            self.chain = saved;
        }
    }

    fn pop_angles(&mut self) {
        while self.top() == Some(Open::Angle) {
            self.pop();
        }
    }

    /// Close the innermost `open`, discarding unmatched `<` above it.
    fn close(&mut self, open: Open) {
        self.pop_angles();
        if self.top() == Some(open) {
            self.pop();
        }
    }
}

pub(crate) fn check_nesting(source: &str) -> Result<(), ParseError> {
    let bytes = source.as_bytes();
    let mut depth = Depth::default();
    let mut regex_allowed = true;
    let mut i = 0;

    while i < bytes.len() {
        let byte = bytes[i];
        let next = bytes.get(i + 1).copied();
        let mut deeper = false;
        match byte {
            b' ' | b'\t' | b'\r' | b'\n' => {
                i += 1;
                continue;
            }
            b'/' if next == Some(b'/') => {
                i = skip_line_comment(bytes, i);
                continue;
            }
            b'/' if next == Some(b'*') => {
                i = skip_block_comment(bytes, i);
                continue;
            }
            b'/' if regex_allowed => {
                i = skip_regex(bytes, i);
                regex_allowed = false;
                continue;
            }
            b'\'' | b'"' => {
                i = skip_string(bytes, i);
                regex_allowed = false;
                continue;
            }
            b'`' => {
                i = scan_template(bytes, i + 1, &mut depth, source)?;
                regex_allowed = false;
                continue;
            }
            b'\\' => {
                i += 2;
                continue;
            }
            b'(' | b'[' | b'{' | b'<' => {
                depth.open(match byte {
                    b'(' => Open::Paren,
                    b'[' => Open::Bracket,
                    b'{' => Open::Brace,
                    _ => Open::Angle,
                });
                deeper = true;
                regex_allowed = true;
            }
            b')' => {
                depth.close(Open::Paren);
                regex_allowed = false;
            }
            b']' => {
                depth.close(Open::Bracket);
                regex_allowed = false;
            }
            b'}' => {
                depth.pop_angles();
                match depth.top() {
                    Some(Open::Brace) => depth.pop(),
                    Some(Open::Substitution) => {
                        depth.pop();
                        i = scan_template(bytes, i + 1, &mut depth, source)?;
                        regex_allowed = false;
                        continue;
                    }
                    _ => {}
                }
                regex_allowed = true;
            }
            b'>' => {
                if i > 0 && bytes[i - 1] == b'=' {
                    depth.chain += 1;
                    deeper = true;
                } else if depth.top() == Some(Open::Angle) {
                    depth.pop();
                }
                regex_allowed = true;
            }
            b'?' => {
                // `?.` and `??` do not nest
                let operator = matches!(next, Some(b'.' | b'?')) || (i > 0 && bytes[i - 1] == b'?');
                if !operator {
                    depth.chain += 1;
                    deeper = true;
                }
                regex_allowed = true;
            }
            b'!' | b'~' => {
                depth.chain += 1;
                deeper = true;
                regex_allowed = true;
            }
            b';' | b',' => {
                depth.pop_angles();
                depth.chain = 0;
                regex_allowed = true;
            }
            _ if is_word_byte(byte) => {
                let start = i;
                while i < bytes.len() && is_word_byte(bytes[i]) {
                    i += 1;
                }
                let word = source.get(start..i).unwrap_or_default();
                let numeric = byte.is_ascii_digit();
                regex_allowed = !numeric && EXPRESSION_KEYWORDS.contains(&word);
                if !numeric && PREFIX_KEYWORDS.contains(&word) {
                    depth.chain += 1;
                    if depth.level() > MAX_NESTING {
                        return Err(too_deep(source, start));
                    }
                }
                continue;
            }
            _ => {
                regex_allowed = true;
            }
        }
        if deeper && depth.level() > MAX_NESTING {
            return Err(too_deep(source, i));
        }
        i += 1;
    }

    Ok(())
}

fn too_deep(source: &str, offset: usize) -> ParseError {
    let (line, column) = line_column(source, offset);
    ParseError {
        message: format!("nesting deeper than {MAX_NESTING} levels"),
        line,
        column,
    }
}

fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'$' || byte >= 0x80
}

fn skip_line_comment(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(bytes.len(), |n| start + n)
}

fn skip_block_comment(bytes: &[u8], start: usize) -> usize {
    bytes[start + 2..]
        .windows(2)
        .position(|w| w == b"*/")
        .map_or(bytes.len(), |n| start + 2 + n + 2)
}

/// Skip a quoted string. An unterminated string ends at the line break.
fn skip_string(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'\n' => return i,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Skip a regular expression literal and its flags. A `/` with no closing
/// `/` on the same line is treated as division.
fn skip_regex(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 1;
    let mut in_class = false;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'\n' => return start + 1,
            b'[' => {
                in_class = true;
                i += 1;
            }
            b']' => {
                in_class = false;
                i += 1;
            }
            b'/' if !in_class => {
                i += 1;
                while i < bytes.len() && bytes[i].is_ascii_alphanumeric() {
                    i += 1;
                }
                return i;
            }
            _ => i += 1,
        }
    }
    start + 1
}

/// Scan template text from `start` up to the closing backtick or the next
/// `${`, which opens a substitution.
fn scan_template(
    bytes: &[u8],
    start: usize,
    depth: &mut Depth,
    source: &str,
) -> Result<usize, ParseError> {
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'`' => return Ok(i + 1),
            b'$' if bytes.get(i + 1) == Some(&b'{') => {
                depth.open(Open::Substitution);
                if depth.level() > MAX_NESTING {
                    return Err(too_deep(source, i));
                }
                return Ok(i + 2);
            }
            _ => i += 1,
        }
    }
    Ok(bytes.len())
}
