//! Positional comment attachment.
//!
//! Comments are matched to declarations and members by byte offset. A
//! comment on the same line after a member, followed by a line break or a
//! closing token, is that member's trailing comment. The run of comments
//! directly above a declaration, up to a blank line between two comments,
//! is its leading comment.

/// Byte range of one comment, markers included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CommentSpan {
    pub start: usize,
    pub end: usize,
}

/// All comments of a source file, sorted by position.
#[derive(Debug)]
pub(crate) struct Comments<'src> {
    source: &'src str,
    spans: Vec<CommentSpan>,
}

impl<'src> Comments<'src> {
    pub(crate) fn new(source: &'src str, mut spans: Vec<CommentSpan>) -> Self {
        spans.sort_by_key(|span| span.start);
        spans.dedup_by_key(|span| span.start);
        spans.retain(|span| span.start < span.end && span.end <= source.len());
        Self { source, spans }
    }

    /// Comment text directly above the token starting at `lo`.
    pub(crate) fn leading(&self, lo: usize) -> Option<String> {
        let end = self.spans.partition_point(|span| span.start < lo);
        let mut first = end;
        let mut cursor = lo;

        while first > 0 {
            let index = first - 1;
            let span = self.spans[index];
            let Some(gap) = self.source.get(span.end..cursor) else {
                break;
            };
            if !gap.trim().is_empty() {
                break;
            }
            // A blank line between two comments ends the run.
            if first < end && gap.matches('\n').count() > 1 {
                break;
            }
            if self.is_trailing(index) {
                break;
            }
            first = index;
            cursor = span.start;
        }

        let text = self.spans[first..end]
            .iter()
            .map(|span| comment_text(&self.source[span.start..span.end]))
            .collect::<Vec<_>>()
            .join("\n");
        let text = text.trim_matches('\n').to_string();
        (!text.is_empty()).then_some(text)
    }

    /// Comment text on the same line after the member ending at `hi`,
    /// allowing for one `;` or `,` separator in between.
    pub(crate) fn trailing(&self, hi: usize) -> Option<String> {
        let bytes = self.source.as_bytes();
        let mut at = skip_blanks(bytes, hi);
        if matches!(bytes.get(at), Some(b';' | b',')) {
            at = skip_blanks(bytes, at + 1);
        }

        let index = self.spans.partition_point(|span| span.start < at);
        let span = self.spans.get(index).filter(|span| span.start == at)?;
        if !self.followed_by_break(index) {
            return None;
        }
        let text = comment_text(&self.source[span.start..span.end]);
        (!text.is_empty()).then_some(text)
    }

    /// Whether the comment at `index` trails code on its own line.
    fn is_trailing(&self, index: usize) -> bool {
        let span = self.spans[index];
        let before = &self.source[..span.start];
        let code_end = before.trim_end_matches([' ', '\t']).len();
        if code_end == 0 || before[..code_end].ends_with('\n') || before[..code_end].ends_with('\r') {
            return false;
        }
        let after_comment = index
            .checked_sub(1)
            .is_some_and(|previous| self.spans[previous].end == code_end);
        !after_comment && self.followed_by_break(index)
    }

    /// Whether the next token after the comment at `index` is on a later
    /// line, is a closing token, or is missing.
    fn followed_by_break(&self, index: usize) -> bool {
        let bytes = self.source.as_bytes();
        let mut at = self.spans[index].end;
        let mut next = index + 1;
        loop {
            while at < bytes.len() && bytes[at].is_ascii_whitespace() {
                if bytes[at] == b'\n' {
                    return true;
                }
                at += 1;
            }
            match self.spans.get(next) {
                Some(span) if span.start == at => {
                    at = span.end;
                    next += 1;
                }
                _ => break,
            }
        }
        matches!(bytes.get(at), None | Some(b'}' | b')' | b']' | b';' | b','))
    }
}

fn skip_blanks(bytes: &[u8], mut at: usize) -> usize {
    while matches!(bytes.get(at), Some(b' ' | b'\t')) {
        at += 1;
    }
    at
}

/// Strip comment markers and JSDoc gutters from a raw comment.
pub(crate) fn comment_text(raw: &str) -> String {
    if let Some(body) = raw.strip_prefix("//") {
        return body.strip_prefix(' ').unwrap_or(body).trim_end().to_string();
    }

    let body = raw.strip_prefix("/*").unwrap_or(raw);
    let body = body.strip_suffix("*/").unwrap_or(body);
    let body = body.strip_prefix('*').unwrap_or(body);
    let body = body.trim_end_matches('*');

    let lines: Vec<&str> = body
        .lines()
        .map(|line| {
            let line = line.trim_start();
            let line = match line.strip_prefix('*') {
                Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest,
                _ => line,
            };
            line.strip_prefix(' ').unwrap_or(line).trim_end()
        })
        .collect();

    let first = lines.iter().position(|l| !l.is_empty());
    let last = lines.iter().rposition(|l| !l.is_empty());
    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last].join("\n"),
        _ => String::new(),
    }
}
