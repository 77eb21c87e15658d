// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Scanner for iCalendar content lines.
//!
//! Per RFC 5545, a content line has the format:
//! ```text
//! contentline = name *(";" param) ":" value CRLF
//! ```
//!
//! Only the first unquoted colon ends the name and parameters; any later colon
//! belongs to the value.

use std::iter::{self, Peekable};
use std::mem;

use crate::error::IcalError;
use crate::syntax::lexer::{SpannedToken, Token, tokenize};

/// A scanned iCalendar content line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property name, upper-cased (e.g. "DTSTART", "SUMMARY")
    pub name: String,

    /// Parameters as `(NAME, value)` pairs, names upper-cased and quotes removed
    pub params: Vec<(String, String)>,

    /// Property value with line folding removed
    pub value: String,

    /// 1-based line number where the content line starts
    pub line: usize,
}

impl ContentLine {
    /// Value of the first parameter called `name`, compared case-insensitively.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Scan source text into content lines.
///
/// Blank lines and a leading byte order mark are skipped.
///
/// ## Errors
///
/// Returns [`IcalError::Syntax`] for the first line that contains a character
/// the lexer rejects, lacks a property name, or lacks the `:` separator.
pub fn scan_content_lines(src: &str) -> Result<Vec<ContentLine>, IcalError> {
    let src = src.strip_prefix('\u{feff}').unwrap_or(src);
    let index = LineIndex::new(src);
    let eof = iter::once(SpannedToken(Token::Newline, src.len()..src.len()));

    let mut lines = Vec::new();
    let mut current = Vec::new();
    for token in tokenize(src).chain(eof) {
        if token.0 != Token::Newline {
            current.push(token);
            continue;
        }

        let tokens = mem::take(&mut current);
        let Some(first) = tokens.first() else {
            continue;
        };
        if is_blank(&tokens) {
            continue;
        }
        let line = index.line_of(first.1.start);
        lines.push(scan_line(src, line, tokens)?);
    }

    tracing::trace!(count = lines.len(), "scanned content lines");
    Ok(lines)
}

fn scan_line(src: &str, line: usize, tokens: Vec<SpannedToken<'_>>) -> Result<ContentLine, IcalError> {
    if let Some(SpannedToken(_, span)) = tokens.iter().find(|t| t.0 == Token::Error) {
        let text = src.get(span.clone()).unwrap_or_default();
        return Err(IcalError::syntax(
            line,
            format!("unexpected character {text:?}"),
        ));
    }

    let mut iter = tokens.into_iter().map(|SpannedToken(tok, _)| tok).peekable();
    let name = match iter.next() {
        Some(Token::Word(name)) => name.to_ascii_uppercase(),
        Some(tok) => {
            return Err(IcalError::syntax(
                line,
                format!("expected property name, found {tok}"),
            ));
        }
        None => return Err(IcalError::syntax(line, "empty content line")),
    };

    let mut params = Vec::new();
    loop {
        match iter.next() {
            Some(Token::Colon) => break,
            Some(Token::Semicolon) => params.push(scan_param(&mut iter, line)?),
            Some(tok) => {
                return Err(IcalError::syntax(
                    line,
                    format!("expected ':' or ';' after {name}, found {tok}"),
                ));
            }
            None => return Err(IcalError::syntax(line, format!("missing ':' after {name}"))),
        }
    }

    let value = iter.map(|tok| tok.text()).collect();
    Ok(ContentLine {
        name,
        params,
        value,
        line,
    })
}

fn scan_param<'src>(
    iter: &mut Peekable<impl Iterator<Item = Token<'src>>>,
    line: usize,
) -> Result<(String, String), IcalError> {
    let name = match iter.next() {
        Some(Token::Word(name)) => name.to_ascii_uppercase(),
        _ => return Err(IcalError::syntax(line, "empty parameter name")),
    };
    if iter.next() != Some(Token::Equal) {
        return Err(IcalError::syntax(
            line,
            format!("missing '=' after parameter {name}"),
        ));
    }

    let mut value = String::new();
    let mut quoted = false;
    while let Some(&tok) = iter.peek() {
        match tok {
            Token::DQuote => quoted = !quoted,
            Token::Colon | Token::Semicolon if !quoted => break,
            _ => value.push_str(tok.text()),
        }
        iter.next();
    }

    if quoted {
        return Err(IcalError::syntax(
            line,
            format!("unterminated quoted value for parameter {name}"),
        ));
    }
    Ok((name, value))
}

fn is_blank(tokens: &[SpannedToken<'_>]) -> bool {
    tokens
        .iter()
        .all(|t| matches!(t.0, Token::Symbol(s) if s.trim().is_empty()))
}

/// Byte offsets of line starts, for mapping spans back to line numbers.
struct LineIndex(Vec<usize>);

impl LineIndex {
    fn new(src: &str) -> Self {
        let starts = iter::once(0)
            .chain(src.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self(starts)
    }

    fn line_of(&self, offset: usize) -> usize {
        self.0.partition_point(|&start| start <= offset)
    }
}
