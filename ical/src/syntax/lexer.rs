// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Lexer for iCalendar files as defined in RFC 5545
//!
//! Unlike the RFC, a bare `\n` is accepted as a line terminator as well as
//! `\r\n`, since hand-written calendars rarely use CRLF.

use std::fmt::{self, Display};
use std::ops::Range;

use logos::Logos;

/// Tokenize iCalendar source code into `SpannedToken`s
#[must_use]
pub fn tokenize<'src>(src: &'src str) -> impl Iterator<Item = SpannedToken<'src>> {
    Token::lexer(src).spanned().map(|(tok, span)| match tok {
        Ok(tok) => SpannedToken(tok, span),
        Err(()) => SpannedToken(Token::Error, span),
    })
}

/// Token emitted by the iCalendar lexer
#[derive(PartialEq, Eq, Clone, Copy, Logos)]
#[logos(skip r"\r?\n[ \t]")] // skip folding
pub enum Token<'a> {
    /// Double Quote ("), decimal codepoint 22
    #[token(r#"""#)]
    DQuote,

    /// Comma (,), decimal codepoint 44
    #[token(",")]
    Comma,

    /// Colon (:), decimal codepoint 58
    #[token(":")]
    Colon,

    /// Semicolon (;), decimal codepoint 59
    #[token(";")]
    Semicolon,

    /// Equal sign (=), decimal codepoint 61
    #[token("=")]
    Equal,

    /// ASCII symbols: sequences of printable ASCII characters
    #[regex(r#"[\t !#$%&'()*+./<>?@\[\\\]\^`\{|\}~]+"#)]
    Symbol(&'a str),

    /// Line terminator, either CRLF or a bare LF
    #[regex(r"\r?\n")]
    Newline,

    /// ASCII word characters: 0-9, A-Z, a-z, underscore, hyphen
    #[regex("[0-9A-Za-z_-]+")]
    Word(&'a str),

    /// NON-US-ASCII  = UTF8-2 / UTF8-3 / UTF8-4
    #[regex(r"[^\x00-\x7F]+")]
    UnicodeText(&'a str),

    /// Error token for lexing errors
    Error,
}

impl<'a> Token<'a> {
    /// The source text this token stands for.
    ///
    /// Returns an empty string for [`Token::Error`], whose text is only
    /// available through its span.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        match *self {
            Self::DQuote => "\"",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::Semicolon => ";",
            Self::Equal => "=",
            Self::Newline => "\n",
            Self::Symbol(s) | Self::Word(s) | Self::UnicodeText(s) => s,
            Self::Error => "",
        }
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DQuote => write!(f, "DQuote"),
            Self::Comma => write!(f, "Comma"),
            Self::Colon => write!(f, "Colon"),
            Self::Semicolon => write!(f, "Semicolon"),
            Self::Equal => write!(f, "Equal"),
            Self::Symbol(s) => write!(f, "Symbol({s})"),
            Self::Newline => write!(f, "Newline"),
            Self::Word(s) => write!(f, "Word({s})"),
            Self::UnicodeText(s) => write!(f, "UnicodeText({s})"),
            Self::Error => write!(f, "Error"),
        }
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

/// A token with its byte range in the source code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken<'src>(pub Token<'src>, pub Range<usize>);

impl Display for SpannedToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:?}", self.0, self.1)
    }
}
