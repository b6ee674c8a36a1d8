//! Whitespace tokenizer for legacy VTK ASCII files.
//!
//! The three header lines (version, title, encoding) are stripped and the
//! rest of the file becomes one flat array of tokens. Readers walk that
//! array through a cursor, so the number of tokens left is always known when
//! reporting a short file.

use std::str::FromStr;

use vtkscope_core::{Result, VtkscopeError};

/// Number of header lines preceding the dataset body.
const HEADER_LINES: usize = 3;

/// A single whitespace-delimited token and the 1-based line it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub line: usize,
}

/// A read-once cursor over the tokens of a VTK file body.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
}

impl<'a> TokenStream<'a> {
    /// Tokenizes a whole file.
    ///
    /// The first two lines are skipped unread. The third line is the encoding
    /// keyword; with `check_encoding` set it must read `ASCII`.
    pub fn new(text: &'a str, check_encoding: bool) -> Result<Self> {
        // `lines` already drops the `\r` of a CRLF ending, and `\r` counts as
        // whitespace for `split_whitespace`, so no token ever ends with one.
        let mut lines = text.lines();

        let mut encoding = None;
        for n in 1..=HEADER_LINES {
            let line = lines.next().ok_or_else(|| {
                VtkscopeError::malformed(format!(
                    "file has {} lines, expected a {HEADER_LINES}-line header",
                    n - 1
                ))
            })?;
            if n == HEADER_LINES {
                encoding = Some(line.trim());
            }
        }

        if check_encoding {
            let encoding = encoding.unwrap_or_default();
            if !encoding.eq_ignore_ascii_case("ASCII") {
                return Err(VtkscopeError::malformed_at(
                    HEADER_LINES,
                    format!("expected encoding 'ASCII', found '{encoding}'"),
                ));
            }
        }

        let tokens = lines
            .enumerate()
            .flat_map(|(i, line)| {
                let line_number = i + HEADER_LINES + 1;
                line.split_whitespace().map(move |text| Token {
                    text,
                    line: line_number,
                })
            })
            .collect();

        Ok(Self { tokens, pos: 0 })
    }

    /// Number of tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }

    /// Returns true once every token has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Returns the next token without consuming it.
    pub fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    /// Line of the most recently consumed token, or of the header if none.
    pub fn current_line(&self) -> usize {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(HEADER_LINES, |t| t.line)
    }

    /// Consumes the next token.
    ///
    /// `what` names the value being read and appears in the error if the
    /// stream has run dry.
    pub fn next_token(&mut self, what: &str) -> Result<Token<'a>> {
        let token = self.peek().ok_or_else(|| {
            VtkscopeError::malformed_at(
                self.current_line(),
                format!("unexpected end of input while reading {what}"),
            )
        })?;
        self.pos += 1;
        Ok(token)
    }

    /// Consumes a section keyword.
    ///
    /// When `check` is set the token must match `expected`, ignoring ASCII case.
    pub fn keyword(&mut self, expected: &str, check: bool) -> Result<Token<'a>> {
        let token = self.next_token(expected)?;
        if check && !token.text.eq_ignore_ascii_case(expected) {
            return Err(VtkscopeError::malformed_at(
                token.line,
                format!("expected keyword '{expected}', found '{}'", token.text),
            ));
        }
        Ok(token)
    }

    /// Consumes and parses the next token.
    pub fn parse<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let token = self.next_token(what)?;
        token.text.parse().map_err(|_| {
            VtkscopeError::malformed_at(
                token.line,
                format!("invalid {what} '{}'", token.text),
            )
        })
    }

    /// Fails unless at least `count` tokens are left.
    pub fn require(&self, count: usize, what: &str) -> Result<()> {
        if self.remaining() < count {
            return Err(VtkscopeError::malformed_at(
                self.current_line(),
                format!(
                    "{what} needs {count} values but only {} tokens remain",
                    self.remaining()
                ),
            ));
        }
        Ok(())
    }

    /// Reads `count` coordinate triples.
    pub fn triples(&mut self, count: usize, what: &str) -> Result<Vec<[f64; 3]>> {
        let values = count.checked_mul(3).ok_or_else(|| {
            VtkscopeError::malformed_at(self.current_line(), format!("{what} count {count} is too large"))
        })?;
        self.require(values, what)?;

        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            out.push([self.parse(what)?, self.parse(what)?, self.parse(what)?]);
        }
        Ok(out)
    }

    /// Consumes `count` tokens without looking at them.
    pub fn skip(&mut self, count: usize, what: &str) -> Result<()> {
        self.require(count, what)?;
        self.pos += count;
        Ok(())
    }
}
