//! Lexer for Tern source.
//!
//! Converts raw source text into a stream of classified tokens, pulled one
//! at a time through [`Lexer::next_token`]. Scanning is byte-by-byte,
//! forward-only, and total: bytes outside the grammar come back as
//! [`TokenKind::Illegal`] tokens rather than errors.

use crate::token::{keyword_or_ident, Token, TokenKind};

/// Tern source lexer.
///
/// Holds the full input and a forward-only cursor. `position` is the index
/// of the byte currently under examination, `read_position` always points
/// one past it, and `ch` caches `input[position]` — or `0` once the input
/// is exhausted. The `0` sentinel cannot collide with real data because
/// the Tern source alphabet excludes the NUL byte.
pub struct Lexer<'a> {
    input: &'a [u8],
    position: usize,
    read_position: usize,
    ch: u8,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source.
    ///
    /// The cursor is primed so `ch` already holds the first byte of input.
    pub fn new(source: &'a str) -> Self {
        let mut lexer = Self {
            input: source.as_bytes(),
            position: 0,
            read_position: 0,
            ch: 0,
        };
        lexer.read_char();
        lexer
    }

    /// Tokenize the entire source into a vector of tokens.
    ///
    /// The vector ends with exactly one `Eof` token.
    pub fn tokenize(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();

        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        tokens
    }

    /// Read the next token from the source.
    ///
    /// Skips any whitespace, then classifies the byte under the cursor and
    /// advances past the token it returns. At end of input this yields an
    /// `Eof` token with an empty literal and leaves the cursor where it is,
    /// so every subsequent call yields `Eof` again.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let kind = match self.ch {
            b'=' => TokenKind::Assign,
            b';' => TokenKind::Semicolon,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b',' => TokenKind::Comma,
            b'+' => TokenKind::Plus,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            0 => return Token::new(TokenKind::Eof, String::new()),
            ch if is_letter(ch) => {
                // The identifier scan leaves the cursor on the first
                // non-letter byte, so no trailing advance here.
                let word = self.read_identifier();
                return Token::new(keyword_or_ident(word), word.to_string());
            }
            _ => TokenKind::Illegal,
        };

        let token = Token::new(kind, (self.ch as char).to_string());
        self.read_char();
        token
    }

    // --- Private helpers ---

    /// Advance the cursor by one byte. This is the only mutator of the
    /// cursor state; scanning is strictly forward, with no rewind.
    fn read_char(&mut self) {
        self.ch = if self.read_position >= self.input.len() {
            0
        } else {
            self.input[self.read_position]
        };
        self.position = self.read_position;
        self.read_position += 1;
    }

    /// Scan a maximal run of letters starting at the current byte.
    fn read_identifier(&mut self) -> &'a str {
        let start = self.position;
        while is_letter(self.ch) {
            self.read_char();
        }
        let word = &self.input[start..self.position];
        // `word` contains only ASCII letters and underscores.
        std::str::from_utf8(word).expect("identifier bytes are ASCII")
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }
}

/// A byte starts or continues an identifier iff it is an ASCII letter or
/// an underscore. Digits are not letters: a digit byte lexes as `Illegal`
/// until numeric literal scanning lands (`TokenKind::Int` is reserved for
/// that).
fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}
