//! The Token Buffer (spec §4.1): turns source text into a flat, ordered
//! token stream annotated with source lines, and exposes the small
//! consumption API the parser drives.

use crate::token::Token;
use j2p_util::diagnostic::{Handler, Halt};

const DOUBLE_CHAR_OPERATORS: &[&str] = &["++", "--", "<=", ">=", "==", "!=", "&&", "||"];

const SINGLE_CHAR_DELIMITERS: &[char] = &[
    '{', '}', '(', ')', '[', ']', ';', ',', '"', '+', '-', '*', '/', '<', '>', '!', '&', '|',
];

fn strip_line_comment(line: &str) -> &str {
    match line.find("//") {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Surrounds every delimiter/operator with whitespace, preserving intact
/// decimal literals (a `.` flanked by digits on both sides is left
/// attached), then splits on whitespace.
fn tokenize_line(line: &str) -> Vec<String> {
    let line = strip_line_comment(line);
    let chars: Vec<char> = line.chars().collect();
    let n = chars.len();
    let mut spaced = String::with_capacity(line.len() * 2);
    let mut i = 0;
    while i < n {
        let c = chars[i];
        if i + 1 < n {
            let pair: String = [c, chars[i + 1]].iter().collect();
            if DOUBLE_CHAR_OPERATORS.contains(&pair.as_str()) {
                spaced.push(' ');
                spaced.push_str(&pair);
                spaced.push(' ');
                i += 2;
                continue;
            }
        }
        if c == '.' {
            let prev_digit = i > 0 && chars[i - 1].is_ascii_digit();
            let next_digit = i + 1 < n && chars[i + 1].is_ascii_digit();
            if prev_digit && next_digit {
                spaced.push('.');
            } else {
                spaced.push(' ');
                spaced.push('.');
                spaced.push(' ');
            }
        } else if SINGLE_CHAR_DELIMITERS.contains(&c) {
            spaced.push(' ');
            spaced.push(c);
            spaced.push(' ');
        } else {
            spaced.push(c);
        }
        i += 1;
    }
    spaced.split_whitespace().map(str::to_string).collect()
}

/// The token stream plus a cursor. Tokens from blank/comment-only lines
/// simply never enter the stream, so consumption never has to special-case
/// them — `empty`/`peek` always see the next real token directly.
pub struct TokenBuffer {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenBuffer {
    /// Lex `source` in full. Lexing itself never fails: an unlexable
    /// character simply becomes its own single-character token, and any
    /// resulting nonsense is caught later by `validate`/`expect`.
    pub fn lex(source: &str) -> Self {
        let mut tokens = Vec::new();
        for (idx, raw_line) in source.lines().enumerate() {
            let line = idx + 1;
            for lexeme in tokenize_line(raw_line) {
                tokens.push(Token::new(lexeme, line));
            }
        }
        Self { tokens, pos: 0 }
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// The line number the next token (or, at end of input, the last
    /// token) belongs to — used to attribute diagnostics.
    pub fn line_number(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|t| t.line)
            .unwrap_or(1)
    }

    pub fn empty(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Consume and return the next token. Buffer exhaustion is always
    /// fatal (spec §7), regardless of the handler's mode.
    pub fn shift(&mut self, handler: &Handler, expected: Option<&str>) -> Result<Token, Halt> {
        match self.tokens.get(self.pos).cloned() {
            Some(tok) => {
                self.pos += 1;
                Ok(tok)
            }
            None => {
                let message = match expected {
                    Some(e) => format!("Unexpected end of input, expected {e}"),
                    None => "Unexpected end of input".to_string(),
                };
                Err(handler.report_fatal(self.line_number(), "", message))
            }
        }
    }

    /// Push a token back. Must be the inverse of the most recent `shift`.
    pub fn unshift(&mut self, token: Token) {
        assert!(self.pos > 0, "unshift with nothing to push back onto");
        self.pos -= 1;
        debug_assert_eq!(
            self.tokens[self.pos], token,
            "unshift must invert the most recent shift"
        );
    }

    /// Record a diagnostic if `actual` isn't `expected`; never halts by
    /// itself (callers that need a halt use the handler's own mode via
    /// `report`/`report_fatal` directly).
    pub fn expect(&self, handler: &Handler, expected: &str, actual: &str) -> Result<(), Halt> {
        if expected == actual {
            Ok(())
        } else {
            handler.report(
                self.line_number(),
                actual,
                format!("Unexpected {actual}, expected {expected}"),
            )
        }
    }

    /// `true` iff `token` is a valid, non-keyword identifier. Reports a
    /// diagnostic on failure unless `silent`.
    pub fn validate(&self, handler: &Handler, token: &str, silent: bool) -> Result<bool, Halt> {
        if j2p_util::validate_identifier(token) {
            return Ok(true);
        }
        if silent {
            return Ok(false);
        }
        let message = if j2p_util::is_keyword(token) {
            format!("{token} is a keyword")
        } else {
            format!("{token} is not a valid identifier")
        };
        handler.report(self.line_number(), token, message)?;
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use j2p_util::diagnostic::Mode;

    fn lexemes(source: &str) -> Vec<String> {
        TokenBuffer::lex(source)
            .tokens
            .iter()
            .map(|t| t.lexeme.clone())
            .collect()
    }

    #[test]
    fn splits_delimiters_and_operators() {
        assert_eq!(
            lexemes("int foo(int x){return x;}"),
            vec![
                "int", "foo", "(", "int", "x", ")", "{", "return", "x", ";", "}"
            ]
        );
    }

    #[test]
    fn keeps_decimal_literals_intact() {
        assert_eq!(lexemes("double d = 3.14;"), vec!["double", "d", "=", "3.14", ";"]);
    }

    #[test]
    fn recognizes_double_char_operators_before_single_char() {
        assert_eq!(lexemes("x == y && z"), vec!["x", "==", "y", "&&", "z"]);
        assert_eq!(lexemes("x<=y"), vec!["x", "<=", "y"]);
    }

    #[test]
    fn strips_line_comments() {
        assert_eq!(lexemes("int x = 1; // a comment"), vec!["int", "x", "=", "1", ";"]);
    }

    #[test]
    fn tracks_line_numbers_and_skips_blank_lines() {
        let buf = TokenBuffer::lex("int x;\n\nint y;");
        let lines: Vec<usize> = buf.tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 1, 1, 3, 3, 3]);
    }

    #[test]
    fn shift_halts_at_end_of_input_even_in_warning_mode() {
        let mut buf = TokenBuffer::lex("int");
        let handler = Handler::new(Mode::Warning);
        buf.shift(&handler, None).unwrap();
        assert!(buf.shift(&handler, Some(";")).is_err());
    }

    #[test]
    fn unshift_inverts_shift() {
        let mut buf = TokenBuffer::lex("int x;");
        let handler = Handler::new(Mode::Warning);
        let tok = buf.shift(&handler, None).unwrap();
        buf.unshift(tok.clone());
        assert_eq!(buf.peek().unwrap(), &tok);
    }
}
