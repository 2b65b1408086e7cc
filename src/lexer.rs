//! Lexical analysis for declaration values
//!
//! Splits the raw text of a declaration value into value tokens. Parenthesised
//! spans (`rgba(1, 2, 3, 0.5)`) are kept whole, quoted spans are unwrapped, and
//! `/` escapes a parenthesis or quote inside those spans.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    Plain,
    InParentheses,
    InQuotes,
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

pub struct ValueLexer<'a> {
    input: &'a str,
    split_values: bool,
    state: LexState,
    open_parentheses: usize,
    previous: Option<char>,
    value: String,
    values: Vec<String>,
}

impl<'a> ValueLexer<'a> {
    /// With `split_values`, whitespace separates tokens as well as `;`.
    pub fn new(input: &'a str, split_values: bool) -> Self {
        Self {
            input,
            split_values,
            state: LexState::Plain,
            open_parentheses: 0,
            previous: None,
            value: String::new(),
            values: Vec::new(),
        }
    }

    /// Runs the scanner to completion.
    ///
    /// Never fails: an unterminated quote or parenthesis keeps the tokens
    /// emitted before it and drops the unterminated remainder.
    pub fn tokenize(mut self) -> Vec<String> {
        for c in self.input.chars() {
            match self.state {
                LexState::Plain => self.lex_plain(c),
                LexState::InParentheses => self.lex_parentheses(c),
                LexState::InQuotes => self.lex_quotes(c),
            }
            self.previous = Some(c);
        }

        if self.state == LexState::Plain {
            self.flush();
        }

        self.values
    }

    fn lex_plain(&mut self, c: char) {
        match c {
            ';' => self.flush(),
            c if is_whitespace(c) => {
                if self.split_values {
                    self.flush();
                } else {
                    self.value.push(c);
                }
            }
            '"' => {
                self.quote_boundary();
                self.state = LexState::InQuotes;
            }
            '(' => {
                self.open_parentheses = 1;
                self.value.push(c);
                self.state = LexState::InParentheses;
            }
            _ => self.value.push(c),
        }
    }

    fn lex_parentheses(&mut self, c: char) {
        if self.previous == Some('/') {
            if c != '(' && c != ')' {
                self.value.push('/');
            }
            self.value.push(c);
            return;
        }

        match c {
            '(' => {
                self.open_parentheses += 1;
                self.value.push(c);
            }
            ')' => {
                self.open_parentheses = self.open_parentheses.saturating_sub(1);
                self.value.push(c);
                if self.open_parentheses == 0 {
                    self.state = LexState::Plain;
                }
            }
            '/' => {}
            _ => self.value.push(c),
        }
    }

    fn lex_quotes(&mut self, c: char) {
        if self.previous == Some('/') {
            if c != '"' {
                self.value.push('/');
            }
            self.value.push(c);
            return;
        }

        match c {
            '"' => {
                self.quote_boundary();
                self.state = LexState::Plain;
            }
            '/' => {}
            _ => self.value.push(c),
        }
    }

    /// Opening or closing quote: a token boundary when splitting, a single space otherwise.
    fn quote_boundary(&mut self) {
        if self.split_values {
            self.flush();
        } else {
            self.value.push(' ');
        }
    }

    fn flush(&mut self) {
        let trimmed = self.value.trim_matches(is_whitespace);
        if !trimmed.is_empty() {
            self.values.push(trimmed.to_string());
        }
        self.value.clear();
    }
}

/// Tokenizes a declaration value.
pub fn parse_property_values(values: &str, split_values: bool) -> Vec<String> {
    ValueLexer::new(values, split_values).tokenize()
}
