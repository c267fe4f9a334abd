use alloc::string::{String, ToString};
use alloc::vec::Vec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Number(u64),
    Count,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    EqEq,
    NotEq,
    Lt,
    Le,
    Gt,
    Ge,
    AndAnd,
    OrOr,
    Not,
    LParen,
    RParen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub message: String,
    pub offset: usize,
}

pub struct Lexer<'a> {
    input: &'a str,
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            offset: 0,
        }
    }

    pub fn lex_all(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            if self.offset >= self.bytes.len() {
                break;
            }
            let offset = self.offset;
            let byte = self.bytes[self.offset];
            let kind = match byte {
                b'(' => self.single(TokenKind::LParen),
                b')' => self.single(TokenKind::RParen),
                b'+' => self.single(TokenKind::Plus),
                b'-' => self.single(TokenKind::Minus),
                b'*' => self.single(TokenKind::Star),
                b'/' => self.single(TokenKind::Slash),
                b'%' => self.single(TokenKind::Percent),
                b'=' => self.pair(b'=', TokenKind::EqEq, "expected ==")?,
                b'!' => {
                    if self.peek_byte() == Some(b'=') {
                        self.offset += 2;
                        TokenKind::NotEq
                    } else {
                        self.single(TokenKind::Not)
                    }
                }
                b'<' => {
                    if self.peek_byte() == Some(b'=') {
                        self.offset += 2;
                        TokenKind::Le
                    } else {
                        self.single(TokenKind::Lt)
                    }
                }
                b'>' => {
                    if self.peek_byte() == Some(b'=') {
                        self.offset += 2;
                        TokenKind::Ge
                    } else {
                        self.single(TokenKind::Gt)
                    }
                }
                b'&' => self.pair(b'&', TokenKind::AndAnd, "expected &&")?,
                b'|' => self.pair(b'|', TokenKind::OrOr, "expected ||")?,
                b'0'..=b'9' => self.lex_number()?,
                _ => {
                    if byte.is_ascii_alphabetic() || byte == b'_' {
                        self.lex_word()?
                    } else {
                        return Err(self.error("unexpected character", offset));
                    }
                }
            };
            tokens.push(Token { kind, offset });
        }
        Ok(tokens)
    }

    fn lex_number(&mut self) -> Result<TokenKind, LexError> {
        let start = self.offset;
        while self.offset < self.bytes.len() && self.bytes[self.offset].is_ascii_digit() {
            self.offset += 1;
        }
        let digits = &self.input[start..self.offset];
        let value = digits
            .parse::<u64>()
            .map_err(|_| self.error("number out of range", start))?;
        Ok(TokenKind::Number(value))
    }

    // `or` and `and` are the textual operator spellings found in
    // catalog headers; they normalize to `||` and `&&` here.
    fn lex_word(&mut self) -> Result<TokenKind, LexError> {
        let start = self.offset;
        while self.offset < self.bytes.len() {
            let byte = self.bytes[self.offset];
            if byte.is_ascii_alphanumeric() || byte == b'_' {
                self.offset += 1;
            } else {
                break;
            }
        }
        match &self.input[start..self.offset] {
            "n" => Ok(TokenKind::Count),
            "or" => Ok(TokenKind::OrOr),
            "and" => Ok(TokenKind::AndAnd),
            _ => Err(self.error("unknown identifier", start)),
        }
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.offset += 1;
        kind
    }

    fn pair(
        &mut self,
        second: u8,
        kind: TokenKind,
        message: &str,
    ) -> Result<TokenKind, LexError> {
        if self.peek_byte() == Some(second) {
            self.offset += 2;
            Ok(kind)
        } else {
            Err(self.error(message, self.offset))
        }
    }

    fn skip_whitespace(&mut self) {
        while self.offset < self.bytes.len() {
            let byte = self.bytes[self.offset];
            if byte == b' ' || byte == b'\t' || byte == b'\r' || byte == b'\n' {
                self.offset += 1;
            } else {
                break;
            }
        }
    }

    fn peek_byte(&self) -> Option<u8> {
        self.bytes.get(self.offset + 1).copied()
    }

    fn error(&self, message: &str, offset: usize) -> LexError {
        LexError {
            message: message.to_string(),
            offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Lexer, TokenKind};

    #[test]
    fn lexes_comparison_rule() {
        let tokens = Lexer::new("n != 1").lex_all().expect("lex");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].kind, TokenKind::Count);
        assert_eq!(tokens[1].kind, TokenKind::NotEq);
        assert_eq!(tokens[2].kind, TokenKind::Number(1));
    }

    #[test]
    fn lexes_textual_or_as_logical_or() {
        let tokens = Lexer::new("n == 0 or n > 10").lex_all().expect("lex");
        assert!(tokens.iter().any(|token| token.kind == TokenKind::OrOr));
    }

    #[test]
    fn lexes_textual_and_as_logical_and() {
        let tokens = Lexer::new("n > 1 and n < 5").lex_all().expect("lex");
        assert!(tokens.iter().any(|token| token.kind == TokenKind::AndAnd));
    }

    #[test]
    fn lexes_arithmetic_operators() {
        let tokens = Lexer::new("(n % 10 + 2) * 3 / 4 - 1").lex_all().expect("lex");
        for kind in [
            TokenKind::LParen,
            TokenKind::Percent,
            TokenKind::Plus,
            TokenKind::RParen,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Minus,
        ] {
            assert!(tokens.iter().any(|token| token.kind == kind), "{kind:?}");
        }
    }

    #[test]
    fn records_token_offsets() {
        let tokens = Lexer::new("n  ==  1").lex_all().expect("lex");
        assert_eq!(tokens[0].offset, 0);
        assert_eq!(tokens[1].offset, 3);
        assert_eq!(tokens[2].offset, 7);
    }

    #[test]
    fn rejects_unknown_identifier() {
        let err = Lexer::new("m != 1").lex_all().expect_err("unknown identifier");
        assert_eq!(err.message, "unknown identifier");
        assert_eq!(err.offset, 0);
    }

    #[test]
    fn rejects_single_ampersand() {
        let err = Lexer::new("n > 1 & n < 5").lex_all().expect_err("bad operator");
        assert_eq!(err.message, "expected &&");
    }

    #[test]
    fn rejects_single_equals() {
        let err = Lexer::new("n = 1").lex_all().expect_err("bad operator");
        assert_eq!(err.message, "expected ==");
    }
}
