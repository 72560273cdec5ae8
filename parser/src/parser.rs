use crate::{NonTerminal, SyntaxError};
use model::{Token, TokenKind};

/// Fallback look-ahead for a token vector that does not end in `Eos`.
static EOS: Token = Token {
    kind: TokenKind::Eos,
    line: 0,
    column: 0,
};

/// Core parser struct that maintains parsing state: the token stream and
/// the cursor of the single look-ahead symbol. The parser never backs up.
pub(crate) struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// The look-ahead token.
    pub(crate) fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&EOS)
    }

    /// Consume one token.
    pub(crate) fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    pub(crate) fn check<F>(&self, predicate: &F) -> bool
    where
        F: Fn(&TokenKind) -> bool,
    {
        predicate(&self.current().kind)
    }

    pub(crate) fn match_token<F>(&mut self, predicate: F) -> bool
    where
        F: Fn(&TokenKind) -> bool,
    {
        if self.check(&predicate) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Match a required terminal or fail with its spelling as the only
    /// expected alternative.
    pub(crate) fn expect<F>(
        &mut self,
        predicate: F,
        spelling: &'static str,
        non_terminal: NonTerminal,
    ) -> Result<(), SyntaxError>
    where
        F: Fn(&TokenKind) -> bool,
    {
        if self.match_token(predicate) {
            Ok(())
        } else {
            Err(self.syntax_error(non_terminal, vec![spelling]))
        }
    }

    pub(crate) fn expect_var_name(
        &mut self,
        non_terminal: NonTerminal,
    ) -> Result<String, SyntaxError> {
        if let TokenKind::VarName { value } = &self.current().kind {
            let name = value.clone();
            self.advance();
            Ok(name)
        } else {
            Err(self.syntax_error(non_terminal, vec!["[VarName]"]))
        }
    }

    pub(crate) fn expect_prog_name(
        &mut self,
        non_terminal: NonTerminal,
    ) -> Result<String, SyntaxError> {
        if let TokenKind::ProgName { value } = &self.current().kind {
            let name = value.clone();
            self.advance();
            Ok(name)
        } else {
            Err(self.syntax_error(non_terminal, vec!["[ProgName]"]))
        }
    }

    /// A syntax error positioned on the look-ahead token.
    pub(crate) fn syntax_error(
        &self,
        non_terminal: NonTerminal,
        expected: Vec<&'static str>,
    ) -> SyntaxError {
        let token = self.current();
        SyntaxError {
            line: token.line,
            column: token.column,
            non_terminal,
            expected,
            got: token.kind.to_string(),
        }
    }
}
