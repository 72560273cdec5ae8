use crate::parser::Parser;
use crate::{NonTerminal, SyntaxError};
use model::{BinaryOp, Expr, TokenKind};

/// FIRST(Atom) = FIRST(Prod) = FIRST(ExprArith): -, (, [VarName], [Number].
fn starts_atom(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Minus
            | TokenKind::OpenParenthesis
            | TokenKind::VarName { .. }
            | TokenKind::Number { .. }
    )
}

impl<'a> Parser<'a> {
    /// [10] ExprArith -> <Prod> <ExprArith'>
    /// [11] ExprArith' -> + <Prod> <ExprArith'>
    /// [12] ExprArith' -> - <Prod> <ExprArith'>
    /// [13] ExprArith' -> epsilon    (FOLLOW: ; ) } == <= < -> |)
    ///
    /// The prime rules fold into a left-associative chain.
    pub(crate) fn parse_expr_arith(&mut self) -> Result<Expr, SyntaxError> {
        if !self.check(&starts_atom) {
            return Err(self.syntax_error(
                NonTerminal::ExprArith,
                vec!["-", "(", "[VarName]", "[Number]"],
            ));
        }
        let mut expr = self.parse_prod()?;
        loop {
            let op = if self.match_token(|t| matches!(t, TokenKind::Plus)) {
                BinaryOp::Add
            } else if self.match_token(|t| matches!(t, TokenKind::Minus)) {
                BinaryOp::Sub
            } else if self.check(&|t: &TokenKind| {
                matches!(
                    t,
                    TokenKind::Semi
                        | TokenKind::CloseParenthesis
                        | TokenKind::CloseBrace
                        | TokenKind::EqualEqual
                        | TokenKind::LessEqual
                        | TokenKind::Less
                        | TokenKind::Implies
                        | TokenKind::Pipe
                )
            }) {
                break;
            } else {
                return Err(self.syntax_error(
                    NonTerminal::ExprArithPrime,
                    vec!["+", "-", ";", ")", "}", "==", "<=", "<", "->", "|"],
                ));
            };
            let right = self.parse_prod()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    /// [14] Prod -> <Atom> <Prod'>
    /// [15] Prod' -> * <Atom> <Prod'>
    /// [16] Prod' -> / <Atom> <Prod'>
    /// [17] Prod' -> epsilon    (FOLLOW of ExprArith' plus + and -)
    fn parse_prod(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.parse_atom()?;
        loop {
            let op = if self.match_token(|t| matches!(t, TokenKind::Star)) {
                BinaryOp::Mul
            } else if self.match_token(|t| matches!(t, TokenKind::Slash)) {
                BinaryOp::Div
            } else if self.check(&|t: &TokenKind| {
                matches!(
                    t,
                    TokenKind::Plus
                        | TokenKind::Minus
                        | TokenKind::Semi
                        | TokenKind::CloseParenthesis
                        | TokenKind::CloseBrace
                        | TokenKind::EqualEqual
                        | TokenKind::LessEqual
                        | TokenKind::Less
                        | TokenKind::Implies
                        | TokenKind::Pipe
                )
            }) {
                break;
            } else {
                return Err(self.syntax_error(
                    NonTerminal::ProdPrime,
                    vec!["*", "/", "+", "-", ";", ")", "}", "==", "<=", "<", "->", "|"],
                ));
            };
            let right = self.parse_atom()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    /// [18] Atom -> [VarName]
    /// [19] Atom -> [Number]
    /// [20] Atom -> ( <ExprArith> )
    /// [21] Atom -> - <Atom>
    ///
    /// Unary minus is represented as `0 - operand`, so the emitter needs no
    /// dedicated unary case; nesting `- - x` recurses right-associatively.
    fn parse_atom(&mut self) -> Result<Expr, SyntaxError> {
        if self.match_token(|t| matches!(t, TokenKind::Minus)) {
            let operand = self.parse_atom()?;
            return Ok(Expr::Binary {
                left: Box::new(Expr::Constant(0)),
                op: BinaryOp::Sub,
                right: Box::new(operand),
            });
        }
        if self.match_token(|t| matches!(t, TokenKind::OpenParenthesis)) {
            let expr = self.parse_expr_arith()?;
            self.expect(
                |t| matches!(t, TokenKind::CloseParenthesis),
                ")",
                NonTerminal::Atom,
            )?;
            return Ok(expr);
        }
        let kind = self.current().kind.clone();
        match kind {
            TokenKind::VarName { value } => {
                self.advance();
                Ok(Expr::Variable(value))
            }
            TokenKind::Number { value } => {
                self.advance();
                Ok(Expr::Constant(value))
            }
            _ => Err(self.syntax_error(
                NonTerminal::Atom,
                vec!["-", "(", "[VarName]", "[Number]"],
            )),
        }
    }

    /// [25] Cond -> <SimpleCond> <Cond'>
    /// [26] Cond' -> -> <Cond>
    /// [27] Cond' -> epsilon    (FOLLOW: |, })
    ///
    /// Implication recurses on the right, so `a -> b -> c` reads as
    /// `a -> (b -> c)`.
    pub(crate) fn parse_cond(&mut self) -> Result<Expr, SyntaxError> {
        if !self.check(&|t: &TokenKind| starts_atom(t) || matches!(t, TokenKind::Pipe)) {
            return Err(self.syntax_error(
                NonTerminal::Cond,
                vec!["|", "-", "(", "[VarName]", "[Number]"],
            ));
        }
        let left = self.parse_simple_cond()?;
        if self.match_token(|t| matches!(t, TokenKind::Implies)) {
            let right = self.parse_cond()?;
            Ok(Expr::Binary {
                left: Box::new(left),
                op: BinaryOp::Implies,
                right: Box::new(right),
            })
        } else if self.check(&|t: &TokenKind| {
            matches!(t, TokenKind::Pipe | TokenKind::CloseBrace)
        }) {
            Ok(left)
        } else {
            Err(self.syntax_error(NonTerminal::CondPrime, vec!["->", "|", "}"]))
        }
    }

    /// [28] SimpleCond -> | <Cond> |    (the grouping is transparent: the
    ///                                   inner condition node is returned
    ///                                   unchanged)
    /// [29] SimpleCond -> <ExprArith> <Comp> <ExprArith>
    fn parse_simple_cond(&mut self) -> Result<Expr, SyntaxError> {
        if self.match_token(|t| matches!(t, TokenKind::Pipe)) {
            let inner = self.parse_cond()?;
            self.expect(
                |t| matches!(t, TokenKind::Pipe),
                "|",
                NonTerminal::SimpleCond,
            )?;
            return Ok(inner);
        }
        if !self.check(&starts_atom) {
            return Err(self.syntax_error(
                NonTerminal::SimpleCond,
                vec!["|", "-", "(", "[VarName]", "[Number]"],
            ));
        }
        let left = self.parse_expr_arith()?;
        let op = self.parse_comp()?;
        let right = self.parse_expr_arith()?;
        Ok(Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        })
    }

    /// [30] Comp -> ==    [31] Comp -> <=    [32] Comp -> <
    fn parse_comp(&mut self) -> Result<BinaryOp, SyntaxError> {
        if self.match_token(|t| matches!(t, TokenKind::EqualEqual)) {
            Ok(BinaryOp::EqualEqual)
        } else if self.match_token(|t| matches!(t, TokenKind::LessEqual)) {
            Ok(BinaryOp::LessEqual)
        } else if self.match_token(|t| matches!(t, TokenKind::Less)) {
            Ok(BinaryOp::Less)
        } else {
            Err(self.syntax_error(NonTerminal::Comp, vec!["==", "<=", "<"]))
        }
    }
}
