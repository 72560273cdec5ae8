use crate::parser::Parser;
use crate::{NonTerminal, SyntaxError};
use model::{Block, Program, Stmt, TokenKind};

impl<'a> Parser<'a> {
    /// [1] Program -> Prog [ProgName] Is <Code> End
    ///
    /// The whole input must be one program: the token after `End` has to be
    /// the end of the stream.
    pub(crate) fn parse_program(&mut self) -> Result<Program, SyntaxError> {
        self.expect(|t| matches!(t, TokenKind::Prog), "Prog", NonTerminal::Program)?;
        let name = self.expect_prog_name(NonTerminal::Program)?;
        self.expect(|t| matches!(t, TokenKind::Is), "Is", NonTerminal::Program)?;
        let body = self.parse_code()?;
        self.expect(|t| matches!(t, TokenKind::End), "End", NonTerminal::Program)?;
        self.expect(|t| matches!(t, TokenKind::Eos), "EOS", NonTerminal::Program)?;
        Ok(Program { name, body })
    }

    /// [2] Code -> <Instruction> ; <Code>
    /// [3] Code -> epsilon            (FOLLOW: End, Else)
    pub(crate) fn parse_code(&mut self) -> Result<Block, SyntaxError> {
        let mut statements = Vec::new();
        loop {
            if self.check(&|t: &TokenKind| {
                matches!(
                    t,
                    TokenKind::VarName { .. }
                        | TokenKind::If
                        | TokenKind::While
                        | TokenKind::Print
                        | TokenKind::Input
                )
            }) {
                statements.push(self.parse_instruction()?);
                self.expect(|t| matches!(t, TokenKind::Semi), ";", NonTerminal::Code)?;
            } else if self.check(&|t: &TokenKind| matches!(t, TokenKind::End | TokenKind::Else)) {
                break;
            } else {
                return Err(self.syntax_error(
                    NonTerminal::Code,
                    vec!["[VarName]", "If", "While", "Print", "Input", "End", "Else"],
                ));
            }
        }
        Ok(Block { statements })
    }

    /// [4]-[8] Instruction -> <Assign> | <If> | <While> | <Output> | <Input>
    fn parse_instruction(&mut self) -> Result<Stmt, SyntaxError> {
        if self.check(&|t: &TokenKind| matches!(t, TokenKind::VarName { .. })) {
            self.parse_assign()
        } else if self.check(&|t: &TokenKind| matches!(t, TokenKind::If)) {
            self.parse_if()
        } else if self.check(&|t: &TokenKind| matches!(t, TokenKind::While)) {
            self.parse_while()
        } else if self.check(&|t: &TokenKind| matches!(t, TokenKind::Print)) {
            self.parse_output()
        } else if self.check(&|t: &TokenKind| matches!(t, TokenKind::Input)) {
            self.parse_input()
        } else {
            Err(self.syntax_error(
                NonTerminal::Instruction,
                vec!["[VarName]", "If", "While", "Print", "Input"],
            ))
        }
    }

    /// [9] Assign -> [VarName] = <ExprArith>
    fn parse_assign(&mut self) -> Result<Stmt, SyntaxError> {
        let name = self.expect_var_name(NonTerminal::Assign)?;
        self.expect(|t| matches!(t, TokenKind::Equal), "=", NonTerminal::Assign)?;
        let value = self.parse_expr_arith()?;
        Ok(Stmt::Assign { name, value })
    }

    /// [22] If -> If { <Cond> } Then <Code> <IfTail>
    /// [23] IfTail -> End
    /// [24] IfTail -> Else <Code> End
    fn parse_if(&mut self) -> Result<Stmt, SyntaxError> {
        self.expect(|t| matches!(t, TokenKind::If), "If", NonTerminal::If)?;
        self.expect(|t| matches!(t, TokenKind::OpenBrace), "{", NonTerminal::If)?;
        let cond = self.parse_cond()?;
        self.expect(|t| matches!(t, TokenKind::CloseBrace), "}", NonTerminal::If)?;
        self.expect(|t| matches!(t, TokenKind::Then), "Then", NonTerminal::If)?;
        let then_block = self.parse_code()?;

        if self.match_token(|t| matches!(t, TokenKind::Else)) {
            let else_block = self.parse_code()?;
            self.expect(|t| matches!(t, TokenKind::End), "End", NonTerminal::IfTail)?;
            Ok(Stmt::If {
                cond,
                then_block,
                else_block: Some(else_block),
            })
        } else if self.match_token(|t| matches!(t, TokenKind::End)) {
            Ok(Stmt::If {
                cond,
                then_block,
                else_block: None,
            })
        } else {
            Err(self.syntax_error(NonTerminal::IfTail, vec!["End", "Else"]))
        }
    }

    /// [33] While -> While { <Cond> } Do <Code> End
    fn parse_while(&mut self) -> Result<Stmt, SyntaxError> {
        self.expect(|t| matches!(t, TokenKind::While), "While", NonTerminal::While)?;
        self.expect(|t| matches!(t, TokenKind::OpenBrace), "{", NonTerminal::While)?;
        let cond = self.parse_cond()?;
        self.expect(|t| matches!(t, TokenKind::CloseBrace), "}", NonTerminal::While)?;
        self.expect(|t| matches!(t, TokenKind::Do), "Do", NonTerminal::While)?;
        let body = self.parse_code()?;
        self.expect(|t| matches!(t, TokenKind::End), "End", NonTerminal::While)?;
        Ok(Stmt::While { cond, body })
    }

    /// [34] Output -> Print ( [VarName] )
    fn parse_output(&mut self) -> Result<Stmt, SyntaxError> {
        self.expect(|t| matches!(t, TokenKind::Print), "Print", NonTerminal::Output)?;
        self.expect(
            |t| matches!(t, TokenKind::OpenParenthesis),
            "(",
            NonTerminal::Output,
        )?;
        let name = self.expect_var_name(NonTerminal::Output)?;
        self.expect(
            |t| matches!(t, TokenKind::CloseParenthesis),
            ")",
            NonTerminal::Output,
        )?;
        Ok(Stmt::Print(name))
    }

    /// [35] Input -> Input ( [VarName] )
    fn parse_input(&mut self) -> Result<Stmt, SyntaxError> {
        self.expect(|t| matches!(t, TokenKind::Input), "Input", NonTerminal::Input)?;
        self.expect(
            |t| matches!(t, TokenKind::OpenParenthesis),
            "(",
            NonTerminal::Input,
        )?;
        let name = self.expect_var_name(NonTerminal::Input)?;
        self.expect(
            |t| matches!(t, TokenKind::CloseParenthesis),
            ")",
            NonTerminal::Input,
        )?;
        Ok(Stmt::Input(name))
    }
}
