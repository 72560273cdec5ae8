// take a stream of tokens, output an abstract syntax tree or an error
mod expressions;
mod parser;
mod statements;

use model::{Program, Token};
use std::fmt;
use thiserror::Error;

pub fn parse_tokens(tokens: &[Token]) -> Result<Program, SyntaxError> {
    let mut parser = parser::Parser::new(tokens);
    parser.parse_program()
}

/// A non-terminal of the grammar, named by syntax diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonTerminal {
    Program,
    Code,
    Instruction,
    Assign,
    If,
    IfTail,
    While,
    Output,
    Input,
    ExprArith,
    ExprArithPrime,
    Prod,
    ProdPrime,
    Atom,
    Cond,
    CondPrime,
    SimpleCond,
    Comp,
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NonTerminal::Program => "Program",
            NonTerminal::Code => "Code",
            NonTerminal::Instruction => "Instruction",
            NonTerminal::Assign => "Assign",
            NonTerminal::If => "If",
            NonTerminal::IfTail => "IfTail",
            NonTerminal::While => "While",
            NonTerminal::Output => "Output",
            NonTerminal::Input => "Input",
            NonTerminal::ExprArith => "ExprArith",
            NonTerminal::ExprArithPrime => "ExprArith'",
            NonTerminal::Prod => "Prod",
            NonTerminal::ProdPrime => "Prod'",
            NonTerminal::Atom => "Atom",
            NonTerminal::Cond => "Cond",
            NonTerminal::CondPrime => "Cond'",
            NonTerminal::SimpleCond => "SimpleCond",
            NonTerminal::Comp => "Comp",
        };
        f.write_str(name)
    }
}

/// Raised on the first token that fits neither the FIRST set of the
/// non-terminal being parsed nor a required terminal. The pipeline never
/// recovers: one syntax error abandons the compilation.
#[derive(Debug, Error, PartialEq, Eq)]
#[error(
    "Parsing Error at line {line} and column {column} trying to parse {non_terminal}: \
     expected {expected}, but got {got}",
    expected = .expected.join(", ")
)]
pub struct SyntaxError {
    pub line: usize,
    pub column: usize,
    pub non_terminal: NonTerminal,
    pub expected: Vec<&'static str>,
    pub got: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{BinaryOp, Block, Expr, Stmt};

    fn parse(source: &str) -> Result<Program, SyntaxError> {
        let tokens = lexer::lex(source).expect("lexing should succeed");
        parse_tokens(&tokens)
    }

    fn binary(left: Expr, op: BinaryOp, right: Expr) -> Expr {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    fn var(name: &str) -> Expr {
        Expr::Variable(name.to_string())
    }

    #[test]
    fn parse_minimal_program() {
        let program = parse("Prog P Is End").expect("parsing should succeed");
        assert_eq!(program.name, "P");
        assert!(program.body.statements.is_empty());
    }

    #[test]
    fn parse_assignment_with_precedence() {
        let program = parse("Prog P Is x = 1 + 2 * 3; End").expect("parsing should succeed");
        assert_eq!(
            program.body.statements,
            vec![Stmt::Assign {
                name: "x".to_string(),
                value: binary(
                    Expr::Constant(1),
                    BinaryOp::Add,
                    binary(Expr::Constant(2), BinaryOp::Mul, Expr::Constant(3)),
                ),
            }]
        );
    }

    #[test]
    fn subtraction_folds_left_associative() {
        let program = parse("Prog P Is x = a - b - c; End").expect("parsing should succeed");
        let expected = binary(
            binary(var("a"), BinaryOp::Sub, var("b")),
            BinaryOp::Sub,
            var("c"),
        );
        assert_eq!(
            program.body.statements,
            vec![Stmt::Assign {
                name: "x".to_string(),
                value: expected,
            }]
        );
    }

    #[test]
    fn unary_minus_lowers_to_zero_minus() {
        let program = parse("Prog P Is x = -y;  End").expect("parsing should succeed");
        assert_eq!(
            program.body.statements,
            vec![Stmt::Assign {
                name: "x".to_string(),
                value: binary(Expr::Constant(0), BinaryOp::Sub, var("y")),
            }]
        );
    }

    #[test]
    fn parentheses_override_precedence() {
        let program = parse("Prog P Is x = (1 + 2) * 3; End").expect("parsing should succeed");
        assert_eq!(
            program.body.statements,
            vec![Stmt::Assign {
                name: "x".to_string(),
                value: binary(
                    binary(Expr::Constant(1), BinaryOp::Add, Expr::Constant(2)),
                    BinaryOp::Mul,
                    Expr::Constant(3),
                ),
            }]
        );
    }

    #[test]
    fn if_without_else_has_no_else_block() {
        let program =
            parse("Prog P Is If { x < 1 } Then Print(x); End; End").expect("parsing should succeed");
        match &program.body.statements[0] {
            Stmt::If { else_block, .. } => assert!(else_block.is_none()),
            other => panic!("expected an If statement, got {other:?}"),
        }
    }

    #[test]
    fn empty_else_is_distinct_from_absent_else() {
        let program =
            parse("Prog P Is If { x < 1 } Then Print(x); Else End; End").expect("parsing should succeed");
        match &program.body.statements[0] {
            Stmt::If { else_block, .. } => {
                assert_eq!(else_block, &Some(Block { statements: vec![] }));
            }
            other => panic!("expected an If statement, got {other:?}"),
        }
    }

    #[test]
    fn parse_while_loop() {
        let program =
            parse("Prog P Is While { x < 3 } Do x = x + 1; End; End").expect("parsing should succeed");
        match &program.body.statements[0] {
            Stmt::While { cond, body } => {
                assert_eq!(cond, &binary(var("x"), BinaryOp::Less, Expr::Constant(3)));
                assert_eq!(body.statements.len(), 1);
            }
            other => panic!("expected a While statement, got {other:?}"),
        }
    }

    #[test]
    fn parse_print_and_input() {
        let program = parse("Prog P Is Input(n); Print(n); End").expect("parsing should succeed");
        assert_eq!(
            program.body.statements,
            vec![Stmt::Input("n".to_string()), Stmt::Print("n".to_string())]
        );
    }

    #[test]
    fn implication_folds_right_associative() {
        let program = parse("Prog P Is If { a == 1 -> b == 2 -> c == 3 } Then End; End")
            .expect("parsing should succeed");
        let leaf = |name: &str, value: i32| {
            binary(var(name), BinaryOp::EqualEqual, Expr::Constant(value))
        };
        match &program.body.statements[0] {
            Stmt::If { cond, .. } => {
                assert_eq!(
                    cond,
                    &binary(
                        leaf("a", 1),
                        BinaryOp::Implies,
                        binary(leaf("b", 2), BinaryOp::Implies, leaf("c", 3)),
                    )
                );
            }
            other => panic!("expected an If statement, got {other:?}"),
        }
    }

    #[test]
    fn pipe_grouping_is_transparent() {
        let program =
            parse("Prog P Is If { |x == 1| } Then End; End").expect("parsing should succeed");
        match &program.body.statements[0] {
            Stmt::If { cond, .. } => {
                assert_eq!(cond, &binary(var("x"), BinaryOp::EqualEqual, Expr::Constant(1)));
            }
            other => panic!("expected an If statement, got {other:?}"),
        }
    }

    #[test]
    fn comparison_in_condition_position() {
        let program =
            parse("Prog P Is If { x + 1 <= y * 2 } Then End; End").expect("parsing should succeed");
        match &program.body.statements[0] {
            Stmt::If { cond, .. } => {
                assert_eq!(
                    cond,
                    &binary(
                        binary(var("x"), BinaryOp::Add, Expr::Constant(1)),
                        BinaryOp::LessEqual,
                        binary(var("y"), BinaryOp::Mul, Expr::Constant(2)),
                    )
                );
            }
            other => panic!("expected an If statement, got {other:?}"),
        }
    }

    #[test]
    fn rejects_dangling_operator_at_semicolon() {
        let error = parse("Prog P Is x = 1 +; End").expect_err("parsing should fail");
        assert_eq!((error.line, error.column), (1, 17));
        assert_eq!(error.non_terminal, NonTerminal::Atom);
        assert_eq!(error.got, ";");
    }

    #[test]
    fn rejects_missing_semicolon() {
        let error = parse("Prog P Is x = 1 End").expect_err("parsing should fail");
        assert_eq!(error.non_terminal, NonTerminal::ExprArithPrime);
        assert_eq!(error.got, "End");
        assert!(error.expected.contains(&"+"));
        assert!(error.expected.contains(&";"));
    }

    #[test]
    fn rejects_trailing_tokens_after_end() {
        let error = parse("Prog P Is End x").expect_err("parsing should fail");
        assert_eq!(error.non_terminal, NonTerminal::Program);
        assert_eq!(error.expected, vec!["EOS"]);
        assert_eq!(error.got, "x");
    }

    #[test]
    fn rejects_missing_comparison_in_condition() {
        let error = parse("Prog P Is If { x } Then End; End").expect_err("parsing should fail");
        assert_eq!(error.non_terminal, NonTerminal::Comp);
        assert_eq!(error.expected, vec!["==", "<=", "<"]);
        assert_eq!(error.got, "}");
    }

    #[test]
    fn error_message_follows_diagnostic_format() {
        let error = parse("Prog P Is x = 1 +; End").expect_err("parsing should fail");
        assert_eq!(
            error.to_string(),
            "Parsing Error at line 1 and column 17 trying to parse Atom: \
             expected -, (, [VarName], [Number], but got ;"
        );
    }

    #[test]
    fn error_position_spans_lines() {
        let error = parse("Prog P Is\nx = 1 +\n; End").expect_err("parsing should fail");
        assert_eq!((error.line, error.column), (3, 0));
    }
}
