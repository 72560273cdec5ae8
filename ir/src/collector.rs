use model::{Block, Expr, Stmt};
use std::collections::BTreeSet;

/// Collect every variable name assigned or read anywhere in the program.
///
/// The emitter allocates one entry-block slot per name, so each `alloca`
/// dominates every use without tracking definition sites. The sorted set
/// keeps the prologue, and with it the whole module, deterministic.
pub fn collect_variables(block: &Block) -> BTreeSet<String> {
    let mut variables = BTreeSet::new();
    collect_block(block, &mut variables);
    variables
}

fn collect_block(block: &Block, variables: &mut BTreeSet<String>) {
    for stmt in &block.statements {
        collect_stmt(stmt, variables);
    }
}

fn collect_stmt(stmt: &Stmt, variables: &mut BTreeSet<String>) {
    match stmt {
        Stmt::Block(block) => collect_block(block, variables),
        Stmt::Assign { name, value } => {
            variables.insert(name.clone());
            collect_expr(value, variables);
        }
        Stmt::If {
            cond,
            then_block,
            else_block,
        } => {
            collect_expr(cond, variables);
            collect_block(then_block, variables);
            if let Some(else_block) = else_block {
                collect_block(else_block, variables);
            }
        }
        Stmt::While { cond, body } => {
            collect_expr(cond, variables);
            collect_block(body, variables);
        }
        Stmt::Print(name) | Stmt::Input(name) => {
            variables.insert(name.clone());
        }
    }
}

fn collect_expr(expr: &Expr, variables: &mut BTreeSet<String>) {
    match expr {
        Expr::Constant(_) => {}
        Expr::Variable(name) => {
            variables.insert(name.clone());
        }
        Expr::Binary { left, right, .. } => {
            collect_expr(left, variables);
            collect_expr(right, variables);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::BinaryOp;

    fn assign(name: &str, value: Expr) -> Stmt {
        Stmt::Assign {
            name: name.to_string(),
            value,
        }
    }

    #[test]
    fn collects_assigned_and_read_names() {
        let block = Block {
            statements: vec![assign(
                "x",
                Expr::Binary {
                    left: Box::new(Expr::Variable("y".to_string())),
                    op: BinaryOp::Add,
                    right: Box::new(Expr::Constant(1)),
                },
            )],
        };
        let variables = collect_variables(&block);
        assert_eq!(
            variables.into_iter().collect::<Vec<_>>(),
            vec!["x".to_string(), "y".to_string()]
        );
    }

    #[test]
    fn collects_through_nested_control_flow() {
        let block = Block {
            statements: vec![Stmt::While {
                cond: Expr::Binary {
                    left: Box::new(Expr::Variable("i".to_string())),
                    op: BinaryOp::Less,
                    right: Box::new(Expr::Constant(10)),
                },
                body: Block {
                    statements: vec![Stmt::If {
                        cond: Expr::Binary {
                            left: Box::new(Expr::Variable("i".to_string())),
                            op: BinaryOp::EqualEqual,
                            right: Box::new(Expr::Constant(5)),
                        },
                        then_block: Block {
                            statements: vec![Stmt::Print("p".to_string())],
                        },
                        else_block: Some(Block {
                            statements: vec![Stmt::Input("q".to_string())],
                        }),
                    }],
                },
            }],
        };
        let variables = collect_variables(&block);
        assert_eq!(
            variables.into_iter().collect::<Vec<_>>(),
            vec!["i".to_string(), "p".to_string(), "q".to_string()]
        );
    }

    #[test]
    fn collects_inside_block_statements() {
        let block = Block {
            statements: vec![Stmt::Block(Block {
                statements: vec![assign("inner", Expr::Constant(0))],
            })],
        };
        let variables = collect_variables(&block);
        assert!(variables.contains("inner"));
    }

    #[test]
    fn duplicates_collapse() {
        let block = Block {
            statements: vec![
                assign("x", Expr::Constant(1)),
                assign("x", Expr::Variable("x".to_string())),
                Stmt::Print("x".to_string()),
            ],
        };
        assert_eq!(collect_variables(&block).len(), 1);
    }
}
