use crate::emitter::Emitter;
use model::{Block, Expr, Stmt};

/// Statement lowering. Statements in a block go out in source order; every
/// basic block opened here is closed by exactly one terminator.
impl Emitter {
    pub(crate) fn emit_block(&mut self, block: &Block) {
        for stmt in &block.statements {
            self.emit_stmt(stmt);
        }
    }

    pub(crate) fn emit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Block(block) => self.emit_block(block),
            Stmt::Assign { name, value } => {
                let value = self.emit_expr(value);
                self.line(&format!("store i32 {value}, i32* %{name}"));
            }
            Stmt::Print(name) => {
                let reg = self.fresh_reg();
                self.line(&format!("{reg} = load i32, i32* %{name}"));
                self.line(&format!(
                    "call i32 (i8*, ...) @printf(i8* getelementptr ([4 x i8], [4 x i8]* \
                     @.strP, i32 0, i32 0), i32 {reg})"
                ));
            }
            Stmt::Input(name) => {
                self.line(&format!(
                    "call i32 (i8*, ...) @scanf(i8* getelementptr ([3 x i8], [3 x i8]* \
                     @.strS, i32 0, i32 0), i32* %{name})"
                ));
            }
            Stmt::If {
                cond,
                then_block,
                else_block,
            } => self.emit_if(cond, then_block, else_block.as_ref()),
            Stmt::While { cond, body } => self.emit_while(cond, body),
        }
    }

    /// The condition lands in the predecessor block; without an else the
    /// false edge goes straight to the end label and the else label is
    /// never printed.
    fn emit_if(&mut self, cond: &Expr, then_block: &Block, else_block: Option<&Block>) {
        let then_label = self.fresh_label("if_then");
        let else_label = self.fresh_label("if_else");
        let end_label = self.fresh_label("if_end");

        let cond = self.emit_expr(cond);
        let false_target = if else_block.is_some() {
            &else_label
        } else {
            &end_label
        };
        self.line(&format!(
            "br i1 {cond}, label %{then_label}, label %{false_target}"
        ));

        self.label(&then_label);
        self.emit_block(then_block);
        self.line(&format!("br label %{end_label}"));

        if let Some(else_block) = else_block {
            self.label(&else_label);
            self.emit_block(else_block);
            self.line(&format!("br label %{end_label}"));
        }

        self.label(&end_label);
    }

    /// The condition is lowered inside its own block so the loop-back edge
    /// from the body re-evaluates it.
    fn emit_while(&mut self, cond: &Expr, body: &Block) {
        let cond_label = self.fresh_label("while_cond");
        let body_label = self.fresh_label("while_body");
        let end_label = self.fresh_label("while_end");

        self.line(&format!("br label %{cond_label}"));
        self.label(&cond_label);
        let cond = self.emit_expr(cond);
        self.line(&format!(
            "br i1 {cond}, label %{body_label}, label %{end_label}"
        ));

        self.label(&body_label);
        self.emit_block(body);
        self.line(&format!("br label %{cond_label}"));

        self.label(&end_label);
    }
}
