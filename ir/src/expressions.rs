use crate::emitter::Emitter;
use model::{BinaryOp, Expr};

/// Expression lowering. Children go out left before right.
impl Emitter {
    /// Lower an expression and return the operand naming its value: the
    /// literal text for a constant, a `%rN` register otherwise.
    pub(crate) fn emit_expr(&mut self, expr: &Expr) -> String {
        match expr {
            Expr::Constant(value) => value.to_string(),
            Expr::Variable(name) => {
                let reg = self.fresh_reg();
                self.line(&format!("{reg} = load i32, i32* %{name}"));
                reg
            }
            Expr::Binary { left, op, right } => self.emit_binary(left, *op, right),
        }
    }

    fn emit_binary(&mut self, left: &Expr, op: BinaryOp, right: &Expr) -> String {
        if op == BinaryOp::Implies {
            // p -> q rewrites to (not p) or q. Both sides are always
            // evaluated; the language does not mandate short-circuit.
            let left = self.emit_expr(left);
            let negated = self.fresh_reg();
            self.line(&format!("{negated} = xor i1 {left}, 1"));
            let right = self.emit_expr(right);
            let result = self.fresh_reg();
            self.line(&format!("{result} = or i1 {negated}, {right}"));
            return result;
        }

        let left = self.emit_expr(left);
        let right = self.emit_expr(right);
        let result = self.fresh_reg();
        let instruction = match op {
            BinaryOp::Add => format!("{result} = add i32 {left}, {right}"),
            BinaryOp::Sub => format!("{result} = sub i32 {left}, {right}"),
            BinaryOp::Mul => format!("{result} = mul i32 {left}, {right}"),
            BinaryOp::Div => format!("{result} = sdiv i32 {left}, {right}"),
            BinaryOp::EqualEqual => format!("{result} = icmp eq i32 {left}, {right}"),
            BinaryOp::Less => format!("{result} = icmp slt i32 {left}, {right}"),
            BinaryOp::LessEqual => format!("{result} = icmp sle i32 {left}, {right}"),
            BinaryOp::Implies => unreachable!("implication is handled above"),
        };
        self.line(&instruction);
        result
    }
}
