use crate::collector::collect_variables;
use model::Program;

/// AST to LLVM IR text emitter.
///
/// Owns the output buffer and the two counters shared across the whole
/// function: one for `%rN` registers, one for jump labels. Both only ever
/// grow, so every name is unique within `@main`.
pub struct Emitter {
    out: String,
    next_reg: usize,
    next_label: usize,
}

impl Emitter {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            next_reg: 1,
            next_label: 1,
        }
    }

    /// Emit the complete module for `program` and return the IR text.
    ///
    /// The module declares `printf`/`scanf`, defines `@main`, allocates one
    /// zero-initialized i32 slot per collected variable in the entry block
    /// (so every `alloca` dominates every use, and reads before assignment
    /// see 0), lowers the program body, and returns 0.
    pub fn emit_program(mut self, program: &Program) -> String {
        self.emit_header();

        self.out.push_str("define i32 @main() {\n");
        self.out.push_str("entry:\n");
        for name in collect_variables(&program.body) {
            self.line(&format!("%{name} = alloca i32"));
            self.line(&format!("store i32 0, i32* %{name}"));
        }
        self.out.push('\n');

        self.emit_block(&program.body);

        self.line("ret i32 0");
        self.out.push_str("}\n");
        self.out
    }

    fn emit_header(&mut self) {
        self.out.push_str("; Target: LLVM IR\n");
        self.out.push_str("declare i32 @printf(i8*, ...)\n");
        self.out.push_str("declare i32 @scanf(i8*, ...)\n");
        self.out.push_str(
            "@.strP = private unnamed_addr constant [4 x i8] c\"%d\\0A\\00\", align 1\n",
        );
        self.out
            .push_str("@.strS = private unnamed_addr constant [3 x i8] c\"%d\\00\", align 1\n");
        self.out.push('\n');
    }

    /// Append one instruction line at block indentation.
    pub(crate) fn line(&mut self, instruction: &str) {
        self.out.push_str("  ");
        self.out.push_str(instruction);
        self.out.push('\n');
    }

    /// Open a new basic block.
    pub(crate) fn label(&mut self, name: &str) {
        self.out.push_str(name);
        self.out.push_str(":\n");
    }

    pub(crate) fn fresh_reg(&mut self) -> String {
        let reg = format!("%r{}", self.next_reg);
        self.next_reg += 1;
        reg
    }

    pub(crate) fn fresh_label(&mut self, stem: &str) -> String {
        let label = format!("{stem}_{}", self.next_label);
        self.next_label += 1;
        label
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}
