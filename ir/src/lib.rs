// take an abstract syntax tree, output an LLVM IR module in textual form
mod collector;
mod emitter;
mod expressions;
mod statements;

use emitter::Emitter;
use model::Program;

/// Lower a parsed program to a complete, self-contained LLVM IR module.
///
/// The emitter is total: once parsing has succeeded, lowering cannot fail.
pub fn emit(program: &Program) -> String {
    Emitter::new().emit_program(program)
}
