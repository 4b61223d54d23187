use j2p_ir::Stmt;

use crate::context::EmitCtx;
use crate::expr_emit::{emit_expr, render_chain};

fn push(out: &mut Vec<String>, depth: usize, text: impl Into<String>) {
    out.push(format!("{}{}", "    ".repeat(depth), text.into()));
}

/// Emit one statement (spec §4.4). `ctx.locals` accumulates as `Declare`
/// statements are walked, matching the flat per-method locals set spec §9
/// describes — no block scoping is modeled.
pub(crate) fn emit_stmt(stmt: &Stmt, ctx: &mut EmitCtx, depth: usize, out: &mut Vec<String>) {
    match stmt {
        Stmt::Return(None) => push(out, depth, "return"),
        Stmt::Return(Some(e)) => push(out, depth, format!("return {}", emit_expr(e, ctx))),
        Stmt::Declare(vars) => {
            for v in vars {
                if let Some(init) = &v.initializer {
                    push(out, depth, format!("{} = {}", v.name, emit_expr(init, ctx)));
                }
                ctx.locals.insert(v.name.clone());
            }
        }
        Stmt::Assign(target, expr) => {
            push(out, depth, format!("{} = {}", render_chain(target, ctx, false), emit_expr(expr, ctx)));
        }
        Stmt::Call(expr) => push(out, depth, emit_expr(expr, ctx)),
        Stmt::Block(stmts) => {
            for s in stmts {
                emit_stmt(s, ctx, depth, out);
            }
        }
        Stmt::If(pred, then_branch, else_branch) => {
            push(out, depth, format!("if {}:", emit_expr(pred, ctx)));
            emit_as_block(then_branch, ctx, depth + 1, out);
            if let Some(else_branch) = else_branch {
                emit_else(else_branch, ctx, depth, out);
            }
        }
        // Reserved stubs (spec §9): the parser never constructs these with
        // a body to translate, but emit something syntactically valid if
        // one ever reaches here.
        Stmt::For | Stmt::While => push(out, depth, "pass"),
    }
}

/// Run `stmt`'s statements at `depth`, flattening a `Block` rather than
/// nesting it (spec §4.4's statement emission has no braces to preserve).
fn emit_as_block(stmt: &Stmt, ctx: &mut EmitCtx, depth: usize, out: &mut Vec<String>) {
    if let Stmt::Block(stmts) = stmt {
        for s in stmts {
            emit_stmt(s, ctx, depth, out);
        }
    } else {
        emit_stmt(stmt, ctx, depth, out);
    }
}

/// Collapse a chain of `else { if (...) ... }` into `elif` (spec §8
/// Scenario D: "(or nested `else: if`)" permits either, but `elif` reads
/// as the idiomatic P rendition).
fn emit_else(else_branch: &Stmt, ctx: &mut EmitCtx, depth: usize, out: &mut Vec<String>) {
    if let Stmt::If(pred, then_branch, next_else) = else_branch {
        push(out, depth, format!("elif {}:", emit_expr(pred, ctx)));
        emit_as_block(then_branch, ctx, depth + 1, out);
        if let Some(next_else) = next_else {
            emit_else(next_else, ctx, depth, out);
        }
    } else {
        push(out, depth, "else:");
        emit_as_block(else_branch, ctx, depth + 1, out);
    }
}
