use j2p_ir::{BinOp, Expr, IdentifierChain, Literal, New, Segment, UnaryOp};

use crate::context::EmitCtx;

/// Emit one expression as *P* source text (spec §4.4), as a standalone,
/// statement-level expression (not nested inside another expression).
pub(crate) fn emit_expr(expr: &Expr, ctx: &EmitCtx) -> String {
    emit_expr_ctx(expr, ctx, false)
}

/// Emit `expr` knowing it is a sub-expression of another expression (an
/// operand, an argument, an index, an array element, ...). Threading this
/// down lets the `.equals` rewrite (spec §4.4: "`.equals(rhs)` is
/// rewritten to `CHAIN == rhs`; if any outer context expects a
/// sub-expression, the result is parenthesized") know whether it needs to
/// parenthesize its `==` so an enclosing `Binary` doesn't silently fold it
/// into a Python chained comparison (`a == b is c` instead of
/// `(a == b) is c`).
fn emit_sub_expr(expr: &Expr, ctx: &EmitCtx) -> String {
    emit_expr_ctx(expr, ctx, true)
}

fn emit_expr_ctx(expr: &Expr, ctx: &EmitCtx, nested: bool) -> String {
    match expr {
        Expr::Literal(lit) => emit_literal(lit),
        Expr::Identifier(chain) => render_chain(chain, ctx, nested),
        Expr::ArrayLiteral(elems) => {
            let items: Vec<String> = elems.iter().map(|e| emit_sub_expr(e, ctx)).collect();
            format!("[{}]", items.join(", "))
        }
        Expr::New(New::Object { type_name, args }) => {
            let items: Vec<String> = args.iter().map(|a| emit_sub_expr(a, ctx)).collect();
            format!("{type_name}({})", items.join(", "))
        }
        Expr::New(New::Array { element_type, sizes }) => emit_array_dim(element_type, sizes, 0, ctx),
        Expr::Unary(op, operand) => {
            let inner = emit_sub_expr(operand, ctx);
            match op {
                UnaryOp::Plus => format!("+{inner}"),
                UnaryOp::Minus => format!("-{inner}"),
                // `&&`/`||` rewrite to `and`/`or`; `!` completes that same
                // logical-operator rewrite since bare `!x` isn't valid P.
                UnaryOp::Not => format!("not {inner}"),
            }
        }
        Expr::Binary(lhs, op, rhs) => {
            let l = emit_sub_expr(lhs, ctx);
            let r = emit_sub_expr(rhs, ctx);
            format!("{l} {} {r}", emit_binop(*op))
        }
        Expr::Parenthesized(inner) => format!("({})", emit_expr(inner, ctx)),
    }
}

fn emit_literal(lit: &Literal) -> String {
    match lit {
        Literal::Number(s) => s.clone(),
        Literal::Str(s) => format!("\"{s}\""),
        Literal::Bool(true) => "True".to_string(),
        Literal::Bool(false) => "False".to_string(),
        Literal::Null => "None".to_string(),
    }
}

fn emit_binop(op: BinOp) -> &'static str {
    match op {
        BinOp::Eq => "is",
        BinOp::And => "and",
        BinOp::Or => "or",
        other => other.source_token(),
    }
}

/// `true` for the numeric datatype keywords whose array default is `0`;
/// `boolean` defaults to `False`; everything else (reference types,
/// including `String`) defaults to `None` (spec §4.4).
fn default_for_type(element_type: &str) -> &'static str {
    match element_type {
        "int" | "short" | "long" | "float" | "double" | "byte" => "0",
        "boolean" => "False",
        _ => "None",
    }
}

fn literal_int(expr: &Expr) -> Option<usize> {
    match expr {
        Expr::Literal(Literal::Number(s)) => s.parse::<usize>().ok(),
        _ => None,
    }
}

/// Emits one dimension of a `new T[...]...` array constructor. When a
/// dimension's size is a literal integer the corresponding worked example
/// (spec §8 Scenario C) expands it into a literal list of repeated default
/// elements; for a non-literal size (an identifier or other expression)
/// this falls back to the documented nested-comprehension form, since the
/// element count isn't known at translation time.
fn emit_array_dim(element_type: &str, sizes: &[Expr], dim: usize, ctx: &EmitCtx) -> String {
    let is_last = dim == sizes.len() - 1;
    let inner = if is_last {
        default_for_type(element_type).to_string()
    } else {
        emit_array_dim(element_type, sizes, dim + 1, ctx)
    };

    match literal_int(&sizes[dim]) {
        Some(n) => {
            let elems = vec![inner; n].join(", ");
            format!("[{elems}]")
        }
        None => {
            let size_str = emit_sub_expr(&sizes[dim], ctx);
            format!("[{inner} for _ in range({size_str})]")
        }
    }
}

/// Resolve a bare name per spec §9's precedence: `this` → self-reference,
/// then locals, then instance member, then static member, then pass
/// through unchanged (an inherited or external name the Class Model
/// doesn't record).
fn resolve_name(name: &str, ctx: &EmitCtx) -> String {
    if name == "this" {
        return "self".to_string();
    }
    if ctx.locals.contains(name) {
        return name.to_string();
    }
    if let Some(var) = ctx.class.get_variable(name) {
        let member = member_name(var.name.as_str(), var.modifiers.public, ctx.private);
        return if var.modifiers.is_static {
            format!("{}.{member}", ctx.class.name)
        } else {
            format!("self.{member}")
        };
    }
    let overloads = ctx.class.get_method_overloads(name);
    if !overloads.is_empty() {
        let is_static = overloads.iter().all(|m| m.modifiers.is_static);
        return if is_static {
            format!("{}.{name}", ctx.class.name)
        } else {
            format!("self.{name}")
        };
    }
    name.to_string()
}

/// Applies the `--private` single-underscore prefix to a variable's
/// emitted name (not methods — spec §4.4 only calls this out for
/// variables). Used both at the declaration site and at every reference.
pub(crate) fn member_name(name: &str, is_public: bool, private_flag: bool) -> String {
    if private_flag && !is_public {
        format!("_{name}")
    } else {
        name.to_string()
    }
}

/// Render an identifier/attribute chain, applying the host-library and
/// member rewrites spec §4.4 documents (`System.out.println` → `print`,
/// `.length` → `len(...)`, `.equals(x)` → `== x`) on top of generic
/// `.name` / `[index]` / `(call)` segment emission. `nested` is `true`
/// when this chain is itself a sub-expression of another expression (an
/// operand, an argument, ...) — it decides whether a `.equals` rewrite
/// needs to parenthesize its `==` (spec §4.4).
pub(crate) fn render_chain(chain: &IdentifierChain, ctx: &EmitCtx, nested: bool) -> String {
    let segs = &chain.segments;

    if let (Some("System"), Some(Segment::Name(out)), Some(Segment::Name(println)), Some(Segment::Call(args))) = (
        chain.head(),
        segs.get(1),
        segs.get(2),
        segs.get(3),
    ) {
        if out == "out" && println == "println" {
            let rendered: Vec<String> = args.iter().map(|a| emit_sub_expr(a, ctx)).collect();
            let mut current = format!("print({})", rendered.join(", "));
            return render_tail(&mut current, segs, 4, ctx, nested);
        }
    }

    let head = match chain.head() {
        Some(name) => resolve_name(name, ctx),
        None => String::new(),
    };
    let mut current = head;
    render_tail(&mut current, segs, 1, ctx, nested)
}

fn render_tail(current: &mut String, segs: &[Segment], mut idx: usize, ctx: &EmitCtx, nested: bool) -> String {
    while idx < segs.len() {
        match &segs[idx] {
            Segment::Name(n) if n == "length" => {
                *current = format!("len({current})");
                idx += 1;
                // consume a stray no-arg `()` some writers might leave after `.length`.
                if let Some(Segment::Call(args)) = segs.get(idx) {
                    if args.is_empty() {
                        idx += 1;
                    }
                }
            }
            Segment::Name(n) if n == "equals" => {
                if let Some(Segment::Call(args)) = segs.get(idx + 1) {
                    let rhs = args
                        .first()
                        .map(|e| emit_sub_expr(e, ctx))
                        .unwrap_or_default();
                    let comparison = format!("{current} == {rhs}");
                    // Parenthesize whenever this comparison isn't the
                    // whole expression: either an outer context nested us
                    // (e.g. `a.equals(b) == c`, spec §4.4), or more chain
                    // segments still follow it (e.g. `.equals(b).foo`).
                    let needs_parens = nested || idx + 2 < segs.len();
                    *current = if needs_parens {
                        format!("({comparison})")
                    } else {
                        comparison
                    };
                    idx += 2;
                } else {
                    *current = format!("{current}.equals");
                    idx += 1;
                }
            }
            Segment::Name(n) => {
                *current = format!("{current}.{n}");
                idx += 1;
            }
            Segment::Index(e) => {
                *current = format!("{current}[{}]", emit_sub_expr(e, ctx));
                idx += 1;
            }
            Segment::Call(args) => {
                let rendered: Vec<String> = args.iter().map(|a| emit_sub_expr(a, ctx)).collect();
                *current = format!("{current}({})", rendered.join(", "));
                idx += 1;
            }
        }
    }
    current.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use j2p_ir::{Class, Modifiers, Variable};

    fn ctx(class: &Class) -> EmitCtx<'_> {
        EmitCtx::new(class, false, Vec::new())
    }

    #[test]
    fn array_constructor_expands_literal_sizes() {
        let class = Class::new("Ex");
        let c = ctx(&class);
        let sizes = vec![Expr::Literal(Literal::Number("3".into()))];
        assert_eq!(emit_array_dim("int", &sizes, 0, &c), "[0, 0, 0]");
    }

    #[test]
    fn array_constructor_nests_for_multiple_dimensions() {
        let class = Class::new("Ex");
        let c = ctx(&class);
        let sizes = vec![
            Expr::Literal(Literal::Number("2".into())),
            Expr::Literal(Literal::Number("3".into())),
        ];
        assert_eq!(
            emit_array_dim("boolean", &sizes, 0, &c),
            "[[False, False, False], [False, False, False]]"
        );
    }

    #[test]
    fn array_constructor_falls_back_to_comprehension_for_dynamic_size() {
        let mut class = Class::new("Ex");
        let handler = j2p_util::diagnostic::Handler::new(j2p_util::diagnostic::Mode::Fatal);
        class
            .add_variable(
                Variable {
                    modifiers: Modifiers::new(true, false),
                    name: "n".to_string(),
                    initializer: None,
                },
                &handler,
                1,
            )
            .unwrap();
        let mut locals = std::collections::HashSet::new();
        locals.insert("n".to_string());
        let c = EmitCtx::new(&class, false, locals);
        let sizes = vec![Expr::ident("n")];
        assert_eq!(emit_array_dim("int", &sizes, 0, &c), "[0 for _ in range(n)]");
    }

    #[test]
    fn system_out_println_becomes_print() {
        let class = Class::new("Ex");
        let c = ctx(&class);
        let mut chain = IdentifierChain::name("System");
        chain.push(Segment::Name("out".into()));
        chain.push(Segment::Name("println".into()));
        chain.push(Segment::Call(vec![Expr::Literal(Literal::Str("hi".into()))]));
        assert_eq!(render_chain(&chain, &c, false), "print(\"hi\")");
    }

    #[test]
    fn length_field_access_becomes_len_call() {
        let class = Class::new("Ex");
        let c = ctx(&class);
        let mut chain = IdentifierChain::name("arr");
        chain.push(Segment::Name("length".into()));
        assert_eq!(render_chain(&chain, &c, false), "len(arr)");
    }

    #[test]
    fn equals_call_becomes_comparison() {
        let class = Class::new("Ex");
        let c = ctx(&class);
        let mut chain = IdentifierChain::name("a");
        chain.push(Segment::Name("equals".into()));
        chain.push(Segment::Call(vec![Expr::ident("b")]));
        assert_eq!(render_chain(&chain, &c, false), "a == b");
    }

    #[test]
    fn equals_call_is_parenthesized_when_nested_in_a_binary() {
        // `a.equals(b) == c` must not emit `a == b is c`, which Python
        // reads as a chained comparison `(a == b) and (b is c)` rather
        // than the intended `(a == b) is c` (spec §4.4).
        let class = Class::new("Ex");
        let c = ctx(&class);
        let mut lhs_chain = IdentifierChain::name("a");
        lhs_chain.push(Segment::Name("equals".into()));
        lhs_chain.push(Segment::Call(vec![Expr::ident("b")]));
        let expr = Expr::Binary(
            Box::new(Expr::Identifier(lhs_chain)),
            j2p_ir::BinOp::Eq,
            Box::new(Expr::ident("c")),
        );
        assert_eq!(emit_expr(&expr, &c), "(a == b) is c");
    }

    #[test]
    fn equals_call_is_parenthesized_when_more_segments_follow() {
        let class = Class::new("Ex");
        let c = ctx(&class);
        let mut chain = IdentifierChain::name("a");
        chain.push(Segment::Name("equals".into()));
        chain.push(Segment::Call(vec![Expr::ident("b")]));
        chain.push(Segment::Name("foo".into()));
        assert_eq!(render_chain(&chain, &c, false), "(a == b).foo");
    }

    #[test]
    fn this_rewrites_to_self() {
        let class = Class::new("Ex");
        let c = ctx(&class);
        assert_eq!(render_chain(&IdentifierChain::name("this"), &c, false), "self");
    }
}
