use j2p_ir::{Class, Method, ModifierFilter, Variable};

use crate::context::EmitCtx;
use crate::expr_emit::{emit_expr, member_name};
use crate::stmt_emit::emit_stmt;

fn push(out: &mut Vec<String>, depth: usize, text: impl Into<String>) {
    out.push(format!("{}{}", "    ".repeat(depth), text.into()));
}

/// Emit one class at `depth` (0 for a top-level class, 1+ for a nested
/// one), in the ordering spec §4.4 mandates: static variables, then
/// `__init__`, then instance methods. `pass` fills an otherwise-empty body
/// and class header/body are returned as already-indented lines.
pub(crate) fn emit_class(class: &Class, private: bool, depth: usize) -> Vec<String> {
    let mut out = Vec::new();
    push(&mut out, depth, format!("class {}({}):", class.name, class.superclass_name));

    let mut body = Vec::new();
    emit_statics(class, private, depth + 1, &mut body);
    emit_init(class, private, depth + 1, &mut body);
    emit_methods(class, private, depth + 1, &mut body);
    for nested in class.get_all_nested() {
        body.extend(emit_class(nested, private, depth + 1));
    }

    if body.is_empty() {
        push(&mut body, depth + 1, "pass");
    }
    out.extend(body);
    out
}

fn emit_statics(class: &Class, private: bool, depth: usize, out: &mut Vec<String>) {
    let filter = ModifierFilter {
        is_static: Some(true),
        ..Default::default()
    };
    for var in class.get_all_variables(Some(filter)) {
        let Some(init) = &var.initializer else { continue };
        let ctx = EmitCtx::new(class, private, Vec::new());
        let name = member_name(&var.name, var.modifiers.public, private);
        push(out, depth, format!("{name} = {}", emit_expr(init, &ctx)));
    }
}

fn instance_initializers(class: &Class) -> Vec<&Variable> {
    class
        .get_all_variables(Some(ModifierFilter {
            is_static: Some(false),
            ..Default::default()
        }))
        .into_iter()
        .filter(|v| v.initializer.is_some())
        .collect()
}

fn emit_instance_inits(inits: &[&Variable], class: &Class, private: bool, depth: usize, out: &mut Vec<String>) {
    for var in inits {
        let ctx = EmitCtx::new(class, private, Vec::new());
        let name = member_name(&var.name, var.modifiers.public, private);
        let init = var.initializer.as_ref().expect("filtered to initialized vars");
        push(out, depth, format!("self.{name} = {}", emit_expr(init, &ctx)));
    }
}

/// `__init__` synthesis (spec §4.4): omitted entirely when the class has
/// neither constructors nor initialized instance variables.
fn emit_init(class: &Class, private: bool, depth: usize, out: &mut Vec<String>) {
    let inits = instance_initializers(class);
    if class.constructors.is_empty() && inits.is_empty() {
        return;
    }
    emit_callable("__init__", &class.constructors, &inits, class, private, depth, out, false);
}

fn emit_methods(class: &Class, private: bool, depth: usize, out: &mut Vec<String>) {
    for name in class.get_all_method_names() {
        let overloads = class.get_method_overloads(name);
        let is_main = name == "main";
        if is_main {
            push(out, depth, "@classmethod");
        }
        let emitted_name = if name == "equals" { "__eq__" } else { name };
        emit_callable(emitted_name, overloads, &[], class, private, depth, out, is_main);
    }
}

/// Shared synthesis for a constructor or a method: a direct signature when
/// there is at most one overload, otherwise a `*args` signature with an
/// `if len(args) == N: ... elif ...` arity dispatch (spec §4.4, §9).
/// `instance_inits` is non-empty only for `__init__`.
#[allow(clippy::too_many_arguments)]
fn emit_callable(
    def_name: &str,
    overloads: &[Method],
    instance_inits: &[&Variable],
    class: &Class,
    private: bool,
    depth: usize,
    out: &mut Vec<String>,
    _is_main: bool,
) {
    if overloads.len() <= 1 {
        let params = overloads.first().map(|m| m.parameter_names.clone()).unwrap_or_default();
        let sig = if params.is_empty() {
            format!("def {def_name}(self):")
        } else {
            format!("def {def_name}(self, {}):", params.join(", "))
        };
        push(out, depth, sig);

        let mut body = Vec::new();
        emit_instance_inits(instance_inits, class, private, depth + 1, &mut body);
        if let Some(m) = overloads.first() {
            let mut ctx = EmitCtx::new(class, private, m.parameter_names.iter().cloned());
            for s in &m.body {
                emit_stmt(s, &mut ctx, depth + 1, &mut body);
            }
        }
        if body.is_empty() {
            push(&mut body, depth + 1, "pass");
        }
        out.extend(body);
        return;
    }

    push(out, depth, format!("def {def_name}(self, *args):"));
    let mut body = Vec::new();
    emit_instance_inits(instance_inits, class, private, depth + 1, &mut body);
    for (i, m) in overloads.iter().enumerate() {
        let kw = if i == 0 { "if" } else { "elif" };
        push(&mut body, depth + 1, format!("{kw} len(args) == {}:", m.arity()));
        let mut branch = Vec::new();
        if m.arity() > 0 {
            let tuple = m.parameter_names.iter().map(|p| format!("{p},")).collect::<Vec<_>>().join(" ");
            push(&mut branch, depth + 2, format!("({tuple}) = args"));
        }
        let mut ctx = EmitCtx::new(class, private, m.parameter_names.iter().cloned());
        for s in &m.body {
            emit_stmt(s, &mut ctx, depth + 2, &mut branch);
        }
        if branch.is_empty() {
            push(&mut branch, depth + 2, "pass");
        }
        body.extend(branch);
    }
    out.extend(body);
}
