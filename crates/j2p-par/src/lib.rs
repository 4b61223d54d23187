//! The Parser (spec §4.3): a recursive-descent consumer of the Token
//! Buffer that builds the Class Model. Never backtracks beyond one
//! `unshift`; every rule consumes its full syntactic form, including
//! closing delimiters.

mod expr;
mod member;
mod parser;
mod stmt;

pub use parser::Parser;

use j2p_ir::Class;
use j2p_util::diagnostic::{Handler, Halt};

/// `parse(text) -> [Class]` (spec §4.3 top level).
pub fn parse(source: &str, handler: &Handler) -> Result<Vec<Class>, Halt> {
    Parser::new(source, handler).parse_program()
}

#[cfg(test)]
mod tests {
    use super::*;
    use j2p_ir::Stmt;
    use j2p_util::diagnostic::Mode;

    fn parse_ok(source: &str) -> Vec<Class> {
        let handler = Handler::new(Mode::Fatal);
        let classes = parse(source, &handler).expect("parse should succeed");
        assert!(!handler.has_diagnostics(), "{}", handler.render());
        classes
    }

    #[test]
    fn scenario_a_static_and_instance_fields() {
        let classes = parse_ok("class Ex { static int x = 4, y; int z = 3; int foo() { return z; } }");
        assert_eq!(classes.len(), 1);
        let ex = &classes[0];
        assert_eq!(ex.name, "Ex");
        assert!(ex.get_variable("x").unwrap().modifiers.is_static);
        assert!(ex.get_variable("x").unwrap().initializer.is_some());
        assert!(ex.get_variable("y").unwrap().initializer.is_none());
        assert!(!ex.get_variable("z").unwrap().modifiers.is_static);
        assert_eq!(ex.get_all_method_names(), vec!["foo"]);
    }

    #[test]
    fn scenario_b_overloading_by_arity() {
        let classes = parse_ok(
            "class Ex { int foo() { return 3; } int foo(int x) { return x; } int foo(int z, int y) { return z + y; } }",
        );
        let ex = &classes[0];
        assert_eq!(ex.get_method_overloads("foo").len(), 3);
        assert!(ex.get_method("foo", 0).is_some());
        assert!(ex.get_method("foo", 1).is_some());
        assert!(ex.get_method("foo", 2).is_some());
    }

    #[test]
    fn scenario_c_array_constructors() {
        let classes = parse_ok(
            "class Ex { int[] x = new int[3]; boolean[][] b = new boolean[2][3]; String[] s = new String[3]; }",
        );
        let ex = &classes[0];
        assert!(ex.get_variable("x").unwrap().initializer.is_some());
        assert!(ex.get_variable("b").unwrap().initializer.is_some());
        assert!(ex.get_variable("s").unwrap().initializer.is_some());
    }

    #[test]
    fn scenario_d_if_else_chain() {
        let classes = parse_ok(
            "class Ex { int foo(int x) { if (x == 0) return 0; else if (x == 1) { System.out.println(\"one\"); return 1; } else return x; } }",
        );
        let method = classes[0].get_method("foo", 1).unwrap();
        assert_eq!(method.body.len(), 1);
        assert!(matches!(method.body[0], Stmt::If(..)));
    }

    #[test]
    fn scenario_e_inheritance() {
        let classes = parse_ok("public class HelloWorld extends Example { }");
        assert_eq!(classes[0].superclass_name, "Example");
    }

    #[test]
    fn scenario_f_main_declared() {
        let classes = parse_ok("class App { public static void main() { } }");
        assert!(classes[0].declares_main());
    }

    #[test]
    fn empty_class_has_no_members() {
        let classes = parse_ok("class C { }");
        assert!(classes[0].variables.is_empty());
        assert!(classes[0].constructors.is_empty());
    }

    #[test]
    fn duplicate_variable_name_is_a_diagnostic() {
        let handler = Handler::new(Mode::Warning);
        parse("class Ex { int x; int x; }", &handler).unwrap();
        assert!(handler.has_diagnostics());
        assert!(handler.render().contains("Ex"));
        assert!(handler.render().contains('x'));
    }

    #[test]
    fn duplicate_parameter_name_is_a_diagnostic() {
        let handler = Handler::new(Mode::Warning);
        parse("class Ex { int foo(int x, int x) { return x; } }", &handler).unwrap();
        assert!(handler.has_diagnostics());
    }

    #[test]
    fn private_on_a_class_is_a_diagnostic() {
        let handler = Handler::new(Mode::Warning);
        parse("private class Ex { }", &handler).unwrap();
        assert!(handler.has_diagnostics());
    }

    #[test]
    fn constructor_is_recognized_by_matching_class_name() {
        let classes = parse_ok("class Ex { Ex(int x) { this.x = x; } int x; }");
        assert!(classes[0].get_constructor(1).is_some());
    }

    #[test]
    fn nested_class_is_recorded() {
        let classes = parse_ok("class Outer { class Inner { } }");
        assert!(classes[0].get_nested("Inner").is_some());
    }
}
