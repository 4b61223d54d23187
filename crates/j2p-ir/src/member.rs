use crate::expr::{Expr, Stmt};
use crate::modifiers::Modifiers;

/// `{ modifiers, name, initializer }` (spec §3). `initializer` is `None`
/// for a bare declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub modifiers: Modifiers,
    pub name: String,
    pub initializer: Option<Expr>,
}

/// `{ modifiers, name, parameter_names, body }` (spec §3). Constructors
/// are methods whose `name` is the reserved sentinel [`CONSTRUCTOR_NAME`].
#[derive(Clone, Debug, PartialEq)]
pub struct Method {
    pub modifiers: Modifiers,
    pub name: String,
    pub parameter_names: Vec<String>,
    pub body: Vec<Stmt>,
}

/// The sentinel constructor name (spec §3: "Constructors are represented
/// as methods whose `name` is the reserved sentinel `__init__`").
pub const CONSTRUCTOR_NAME: &str = "__init__";

impl Method {
    pub fn arity(&self) -> usize {
        self.parameter_names.len()
    }

    pub fn is_constructor(&self) -> bool {
        self.name == CONSTRUCTOR_NAME
    }
}
