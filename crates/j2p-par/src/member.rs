use j2p_ir::{Class, Method, Stmt, Variable, CONSTRUCTOR_NAME};
use j2p_util::diagnostic::Halt;

use crate::parser::Parser;

impl<'a> Parser<'a> {
    /// Declaration, disambiguated by lookahead after modifiers (spec
    /// §4.3 "Declaration").
    pub(crate) fn parse_member_declaration(&mut self, class: &mut Class) -> Result<(), Halt> {
        let seen = self.consume_modifiers();

        if self.at("class") {
            let nested = self.parse_class()?;
            let line = self.buffer.line_number();
            return class.add_nested(nested, self.handler, line);
        }

        let datatype = self.consume_type_chain()?;
        let array_dims = self.consume_array_dims()?;

        if self.at("(") {
            // A constructor iff the datatype names the enclosing class
            // and no array brackets were seen (spec §4.3 point 3).
            let is_constructor = datatype == class.name && array_dims == 0;
            let line = self.buffer.line_number();
            let params = self.parse_parameter_list()?;
            let body = self.parse_method_body()?;
            let method = Method {
                modifiers: seen.to_ir(),
                name: CONSTRUCTOR_NAME.to_string(),
                parameter_names: params,
                body,
            };
            if is_constructor {
                return class.add_constructor(method, self.handler, line);
            }
            return self.handler.report(
                line,
                datatype.clone(),
                format!("{datatype} is not the enclosing class name; expected a constructor named {}", class.name),
            );
        }

        let name = self.shift_identifier()?.lexeme;
        if self.at("(") {
            let line = self.buffer.line_number();
            let params = self.parse_parameter_list()?;
            let body = self.parse_method_body()?;
            let method = Method {
                modifiers: seen.to_ir(),
                name,
                parameter_names: params,
                body,
            };
            return class.add_method(method, self.handler, line);
        }

        // Variable declaration list: `NAME [= expr] (, NAME [= expr])* ;`
        let mut current_name = name;
        loop {
            let initializer = if self.at("=") {
                self.shift(None)?;
                Some(self.parse_expr()?)
            } else {
                None
            };
            let line = self.buffer.line_number();
            let var = Variable {
                modifiers: seen.to_ir(),
                name: current_name,
                initializer,
            };
            class.add_variable(var, self.handler, line)?;
            if self.at(",") {
                self.shift(None)?;
                current_name = self.shift_identifier()?.lexeme;
                continue;
            }
            break;
        }
        self.expect_lexeme(";")?;
        Ok(())
    }

    /// `(` datatype `[]`* IDENT (`,` datatype `[]`* IDENT)* `)`
    pub(crate) fn parse_parameter_list(&mut self) -> Result<Vec<String>, Halt> {
        self.expect_lexeme("(")?;
        let mut params = Vec::new();
        if !self.at(")") {
            loop {
                self.consume_type_chain()?;
                self.consume_array_dims()?;
                let name = self.shift_identifier()?.lexeme;
                if params.contains(&name) {
                    self.handler.report(
                        self.buffer.line_number(),
                        name.clone(),
                        format!("{name} is already a parameter"),
                    )?;
                } else {
                    params.push(name);
                }
                if self.at(",") {
                    self.shift(None)?;
                    continue;
                }
                break;
            }
        }
        self.expect_lexeme(")")?;
        Ok(params)
    }

    /// `{` Statement* `}`
    pub(crate) fn parse_method_body(&mut self) -> Result<Vec<Stmt>, Halt> {
        self.expect_lexeme("{")?;
        let mut stmts = Vec::new();
        while !self.at("}") && !self.buffer.empty() {
            stmts.push(self.parse_statement()?);
        }
        self.expect_lexeme("}")?;
        Ok(stmts)
    }

    /// Skip tokens until the matching closing brace of a balanced `{…}`
    /// region, or up to (and including) the next `;` if no `{` is ever
    /// seen — used to recover from the unimplemented `while`/`for`
    /// statement stubs (spec §9).
    pub(crate) fn skip_unsupported_statement(&mut self) -> Result<(), Halt> {
        self.expect_lexeme("(")?;
        let mut depth = 1;
        while depth > 0 {
            if self.buffer.empty() {
                break;
            }
            let tok = self.shift(None)?;
            match tok.lexeme.as_str() {
                "(" => depth += 1,
                ")" => depth -= 1,
                _ => {}
            }
        }
        if self.at("{") {
            self.shift(None)?;
            let mut depth = 1;
            while depth > 0 && !self.buffer.empty() {
                let tok = self.shift(None)?;
                match tok.lexeme.as_str() {
                    "{" => depth += 1,
                    "}" => depth -= 1,
                    _ => {}
                }
            }
        } else {
            while !self.at(";") && !self.buffer.empty() {
                self.shift(None)?;
            }
            if self.at(";") {
                self.shift(None)?;
            }
        }
        Ok(())
    }
}
