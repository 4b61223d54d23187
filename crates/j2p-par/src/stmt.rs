use j2p_ir::{DeclaredVar, Expr, Segment, Stmt};
use j2p_util::diagnostic::Halt;

use crate::parser::{is_datatype_keyword, Parser};

impl<'a> Parser<'a> {
    /// Statement, selected by leading token (spec §4.3 "Statement").
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, Halt> {
        match self.peek_str() {
            Some("return") => self.parse_return(),
            Some("if") => self.parse_if(),
            Some("{") => Ok(Stmt::Block(self.parse_block()?)),
            Some("while") => {
                self.shift(None)?;
                self.handler.report(
                    self.buffer.line_number(),
                    "while",
                    "while loops are not supported by this translator",
                )?;
                self.skip_unsupported_statement()?;
                Ok(Stmt::While)
            }
            Some("for") => {
                self.shift(None)?;
                self.handler.report(
                    self.buffer.line_number(),
                    "for",
                    "for loops are not supported by this translator",
                )?;
                self.skip_unsupported_statement()?;
                Ok(Stmt::For)
            }
            Some("new") => {
                let expr = self.parse_new()?;
                self.expect_lexeme(";")?;
                Ok(Stmt::Call(expr))
            }
            Some(tok) if is_datatype_keyword(tok) => self.parse_declare_from_keyword_type(),
            _ => self.parse_ident_led_statement(),
        }
    }

    fn parse_return(&mut self) -> Result<Stmt, Halt> {
        self.shift(None)?;
        if self.at(";") {
            self.shift(None)?;
            return Ok(Stmt::Return(None));
        }
        let expr = self.parse_expr()?;
        self.expect_lexeme(";")?;
        Ok(Stmt::Return(Some(expr)))
    }

    fn parse_if(&mut self) -> Result<Stmt, Halt> {
        self.shift(None)?;
        self.expect_lexeme("(")?;
        let cond = self.parse_expr()?;
        self.expect_lexeme(")")?;
        let then_branch = self.parse_statement()?;
        let else_branch = if self.at("else") {
            self.shift(None)?;
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };
        Ok(Stmt::If(cond, Box::new(then_branch), else_branch))
    }

    fn parse_block(&mut self) -> Result<Vec<Stmt>, Halt> {
        self.expect_lexeme("{")?;
        let mut stmts = Vec::new();
        while !self.at("}") && !self.buffer.empty() {
            stmts.push(self.parse_statement()?);
        }
        self.expect_lexeme("}")?;
        Ok(stmts)
    }

    /// Local declaration whose type is a primitive keyword: `int i = 0;`
    fn parse_declare_from_keyword_type(&mut self) -> Result<Stmt, Halt> {
        self.shift(None)?; // the keyword itself
        self.consume_array_dims()?;
        let name = self.shift_identifier()?.lexeme;
        self.parse_declare_var_list(name)
    }

    /// Entry point for statements that start with a plain identifier:
    /// either a declaration (`Foo x = ...;`), an assignment
    /// (`x = ...;`), or a call (`x.y();`) — disambiguated by what
    /// follows the parsed identifier chain (spec §4.3).
    fn parse_ident_led_statement(&mut self) -> Result<Stmt, Halt> {
        let chain = self.parse_identifier_chain()?;
        let is_simple = chain.segments.iter().all(|s| matches!(s, Segment::Name(_)));

        if is_simple {
            if let Some(next) = self.peek_str() {
                if j2p_util::validate_identifier(next) {
                    // Datatype-then-name pattern: the chain we just
                    // parsed was actually a type.
                    let name = self.shift_identifier()?.lexeme;
                    return self.parse_declare_var_list(name);
                }
            }
        }

        if self.at("=") {
            self.shift(None)?;
            let rhs = self.parse_expr()?;
            self.expect_lexeme(";")?;
            return Ok(Stmt::Assign(chain, rhs));
        }

        self.expect_lexeme(";")?;
        Ok(Stmt::Call(Expr::Identifier(chain)))
    }

    fn parse_declare_var_list(&mut self, first_name: String) -> Result<Stmt, Halt> {
        let mut vars = Vec::new();
        let mut name = first_name;
        loop {
            let initializer = if self.at("=") {
                self.shift(None)?;
                Some(self.parse_expr()?)
            } else {
                None
            };
            vars.push(DeclaredVar { name, initializer });
            if self.at(",") {
                self.shift(None)?;
                name = self.shift_identifier()?.lexeme;
                continue;
            }
            break;
        }
        self.expect_lexeme(";")?;
        Ok(Stmt::Declare(vars))
    }
}
