use j2p_ir::{BinOp, Expr, IdentifierChain, Literal, New, Segment, UnaryOp};
use j2p_util::diagnostic::Halt;

use crate::parser::Parser;

impl<'a> Parser<'a> {
    /// Right-recursive "primary (OP expr)?": precedence and
    /// associativity are deliberately unmodeled (spec §4.3, §9).
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, Halt> {
        let lhs = self.parse_unary_or_primary()?;
        if let Some(op) = self.peek_str().and_then(BinOp::from_token) {
            self.shift(None)?;
            let rhs = self.parse_expr()?;
            return Ok(Expr::Binary(Box::new(lhs), op, Box::new(rhs)));
        }
        Ok(lhs)
    }

    fn parse_unary_or_primary(&mut self) -> Result<Expr, Halt> {
        match self.peek_str() {
            Some("+") => {
                self.shift(None)?;
                Ok(Expr::Unary(UnaryOp::Plus, Box::new(self.parse_unary_or_primary()?)))
            }
            Some("-") => {
                self.shift(None)?;
                Ok(Expr::Unary(UnaryOp::Minus, Box::new(self.parse_unary_or_primary()?)))
            }
            Some("!") => {
                self.shift(None)?;
                Ok(Expr::Unary(UnaryOp::Not, Box::new(self.parse_unary_or_primary()?)))
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> Result<Expr, Halt> {
        match self.peek_str() {
            Some("true") => {
                self.shift(None)?;
                Ok(Expr::Literal(Literal::Bool(true)))
            }
            Some("false") => {
                self.shift(None)?;
                Ok(Expr::Literal(Literal::Bool(false)))
            }
            Some("null") => {
                self.shift(None)?;
                Ok(Expr::Literal(Literal::Null))
            }
            Some("\"") => self.parse_string_literal(),
            Some("{") => self.parse_array_literal(),
            Some("(") => {
                self.shift(None)?;
                let inner = self.parse_expr()?;
                self.expect_lexeme(")")?;
                Ok(Expr::Parenthesized(Box::new(inner)))
            }
            Some("new") => self.parse_new(),
            Some(tok) if j2p_util::validate_number(tok) => {
                let lexeme = self.shift(None)?.lexeme;
                Ok(Expr::Literal(Literal::Number(lexeme)))
            }
            _ => Ok(Expr::Identifier(self.parse_identifier_chain()?)),
        }
    }

    /// Opening `"`, tokens until the matching `"`, joined with single
    /// spaces (spec §4.1, §9: a known lossy transformation).
    fn parse_string_literal(&mut self) -> Result<Expr, Halt> {
        self.expect_lexeme("\"")?;
        let mut parts = Vec::new();
        while !self.at("\"") {
            if self.buffer.empty() {
                return Err(self.handler.report_fatal(
                    self.buffer.line_number(),
                    "",
                    "unterminated string literal",
                ));
            }
            parts.push(self.shift(None)?.lexeme);
        }
        self.expect_lexeme("\"")?;
        Ok(Expr::Literal(Literal::Str(parts.join(" "))))
    }

    /// `{` expr (`,` expr)* `}`
    fn parse_array_literal(&mut self) -> Result<Expr, Halt> {
        self.expect_lexeme("{")?;
        let mut elems = Vec::new();
        if !self.at("}") {
            loop {
                elems.push(self.parse_expr()?);
                if self.at(",") {
                    self.shift(None)?;
                    continue;
                }
                break;
            }
        }
        self.expect_lexeme("}")?;
        Ok(Expr::ArrayLiteral(elems))
    }

    /// `new IdentifierChain` with an optional constructor-call argument
    /// list or one-or-more `[size]` array-dimension attributes.
    pub(crate) fn parse_new(&mut self) -> Result<Expr, Halt> {
        self.shift(None)?; // "new"
        let type_name = self.consume_type_chain()?;
        if self.at("(") {
            self.shift(None)?;
            let args = self.parse_arg_list()?;
            self.expect_lexeme(")")?;
            return Ok(Expr::New(New::Object { type_name, args }));
        }
        if self.at("[") {
            let mut sizes = Vec::new();
            while self.at("[") {
                self.shift(None)?;
                sizes.push(self.parse_expr()?);
                self.expect_lexeme("]")?;
            }
            return Ok(Expr::New(New::Array {
                element_type: type_name,
                sizes,
            }));
        }
        Ok(Expr::New(New::Object {
            type_name,
            args: Vec::new(),
        }))
    }

    fn parse_arg_list(&mut self) -> Result<Vec<Expr>, Halt> {
        let mut args = Vec::new();
        if !self.at(")") {
            loop {
                args.push(self.parse_expr()?);
                if self.at(",") {
                    self.shift(None)?;
                    continue;
                }
                break;
            }
        }
        Ok(args)
    }

    /// `IDENT ("." IDENT | "[" expr "]" | "(" args ")")*`. A bare `[]`
    /// pair (no expression inside) is an array-dimension marker on a
    /// type name, not an index, and is silently discarded rather than
    /// pushed as a segment.
    pub(crate) fn parse_identifier_chain(&mut self) -> Result<IdentifierChain, Halt> {
        let head = self.shift_identifier()?.lexeme;
        let mut chain = IdentifierChain::name(head);
        loop {
            match self.peek_str() {
                Some(".") => {
                    self.shift(None)?;
                    let name = self.shift_identifier()?.lexeme;
                    chain.push(Segment::Name(name));
                }
                Some("[") => {
                    self.shift(None)?;
                    if self.at("]") {
                        self.shift(None)?;
                        continue;
                    }
                    let index = self.parse_expr()?;
                    self.expect_lexeme("]")?;
                    chain.push(Segment::Index(Box::new(index)));
                }
                Some("(") => {
                    self.shift(None)?;
                    let args = self.parse_arg_list()?;
                    self.expect_lexeme(")")?;
                    chain.push(Segment::Call(args));
                }
                _ => break,
            }
        }
        Ok(chain)
    }
}
