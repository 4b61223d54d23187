use j2p_ir::Class;
use j2p_lex::{Token, TokenBuffer};
use j2p_util::diagnostic::{Handler, Halt};

pub(crate) use j2p_util::is_datatype_keyword;

/// Modifiers accumulated while scanning a declaration's modifier
/// prefix, before the declaration's kind is known.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct SeenModifiers {
    pub saw_private: bool,
    pub saw_protected: bool,
    pub saw_static: bool,
}

impl SeenModifiers {
    pub fn to_ir(self) -> j2p_ir::Modifiers {
        j2p_ir::Modifiers::new(!self.saw_private, self.saw_static)
    }
}

pub struct Parser<'a> {
    pub(crate) buffer: TokenBuffer,
    pub(crate) handler: &'a Handler,
}

impl<'a> Parser<'a> {
    pub fn new(source: &str, handler: &'a Handler) -> Self {
        Self {
            buffer: TokenBuffer::lex(source),
            handler,
        }
    }

    // -- low-level helpers ------------------------------------------------

    pub(crate) fn peek_str(&self) -> Option<&str> {
        self.buffer.peek().map(Token::as_str)
    }

    pub(crate) fn at(&self, lexeme: &str) -> bool {
        self.peek_str() == Some(lexeme)
    }

    pub(crate) fn shift(&mut self, expected: Option<&str>) -> Result<Token, Halt> {
        self.buffer.shift(self.handler, expected)
    }

    /// Shift, then record (non-halting unless in fatal mode) a
    /// diagnostic if the shifted lexeme isn't `expected`.
    pub(crate) fn expect_lexeme(&mut self, expected: &str) -> Result<Token, Halt> {
        let tok = self.shift(Some(expected))?;
        self.buffer.expect(self.handler, expected, &tok.lexeme)?;
        Ok(tok)
    }

    /// Shift an identifier, recording a diagnostic (per the sink's mode)
    /// if it's not a valid, non-keyword name. `this` is accepted even
    /// though it's a keyword — it is a legitimate expression head that
    /// the emitter rewrites later.
    pub(crate) fn shift_identifier(&mut self) -> Result<Token, Halt> {
        let tok = self.shift(Some("identifier"))?;
        if tok.lexeme != "this" {
            self.buffer.validate(self.handler, &tok.lexeme, false)?;
        }
        Ok(tok)
    }

    /// Consume zero or more leading modifier keywords.
    pub(crate) fn consume_modifiers(&mut self) -> SeenModifiers {
        let mut seen = SeenModifiers::default();
        while let Some(tok) = self.peek_str() {
            match tok {
                "private" => {
                    seen.saw_private = true;
                    self.shift(None).ok();
                }
                "protected" => {
                    seen.saw_protected = true;
                    self.shift(None).ok();
                }
                "static" => {
                    seen.saw_static = true;
                    self.shift(None).ok();
                }
                "public" => {
                    self.shift(None).ok();
                }
                _ => break,
            }
        }
        seen
    }

    /// Consume a dotted type/identifier chain (no attribute parsing —
    /// this is for declaration-position type names, spec §4.3 point 2),
    /// returning the dotted name joined with `.`.
    pub(crate) fn consume_type_chain(&mut self) -> Result<String, Halt> {
        let mut parts = vec![self.shift(None)?.lexeme];
        while self.at(".") {
            self.shift(None)?;
            parts.push(self.shift_identifier()?.lexeme);
        }
        Ok(parts.join("."))
    }

    /// Consume zero or more `[]` array-dimension pairs, returning the
    /// count. These mark an array type; the dimension count itself is
    /// discarded (spec: datatypes are discarded in output).
    pub(crate) fn consume_array_dims(&mut self) -> Result<usize, Halt> {
        let mut dims = 0;
        while self.at("[") {
            self.shift(None)?;
            self.expect_lexeme("]")?;
            dims += 1;
        }
        Ok(dims)
    }

    // -- top level ----------------------------------------------------

    pub fn parse_program(&mut self) -> Result<Vec<Class>, Halt> {
        let mut classes: Vec<Class> = Vec::new();
        while !self.buffer.empty() {
            let class = self.parse_class()?;
            if classes.iter().any(|c: &Class| c.name == class.name) {
                self.handler.report(
                    self.buffer.line_number(),
                    class.name.clone(),
                    format!("duplicate top-level class {}", class.name),
                )?;
                continue;
            }
            classes.push(class);
        }
        Ok(classes)
    }

    /// `[modifier]* "class" IDENT ("extends" IDENT)? "{" Declaration* "}"`
    pub(crate) fn parse_class(&mut self) -> Result<Class, Halt> {
        let seen = self.consume_modifiers();
        self.expect_lexeme("class")?;
        let name = self.shift_identifier()?.lexeme;

        if seen.saw_private {
            self.handler
                .report(self.buffer.line_number(), name.clone(), format!("{name} is private; private is not a legal class modifier"))?;
        }
        if seen.saw_static {
            self.handler
                .report(self.buffer.line_number(), name.clone(), format!("{name} is static; static is not a legal class modifier"))?;
        }

        let mut class = Class::new(name);
        if self.at("extends") {
            self.shift(None)?;
            class.superclass_name = self.shift_identifier()?.lexeme;
        }

        self.expect_lexeme("{")?;
        while !self.at("}") && !self.buffer.empty() {
            self.parse_member_declaration(&mut class)?;
        }
        self.expect_lexeme("}")?;
        Ok(class)
    }
}
