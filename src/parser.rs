use crate::error::{AgtypeError, SyntaxError};
use crate::event::AgtypeListener;
use crate::lexer::{Lexer, Token, TokenType};
use miette::{NamedSource, SourceSpan};
use std::sync::Arc;

/// A recursive descent driver for the agtype grammar:
///
/// ```text
/// agtype     := value EOF
/// value      := (object | array | scalar) annotation?
/// annotation := "::" IDENT
/// object     := "{" (pair ("," pair)*)? "}"
/// array      := "[" (value ("," value)*)? "]"
/// pair       := STRING ":" value
/// scalar     := STRING | INTEGER | FLOAT | "true" | "false" | "null"
/// ```
///
/// The parser does not build a tree itself; it fires one enter/exit event
/// pair per matched production on an [`AgtypeListener`], in source order.
#[derive(Debug)]
pub struct Parser {
    source: Arc<NamedSource<String>>,
    tokens: Vec<Token>,
    position: usize,
    input_len: usize,
}

impl Parser {
    pub fn new(source_text: &str) -> Self {
        Self::new_with_name(source_text, "agtype")
    }

    pub fn new_with_name(source_text: &str, name: &str) -> Self {
        let source = Arc::new(NamedSource::new(name, source_text.to_string()));
        let tokens: Vec<Token> = Lexer::new(source_text)
            .lex()
            .into_iter()
            .filter(|t| t.ttype != TokenType::Whitespace)
            .collect();

        Self {
            source,
            tokens,
            position: 0,
            input_len: source_text.len(),
        }
    }

    /// The named source this parser reports diagnostics against. Shared
    /// with the listener so decode errors point into the same text.
    pub fn source(&self) -> Arc<NamedSource<String>> {
        Arc::clone(&self.source)
    }

    // === Grammar Productions ===

    /// agtype := value EOF
    pub fn parse_agtype<L: AgtypeListener>(&mut self, listener: &mut L) -> Result<(), AgtypeError> {
        listener.enter_agtype()?;
        self.parse_value(listener)?;

        let token = self.current_token()?;
        if token.ttype != TokenType::Eof {
            return Err(SyntaxError::TrailingInput {
                src: (*self.source).clone(),
                span: token_span(token),
            }
            .into());
        }

        listener.exit_agtype()?;
        Ok(())
    }

    /// value := (object | array | scalar) annotation?
    fn parse_value<L: AgtypeListener>(&mut self, listener: &mut L) -> Result<(), AgtypeError> {
        let token = self.current_token()?.clone();
        let span = token_span(&token);

        match &token.ttype {
            TokenType::LBrace => self.parse_object(listener)?,
            TokenType::LBracket => self.parse_array(listener)?,
            TokenType::String(raw) => {
                self.advance();
                listener.enter_string_value(raw, span)?;
                listener.exit_string_value(raw, span)?;
            }
            TokenType::Integer(raw) => {
                self.advance();
                listener.enter_integer_value(raw, span)?;
                listener.exit_integer_value(raw, span)?;
            }
            TokenType::Float(raw) => {
                self.advance();
                listener.enter_float_value(raw, span)?;
                listener.exit_float_value(raw, span)?;
            }
            TokenType::True => {
                self.advance();
                listener.enter_true()?;
                listener.exit_true()?;
            }
            TokenType::False => {
                self.advance();
                listener.enter_false()?;
                listener.exit_false()?;
            }
            TokenType::Null => {
                self.advance();
                listener.enter_null()?;
                listener.exit_null()?;
            }
            _ => return self.err_unexpected("a value"),
        }

        // annotation := "::" IDENT
        if self.match_token(TokenType::DoubleColon) {
            let token = self.current_token()?.clone();
            if let TokenType::Ident(name) = &token.ttype {
                self.advance();
                let span = token_span(&token);
                listener.enter_type_annotation(name, span)?;
                listener.exit_type_annotation(name, span)?;
            } else {
                return self.err_unexpected("an identifier after '::'");
            }
        }

        Ok(())
    }

    /// object := "{" (pair ("," pair)*)? "}"
    ///
    /// No trailing comma: agtype objects are JSON-strict.
    fn parse_object<L: AgtypeListener>(&mut self, listener: &mut L) -> Result<(), AgtypeError> {
        self.expect(TokenType::LBrace)?;
        listener.enter_object_value()?;
        if !self.check(&TokenType::RBrace) {
            self.parse_pair(listener)?;
            while self.match_token(TokenType::Comma) {
                self.parse_pair(listener)?;
            }
        }
        self.expect(TokenType::RBrace)?;
        listener.exit_object_value()?;
        Ok(())
    }

    /// array := "[" (value ("," value)*)? "]"
    fn parse_array<L: AgtypeListener>(&mut self, listener: &mut L) -> Result<(), AgtypeError> {
        self.expect(TokenType::LBracket)?;
        listener.enter_array_value()?;
        if !self.check(&TokenType::RBracket) {
            self.parse_value(listener)?;
            while self.match_token(TokenType::Comma) {
                self.parse_value(listener)?;
            }
        }
        self.expect(TokenType::RBracket)?;
        listener.exit_array_value()?;
        Ok(())
    }

    /// pair := STRING ":" value
    fn parse_pair<L: AgtypeListener>(&mut self, listener: &mut L) -> Result<(), AgtypeError> {
        let key_token = self.current_token()?.clone();
        let raw_key = match &key_token.ttype {
            TokenType::String(raw) => raw.clone(),
            _ => return self.err_unexpected("a string key"),
        };
        self.advance();
        let key_span = token_span(&key_token);

        listener.enter_pair(&raw_key, key_span)?;
        self.expect(TokenType::Colon)?;
        self.parse_value(listener)?;
        listener.exit_pair(&raw_key, key_span)?;
        Ok(())
    }

    // === Tokenizer Helper Methods ===

    fn current_token(&self) -> Result<&Token, AgtypeError> {
        self.tokens.get(self.position).ok_or_else(|| {
            let pos = self.input_len.saturating_sub(1);
            SyntaxError::UnexpectedEof {
                src: (*self.source).clone(),
                span: (pos, 0).into(),
            }
            .into()
        })
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    fn expect(&mut self, expected: TokenType) -> Result<(), AgtypeError> {
        if self.check(&expected) {
            self.advance();
            Ok(())
        } else {
            self.err_unexpected(&format!("{:?}", expected))
        }
    }

    fn match_token(&mut self, ttype: TokenType) -> bool {
        if self.check(&ttype) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn check(&self, ttype: &TokenType) -> bool {
        if let Ok(token) = self.current_token() {
            std::mem::discriminant(&token.ttype) == std::mem::discriminant(ttype)
        } else {
            false
        }
    }

    fn err_unexpected<T>(&self, expected: &str) -> Result<T, AgtypeError> {
        let token = self.current_token()?;
        if token.ttype == TokenType::Eof {
            return Err(SyntaxError::UnexpectedEof {
                src: (*self.source).clone(),
                span: token_span(token),
            }
            .into());
        }
        Err(SyntaxError::UnexpectedToken {
            src: (*self.source).clone(),
            span: token_span(token),
            expected: expected.to_string(),
        }
        .into())
    }
}

fn token_span(token: &Token) -> SourceSpan {
    (token.pos_start, token.pos_end - token.pos_start).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::AgtypeBuilder;
    use crate::value::Agtype;
    use miette::Report;

    fn parse_ok(source: &str) -> Agtype {
        let mut parser = Parser::new_with_name(source, "test.agtype");
        let mut builder = AgtypeBuilder::new(parser.source());
        if let Err(err) = parser.parse_agtype(&mut builder) {
            let report = Report::from(err);
            panic!("{:?}", report);
        }
        builder.into_output().expect("traversal produced no root")
    }

    fn parse_err(source: &str) -> AgtypeError {
        let mut parser = Parser::new_with_name(source, "test.agtype");
        let mut builder = AgtypeBuilder::new(parser.source());
        parser
            .parse_agtype(&mut builder)
            .expect_err("expected a parse failure")
    }

    #[test]
    fn test_empty_object() {
        let root = parse_ok("{}");
        assert_eq!(root.as_map().unwrap().len(), 0);
    }

    #[test]
    fn test_empty_array() {
        let root = parse_ok("[]");
        assert_eq!(root, Agtype::List(vec![]));
    }

    #[test]
    fn test_scalar_roots() {
        assert_eq!(parse_ok("42"), Agtype::Integer(42));
        assert_eq!(parse_ok("-1.5"), Agtype::Float(-1.5));
        assert_eq!(parse_ok("true"), Agtype::Bool(true));
        assert_eq!(parse_ok("false"), Agtype::Bool(false));
        assert_eq!(parse_ok("null"), Agtype::Null);
        assert_eq!(parse_ok(r#""hi""#), Agtype::String("hi".to_string()));
    }

    #[test]
    fn test_map_and_nested_list() {
        let root = parse_ok(r#"{"a": 1, "b": [1, 2, 3]}"#);
        let map = root.as_map().unwrap();
        assert_eq!(map.get("a"), Some(&Agtype::Integer(1)));
        assert_eq!(
            map.get("b"),
            Some(&Agtype::List(vec![
                Agtype::Integer(1),
                Agtype::Integer(2),
                Agtype::Integer(3),
            ]))
        );
    }

    #[test]
    fn test_list_with_map_and_null() {
        let root = parse_ok(r#"[1, {"x": true}, null]"#);
        let items = root.as_list().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], Agtype::Integer(1));
        assert_eq!(
            items[1].as_map().unwrap().get("x"),
            Some(&Agtype::Bool(true))
        );
        assert_eq!(items[2], Agtype::Null);
    }

    #[test]
    fn test_annotated_map() {
        let root = parse_ok(r#"{"id": 1, "label": "Person"}::vertex"#);
        assert_eq!(root.annotation(), Some("vertex"));
        assert_eq!(
            root.as_map().unwrap().get("label"),
            Some(&Agtype::String("Person".to_string()))
        );
    }

    #[test]
    fn test_annotated_map_under_key() {
        let root = parse_ok(r#"{"n": {"id": 7}::vertex}"#);
        let n = root.as_map().unwrap().get("n").unwrap();
        assert_eq!(root.annotation(), None);
        assert_eq!(n.annotation(), Some("vertex"));
        assert_eq!(n.as_map().unwrap().get("id"), Some(&Agtype::Integer(7)));
    }

    #[test]
    fn test_deeply_nested() {
        let root = parse_ok(r#"{"a": [{"b": [{"c": []}]}]}"#);
        let a = root.as_map().unwrap().get("a").unwrap();
        let b = a.as_list().unwrap()[0].as_map().unwrap().get("b").unwrap();
        let c = b.as_list().unwrap()[0].as_map().unwrap().get("c").unwrap();
        assert_eq!(c, &Agtype::List(vec![]));
    }

    #[test]
    fn test_escaped_key() {
        let root = parse_ok(r#"{"a\nb": 1}"#);
        assert_eq!(
            root.as_map().unwrap().get("a\nb"),
            Some(&Agtype::Integer(1))
        );
    }

    #[test]
    fn test_trailing_input_rejected() {
        let err = parse_err("1 2");
        assert!(matches!(
            err,
            AgtypeError::Syntax(SyntaxError::TrailingInput { .. })
        ));
    }

    #[test]
    fn test_trailing_comma_rejected() {
        assert!(matches!(parse_err(r#"{"a": 1,}"#), AgtypeError::Syntax(_)));
        assert!(matches!(parse_err("[1,]"), AgtypeError::Syntax(_)));
    }

    #[test]
    fn test_unexpected_eof() {
        let err = parse_err(r#"{"a": "#);
        assert!(matches!(
            err,
            AgtypeError::Syntax(SyntaxError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_annotation_requires_identifier() {
        let err = parse_err("{}::123");
        assert!(matches!(err, AgtypeError::Syntax(_)));
    }

    #[test]
    fn test_malformed_float_aborts_traversal() {
        let err = parse_err("1.2.3");
        assert!(matches!(err, AgtypeError::NumberFormat { .. }));
    }
}
