/// Represents the different kinds of tokens that the lexer can produce.
/// Each token is a meaningful unit of the agtype literal syntax.
///
/// Literal tokens keep the exact matched source text (quotes and escapes
/// included); decoding is the scalar decoder's job, so that a malformed
/// literal surfaces as a decode error rather than being mangled here.
#[derive(Debug, PartialEq, Clone)]
pub enum TokenType {
    // == Special Tokens ==
    /// Represents the end of the input.
    Eof,
    /// Represents a sequence of one or more whitespace characters.
    Whitespace,
    /// Represents a token that could not be recognized by the lexer.
    Unknown,

    // == Literals ==
    /// A string literal. The associated `String` holds the raw matched
    /// text, surrounding quotes and escape sequences intact.
    String(String),
    /// An integer literal, raw text.
    Integer(String),
    /// A float literal, raw text. Also covers `Infinity`, `-Infinity` and
    /// `NaN`, which Apache AGE emits for non-finite float values.
    Float(String),
    /// An identifier, used for type annotation names after `::`.
    Ident(String),

    // == Keywords ==
    /// The boolean `true` literal.
    True,
    /// The boolean `false` literal.
    False,
    /// The `null` literal.
    Null,

    // == Punctuation ==
    /// Left Brace: `{`
    LBrace,
    /// Right Brace: `}`
    RBrace,
    /// Left Bracket: `[`
    LBracket,
    /// Right Bracket: `]`
    RBracket,
    /// Comma: `,`
    Comma,
    /// Colon: `:`
    Colon,
    /// Double Colon: `::` (introduces a type annotation)
    DoubleColon,
}

/// A token with its type and position
#[derive(Debug, Clone)]
pub struct Token {
    pub ttype: TokenType,
    pub pos_start: usize,
    pub pos_end: usize,
}

impl Token {
    pub fn new(ttype: TokenType, pos_start: usize, pos_end: usize) -> Token {
        Token {
            ttype,
            pos_start,
            pos_end,
        }
    }
}

pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            position: 0,
        }
    }

    pub fn lex(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            if token.ttype == TokenType::Eof {
                tokens.push(token);
                break;
            }
            tokens.push(token);
        }
        tokens
    }

    pub fn next_token(&mut self) -> Token {
        let start_pos = self.position;

        let ttype = if let Some(char) = self.advance() {
            match char {
                '{' => TokenType::LBrace,
                '}' => TokenType::RBrace,
                '[' => TokenType::LBracket,
                ']' => TokenType::RBracket,
                ',' => TokenType::Comma,

                ':' => {
                    if self.peek() == Some(&':') {
                        self.advance();
                        TokenType::DoubleColon
                    } else {
                        TokenType::Colon
                    }
                }
                '"' => self.read_string(),
                c if c.is_whitespace() => self.read_whitespace(),
                c if c.is_ascii_alphabetic() || c == '_' => self.read_identifier(c),
                c if c.is_ascii_digit() => self.read_number(c),
                '-' => match self.peek() {
                    Some(c) if c.is_ascii_digit() => self.read_number('-'),
                    // AGE prints negative infinity as `-Infinity`
                    Some('I') => match self.read_identifier('-') {
                        TokenType::Float(text) => TokenType::Float(text),
                        _ => TokenType::Unknown,
                    },
                    _ => TokenType::Unknown,
                },

                _ => TokenType::Unknown,
            }
        } else {
            TokenType::Eof
        };

        Token::new(ttype, start_pos, self.position)
    }

    fn advance(&mut self) -> Option<char> {
        let char = self.chars.next();
        if let Some(c) = char {
            self.position += c.len_utf8();
        }
        char
    }

    fn peek(&mut self) -> Option<&char> {
        self.chars.peek()
    }

    fn read_whitespace(&mut self) -> TokenType {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
        TokenType::Whitespace
    }

    /// Reads a string literal without interpreting escapes. Backslash
    /// sequences are carried through raw; only the closing quote matters
    /// here (a backslash always consumes the character after it, so an
    /// escaped quote does not terminate the literal).
    fn read_string(&mut self) -> TokenType {
        let mut raw = String::from('"');
        while let Some(c) = self.advance() {
            raw.push(c);
            if c == '"' {
                return TokenType::String(raw);
            }
            if c == '\\' {
                if let Some(escaped_char) = self.advance() {
                    raw.push(escaped_char);
                } else {
                    return TokenType::Unknown; // Unclosed escape sequence
                }
            }
        }
        TokenType::Unknown // Unclosed string
    }

    fn read_identifier(&mut self, first_char: char) -> TokenType {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || *c == '_' {
                ident.push(self.advance().unwrap());
            } else {
                break;
            }
        }

        match ident.as_str() {
            "true" => TokenType::True,
            "false" => TokenType::False,
            "null" => TokenType::Null,
            "Infinity" | "-Infinity" | "NaN" => TokenType::Float(ident),
            _ => TokenType::Ident(ident),
        }
    }

    /// Reads a numeric literal greedily: digits, dots and a single exponent
    /// part. Over-accepting (e.g. `1.2.3`) is deliberate: the whole run is
    /// handed to the scalar decoder as one literal, which is where malformed
    /// numbers are rejected.
    fn read_number(&mut self, first_char: char) -> TokenType {
        let mut number_str = String::new();
        number_str.push(first_char);
        let mut has_dot = false;
        let mut has_exponent = false;

        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                number_str.push(self.advance().unwrap());
            } else if *c == '.' {
                has_dot = true;
                number_str.push(self.advance().unwrap());
            } else if (*c == 'e' || *c == 'E') && !has_exponent {
                has_exponent = true;
                number_str.push(self.advance().unwrap());
                // Check for optional sign after 'e' or 'E'
                if let Some(sign_char) = self.peek() {
                    if *sign_char == '+' || *sign_char == '-' {
                        number_str.push(self.advance().unwrap());
                    }
                }
            } else {
                break;
            }
        }

        if has_dot || has_exponent {
            TokenType::Float(number_str)
        } else {
            TokenType::Integer(number_str)
        }
    }
}
