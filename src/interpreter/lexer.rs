use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{operator::Operator, parser::ParseResult},
};

/// Represents a lexical token of an arithmetic expression.
///
/// All bracket styles are folded into [`Token::OpenParen`] and
/// [`Token::CloseParen`] by [`normalize_brackets`] before lexing, so the source
/// style is not preserved. `+` and `-` always lex as binary operators;
/// [`disambiguate_unary`] rewrites them to unary markers afterwards.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// Variable references: one or more lowercase letters.
    #[regex(r"[a-z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+ - * / ^`, and after disambiguation the unary markers.
    #[regex(r"[-+*/^]", parse_operator)]
    Operator(Operator),
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// Whitespace.
    #[regex(r"[ \t\f\r\n]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Whether the token is a number or an identifier.
    #[must_use]
    pub const fn is_operand(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Identifier(_))
    }

    #[must_use]
    pub const fn is_paren(&self) -> bool {
        matches!(self, Self::OpenParen | Self::CloseParen)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::OpenParen => write!(f, "("),
            Self::CloseParen => write!(f, ")"),
            Self::Ignored => Ok(()),
        }
    }
}

fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

fn parse_operator(lex: &logos::Lexer<Token>) -> Option<Operator> {
    lex.slice().parse().ok()
}

/// Replaces `{` and `[` with `(`, and `}` and `]` with `)`.
#[must_use]
pub fn normalize_brackets(input: &str) -> String {
    input.chars()
         .map(|c| match c {
             '{' | '[' => '(',
             '}' | ']' => ')',
             other => other,
         })
         .collect()
}

/// Rewrites `+` and `-` into unary markers where they cannot be binary.
///
/// A sign is unary when it is the first token, or when the token before it is
/// an operator or an opening bracket.
pub fn disambiguate_unary(tokens: &mut [Token]) {
    for i in 0..tokens.len() {
        let Token::Operator(op) = tokens[i] else {
            continue;
        };
        let Some(unary) = op.to_unary() else {
            continue;
        };
        let prefix_position = i == 0
                              || matches!(tokens[i - 1], Token::Operator(_) | Token::OpenParen);
        if prefix_position {
            tokens[i] = Token::Operator(unary);
        }
    }
}

/// Converts a raw expression into a flat token sequence.
///
/// Brackets are normalized first, then the text is lexed and unary signs are
/// disambiguated.
///
/// # Errors
/// Returns [`ParseError::UnrecognizedToken`] for any text that is not a
/// number, a lowercase identifier, an operator or a bracket.
///
/// # Example
/// ```
/// use polish::interpreter::{lexer::{tokenize, Token}, operator::Operator};
///
/// let tokens = tokenize("-[x]").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Operator(Operator::UnaryMinus),
///                 Token::OpenParen,
///                 Token::Identifier("x".to_string()),
///                 Token::CloseParen]);
/// ```
pub fn tokenize(input: &str) -> ParseResult<Vec<Token>> {
    let normalized = normalize_brackets(input);
    let mut lexer = Token::lexer(&normalized);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => {
                return Err(ParseError::UnrecognizedToken { token:    lexer.slice().to_string(),
                                                           position: tokens.len() + 1, });
            },
        }
    }

    disambiguate_unary(&mut tokens);
    log::trace!("tokenized {input:?} into {tokens:?}");

    Ok(tokens)
}
