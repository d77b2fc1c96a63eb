use logos::Logos;
use tracing::debug;

use crate::{
    ast::{NumberLiteral, Operator, Term},
    error::ParseError,
    interpreter::parser::core::ParseResult,
    radix::Base,
};

/// Represents a lexical token in the source input.
///
/// Anything that is neither whitespace, an operator nor a parenthesis is
/// treated as digit text, so that a stray symbol surfaces as an invalid digit
/// of its literal instead of a lexer failure. Whitespace is any Unicode white
/// space.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// A number with its base annotation, such as `1F(16)`.
    #[regex(r"[^\s+\-*/%()]*\([^()]*\)", |lex| lex.slice().to_string())]
    Literal(String),
    /// A `(` that is never closed, with the digits in front of it, such as
    /// `12(10`. A lone `(` also lands here.
    #[regex(r"[^\s+\-*/%()]*\([^()]*", |lex| lex.slice().to_string())]
    Unclosed(String),
    /// A digit run with no base annotation, such as `42`.
    #[regex(r"[^\s+\-*/%()]+", |lex| lex.slice().to_string())]
    BareDigits(String),
    /// `)`
    #[token(")")]
    RParen,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `//`
    #[token("//")]
    DoubleSlash,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// Whitespace.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

impl Token {
    /// Maps operator tokens to their [`Operator`].
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        match self {
            Self::Plus => Some(Operator::Add),
            Self::Minus => Some(Operator::Sub),
            Self::Star => Some(Operator::Mul),
            Self::Slash => Some(Operator::Div),
            Self::DoubleSlash => Some(Operator::FloorDiv),
            Self::Percent => Some(Operator::Mod),
            _ => None,
        }
    }
}

/// Scans an expression into terms.
///
/// Each literal is validated here: its base must parse as an integer in
/// `2..=36` and every digit must belong to that base. Signs are not attached
/// yet; a leading `-` comes out as a [`Operator::Sub`] term and is folded by
/// the structural check.
///
/// # Errors
/// - `MalformedLiteral` for digits without `(`, a `(` without `)`, a stray
///   `)`, or a base that is not an integer.
/// - `InvalidBase`, `InvalidDigit` or `EmptyOperand` for a literal that fails
///   validation.
/// - `UnexpectedToken` for text the lexer cannot classify.
///
/// # Example
/// ```
/// use mixradix::{
///     ast::{Operator, Term},
///     interpreter::lexer::tokenize,
/// };
///
/// let terms = tokenize("1010(2) // F(16)").unwrap();
/// assert_eq!(terms.len(), 3);
/// assert!(matches!(terms[1], Term::Operator { op: Operator::FloorDiv, position: 8 }));
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Term>> {
    let mut terms = Vec::new();
    let lexer = Token::lexer(source).spanned();

    for (token, span) in lexer {
        let position = span.start;
        let Ok(token) = token else {
            return Err(ParseError::UnexpectedToken { token: source[span].to_string(),
                                                     position });
        };

        if let Some(op) = token.operator() {
            terms.push(Term::Operator { op, position });
            continue;
        }

        match token {
            Token::Literal(text) => terms.push(Term::Number(parse_literal(&text, position)?)),
            Token::Unclosed(text) => {
                return Err(ParseError::MalformedLiteral { literal: text,
                                                          reason: "missing closing ')'".to_string(),
                                                          position });
            },
            Token::BareDigits(text) => {
                return Err(ParseError::MalformedLiteral { literal: text,
                                                          reason: "missing base annotation '('".to_string(),
                                                          position });
            },
            Token::RParen => {
                return Err(ParseError::MalformedLiteral { literal:  ")".to_string(),
                                                          reason:   "unmatched ')'".to_string(),
                                                          position, });
            },
            other => {
                return Err(ParseError::UnexpectedToken { token: format!("{other:?}"),
                                                         position });
            },
        }
    }

    debug!(terms = terms.len(), "tokenized expression");
    Ok(terms)
}

/// Parses the text of a [`Token::Literal`] into a validated literal.
///
/// The text is `<digits>(<base>)`. The base specifier is trimmed and read as a
/// decimal integer before the digits are checked against it.
fn parse_literal(text: &str, position: usize) -> ParseResult<NumberLiteral> {
    let malformed = |reason: String| ParseError::MalformedLiteral { literal: text.to_string(),
                                                                    reason,
                                                                    position };

    let Some((digits, rest)) = text.split_once('(') else {
        return Err(malformed("missing base annotation '('".to_string()));
    };
    let Some(spec) = rest.strip_suffix(')') else {
        return Err(malformed("missing closing ')'".to_string()));
    };
    let spec = spec.trim();
    let base: i64 =
        spec.parse()
            .map_err(|_| malformed(format!("base '{spec}' is not an integer")))?;

    Base::new(base).and_then(|base| NumberLiteral::new(digits, base, position))
                   .map_err(|e| ParseError::from_conversion(e, text, position))
}
