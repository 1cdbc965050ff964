use logos::Logos;

/// Represents a lexical token in an arithmetic sub-expression.
///
/// Arithmetic is the only part of the grammar that is tokenized; statements
/// are classified from their raw text. The token set is therefore small:
/// numeric literals, identifiers, the four operators, and parentheses.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Floating-point literal tokens, such as `3.14`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_float)]
    Float(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Identifier tokens; variable names such as `x` or `total`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\f]+", logos::skip)]
    Ignored,
}

/// Parses a floating-point literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_float(lex: &mut logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// Literals outside the `i64` range fail to parse, which surfaces as a
/// lexing error on the token.
fn parse_integer(lex: &mut logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
