use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Tokens carry no source positions. Parse errors quote the token itself,
/// which is all a one-line submission needs.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `2.5` or `.5`.
    #[regex(r"[0-9]*\.?[0-9]+", |lex| lex.slice().parse().ok())]
    Number(f64),
    /// `fn`, the keyword introducing a function definition.
    #[token("fn")]
    Fn,
    /// Identifier tokens; variable or function names such as `x` or `double`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `=>`
    #[token("=>")]
    Arrow,
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
    /// `%`
    #[token("%")]
    Percent,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,

    /// Commas may separate parameters or arguments but carry no grammatical
    /// meaning; they are skipped like whitespace.
    #[token(",", logos::skip)]
    Comma,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Splits a source line into its tokens.
///
/// Tokenization is total: it never fails, and input the lexer does not
/// recognize is simply dropped. Whitespace and commas separate tokens and are
/// discarded. Longest match wins, so `=>` is never read as `=` and `fnx` is
/// an identifier rather than the `fn` keyword.
///
/// # Parameters
/// - `source`: The raw source line.
///
/// # Returns
/// The tokens of `source`, in order.
///
/// # Example
/// ```
/// use exprima::interpreter::lexer::{tokenize, Token};
///
/// let tokens = tokenize("1 + 1");
///
/// assert_eq!(tokens,
///            vec![Token::Number(1.0), Token::Plus, Token::Number(1.0)]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source).filter_map(Result::ok).collect()
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Fn => write!(f, "fn"),
            Self::Arrow => write!(f, "=>"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Equals => write!(f, "="),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
            Self::Ignored => Ok(()),
        }
    }
}
