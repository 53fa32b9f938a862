//! Token vocabulary produced by the scanner.

/// What a scanned token is.
///
/// The set is closed: every byte of input maps to exactly one of these
/// kinds. [`TokenKind::Float`] is never produced by the scanner itself
/// (number runs come out as `Decimal` or `Hex`); it is part of the
/// vocabulary so downstream readers can classify decoded values without a
/// second enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// The stream is exhausted. Asking again keeps returning `End`.
    End,
    /// A byte no other kind claims; always a single byte.
    Unknown,
    /// A bare identifier run, or the result of a raw read.
    String,
    /// Reserved for decoded floating-point values; never emitted by the
    /// scanner.
    Float,
    /// A base-10 number run, sign and points included.
    Decimal,
    /// A base-16 number run, sign and `0x` tag included.
    Hex,
    /// `-` when it does not start a number.
    Hyphen,
    /// `,`
    Comma,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `/`
    FwdSlash,
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// `=`
    Equal,
    /// `+`
    Plus,
    /// `*`
    Star,
    /// `\`
    BackSlash,
    /// `#`
    Pound,
    /// `.` when it does not continue a number.
    Period,
    /// `;`
    SemiColon,
    /// `:`
    Colon,
    /// `'`
    Apostrophe,
    /// `"`
    Quote,
    /// `|`
    Pipe,
    /// An embedded NUL byte.
    NullTerminator,
}

impl TokenKind {
    /// The fixed source text of this kind, or `None` for kinds whose text
    /// varies (and for `End`, whose text is always empty).
    pub fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::Hyphen => Some("-"),
            Self::Comma => Some(","),
            Self::LeftBracket => Some("["),
            Self::RightBracket => Some("]"),
            Self::LeftBrace => Some("{"),
            Self::RightBrace => Some("}"),
            Self::LeftParen => Some("("),
            Self::RightParen => Some(")"),
            Self::FwdSlash => Some("/"),
            Self::LessThan => Some("<"),
            Self::GreaterThan => Some(">"),
            Self::Equal => Some("="),
            Self::Plus => Some("+"),
            Self::Star => Some("*"),
            Self::BackSlash => Some("\\"),
            Self::Pound => Some("#"),
            Self::Period => Some("."),
            Self::SemiColon => Some(";"),
            Self::Colon => Some(":"),
            Self::Apostrophe => Some("'"),
            Self::Quote => Some("\""),
            Self::Pipe => Some("|"),
            Self::NullTerminator => Some("\0"),
            Self::End
            | Self::Unknown
            | Self::String
            | Self::Float
            | Self::Decimal
            | Self::Hex => None,
        }
    }

    /// Human-readable name for messages and dumps.
    pub fn name(self) -> &'static str {
        match self {
            Self::End => "end of stream",
            Self::Unknown => "unknown byte",
            Self::String => "string",
            Self::Float => "float number",
            Self::Decimal => "decimal number",
            Self::Hex => "hex number",
            Self::Hyphen => "`-`",
            Self::Comma => "`,`",
            Self::LeftBracket => "`[`",
            Self::RightBracket => "`]`",
            Self::LeftBrace => "`{`",
            Self::RightBrace => "`}`",
            Self::LeftParen => "`(`",
            Self::RightParen => "`)`",
            Self::FwdSlash => "`/`",
            Self::LessThan => "`<`",
            Self::GreaterThan => "`>`",
            Self::Equal => "`=`",
            Self::Plus => "`+`",
            Self::Star => "`*`",
            Self::BackSlash => "`\\`",
            Self::Pound => "`#`",
            Self::Period => "`.`",
            Self::SemiColon => "`;`",
            Self::Colon => "`:`",
            Self::Apostrophe => "`'`",
            Self::Quote => "`\"`",
            Self::Pipe => "`|`",
            Self::NullTerminator => "null byte",
        }
    }
}

/// A single scanned token: its kind plus the exact source text it covers.
///
/// The text is owned, so tokens outlive the buffer they were scanned from.
/// For plain scans the text is byte-for-byte the consumed span (skipped
/// whitespace excluded); bytes that are not valid UTF-8 are replaced with
/// `U+FFFD` when the span is materialized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind: TokenKind,
    /// The source text the token covers.
    pub text: String,
}

impl Token {
    /// Creates a token from a kind and its text.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The end-of-stream token: kind `End`, empty text.
    pub fn end() -> Self {
        Self {
            kind: TokenKind::End,
            text: String::new(),
        }
    }

    /// `true` for the end-of-stream token.
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
