pub mod lexer;

#[derive(Debug, Clone, PartialEq)]
pub enum LexerTokenKind {
    // `>`: Increment the `data pointer` by one
    Increment,
    // `<`: Decrement the `data pointer` by one
    Decrement,

    // `+`: Increment the byte at the `data pointer` by one
    DerefIncrement,
    // `-`: Decrement the byte at the `data pointer` by one
    DerefDecrement,

    // `.`: Write the byte at the `data pointer` to the `output device`
    Write,
    // `,`: Read the next byte from the `input device` and write it to the `data pointer`
    Read,

    // `[`: If the byte at the `data pointer` is zero, then jump the `instruction pointer` forward to the instruction after the matching `]`
    JumpStart,
    // `]`: If the byte at the `data pointer` is non-zero then jump the `instruction pointer` back to the instruction after the matching `[`
    JumpEnd,

    // Comment every other character
    Comment(String),
}

impl LexerTokenKind {
    /// The source text this token was lexed from
    pub fn as_str(&self) -> &str {
        match self {
            LexerTokenKind::Increment => ">",
            LexerTokenKind::Decrement => "<",
            LexerTokenKind::DerefIncrement => "+",
            LexerTokenKind::DerefDecrement => "-",
            LexerTokenKind::Write => ".",
            LexerTokenKind::Read => ",",
            LexerTokenKind::JumpStart => "[",
            LexerTokenKind::JumpEnd => "]",
            LexerTokenKind::Comment(c) => c.as_str(),
        }
    }
}

/// Human readable position of a token (both 1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: LexerTokenKind,
    pub position: Position,
}
