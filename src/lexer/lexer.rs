use super::{LexerTokenKind, Position, Token};

#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /** Human Readable positions in file */
    pub cur_line: usize,
    pub cur_col: usize,

    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

fn is_instruction(c: char) -> bool {
    matches!(c, '>' | '<' | '+' | '-' | '.' | ',' | '[' | ']')
}

impl<'a> Lexer<'a> {
    pub fn new(chars: &'a str) -> Lexer<'a> {
        Lexer {
            cur_col: 1,
            cur_line: 1,

            chars: chars.chars().peekable(),
        }
    }

    fn transform_to_type(&mut self, c: char) -> LexerTokenKind {
        match c {
            '>' => LexerTokenKind::Increment,
            '<' => LexerTokenKind::Decrement,
            '+' => LexerTokenKind::DerefIncrement,
            '-' => LexerTokenKind::DerefDecrement,
            '.' => LexerTokenKind::Write,
            ',' => LexerTokenKind::Read,
            // bracket balance is the parser's business, `[` with no `]` is allowed
            '[' => LexerTokenKind::JumpStart,
            ']' => LexerTokenKind::JumpEnd,
            c => {
                // Simplify the comment stream down to strings
                let mut comment = String::from(c);
                while let Some(&next) = self.chars.peek() {
                    if is_instruction(next) {
                        break;
                    }
                    self.consume_char();
                    comment.push(next);
                }

                LexerTokenKind::Comment(comment)
            }
        }
    }

    fn consume_char(&mut self) -> Option<char> {
        match self.chars.next() {
            Some(c) => {
                self.cur_col += 1;
                if c == '\n' {
                    self.cur_line += 1;
                    self.cur_col = 1;
                }
                Some(c)
            }
            None => None,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.chars.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.consume_char();
        }
    }

    /// The next token, or `None` once the input is exhausted
    pub fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();

        let position = Position {
            line: self.cur_line,
            col: self.cur_col,
        };
        let c = self.consume_char()?;
        Some(Token {
            kind: self.transform_to_type(c),
            position,
        })
    }

    pub fn collect(&mut self) -> Vec<Token> {
        let mut v = vec![];
        while let Some(token) = self.next_token() {
            v.push(token);
        }
        v
    }
}
