// scan a source file, output a stream of positioned tokens or an error
use model::{Token, TokenKind};
use regex_lite::Regex;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexicalError {
    #[error("Lexical Error at line {line} and column {column}: unexpected character '{found}'")]
    UnexpectedCharacter {
        line: usize,
        column: usize,
        found: char,
    },
    #[error("Lexical Error at line {line} and column {column}: malformed number '{text}'")]
    MalformedNumber {
        line: usize,
        column: usize,
        text: String,
    },
    #[error("Failed to compile {name} regex")]
    InvalidLexerRegex { name: &'static str },
}

/// Scan YALCC source text into tokens.
///
/// Lines are 1-based and columns 0-based. The returned stream always ends
/// with an `Eos` token positioned one past the last character, so the
/// parser never runs off the end of the vector.
pub fn lex(input: &str) -> Result<Vec<Token>, LexicalError> {
    let Ok(word_regex) = Regex::new("^[A-Za-z][A-Za-z0-9_]*") else {
        return Err(LexicalError::InvalidLexerRegex { name: "word" });
    };
    let Ok(number_regex) = Regex::new("^[0-9]+") else {
        return Err(LexicalError::InvalidLexerRegex { name: "number" });
    };

    let mut tokens = Vec::new();
    let mut rest = input;
    let mut line: usize = 1;
    let mut column: usize = 0;

    while let Some(c) = rest.chars().next() {
        if c == '\n' {
            line += 1;
            column = 0;
            rest = &rest[1..];
            continue;
        }
        if c.is_whitespace() {
            column += 1;
            rest = &rest[c.len_utf8()..];
            continue;
        }

        // multicharacter symbols before their single-character prefixes
        let multi = if rest.starts_with("==") {
            Some(TokenKind::EqualEqual)
        } else if rest.starts_with("<=") {
            Some(TokenKind::LessEqual)
        } else if rest.starts_with("->") {
            Some(TokenKind::Implies)
        } else {
            None
        };
        if let Some(kind) = multi {
            tokens.push(Token { kind, line, column });
            column += 2;
            rest = &rest[2..];
            continue;
        }

        let single = match c {
            ';' => Some(TokenKind::Semi),
            '=' => Some(TokenKind::Equal),
            '(' => Some(TokenKind::OpenParenthesis),
            ')' => Some(TokenKind::CloseParenthesis),
            '{' => Some(TokenKind::OpenBrace),
            '}' => Some(TokenKind::CloseBrace),
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Star),
            '/' => Some(TokenKind::Slash),
            '<' => Some(TokenKind::Less),
            '|' => Some(TokenKind::Pipe),
            _ => None,
        };
        if let Some(kind) = single {
            tokens.push(Token { kind, line, column });
            column += 1;
            rest = &rest[1..];
            continue;
        }

        // keywords, program names, and variable names
        if let Some(matched) = word_regex.find(rest) {
            let text = matched.as_str();
            tokens.push(Token {
                kind: classify_word(text),
                line,
                column,
            });
            column += text.len();
            rest = &rest[text.len()..];
            continue;
        }

        // number literals; the value must fit a signed 32-bit integer
        if let Some(matched) = number_regex.find(rest) {
            let text = matched.as_str();
            let value = text
                .parse::<i32>()
                .map_err(|_| LexicalError::MalformedNumber {
                    line,
                    column,
                    text: text.to_string(),
                })?;
            tokens.push(Token {
                kind: TokenKind::Number { value },
                line,
                column,
            });
            column += text.len();
            rest = &rest[text.len()..];
            continue;
        }

        return Err(LexicalError::UnexpectedCharacter {
            line,
            column,
            found: c,
        });
    }

    tokens.push(Token {
        kind: TokenKind::Eos,
        line,
        column,
    });
    Ok(tokens)
}

/// Keywords are reserved. Any other word is a variable name when it starts
/// lowercase, a program name otherwise; keywords all start uppercase, so
/// variable names can never collide with them. The lowercase-initial
/// alphabet also keeps every variable name valid as an LLVM local
/// identifier, which the emitter relies on.
fn classify_word(text: &str) -> TokenKind {
    match text {
        "Prog" => TokenKind::Prog,
        "Is" => TokenKind::Is,
        "End" => TokenKind::End,
        "If" => TokenKind::If,
        "Then" => TokenKind::Then,
        "Else" => TokenKind::Else,
        "While" => TokenKind::While,
        "Do" => TokenKind::Do,
        "Print" => TokenKind::Print,
        "Input" => TokenKind::Input,
        _ if text.starts_with(|ch: char| ch.is_ascii_lowercase()) => TokenKind::VarName {
            value: text.to_string(),
        },
        _ => TokenKind::ProgName {
            value: text.to_string(),
        },
    }
}
