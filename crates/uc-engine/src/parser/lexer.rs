use logos::Logos;

use crate::error::ParseError;

/// Raw logos token. Punctuation between words is skipped.
#[derive(Logos, Debug)]
#[logos(skip r#"[ \t\r\n,.;:!?"]+"#)]
enum RawToken {
    #[regex(r"[a-zA-Z][a-zA-Z0-9'-]*")]
    Word,

    #[regex(r"[0-9]+")]
    Number,
}

/// Split input into lower-case words.
pub fn tokenize(input: &str) -> Result<Vec<String>, ParseError> {
    let mut words = Vec::new();
    let mut lexer = RawToken::lexer(input);
    while let Some(result) = lexer.next() {
        match result {
            Ok(RawToken::Word | RawToken::Number) => {
                words.push(lexer.slice().to_ascii_lowercase());
            }
            Err(()) => {
                return Err(ParseError::Malformed(format!(
                    "I don't understand \"{}\".",
                    lexer.slice()
                )));
            }
        }
    }
    Ok(words)
}
