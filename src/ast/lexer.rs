use crate::ast::{Operator, Token};
use crate::error::LexError;
use log::debug;

/// Splits `input` into number, operator and parenthesis tokens.
///
/// A `-` in unary position (start of input, after `(` or after another
/// operator) is emitted as `Number(-1), Operator(*)` so later stages only ever
/// see binary operators.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    debug!("Tokenizing expression: {}", input);
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let mut end = start;
            let mut dots = 0;
            while let Some(&(i, d)) = chars.peek() {
                if !(d.is_ascii_digit() || d == '.') {
                    break;
                }
                if d == '.' {
                    dots += 1;
                    if dots > 1 {
                        return Err(LexError::InvalidDecimalPoint { position: i });
                    }
                }
                end = i + d.len_utf8();
                chars.next();
            }

            let literal = &input[start..end];
            let value = literal
                .parse::<f64>()
                .map_err(|_| LexError::InvalidNumber { position: start })?;
            tokens.push(Token::Number(value));
            continue;
        }

        match c {
            '(' => tokens.push(Token::OpenParen),
            ')' => tokens.push(Token::CloseParen),
            _ => {
                let operator = Operator::try_from(c).map_err(|character| {
                    LexError::DisallowedCharacter {
                        character,
                        position: start,
                    }
                })?;

                if operator == Operator::Subtract && is_unary_position(tokens.last()) {
                    tokens.push(Token::Number(-1.0));
                    tokens.push(Token::Operator(Operator::Multiply));
                } else {
                    tokens.push(Token::Operator(operator));
                }
            }
        }
        chars.next();
    }

    debug!("Tokens: {:?}", tokens);
    Ok(tokens)
}

fn is_unary_position(previous: Option<&Token>) -> bool {
    matches!(
        previous,
        None | Some(Token::OpenParen) | Some(Token::Operator(_))
    )
}
