use crate::ast::Token;
use crate::error::ParseError;
use log::debug;

/// Converts infix tokens into Reverse Polish Notation (shunting-yard).
///
/// Operators of equal precedence pop each other, so chains such as `a - b - c`
/// evaluate left to right. Parentheses never appear in the output.
pub fn to_rpn(tokens: &[Token]) -> Result<Vec<Token>, ParseError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) => output.push(*token),

            Token::Operator(incoming) => {
                while let Some(Token::Operator(top)) = stack.last() {
                    if top.precedence() < incoming.precedence() {
                        break;
                    }
                    output.push(Token::Operator(*top));
                    stack.pop();
                }
                stack.push(*token);
            }

            Token::OpenParen => stack.push(*token),

            Token::CloseParen => loop {
                match stack.pop() {
                    Some(Token::OpenParen) => break,
                    Some(top) => output.push(top),
                    None => return Err(ParseError::MismatchedParentheses),
                }
            },
        }
    }

    while let Some(top) = stack.pop() {
        if top == Token::OpenParen {
            return Err(ParseError::MismatchedParentheses);
        }
        output.push(top);
    }

    debug!("RPN: {:?}", output);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{tokenize, Operator};

    fn rpn_string(input: &str) -> String {
        let tokens = tokenize(input).unwrap();
        to_rpn(&tokens)
            .unwrap()
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_precedence() {
        assert_eq!(rpn_string("2+3*4"), "2 3 4 * +");
        assert_eq!(rpn_string("2*3+4"), "2 3 * 4 +");
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(rpn_string("10-4-3"), "10 4 - 3 -");
        assert_eq!(rpn_string("100/10/5"), "100 10 / 5 /");
        assert_eq!(rpn_string("8/2*4"), "8 2 / 4 *");
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(rpn_string("(10-2)/4"), "10 2 - 4 /");
        assert_eq!(rpn_string("2*(3+(4-1))"), "2 3 4 1 - + *");
    }

    #[test]
    fn test_unary_minus_rewrite() {
        assert_eq!(rpn_string("-5+3"), "-1 5 * 3 +");
    }

    #[test]
    fn test_unclosed_paren() {
        let tokens = tokenize("(1+2").unwrap();
        assert_eq!(to_rpn(&tokens), Err(ParseError::MismatchedParentheses));
    }

    #[test]
    fn test_unopened_paren() {
        let tokens = tokenize("1+2)").unwrap();
        assert_eq!(to_rpn(&tokens), Err(ParseError::MismatchedParentheses));

        let tokens = tokenize(")(").unwrap();
        assert_eq!(to_rpn(&tokens), Err(ParseError::MismatchedParentheses));
    }

    #[test]
    fn test_empty_group_produces_empty_output() {
        let tokens = tokenize("()").unwrap();
        assert_eq!(to_rpn(&tokens), Ok(vec![]));
    }

    #[test]
    fn test_operators_only_pass_through() {
        let tokens = vec![
            Token::Operator(Operator::Add),
            Token::Operator(Operator::Multiply),
        ];
        assert_eq!(
            to_rpn(&tokens),
            Ok(vec![
                Token::Operator(Operator::Multiply),
                Token::Operator(Operator::Add)
            ])
        );
    }
}
