use crate::ast::Token;
use crate::error::EvalError;
use log::debug;

/// Reduces an RPN token sequence to a single finite number.
pub fn eval_rpn(rpn: &[Token]) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = Vec::with_capacity(rpn.len());

    for token in rpn {
        match token {
            Token::Number(n) => stack.push(*n),
            Token::Operator(operator) => {
                let right = pop_operand(&mut stack)?;
                let left = pop_operand(&mut stack)?;
                stack.push(operator.apply(left, right)?);
            }
            Token::OpenParen | Token::CloseParen => return Err(EvalError::InvalidExpression),
        }
    }

    if stack.len() != 1 {
        debug!("Operand stack left with {} values", stack.len());
        return Err(EvalError::InvalidExpression);
    }

    let result = stack[0];
    if !result.is_finite() {
        return Err(EvalError::InvalidExpression);
    }

    debug!("Result: {}", result);
    // -0.0 == 0.0, so this also maps negative zero to positive zero.
    Ok(if result == 0.0 { 0.0 } else { result })
}

fn pop_operand(stack: &mut Vec<f64>) -> Result<f64, EvalError> {
    match stack.pop() {
        Some(value) if value.is_finite() => Ok(value),
        _ => Err(EvalError::InvalidExpression),
    }
}
