pub mod ast;
pub mod calculator;
pub mod error;

use ast::{eval_rpn, to_rpn, tokenize};
use error::EvaluationError;
use rayon::prelude::*;

/// Evaluates an arithmetic expression over `+ - * /`, parentheses and decimal
/// numbers.
///
/// The first failing stage (lexing, parenthesis matching or evaluation)
/// determines the error returned.
pub fn evaluate(expression: &str) -> Result<f64, EvaluationError> {
    let tokens = tokenize(expression)?;
    let rpn = to_rpn(&tokens)?;
    Ok(eval_rpn(&rpn)?)
}

/// Evaluates independent expressions in parallel. Results keep input order.
pub fn evaluate_batch<S>(expressions: &[S]) -> Vec<Result<f64, EvaluationError>>
where
    S: AsRef<str> + Sync,
{
    expressions
        .par_iter()
        .map(|expression| evaluate(expression.as_ref()))
        .collect()
}
