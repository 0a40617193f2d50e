use crate::ast::{eval_rpn, to_rpn, tokenize, Token};
use crate::error::EvaluationError;
use log::debug;
use lru::LruCache;
use std::num::NonZeroUsize;

/// An expression already converted to RPN, ready to be run any number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    instructions: Vec<Token>,
}

impl Program {
    pub fn instructions(&self) -> &[Token] {
        &self.instructions
    }

    pub fn run(&self) -> Result<f64, EvaluationError> {
        Ok(eval_rpn(&self.instructions)?)
    }
}

pub struct Compiler;

impl Compiler {
    /// Tokenize and convert an expression string into a [`Program`].
    pub fn compile_expression(expression: &str) -> Result<Program, EvaluationError> {
        let tokens = tokenize(expression)?;
        Self::compile_tokens(&tokens)
    }

    pub fn compile_tokens(tokens: &[Token]) -> Result<Program, EvaluationError> {
        Ok(Program {
            instructions: to_rpn(tokens)?,
        })
    }
}

/// Evaluates expressions, remembering the compiled form of recently seen ones.
pub struct Executor {
    cache: LruCache<String, Program>,
}

impl Executor {
    /// Creates a new `Executor` holding at most `max_cache_size` compiled programs.
    pub fn new(max_cache_size: usize) -> Self {
        let capacity = NonZeroUsize::new(max_cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Evaluates a given expression string.
    ///
    /// # Returns
    ///
    /// * `Ok(f64)` if the evaluation succeeds.
    /// * `Err(EvaluationError)` tagged with the stage that failed.
    pub fn execute_expression(&mut self, expression: &str) -> Result<f64, EvaluationError> {
        if let Some(program) = self.cache.get(expression) {
            debug!("Cache hit: {}", expression);
            return program.run();
        }

        debug!("Cache miss: {}", expression);
        let program = Compiler::compile_expression(expression)?;
        let result = program.run();
        self.cache.put(expression.to_string(), program);
        result
    }

    pub fn execute(&self, program: &Program) -> Result<f64, EvaluationError> {
        program.run()
    }

    pub fn cached_programs(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EvalError, LexError, ParseError};

    #[test]
    fn test_compile_and_run() {
        let program = Compiler::compile_expression("(2 + 3) * (4 + 5)").unwrap();
        assert_eq!(program.run(), Ok(45.0));
        assert_eq!(program.run(), Ok(45.0));
        assert_eq!(program.instructions().len(), 7);
    }

    #[test]
    fn test_compile_errors() {
        assert!(matches!(
            Compiler::compile_expression("2 $ 3"),
            Err(EvaluationError::Lex(LexError::DisallowedCharacter { .. }))
        ));
        assert_eq!(
            Compiler::compile_expression("((1)"),
            Err(EvaluationError::Parse(ParseError::MismatchedParentheses))
        );
    }

    #[test]
    fn test_runtime_error_is_not_a_compile_error() {
        let program = Compiler::compile_expression("1/0").unwrap();
        assert_eq!(
            program.run(),
            Err(EvaluationError::Eval(EvalError::DivisionByZero))
        );
    }

    #[test]
    fn test_executor_caches_programs() {
        let mut executor = Executor::new(2);
        assert_eq!(executor.execute_expression("2+3*4"), Ok(14.0));
        assert_eq!(executor.cached_programs(), 1);

        // Hits return the same result as the first evaluation.
        assert_eq!(executor.execute_expression("2+3*4"), Ok(14.0));
        assert_eq!(executor.cached_programs(), 1);

        executor.execute_expression("1+1").unwrap();
        executor.execute_expression("2+2").unwrap();
        assert_eq!(executor.cached_programs(), 2);

        executor.clear_cache();
        assert_eq!(executor.cached_programs(), 0);
    }

    #[test]
    fn test_executor_skips_failed_compilations() {
        let mut executor = Executor::default();
        assert!(executor.execute_expression("1..2").is_err());
        assert!(executor.execute_expression("(1").is_err());
        assert_eq!(executor.cached_programs(), 0);

        // Compiles fine but fails at runtime; the program is still reusable.
        assert!(executor.execute_expression("5/0").is_err());
        assert_eq!(executor.cached_programs(), 1);
        assert_eq!(
            executor.execute_expression("5/0"),
            Err(EvaluationError::Eval(EvalError::DivisionByZero))
        );
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut executor = Executor::new(0);
        executor.execute_expression("1").unwrap();
        executor.execute_expression("2").unwrap();
        assert_eq!(executor.cached_programs(), 1);
    }

    #[test]
    fn test_execute_precompiled() {
        let executor = Executor::default();
        let program = Compiler::compile_expression("10 + 2 * 3 - 4 / 2").unwrap();
        assert_eq!(executor.execute(&program), Ok(14.0));
    }
}
