use log::debug;
use rpn_calc_rs::ast::{tokenize, Compiler, Executor};
use rpn_calc_rs::evaluate;

fn main() {
    pretty_env_logger::init();

    let expr = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "(10 - 2) / 4 + -3 * 2".to_string());

    match tokenize(&expr) {
        Ok(tokens) => debug!("tokens: {tokens:?}"),
        Err(err) => debug!("tokenize failed at byte {}: {err}", err.position()),
    }

    match Compiler::compile_expression(&expr) {
        Ok(program) => {
            let rpn: Vec<String> = program.instructions().iter().map(|t| t.to_string()).collect();
            println!("RPN: {}", rpn.join(" "));

            let executor = Executor::default();
            println!("Result: {:?}", executor.execute(&program));
        }
        Err(err) => println!("Compile error: {err}"),
    }

    match evaluate(&expr) {
        Ok(result) => println!("{expr} = {result}"),
        Err(err) => println!("Error: {err}"),
    }
}
