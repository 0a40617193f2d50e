use rpn_calc_rs::ast::Executor;
use rpn_calc_rs::evaluate_batch;

fn main() {
    pretty_env_logger::init();

    let expressions = vec![
        "2+3*4",
        "(10-2)/4",
        "10/0",
        "-5+3",
        "(1+2",
        "1..2+3",
        "0.1+0.2",
    ];

    for (i, result) in evaluate_batch(&expressions).iter().enumerate() {
        println!("Result {} ({}): {:?}", i, expressions[i], result);
    }

    // Repeated evaluation of the same inputs is served from the program cache.
    let mut executor = Executor::new(16);
    for _ in 0..3 {
        for expression in &expressions {
            let _ = executor.execute_expression(expression);
        }
    }
    println!("Cached programs: {}", executor.cached_programs());
}
