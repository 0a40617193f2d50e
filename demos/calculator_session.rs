use rpn_calc_rs::calculator::{Calculator, HistoryEntry};

fn press(calculator: &mut Calculator, keys: &str) {
    for key in keys.chars() {
        if let Err(err) = calculator.append(&key.to_string()) {
            println!("  rejected '{key}': {err}");
        }
    }
}

fn equals(calculator: &mut Calculator) {
    match calculator.equals() {
        Ok(result) => println!("{} = {}", calculator.input(), result),
        Err(err) => println!("{} -> {}", calculator.input(), err),
    }
}

fn main() {
    pretty_env_logger::init();

    let mut calculator = Calculator::new();
    calculator.restore_history(vec![HistoryEntry::new("(10-2)/4", "2")]);

    press(&mut calculator, "*2+3*4");
    equals(&mut calculator);

    calculator.clear_all();
    press(&mut calculator, "0.1+0.2");
    equals(&mut calculator);

    calculator.clear_all();
    press(&mut calculator, "10/0");
    equals(&mut calculator);

    calculator.clear_entry();
    press(&mut calculator, "4");
    equals(&mut calculator);

    calculator.clear_all();
    press(&mut calculator, &"9".repeat(30));

    if calculator.recall(calculator.history().len() - 1) {
        println!("Recalled: {} = {:?}", calculator.input(), calculator.result());
    }

    println!("History:");
    for entry in calculator.history().iter() {
        println!("  {} = {}", entry.expression, entry.result);
    }
}
