use monkey::{
    get_result,
    interpreter::{environment::Environment, evaluator::core::Context, object::Object},
};

fn run(src: &str) -> String {
    run_with(&mut Context::new(), src)
}

fn run_with(context: &mut Context, src: &str) -> String {
    match get_result(src, context, &Environment::new()) {
        Ok(value) => value.inspect(),
        Err(errors) => panic!("Script failed to parse: {errors:?}"),
    }
}

fn assert_value(src: &str, expected: &str) {
    assert_eq!(run(src), expected, "while evaluating `{src}`");
}

fn assert_error(src: &str, message: &str) {
    let result = run(src);
    assert!(result.starts_with("ERROR: "),
            "Script succeeded with `{result}` but was expected to fail");
    assert!(result.contains(message),
            "Error `{result}` does not mention `{message}`");
}

#[test]
fn integer_arithmetic() {
    assert_value("5", "5");
    assert_value("-10", "-10");
    assert_value("5 + 5 + 5 + 5 - 10", "10");
    assert_value("2 * 2 * 2 * 2 * 2", "32");
    assert_value("50 / 2 * 2 + 10", "60");
    assert_value("1 + 2 * 3", "7");
    assert_value("3 * (3 * 3) + 10", "37");
    assert_value("(5 + 10 * 2 + 15 / 3) * 2 + -10", "50");
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("7 / 2", "3");
    assert_value("-7 / 2", "-3");
    assert_value("7 / -2", "-3");
    assert_value("1 / 3", "0");
}

#[test]
fn boolean_logic_and_comparison() {
    assert_value("true", "true");
    assert_value("1 < 2", "true");
    assert_value("1 > 2", "false");
    assert_value("1 == 1", "true");
    assert_value("1 != 2", "true");
    assert_value("true == true", "true");
    assert_value("true != false", "true");
    assert_value("(1 < 2) == true", "true");
    assert_value("(1 > 2) == true", "false");
}

#[test]
fn bang_uses_truthiness() {
    assert_value("!true", "false");
    assert_value("!false", "true");
    assert_value("!5", "false");
    assert_value("!0", "false");
    assert_value("!!5", "true");
    assert_value("!if (false) { 1 }", "true");
}

#[test]
fn equality_across_types_is_never_true() {
    assert_value("1 == true", "false");
    assert_value("1 != true", "true");
    assert_value("fn(x) { x } == fn(x) { x }", "false");
    assert_value("let f = fn(x) { x }; f == f", "true");
    assert_value("if (false) { 1 } == if (false) { 2 }", "true");
}

#[test]
fn conditionals() {
    assert_value("if (true) { 10 }", "10");
    assert_value("if (false) { 10 }", "null");
    assert_value("if (1) { 10 }", "10");
    assert_value("if (0) { 10 } else { 20 }", "10");
    assert_value("if (1 > 2) { 10 } else { 20 }", "20");
    assert_value("if (if (false) { 1 }) { 10 } else { 20 }", "20");
    assert_value("if (true) { }", "null");
}

#[test]
fn let_bindings() {
    assert_value("let a = 5; a;", "5");
    assert_value("let a = 5 * 5; a;", "25");
    assert_value("let a = 5; let b = a; b;", "5");
    assert_value("let a = 5; let b = a; let c = a + b + 5; c;", "15");
    assert_value("let a = 5;", "null");
    assert_value("let a = 1; let a = a + 1; a", "2");
}

#[test]
fn blocks_share_the_enclosing_scope() {
    assert_value("if (true) { let x = 3; } x", "3");
}

#[test]
fn early_return() {
    assert_value("return 10;", "10");
    assert_value("return 10; 9;", "10");
    assert_value("9; return 2 * 5; 9;", "10");
    assert_value("return;", "null");
    assert_value("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", "10");
    assert_value("let f = fn(x) { if (x > 0) { return 1; } return -1; }; f(5) + f(-5)",
                 "0");
    assert_value("let f = fn() { return; 5 }; f()", "null");
}

#[test]
fn return_only_leaves_the_innermost_function() {
    assert_value("let inner = fn() { return 1; 2 };
                  let outer = fn() { inner(); 3 };
                  outer()",
                 "3");
}

#[test]
fn functions_and_calls() {
    assert_value("let identity = fn(x) { x; }; identity(5);", "5");
    assert_value("let identity = fn(x) { return x; }; identity(5);", "5");
    assert_value("let double = fn(x) { x * 2; }; double(5);", "10");
    assert_value("let add = fn(x, y) { x + y; }; add(5, 5);", "10");
    assert_value("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", "20");
    assert_value("fn(x) { x; }(5)", "5");
    assert_value("let f = fn() { }; f()", "null");
    assert_value("fn(x, y) { x }", "fn(x, y) { ... }");
}

#[test]
fn closures_capture_their_defining_environment() {
    assert_value("let newAdder = fn(x) { fn(y) { x + y } };
                  let addTwo = newAdder(2);
                  addTwo(3);",
                 "5");
    assert_value("let x = 10;
                  let f = fn() { x };
                  let g = fn() { let x = 20; f() };
                  g()",
                 "10");
}

#[test]
fn closures_see_later_bindings_of_their_environment() {
    assert_value("let f = fn() { y }; let y = 7; f()", "7");
}

#[test]
fn parameters_shadow_and_do_not_leak() {
    assert_value("let x = 1; let f = fn(x) { x * 10 }; f(5) + x", "51");
    assert_error("let f = fn(a) { a }; f(1); a", "identifier not found: a");
}

#[test]
fn recursion() {
    assert_value("let fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } };
                  fib(15)",
                 "610");
    assert_value("let fact = fn(n) { if (n == 0) { return 1; } n * fact(n - 1) }; fact(20)",
                 "2432902008176640000");
}

#[test]
fn higher_order_functions() {
    assert_value("let twice = fn(f, x) { f(f(x)) };
                  twice(fn(x) { x * 3 }, 2)",
                 "18");
}

#[test]
fn type_mismatch_is_an_error_value() {
    assert_error("5 + true;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("-true", "unknown operator: -BOOLEAN");
    assert_error("true < false", "unknown operator: BOOLEAN < BOOLEAN");
}

#[test]
fn errors_short_circuit_everything() {
    assert_error("let f = fn(x) { x + true; 99 }; f(1); 100", "type mismatch");
    assert_error("let x = -true; 5", "unknown operator: -BOOLEAN");
    assert_error("if (foo) { 1 } else { 2 }", "identifier not found: foo");
    assert_error("let f = fn(a, b) { a }; f(1, missing)", "identifier not found: missing");
    assert_error("1 + (2 + (3 + nope))", "identifier not found: nope");
}

#[test]
fn unbound_identifier() {
    assert_error("foobar", "identifier not found: foobar");
}

#[test]
fn calling_a_non_function() {
    assert_error("let x = 5; x(1)", "not a function: INTEGER");
    assert_error("true()", "not a function: BOOLEAN");
}

#[test]
fn wrong_argument_count() {
    assert_error("let f = fn(a, b) { a + b }; f(1)",
                 "wrong number of arguments: expected 2, got 1");
    assert_error("fn() { 1 }(1, 2)", "wrong number of arguments: expected 0, got 2");
}

#[test]
fn division_by_zero() {
    assert_error("1 / 0", "division by zero");
    assert_error("let f = fn(x) { 10 / x }; f(0)", "division by zero");
}

#[test]
fn integer_overflow_is_reported() {
    assert_value("9223372036854775807", "9223372036854775807");
    assert_value("-9223372036854775807 - 1", "-9223372036854775808");
    assert_error("9223372036854775807 + 1", "integer overflow");
    assert_error("-9223372036854775807 - 2", "integer overflow");
    assert_error("4611686018427387904 * 2", "integer overflow");
    assert_error("-(-9223372036854775807 - 1)", "integer overflow");
    assert_error("(-9223372036854775807 - 1) / -1", "integer overflow");
}

#[test]
fn runtime_errors_carry_the_line() {
    assert_error("let a = 1;\nlet b = 2;\na + true", "line 3: type mismatch");
}

#[test]
fn call_depth_limit() {
    let mut context = Context::with_max_depth(50);
    let result = run_with(&mut context,
                          "let down = fn(n) { if (n == 0) { 0 } else { down(n - 1) } }; down(100)");
    assert_eq!(result, "ERROR: line 1: maximum call depth of 50 exceeded");

    let result = run_with(&mut context,
                          "let down = fn(n) { if (n == 0) { 0 } else { down(n - 1) } }; down(40)");
    assert_eq!(result, "0");
    assert_eq!(context.depth(), 0);
}

#[test]
fn environment_persists_between_evaluations() {
    let env = Environment::new();
    let mut context = Context::new();

    get_result("let counter = fn(x) { x + 1 };", &mut context, &env).unwrap();
    get_result("let n = counter(41);", &mut context, &env).unwrap();
    let result = get_result("n", &mut context, &env).unwrap();

    assert_eq!(result.inspect(), "42");
    assert!(env.borrow().contains_local("counter"));
}

#[test]
fn failed_evaluation_keeps_earlier_bindings() {
    let env = Environment::new();
    let mut context = Context::new();

    let result = get_result("let kept = 1; let lost = 1 / 0;", &mut context, &env).unwrap();
    assert!(result.is_error());

    let result = get_result("kept", &mut context, &env).unwrap();
    assert_eq!(result.inspect(), "1");
    assert!(get_result("lost", &mut context, &env).unwrap().is_error());
}

#[test]
fn syntax_errors_prevent_evaluation() {
    let env = Environment::new();
    let mut context = Context::new();

    let errors = get_result("let x = 1; let = 2;", &mut context, &env).unwrap_err();
    assert!(!errors.is_empty());
    assert!(!env.borrow().contains_local("x"));
}

#[test]
fn singletons_are_shared() {
    let env = Environment::new();
    let mut context = Context::new();

    let a = get_result("1 < 2", &mut context, &env).unwrap();
    let b = get_result("true", &mut context, &env).unwrap();
    assert!(std::rc::Rc::ptr_eq(&a, &b));

    let a = get_result("if (false) { 1 }", &mut context, &env).unwrap();
    assert!(std::rc::Rc::ptr_eq(&a, &Object::null()));
}

#[test]
fn empty_program_is_null() {
    assert_value("", "null");
}

#[test]
fn return_inside_an_expression_leaves_the_function() {
    assert_value("let f = fn() { let x = if (true) { return 5; }; 10 }; f()", "5");
    assert_value("fn() { (if (true) { return 5; }) + 1 }()", "5");
    assert_value("fn() { -if (true) { return 5; } }()", "5");
    assert_value("let id = fn(x) { x }; fn() { id(if (true) { return 5; }) + 1 }()", "5");
    assert_value("fn() { if (if (true) { return 5; }) { 1 } else { 2 } }()", "5");
    assert_value("fn() { (if (true) { return 5; })(1) }()", "5");
}

#[test]
fn return_in_an_expression_at_top_level_ends_the_program() {
    assert_value("let x = if (true) { return 5; }; return x;", "5");
    assert_value("1 + if (true) { return 2; }; 3", "2");
}

#[test]
fn returned_values_never_escape_as_signals() {
    let env = Environment::new();
    let mut context = Context::new();

    let result = get_result("let x = if (true) { return 5; }; x", &mut context, &env).unwrap();
    assert!(matches!(*result, Object::Integer(5)));
    assert!(!env.borrow().contains_local("x"));
}

#[test]
fn error_values_report_their_line() {
    let env = Environment::new();
    let mut context = Context::new();

    let result = get_result("let f = fn(x) {\n  x / 0\n};\nf(1)", &mut context, &env).unwrap();
    let Object::Error(error) = &*result else {
        panic!("expected an error value, got {result:?}");
    };
    assert_eq!(error.line_number(), 2);
}
