use monkey::{
    ast::{BinaryOperator, Expr, Statement, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, TokenKind},
        parser::Parser,
    },
    parse,
};

fn assert_renders(src: &str, expected: &str) {
    let (program, errors) = parse(src);
    assert!(errors.is_empty(), "`{src}` failed to parse: {errors:?}");
    assert_eq!(program.to_string(), expected, "while rendering `{src}`");
}

fn parse_errors(src: &str) -> Vec<ParseError> {
    let mut parser = Parser::new(Lexer::new(src));
    parser.parse_program();
    parser.into_errors()
}

#[test]
fn operator_precedence() {
    assert_renders("-a * b", "((-a) * b)");
    assert_renders("!-a", "(!(-a))");
    assert_renders("a + b + c", "((a + b) + c)");
    assert_renders("a + b - c", "((a + b) - c)");
    assert_renders("a * b * c", "((a * b) * c)");
    assert_renders("a * b / c", "((a * b) / c)");
    assert_renders("a + b / c", "(a + (b / c))");
    assert_renders("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)");
    assert_renders("3 + 4; -5 * 5", "(3 + 4); ((-5) * 5)");
    assert_renders("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))");
    assert_renders("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))");
    assert_renders("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))");
    assert_renders("1 + 2 * 3", "(1 + (2 * 3))");
}

#[test]
fn grouping_and_booleans() {
    assert_renders("true", "true");
    assert_renders("3 > 5 == false", "((3 > 5) == false)");
    assert_renders("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)");
    assert_renders("(5 + 5) * 2", "((5 + 5) * 2)");
    assert_renders("2 / (5 + 5)", "(2 / (5 + 5))");
    assert_renders("-(5 + 5)", "(-(5 + 5))");
    assert_renders("!(true == true)", "(!(true == true))");
}

#[test]
fn calls_bind_tightest() {
    assert_renders("a + add(b * c) + d", "((a + add((b * c))) + d)");
    assert_renders("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                   "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))");
    assert_renders("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))");
    assert_renders("-f(x)", "(-f(x))");
    assert_renders("f()", "f()");
    assert_renders("f(1)(2)", "f(1)(2)");
}

#[test]
fn statements() {
    assert_renders("let x = 5;", "let x = 5;");
    assert_renders("let x = 5", "let x = 5;");
    assert_renders("let y = true; return y", "let y = true; return y;");
    assert_renders("return;", "return;");
    assert_renders("return", "return;");
    assert_renders("x; y; z", "x; y; z");
}

#[test]
fn conditionals_and_functions() {
    assert_renders("if (x < y) { x }", "if ((x < y)) { x }");
    assert_renders("if (x < y) { x } else { y }", "if ((x < y)) { x } else { y }");
    assert_renders("if (x) { }", "if (x) { }");
    assert_renders("fn(x, y) { x + y; }", "fn(x, y) { (x + y) }");
    assert_renders("fn() { }", "fn() { }");
    assert_renders("fn(x) { let y = x; return y; }", "fn(x) { let y = x; return y; }");
    assert_renders("fn(x) { if (x) { return; } 1 }", "fn(x) { if (x) { return; }; 1 }");
    assert_renders("fn(x) { x }(5)", "fn(x) { x }(5)");
}

#[test]
fn rendering_is_a_fixed_point() {
    let sources = ["let newAdder = fn(x) { fn(y) { x + y } }; let addTwo = newAdder(2); addTwo(3);",
                   "let fib = fn(n) { if (n < 2) { return n; } fib(n - 1) + fib(n - 2) }; fib(10)",
                   "if (!(1 < 2)) { -1 } else { if (true) { } }; return",
                   "let f = fn() { return; }; f() == f(); -(-(-1))",
                   "fn(a, b) { a * (b - 1) }(2, 3) / -4"];

    for src in sources {
        let (first, errors) = parse(src);
        assert!(errors.is_empty(), "`{src}` failed to parse: {errors:?}");

        let rendered = first.to_string();
        let (second, errors) = parse(&rendered);
        assert!(errors.is_empty(), "rendering `{rendered}` failed to parse: {errors:?}");

        assert_eq!(second.to_string(), rendered);
        assert_eq!(second.statements.len(), first.statements.len());
    }
}

#[test]
fn tree_shape_and_lines() {
    let (program, errors) = parse("let x = 5;\n-x + 10");
    assert!(errors.is_empty());
    assert_eq!(program.statements.len(), 2);

    let Statement::Let { name, value, line } = &program.statements[0] else {
        panic!("expected a let statement, got {:?}", program.statements[0]);
    };
    assert_eq!(name.name, "x");
    assert!(matches!(value, Expr::Integer { value: 5, .. }));
    assert_eq!(*line, 1);

    let Statement::Expression { expr, line } = &program.statements[1] else {
        panic!("expected an expression statement, got {:?}", program.statements[1]);
    };
    assert_eq!(*line, 2);
    let Expr::Infix { left, op, .. } = expr else {
        panic!("expected an infix expression, got {expr:?}");
    };
    assert_eq!(*op, BinaryOperator::Add);
    assert!(matches!(**left,
                     Expr::Prefix { op: UnaryOperator::Negate,
                                    .. }));
}

#[test]
fn leading_token_literals() {
    let (program, errors) = parse("let x = 5;
return x;
add(1, 2);
if (x) { }
-x * 2");
    assert!(errors.is_empty());

    assert_eq!(program.token_literal(), "let");
    let literals: Vec<_> = program.statements.iter().map(Statement::token_literal).collect();
    assert_eq!(literals, ["let", "return", "(", "if", "*"]);

    let lines: Vec<_> = program.statements.iter().map(Statement::line_number).collect();
    assert_eq!(lines, [1, 2, 3, 4, 5]);

    let Statement::Expression { expr: Expr::If { consequence, .. },
                                .. } = &program.statements[3]
    else {
        panic!("expected an if expression, got {:?}", program.statements[3]);
    };
    assert_eq!(consequence.token_literal(), "{");

    let (empty, _) = parse("");
    assert_eq!(empty.token_literal(), "");
}

#[test]
fn missing_identifier_in_let() {
    let errors = parse_errors("let = 5;");

    assert_eq!(errors[0],
               ParseError::ExpectedToken { expected: TokenKind::Ident,
                                           found:    TokenKind::Assign,
                                           line:     1, });
    assert_eq!(errors[0].to_string(),
               "Error on line 1: expected next token to be IDENT, got = instead.");
}

#[test]
fn missing_assign_in_let() {
    let (program, errors) = parse("let x 5;");

    assert_eq!(errors,
               ["Error on line 1: expected next token to be =, got INT instead."]);
    assert_eq!(program.to_string(), "5");
}

#[test]
fn unclosed_parenthesis() {
    let errors = parse_errors("(1 + 2");

    assert_eq!(errors,
               [ParseError::ExpectedToken { expected: TokenKind::RParen,
                                            found:    TokenKind::Eof,
                                            line:     1, }]);
}

#[test]
fn unterminated_block() {
    let errors = parse_errors("fn(x) {\n x");

    assert_eq!(errors,
               [ParseError::ExpectedToken { expected: TokenKind::RBrace,
                                            found:    TokenKind::Eof,
                                            line:     2, }]);
}

#[test]
fn token_without_prefix_rule() {
    let (_, errors) = parse(")");
    assert_eq!(errors, ["Error on line 1: no prefix parse function for ) found."]);
}

#[test]
fn illegal_character() {
    let (program, errors) = parse("1 @ 2");

    assert_eq!(errors, ["Error on line 1: illegal character '@'."]);
    assert_eq!(program.to_string(), "1; 2");
}

#[test]
fn literal_too_large() {
    let errors = parse_errors("let x = 99999999999999999999;");

    assert_eq!(errors,
               [ParseError::LiteralTooLarge { literal: "99999999999999999999".to_string(),
                                              line:    1, }]);
    assert_eq!(errors[0].to_string(),
               "Error on line 1: could not parse 99999999999999999999 as integer, literal is too large.");
}

#[test]
fn several_errors_in_one_pass() {
    let errors = parse_errors("let x 1;\nlet y 2;\n)");
    let lines: Vec<_> = errors.iter().map(ParseError::line_number).collect();

    assert_eq!(lines, [1, 2, 3]);
}

#[test]
fn errors_inside_blocks_do_not_drop_the_block() {
    let (program, errors) = parse("if (x) { let = 1; y }");

    assert!(!errors.is_empty());
    assert_eq!(program.statements.len(), 1);
    assert!(program.to_string().ends_with("y }"));
}
