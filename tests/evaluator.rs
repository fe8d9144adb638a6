use std::error::Error as _;

use parencalc::{
    Error,
    ast::Tree,
    config::Limits,
    error::RuntimeError,
    evaluate,
    interpreter::{
        environment::Environment,
        evaluator::function::core::{BUILTIN_ARITY, BUILTIN_PROCEDURES, Procedure},
        lexer::{Token, tokenize},
        parser::core::parse,
        value::{core::Symbol, kind::Kind},
    },
};

fn runtime_error(src: &str) -> RuntimeError {
    match evaluate(src) {
        Err(Error::Runtime(e)) => e,
        other => panic!("expected a runtime error from `{src}`, got {other:?}"),
    }
}

#[test]
fn documented_examples_evaluate() {
    assert_eq!(evaluate("(+ 2 3)").unwrap(), Symbol::Integer(5));
    assert_eq!(evaluate("(+ (+ 2 3) 5)").unwrap(), Symbol::Integer(10));
    assert_eq!(evaluate("(- 10 4)").unwrap(), Symbol::Integer(6));
}

#[test]
fn integer_and_float_do_not_mix() {
    let err = runtime_error("(+ 2 3.0)");

    assert_eq!(err,
               RuntimeError::TypeMismatch { procedure: "+".to_string(),
                                            left:      Kind::Integer,
                                            right:     Kind::Float, });
    assert!(err.to_string().contains("Integer and Float"));
}

#[test]
fn arity_error_reports_received_count() {
    let err = runtime_error("(+ 1 2 3)");

    assert_eq!(err,
               RuntimeError::Arity { procedure: "+".to_string(),
                                     expected:  2,
                                     received:  3, });
    assert_eq!(err.to_string(), "\"+\" takes 2 arguments, got: 3");
}

#[test]
fn calling_a_builtin_directly_checks_arity() {
    let minus = Procedure::lookup("-").unwrap();

    assert_eq!(minus.call(&[Symbol::Integer(1)]),
               Err(RuntimeError::Arity { procedure: "-".to_string(),
                                         expected:  2,
                                         received:  1, }));
    assert_eq!(minus.call(&[]).unwrap_err(),
               RuntimeError::Arity { procedure: "-".to_string(),
                                     expected:  2,
                                     received:  0, });
    assert_eq!(minus.call(&[Symbol::Integer(5), Symbol::Integer(3)]), Ok(Symbol::Integer(2)));
}

#[test]
fn arity_is_checked_before_types() {
    assert!(matches!(runtime_error("(* 1 2.0 3)"), RuntimeError::Arity { received: 3, .. }));
}

#[test]
fn failures_inside_arguments_are_wrapped() {
    let err = runtime_error("(+ 1 (* 2 (/ 1 0)))");

    let RuntimeError::Argument { ref procedure, position, .. } = err else {
        panic!("expected an argument error, got {err:?}");
    };
    assert_eq!(procedure, "+");
    assert_eq!(position, 2);
    assert_eq!(err.root_cause(),
               &RuntimeError::DivisionByZero { procedure: "/".to_string() });

    let source = err.source().expect("argument errors carry their cause");
    assert!(source.to_string().contains("argument 2 of \"*\""));
}

#[test]
fn first_failing_argument_wins() {
    let err = runtime_error("(+ (+ 1 2.0) (/ 1 0))");

    assert!(matches!(err, RuntimeError::Argument { position: 1, .. }));
    assert!(matches!(err.root_cause(), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn integer_overflow_is_an_error() {
    assert_eq!(runtime_error("(* billion (* billion billion))").root_cause(),
               &RuntimeError::Overflow { procedure: "*".to_string() });
    assert_eq!(runtime_error("(/ -9223372036854775808 -1)"),
               RuntimeError::Overflow { procedure: "/".to_string() });
}

#[test]
fn float_division_by_zero_follows_ieee() {
    assert_eq!(evaluate("(/ 1.0 0.0)").unwrap(), Symbol::Float(f64::INFINITY));
    assert!(evaluate("(/ 0.0 0.0)").unwrap().as_float().unwrap().is_nan());
}

#[test]
fn integer_division_by_zero_is_an_error() {
    assert_eq!(runtime_error("(/ 5 0)"),
               RuntimeError::DivisionByZero { procedure: "/".to_string() });
}

#[test]
fn leaves_evaluate_to_themselves() {
    assert_eq!(Tree::Leaf(Symbol::Integer(7)).evaluate().unwrap(), Symbol::Integer(7));
    assert_eq!(Tree::Leaf(Symbol::Float(2.5)).evaluate().unwrap(), Symbol::Float(2.5));
    assert_eq!(Tree::Leaf(Symbol::Nil).evaluate().unwrap(), Symbol::Nil);
}

#[test]
fn evaluating_twice_gives_the_same_result() {
    let tokens = tokenize("(* (+ 1 2) (- 10 4))").unwrap();
    let tree = parse(&tokens, &Environment::standard(), &Limits::default()).unwrap();

    assert_eq!(tree.evaluate().unwrap(), Symbol::Integer(18));
    assert_eq!(tree.evaluate().unwrap(), Symbol::Integer(18));
}

#[test]
fn evaluation_depth_limit_is_enforced() {
    let tokens = tokenize("(+ (+ (+ 1 2) 3) 4)").unwrap();
    let tree = parse(&tokens, &Environment::standard(), &Limits::default()).unwrap();

    assert!(tree.evaluate_with(&Limits::default().with_max_depth(3)).is_ok());
    let err = tree.evaluate_with(&Limits::default().with_max_depth(2)).unwrap_err();
    assert_eq!(err.root_cause(), &RuntimeError::NestingTooDeep { limit: 2 });
}

#[test]
fn rendered_results_read_back_to_equal_values() {
    let env = Environment::standard();

    for src in ["(+ 2 3)", "(- 1 1000)", "(* billion 9)", "(/ 1.0 3.0)", "(* π π)", "(+ 0.5 0.5)", "(- 0.0 2.5)"] {
        let value = evaluate(src).unwrap();
        let rendered = value.to_string();

        let tokens = tokenize(&rendered).unwrap();
        assert_eq!(tokens.len(), 1, "`{rendered}` should be a single token");
        assert_eq!(tokens[0].kind, value.kind(), "`{rendered}` changed kind");
        assert_eq!(env.resolve(&tokens[0]).unwrap(), value, "`{rendered}` changed value");
    }
}

#[test]
fn resolving_a_builtin_twice_gives_the_same_binding() {
    let env = Environment::standard();

    for name in BUILTIN_PROCEDURES {
        let token = Token::new(Kind::Procedure, *name);
        let first = env.resolve(&token).unwrap();
        let second = env.resolve(&token).unwrap();

        assert_eq!(first.kind(), Kind::Procedure);
        assert_eq!(first.kind(), second.kind());
        assert!(first.as_procedure().unwrap().same_binding(second.as_procedure().unwrap()));
    }
}

#[test]
fn builtin_table_is_complete() {
    let names: Vec<&str> = Procedure::builtins().map(Procedure::name).collect();

    assert_eq!(names, ["+", "-", "*", "/"]);
    assert_eq!(BUILTIN_ARITY, 2);
    assert_eq!(Environment::standard().names(), ["*", "+", "-", "/", "billion", "π"]);
}

#[test]
fn procedure_values_render_by_name() {
    let plus = Symbol::Procedure(Procedure::lookup("+").unwrap());

    assert_eq!(plus.to_string(), "#<procedure +>");
    assert!(matches!(runtime_error("(+ + 1)"), RuntimeError::TypeMismatch { left: Kind::Procedure, .. }));
}
