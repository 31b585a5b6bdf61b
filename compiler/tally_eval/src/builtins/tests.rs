use super::*;
use pretty_assertions::assert_eq;

fn rng() -> Rng {
    Rng::seeded(7)
}

fn num(n: f64) -> Value {
    Value::Number(n)
}

fn call_ok(name: &str, args: &[Value]) -> Value {
    match call(name, args, &mut rng()) {
        Ok(value) => value,
        Err(err) => panic!("{name} failed: {err}"),
    }
}

#[test]
fn test_unary_math() {
    assert_eq!(call_ok("sqrt", &[num(9.0)]), num(3.0));
    assert_eq!(call_ok("abs", &[num(-4.5)]), num(4.5));
    assert_eq!(call_ok("round", &[num(2.5)]), num(3.0));
    assert_eq!(call_ok("floor", &[num(2.9)]), num(2.0));
    assert_eq!(call_ok("ceil", &[num(2.1)]), num(3.0));
    assert_eq!(call_ok("sin", &[num(0.0)]), num(0.0));
    assert_eq!(call_ok("cos", &[num(0.0)]), num(1.0));
    assert_eq!(call_ok("tan", &[num(0.0)]), num(0.0));
}

#[test]
fn test_log_is_base_ten() {
    let Value::Number(result) = call_ok("log", &[num(1000.0)]) else {
        panic!("log returned text");
    };
    assert!((result - 3.0).abs() < 1e-12);
}

#[test]
fn test_min_max() {
    assert_eq!(call_ok("min", &[num(2.0), num(5.0)]), num(2.0));
    assert_eq!(call_ok("max", &[num(2.0), num(5.0)]), num(5.0));
}

#[test]
fn test_clamp() {
    assert_eq!(call_ok("clamp", &[num(10.0), num(0.0), num(5.0)]), num(5.0));
    assert_eq!(call_ok("clamp", &[num(-10.0), num(0.0), num(5.0)]), num(0.0));
    assert_eq!(call_ok("clamp", &[num(3.0), num(0.0), num(5.0)]), num(3.0));
}

#[test]
fn test_rand_degenerate_range() {
    assert_eq!(call_ok("rand", &[num(1.0), num(1.0)]), num(1.0));
}

#[test]
fn test_rand_stays_in_range() {
    let mut rng = Rng::seeded(99);
    for _ in 0..200 {
        let Ok(Value::Number(v)) = call("rand", &[num(-3.0), num(3.0)], &mut rng) else {
            panic!("rand failed");
        };
        assert!((-3.0..=3.0).contains(&v));
        assert_eq!(v.trunc(), v, "rand must yield integers");
    }
}

#[test]
fn test_rand_inverted_range_is_an_error() {
    assert_eq!(
        call("rand", &[num(5.0), num(1.0)], &mut rng()),
        Err(RuntimeError::InvalidRandRange { lo: 5, hi: 1 })
    );
}

#[test]
fn test_len_counts_characters() {
    assert_eq!(call_ok("len", &[Value::text("hello")]), num(5.0));
    assert_eq!(call_ok("len", &[Value::text("")]), num(0.0));
    // Characters, not bytes.
    assert_eq!(call_ok("len", &[Value::text("héllo")]), num(5.0));
}

#[test]
fn test_case_folding() {
    assert_eq!(call_ok("upper", &[Value::text("hi")]), Value::text("HI"));
    assert_eq!(call_ok("lower", &[Value::text("HI")]), Value::text("hi"));
}

#[test]
fn test_wrong_arity() {
    assert_eq!(
        call("sqrt", &[num(1.0), num(2.0)], &mut rng()),
        Err(RuntimeError::WrongArity {
            name: "sqrt".to_string(),
            expected: 1,
            found: 2,
        })
    );
    assert!(call("min", &[num(1.0)], &mut rng()).is_err());
    assert!(call("clamp", &[num(1.0), num(2.0)], &mut rng()).is_err());
}

#[test]
fn test_type_mismatches() {
    assert!(call("sqrt", &[Value::text("9")], &mut rng()).is_err());
    assert!(call("len", &[num(5.0)], &mut rng()).is_err());
    assert!(call("upper", &[num(5.0)], &mut rng()).is_err());
}

#[test]
fn test_unknown_function() {
    assert_eq!(
        call("frobnicate", &[], &mut rng()),
        Err(RuntimeError::UnknownFunction("frobnicate".to_string()))
    );
}
