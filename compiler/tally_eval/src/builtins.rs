//! The fixed function library.
//!
//! Dispatch is by name with the arity and operand types checked up front;
//! there is no user extension point. `log` is the base-10 logarithm, a
//! language contract inherited from the surface syntax.

use tally_diagnostic::RuntimeError;
use tally_ir::Value;

use crate::rng::Rng;

/// Call a library function with already-evaluated arguments.
#[allow(clippy::cast_precision_loss)]
pub fn call(name: &str, args: &[Value], rng: &mut Rng) -> Result<Value, RuntimeError> {
    match name {
        "sqrt" => unary_number("sqrt", args, f64::sqrt),
        "log" => unary_number("log", args, f64::log10),
        "abs" => unary_number("abs", args, f64::abs),
        "round" => unary_number("round", args, f64::round),
        "floor" => unary_number("floor", args, f64::floor),
        "ceil" => unary_number("ceil", args, f64::ceil),
        "sin" => unary_number("sin", args, f64::sin),
        "cos" => unary_number("cos", args, f64::cos),
        "tan" => unary_number("tan", args, f64::tan),
        "min" => {
            let (a, b) = two_numbers("min", args)?;
            Ok(Value::Number(a.min(b)))
        }
        "max" => {
            let (a, b) = two_numbers("max", args)?;
            Ok(Value::Number(a.max(b)))
        }
        "clamp" => {
            let (v, lo, hi) = three_numbers("clamp", args)?;
            // min(max(v, lo), hi): the upper bound wins when lo > hi.
            Ok(Value::Number(v.max(lo).min(hi)))
        }
        "rand" => rand_int(args, rng),
        "len" => {
            let text = one_text("len", args)?;
            let count = text.chars().count();
            Ok(Value::Number(count as f64))
        }
        "upper" => Ok(Value::text(one_text("upper", args)?.to_uppercase())),
        "lower" => Ok(Value::text(one_text("lower", args)?.to_lowercase())),
        _ => Err(RuntimeError::UnknownFunction(name.to_string())),
    }
}

/// Uniform integer in the inclusive range `[a, b]`, bounds truncated.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn rand_int(args: &[Value], rng: &mut Rng) -> Result<Value, RuntimeError> {
    let (a, b) = two_numbers("rand", args)?;
    let lo = a.trunc() as i64;
    let hi = b.trunc() as i64;
    if lo > hi {
        return Err(RuntimeError::InvalidRandRange { lo, hi });
    }
    Ok(Value::Number(rng.int_inclusive(lo, hi) as f64))
}

fn check_arity(name: &str, args: &[Value], expected: usize) -> Result<(), RuntimeError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::WrongArity {
            name: name.to_string(),
            expected,
            found: args.len(),
        })
    }
}

fn number_arg(name: &'static str, args: &[Value], idx: usize) -> Result<f64, RuntimeError> {
    args[idx].as_number().ok_or(RuntimeError::TypeMismatch {
        operation: name,
        expected: "number",
        found: "text",
    })
}

fn unary_number(
    name: &'static str,
    args: &[Value],
    f: fn(f64) -> f64,
) -> Result<Value, RuntimeError> {
    check_arity(name, args, 1)?;
    Ok(Value::Number(f(number_arg(name, args, 0)?)))
}

fn two_numbers(name: &'static str, args: &[Value]) -> Result<(f64, f64), RuntimeError> {
    check_arity(name, args, 2)?;
    Ok((number_arg(name, args, 0)?, number_arg(name, args, 1)?))
}

fn three_numbers(name: &'static str, args: &[Value]) -> Result<(f64, f64, f64), RuntimeError> {
    check_arity(name, args, 3)?;
    Ok((
        number_arg(name, args, 0)?,
        number_arg(name, args, 1)?,
        number_arg(name, args, 2)?,
    ))
}

fn one_text<'a>(name: &'static str, args: &'a [Value]) -> Result<&'a str, RuntimeError> {
    check_arity(name, args, 1)?;
    args[0].as_text().ok_or(RuntimeError::TypeMismatch {
        operation: name,
        expected: "text",
        found: "number",
    })
}

#[cfg(test)]
mod tests;
