//! Strict operator implementations for the evaluator.
//!
//! Strict operators receive their operands already evaluated. Dispatch is
//! direct pattern matching over the operator tag and the operand shapes;
//! the type set is fixed, so matching beats trait objects for clarity and
//! exhaustiveness.

use std::cmp::Ordering;

use vex_value::{
    binary_type_mismatch, division_by_zero, get_int64, integer_overflow, invalid_binary_op,
    modulo_by_zero, non_boolean_operand, promote_to_float, value_order, EvalError, EvalResult,
    Value,
};

/// Strict binary operator tags.
const BINARY_OPS: &[&str] = &[
    "+", "-", "*", "/", "%", "==", "!=", "<", "<=", ">", ">=", "=~", "!~", "in", "^",
];

/// True when the tag names a strict binary operator.
pub(crate) fn is_binary(op: &str) -> bool {
    BINARY_OPS.contains(&op)
}

/// Evaluate a strict binary operation.
pub fn evaluate_binary(op: &str, left: Value, right: Value) -> EvalResult {
    match op {
        "+" => eval_add(left, right),
        "-" => eval_arith(op, left, right),
        "*" => eval_arith(op, left, right),
        "/" => eval_div(left, right),
        "%" => eval_mod(left, right),
        "==" => eval_comparison(op, &left, &right),
        "!=" => eval_comparison(op, &left, &right),
        "<" | "<=" | ">" | ">=" => eval_comparison(op, &left, &right),
        "=~" => eval_match(&left, &right, false),
        "!~" => eval_match(&left, &right, true),
        "in" => eval_membership(&left, &right),
        "^" => match (&left, &right) {
            (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(a ^ b)),
            (Value::Bool(_), other) | (other, _) => {
                Err(non_boolean_operand("^", other.type_name()))
            }
        },
        _ => Err(invalid_binary_op(op, left.type_name())),
    }
}

/// Evaluate a strict unary operation (`!` and numeric negation).
pub fn evaluate_unary(op: &str, operand: Value) -> EvalResult {
    match op {
        "!" => match operand {
            Value::Bool(b) => Ok(Value::Bool(!b)),
            other => Err(non_boolean_operand("!", other.type_name())),
        },
        "-" => match operand {
            Value::Int(n) => n
                .checked_neg()
                .map(Value::Int)
                .ok_or_else(|| integer_overflow("negation")),
            Value::Float(f) => Ok(Value::Float(-f)),
            other => Err(invalid_binary_op("-", other.type_name())),
        },
        _ => Err(invalid_binary_op(op, operand.type_name())),
    }
}

// Numeric Resolution

/// A numeric operand pairing after int/float promotion.
enum NumPair {
    Ints(i64, i64),
    Floats(f64, f64),
}

/// Resolve two operands to a numeric pairing.
///
/// `Ok(None)` means at least one operand is not numeric; the caller picks
/// its own non-numeric handling (concatenation, error). An unsigned value
/// outside the `i64` range in an all-integer pairing is an overflow.
fn numeric_pair(op: &str, left: &Value, right: &Value) -> Result<Option<NumPair>, EvalError> {
    let both_numeric = matches!(
        left,
        Value::Int(_) | Value::Uint(_) | Value::Float(_)
    ) && matches!(right, Value::Int(_) | Value::Uint(_) | Value::Float(_));
    if !both_numeric {
        return Ok(None);
    }
    if matches!(left, Value::Float(_)) || matches!(right, Value::Float(_)) {
        match (promote_to_float(left), promote_to_float(right)) {
            (Some(x), Some(y)) => Ok(Some(NumPair::Floats(x, y))),
            _ => unreachable!("both operands checked numeric"),
        }
    } else {
        match (get_int64(left), get_int64(right)) {
            (Some(a), Some(b)) => Ok(Some(NumPair::Ints(a, b))),
            _ => Err(integer_overflow(op_name(op))),
        }
    }
}

/// Spelled-out operation name for overflow messages.
fn op_name(op: &str) -> &'static str {
    match op {
        "+" => "addition",
        "-" => "subtraction",
        "*" => "multiplication",
        "/" => "division",
        "%" => "remainder",
        _ => "arithmetic",
    }
}

/// `+` adds numbers, concatenates strings, and concatenates sequences.
fn eval_add(left: Value, right: Value) -> EvalResult {
    match (&left, &right) {
        (Value::Str(a), Value::Str(b)) => {
            let result = format!("{}{}", &**a, &**b);
            Ok(Value::string(result))
        }
        (Value::List(a), Value::List(b)) => {
            let mut result = (**a).clone();
            result.extend(b.iter().cloned());
            Ok(Value::list(result))
        }
        (Value::Vector(a), Value::Vector(b)) => {
            let mut result = (**a).clone();
            result.extend_from_slice(b);
            Ok(Value::vector(result))
        }
        _ => match numeric_pair("+", &left, &right)? {
            Some(NumPair::Ints(a, b)) => a
                .checked_add(b)
                .map(Value::Int)
                .ok_or_else(|| integer_overflow("addition")),
            Some(NumPair::Floats(x, y)) => Ok(Value::Float(x + y)),
            None => Err(binary_type_mismatch(
                "+",
                left.type_name(),
                right.type_name(),
            )),
        },
    }
}

/// `-` and `*` over numbers with int/float promotion.
fn eval_arith(op: &str, left: Value, right: Value) -> EvalResult {
    match numeric_pair(op, &left, &right)? {
        Some(NumPair::Ints(a, b)) => {
            let result = match op {
                "-" => a.checked_sub(b),
                _ => a.checked_mul(b),
            };
            result
                .map(Value::Int)
                .ok_or_else(|| integer_overflow(op_name(op)))
        }
        Some(NumPair::Floats(x, y)) => Ok(Value::Float(match op {
            "-" => x - y,
            _ => x * y,
        })),
        None => Err(binary_type_mismatch(
            op,
            left.type_name(),
            right.type_name(),
        )),
    }
}

/// `/`: integer division errors on a zero divisor; float division follows
/// IEEE and yields infinities without error.
fn eval_div(left: Value, right: Value) -> EvalResult {
    match numeric_pair("/", &left, &right)? {
        Some(NumPair::Ints(a, b)) => {
            if b == 0 {
                return Err(division_by_zero());
            }
            a.checked_div(b)
                .map(Value::Int)
                .ok_or_else(|| integer_overflow("division"))
        }
        Some(NumPair::Floats(x, y)) => Ok(Value::Float(x / y)),
        None => Err(binary_type_mismatch(
            "/",
            left.type_name(),
            right.type_name(),
        )),
    }
}

/// `%` requires integer operands and rejects a zero divisor.
fn eval_mod(left: Value, right: Value) -> EvalResult {
    let (Some(a), Some(b)) = (get_int64(&left), get_int64(&right)) else {
        let offender = if get_int64(&left).is_none() {
            left.type_name()
        } else {
            right.type_name()
        };
        return Err(invalid_binary_op("%", offender));
    };
    if b == 0 {
        return Err(modulo_by_zero());
    }
    a.checked_rem(b)
        .map(Value::Int)
        .ok_or_else(|| integer_overflow("remainder"))
}

/// Comparisons go through the canonical comparator; an unorderable pair
/// propagates its error.
fn eval_comparison(op: &str, left: &Value, right: &Value) -> EvalResult {
    let ord = value_order(left, right)?;
    let result = match op {
        "==" => ord == Ordering::Equal,
        "!=" => ord != Ordering::Equal,
        "<" => ord == Ordering::Less,
        "<=" => ord != Ordering::Greater,
        ">" => ord == Ordering::Greater,
        _ => ord != Ordering::Less,
    };
    Ok(Value::Bool(result))
}

/// `=~` / `!~`: the right operand is a compiled regex or a type-checker
/// predicate.
fn eval_match(left: &Value, right: &Value, negate: bool) -> EvalResult {
    let matched = match right {
        Value::Regex(re) => match left {
            Value::Str(s) => re.is_match(s),
            other => {
                return Err(binary_type_mismatch("=~", other.type_name(), "regex"));
            }
        },
        Value::Checker(checker) => checker.check(left).is_ok(),
        other => {
            return Err(binary_type_mismatch(
                "=~",
                left.type_name(),
                other.type_name(),
            ));
        }
    };
    Ok(Value::Bool(matched ^ negate))
}

/// `in`: membership in a sequence via the comparator; incomparable pairs
/// count as not equal.
fn eval_membership(left: &Value, right: &Value) -> EvalResult {
    let found = match right {
        Value::Nil => false,
        Value::List(items) => items
            .iter()
            .any(|item| matches!(value_order(left, item), Ok(Ordering::Equal))),
        Value::Vector(elements) => elements.iter().any(|x| {
            matches!(value_order(left, &Value::Float(*x)), Ok(Ordering::Equal))
        }),
        other => {
            return Err(binary_type_mismatch(
                "in",
                left.type_name(),
                other.type_name(),
            ));
        }
    };
    Ok(Value::Bool(found))
}
