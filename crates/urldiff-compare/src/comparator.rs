//! The comparator capability and the structural leaf comparator

use crate::error::CompareResult;
use serde_json::{Number, Value};

/// A fallible equality check between two inputs
///
/// Implementations may decode their inputs and hand the decoded values to a
/// delegate comparator they own.
pub trait Comparator {
    fn equals(&self, a: &Value, b: &Value) -> CompareResult<bool>;
}

impl<C: Comparator + ?Sized> Comparator for Box<C> {
    fn equals(&self, a: &Value, b: &Value) -> CompareResult<bool> {
        (**self).equals(a, b)
    }
}

/// Deep structural equality over decoded values
///
/// Never fails. `Value::Null` is the absent value and equals only itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct EqualityComparator;

impl EqualityComparator {
    pub fn new() -> Self {
        Self
    }
}

impl Comparator for EqualityComparator {
    fn equals(&self, a: &Value, b: &Value) -> CompareResult<bool> {
        Ok(values_equal(a, b))
    }
}

fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Object(a_obj), Value::Object(b_obj)) => {
            a_obj.len() == b_obj.len()
                && a_obj.iter().all(|(key, a_val)| {
                    b_obj
                        .get(key)
                        .is_some_and(|b_val| values_equal(a_val, b_val))
                })
        }
        (Value::Array(a_arr), Value::Array(b_arr)) => {
            a_arr.len() == b_arr.len()
                && a_arr.iter().zip(b_arr).all(|(x, y)| values_equal(x, y))
        }
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        _ => a == b,
    }
}

/// A JSON number as written, integer digits kept exact
enum Numeral {
    Integer(String),
    Float(f64),
}

impl Numeral {
    fn of(n: &Number) -> Option<Self> {
        let text = n.to_string();
        if text.contains(['.', 'e', 'E']) {
            text.parse().ok().map(Numeral::Float)
        } else {
            Some(Numeral::Integer(canonical_integer(text)))
        }
    }
}

fn canonical_integer(text: String) -> String {
    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}

/// Compare by exact numeric value so `1` and `1.0` are the same number
///
/// Integers never go through `f64`; an integer equals a float only when the
/// float is integral and its exact decimal expansion matches.
fn numbers_equal(x: &Number, y: &Number) -> bool {
    match (Numeral::of(x), Numeral::of(y)) {
        (Some(Numeral::Integer(x)), Some(Numeral::Integer(y))) => x == y,
        (Some(Numeral::Float(x)), Some(Numeral::Float(y))) => x == y,
        (Some(Numeral::Integer(i)), Some(Numeral::Float(f)))
        | (Some(Numeral::Float(f)), Some(Numeral::Integer(i))) => {
            f.is_finite() && f.fract() == 0.0 && canonical_integer(format!("{f:.0}")) == i
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_equal_scalars() {
        let cmp = EqualityComparator::new();
        assert!(cmp.equals(&json!(1), &json!(1)).unwrap());
        assert!(cmp.equals(&json!("a"), &json!("a")).unwrap());
        assert!(cmp.equals(&json!(true), &json!(true)).unwrap());
        assert!(!cmp.equals(&json!("1"), &json!(1)).unwrap());
        assert!(!cmp.equals(&json!(false), &json!(0)).unwrap());
    }

    #[test]
    fn test_numbers_compare_by_value() {
        let cmp = EqualityComparator::new();
        assert!(cmp.equals(&json!(1), &json!(1.0)).unwrap());
        assert!(cmp.equals(&json!(u64::MAX), &json!(u64::MAX)).unwrap());
        assert!(!cmp.equals(&json!(-1), &json!(u64::MAX)).unwrap());
        assert!(!cmp.equals(&json!(1.5), &json!(1)).unwrap());
    }

    fn parse(text: &str) -> Value {
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn test_large_integers_compare_exactly() {
        let cmp = EqualityComparator::new();
        let a = parse("12345678901234567890123");
        let b = parse("12345678901234567890124");
        assert!(cmp.equals(&a, &a).unwrap());
        assert!(!cmp.equals(&a, &b).unwrap());
        assert!(!cmp.equals(&parse("[100000000000000000000001]"), &parse("[1e23]")).unwrap());
    }

    #[test]
    fn test_integer_and_float_beyond_f64_precision() {
        let cmp = EqualityComparator::new();
        // 2^53 + 1 has no f64 representation
        assert!(!cmp
            .equals(&parse("9007199254740993"), &parse("9007199254740992.0"))
            .unwrap());
        assert!(cmp
            .equals(&parse("9007199254740992"), &parse("9007199254740992.0"))
            .unwrap());
        assert!(!cmp
            .equals(&parse("9007199254740993"), &parse("9007199254740992"))
            .unwrap());
    }

    #[test]
    fn test_integers_across_signed_boundary() {
        let cmp = EqualityComparator::new();
        let i64_max = json!(i64::MAX);
        let above_i64 = json!(i64::MAX as u64 + 1);
        assert!(!cmp.equals(&i64_max, &above_i64).unwrap());
        assert!(!cmp.equals(&json!(i64::MIN), &above_i64).unwrap());
        assert!(cmp.equals(&above_i64, &parse("9223372036854775808")).unwrap());
        assert!(cmp.equals(&above_i64, &parse("9223372036854775808.0")).unwrap());
        assert!(!cmp.equals(&i64_max, &parse("9223372036854775808.0")).unwrap());
    }

    #[test]
    fn test_zero_and_exponent_forms() {
        let cmp = EqualityComparator::new();
        assert!(cmp.equals(&parse("-0"), &parse("0")).unwrap());
        assert!(cmp.equals(&parse("0"), &parse("-0.0")).unwrap());
        assert!(cmp.equals(&parse("100"), &parse("1e2")).unwrap());
        assert!(cmp.equals(&parse("0.5"), &parse("5e-1")).unwrap());
    }

    #[test]
    fn test_nested_structures() {
        let a = json!({ "a": [1, 2, 3, { "b": 4 }, 5], "b": {} });
        let b = json!({ "a": [1, 2, 3, { "b": 4 }, 5], "b": {} });
        let c = json!({ "a": [1, 2, 3, { "b": 5 }, 5], "b": {} });

        let cmp = EqualityComparator::new();
        assert!(cmp.equals(&a, &b).unwrap());
        assert!(!cmp.equals(&a, &c).unwrap());
    }

    #[test]
    fn test_key_order_does_not_matter() {
        let cmp = EqualityComparator::new();
        assert!(cmp
            .equals(&json!({ "x": 1, "y": 2 }), &json!({ "y": 2, "x": 1 }))
            .unwrap());
        assert!(!cmp
            .equals(&json!({ "x": 1 }), &json!({ "x": 1, "y": 2 }))
            .unwrap());
    }

    #[test]
    fn test_sequence_order_matters() {
        let cmp = EqualityComparator::new();
        assert!(!cmp.equals(&json!([1, 2]), &json!([2, 1])).unwrap());
        assert!(!cmp.equals(&json!([1, 2, 3]), &json!([1, 2])).unwrap());
    }

    #[test]
    fn test_absent_values() {
        let cmp = EqualityComparator::new();
        assert!(cmp.equals(&Value::Null, &Value::Null).unwrap());
        assert!(!cmp.equals(&Value::Null, &json!({})).unwrap());
        assert!(!cmp.equals(&json!(0), &Value::Null).unwrap());
        assert!(!cmp.equals(&json!(""), &Value::Null).unwrap());
    }

    #[test]
    fn test_reflexive() {
        let cmp = EqualityComparator::new();
        for value in [
            Value::Null,
            json!(0),
            json!(-3.25),
            json!("text"),
            json!([null, [], {}]),
            json!({ "deep": { "er": [1, { "est": null }] } }),
        ] {
            assert!(cmp.equals(&value, &value).unwrap(), "{value} != itself");
        }
    }

    #[test]
    fn test_boxed_comparator() {
        let cmp: Box<dyn Comparator> = Box::new(EqualityComparator::new());
        assert!(cmp.equals(&json!([1]), &json!([1])).unwrap());
    }
}
