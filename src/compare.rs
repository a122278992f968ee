//! Equality and ordering semantics over [`Value`]s.
//!
//! Four comparison families live here: strict equality (reference identity
//! for compound values), loose equality (coercing), relational ordering, and
//! the recursive deep-equality algorithm used by `deepEqual`/`notDeepEqual`.

use std::cmp::Ordering;

use crate::value::Value;

// ============================================================================
// STRICT AND LOOSE EQUALITY
// ============================================================================

/// Strict equality: same variant and value for primitives (`NaN` is never
/// strictly equal to itself), reference identity for compound values.
pub fn strict_eq(a: &Value, b: &Value) -> bool {
    use std::rc::Rc;
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::List(x), Value::List(y)) => Rc::ptr_eq(x, y),
        (Value::Object(x), Value::Object(y)) => Rc::ptr_eq(x, y),
        (Value::Date(x), Value::Date(y)) => Rc::ptr_eq(x, y),
        (Value::Regexp(x), Value::Regexp(y)) => Rc::ptr_eq(x, y),
        (Value::Error(x), Value::Error(y)) => Rc::ptr_eq(x, y),
        (Value::Function(x), Value::Function(y)) => x.ptr_eq(y),
        _ => false,
    }
}

fn is_compound(v: &Value) -> bool {
    matches!(
        v,
        Value::List(_)
            | Value::Object(_)
            | Value::Date(_)
            | Value::Regexp(_)
            | Value::Error(_)
            | Value::Function(_)
    )
}

/// Loose equality with the classic coercion ladder: `null`/`undefined` are
/// mutually equal, number/string coerces the string, booleans coerce to
/// numbers, and a compound value against a primitive coerces to a primitive.
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined | Value::Null, Value::Undefined | Value::Null) => true,
        (Value::Bool(_), Value::Bool(_))
        | (Value::Number(_), Value::Number(_))
        | (Value::String(_), Value::String(_)) => strict_eq(a, b),
        (Value::Bool(x), _) => {
            loose_eq(&Value::Number(if *x { 1.0 } else { 0.0 }), b)
        }
        (_, Value::Bool(y)) => {
            loose_eq(a, &Value::Number(if *y { 1.0 } else { 0.0 }))
        }
        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            *n == str_to_number(s)
        }
        (Value::Number(_) | Value::String(_), other) if is_compound(other) => {
            loose_eq(a, &to_primitive(b, Hint::Default))
        }
        (other, Value::Number(_) | Value::String(_)) if is_compound(other) => {
            loose_eq(&to_primitive(a, Hint::Default), b)
        }
        _ if is_compound(a) && is_compound(b) => strict_eq(a, b),
        _ => false,
    }
}

// ============================================================================
// NUMERIC COERCION
// ============================================================================

/// Coercion hint: relational operators want numbers, equality wants the
/// default conversion (dates stringify under the default hint).
#[derive(Clone, Copy)]
pub(crate) enum Hint {
    Default,
    Number,
}

pub(crate) fn to_primitive(v: &Value, hint: Hint) -> Value {
    match v {
        Value::Date(d) => match hint {
            Hint::Number => Value::Number(d.millis()),
            Hint::Default => Value::String(v.to_string()),
        },
        _ if is_compound(v) => Value::String(v.to_string()),
        other => other.clone(),
    }
}

fn str_to_number(s: &str) -> f64 {
    let t = s.trim();
    if t.is_empty() {
        return 0.0;
    }
    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        return u64::from_str_radix(hex, 16)
            .map(|v| v as f64)
            .unwrap_or(f64::NAN);
    }
    t.parse::<f64>().unwrap_or(f64::NAN)
}

pub(crate) fn to_number(v: &Value) -> f64 {
    match v {
        Value::Undefined => f64::NAN,
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => *n,
        Value::String(s) => str_to_number(s),
        _ => match to_primitive(v, Hint::Number) {
            Value::Number(n) => n,
            Value::String(s) => str_to_number(&s),
            _ => f64::NAN,
        },
    }
}

// ============================================================================
// RELATIONAL ORDERING
// ============================================================================

/// Relational comparison: two strings compare lexicographically, anything
/// else compares numerically after coercion. `None` when either side
/// coerces to `NaN`, in which case every relational operator is false.
pub fn relational(a: &Value, b: &Value) -> Option<Ordering> {
    let pa = to_primitive(a, Hint::Number);
    let pb = to_primitive(b, Hint::Number);
    if let (Value::String(x), Value::String(y)) = (&pa, &pb) {
        return Some(x.as_str().cmp(y.as_str()));
    }
    to_number(&pa).partial_cmp(&to_number(&pb))
}

pub fn lt(a: &Value, b: &Value) -> bool {
    matches!(relational(a, b), Some(Ordering::Less))
}

pub fn gt(a: &Value, b: &Value) -> bool {
    matches!(relational(a, b), Some(Ordering::Greater))
}

pub fn le(a: &Value, b: &Value) -> bool {
    matches!(relational(a, b), Some(Ordering::Less | Ordering::Equal))
}

pub fn ge(a: &Value, b: &Value) -> bool {
    matches!(relational(a, b), Some(Ordering::Greater | Ordering::Equal))
}

// ============================================================================
// DEEP EQUALITY
// ============================================================================

/// The deep-equality algorithm behind `deepEqual`/`notDeepEqual`:
///
/// 1. strict equality short-circuits;
/// 2. two dates compare by timestamp (`NaN` timestamps are never equal);
/// 3. two regexps compare field by field, not by semantic equivalence;
/// 4. when neither side has `typeof == "object"`, loose equality decides;
/// 5. otherwise both sides must be non-null, their own `"prototype"`
///    entries must be strictly equal, and their sorted own key sets must
///    match pairwise, with values compared recursively.
///
/// There is no cycle guard: the value model cannot represent cycles, so the
/// recursion is bounded by input depth.
pub fn deep_eq(actual: &Value, expected: &Value) -> bool {
    if strict_eq(actual, expected) {
        return true;
    }
    if let (Value::Date(a), Value::Date(b)) = (actual, expected) {
        return a.millis() == b.millis();
    }
    if let (Value::Regexp(a), Value::Regexp(b)) = (actual, expected) {
        return a.source() == b.source()
            && a.global() == b.global()
            && a.multiline() == b.multiline()
            && a.last_index() == b.last_index()
            && a.ignore_case() == b.ignore_case();
    }
    if actual.type_of() != "object" && expected.type_of() != "object" {
        return loose_eq(actual, expected);
    }
    objects_eq(actual, expected)
}

fn objects_eq(a: &Value, b: &Value) -> bool {
    if matches!(a, Value::Null | Value::Undefined) || matches!(b, Value::Null | Value::Undefined) {
        return false;
    }
    // A function's prototype object is identical only to itself, so a
    // function never deep-equals a non-function object.
    if matches!(a, Value::Function(_)) || matches!(b, Value::Function(_)) {
        return false;
    }
    // Own "prototype" entries must be strictly equal. Plain data has none,
    // so both sides read Undefined and the check passes trivially.
    if !strict_eq(&own_prototype_entry(a), &own_prototype_entry(b)) {
        return false;
    }
    let mut keys_a = own_keys(a);
    let mut keys_b = own_keys(b);
    if keys_a.len() != keys_b.len() {
        return false;
    }
    keys_a.sort();
    keys_b.sort();
    if keys_a.iter().zip(keys_b.iter()).any(|(x, y)| x != y) {
        return false;
    }
    keys_a
        .iter()
        .all(|key| deep_eq(&get_own(a, key), &get_own(b, key)))
}

fn own_prototype_entry(v: &Value) -> Value {
    match v {
        Value::Object(o) => o.get("prototype").cloned().unwrap_or(Value::Undefined),
        _ => Value::Undefined,
    }
}

/// Own enumerable keys: object entries, list indices as decimal strings,
/// and an empty set for everything else (which is what lets a date or even
/// a bare number fall through the general object case unchallenged).
fn own_keys(v: &Value) -> Vec<String> {
    match v {
        Value::Object(o) => o.keys().map(str::to_string).collect(),
        Value::List(items) => (0..items.len()).map(|i| i.to_string()).collect(),
        _ => vec![],
    }
}

fn get_own(v: &Value, key: &str) -> Value {
    match v {
        Value::Object(o) => o.get(key).cloned().unwrap_or(Value::Undefined),
        Value::List(items) => key
            .parse::<usize>()
            .ok()
            .and_then(|i| items.get(i))
            .cloned()
            .unwrap_or(Value::Undefined),
        _ => Value::Undefined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_equality_on_numbers() {
        assert!(strict_eq(&Value::from(1), &Value::from(1.0)));
        assert!(strict_eq(&Value::from(0.0), &Value::from(-0.0)));
        assert!(!strict_eq(&Value::from(f64::NAN), &Value::from(f64::NAN)));
    }

    #[test]
    fn loose_equality_coercions() {
        assert!(loose_eq(&Value::from(1), &Value::from("1")));
        assert!(loose_eq(&Value::from(true), &Value::from(1)));
        assert!(loose_eq(&Value::from(false), &Value::from("")));
        assert!(loose_eq(&Value::Null, &Value::Undefined));
        assert!(!loose_eq(&Value::Null, &Value::from(0)));
        assert!(!loose_eq(&Value::Undefined, &Value::from(f64::NAN)));
        // a one-element list coerces to its element's string
        assert!(loose_eq(&Value::list([1]), &Value::from(1)));
    }

    #[test]
    fn string_to_number_coercion() {
        assert_eq!(str_to_number(""), 0.0);
        assert_eq!(str_to_number("  42  "), 42.0);
        assert_eq!(str_to_number("0x10"), 16.0);
        assert_eq!(str_to_number("Infinity"), f64::INFINITY);
        assert!(str_to_number("not a number").is_nan());
    }

    #[test]
    fn relational_is_none_on_nan() {
        assert_eq!(relational(&Value::from(f64::NAN), &Value::from(5)), None);
        assert!(!lt(&Value::from(f64::NAN), &Value::from(5)));
        assert!(!ge(&Value::from(f64::NAN), &Value::from(5)));
    }

    #[test]
    fn relational_string_pairs_are_lexicographic() {
        assert!(lt(&Value::from("A"), &Value::from("B")));
        assert!(lt(&Value::from("10"), &Value::from("9")));
        // mixed pairs go numeric
        assert!(gt(&Value::from(10), &Value::from("9")));
    }
}
