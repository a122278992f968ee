//! Type-classification predicates over the dynamic value model.
//!
//! Every predicate takes its value slots as `Option<&Value>`: `None` means
//! the argument was omitted and raises the arity error, while
//! `Some(&Value::Undefined)` is a provided value and classifies normally.
//! Beyond arity (and the documented `is_plain_object` caller error) a
//! predicate never fails; it answers with a plain boolean.

use crate::errors::{AssertError, AssertResult};
use crate::value::Value;

fn required<'a>(value: Option<&'a Value>, operation: &'static str) -> AssertResult<&'a Value> {
    value.ok_or(AssertError::MissingArgument { operation })
}

/// Determines whether the passed value is an array.
///
/// # Examples
///
/// ```rust
/// use pramana::predicate::is_array;
/// use pramana::value::Value;
/// assert!(is_array(Some(&Value::list([1, 2, 3]))).unwrap());
/// assert!(!is_array(Some(&Value::from("abc"))).unwrap());
/// assert!(is_array(None).is_err());
/// ```
pub fn is_array(value: Option<&Value>) -> AssertResult<bool> {
    let value = required(value, "isArray")?;
    Ok(matches!(value, Value::List(_)))
}

pub fn is_boolean(value: Option<&Value>) -> AssertResult<bool> {
    let value = required(value, "isBoolean")?;
    Ok(matches!(value, Value::Bool(_)))
}

/// A date classifies only when it is valid: an invalid date carries a `NaN`
/// timestamp and is rejected.
pub fn is_date(value: Option<&Value>) -> AssertResult<bool> {
    let value = required(value, "isDate")?;
    Ok(matches!(value, Value::Date(d) if d.is_valid()))
}

pub fn is_error(value: Option<&Value>) -> AssertResult<bool> {
    let value = required(value, "isError")?;
    Ok(matches!(value, Value::Error(_)))
}

pub fn is_function(value: Option<&Value>) -> AssertResult<bool> {
    let value = required(value, "isFunction")?;
    Ok(matches!(value, Value::Function(_)))
}

/// Determines whether the value is an instance of the given constructor.
/// Any failure mode of the check (a non-function constructor, a primitive
/// value) yields `false`, never an error.
pub fn is_instance_of(value: Option<&Value>, constructor: Option<&Value>) -> AssertResult<bool> {
    let (Some(value), Some(constructor)) = (value, constructor) else {
        return Err(AssertError::MissingArguments {
            operation: "isInstanceOf",
        });
    };
    match constructor {
        Value::Function(f) => Ok(value.instance_chain().contains(&f.name())),
        _ => Ok(false),
    }
}

pub fn is_null(value: Option<&Value>) -> AssertResult<bool> {
    let value = required(value, "isNull")?;
    Ok(matches!(value, Value::Null))
}

pub fn is_null_or_undefined(value: Option<&Value>) -> AssertResult<bool> {
    let value = required(value, "isNullOrUndefined")?;
    Ok(matches!(value, Value::Null | Value::Undefined))
}

pub fn is_number(value: Option<&Value>) -> AssertResult<bool> {
    let value = required(value, "isNumber")?;
    Ok(matches!(value, Value::Number(_)))
}

/// Objects in the `typeof` sense: lists, dates, regexps, errors and plain
/// objects all qualify; `null` does not.
pub fn is_object(value: Option<&Value>) -> AssertResult<bool> {
    let value = required(value, "isObject")?;
    Ok(value.type_of() == "object" && !matches!(value, Value::Null))
}

/// A plain object is one whose constructor is the base `Object`. Reading
/// the constructor of `null`/`undefined` is a caller error and surfaces as
/// such rather than answering `false`.
pub fn is_plain_object(value: Option<&Value>) -> AssertResult<bool> {
    let value = required(value, "isPlainObject")?;
    match value {
        Value::Null | Value::Undefined => Err(AssertError::PropertyOfNull {
            operation: "isPlainObject",
        }),
        Value::Object(o) => Ok(o.class_name().is_none()),
        _ => Ok(false),
    }
}

/// Classifies by constructor-name equality with `"RegExp"`, so an object
/// classed `"RegExp"` satisfies it too. A value without a constructor
/// answers `false`, not an error.
pub fn is_regexp(value: Option<&Value>) -> AssertResult<bool> {
    let value = required(value, "isRegExp")?;
    Ok(value.constructor_name() == Some("RegExp"))
}

pub fn is_string(value: Option<&Value>) -> AssertResult<bool> {
    let value = required(value, "isString")?;
    Ok(matches!(value, Value::String(_)))
}

/// Determines whether the value's `typeof` equals the given type string.
/// A non-string `type` argument compares unequal rather than erroring.
///
/// # Examples
///
/// ```rust
/// use pramana::predicate::is_type_of;
/// use pramana::value::Value;
/// let n = Value::from(42);
/// let t = Value::from("number");
/// assert!(is_type_of(Some(&n), Some(&t)).unwrap());
/// ```
pub fn is_type_of(value: Option<&Value>, type_name: Option<&Value>) -> AssertResult<bool> {
    let (Some(value), Some(type_name)) = (value, type_name) else {
        return Err(AssertError::MissingArguments {
            operation: "isTypeOf",
        });
    };
    match type_name {
        Value::String(s) => Ok(value.type_of() == s),
        _ => Ok(false),
    }
}

pub fn is_undefined(value: Option<&Value>) -> AssertResult<bool> {
    let value = required(value, "isUndefined")?;
    Ok(matches!(value, Value::Undefined))
}

/// Equivalent to [`is_null_or_undefined`]; both names are part of the
/// public vocabulary and are kept.
pub fn is_undefined_or_null(value: Option<&Value>) -> AssertResult<bool> {
    let value = required(value, "isUndefinedOrNull")?;
    Ok(matches!(value, Value::Null | Value::Undefined))
}
