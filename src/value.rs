//! The dynamic value model shared by the predicate library, the assertion
//! engine, and the grouping controller.
//!
//! `Value` mirrors the runtime values of the scripting hosts this engine is
//! embedded in. Compound values (`List`, `Object`, `Date`, `Regexp`, `Error`,
//! `Function`) are `Rc`-shared: cloning a `Value` aliases the same underlying
//! object, so strict equality can mean reference identity while deep equality
//! stays structural. The model has no interior mutability, which makes cyclic
//! values unconstructible.

use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;

/// Represents a value in the Pramana engine.
///
/// # Examples
///
/// ```rust
/// use pramana::value::Value;
/// let n = Value::from(42);
/// assert_eq!(n.type_of(), "number");
/// let s = Value::from("hello");
/// assert_eq!(s.type_of(), "string");
/// let undef = Value::default();
/// assert!(!undef.is_truthy());
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Rc<Vec<Value>>),
    Object(Rc<ObjectData>),
    Date(Rc<DateData>),
    Regexp(Rc<RegexpData>),
    Error(Rc<ErrorData>),
    Function(FunctionValue),
}

// ============================================================================
// COMPOUND VALUE DATA
// ============================================================================

/// A key/value record with insertion-ordered own enumerable entries.
///
/// Plain objects carry no class name; instances built through a constructor
/// carry the constructor's name.
#[derive(Debug, Clone, Default)]
pub struct ObjectData {
    class_name: Option<String>,
    entries: Vec<(String, Value)>,
}

impl ObjectData {
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn entries(&self) -> &[(String, Value)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn from_pairs<K, V, I>(class_name: Option<String>, pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut entries: Vec<(String, Value)> = Vec::new();
        for (key, value) in pairs {
            let key = key.into();
            let value = value.into();
            // duplicate keys overwrite in place, keeping the first position
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = value,
                None => entries.push((key, value)),
            }
        }
        Self {
            class_name,
            entries,
        }
    }
}

/// A date value: a millisecond timestamp since the Unix epoch.
/// A `NaN` timestamp marks an invalid date.
#[derive(Debug, Clone)]
pub struct DateData {
    millis: f64,
}

impl DateData {
    pub fn new(millis: f64) -> Self {
        Self { millis }
    }

    pub fn now() -> Self {
        Self {
            millis: Utc::now().timestamp_millis() as f64,
        }
    }

    pub fn millis(&self) -> f64 {
        self.millis
    }

    pub fn is_valid(&self) -> bool {
        !self.millis.is_nan()
    }

    /// ISO-8601 rendering, or `Invalid Date` when the timestamp is `NaN` or
    /// out of the representable range.
    pub fn to_iso_string(&self) -> Option<String> {
        if !self.is_valid() {
            return None;
        }
        DateTime::<Utc>::from_timestamp_millis(self.millis as i64)
            .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

/// A regular-expression value: the source pattern, the three classic flags,
/// a `last_index` bookkeeping field, and the compiled pattern.
#[derive(Debug, Clone)]
pub struct RegexpData {
    source: String,
    global: bool,
    ignore_case: bool,
    multiline: bool,
    last_index: u64,
    pattern: Regex,
}

impl RegexpData {
    /// Compiles `source` with the given flag string. Only `g`, `i` and `m`
    /// are recognized; other characters are ignored.
    pub fn new(source: &str, flags: &str) -> Result<Self, regex::Error> {
        Self::with_last_index(source, flags, 0)
    }

    pub fn with_last_index(
        source: &str,
        flags: &str,
        last_index: u64,
    ) -> Result<Self, regex::Error> {
        let global = flags.contains('g');
        let ignore_case = flags.contains('i');
        let multiline = flags.contains('m');
        let mut pattern = String::new();
        if ignore_case || multiline {
            pattern.push_str("(?");
            if ignore_case {
                pattern.push('i');
            }
            if multiline {
                pattern.push('m');
            }
            pattern.push(')');
        }
        pattern.push_str(source);
        Ok(Self {
            source: source.to_string(),
            global,
            ignore_case,
            multiline,
            last_index,
            pattern: Regex::new(&pattern)?,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn global(&self) -> bool {
        self.global
    }

    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    pub fn multiline(&self) -> bool {
        self.multiline
    }

    pub fn last_index(&self) -> u64 {
        self.last_index
    }

    /// Tests the compiled pattern against `text`.
    pub fn test(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Flag string in canonical `gim` order.
    pub fn flags(&self) -> String {
        let mut flags = String::new();
        if self.global {
            flags.push('g');
        }
        if self.ignore_case {
            flags.push('i');
        }
        if self.multiline {
            flags.push('m');
        }
        flags
    }
}

/// An error value: a constructor name and a message.
#[derive(Debug, Clone)]
pub struct ErrorData {
    name: String,
    message: String,
}

impl ErrorData {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A value thrown by a [`FunctionValue`]. Hosts may throw any value, not
/// just errors; matching against expectations happens in the engine.
#[derive(Debug, Clone)]
pub struct Thrown(pub Value);

/// A named native callable.
#[derive(Clone)]
pub struct FunctionValue {
    name: String,
    body: Rc<dyn Fn(&[Value]) -> Result<Value, Thrown>>,
}

impl FunctionValue {
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, Thrown> + 'static,
    {
        Self {
            name: name.into(),
            body: Rc::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, args: &[Value]) -> Result<Value, Thrown> {
        (self.body)(args)
    }

    /// Reference identity: two handles are the same function iff they share
    /// the same underlying closure.
    pub fn ptr_eq(&self, other: &FunctionValue) -> bool {
        Rc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Function: {}]", self.name)
    }
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

impl Value {
    /// Builds a list value from anything convertible.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pramana::value::Value;
    /// let v = Value::list([1, 2, 3]);
    /// assert_eq!(v.type_of(), "object");
    /// ```
    pub fn list<I, T>(items: I) -> Value
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::List(Rc::new(items.into_iter().map(Into::into).collect()))
    }

    /// Builds a plain object from key/value pairs, preserving insertion order.
    pub fn object<K, V, I>(pairs: I) -> Value
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Object(Rc::new(ObjectData::from_pairs(None, pairs)))
    }

    /// Builds an object classed under a constructor name.
    pub fn instance<K, V, I>(class_name: &str, pairs: I) -> Value
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Object(Rc::new(ObjectData::from_pairs(
            Some(class_name.to_string()),
            pairs,
        )))
    }

    pub fn date(millis: f64) -> Value {
        Value::Date(Rc::new(DateData::new(millis)))
    }

    pub fn date_now() -> Value {
        Value::Date(Rc::new(DateData::now()))
    }

    pub fn invalid_date() -> Value {
        Value::date(f64::NAN)
    }

    pub fn regexp(source: &str, flags: &str) -> Result<Value, regex::Error> {
        Ok(Value::Regexp(Rc::new(RegexpData::new(source, flags)?)))
    }

    pub fn error(name: impl Into<String>, message: impl Into<String>) -> Value {
        Value::Error(Rc::new(ErrorData::new(name, message)))
    }

    pub fn function<F>(name: impl Into<String>, body: F) -> Value
    where
        F: Fn(&[Value]) -> Result<Value, Thrown> + 'static,
    {
        Value::Function(FunctionValue::new(name, body))
    }
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

impl Value {
    /// The scripting `typeof` of the value. `Null` and every compound
    /// non-function value report `"object"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pramana::value::Value;
    /// assert_eq!(Value::Null.type_of(), "object");
    /// assert_eq!(Value::Undefined.type_of(), "undefined");
    /// assert_eq!(Value::from(true).type_of(), "boolean");
    /// ```
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Function(_) => "function",
            Value::List(_)
            | Value::Object(_)
            | Value::Date(_)
            | Value::Regexp(_)
            | Value::Error(_) => "object",
        }
    }

    /// The constructor name seen through `.constructor`, or `None` for
    /// `Null`/`Undefined` which have no constructor at all.
    pub fn constructor_name(&self) -> Option<&str> {
        match self {
            Value::Undefined | Value::Null => None,
            Value::Bool(_) => Some("Boolean"),
            Value::Number(_) => Some("Number"),
            Value::String(_) => Some("String"),
            Value::List(_) => Some("Array"),
            Value::Object(o) => Some(o.class_name().unwrap_or("Object")),
            Value::Date(_) => Some("Date"),
            Value::Regexp(_) => Some("RegExp"),
            Value::Error(e) => Some(e.name()),
            Value::Function(_) => Some("Function"),
        }
    }

    /// Constructor names the value is an instance of, most specific first.
    /// Primitives yield an empty chain: they are not instances of anything.
    pub fn instance_chain(&self) -> Vec<&str> {
        match self {
            Value::List(_) => vec!["Array", "Object"],
            Value::Object(o) => match o.class_name() {
                Some(name) => vec![name, "Object"],
                None => vec!["Object"],
            },
            Value::Date(_) => vec!["Date", "Object"],
            Value::Regexp(_) => vec!["RegExp", "Object"],
            Value::Error(e) => {
                if e.name() == "Error" {
                    vec!["Error", "Object"]
                } else {
                    vec![e.name(), "Error", "Object"]
                }
            }
            Value::Function(_) => vec!["Function", "Object"],
            _ => vec![],
        }
    }

    /// Truthiness: everything is truthy except `false`, `±0`, `NaN`, the
    /// empty string, `Null` and `Undefined`.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Returns the contained number if this is a `Number` value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the contained string if this is a `String` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

// ============================================================================
// DISPLAY
// ============================================================================

fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == n.trunc() && n.abs() < 9.0e15 {
        return format!("{}", n as i64);
    }
    format!("{}", n)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::String(s) => write!(f, "{}", s),
            Value::List(items) => {
                // list rendering elides null/undefined elements
                let parts: Vec<String> = items
                    .iter()
                    .map(|item| match item {
                        Value::Undefined | Value::Null => String::new(),
                        other => other.to_string(),
                    })
                    .collect();
                write!(f, "{}", parts.join(","))
            }
            Value::Object(_) => write!(f, "[object Object]"),
            Value::Date(d) => match d.to_iso_string() {
                Some(iso) => write!(f, "{}", iso),
                None => write!(f, "Invalid Date"),
            },
            Value::Regexp(re) => write!(f, "/{}/{}", re.source(), re.flags()),
            Value::Error(e) => {
                if e.message().is_empty() {
                    write!(f, "{}", e.name())
                } else {
                    write!(f, "{}: {}", e.name(), e.message())
                }
            }
            Value::Function(func) => write!(f, "[Function: {}]", func.name()),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(v as f64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Number(v as f64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(Rc::new(v))
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}
