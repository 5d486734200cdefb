//! Field extraction and method calls over a slice of records.
//!
//! These helpers only run on true sequences: they take a slice rather than an
//! [`Iterable`](crate::Iterable), so mappings and cursors are ruled out by their signature.

use tracing::trace;

/// A value whose named fields can be looked up.
///
/// With the `json` feature, this is implemented for [`serde_json::Value`]:
/// object members are looked up by name and array items by their decimal index.
pub trait Record {
    /// Looks up the field `name`, returning `None` if it does not exist.
    fn field(&self, name: &str) -> Option<&Self>;

    /// Whether this value stands for "nothing", such as a JSON `null`.
    ///
    /// The default implementation returns `false`.
    #[inline]
    fn is_absent(&self) -> bool {
        false
    }
}

#[cfg(feature = "json")]
impl Record for serde_json::Value {
    fn field(&self, name: &str) -> Option<&Self> {
        match self {
            Self::Object(members) => members.get(name),
            Self::Array(items) => name.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        }
    }

    #[inline]
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

/// Walks a dotted `path` from `record`, one segment at a time.
fn walk<'a, R>(record: &'a R, path: &str) -> Option<&'a R>
where
    R: Record + ?Sized,
{
    if path.is_empty() {
        return Some(record);
    }

    path.split('.')
        .try_fold(record, |current, segment| current.field(segment))
}

/// Extracts the field at `path` from every record, in order.
///
/// `path` may name a nested field with dots (`"data.value"`). A record missing any
/// segment of the path yields `None`. An empty path yields the records themselves.
///
/// # Examples
///
/// ```
/// use serde_json::json;
///
/// let records = [json!({ "data": { "value": "foo" } }), json!({}), json!({ "data": { "value": 3 } })];
/// assert_eq!(
///     polyiter::pluck(&records, "data.value"),
///     [Some(&json!("foo")), None, Some(&json!(3))],
/// );
/// ```
pub fn pluck<'a, R>(records: &'a [R], path: &str) -> Vec<Option<&'a R>>
where
    R: Record,
{
    trace!(len = records.len(), path, "pluck");
    records.iter().map(|record| walk(record, path)).collect()
}

/// Extracts the field at `path` from every record, dropping the records where it is
/// missing or [absent](Record::is_absent).
///
/// # Examples
///
/// ```
/// use serde_json::json;
///
/// let records = [json!({ "one": 1 }), json!({ "one": null }), json!({ "two": 2 }), json!({ "one": 1 })];
/// assert_eq!(polyiter::pluck_existing(&records, "one"), [&json!(1), &json!(1)]);
/// ```
pub fn pluck_existing<'a, R>(records: &'a [R], path: &str) -> Vec<&'a R>
where
    R: Record,
{
    trace!(len = records.len(), path, "pluck_existing");
    records
        .iter()
        .filter_map(|record| walk(record, path))
        .filter(|value| !value.is_absent())
        .collect()
}

/// A value exposing operations callable by name, with arguments of type `A`.
pub trait Invoke<A: ?Sized> {
    /// What a call returns.
    type Output;

    /// Calls the operation `method` with `args`.
    fn invoke(&self, method: &str, args: &A) -> Self::Output;
}

/// Calls the operation `method` with the same `args` on every record, collecting the results in order.
///
/// # Examples
///
/// ```
/// use polyiter::Invoke;
///
/// struct Price(f64);
///
/// impl Invoke<usize> for Price {
///     type Output = Option<String>;
///
///     fn invoke(&self, method: &str, &digits: &usize) -> Option<String> {
///         (method == "to_fixed").then(|| format!("{:.digits$}", self.0))
///     }
/// }
///
/// let prices = [Price(1.0), Price(2.5)];
/// assert_eq!(
///     polyiter::invoke(&prices, "to_fixed", &2),
///     [Some("1.00".to_owned()), Some("2.50".to_owned())],
/// );
/// ```
pub fn invoke<R, A>(records: &[R], method: &str, args: &A) -> Vec<R::Output>
where
    R: Invoke<A>,
    A: ?Sized,
{
    trace!(len = records.len(), method, "invoke");
    records
        .iter()
        .map(|record| record.invoke(method, args))
        .collect()
}
