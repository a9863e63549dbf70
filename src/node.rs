//! Keys, key extraction and the node wrapper shared by every data structure in the crate.
//!
//! Every value stored in a tree, heap or disjoint set is wrapped into a [`Node`] together with its [`Key`], which is derived exactly once, at insertion time, by a [`KeyExtractor`] chosen when the structure is constructed:
//! - [`ScalarKey`] (the default) uses plain numbers and strings as their own keys
//! - [`FieldKey`] reads a named field of a [`Record`]
//! - [`KeyFn`] hands the value and a field name to a closure
//!
//! [`Node`]: struct.Node.html " "
//! [`Key`]: struct.Key.html " "
//! [`KeyExtractor`]: trait.KeyExtractor.html " "
//! [`ScalarKey`]: struct.ScalarKey.html " "
//! [`FieldKey`]: struct.FieldKey.html " "
//! [`KeyFn`]: struct.KeyFn.html " "
//! [`Record`]: trait.Record.html " "

use core::{
    cmp::Ordering,
    fmt::{self, Formatter, Debug, Display},
    hash::{Hash, Hasher},
    convert::TryFrom,
};
use alloc::{borrow::Cow, string::String};
use crate::Error;

/// The field name used by [`FieldKey`] and [`KeyFn`] when none is specified.
///
/// [`FieldKey`]: struct.FieldKey.html " "
/// [`KeyFn`]: struct.KeyFn.html " "
pub const DEFAULT_KEY_FIELD: &str = "key";

/// A comparable scalar extracted from a value: either a number or a non-empty string.
///
/// Keys are totally ordered: numbers compare numerically, strings compare lexically by code point, and every number sorts before every string. Integers are stored exactly, so neighbouring 64-bit values stay distinct, and compare exactly against fractional numbers too. `NaN` is never a valid key and negative zero is the same key as zero.
#[derive(Clone)]
pub struct Key(KeyRepr);

/// Integral numbers within the `i128` range are always `Integer`, so every number has exactly one representation.
#[derive(Clone)]
enum KeyRepr {
    Integer(i128),
    Float(f64),
    Text(String),
}

/// 2^127, the first float above the `i128` range.
const I128_LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

impl Key {
    /// Creates a numeric key from an integer.
    #[inline]
    pub fn integer(value: impl Into<i128>) -> Self {
        Self(KeyRepr::Integer(value.into()))
    }
    /// Creates a numeric key. Integral values produce the same key as [`integer`] would.
    ///
    /// # Errors
    /// Fails with [`Error::InvalidKey`] if `value` is `NaN`.
    ///
    /// [`integer`]: #method.integer " "
    /// [`Error::InvalidKey`]: ../enum.Error.html#variant.InvalidKey " "
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::float_cmp)]
    pub fn number(value: f64) -> Result<Self, Error> {
        if value.is_nan() {
            return Err(Error::InvalidKey {
                reason: Cow::Borrowed("NaN is not a valid key"),
            });
        }
        if (-I128_LIMIT..I128_LIMIT).contains(&value) && (value as i128) as f64 == value {
            return Ok(Self::integer(value as i128));
        }
        Ok(Self(KeyRepr::Float(value)))
    }
    /// Creates a text key.
    ///
    /// # Errors
    /// Fails with [`Error::InvalidKey`] if `value` is empty.
    ///
    /// [`Error::InvalidKey`]: ../enum.Error.html#variant.InvalidKey " "
    pub fn text(value: impl Into<String>) -> Result<Self, Error> {
        let value = value.into();
        if value.is_empty() {
            return Err(Error::InvalidKey {
                reason: Cow::Borrowed("text keys cannot be empty"),
            });
        }
        Ok(Self(KeyRepr::Text(value)))
    }
    /// Returns the number stored in the key, rounded to the nearest `f64`, or `None` if it's a text key.
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_number(&self) -> Option<f64> {
        match &self.0 {
            KeyRepr::Integer(x) => Some(*x as f64),
            KeyRepr::Float(x) => Some(*x),
            KeyRepr::Text(..) => None,
        }
    }
    /// Returns the number stored in the key if it's integral, or `None` otherwise.
    #[inline]
    pub fn as_integer(&self) -> Option<i128> {
        match &self.0 {
            KeyRepr::Integer(x) => Some(*x),
            KeyRepr::Float(..) | KeyRepr::Text(..) => None,
        }
    }
    /// Returns the string stored in the key, or `None` if it's a numeric key.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.0 {
            KeyRepr::Text(x) => Some(x),
            KeyRepr::Integer(..) | KeyRepr::Float(..) => None,
        }
    }
    /// Returns `true` if the key is numeric, `false` if it's text.
    #[inline]
    pub fn is_number(&self) -> bool {
        !matches!(self.0, KeyRepr::Text(..))
    }
}

/// Compares an integer with a float which is not integral or lies outside the `i128` range. The two are never equal.
#[allow(clippy::cast_possible_truncation)]
fn cmp_integer_float(integer: i128, float: f64) -> Ordering {
    if float >= I128_LIMIT {
        return Ordering::Less;
    }
    if float < -I128_LIMIT {
        return Ordering::Greater;
    }
    // `as` truncates toward zero; `float` lies strictly between `floor` and `floor + 1`
    let truncated = float as i128;
    let floor = if float < 0.0 { truncated - 1 } else { truncated };
    if integer <= floor {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        use KeyRepr::*;
        match (&self.0, &other.0) {
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Integer(a), Float(b)) => cmp_integer_float(*a, *b),
            (Float(a), Integer(b)) => cmp_integer_float(*b, *a).reverse(),
            (Text(a), Text(b)) => a.cmp(b),
            (Integer(..) | Float(..), Text(..)) => Ordering::Less,
            (Text(..), Integer(..) | Float(..)) => Ordering::Greater,
        }
    }
}
impl PartialOrd for Key {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Key {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Key {}
impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.0 {
            KeyRepr::Integer(x) => {
                state.write_u8(0);
                x.hash(state);
            }
            KeyRepr::Float(x) => {
                state.write_u8(1);
                x.to_bits().hash(state);
            }
            KeyRepr::Text(x) => {
                state.write_u8(2);
                x.hash(state);
            }
        }
    }
}
impl Debug for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            KeyRepr::Integer(x) => Debug::fmt(x, f),
            KeyRepr::Float(x) => Debug::fmt(x, f),
            KeyRepr::Text(x) => Debug::fmt(x, f),
        }
    }
}
impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            KeyRepr::Integer(x) => Display::fmt(x, f),
            KeyRepr::Float(x) => Display::fmt(x, f),
            KeyRepr::Text(x) => f.pad(x),
        }
    }
}
impl From<i128> for Key {
    #[inline(always)]
    fn from(value: i128) -> Self {
        Self::integer(value)
    }
}
impl TryFrom<f64> for Key {
    type Error = Error;
    #[inline(always)]
    fn try_from(value: f64) -> Result<Self, Error> {
        Self::number(value)
    }
}
impl TryFrom<&str> for Key {
    type Error = Error;
    #[inline(always)]
    fn try_from(value: &str) -> Result<Self, Error> {
        Self::text(value)
    }
}
impl TryFrom<String> for Key {
    type Error = Error;
    #[inline(always)]
    fn try_from(value: String) -> Result<Self, Error> {
        Self::text(value)
    }
}

/// Plain values which act as their own key: numbers and strings.
pub trait Scalar {
    /// Derives the key for the value.
    ///
    /// # Errors
    /// Empty strings fail with [`Error::InvalidValue`], `NaN` fails with [`Error::InvalidKey`].
    ///
    /// [`Error::InvalidValue`]: ../enum.Error.html#variant.InvalidValue " "
    /// [`Error::InvalidKey`]: ../enum.Error.html#variant.InvalidKey " "
    fn to_key(&self) -> Result<Key, Error>;
}
macro_rules! impl_scalar_for_integers {
    ($($t:ty),+ $(,)?) => {$(
        impl Scalar for $t {
            #[inline(always)]
            #[allow(clippy::cast_lossless, clippy::unnecessary_cast)]
            fn to_key(&self) -> Result<Key, Error> {
                Ok(Key::integer(*self as i128))
            }
        }
    )+};
}
impl_scalar_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl Scalar for u128 {
    fn to_key(&self) -> Result<Key, Error> {
        i128::try_from(*self).map(Key::integer).map_err(|_| Error::InvalidKey {
            reason: Cow::Owned(alloc::format!("{} is too large to be a key", self)),
        })
    }
}
impl Scalar for f32 {
    #[inline(always)]
    fn to_key(&self) -> Result<Key, Error> {
        Key::number(f64::from(*self))
    }
}
impl Scalar for f64 {
    #[inline(always)]
    fn to_key(&self) -> Result<Key, Error> {
        Key::number(*self)
    }
}

impl Scalar for str {
    fn to_key(&self) -> Result<Key, Error> {
        if self.is_empty() {
            return Err(Error::InvalidValue {
                reason: Cow::Borrowed("empty strings cannot be stored"),
            });
        }
        Key::text(self)
    }
}
impl Scalar for String {
    #[inline(always)]
    fn to_key(&self) -> Result<Key, Error> {
        self.as_str().to_key()
    }
}
impl Scalar for Key {
    #[inline(always)]
    fn to_key(&self) -> Result<Key, Error> {
        Ok(self.clone())
    }
}
impl<T: Scalar + ?Sized> Scalar for &T {
    #[inline(always)]
    fn to_key(&self) -> Result<Key, Error> {
        (**self).to_key()
    }
}

/// Structured values which expose their key through a named field.
pub trait Record {
    /// Returns the key stored in the field called `name`, or `None` if there is no such field.
    fn field(&self, name: &str) -> Option<Key>;
}

/// Strategy for deriving a [`Key`] from a stored value. Supplied when a data structure is constructed.
///
/// [`Key`]: struct.Key.html " "
pub trait KeyExtractor<V: ?Sized> {
    /// Derives the key for `value`.
    ///
    /// # Errors
    /// Fails with [`Error::InvalidKey`] or [`Error::InvalidValue`] if no usable key can be derived.
    ///
    /// [`Error::InvalidKey`]: ../enum.Error.html#variant.InvalidKey " "
    /// [`Error::InvalidValue`]: ../enum.Error.html#variant.InvalidValue " "
    fn extract_key(&self, value: &V) -> Result<Key, Error>;
}

/// Key extractor for [`Scalar`] values, which are their own key.
///
/// [`Scalar`]: trait.Scalar.html " "
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScalarKey;
impl<V: Scalar + ?Sized> KeyExtractor<V> for ScalarKey {
    #[inline(always)]
    fn extract_key(&self, value: &V) -> Result<Key, Error> {
        value.to_key()
    }
}

/// Key extractor which reads a named field of a [`Record`]. Reads the `"key"` field by default.
///
/// [`Record`]: trait.Record.html " "
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldKey {
    field: Cow<'static, str>,
}
impl FieldKey {
    /// Creates an extractor reading the specified field.
    #[inline]
    pub fn new(field: impl Into<Cow<'static, str>>) -> Self {
        Self { field: field.into() }
    }
    /// Returns the name of the field the extractor reads.
    #[inline(always)]
    pub fn field(&self) -> &str {
        &self.field
    }
}
impl Default for FieldKey {
    #[inline(always)]
    fn default() -> Self {
        Self::new(DEFAULT_KEY_FIELD)
    }
}
impl<V: Record + ?Sized> KeyExtractor<V> for FieldKey {
    fn extract_key(&self, value: &V) -> Result<Key, Error> {
        value.field(&self.field).ok_or_else(|| Error::InvalidKey {
            reason: Cow::Owned(alloc::format!("the value has no `{}` field", self.field)),
        })
    }
}

/// Key extractor which delegates to a closure. The closure receives the value and the configured field name (`"key"` unless specified otherwise) and returns the key, or `None` if the value has none.
#[derive(Clone)]
pub struct KeyFn<F> {
    field: Cow<'static, str>,
    extract: F,
}
impl<F> KeyFn<F> {
    /// Wraps a closure, passing it the default `"key"` field name.
    #[inline]
    pub fn new(extract: F) -> Self {
        Self::with_field(DEFAULT_KEY_FIELD, extract)
    }
    /// Wraps a closure, passing it the specified field name.
    #[inline]
    pub fn with_field(field: impl Into<Cow<'static, str>>, extract: F) -> Self {
        Self { field: field.into(), extract }
    }
}
impl<V, F> KeyExtractor<V> for KeyFn<F>
where
    V: ?Sized,
    F: Fn(&V, &str) -> Option<Key>,
{
    fn extract_key(&self, value: &V) -> Result<Key, Error> {
        (self.extract)(value, &self.field).ok_or_else(|| Error::InvalidKey {
            reason: Cow::Owned(alloc::format!("no key was produced for the `{}` field", self.field)),
        })
    }
}
impl<F> Debug for KeyFn<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyFn")
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}

/// A value paired with the key it was filed under.
///
/// The key is derived once, when the node is created, and never changes afterwards. This is why the value can only be read, not modified in place.
#[derive(Clone, Debug, PartialEq)]
pub struct Node<V> {
    key: Key,
    value: V,
}
impl<V> Node<V> {
    /// Wraps `value`, deriving its key with `extractor`.
    ///
    /// # Errors
    /// Forwards the extractor's error if the value has no usable key.
    #[inline]
    pub fn new<E>(value: V, extractor: &E) -> Result<Self, Error>
    where E: KeyExtractor<V> + ?Sized,
    {
        let key = extractor.extract_key(&value)?;
        Ok(Self { key, value })
    }
    #[inline(always)]
    pub(crate) fn from_parts(key: Key, value: V) -> Self {
        Self { key, value }
    }
    /// Returns the key of the node.
    #[inline(always)]
    pub fn key(&self) -> &Key {
        &self.key
    }
    /// Returns the value stored in the node.
    #[inline(always)]
    pub fn value(&self) -> &V {
        &self.value
    }
    /// Consumes the node and returns the stored value.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)] // const fn cannot evaluate drop
    pub fn into_value(self) -> V {
        self.value
    }
    /// Consumes the node and returns its key and value.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)]
    pub fn into_parts(self) -> (Key, V) {
        (self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Employee {
        id: u32,
        name: &'static str,
    }
    impl Record for Employee {
        fn field(&self, name: &str) -> Option<Key> {
            match name {
                "key" | "id" => Key::number(f64::from(self.id)).ok(),
                "name" => Key::text(self.name).ok(),
                _ => None,
            }
        }
    }
    #[test]
    fn scalars_are_their_own_key() {
        assert_eq!(Node::new(0, &ScalarKey).unwrap().key().as_number(), Some(0.0));
        assert_eq!(Node::new(-0.0_f64, &ScalarKey).unwrap().key(), &Key::number(0.0).unwrap());
        assert_eq!(Node::new("pine", &ScalarKey).unwrap().key().as_text(), Some("pine"));
        assert!(matches!(
            Node::new("", &ScalarKey),
            Err(Error::InvalidValue { .. }),
        ));
        assert!(matches!(
            Node::new(f64::NAN, &ScalarKey),
            Err(Error::InvalidKey { .. }),
        ));
    }

    #[test]
    fn numbers_sort_before_text() {
        let mut keys = [
            Key::text("b").unwrap(),
            Key::number(10.0).unwrap(),
            Key::text("a").unwrap(),
            Key::number(-3.5).unwrap(),
        ];
        keys.sort();
        assert_eq!(alloc::format!("{:?}", keys), r#"[-3.5, 10, "a", "b"]"#);
    }

    #[test]
    fn integers_keep_full_precision() {
        let (max, below) = (u64::MAX.to_key().unwrap(), (u64::MAX - 1).to_key().unwrap());
        assert!(below < max);
        assert_eq!(max.as_integer(), Some(i128::from(u64::MAX)));
        assert!(i64::MIN.to_key().unwrap() < (i64::MIN + 1).to_key().unwrap());
        assert_eq!(Key::number(3.0).unwrap(), Key::integer(3));
        assert_eq!(Key::number(-0.0).unwrap().as_integer(), Some(0));
        assert!(matches!(u128::MAX.to_key(), Err(Error::InvalidKey { .. })));
    }

    #[test]
    fn integers_and_fractions_interleave() {
        let number = |x: f64| Key::number(x).unwrap();
        assert!(Key::integer(3) < number(3.5));
        assert!(number(3.5) < Key::integer(4));
        assert!(Key::integer(-4) < number(-3.5));
        assert!(number(-3.5) < Key::integer(-3));
        assert!(Key::integer(i128::MAX) < number(1e39));
        assert!(Key::integer(i128::MAX) < number(f64::INFINITY));
        assert!(number(f64::NEG_INFINITY) < Key::integer(i128::MIN));
        assert_ne!(number(0.5), Key::integer(0));
    }

    #[test]
    fn field_key_reads_records() {
        let alice = Employee { id: 7, name: "alice" };
        assert_eq!(FieldKey::default().extract_key(&alice).unwrap().as_number(), Some(7.0));
        assert_eq!(
            FieldKey::new("name").extract_key(&alice).unwrap().as_text(),
            Some("alice"),
        );
        assert!(matches!(
            FieldKey::new("salary").extract_key(&alice),
            Err(Error::InvalidKey { .. }),
        ));
    }

    #[test]
    fn key_fn_receives_field_name() {
        let extractor = KeyFn::with_field("name", |e: &Employee, field: &str| e.field(field));
        let bob = Employee { id: 3, name: "bob" };
        assert_eq!(extractor.extract_key(&bob).unwrap().as_text(), Some("bob"));
        let missing = KeyFn::new(|_: &Employee, _: &str| -> Option<Key> { None });
        assert!(missing.extract_key(&bob).is_err());
    }
}
