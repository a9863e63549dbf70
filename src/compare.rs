//! Ordering strategies for keys.
//!
//! Every ordered structure in the crate takes a [`Comparator`] as a constructor parameter. [`NaturalOrder`] is the default and simply uses the total order of [`Key`]; [`CollatingComparator`] orders text keys the way people expect words to be sorted.
//!
//! [`Comparator`]: trait.Comparator.html " "
//! [`NaturalOrder`]: struct.NaturalOrder.html " "
//! [`CollatingComparator`]: struct.CollatingComparator.html " "
//! [`Key`]: ../node/struct.Key.html " "

use core::cmp::Ordering;
use alloc::{borrow::Cow, string::String, vec::Vec};
use unicode_normalization::{
    char::{decompose_canonical, is_combining_mark},
    UnicodeNormalization,
};
use crate::{node::Key, Error};

/// A strategy for ordering two keys.
///
/// Only `compare` has to be implemented; the predicates are derived from it.
pub trait Comparator {
    /// Returns the ordering of `a` relative to `b`.
    fn compare(&self, a: &Key, b: &Key) -> Ordering;

    /// `a == b`
    #[inline(always)]
    fn equals(&self, a: &Key, b: &Key) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
    /// `a > b`
    #[inline(always)]
    fn greater_than(&self, a: &Key, b: &Key) -> bool {
        self.compare(a, b) == Ordering::Greater
    }
    /// `a >= b`
    #[inline(always)]
    fn greater_than_equals(&self, a: &Key, b: &Key) -> bool {
        self.compare(a, b) != Ordering::Less
    }
    /// `a < b`
    #[inline(always)]
    fn less_than(&self, a: &Key, b: &Key) -> bool {
        self.compare(a, b) == Ordering::Less
    }
    /// `a <= b`
    #[inline(always)]
    fn less_than_equals(&self, a: &Key, b: &Key) -> bool {
        self.compare(a, b) != Ordering::Greater
    }
}
impl<C: Comparator + ?Sized> Comparator for &C {
    #[inline(always)]
    fn compare(&self, a: &Key, b: &Key) -> Ordering {
        (**self).compare(a, b)
    }
}

/// The default comparator: numbers numerically, text by code point, numbers before text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;
impl Comparator for NaturalOrder {
    #[inline(always)]
    fn compare(&self, a: &Key, b: &Key) -> Ordering {
        a.cmp(b)
    }
}

/// Which differences between two strings are significant for a [`CollatingComparator`].
///
/// Strings are compared level by level: base letters first, then accents, then case. Each sensitivity says how far down the comparison goes.
///
/// [`CollatingComparator`]: struct.CollatingComparator.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sensitivity {
    /// Only base letters matter: `a = á = A`.
    Base,
    /// Base letters and accents matter: `a < á`, `a = A`.
    Accent,
    /// Base letters and case matter: `a = á`, `a < A`.
    Case,
    /// Everything matters. Strings which are equal on every level are finally ordered by code point, so only identical strings compare equal.
    Variant,
}
impl Default for Sensitivity {
    #[inline(always)]
    fn default() -> Self {
        Self::Variant
    }
}

/// Options for a [`CollatingComparator`].
///
/// [`CollatingComparator`]: struct.CollatingComparator.html " "
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CollationOptions {
    /// Which differences are significant.
    pub sensitivity: Sensitivity,
    /// Compare runs of ASCII digits by their numeric value, so that `"item2" < "item10"`.
    pub numeric: bool,
    /// Skip whitespace, punctuation and symbols entirely.
    pub ignore_punctuation: bool,
}

/// A letter which a language sorts as a letter of its own, after `after` and any letter tailored before it.
type Tailoring = &'static [(char, char, u8)];

const NORDIC_EAST: Tailoring = &[
    ('å', 'z', 1),
    ('ä', 'z', 2),
    ('æ', 'z', 2),
    ('ö', 'z', 3),
    ('ø', 'z', 3),
];
const NORDIC_WEST: Tailoring = &[
    ('æ', 'z', 1),
    ('ä', 'z', 1),
    ('ø', 'z', 2),
    ('ö', 'z', 2),
    ('å', 'z', 3),
];
const SPANISH: Tailoring = &[('ñ', 'n', 1)];

fn tailoring_for(language: &str) -> Tailoring {
    let language = language.to_ascii_lowercase();
    match language.as_str() {
        "sv" | "fi" => NORDIC_EAST,
        "da" | "nb" | "nn" | "no" => NORDIC_WEST,
        "es" => SPANISH,
        _ => &[],
    }
}

/// A comparator which collates text keys the way dictionaries do.
///
/// Text is brought to canonical composition first, then compared on three levels:
/// 1. base letters, case-insensitively, with whitespace, punctuation and symbols sorting before digits and digits before letters;
/// 2. accents, where an unaccented letter sorts before its accented forms;
/// 3. case, lowercase first.
///
/// Accented letters decompose into their base letter plus accents, so `é` sorts between `e` and `f`. A few letters with no decomposition are expanded, like `ß` to `ss` and `æ` to `ae`.
///
/// A locale can tailor the alphabet. Swedish and Finnish sort `å`, `ä` and `ö` after `z`; Danish and Norwegian sort `æ`, `ø` and `å` after `z`; Spanish sorts `ñ` after `n`. Other languages use the root order above. Numeric keys and mixed comparisons fall back to [`NaturalOrder`].
///
/// [`NaturalOrder`]: struct.NaturalOrder.html " "
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CollatingComparator {
    locale: Option<String>,
    tailoring: Tailoring,
    options: CollationOptions,
}
impl CollatingComparator {
    /// Creates a comparator using the root collation and the default options.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
    /// Creates a comparator using the root collation and the specified options.
    #[inline]
    pub fn with_options(options: CollationOptions) -> Self {
        Self { options, ..Self::default() }
    }
    /// Creates a comparator for the specified locale tag, such as `"en"` or `"sv-SE"`. Only the language subtag affects the order.
    ///
    /// # Errors
    /// Fails with [`Error::InvalidArgument`] if the tag is empty or is not shaped like a BCP 47 language tag.
    ///
    /// [`Error::InvalidArgument`]: ../enum.Error.html#variant.InvalidArgument " "
    pub fn with_locale(locale: &str, options: CollationOptions) -> Result<Self, Error> {
        if !is_language_tag(locale) {
            return Err(Error::InvalidArgument {
                reason: Cow::Owned(alloc::format!("`{}` is not a valid locale tag", locale)),
            });
        }
        let language = locale.split('-').next().unwrap_or_default();
        Ok(Self {
            locale: Some(String::from(locale)),
            tailoring: tailoring_for(language),
            options,
        })
    }
    /// Returns the locale tag the comparator was created with, or `None` for the root collation.
    #[inline]
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }
    /// Returns the options the comparator was created with.
    #[inline(always)]
    pub fn options(&self) -> CollationOptions {
        self.options
    }

    fn collate(&self, a: &str, b: &str) -> Ordering {
        let (a_units, b_units) = (self.units(a), self.units(b));
        let primary = a_units
            .iter()
            .map(|unit| &unit.primary)
            .cmp(b_units.iter().map(|unit| &unit.primary));
        let secondary = || {
            a_units
                .iter()
                .map(|unit| &unit.marks)
                .cmp(b_units.iter().map(|unit| &unit.marks))
        };
        let tertiary = || {
            a_units
                .iter()
                .map(|unit| unit.upper)
                .cmp(b_units.iter().map(|unit| unit.upper))
        };
        match self.options.sensitivity {
            Sensitivity::Base => primary,
            Sensitivity::Accent => primary.then_with(secondary),
            Sensitivity::Case => primary.then_with(tertiary),
            Sensitivity::Variant => primary
                .then_with(secondary)
                .then_with(tertiary)
                .then_with(|| a.cmp(b)),
        }
    }
    /// Splits a string into collation units.
    fn units(&self, s: &str) -> Vec<Unit> {
        let mut units: Vec<Unit> = Vec::with_capacity(s.len());
        let mut chars = s.nfc().peekable();
        while let Some(c) = chars.next() {
            if is_combining_mark(c) {
                if let Some(last) = units.last_mut() {
                    last.marks.push(c);
                }
            } else if is_punctuation(c) {
                if !self.options.ignore_punctuation {
                    units.push(Unit::new(Primary::Punctuation(c), false));
                }
            } else if self.options.numeric && c.is_ascii_digit() {
                let mut run = String::from(c);
                while let Some(digit) = chars.next_if(char::is_ascii_digit) {
                    run.push(digit);
                }
                units.push(Unit::new(Primary::digits(&run), false));
            } else {
                self.push_letter(&mut units, c);
            }
        }
        units
    }
    fn push_letter(&self, units: &mut Vec<Unit>, c: char) {
        let upper = c.is_uppercase();
        let lower = c.to_lowercase().next().unwrap_or(c);
        if let Some(&(_, after, position)) = self.tailoring.iter().find(|(letter, ..)| *letter == lower) {
            units.push(Unit::new(Primary::Letter { base: after, position }, upper));
            return;
        }
        let mut push = |d: char| {
            if is_combining_mark(d) {
                if let Some(last) = units.last_mut() {
                    last.marks.push(d);
                }
            } else if d.is_numeric() {
                units.push(Unit::new(Primary::digits(d.encode_utf8(&mut [0; 4])), upper));
            } else {
                units.push(Unit::new(Primary::Letter { base: d, position: 0 }, upper));
            }
        };
        match expansion(lower) {
            Some(expanded) => expanded.chars().for_each(&mut push),
            None => decompose_canonical(lower, &mut push),
        }
    }
}
impl Comparator for CollatingComparator {
    fn compare(&self, a: &Key, b: &Key) -> Ordering {
        match (a.as_text(), b.as_text()) {
            (Some(a), Some(b)) => self.collate(a, b),
            _ => NaturalOrder.compare(a, b),
        }
    }
}

/// The first-level weight of a collation unit.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Primary {
    Punctuation(char),
    /// Leading zeros stripped, so comparing by length first compares by value.
    Digits { len: usize, run: String },
    Letter { base: char, position: u8 },
}
impl Primary {
    fn digits(run: &str) -> Self {
        let run = run.trim_start_matches('0');
        Self::Digits { len: run.chars().count(), run: String::from(run) }
    }
}

#[derive(Clone, Debug)]
struct Unit {
    primary: Primary,
    marks: Vec<char>,
    upper: bool,
}
impl Unit {
    fn new(primary: Primary, upper: bool) -> Self {
        Self { primary, marks: Vec::new(), upper }
    }
}

/// Letters without a canonical decomposition which still sort with a base letter.
fn expansion(c: char) -> Option<&'static str> {
    Some(match c {
        'ß' => "ss",
        'æ' => "ae",
        'œ' => "oe",
        'ø' => "o\u{338}",
        'đ' => "d\u{335}",
        'ħ' => "h\u{335}",
        'ł' => "l\u{337}",
        _ => return None,
    })
}
fn is_punctuation(c: char) -> bool {
    !c.is_alphanumeric() && !is_combining_mark(c)
}
fn is_language_tag(tag: &str) -> bool {
    let mut subtags = tag.split('-');
    let language_ok = subtags.next().map_or(false, |language| {
        (2..=3).contains(&language.len()) && language.chars().all(|c| c.is_ascii_alphabetic())
    });
    language_ok
        && subtags.all(|subtag| {
            (1..=8).contains(&subtag.len()) && subtag.chars().all(|c| c.is_ascii_alphanumeric())
        })
}
