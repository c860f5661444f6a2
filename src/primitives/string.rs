//! String helpers: blank checks, token trimming, encodings, hashing and
//! enum parsing.

use std::any::type_name;
use std::borrow::Cow;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;

use crate::error::{CodecError, Result};
use crate::primitives::bytes::{md5_hex, sha1_hex};

/// How two strings are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Comparison {
    /// Exact, case-sensitive comparison.
    #[default]
    Ordinal,
    /// Case-insensitive comparison using Unicode lowercase mapping.
    IgnoreCase,
}

impl Comparison {
    const fn is_case_sensitive(self) -> bool {
        matches!(self, Self::Ordinal)
    }
}

/// Extension methods on `str`.
///
/// # Examples
///
/// ```
/// use extkit::primitives::{Comparison, StrExt};
///
/// assert!("   ".is_blank());
/// assert!("Hello World".contains_with(Some("WORLD"), Comparison::IgnoreCase));
/// assert_eq!("--value--".trim_token("--", true), "value");
/// assert_eq!("abc".to_hex(), "616263");
/// ```
pub trait StrExt {
    /// Returns `true` for an empty string or one made only of whitespace.
    fn is_blank(&self) -> bool;

    /// Returns whether `value` occurs in the string.
    ///
    /// A `None` value never occurs; an empty value always does.
    fn contains_with(&self, value: Option<&str>, comparison: Comparison) -> bool;

    /// Removes the first occurrence of `what`.
    fn remove_first(&self, what: &str, case_sensitive: bool) -> Cow<'_, str>;

    /// Removes one leading and one trailing occurrence of `what`.
    fn trim_token(&self, what: &str, case_sensitive: bool) -> &str;

    /// Removes one leading occurrence of `what`.
    fn trim_token_start(&self, what: &str, case_sensitive: bool) -> &str;

    /// Removes one trailing occurrence of `what`.
    fn trim_token_end(&self, what: &str, case_sensitive: bool) -> &str;

    /// Encodes the UTF-8 bytes as standard base64.
    fn to_base64(&self) -> String;

    /// Decodes standard base64 into a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Base64`] for malformed input and
    /// [`CodecError::Utf8`] when the decoded bytes are not UTF-8.
    fn from_base64(&self) -> Result<String>;

    /// Lowercase hex SHA-1 digest of the ASCII bytes, `None` when empty.
    fn to_sha1_hash(&self) -> Option<String>;

    /// Lowercase hex MD5 digest of the ASCII bytes, `None` when empty.
    fn to_md5_hash(&self) -> Option<String>;

    /// Encodes the UTF-8 bytes as lowercase hex.
    fn to_hex(&self) -> String;

    /// Decodes hex into a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Hex`] for malformed input and
    /// [`CodecError::Utf8`] when the decoded bytes are not UTF-8.
    fn from_hex(&self) -> Result<String>;

    /// ASCII bytes of the string; every non-ASCII character becomes `?`.
    fn to_ascii_bytes(&self) -> Vec<u8>;

    /// Returns whether `pattern` matches anywhere in the string.
    ///
    /// Always `false` when the string or the pattern is empty.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Regex`] when `pattern` does not compile.
    fn is_regex_match(&self, pattern: &str) -> Result<bool>;

    /// Parses the string into an enum (or any `FromStr` type).
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidEnum`] when parsing fails.
    fn to_enum<E: FromStr>(&self) -> Result<E>;

    /// Parses the string, falling back to `E::default()`.
    fn to_enum_or_default<E: FromStr + Default>(&self) -> E;

    /// Parses the string, falling back to `default`.
    fn to_enum_or<E: FromStr>(&self, default: E) -> E;
}

impl StrExt for str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }

    fn contains_with(&self, value: Option<&str>, comparison: Comparison) -> bool {
        value.is_some_and(|value| find(self, value, comparison.is_case_sensitive()).is_some())
    }

    fn remove_first(&self, what: &str, case_sensitive: bool) -> Cow<'_, str> {
        if self.is_empty() || what.is_empty() {
            return Cow::Borrowed(self);
        }
        match find(self, what, case_sensitive) {
            Some((start, len)) => {
                let mut removed = String::with_capacity(self.len() - len);
                removed.push_str(&self[..start]);
                removed.push_str(&self[start + len..]);
                Cow::Owned(removed)
            }
            None => Cow::Borrowed(self),
        }
    }

    fn trim_token(&self, what: &str, case_sensitive: bool) -> &str {
        let (start, end) = token_bounds(self, what, case_sensitive, true, true);
        &self[start..end]
    }

    fn trim_token_start(&self, what: &str, case_sensitive: bool) -> &str {
        let (start, end) = token_bounds(self, what, case_sensitive, true, false);
        &self[start..end]
    }

    fn trim_token_end(&self, what: &str, case_sensitive: bool) -> &str {
        let (start, end) = token_bounds(self, what, case_sensitive, false, true);
        &self[start..end]
    }

    fn to_base64(&self) -> String {
        STANDARD.encode(self.as_bytes())
    }

    fn from_base64(&self) -> Result<String> {
        let bytes = STANDARD.decode(self).map_err(CodecError::from)?;
        Ok(String::from_utf8(bytes).map_err(CodecError::from)?)
    }

    fn to_sha1_hash(&self) -> Option<String> {
        (!self.is_empty()).then(|| sha1_hex(&self.to_ascii_bytes()))
    }

    fn to_md5_hash(&self) -> Option<String> {
        (!self.is_empty()).then(|| md5_hex(&self.to_ascii_bytes()))
    }

    fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }

    fn from_hex(&self) -> Result<String> {
        let bytes = hex::decode(self).map_err(CodecError::from)?;
        Ok(String::from_utf8(bytes).map_err(CodecError::from)?)
    }

    fn to_ascii_bytes(&self) -> Vec<u8> {
        self.chars()
            .map(|c| u8::try_from(c).ok().filter(u8::is_ascii).unwrap_or(b'?'))
            .collect()
    }

    fn is_regex_match(&self, pattern: &str) -> Result<bool> {
        if self.is_empty() || pattern.is_empty() {
            return Ok(false);
        }
        let regex = Regex::new(pattern).map_err(CodecError::from)?;
        Ok(regex.is_match(self))
    }

    fn to_enum<E: FromStr>(&self) -> Result<E> {
        self.parse::<E>().map_err(|_| {
            CodecError::InvalidEnum {
                value: self.to_string(),
                type_name: type_name::<E>(),
            }
            .into()
        })
    }

    fn to_enum_or_default<E: FromStr + Default>(&self) -> E {
        self.parse().unwrap_or_default()
    }

    fn to_enum_or<E: FromStr>(&self, default: E) -> E {
        self.parse().unwrap_or(default)
    }
}

/// Null-aware checks on an optional string.
pub trait OptionalStrExt {
    /// `true` when absent or empty.
    fn is_null_or_empty(&self) -> bool;

    /// `true` when absent, empty or whitespace only.
    fn is_null_or_blank(&self) -> bool;
}

impl OptionalStrExt for Option<&str> {
    fn is_null_or_empty(&self) -> bool {
        self.is_none_or(str::is_empty)
    }

    fn is_null_or_blank(&self) -> bool {
        self.is_none_or(str::is_blank)
    }
}

/// In-place token trimming for an owned, growable string.
pub trait StringBufExt {
    /// Removes one leading and one trailing occurrence of `what`.
    fn trim_token_in_place(&mut self, what: &str, case_sensitive: bool);

    /// Removes one leading occurrence of `what`.
    fn trim_token_start_in_place(&mut self, what: &str, case_sensitive: bool);

    /// Removes one trailing occurrence of `what`.
    fn trim_token_end_in_place(&mut self, what: &str, case_sensitive: bool);
}

impl StringBufExt for String {
    fn trim_token_in_place(&mut self, what: &str, case_sensitive: bool) {
        let bounds = token_bounds(self, what, case_sensitive, true, true);
        keep_range(self, bounds);
    }

    fn trim_token_start_in_place(&mut self, what: &str, case_sensitive: bool) {
        let bounds = token_bounds(self, what, case_sensitive, true, false);
        keep_range(self, bounds);
    }

    fn trim_token_end_in_place(&mut self, what: &str, case_sensitive: bool) {
        let bounds = token_bounds(self, what, case_sensitive, false, true);
        keep_range(self, bounds);
    }
}

fn keep_range(buffer: &mut String, (start, end): (usize, usize)) {
    buffer.truncate(end);
    buffer.drain(..start);
}

/// Byte range left after removing `what` from the front and/or the back.
///
/// The back is only trimmed when something is left after the front.
fn token_bounds(
    input: &str,
    what: &str,
    case_sensitive: bool,
    front: bool,
    back: bool,
) -> (usize, usize) {
    let mut start = 0;
    let mut end = input.len();
    if input.is_empty() || what.is_empty() {
        return (start, end);
    }

    if front && let Some(len) = prefix_len(input, what, case_sensitive) {
        start = len;
    }
    if back
        && start < end
        && let Some(len) = suffix_len(&input[start..], what, case_sensitive)
    {
        end -= len;
    }
    (start, end)
}

fn chars_match(a: char, b: char, case_sensitive: bool) -> bool {
    a == b || (!case_sensitive && a.to_lowercase().eq(b.to_lowercase()))
}

/// Byte length of the prefix of `haystack` that matches `needle`.
fn prefix_len(haystack: &str, needle: &str, case_sensitive: bool) -> Option<usize> {
    let mut hay = haystack.chars();
    let mut consumed = 0;
    for expected in needle.chars() {
        let actual = hay.next()?;
        if !chars_match(actual, expected, case_sensitive) {
            return None;
        }
        consumed += actual.len_utf8();
    }
    Some(consumed)
}

/// Byte length of the suffix of `haystack` that matches `needle`.
fn suffix_len(haystack: &str, needle: &str, case_sensitive: bool) -> Option<usize> {
    let mut hay = haystack.chars().rev();
    let mut consumed = 0;
    for expected in needle.chars().rev() {
        let actual = hay.next()?;
        if !chars_match(actual, expected, case_sensitive) {
            return None;
        }
        consumed += actual.len_utf8();
    }
    Some(consumed)
}

/// Start offset and byte length of the first match of `needle`.
fn find(haystack: &str, needle: &str, case_sensitive: bool) -> Option<(usize, usize)> {
    if case_sensitive {
        return haystack.find(needle).map(|start| (start, needle.len()));
    }
    haystack
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(haystack.len()))
        .find_map(|start| prefix_len(&haystack[start..], needle, false).map(|len| (start, len)))
}
