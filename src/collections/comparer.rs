//! Closure-backed equality comparer.

/// Equality defined by a closure.
///
/// The hash is constant, so two values the closure considers equal always
/// share a hash. Anything keyed on [`LambdaComparer::hash_code`] degrades to
/// a linear scan, which is what [`LambdaComparer::position`] and
/// [`LambdaComparer::contains`] do directly.
///
/// # Examples
///
/// ```
/// use extkit::collections::LambdaComparer;
///
/// let comparer = LambdaComparer::new(|a: &&str, b: &&str| a.eq_ignore_ascii_case(b));
/// assert!(comparer.equals(&"Rust", &"rust"));
/// assert!(comparer.contains(&["one", "Two"], &"two"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LambdaComparer<F> {
    predicate: F,
}

impl<F> LambdaComparer<F> {
    /// Wraps `predicate` as an equality comparer.
    #[must_use]
    pub const fn new(predicate: F) -> Self {
        Self { predicate }
    }

    /// Returns whether `a` and `b` are equal under the closure.
    pub fn equals<T: ?Sized>(&self, a: &T, b: &T) -> bool
    where
        F: Fn(&T, &T) -> bool,
    {
        (self.predicate)(a, b)
    }

    /// Hash consistent with [`LambdaComparer::equals`]; always `0`.
    #[must_use]
    pub const fn hash_code<T: ?Sized>(&self, _value: &T) -> u64 {
        0
    }

    /// Index of the first element of `haystack` equal to `needle`.
    pub fn position<T>(&self, haystack: &[T], needle: &T) -> Option<usize>
    where
        F: Fn(&T, &T) -> bool,
    {
        haystack
            .iter()
            .position(|candidate| self.equals(candidate, needle))
    }

    /// Returns whether any element of `haystack` equals `needle`.
    pub fn contains<T>(&self, haystack: &[T], needle: &T) -> bool
    where
        F: Fn(&T, &T) -> bool,
    {
        self.position(haystack, needle).is_some()
    }
}
