//! In-place reordering for mutable lists.
//!
//! Moves a single element one position up or down, swaps two elements by
//! index or by value, and removes elements matching a predicate. Length and
//! the values of untouched elements never change.

use crate::error::{CollectionError, Result};

const LIST: &str = "list";

/// Reordering operations over a mutable list.
///
/// Implementors only provide access to the backing `Vec`; every operation is
/// a provided method built on [`ListExt::list`] and [`ListExt::list_mut`].
/// Implemented for `Vec<T>`, `&mut L` and `Option<L>`, where `None` reports
/// a missing collection.
///
/// # Examples
///
/// ```
/// use extkit::collections::ListExt;
///
/// let mut list = vec![1, 2, 4, 17];
/// list.swap_by_index(1, 2).unwrap();
/// assert_eq!(list, vec![1, 4, 2, 17]);
///
/// let mut missing: Option<Vec<i32>> = None;
/// assert!(missing.move_up_by_index(1).is_err());
/// ```
pub trait ListExt<T> {
    /// Borrows the backing list.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::MissingCollection`] when the list is absent.
    fn list(&self) -> Result<&Vec<T>>;

    /// Mutably borrows the backing list.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::MissingCollection`] when the list is absent.
    fn list_mut(&mut self) -> Result<&mut Vec<T>>;

    /// Returns the index of the last element, or `None` for an empty list.
    fn last_element_index(&self) -> Result<Option<usize>> {
        Ok(self.list()?.len().checked_sub(1))
    }

    /// Swaps the element at `index` with its predecessor.
    ///
    /// Does nothing when `index` is `0`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] when `index` is past the
    /// last element.
    fn move_up_by_index(&mut self, index: usize) -> Result<()> {
        let list = self.list_mut()?;
        if index == 0 {
            return Ok(());
        }
        check_index("index", index, list.len())?;
        list.swap(index, index - 1);
        Ok(())
    }

    /// Moves the first element equal to `value` one position up.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::ValueNotFound`] when no element equals
    /// `value`.
    fn move_up_by_value(&mut self, value: &T) -> Result<()>
    where
        T: PartialEq,
    {
        let list = self.list_mut()?;
        let index = position_of(list, value, "element")?;
        if index > 0 {
            list.swap(index, index - 1);
        }
        Ok(())
    }

    /// Swaps the element at `index` with its successor.
    ///
    /// Does nothing when `index` is already the last index.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] when `index` is past the
    /// last element, which includes every index of an empty list.
    fn move_down_by_index(&mut self, index: usize) -> Result<()> {
        let list = self.list_mut()?;
        if list.len().checked_sub(1) == Some(index) {
            return Ok(());
        }
        check_index("index", index, list.len())?;
        list.swap(index, index + 1);
        Ok(())
    }

    /// Moves the first element equal to `value` one position down.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::ValueNotFound`] when no element equals
    /// `value`.
    fn move_down_by_value(&mut self, value: &T) -> Result<()>
    where
        T: PartialEq,
    {
        let list = self.list_mut()?;
        let index = position_of(list, value, "element")?;
        if index + 1 < list.len() {
            list.swap(index, index + 1);
        }
        Ok(())
    }

    /// Swaps the elements at `from_index` and `to_index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidOperation`] for an empty list and
    /// [`CollectionError::IndexOutOfRange`] naming the first index that
    /// falls outside the list.
    fn swap_by_index(&mut self, from_index: usize, to_index: usize) -> Result<()> {
        let list = self.list_mut()?;
        ensure_not_empty(list)?;
        check_index("from_index", from_index, list.len())?;
        check_index("to_index", to_index, list.len())?;
        list.swap(from_index, to_index);
        Ok(())
    }

    /// Swaps the first occurrences of `from_value` and `to_value`.
    ///
    /// Both positions are found in a single pass. Does nothing when both
    /// values resolve to the same element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidOperation`] for an empty list and
    /// [`CollectionError::ValueNotFound`] naming the value that is missing.
    fn swap_by_value(&mut self, from_value: &T, to_value: &T) -> Result<()>
    where
        T: PartialEq,
    {
        let list = self.list_mut()?;
        ensure_not_empty(list)?;

        let mut from_index = None;
        let mut to_index = None;
        for (index, element) in list.iter().enumerate() {
            if from_index.is_none() && element == from_value {
                from_index = Some(index);
            }
            if to_index.is_none() && element == to_value {
                to_index = Some(index);
            }
            if from_index.is_some() && to_index.is_some() {
                break;
            }
        }

        let from_index = from_index.ok_or(CollectionError::ValueNotFound { name: "from_value" })?;
        let to_index = to_index.ok_or(CollectionError::ValueNotFound { name: "to_value" })?;
        list.swap(from_index, to_index);
        Ok(())
    }

    /// Removes every element matching `predicate`, keeping the order of the
    /// rest. Returns how many elements were removed.
    fn remove_matching<P>(&mut self, mut predicate: P) -> Result<usize>
    where
        P: FnMut(&T) -> bool,
    {
        let list = self.list_mut()?;
        let before = list.len();
        list.retain(|element| !predicate(element));
        Ok(before - list.len())
    }
}

impl<T> ListExt<T> for Vec<T> {
    fn list(&self) -> Result<&Vec<T>> {
        Ok(self)
    }

    fn list_mut(&mut self) -> Result<&mut Vec<T>> {
        Ok(self)
    }
}

impl<T, L> ListExt<T> for &mut L
where
    L: ListExt<T> + ?Sized,
{
    fn list(&self) -> Result<&Vec<T>> {
        L::list(self)
    }

    fn list_mut(&mut self) -> Result<&mut Vec<T>> {
        L::list_mut(self)
    }
}

impl<T, L> ListExt<T> for Option<L>
where
    L: ListExt<T>,
{
    fn list(&self) -> Result<&Vec<T>> {
        let inner = self
            .as_ref()
            .ok_or(CollectionError::MissingCollection { name: LIST })?;
        inner.list()
    }

    fn list_mut(&mut self) -> Result<&mut Vec<T>> {
        let inner = self
            .as_mut()
            .ok_or(CollectionError::MissingCollection { name: LIST })?;
        inner.list_mut()
    }
}

fn check_index(name: &'static str, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(CollectionError::IndexOutOfRange { name, index, len }.into())
    }
}

fn ensure_not_empty<T>(list: &[T]) -> Result<()> {
    if list.is_empty() {
        return Err(CollectionError::InvalidOperation {
            reason: "unable to swap elements in an empty list".to_string(),
        }
        .into());
    }
    Ok(())
}

fn position_of<T: PartialEq>(list: &[T], value: &T, name: &'static str) -> Result<usize> {
    list.iter()
        .position(|element| element == value)
        .ok_or_else(|| CollectionError::ValueNotFound { name }.into())
}
