// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Small sequential list helpers.

use fanmap_core::ListError;

/// Builds a new list with `head` in front of `tail`.
///
/// ```
/// use fanmap_list::cons;
///
/// assert_eq!(cons(0, &[1, 2]), vec![0, 1, 2]);
/// assert_eq!(cons("only", &[]), vec!["only"]);
/// ```
pub fn cons<T: Clone>(head: T, tail: &[T]) -> Vec<T> {
    let mut list = Vec::with_capacity(tail.len() + 1);
    list.push(head);
    list.extend_from_slice(tail);
    list
}

/// First element of `list`.
///
/// # Errors
///
/// [`ListError::Empty`] if `list` is empty.
pub fn head<T>(list: &[T]) -> Result<&T, ListError> {
    list.first().ok_or(ListError::Empty { operation: "head" })
}

/// Everything after the first element.
///
/// A single-element list has no meaningful tail here: at least two elements
/// are required.
///
/// # Errors
///
/// [`ListError::TooShort`] if `list` has fewer than two elements.
///
/// ```
/// use fanmap_list::tail;
///
/// assert_eq!(tail(&[1, 2, 3]).unwrap(), &[2, 3]);
/// assert!(tail(&[1]).is_err());
/// ```
pub fn tail<T>(list: &[T]) -> Result<&[T], ListError> {
    if list.len() < 2 {
        return Err(ListError::TooShort {
            operation: "tail",
            required: 2,
            actual: list.len(),
        });
    }
    Ok(&list[1..])
}

/// Interleaves `first` and `second` element by element, then appends the
/// rest of the longer list.
///
/// The result always holds `first.len() + second.len()` elements.
///
/// ```
/// use fanmap_list::zip;
///
/// assert_eq!(zip(&[1, 3, 5, 7], &[2, 4]), vec![1, 2, 3, 4, 5, 7]);
/// assert_eq!(zip(&[1], &[2, 4, 6]), vec![1, 2, 4, 6]);
/// ```
pub fn zip<T: Clone>(first: &[T], second: &[T]) -> Vec<T> {
    let mut zipped = Vec::with_capacity(first.len() + second.len());

    for (a, b) in first.iter().zip(second) {
        zipped.push(a.clone());
        zipped.push(b.clone());
    }

    let common = first.len().min(second.len());
    let longer = if first.len() > second.len() {
        first
    } else {
        second
    };
    zipped.extend_from_slice(&longer[common..]);

    zipped
}
