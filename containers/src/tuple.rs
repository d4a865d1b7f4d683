use std::{fmt, ops};

use crate::{Container, ContainerError};

/// A fixed-length sequence, read-only after construction.
///
/// # Examples
/// ```
/// use containers::Tuple;
///
/// let tuple = Tuple::from([10, 20, 30]);
///
/// assert_eq!(tuple.count(), 3);
/// assert_eq!(tuple.index(&20), Some(1));
/// assert_eq!(tuple.index(&99), None);
/// assert_eq!(tuple[2], 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tuple<T> {
    elements: Box<[T]>,
}

impl<T> Tuple<T> {
    /// Constructs a tuple that takes ownership of `elements`.
    pub fn new(elements: Vec<T>) -> Self {
        Self {
            elements: elements.into_boxed_slice(),
        }
    }

    /// Constructs a tuple holding clones of `elements`.
    pub fn from_slice(elements: &[T]) -> Self
    where
        T: Clone,
    {
        Self {
            elements: elements.into(),
        }
    }

    /// Returns the number of elements the tuple was constructed with.
    pub fn count(&self) -> usize {
        self.elements.len()
    }

    /// Returns the position of the first element equal to `element`, or `None` if there is none.
    pub fn index(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.elements.iter().position(|item| item == element)
    }

    /// Returns `true` if any element equals `element`.
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.elements.contains(element)
    }

    /// Returns a reference to the element at position `idx`.
    ///
    /// # Errors
    /// Returns [`ContainerError::IndexOutOfRange`] if `idx >= count`.
    pub fn get(&self, idx: usize) -> Result<&T, ContainerError> {
        ContainerError::check_index(idx, self.count())?;
        Ok(&self.elements[idx])
    }

    /// Views the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Converts the tuple into a `Vec` without copying.
    pub fn into_vec(self) -> Vec<T> {
        self.elements.into_vec()
    }
}

impl<T: fmt::Display> fmt::Display for Tuple<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;

        for (idx, item) in self.elements.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }

            write!(f, "{item}")?;
        }

        f.write_str(")")
    }
}

impl<T> ops::Index<usize> for Tuple<T> {
    type Output = T;

    fn index(&self, idx: usize) -> &Self::Output {
        match self.get(idx) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> From<Vec<T>> for Tuple<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::new(elements)
    }
}

impl<T, const N: usize> From<[T; N]> for Tuple<T> {
    fn from(elements: [T; N]) -> Self {
        Self::new(Vec::from(elements))
    }
}

impl<T> FromIterator<T> for Tuple<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Container<T> for Tuple<T> {
    fn len(&self) -> usize {
        self.count()
    }

    fn get(&self, idx: usize) -> Result<&T, ContainerError> {
        Tuple::get(self, idx)
    }

    fn index(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        Tuple::index(self, element)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::*;

    impl<T: Serialize> Serialize for Tuple<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.elements.serialize(serializer)
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for Tuple<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            Vec::<T>::deserialize(deserializer).map(Self::new)
        }
    }
}
