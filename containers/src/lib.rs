//! Fixed-size tuple and singly-linked list containers.
//!
//! # Containers
//! - [`Tuple`]: fixed length, backed by a boxed slice, read-only after construction.
//! - [`List`]: growable, backed by an owned chain of nodes.
//!
//! Both implement the [`Container`] trait; [`List`] also implements [`MutableContainer`].
//!
//! # Crate Features
//! - `serde`: `Serialize` and `Deserialize` for [`List`] and [`Tuple`] as plain sequences.
//! - `arrayvec`, `smallvec`, `tinyvec`: container trait impls for those crates' inline vectors.
//!
//! # Examples
//! ```
//! use containers::{ContainerError, List};
//!
//! let mut list = List::new();
//! list.append(1);
//! list.append(5);
//!
//! assert!(list.contains(&5));
//! assert!(!list.contains(&3));
//! assert_eq!(list.to_string(), "[1, 5]");
//!
//! assert_eq!(list.remove(&3), Err(ContainerError::ElementNotFound));
//! assert_eq!(list.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod error;
mod impls;
mod list;
mod tuple;

pub use self::{error::ContainerError, list::List, tuple::Tuple};

/// Read-only capabilities shared by every container.
pub trait Container<T> {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at position `idx`.
    ///
    /// # Errors
    /// Returns [`ContainerError::IndexOutOfRange`] if `idx >= len`.
    fn get(&self, idx: usize) -> Result<&T, ContainerError>;

    /// Returns the position of the first element equal to `element`.
    fn index(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        (0..self.len()).find(|&idx| self.get(idx).is_ok_and(|item| item == element))
    }

    /// Returns `true` if any element equals `element`.
    fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.index(element).is_some()
    }
}

/// Containers that can grow and shrink.
pub trait MutableContainer<T>: Container<T> {
    /// Adds `element` after the last element.
    fn append(&mut self, element: T);

    /// Removes the first element equal to `element` and returns it.
    ///
    /// # Errors
    /// Returns [`ContainerError::ElementNotFound`] without modifying the container if no element
    /// matches.
    fn remove(&mut self, element: &T) -> Result<T, ContainerError>
    where
        T: PartialEq;

    /// Returns a mutable reference to the element at position `idx`.
    ///
    /// # Errors
    /// Returns [`ContainerError::IndexOutOfRange`] if `idx >= len`.
    fn get_mut(&mut self, idx: usize) -> Result<&mut T, ContainerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Exercises trait default methods through a generic bound only.
    fn first_of<C: Container<u32>>(container: &C, needle: u32) -> Option<usize> {
        container.index(&needle)
    }

    #[test]
    fn default_methods_agree_across_containers() {
        let tuple = Tuple::from([3, 1, 4, 1, 5]);
        let list = tuple.as_slice().iter().copied().collect::<List<_>>();
        let vec = tuple.as_slice().to_vec();

        for needle in [1, 3, 5, 9] {
            assert_eq!(first_of(&tuple, needle), first_of(&list, needle));
            assert_eq!(first_of(&list, needle), first_of(&vec, needle));
        }

        assert_eq!(first_of(&list, 1), Some(1));
        assert_eq!(first_of(&vec, 9), None);
    }

    #[test]
    fn empty_containers() {
        let list = List::<u32>::new();
        let tuple = Tuple::<u32>::new(Vec::new());

        assert!(Container::is_empty(&list));
        assert!(Container::is_empty(&tuple));
        assert!(!Container::contains(&list, &0));
        assert_eq!(
            Container::get(&tuple, 0),
            Err(ContainerError::IndexOutOfRange { index: 0, len: 0 })
        );
    }
}
