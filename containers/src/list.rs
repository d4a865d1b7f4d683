//! Singly-linked list.
//!
//! See docs for [`List`].

use std::{
    fmt,
    io::{self, Write as _},
    ops,
};

use tracing::{debug, trace};

use crate::{Container, ContainerError, MutableContainer};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    data: T,
    next: Link<T>,
}

/// A growable sequence backed by a singly-linked chain of owned nodes.
///
/// Appending walks to the tail, so [`append`](Self::append), positional access and searches are
/// all `O(len)`.
///
/// # Examples
/// ```
/// use containers::List;
///
/// let mut list = List::new();
/// list.append("a");
/// list.append("b");
/// list.append("a");
///
/// assert_eq!(list.index(&"a"), Some(0));
/// assert_eq!(list.remove(&"a"), Ok("a"));
/// assert_eq!(list.to_string(), "[b, a]");
/// assert_eq!(list[1], "a");
/// ```
pub struct List<T> {
    head: Link<T>,
    len: usize,
}

impl<T> List<T> {
    /// Constructs a new, empty list.
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if any element equals `element`.
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.index(element).is_some()
    }

    /// Returns the position of the first element equal to `element`, or `None` if there is none.
    pub fn index(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut node = self.head.as_deref();
        let mut idx = 0;

        while let Some(current) = node {
            if current.data == *element {
                return Some(idx);
            }

            node = current.next.as_deref();
            idx += 1;
        }

        None
    }

    /// Adds `element` after the current last element.
    pub fn append(&mut self, element: T) {
        let tail = self.link_mut(self.len);
        *tail = Some(Box::new(Node {
            data: element,
            next: None,
        }));

        self.len += 1;
        trace!(len = self.len, "appended list node");
    }

    /// Removes the first element equal to `element` and returns it.
    ///
    /// The relative order of the remaining elements is unchanged.
    ///
    /// # Errors
    /// Returns [`ContainerError::ElementNotFound`] if no element matches; the list is left as is.
    pub fn remove(&mut self, element: &T) -> Result<T, ContainerError>
    where
        T: PartialEq,
    {
        let Some(pos) = self.index(element) else {
            debug!(len = self.len, "element to remove is not in list");
            return Err(ContainerError::ElementNotFound);
        };

        let data = self.unlink(pos)?;
        trace!(pos, len = self.len, "removed list node");

        Ok(data)
    }

    /// Returns a reference to the element at position `idx`.
    ///
    /// # Errors
    /// Returns [`ContainerError::IndexOutOfRange`] if `idx >= len`.
    pub fn get(&self, idx: usize) -> Result<&T, ContainerError> {
        let mut node = self.head.as_deref();
        let mut pos = 0;

        while let Some(current) = node {
            if pos == idx {
                return Ok(&current.data);
            }

            node = current.next.as_deref();
            pos += 1;
        }

        Err(ContainerError::out_of_range(idx, self.len))
    }

    /// Returns a mutable reference to the element at position `idx`.
    ///
    /// # Errors
    /// Returns [`ContainerError::IndexOutOfRange`] if `idx >= len`.
    pub fn get_mut(&mut self, idx: usize) -> Result<&mut T, ContainerError> {
        let len = self.len;
        let mut node = self.head.as_deref_mut();
        let mut pos = 0;

        while let Some(current) = node {
            if pos == idx {
                return Ok(&mut current.data);
            }

            node = current.next.as_deref_mut();
            pos += 1;
        }

        Err(ContainerError::out_of_range(idx, len))
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        let dropped = self.len;
        self.drop_nodes();
        trace!(dropped, "cleared list");
    }

    /// Copies the elements, in order, into a new `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut vec = Vec::with_capacity(self.len);
        self.for_each(|item| vec.push(item.clone()));
        vec
    }

    /// Writes the list as `[e0, e1, ..., en]` followed by a newline.
    pub fn write_to<W: io::Write>(&self, mut wrt: W) -> io::Result<()>
    where
        T: fmt::Display,
    {
        writeln!(wrt, "{self}")
    }

    /// Prints the list to stdout as `[e0, e1, ..., en]` followed by a newline.
    pub fn print(&self) -> io::Result<()>
    where
        T: fmt::Display,
    {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout)?;
        stdout.flush()
    }

    /// Drops the chain one node at a time so long lists don't recurse.
    fn drop_nodes(&mut self) {
        let mut link = self.head.take();
        self.len = 0;

        while let Some(mut node) = link {
            link = node.next.take();
        }
    }

    fn for_each(&self, mut f: impl FnMut(&T)) {
        let mut node = self.head.as_deref();

        while let Some(current) = node {
            f(&current.data);
            node = current.next.as_deref();
        }
    }

    /// Returns the link slot at `pos`: the head for `0`, otherwise the `next` of node `pos - 1`.
    ///
    /// Stops early at the tail when `pos > len`.
    fn link_mut(&mut self, pos: usize) -> &mut Link<T> {
        let mut link = &mut self.head;

        for _ in 0..pos {
            match link {
                Some(node) => link = &mut node.next,
                None => break,
            }
        }

        link
    }

    /// Detaches the node at `pos`, moving its successor chain into its predecessor's link.
    fn unlink(&mut self, pos: usize) -> Result<T, ContainerError> {
        let len = self.len;
        let link = self.link_mut(pos);

        let Some(node) = link.take() else {
            return Err(ContainerError::out_of_range(pos, len));
        };

        let Node { data, next } = *node;
        *link = next;
        self.len -= 1;

        Ok(data)
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        let mut list = Self::new();

        let mut tail = &mut list.head;
        let mut node = self.head.as_deref();

        while let Some(current) = node {
            let copy = tail.insert(Box::new(Node {
                data: current.data.clone(),
                next: None,
            }));

            tail = &mut copy.next;
            node = current.next.as_deref();
        }

        list.len = self.len;
        list
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.drop_nodes();
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        self.for_each(|item| {
            list.entry(item);
        });
        list.finish()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;

        let mut node = self.head.as_deref();
        let mut first = true;

        while let Some(current) = node {
            if !first {
                f.write_str(", ")?;
            }

            write!(f, "{}", current.data)?;

            first = false;
            node = current.next.as_deref();
        }

        f.write_str("]")
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }

        let mut lhs = self.head.as_deref();
        let mut rhs = other.head.as_deref();

        while let (Some(a), Some(b)) = (lhs, rhs) {
            if a.data != b.data {
                return false;
            }

            lhs = a.next.as_deref();
            rhs = b.next.as_deref();
        }

        true
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T> ops::Index<usize> for List<T> {
    type Output = T;

    fn index(&self, idx: usize) -> &Self::Output {
        match self.get(idx) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> ops::IndexMut<usize> for List<T> {
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        match self.get_mut(idx) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let Self { head, len } = self;
        let start = *len;

        // find the tail once instead of once per element
        let mut tail = head;
        while let Some(node) = tail {
            tail = &mut node.next;
        }

        for item in iter {
            let node = tail.insert(Box::new(Node {
                data: item,
                next: None,
            }));

            // keep `len` in step with the chain even if `iter` panics
            *len += 1;
            tail = &mut node.next;
        }

        trace!(added = *len - start, len = *len, "extended list");
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T> Container<T> for List<T> {
    fn len(&self) -> usize {
        List::len(self)
    }

    fn get(&self, idx: usize) -> Result<&T, ContainerError> {
        List::get(self, idx)
    }

    fn index(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        List::index(self, element)
    }
}

impl<T> MutableContainer<T> for List<T> {
    fn append(&mut self, element: T) {
        List::append(self, element);
    }

    fn remove(&mut self, element: &T) -> Result<T, ContainerError>
    where
        T: PartialEq,
    {
        List::remove(self, element)
    }

    fn get_mut(&mut self, idx: usize) -> Result<&mut T, ContainerError> {
        List::get_mut(self, idx)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::{
        de::{Deserialize, Deserializer},
        ser::{Serialize, SerializeSeq as _, Serializer},
    };

    use super::*;

    impl<T: Serialize> Serialize for List<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(self.len))?;

            let mut node = self.head.as_deref();
            while let Some(current) = node {
                seq.serialize_element(&current.data)?;
                node = current.next.as_deref();
            }

            seq.end()
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for List<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            Vec::<T>::deserialize(deserializer).map(Self::from)
        }
    }
}
