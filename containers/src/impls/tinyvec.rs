use tinyvec::{Array, TinyVec};

use super::position_of;
use crate::{Container, ContainerError, MutableContainer};

impl<A: Array> Container<A::Item> for TinyVec<A> {
    fn len(&self) -> usize {
        TinyVec::len(self)
    }

    fn get(&self, idx: usize) -> Result<&A::Item, ContainerError> {
        <[_]>::get(self, idx)
            .ok_or_else(|| ContainerError::out_of_range(idx, TinyVec::len(self)))
    }
}

impl<A: Array> MutableContainer<A::Item> for TinyVec<A> {
    fn append(&mut self, element: A::Item) {
        self.push(element);
    }

    fn remove(&mut self, element: &A::Item) -> Result<A::Item, ContainerError>
    where
        A::Item: PartialEq,
    {
        let pos = position_of(self, element)?;
        Ok(TinyVec::remove(self, pos))
    }

    fn get_mut(&mut self, idx: usize) -> Result<&mut A::Item, ContainerError> {
        let len = TinyVec::len(self);
        <[_]>::get_mut(self, idx).ok_or_else(|| ContainerError::out_of_range(idx, len))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let mut vec = TinyVec::<[_; 2]>::new();

        assert!(Container::is_empty(&vec));

        // spills to the heap on the third element
        for item in [3, 1, 3] {
            MutableContainer::append(&mut vec, item);
        }

        assert_eq!(3, Container::len(&vec));
        assert!(vec.is_heap());

        assert_eq!(Ok(3), MutableContainer::remove(&mut vec, &3));
        assert_eq!(&[1, 3], vec.as_slice());
        assert!(Container::contains(&vec, &3));
        assert_eq!(
            Err(ContainerError::ElementNotFound),
            MutableContainer::remove(&mut vec, &9)
        );
    }
}
