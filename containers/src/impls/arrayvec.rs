use arrayvec::ArrayVec;

use super::position_of;
use crate::{Container, ContainerError, MutableContainer};

impl<T, const CAP: usize> Container<T> for ArrayVec<T, CAP> {
    fn len(&self) -> usize {
        ArrayVec::len(self)
    }

    fn get(&self, idx: usize) -> Result<&T, ContainerError> {
        <[_]>::get(self, idx)
            .ok_or_else(|| ContainerError::out_of_range(idx, ArrayVec::len(self)))
    }
}

/// Appending to a full `ArrayVec` panics.
impl<T, const CAP: usize> MutableContainer<T> for ArrayVec<T, CAP> {
    fn append(&mut self, element: T) {
        self.push(element);
    }

    fn remove(&mut self, element: &T) -> Result<T, ContainerError>
    where
        T: PartialEq,
    {
        let pos = position_of(self, element)?;
        Ok(ArrayVec::remove(self, pos))
    }

    fn get_mut(&mut self, idx: usize) -> Result<&mut T, ContainerError> {
        let len = ArrayVec::len(self);
        <[_]>::get_mut(self, idx).ok_or_else(|| ContainerError::out_of_range(idx, len))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let mut vec = ArrayVec::<_, 8>::new();

        assert_eq!(0, Container::len(&vec));
        assert!(Container::is_empty(&vec));

        MutableContainer::append(&mut vec, 1);
        MutableContainer::append(&mut vec, 2);

        assert_eq!(2, Container::len(&vec));
        assert_eq!(&1, Container::get(&vec, 0).unwrap());
        assert_eq!(Some(1), Container::index(&vec, &2));

        assert_eq!(Ok(1), MutableContainer::remove(&mut vec, &1));
        assert_eq!(&[2], vec.as_slice());
        assert!(Container::get(&vec, 1).is_err());
    }

    #[test]
    #[should_panic]
    fn append_past_capacity() {
        let mut vec = ArrayVec::<_, 1>::new();
        MutableContainer::append(&mut vec, 1);
        MutableContainer::append(&mut vec, 2);
    }
}
