use smallvec::{Array, SmallVec};

use super::position_of;
use crate::{Container, ContainerError, MutableContainer};

impl<A: Array> Container<A::Item> for SmallVec<A> {
    fn len(&self) -> usize {
        SmallVec::len(self)
    }

    fn get(&self, idx: usize) -> Result<&A::Item, ContainerError> {
        <[_]>::get(self, idx)
            .ok_or_else(|| ContainerError::out_of_range(idx, SmallVec::len(self)))
    }
}

impl<A: Array> MutableContainer<A::Item> for SmallVec<A> {
    fn append(&mut self, element: A::Item) {
        self.push(element);
    }

    fn remove(&mut self, element: &A::Item) -> Result<A::Item, ContainerError>
    where
        A::Item: PartialEq,
    {
        let pos = position_of(self, element)?;
        Ok(SmallVec::remove(self, pos))
    }

    fn get_mut(&mut self, idx: usize) -> Result<&mut A::Item, ContainerError> {
        let len = SmallVec::len(self);
        <[_]>::get_mut(self, idx).ok_or_else(|| ContainerError::out_of_range(idx, len))
    }
}
