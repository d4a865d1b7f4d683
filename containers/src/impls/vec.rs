use super::position_of;
use crate::{Container, ContainerError, MutableContainer};

impl<T> Container<T> for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, idx: usize) -> Result<&T, ContainerError> {
        <[_]>::get(self, idx)
            .ok_or_else(|| ContainerError::out_of_range(idx, Vec::len(self)))
    }
}

impl<T> MutableContainer<T> for Vec<T> {
    fn append(&mut self, element: T) {
        self.push(element);
    }

    fn remove(&mut self, element: &T) -> Result<T, ContainerError>
    where
        T: PartialEq,
    {
        let pos = position_of(self, element)?;
        Ok(Vec::remove(self, pos))
    }

    fn get_mut(&mut self, idx: usize) -> Result<&mut T, ContainerError> {
        let len = Vec::len(self);
        <[_]>::get_mut(self, idx).ok_or_else(|| ContainerError::out_of_range(idx, len))
    }
}
