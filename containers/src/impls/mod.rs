//! Container trait impls for standard and third-party vector types.

#[cfg(feature = "arrayvec")]
mod arrayvec;
#[cfg(feature = "smallvec")]
mod smallvec;
#[cfg(feature = "tinyvec")]
mod tinyvec;
mod vec;

use crate::ContainerError;

/// Position of the first item equal to `element`, for slice-backed removals.
fn position_of<T: PartialEq>(items: &[T], element: &T) -> Result<usize, ContainerError> {
    items.iter().position(|item| item == element).ok_or_else(|| {
        tracing::debug!(len = items.len(), "element to remove is not in vector");
        ContainerError::ElementNotFound
    })
}
