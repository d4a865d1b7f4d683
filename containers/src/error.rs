use derive_more::{Display, Error};

/// Errors returned by container operations.
///
/// Operations that fail never modify the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[non_exhaustive]
pub enum ContainerError {
    /// Positional access past the last element.
    #[display("index out of range: the len is {len} but the index is {index}")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,

        /// Number of elements at the time of the request.
        len: usize,
    },

    /// No element matched the value passed to a removal.
    #[display("element not found")]
    ElementNotFound,
}

impl ContainerError {
    /// Returns `Ok(())` if `index` is a valid position in a container of length `len`.
    pub(crate) fn check_index(index: usize, len: usize) -> Result<(), Self> {
        if index < len {
            Ok(())
        } else {
            Err(Self::out_of_range(index, len))
        }
    }

    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        tracing::debug!(index, len, "rejected out-of-range position");
        Self::IndexOutOfRange { index, len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static_assertions::assert_impl_all!(ContainerError: Send, Sync, Copy, std::error::Error);

    #[test]
    fn display() {
        assert_eq!(
            ContainerError::IndexOutOfRange { index: 4, len: 2 }.to_string(),
            "index out of range: the len is 2 but the index is 4",
        );
        assert_eq!(ContainerError::ElementNotFound.to_string(), "element not found");
    }

    #[test]
    fn check_index_bounds() {
        assert!(ContainerError::check_index(0, 1).is_ok());
        assert_eq!(
            ContainerError::check_index(1, 1),
            Err(ContainerError::IndexOutOfRange { index: 1, len: 1 }),
        );
        assert!(ContainerError::check_index(0, 0).is_err());
    }
}
