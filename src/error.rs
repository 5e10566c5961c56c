use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappedQueueError {
    /// The initial elements were not unique, so the position map ended up
    /// smaller than the heap array.
    #[error("heap contains duplicate elements ({elements} elements, {distinct} distinct)")]
    Inconsistent { elements: usize, distinct: usize },
    #[error("element is not in the queue")]
    NotFound,
    #[error("replacement element is already in the queue")]
    Duplicate,
    #[error("pop from an empty queue")]
    Empty,
}

pub type Result<T> = std::result::Result<T, MappedQueueError>;

#[cfg(feature = "node")]
impl From<MappedQueueError> for napi::Error {
    fn from(err: MappedQueueError) -> Self {
        let status = match err {
            MappedQueueError::Empty => napi::Status::GenericFailure,
            _ => napi::Status::InvalidArg,
        };
        napi::Error::new(status, err.to_string())
    }
}
