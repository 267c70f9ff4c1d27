use thiserror::Error;

/// Convenient result alias for the waygraph library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Argument-validity errors describe inputs that are malformed on their own
/// terms (mismatched key arrays, a negative tolerance). Bounds errors describe
/// well-formed inputs whose requested view exceeds a buffer's capacity.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when paired key arrays differ in length.
    #[error("key arrays must have equal lengths ({left} vs {right})")]
    KeyLengthMismatch { left: usize, right: usize },

    /// Raised when a sort is requested over more elements than a key array holds.
    #[error("sort length {requested} exceeds key array length {available}")]
    SortLengthExceedsKeys { requested: usize, available: usize },

    /// Raised when an order array is longer than the array it gathers from.
    #[error("order length {order} exceeds array length {array}")]
    OrderLongerThanArray { order: usize, array: usize },

    /// Raised when a logical length exceeds the physical capacity of a buffer.
    #[error("logical length {requested} exceeds buffer capacity {capacity}")]
    LengthExceedsCapacity { requested: usize, capacity: usize },

    /// Raised when a heading tolerance below zero degrees is requested.
    #[error("heading tolerance must be non-negative, got {value}")]
    NegativeTolerance { value: f64 },
}
