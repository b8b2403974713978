/// An error type for the field module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FieldError {
    /// Error when the data length does not match the field size.
    #[error("Data length ({0}) does not match the field size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when the field has no rows or no columns.
    #[error("Field size must be non-zero, got {0}x{1}")]
    ZeroSizedField(usize, usize),

    /// Error when `width * height` does not fit in `usize`.
    #[error("Field size {0}x{1} overflows the addressable element count")]
    SizeOverflow(usize, usize),

    /// Error when two fields are expected to share the same size.
    #[error("Invalid field size: ({0}, {1}) does not match ({2}, {3})")]
    InvalidFieldSize(usize, usize, usize, usize),

    /// Error when an element index is out of bounds.
    #[error("Index ({0}, {1}) is out of bounds for a {2}x{3} field")]
    IndexOutOfBounds(usize, usize, usize, usize),
}
