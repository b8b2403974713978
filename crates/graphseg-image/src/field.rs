use num_traits::Zero;

use crate::error::FieldError;

/// Field size in samples
///
/// A struct to represent the size of a field in samples.
///
/// # Examples
///
/// ```
/// use graphseg_image::FieldSize;
///
/// let size = FieldSize {
///     width: 10,
///     height: 20,
/// };
///
/// assert_eq!(size.width, 10);
/// assert_eq!(size.height, 20);
/// assert_eq!(size.num_elements(), 200);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldSize {
    /// Width of the field in samples
    pub width: usize,
    /// Height of the field in samples
    pub height: usize,
}

impl FieldSize {
    /// Number of samples covered by this size, saturating at `usize::MAX`.
    pub fn num_elements(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Number of samples covered by this size, or `None` on overflow.
    pub fn checked_num_elements(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    /// The size with width and height swapped.
    pub fn transposed(&self) -> Self {
        FieldSize {
            width: self.height,
            height: self.width,
        }
    }
}

impl std::fmt::Display for FieldSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "FieldSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for FieldSize {
    fn from(size: [usize; 2]) -> Self {
        FieldSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Checks that both dimensions are non-zero and returns the element count.
fn validate_size(size: FieldSize) -> Result<usize, FieldError> {
    if size.width == 0 || size.height == 0 {
        return Err(FieldError::ZeroSizedField(size.width, size.height));
    }
    size.checked_num_elements().ok_or(FieldError::SizeOverflow(size.width, size.height))
}

/// A rectangular grid of real-valued samples.
///
/// The samples live in a single contiguous row-major buffer of length
/// `width * height`, where the sample at column `x` and row `y` is stored
/// at `y * width + x`. Both dimensions are at least one.
#[derive(Clone, Debug, PartialEq)]
pub struct Field<T> {
    size: FieldSize,
    data: Vec<T>,
}

impl<T> Field<T> {
    /// Create a new field from sample data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the field in samples.
    /// * `data` - The row-major sample data.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero, if `width * height`
    /// overflows, or if the data length does not match `width * height`.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphseg_image::{Field, FieldSize};
    ///
    /// let field = Field::new(
    ///     FieldSize {
    ///         width: 3,
    ///         height: 2,
    ///     },
    ///     vec![0.0f32; 6],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(field.cols(), 3);
    /// assert_eq!(field.rows(), 2);
    /// ```
    pub fn new(size: FieldSize, data: Vec<T>) -> Result<Self, FieldError> {
        let num_elements = validate_size(size)?;

        if data.len() != num_elements {
            return Err(FieldError::InvalidDataLength(data.len(), num_elements));
        }

        Ok(Self { size, data })
    }

    /// Create a new field with every sample set to `val`.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphseg_image::Field;
    ///
    /// let field = Field::from_size_val([4, 3].into(), 0.5f64).unwrap();
    /// assert!(field.as_slice().iter().all(|&v| v == 0.5));
    /// ```
    pub fn from_size_val(size: FieldSize, val: T) -> Result<Self, FieldError>
    where
        T: Clone,
    {
        let num_elements = validate_size(size)?;
        Self::new(size, vec![val; num_elements])
    }

    /// Create a new field filled with zeros.
    pub fn zeros(size: FieldSize) -> Result<Self, FieldError>
    where
        T: Clone + Zero,
    {
        Self::from_size_val(size, T::zero())
    }

    /// Create a new field by evaluating `f(x, y)` at every sample position.
    ///
    /// Samples are generated in row-major order.
    pub fn from_size_fn<F>(size: FieldSize, mut f: F) -> Result<Self, FieldError>
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(validate_size(size)?);
        for y in 0..size.height {
            for x in 0..size.width {
                data.push(f(x, y));
            }
        }
        Self::new(size, data)
    }

    /// The size of the field.
    pub fn size(&self) -> FieldSize {
        self.size
    }

    /// The width of the field in samples.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// The height of the field in samples.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// The number of columns, same as [`Field::width`].
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// The number of rows, same as [`Field::height`].
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// The samples as a row-major slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The samples as a mutable row-major slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the field and return its sample buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get a reference to the sample at column `x` and row `y`.
    ///
    /// # Errors
    ///
    /// Returns an error if the position lies outside the field.
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<&T, FieldError> {
        let idx = self.index(x, y)?;
        Ok(&self.data[idx])
    }

    /// Set the sample at column `x` and row `y`.
    ///
    /// # Errors
    ///
    /// Returns an error if the position lies outside the field.
    pub fn set_pixel(&mut self, x: usize, y: usize, val: T) -> Result<(), FieldError> {
        let idx = self.index(x, y)?;
        self.data[idx] = val;
        Ok(())
    }

    /// Get one row of the field as a slice.
    pub fn row(&self, y: usize) -> Option<&[T]> {
        if y >= self.rows() {
            return None;
        }
        let start = y * self.cols();
        Some(&self.data[start..start + self.cols()])
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, FieldError> {
        if x >= self.cols() || y >= self.rows() {
            return Err(FieldError::IndexOutOfBounds(
                x,
                y,
                self.cols(),
                self.rows(),
            ));
        }
        Ok(y * self.cols() + x)
    }
}
