use crate::{Field, FieldError};

/// Check that two fields share the same size.
///
/// # Errors
///
/// Returns [`FieldError::InvalidFieldSize`] carrying both sizes when they differ.
pub fn ensure_same_size<T, U>(a: &Field<T>, b: &Field<U>) -> Result<(), FieldError> {
    if a.size() != b.size() {
        return Err(FieldError::InvalidFieldSize(
            a.width(),
            a.height(),
            b.width(),
            b.height(),
        ));
    }
    Ok(())
}

/// Transpose a field, swapping rows and columns.
///
/// # Arguments
///
/// * `src` - The source field with size (W, H).
/// * `dst` - The destination field with size (H, W).
///
/// Example:
///
/// ```
/// use graphseg_image::Field;
/// use graphseg_image::ops::transpose;
///
/// let src = Field::new([3, 1].into(), vec![1.0f32, 2.0, 3.0]).unwrap();
/// let mut dst = Field::zeros([1, 3].into()).unwrap();
///
/// transpose(&src, &mut dst).unwrap();
///
/// assert_eq!(dst.get_pixel(0, 2).unwrap(), &3.0);
/// ```
pub fn transpose<T: Copy>(src: &Field<T>, dst: &mut Field<T>) -> Result<(), FieldError> {
    if dst.size() != src.size().transposed() {
        return Err(FieldError::InvalidFieldSize(
            src.height(),
            src.width(),
            dst.width(),
            dst.height(),
        ));
    }

    let cols = src.cols();
    let rows = src.rows();
    let src_data = src.as_slice();
    let dst_data = dst.as_slice_mut();

    for (y, src_row) in src_data.chunks_exact(cols).enumerate() {
        for (x, &v) in src_row.iter().enumerate() {
            dst_data[x * rows + y] = v;
        }
    }

    Ok(())
}
