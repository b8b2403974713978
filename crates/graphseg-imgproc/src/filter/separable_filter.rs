use graphseg_image::{ops::ensure_same_size, Field, FieldSize};
use num_traits::Float;

use super::{FilterError, HalfKernel};
use crate::parallel::{self, ExecutionStrategy};

/// The axis a single convolution pass runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Along each row, across columns.
    Horizontal,
    /// Along each column, across rows.
    Vertical,
}

/// Edge-clamped positions of the `-i` and `+i` taps around `pos` on a line
/// whose last index is `last`.
#[inline]
fn clamped_taps(pos: usize, i: usize, last: usize) -> (usize, usize) {
    (pos.saturating_sub(i), (pos + i).min(last))
}

/// Weighted sum of a symmetric half-kernel centred at `pos` on `line`.
#[inline]
fn convolve_line_at<T: Float>(line: &[T], pos: usize, weights: &[T]) -> T {
    let last = line.len() - 1;

    let mut sum = weights[0] * line[pos];
    for (i, &w) in weights.iter().enumerate().skip(1) {
        let (lo, hi) = clamped_taps(pos, i, last);
        sum = sum + w * (line[lo] + line[hi]);
    }
    sum
}

fn convolve_row<T: Float>(
    src: &[T],
    dst_row: &mut [T],
    r: usize,
    size: FieldSize,
    weights: &[T],
    axis: Axis,
) {
    let (cols, rows) = (size.width, size.height);
    let src_row = |y: usize| &src[y * cols..(y + 1) * cols];

    match axis {
        Axis::Horizontal => {
            let line = src_row(r);
            for (c, out) in dst_row.iter_mut().enumerate() {
                *out = convolve_line_at(line, c, weights);
            }
        }
        Axis::Vertical => {
            // accumulate whole source rows so every read stays contiguous
            for (out, &v) in dst_row.iter_mut().zip(src_row(r)) {
                *out = weights[0] * v;
            }
            for (i, &w) in weights.iter().enumerate().skip(1) {
                let (lo, hi) = clamped_taps(r, i, rows - 1);
                for ((out, &a), &b) in dst_row.iter_mut().zip(src_row(lo)).zip(src_row(hi)) {
                    *out = *out + w * (a + b);
                }
            }
        }
    }
}

/// Convolve a field with a symmetric half-kernel along one axis.
///
/// For [`Axis::Horizontal`] every output sample is
/// `k[0] * src[y, x] + sum_i k[i] * (src[y, x - i] + src[y, x + i])`, with
/// column indices clamped into `[0, W - 1]`. [`Axis::Vertical`] computes the
/// same sum down each column, clamping row indices into `[0, H - 1]`.
///
/// Every sample of `dst` is overwritten; `src` and `kernel` are only read.
///
/// # Arguments
///
/// * `src` - The source field with size (W, H).
/// * `dst` - The destination field with size (W, H).
/// * `kernel` - The half-kernel, centre weight first.
/// * `axis` - The axis to convolve along.
/// * `strategy` - Execution strategy: `Serial`, `Parallel`, `Auto` or `Fixed`.
///
/// # Errors
///
/// Returns an error if `src` and `dst` differ in size, or if a fixed thread
/// pool cannot be built.
pub fn convolve_even_with_strategy<T>(
    src: &Field<T>,
    dst: &mut Field<T>,
    kernel: &HalfKernel<T>,
    axis: Axis,
    strategy: ExecutionStrategy,
) -> Result<(), FilterError>
where
    T: Float + Send + Sync,
{
    ensure_same_size(src, &*dst)?;

    let size = src.size();
    let src_data = src.as_slice();
    let weights = kernel.weights();

    log::trace!(
        "convolve_even: {axis:?} pass over {size} with radius {} ({strategy:?})",
        kernel.radius()
    );

    parallel::for_each_row(strategy, dst.as_slice_mut(), size.width, |r, row| {
        convolve_row(src_data, row, r, size, weights, axis)
    })?;

    Ok(())
}

/// Convolve a field with a symmetric half-kernel along one axis.
///
/// Uses `ExecutionStrategy::Auto`. For explicit control, use
/// [`convolve_even_with_strategy`].
///
/// # Example
///
/// ```
/// use graphseg_image::Field;
/// use graphseg_imgproc::filter::{convolve_even, Axis, HalfKernel};
///
/// let src = Field::new([3, 1].into(), vec![1.0f32, 2.0, 3.0]).unwrap();
/// let mut dst = Field::zeros(src.size()).unwrap();
/// let kernel = HalfKernel::new(vec![0.5, 0.25]).unwrap();
///
/// convolve_even(&src, &mut dst, &kernel, Axis::Horizontal).unwrap();
///
/// assert_eq!(dst.as_slice(), &[1.25, 2.0, 2.75]);
/// ```
pub fn convolve_even<T>(
    src: &Field<T>,
    dst: &mut Field<T>,
    kernel: &HalfKernel<T>,
    axis: Axis,
) -> Result<(), FilterError>
where
    T: Float + Send + Sync,
{
    convolve_even_with_strategy(src, dst, kernel, axis, ExecutionStrategy::Auto)
}
