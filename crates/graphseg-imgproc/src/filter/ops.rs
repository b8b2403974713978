use graphseg_image::{ops::ensure_same_size, Field};
use num_traits::Float;

use super::{convolve_even_with_strategy, Axis, FilterError, HalfKernel};
use crate::parallel::{self, ExecutionStrategy};

/// Smooth a field with a separable symmetric Gaussian mask.
///
/// Runs a horizontal pass from `src` into `scratch`, then a vertical pass from
/// `scratch` into `dst`, with the same half-kernel for both passes. On return
/// `dst` holds the 2D smoothed field and `scratch` the horizontal intermediate.
///
/// # Arguments
///
/// * `src` - The source field with size (W, H).
/// * `dst` - The destination field with size (W, H).
/// * `scratch` - Caller-owned intermediate buffer with size (W, H).
/// * `kernel` - The half-kernel, centre weight first.
/// * `strategy` - Execution strategy applied to both passes.
///
/// # Errors
///
/// Returns an error before writing anything if the three fields differ in size
/// or if a [`ExecutionStrategy::Fixed`] pool cannot be built.
pub fn gaussian_smooth_with_strategy<T>(
    src: &Field<T>,
    dst: &mut Field<T>,
    scratch: &mut Field<T>,
    kernel: &HalfKernel<T>,
    strategy: ExecutionStrategy,
) -> Result<(), FilterError>
where
    T: Float + Send + Sync,
{
    ensure_same_size(src, &*dst)?;
    ensure_same_size(src, &*scratch)?;

    log::debug!(
        "gaussian_smooth: {} with radius {} ({strategy:?})",
        src.size(),
        kernel.radius()
    );

    let mut run_passes = |strategy: ExecutionStrategy| -> Result<(), FilterError> {
        convolve_even_with_strategy(src, scratch, kernel, Axis::Horizontal, strategy)?;
        convolve_even_with_strategy(scratch, dst, kernel, Axis::Vertical, strategy)?;
        Ok(())
    };

    match strategy {
        // one pool serves both passes
        ExecutionStrategy::Fixed(n) => {
            let pool = parallel::build_thread_pool(n)?;
            pool.install(|| run_passes(ExecutionStrategy::Parallel))
        }
        _ => run_passes(strategy),
    }
}

/// Smooth a field with a separable symmetric Gaussian mask.
///
/// Uses `ExecutionStrategy::Auto`. For explicit control, use
/// [`gaussian_smooth_with_strategy`].
///
/// # Example
///
/// ```
/// use graphseg_image::Field;
/// use graphseg_imgproc::filter::{gaussian_smooth, HalfKernel};
///
/// let src = Field::from_size_val([4, 4].into(), 2.0f64).unwrap();
/// let mut dst = Field::zeros(src.size()).unwrap();
/// let mut scratch = Field::zeros(src.size()).unwrap();
/// let kernel = HalfKernel::new(vec![0.5, 0.25]).unwrap();
///
/// gaussian_smooth(&src, &mut dst, &mut scratch, &kernel).unwrap();
///
/// assert!(dst.as_slice().iter().all(|&v| (v - 2.0).abs() < 1e-12));
/// ```
pub fn gaussian_smooth<T>(
    src: &Field<T>,
    dst: &mut Field<T>,
    scratch: &mut Field<T>,
    kernel: &HalfKernel<T>,
) -> Result<(), FilterError>
where
    T: Float + Send + Sync,
{
    gaussian_smooth_with_strategy(src, dst, scratch, kernel, ExecutionStrategy::Auto)
}
