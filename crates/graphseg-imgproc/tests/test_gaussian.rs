use approx::assert_relative_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};

use graphseg_image::{ops::transpose, Field, FieldSize};
use graphseg_imgproc::{
    filter::{
        convolve_even, gaussian_smooth, gaussian_smooth_with_strategy, Axis, FilterError,
        HalfKernel,
    },
    parallel::ExecutionStrategy,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_field(rng: &mut StdRng, size: FieldSize) -> Result<Field<f64>, FilterError> {
    Ok(Field::from_size_fn(size, |_, _| rng.random_range(-10.0..10.0))?)
}

fn random_kernel(rng: &mut StdRng, len: usize) -> Result<HalfKernel<f64>, FilterError> {
    let weights = (0..len).map(|_| rng.random_range(0.1..1.0)).collect();
    Ok(HalfKernel::new(weights)?.normalized()?)
}

#[test]
fn test_identity_kernel_leaves_field_unchanged() -> Result<(), FilterError> {
    init_logger();
    let mut rng = StdRng::seed_from_u64(7);

    for size in [[1, 1], [1, 9], [9, 1], [13, 6]] {
        let src = random_field(&mut rng, size.into())?;
        let mut dst = Field::zeros(src.size())?;
        let mut scratch = Field::zeros(src.size())?;

        gaussian_smooth(&src, &mut dst, &mut scratch, &HalfKernel::identity())?;

        assert_eq!(dst, src);
        assert_eq!(scratch, src);
    }
    Ok(())
}

#[test]
fn test_constant_field_is_preserved() -> Result<(), FilterError> {
    init_logger();
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..20 {
        let size = FieldSize {
            width: rng.random_range(1..24),
            height: rng.random_range(1..24),
        };
        let kernel_len = rng.random_range(1..6);
        let kernel = random_kernel(&mut rng, kernel_len)?;
        let value = rng.random_range(-100.0..100.0);

        let src = Field::from_size_val(size, value)?;
        let mut dst = Field::zeros(size)?;
        let mut scratch = Field::zeros(size)?;

        gaussian_smooth(&src, &mut dst, &mut scratch, &kernel)?;

        for &v in dst.as_slice() {
            assert_relative_eq!(v, value, epsilon = 1e-9, max_relative = 1e-12);
        }
    }
    Ok(())
}

#[test]
fn test_mirrored_input_gives_mirrored_output() -> Result<(), FilterError> {
    let mut rng = StdRng::seed_from_u64(3);
    let size = FieldSize {
        width: 15,
        height: 1,
    };
    let kernel = random_kernel(&mut rng, 4)?;

    let src = random_field(&mut rng, size)?;
    let mut reversed = src.clone();
    reversed.as_slice_mut().reverse();

    let mut out = Field::zeros(size)?;
    let mut out_reversed = Field::zeros(size)?;
    convolve_even(&src, &mut out, &kernel, Axis::Horizontal)?;
    convolve_even(&reversed, &mut out_reversed, &kernel, Axis::Horizontal)?;

    let w = size.width;
    for x in 0..w {
        assert_eq!(out.as_slice()[x], out_reversed.as_slice()[w - 1 - x]);
    }
    Ok(())
}

#[test]
fn test_smoothing_matches_transposed_row_passes() -> Result<(), FilterError> {
    init_logger();
    let mut rng = StdRng::seed_from_u64(23);
    let size = FieldSize {
        width: 19,
        height: 8,
    };
    let src = random_field(&mut rng, size)?;
    let kernel = random_kernel(&mut rng, 3)?;

    let mut dst = Field::zeros(size)?;
    let mut scratch = Field::zeros(size)?;
    gaussian_smooth(&src, &mut dst, &mut scratch, &kernel)?;

    // rows, transpose, rows again, transpose back
    let mut rows = Field::zeros(size)?;
    convolve_even(&src, &mut rows, &kernel, Axis::Horizontal)?;
    assert_eq!(rows, scratch);

    let mut transposed = Field::zeros(size.transposed())?;
    transpose(&rows, &mut transposed)?;
    let mut transposed_out = Field::zeros(size.transposed())?;
    convolve_even(&transposed, &mut transposed_out, &kernel, Axis::Horizontal)?;
    let mut expected = Field::zeros(size)?;
    transpose(&transposed_out, &mut expected)?;

    assert_eq!(dst, expected);
    Ok(())
}

#[test]
fn test_strategies_agree() -> Result<(), FilterError> {
    init_logger();
    let mut rng = StdRng::seed_from_u64(5);
    let size = FieldSize {
        width: 400,
        height: 260,
    };
    let src = random_field(&mut rng, size)?;
    let kernel = random_kernel(&mut rng, 5)?;

    let mut reference = Field::zeros(size)?;
    let mut scratch = Field::zeros(size)?;
    gaussian_smooth_with_strategy(
        &src,
        &mut reference,
        &mut scratch,
        &kernel,
        ExecutionStrategy::Serial,
    )?;

    for strategy in [
        ExecutionStrategy::Parallel,
        ExecutionStrategy::Auto,
        ExecutionStrategy::Fixed(4),
    ] {
        let mut dst = Field::zeros(size)?;
        gaussian_smooth_with_strategy(&src, &mut dst, &mut scratch, &kernel, strategy)?;
        assert_eq!(dst, reference);
    }
    Ok(())
}

#[test]
fn test_concrete_single_pass() -> Result<(), FilterError> {
    let src = Field::new([3, 1].into(), vec![1.0f64, 2.0, 3.0])?;
    let mut dst = Field::zeros(src.size())?;
    let kernel = HalfKernel::new(vec![0.5, 0.25])?;

    convolve_even(&src, &mut dst, &kernel, Axis::Horizontal)?;

    assert_eq!(dst.as_slice(), &[1.25, 2.0, 2.75]);
    Ok(())
}
