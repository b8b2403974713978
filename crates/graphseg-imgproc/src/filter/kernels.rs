use num_traits::Float;

/// Errors raised when building or normalizing a kernel.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum KernelError {
    /// The kernel has no weights.
    #[error("Kernel must have at least one weight")]
    EmptyKernel,

    /// A full mask must have an odd number of taps.
    #[error("Full mask length must be odd, got {0}")]
    EvenMaskLength(usize),

    /// A full mask is not mirrored around its centre.
    #[error("Full mask is not symmetric at offset {0}")]
    AsymmetricMask(usize),

    /// The kernel weights sum to zero and cannot be normalized.
    #[error("Kernel weights sum to zero")]
    ZeroSum,

    /// The kernel weights sum to NaN or infinity and cannot be normalized.
    #[error("Kernel weights sum to a non-finite value")]
    NonFiniteSum,
}

/// Half of a symmetric 1D convolution mask.
///
/// `weights()[0]` is the centre weight and `weights()[i]` is applied to both
/// the `-i` and `+i` neighbours, so a half-kernel of length `R + 1` stands for
/// a full mask of `2R + 1` taps.
///
/// # Examples
///
/// ```
/// use graphseg_imgproc::filter::HalfKernel;
///
/// let kernel = HalfKernel::new(vec![0.5f32, 0.25]).unwrap();
/// assert_eq!(kernel.radius(), 1);
/// assert_eq!(kernel.to_full_mask(), vec![0.25, 0.5, 0.25]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HalfKernel<T> {
    weights: Vec<T>,
}

impl<T: Float> HalfKernel<T> {
    /// Create a half-kernel from precomputed weights, centre first.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::EmptyKernel`] if `weights` is empty.
    pub fn new(weights: Vec<T>) -> Result<Self, KernelError> {
        if weights.is_empty() {
            return Err(KernelError::EmptyKernel);
        }
        Ok(Self { weights })
    }

    /// The single-weight kernel `[1]`, which leaves a field unchanged.
    pub fn identity() -> Self {
        Self {
            weights: vec![T::one()],
        }
    }

    /// Create a half-kernel from an odd-length symmetric full mask.
    ///
    /// # Errors
    ///
    /// Returns an error if the mask is empty, has an even length, or if any
    /// pair of mirrored taps differs by more than the type's relative epsilon.
    pub fn from_full_mask(mask: &[T]) -> Result<Self, KernelError> {
        if mask.is_empty() {
            return Err(KernelError::EmptyKernel);
        }
        if mask.len() % 2 == 0 {
            return Err(KernelError::EvenMaskLength(mask.len()));
        }

        let center = mask.len() / 2;
        for i in 1..=center {
            let (lo, hi) = (mask[center - i], mask[center + i]);
            let scale = lo.abs().max(hi.abs()).max(T::one());
            if (lo - hi).abs() > T::epsilon() * scale {
                return Err(KernelError::AsymmetricMask(i));
            }
        }

        Ok(Self {
            weights: mask[center..].to_vec(),
        })
    }

    /// The weights, centre first.
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Number of stored weights, `radius() + 1`.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always false; a half-kernel holds at least the centre weight.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// The mask radius.
    pub fn radius(&self) -> usize {
        self.weights.len() - 1
    }

    /// Total weight of the full mask, `w[0] + 2 * (w[1] + ... + w[R])`.
    pub fn sum(&self) -> T {
        let two = T::one() + T::one();
        let taps = self.weights[1..]
            .iter()
            .fold(T::zero(), |acc, &w| acc + w);
        self.weights[0] + two * taps
    }

    /// Rescale the weights so that the full mask sums to one.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::ZeroSum`] if the full mask sums to zero and
    /// [`KernelError::NonFiniteSum`] if it sums to NaN or infinity. The weights
    /// are left untouched on error.
    pub fn normalize(&mut self) -> Result<(), KernelError> {
        let total = self.sum();
        if !total.is_finite() {
            return Err(KernelError::NonFiniteSum);
        }
        if total == T::zero() {
            return Err(KernelError::ZeroSum);
        }
        self.weights.iter_mut().for_each(|w| *w = *w / total);
        Ok(())
    }

    /// Consume the kernel and return a normalized copy.
    pub fn normalized(mut self) -> Result<Self, KernelError> {
        self.normalize()?;
        Ok(self)
    }

    /// Expand into the full `2R + 1` tap mask.
    pub fn to_full_mask(&self) -> Vec<T> {
        self.weights
            .iter()
            .skip(1)
            .rev()
            .chain(self.weights.iter())
            .copied()
            .collect()
    }
}
