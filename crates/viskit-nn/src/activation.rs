use viskit_image::Image;

use crate::error::NnError;

/// Rectified linear unit, elementwise `max(v, 0)`.
///
/// # Arguments
///
/// * `src` - The input float image with shape (H, W, C).
/// * `dst` - The output float image with shape (H, W, C).
///
/// # Errors
///
/// Returns [`NnError::InvalidImageSize`] if `src` and `dst` have different
/// dimensions.
///
/// # Examples
///
/// ```
/// use viskit_image::{Image, ImageSize};
/// use viskit_nn::activation::relu;
///
/// let src = Image::<f32, 1>::new(
///     ImageSize { width: 2, height: 1 },
///     vec![-0.5, 0.5],
/// ).unwrap();
///
/// let mut dst = Image::<f32, 1>::from_size_val(src.size(), 0.0).unwrap();
///
/// relu(&src, &mut dst).unwrap();
///
/// assert_eq!(dst.as_slice(), &[0.0, 0.5]);
/// ```
pub fn relu<const C: usize>(src: &Image<f32, C>, dst: &mut Image<f32, C>) -> Result<(), NnError> {
    if src.size() != dst.size() {
        return Err(NnError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    src.as_slice()
        .iter()
        .zip(dst.as_slice_mut().iter_mut())
        .for_each(|(&src_val, dst_val)| {
            *dst_val = src_val.max(0.0);
        });

    Ok(())
}

/// Convert raw scores into probabilities with a numerically stable softmax.
///
/// The maximum score is subtracted before exponentiating so that large
/// scores cannot overflow, then the exponentials are normalized by their
/// sum. The result is invariant under adding a constant to all scores.
///
/// # Arguments
///
/// * `scores` - The raw scores.
/// * `probs` - The output probabilities, one per score.
///
/// # Errors
///
/// Returns [`NnError::EmptyScores`] for an empty score slice and
/// [`NnError::LengthMismatch`] if the output length differs.
///
/// # Examples
///
/// ```
/// use viskit_nn::activation::softmax;
///
/// let scores = [1.0f32, 1.0, 1.0, 1.0];
/// let mut probs = [0.0f32; 4];
///
/// softmax(&scores, &mut probs).unwrap();
///
/// assert_eq!(probs, [0.25; 4]);
/// ```
pub fn softmax(scores: &[f32], probs: &mut [f32]) -> Result<(), NnError> {
    if scores.is_empty() {
        return Err(NnError::EmptyScores);
    }
    if scores.len() != probs.len() {
        return Err(NnError::LengthMismatch(scores.len(), probs.len()));
    }

    let max_score = scores.iter().copied().fold(scores[0], f32::max);

    let mut sum = 0.0f32;
    for (prob, &score) in probs.iter_mut().zip(scores.iter()) {
        *prob = (score - max_score).exp();
        sum += *prob;
    }

    for prob in probs.iter_mut() {
        *prob /= sum;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use viskit_image::{ImageError, ImageSize};

    #[test]
    fn relu_rectifies() -> Result<(), NnError> {
        let src = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![-1.0, 0.0, 2.5, -0.25],
        )
        .unwrap();

        let mut dst = Image::<f32, 1>::from_size_val(src.size(), 9.0).unwrap();

        relu(&src, &mut dst)?;

        assert_eq!(dst.as_slice(), &[0.0, 0.0, 2.5, 0.0]);

        Ok(())
    }

    #[test]
    fn relu_shape_mismatch() -> Result<(), ImageError> {
        let src = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 2,
                height: 1,
            },
            0.0,
        )?;

        let mut dst = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 1,
                height: 2,
            },
            0.0,
        )?;

        let res = relu(&src, &mut dst);
        assert_eq!(res, Err(NnError::InvalidImageSize(2, 1, 1, 2)));

        Ok(())
    }

    #[test]
    fn softmax_normalizes() -> Result<(), NnError> {
        let scores = [1.0f32, 2.0, 3.0];
        let mut probs = [0.0f32; 3];

        softmax(&scores, &mut probs)?;

        let sum: f32 = probs.iter().sum();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-6);
        assert!(probs.iter().all(|&p| p >= 0.0));
        assert!(probs[2] > probs[1] && probs[1] > probs[0]);

        Ok(())
    }

    #[test]
    fn softmax_shift_invariant() -> Result<(), NnError> {
        let scores = [0.5f32, -1.5, 3.0, 0.0];
        let shifted: Vec<f32> = scores.iter().map(|s| s + 100.0).collect();

        let mut probs = [0.0f32; 4];
        let mut probs_shifted = [0.0f32; 4];

        softmax(&scores, &mut probs)?;
        softmax(&shifted, &mut probs_shifted)?;

        for (&a, &b) in probs.iter().zip(probs_shifted.iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-6);
        }

        Ok(())
    }

    #[test]
    fn softmax_large_scores() -> Result<(), NnError> {
        // without the max subtraction these would overflow to infinity
        let scores = [1000.0f32, 1001.0];
        let mut probs = [0.0f32; 2];

        softmax(&scores, &mut probs)?;

        let sum: f32 = probs.iter().sum();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-6);
        assert!(probs[1] > probs[0]);

        Ok(())
    }

    #[test]
    fn softmax_empty() {
        let mut probs = [];
        assert_eq!(softmax(&[], &mut probs), Err(NnError::EmptyScores));
    }

    #[test]
    fn softmax_length_mismatch() {
        let mut probs = [0.0f32; 2];
        assert_eq!(
            softmax(&[1.0, 2.0, 3.0], &mut probs),
            Err(NnError::LengthMismatch(3, 2))
        );
    }
}
