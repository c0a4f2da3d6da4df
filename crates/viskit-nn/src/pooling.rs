use viskit_image::Image;

use crate::error::NnError;

/// 2x2 max pooling with stride 2.
///
/// Each output pixel is the per-channel maximum over its corresponding
/// disjoint 2x2 input block. The output must be exactly half the input size
/// by integer division; a remainder row or column from odd input dimensions
/// is silently dropped.
///
/// # Arguments
///
/// * `src` - The input float image with shape (H, W, C).
/// * `dst` - The output float image with shape (H/2, W/2, C).
///
/// # Errors
///
/// Returns [`NnError::InvalidPoolOutputSize`] if the output is not half the
/// input size.
///
/// # Examples
///
/// ```
/// use viskit_image::{Image, ImageSize};
/// use viskit_nn::pooling::max_pool2;
///
/// let src = Image::<f32, 1>::new(
///     ImageSize { width: 2, height: 2 },
///     vec![1.0, 3.0, 2.0, 0.0],
/// ).unwrap();
///
/// let mut dst = Image::<f32, 1>::from_size_val(
///     ImageSize { width: 1, height: 1 },
///     0.0,
/// ).unwrap();
///
/// max_pool2(&src, &mut dst).unwrap();
///
/// assert_eq!(dst.as_slice(), &[3.0]);
/// ```
pub fn max_pool2<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
) -> Result<(), NnError> {
    let out_w = src.width() / 2;
    let out_h = src.height() / 2;
    if dst.width() != out_w || dst.height() != out_h {
        return Err(NnError::InvalidPoolOutputSize(
            dst.width(),
            dst.height(),
            out_w,
            out_h,
        ));
    }

    let src_cols = src.cols();
    let src_data = src.as_slice();
    let dst_data = dst.as_slice_mut();

    for y in 0..out_h {
        for x in 0..out_w {
            for c in 0..C {
                let mut val = src_data[(2 * y * src_cols + 2 * x) * C + c];
                for y1 in 2 * y..2 * y + 2 {
                    for x1 in 2 * x..2 * x + 2 {
                        let new_val = src_data[(y1 * src_cols + x1) * C + c];
                        if new_val > val {
                            val = new_val;
                        }
                    }
                }
                dst_data[(y * out_w + x) * C + c] = val;
            }
        }
    }

    Ok(())
}
