use viskit_image::Image;

use crate::error::NnError;
use crate::filter::Filter;

/// Valid 2D convolution with unit stride and no padding.
///
/// For every output position and output channel, sums the element-wise
/// product of the filter window and the corresponding input window over all
/// spatial offsets and input channels. No bias is added; see [`add_bias`].
///
/// The channel counts are tied at the type level; the spatial sizes must
/// satisfy the valid-convolution size law
/// `dst.w == src.w - filt.w + 1`, `dst.h == src.h - filt.h + 1`, which is
/// checked before any output is written.
///
/// # Arguments
///
/// * `src` - The input float image with shape (H, W, CI).
/// * `filt` - The filter weights with shape (FH, FW, CI, CO).
/// * `dst` - The output float image with shape (H-FH+1, W-FW+1, CO).
///
/// # Errors
///
/// Returns [`NnError::InvalidFilterSize`] if the filter window exceeds the
/// input, and [`NnError::InvalidConvOutputSize`] if the output is not sized
/// per the valid size law.
///
/// # Examples
///
/// ```
/// use viskit_image::{Image, ImageSize};
/// use viskit_nn::conv::conv2d_valid;
/// use viskit_nn::filter::Filter;
///
/// let src = Image::<f32, 1>::from_size_val(
///     ImageSize { width: 5, height: 5 },
///     1.0,
/// ).unwrap();
///
/// // a 3x3 box filter
/// let filt = Filter::<1, 1>::new(3, 3, vec![1.0; 9]).unwrap();
///
/// let mut dst = Image::<f32, 1>::from_size_val(
///     ImageSize { width: 3, height: 3 },
///     0.0,
/// ).unwrap();
///
/// conv2d_valid(&src, &filt, &mut dst).unwrap();
///
/// assert_eq!(dst.as_slice(), &[9.0f32; 9]);
/// ```
pub fn conv2d_valid<const CI: usize, const CO: usize>(
    src: &Image<f32, CI>,
    filt: &Filter<CI, CO>,
    dst: &mut Image<f32, CO>,
) -> Result<(), NnError> {
    if filt.width() > src.width() || filt.height() > src.height() {
        return Err(NnError::InvalidFilterSize(
            filt.width(),
            filt.height(),
            src.width(),
            src.height(),
        ));
    }

    let out_w = src.width() - filt.width() + 1;
    let out_h = src.height() - filt.height() + 1;
    if dst.width() != out_w || dst.height() != out_h {
        return Err(NnError::InvalidConvOutputSize(
            dst.width(),
            dst.height(),
            out_w,
            out_h,
        ));
    }

    let src_cols = src.cols();
    let (filt_h, filt_w) = (filt.height(), filt.width());

    let src_data = src.as_slice();
    let filt_data = filt.as_slice();
    let dst_data = dst.as_slice_mut();

    for yo in 0..out_h {
        for xo in 0..out_w {
            for co in 0..CO {
                let mut sum = 0.0f32;
                for yf in 0..filt_h {
                    for xf in 0..filt_w {
                        let src_base = ((yo + yf) * src_cols + (xo + xf)) * CI;
                        let filt_base = ((yf * filt_w + xf) * CI) * CO;
                        for ci in 0..CI {
                            sum += src_data[src_base + ci] * filt_data[filt_base + ci * CO + co];
                        }
                    }
                }
                dst_data[(yo * out_w + xo) * CO + co] = sum;
            }
        }
    }

    Ok(())
}

/// Add a per-channel bias to every pixel of an image, in place.
///
/// # Arguments
///
/// * `img` - The image to add the biases to.
/// * `biases` - One bias per channel; channel `c` receives `biases[c]`.
///
/// # Examples
///
/// ```
/// use viskit_image::{Image, ImageSize};
/// use viskit_nn::conv::add_bias;
///
/// let mut img = Image::<f32, 2>::from_size_val(
///     ImageSize { width: 2, height: 1 },
///     1.0,
/// ).unwrap();
///
/// add_bias(&mut img, &[0.5, -1.0]);
///
/// assert_eq!(img.as_slice(), &[1.5, 0.0, 1.5, 0.0]);
/// ```
pub fn add_bias<const C: usize>(img: &mut Image<f32, C>, biases: &[f32; C]) {
    img.as_slice_mut().chunks_exact_mut(C).for_each(|pixel| {
        pixel
            .iter_mut()
            .zip(biases.iter())
            .for_each(|(val, &bias)| *val += bias);
    });
}
