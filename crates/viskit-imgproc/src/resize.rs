use viskit_image::{Image, ImageError, ImageSize};

use crate::interpolation::bilinear_sample;

/// Crop a region out of an image and rescale it into the destination.
///
/// The crop window starts at `left_top` in source pixels and spans
/// `crop_size`; both may reach outside the source, in which case the
/// out-of-bounds samples contribute zero (see
/// [`bilinear_sample`](crate::interpolation::bilinear_sample)).
///
/// Downscaling is anti-aliased by oversampling: an integer decimation factor
/// `dsf = max(ceil(crop.w / dst.w), ceil(crop.h / dst.h))` conceptually
/// enlarges the destination to `dst.w * dsf x dst.h * dsf`, one bilinear
/// sample is taken per enlarged sub-pixel, and each destination pixel is the
/// average over its `dsf x dsf` block. Skipping the oversampling would alias
/// on any crop larger than the destination, so it is a correctness
/// requirement rather than an optimization. A uniform crop region comes out
/// at exactly its color.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
/// * `dst` - The output image, fully overwritten.
/// * `left_top` - The top-left corner of the crop window in source pixels.
/// * `crop_size` - The extent of the crop window in source pixels.
///
/// # Errors
///
/// Returns [`ImageError::InvalidCropSize`] if `crop_size` has a zero
/// dimension.
///
/// # Example
///
/// ```
/// use viskit_image::{Image, ImageSize};
/// use viskit_imgproc::resize::crop_rescale;
///
/// let src = Image::<u8, 1>::from_size_val(
///     ImageSize { width: 8, height: 8 },
///     42,
/// ).unwrap();
///
/// let mut dst = Image::<u8, 1>::from_size_val(
///     ImageSize { width: 2, height: 2 },
///     0,
/// ).unwrap();
///
/// crop_rescale(&src, &mut dst, (2, 2), ImageSize { width: 4, height: 4 }).unwrap();
///
/// assert_eq!(dst.as_slice(), &[42u8; 4]);
/// ```
pub fn crop_rescale<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    left_top: (i64, i64),
    crop_size: ImageSize,
) -> Result<(), ImageError> {
    if crop_size.width == 0 || crop_size.height == 0 {
        return Err(ImageError::InvalidCropSize(
            crop_size.width,
            crop_size.height,
        ));
    }

    let (dst_cols, dst_rows) = (dst.cols(), dst.rows());
    if dst_cols == 0 || dst_rows == 0 {
        return Ok(());
    }

    let dsf_w = crop_size.width.div_ceil(dst_cols);
    let dsf_h = crop_size.height.div_ceil(dst_rows);
    let dsf = dsf_w.max(dsf_h);

    let enlarged_w = (dst_cols * dsf) as f32;
    let enlarged_h = (dst_rows * dsf) as f32;
    let (crop_w, crop_h) = (crop_size.width as f32, crop_size.height as f32);
    let (left, top) = (left_top.0 as f32, left_top.1 as f32);

    let inv_block = 1.0 / (dsf * dsf) as f32;

    let dst_data = dst.as_slice_mut();

    for y in 0..dst_rows {
        for x in 0..dst_cols {
            let mut acc = [0.0f32; C];

            for y1 in dsf * y..dsf * (y + 1) {
                for x1 in dsf * x..dsf * (x + 1) {
                    let u = (x1 as f32 + 0.5) / enlarged_w * crop_w + left;
                    let v = (y1 as f32 + 0.5) / enlarged_h * crop_h + top;

                    let pixel = bilinear_sample(src, u, v);
                    for (a, &p) in acc.iter_mut().zip(pixel.iter()) {
                        *a += p;
                    }
                }
            }

            let base = (y * dst_cols + x) * C;
            for (k, &a) in acc.iter().enumerate() {
                dst_data[base + k] = (a * inv_block).round() as u8;
            }
        }
    }

    Ok(())
}
