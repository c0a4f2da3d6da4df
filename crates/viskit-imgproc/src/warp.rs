use viskit_image::Image;

use crate::interpolation::bilinear_sample;

/// Apply an inverse affine warp to an image.
///
/// Every destination pixel `(ix, iy)` is mapped to a normalized coordinate
/// `(x, y) = ((ix + 0.5) / dst.w, (iy + 0.5) / dst.h)`, transformed by the
/// 2x2 matrix `theta` (row-major `[t00, t01, t10, t11]`) plus a translation
/// equal to the normalized `src_offset`, scaled back into source pixel space
/// and bilinear-sampled per channel:
///
/// ```text
/// dst[ix, iy] = src(theta * (x, y) + src_offset / src_size)
/// ```
///
/// With `theta = [1, 0, 0, 1]` and `src_offset = (0, 0)` the warp is the
/// identity, and `dst[0, 0]` samples the source pixel at `src_offset` for any
/// offset. Samples whose lattice neighbors fall outside the source contribute
/// zero (see [`bilinear_sample`]); the destination is always fully written,
/// so regions mapping outside the source come out black.
///
/// Source and destination sizes are independent; there is no precondition to
/// violate and the operation cannot fail.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
/// * `dst` - The output image, fully overwritten.
/// * `theta` - The 2x2 transform matrix, row-major.
/// * `src_offset` - The source pixel that `dst[0, 0]` maps to.
///
/// # Example
///
/// ```
/// use viskit_image::{Image, ImageSize};
/// use viskit_imgproc::warp::warp_affine;
///
/// let src = Image::<u8, 1>::new(
///     ImageSize { width: 2, height: 2 },
///     vec![1u8, 2, 3, 4],
/// ).unwrap();
///
/// let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0).unwrap();
///
/// warp_affine(&src, &mut dst, &[1.0, 0.0, 0.0, 1.0], (0, 0));
///
/// assert_eq!(dst.as_slice(), src.as_slice());
/// ```
pub fn warp_affine<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    theta: &[f32; 4],
    src_offset: (i64, i64),
) {
    let (src_w, src_h) = (src.cols() as f32, src.rows() as f32);
    let (dst_cols, dst_rows) = (dst.cols(), dst.rows());
    let (dst_w, dst_h) = (dst_cols as f32, dst_rows as f32);

    let offset_x = src_offset.0 as f32 / src_w;
    let offset_y = src_offset.1 as f32 / src_h;

    let dst_data = dst.as_slice_mut();

    for iy in 0..dst_rows {
        for ix in 0..dst_cols {
            let x = (ix as f32 + 0.5) / dst_w;
            let y = (iy as f32 + 0.5) / dst_h;

            let u = (theta[0] * x + theta[1] * y + offset_x) * src_w;
            let v = (theta[2] * x + theta[3] * y + offset_y) * src_h;

            let pixel = bilinear_sample(src, u, v);

            let base = (iy * dst_cols + ix) * C;
            for (k, &val) in pixel.iter().enumerate() {
                dst_data[base + k] = val.round() as u8;
            }
        }
    }
}
