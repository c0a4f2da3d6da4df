use viskit_image::Image;

/// Kernel for bilinear interpolation with a zero-pad boundary policy.
///
/// `(u, v)` is a continuous source coordinate with the center of pixel
/// `(i, j)` at `(i + 0.5, j + 0.5)`. The four integer-lattice neighbors of
/// the coordinate are weighted by the products of their axis-aligned
/// fractional distances from it; a neighbor lying outside the image
/// contributes zero for every channel.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `u` - The x coordinate of the position to interpolate.
/// * `v` - The y coordinate of the position to interpolate.
///
/// # Returns
///
/// The interpolated pixel values, one per channel.
pub fn bilinear_sample<T, const C: usize>(src: &Image<T, C>, u: f32, v: f32) -> [f32; C]
where
    T: Copy + Into<f32>,
{
    let (cols, rows) = (src.cols() as i64, src.rows() as i64);

    let x0f = (u - 0.5).floor();
    let y0f = (v - 0.5).floor();

    let frac_u = (u - 0.5) - x0f;
    let frac_v = (v - 0.5) - y0f;

    let x0 = x0f as i64;
    let y0 = y0f as i64;
    let x1 = x0 + 1;
    let y1 = y0 + 1;

    let w00 = (1.0 - frac_u) * (1.0 - frac_v);
    let w01 = frac_u * (1.0 - frac_v);
    let w10 = (1.0 - frac_u) * frac_v;
    let w11 = frac_u * frac_v;

    let data = src.as_slice();
    let mut pixel = [0.0f32; C];

    let mut accumulate = |x: i64, y: i64, w: f32| {
        if x >= 0 && x < cols && y >= 0 && y < rows {
            let base = (y as usize * cols as usize + x as usize) * C;
            for (k, p) in pixel.iter_mut().enumerate() {
                *p += w * data[base + k].into();
            }
        }
    };

    accumulate(x0, y0, w00);
    accumulate(x1, y0, w01);
    accumulate(x0, y1, w10);
    accumulate(x1, y1, w11);

    pixel
}
