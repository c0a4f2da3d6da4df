use viskit_image::{Image, ImageError};

/// Convert an 8-bit image into a float image centered around zero.
///
/// Applies the transformation `(pixel - 127) / 128` to every element, mapping
/// the 8-bit range onto approximately `[-1, 1)`: the value 0 becomes
/// `-0.9921875` and 255 becomes exactly `1.0`. The mapping is not symmetric
/// around zero. The destination is fully overwritten.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
/// * `dst` - The output float image with shape (H, W, C).
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if `src` and `dst` have different
/// dimensions.
///
/// # Examples
///
/// ```
/// use viskit_image::{Image, ImageSize};
/// use viskit_imgproc::normalize::normalize;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize { width: 2, height: 1 },
///     vec![127u8, 255],
/// ).unwrap();
///
/// let mut normalized = Image::<f32, 1>::from_size_val(image.size(), 0.0).unwrap();
///
/// normalize(&image, &mut normalized).unwrap();
///
/// assert_eq!(normalized.as_slice(), &[0.0, 1.0]);
/// ```
pub fn normalize<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<f32, C>,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
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
            *dst_val = (src_val as f32 - 127.0) / 128.0;
        });

    Ok(())
}
