use viskit_image::{Image, ImageError};

use crate::histogram::compute_histogram;

/// Enhance the contrast of an 8-bit grayscale image by histogram equalization.
///
/// Builds the cumulative distribution of the input intensities, takes
/// `cdf_min` as the smallest nonzero cumulative value (the CDF at the darkest
/// occurring intensity) and remaps every pixel `v` to
///
/// ```text
/// round((cdf[v] - cdf_min) * 255 / (n - cdf_min))
/// ```
///
/// where `n` is the number of pixels. A constant (or empty) image has
/// `n == cdf_min`, leaving the remap undefined; in that case the input is
/// copied through unchanged.
///
/// # Arguments
///
/// * `src` - The input grayscale image.
/// * `dst` - The output grayscale image.
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
/// use viskit_imgproc::enhance::enhance_contrast;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize { width: 2, height: 2 },
///     vec![0u8, 0, 100, 200],
/// ).unwrap();
///
/// let mut enhanced = Image::<u8, 1>::from_size_val(image.size(), 0).unwrap();
///
/// enhance_contrast(&image, &mut enhanced).unwrap();
///
/// assert_eq!(enhanced.as_slice(), &[0u8, 0, 128, 255]);
/// ```
pub fn enhance_contrast(src: &Image<u8, 1>, dst: &mut Image<u8, 1>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let mut hist = [0u32; 256];
    compute_histogram(src, &mut hist);

    let mut cdf = [0u32; 256];
    let mut acc = 0u32;
    for (bin, &count) in cdf.iter_mut().zip(hist.iter()) {
        acc += count;
        *bin = acc;
    }

    let num_pixels = acc;
    let cdf_min = cdf.iter().copied().find(|&v| v > 0).unwrap_or(0);

    if num_pixels == cdf_min {
        // constant or empty image: equalization is undefined, pass through
        dst.as_slice_mut().copy_from_slice(src.as_slice());
        return Ok(());
    }

    let scale = 255.0f32 / (num_pixels - cdf_min) as f32;

    src.as_slice()
        .iter()
        .zip(dst.as_slice_mut().iter_mut())
        .for_each(|(&src_val, dst_val)| {
            let stretched = (cdf[src_val as usize] - cdf_min) as f32 * scale;
            *dst_val = stretched.round() as u8;
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use viskit_image::{Image, ImageError, ImageSize};

    #[test]
    fn enhance_contrast_stretches_range() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![100u8, 100, 150, 200],
        )?;

        let mut enhanced = Image::<u8, 1>::from_size_val(image.size(), 0)?;

        super::enhance_contrast(&image, &mut enhanced)?;

        // cdf = [2, 3, 4], cdf_min = 2: the darkest value maps to 0 and the
        // brightest to 255
        assert_eq!(enhanced.as_slice(), &[0u8, 0, 128, 255]);

        Ok(())
    }

    #[test]
    fn enhance_contrast_no_black_pixels() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 4,
                height: 1,
            },
            vec![64u8, 64, 128, 192],
        )?;

        let mut enhanced = Image::<u8, 1>::from_size_val(image.size(), 0)?;

        super::enhance_contrast(&image, &mut enhanced)?;

        // cdf_min comes from the darkest occurring intensity, not bin 0
        assert_eq!(enhanced.as_slice(), &[0u8, 0, 128, 255]);

        Ok(())
    }

    #[test]
    fn enhance_contrast_constant_image() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 3,
                height: 2,
            },
            77,
        )?;

        let mut enhanced = Image::<u8, 1>::from_size_val(image.size(), 0)?;

        super::enhance_contrast(&image, &mut enhanced)?;

        // degenerate histogram: the input passes through unchanged
        assert_eq!(enhanced.as_slice(), image.as_slice());

        Ok(())
    }

    #[test]
    fn enhance_contrast_already_full_range() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![0u8, 255],
        )?;

        let mut enhanced = Image::<u8, 1>::from_size_val(image.size(), 0)?;

        super::enhance_contrast(&image, &mut enhanced)?;

        assert_eq!(enhanced.as_slice(), &[0u8, 255]);

        Ok(())
    }

    #[test]
    fn enhance_contrast_shape_mismatch() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0,
        )?;

        let mut enhanced = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 4,
                height: 4,
            },
            0,
        )?;

        let res = super::enhance_contrast(&image, &mut enhanced);
        assert_eq!(res, Err(ImageError::InvalidImageSize(2, 2, 4, 4)));

        Ok(())
    }
}
