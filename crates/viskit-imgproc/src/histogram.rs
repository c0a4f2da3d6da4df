use viskit_image::Image;

/// Compute the 256-bin intensity histogram of an 8-bit grayscale image.
///
/// The counts are accumulated into `hist`, so a zeroed array yields the plain
/// histogram and repeated calls aggregate over several images.
///
/// # Arguments
///
/// * `src` - The input image to compute the histogram of.
/// * `hist` - The output histogram, one bin per intensity level.
///
/// # Example
///
/// ```
/// use viskit_image::{Image, ImageSize};
/// use viskit_imgproc::histogram::compute_histogram;
///
/// let image = Image::<u8, 1>::new(
///   ImageSize {
///     width: 3,
///     height: 1,
///   },
///   vec![0, 128, 255],
/// ).unwrap();
///
/// let mut histogram = [0u32; 256];
///
/// compute_histogram(&image, &mut histogram);
/// assert_eq!(histogram[0], 1);
/// assert_eq!(histogram[128], 1);
/// assert_eq!(histogram[255], 1);
/// ```
pub fn compute_histogram(src: &Image<u8, 1>, hist: &mut [u32; 256]) {
    for &pixel in src.as_slice() {
        hist[pixel as usize] += 1;
    }
}
