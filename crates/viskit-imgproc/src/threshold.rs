use viskit_image::Image;

use crate::histogram::compute_histogram;

/// Find the Otsu threshold of an 8-bit grayscale image.
///
/// Scans every candidate level over a 256-bin histogram, maximizing the
/// between-class variance `wB * wF * (mB - mF)^2` computed from running
/// weighted sums with truncating integer means. Candidates with an empty
/// below-threshold class are skipped and the scan stops once the
/// above-threshold class empties. A candidate whose objective is greater
/// than *or equal to* the recorded maximum replaces it, so ties resolve to
/// the highest level scanned.
///
/// An empty image has no valid split and yields level 0.
///
/// # Arguments
///
/// * `src` - The input grayscale image.
///
/// # Returns
///
/// The selected threshold level.
///
/// # Examples
///
/// ```
/// use viskit_image::{Image, ImageSize};
/// use viskit_imgproc::threshold::otsu_level;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize { width: 3, height: 2 },
///     vec![100u8, 200, 50, 150, 200, 250],
/// ).unwrap();
///
/// let level = otsu_level(&image);
/// assert!(level >= 100 && level < 150);
/// ```
pub fn otsu_level(src: &Image<u8, 1>) -> u8 {
    let mut hist = [0u32; 256];
    compute_histogram(src, &mut hist);

    let mut sum_total: i64 = 0;
    let mut total: i64 = 0;
    for (i, &count) in hist.iter().enumerate() {
        sum_total += i as i64 * count as i64;
        total += count as i64;
    }

    let mut weight_back: i64 = 0;
    let mut sum_back: i64 = 0;
    let mut max_objective: i64 = 0;
    let mut level = 0u8;

    for (i, &count) in hist.iter().enumerate() {
        weight_back += count as i64;
        if weight_back == 0 {
            continue;
        }

        let weight_fore = total - weight_back;
        if weight_fore == 0 {
            break;
        }

        sum_back += i as i64 * count as i64;
        let mean_back = sum_back / weight_back;
        let mean_fore = (sum_total - sum_back) / weight_fore;

        let delta = mean_back - mean_fore;
        let objective = weight_back * weight_fore * delta * delta;
        if objective >= max_objective {
            level = i as u8;
            max_objective = objective;
        }
    }

    level
}
