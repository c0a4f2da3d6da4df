use viskit_image::Image;

/// Single parametric line sweep between two points.
///
/// The number of steps is the larger of `|dx|` and `|dy|`; each sampled
/// point is floor-truncated to a pixel and written only when it lies on the
/// canvas. The end point itself is not drawn, and coincident points draw
/// nothing. Only channels `0..min(C, 3)` are written, channel `c` receiving
/// `color[c]`.
fn draw_line_prim<const C: usize>(
    img: &mut Image<u8, C>,
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    color: [u8; 3],
) {
    let steps = (x1 - x0).abs().max((y1 - y0).abs());
    if steps == 0 {
        return;
    }

    let x_inc = (x1 - x0) as f32 / steps as f32;
    let y_inc = (y1 - y0) as f32 / steps as f32;

    let (cols, rows) = (img.cols() as i64, img.rows() as i64);
    let channels = C.min(3);
    let data = img.as_slice_mut();

    let mut x = x0 as f32;
    let mut y = y0 as f32;

    for _ in 0..steps {
        let px = x.floor() as i64;
        let py = y.floor() as i64;

        if px >= 0 && py >= 0 && px < cols && py < rows {
            let base = ((py * cols + px) as usize) * C;
            data[base..base + channels].copy_from_slice(&color[..channels]);
        }

        x += x_inc;
        y += y_inc;
    }
}

/// Draws a line on an image inplace.
///
/// Off-canvas points are silently skipped. Thickness `t` is approximated by
/// sweeping the line `t/2 * 2 + 1` times with integer offsets in
/// `-t/2 ..= t/2`, applied alternately to the x and y axis of both end
/// points; this is not a true stroked polygon.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `p1` - The start point of the line as a tuple of (x, y).
/// * `p2` - The end point of the line as a tuple of (x, y).
/// * `color` - The line color; channel `c` of the image receives `color[c]`,
///   and color components beyond the image depth are ignored.
/// * `thickness` - The thickness of the line.
///
/// # Example
///
/// ```
/// use viskit_image::{Image, ImageSize};
/// use viskit_imgproc::draw::draw_line;
///
/// let mut img = Image::<u8, 3>::from_size_val(
///     ImageSize { width: 8, height: 8 },
///     0,
/// ).unwrap();
///
/// draw_line(&mut img, (0, 0), (7, 7), [255, 0, 0], 1);
///
/// assert_eq!(img.get([3, 3, 0]), Some(&255));
/// ```
pub fn draw_line<const C: usize>(
    img: &mut Image<u8, C>,
    p1: (i64, i64),
    p2: (i64, i64),
    color: [u8; 3],
    thickness: usize,
) {
    let half = (thickness / 2) as i64;
    for d in -half..=half {
        draw_line_prim(img, p1.0 + d, p1.1, p2.0 + d, p2.1, color);
        draw_line_prim(img, p1.0, p1.1 + d, p2.0, p2.1 + d, color);
    }
}

/// Draws the outline of a quadrilateral on an image inplace.
///
/// The four boundary edges `p1 -> p2 -> p3 -> p4 -> p1` are drawn with
/// [`draw_line`]; the interior is not filled.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `p1` - The first corner as a tuple of (x, y).
/// * `p2` - The second corner.
/// * `p3` - The third corner.
/// * `p4` - The fourth corner.
/// * `color` - The outline color.
/// * `thickness` - The thickness of the edges.
pub fn draw_quadrilateral<const C: usize>(
    img: &mut Image<u8, C>,
    p1: (i64, i64),
    p2: (i64, i64),
    p3: (i64, i64),
    p4: (i64, i64),
    color: [u8; 3],
    thickness: usize,
) {
    draw_line(img, p1, p2, color, thickness);
    draw_line(img, p2, p3, color, thickness);
    draw_line(img, p3, p4, color, thickness);
    draw_line(img, p4, p1, color, thickness);
}
