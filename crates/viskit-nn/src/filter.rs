use crate::error::NnError;

/// Convolution weights packed as a dense 4D tensor.
///
/// The buffer is laid out as `[filter_h, filter_w, in_channels, out_channels]`
/// with the output channel innermost: element `(fy, fx, ci, co)` lives at
/// linear offset `((fy * filter_w + fx) * CI + ci) * CO + co`. Externally
/// trained weights stored in this order can be passed through unchanged;
/// reordering the strides silently breaks that interoperability.
///
/// The channel counts are part of the type; the spatial extent is checked at
/// construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Filter<const CI: usize, const CO: usize> {
    height: usize,
    width: usize,
    data: Vec<f32>,
}

impl<const CI: usize, const CO: usize> Filter<CI, CO> {
    /// Create a new filter from packed weight data.
    ///
    /// # Arguments
    ///
    /// * `height` - The spatial height of the filter window.
    /// * `width` - The spatial width of the filter window.
    /// * `data` - The weights in `[filter_h, filter_w, CI, CO]` order.
    ///
    /// # Errors
    ///
    /// If the length of the weight data does not match the filter shape, an
    /// error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use viskit_nn::filter::Filter;
    ///
    /// let filter = Filter::<1, 2>::new(3, 3, vec![0.0; 3 * 3 * 1 * 2]).unwrap();
    ///
    /// assert_eq!(filter.height(), 3);
    /// assert_eq!(filter.width(), 3);
    /// assert_eq!(filter.in_channels(), 1);
    /// assert_eq!(filter.out_channels(), 2);
    /// ```
    pub fn new(height: usize, width: usize, data: Vec<f32>) -> Result<Self, NnError> {
        if data.len() != height * width * CI * CO {
            return Err(NnError::InvalidFilterShape(
                data.len(),
                height * width * CI * CO,
            ));
        }

        Ok(Self {
            height,
            width,
            data,
        })
    }

    /// Get the spatial height of the filter window.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the spatial width of the filter window.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the number of input channels.
    pub fn in_channels(&self) -> usize {
        CI
    }

    /// Get the number of output channels.
    pub fn out_channels(&self) -> usize {
        CO
    }

    /// Get the weight data as a flat slice.
    pub fn as_slice(&self) -> &[f32] {
        self.data.as_slice()
    }

    /// Get a reference to the weight at `(fy, fx, ci, co)`, or `None` if out
    /// of bounds.
    pub fn get(&self, fy: usize, fx: usize, ci: usize, co: usize) -> Option<&f32> {
        if fy >= self.height || fx >= self.width || ci >= CI || co >= CO {
            return None;
        }
        self.data.get(((fy * self.width + fx) * CI + ci) * CO + co)
    }
}
