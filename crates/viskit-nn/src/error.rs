/// An error type for the neural network kernels.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NnError {
    /// Error when the filter data length does not match the filter shape.
    #[error("Filter data length ({0}) does not match the filter shape ({1})")]
    InvalidFilterShape(usize, usize),

    /// Error when the filter window does not fit inside the input image.
    #[error("Filter window ({0}x{1}) does not fit the input ({2}x{3})")]
    InvalidFilterSize(usize, usize, usize, usize),

    /// Error when the convolution output does not satisfy the valid size law.
    #[error("Convolution output size ({0}x{1}) does not match the expected size ({2}x{3})")]
    InvalidConvOutputSize(usize, usize, usize, usize),

    /// Error when the pooling output is not half the input size.
    #[error("Pooling output size ({0}x{1}) does not match the expected size ({2}x{3})")]
    InvalidPoolOutputSize(usize, usize, usize, usize),

    /// Error when the sizes of two images do not match.
    #[error("Image size ({0}x{1}) does not match the expected size ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the score and probability slices differ in length.
    #[error("Scores length ({0}) does not match the probabilities length ({1})")]
    LengthMismatch(usize, usize),

    /// Error when softmax is given no scores.
    #[error("Softmax requires at least one score")]
    EmptyScores,
}
