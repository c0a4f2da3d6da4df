#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use viskit_image as image;

#[doc(inline)]
pub use viskit_imgproc as imgproc;

#[doc(inline)]
pub use viskit_nn as nn;
