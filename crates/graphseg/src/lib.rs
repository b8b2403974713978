#![doc = include_str!("../README.md")]

#[doc(inline)]
pub use graphseg_image as image;

#[doc(inline)]
pub use graphseg_imgproc as imgproc;
