pub mod carousel;
pub mod lightbox;

pub use carousel::{Carousel, Direction};
pub use lightbox::{Lightbox, LightboxState, ModalSize, PhotoRef, Pinch, Point};
