use crate::error::BackendError;
use crate::geometry::{Point, Size};
use crate::surface::Surface;

pub trait OutputDriver {
    fn enter(&mut self) -> Result<(), BackendError>;
    fn exit(&mut self) -> Result<(), BackendError>;

    /// Current display dimensions.
    fn size(&self) -> Result<Size, BackendError>;

    /// Composite the root surface onto the display with its origin at
    /// `origin` and flush.
    fn present(&mut self, surface: &Surface, origin: Point) -> Result<(), BackendError>;
}

impl<T: OutputDriver + ?Sized> OutputDriver for &mut T {
    fn enter(&mut self) -> Result<(), BackendError> {
        (**self).enter()
    }

    fn exit(&mut self) -> Result<(), BackendError> {
        (**self).exit()
    }

    fn size(&self) -> Result<Size, BackendError> {
        (**self).size()
    }

    fn present(&mut self, surface: &Surface, origin: Point) -> Result<(), BackendError> {
        (**self).present(surface, origin)
    }
}
