mod layer_stack;
mod primitives;
mod recording;
mod surface;
mod transform;

pub use layer_stack::{LayerKind, LayerStack};
pub use primitives::{Color, ColorStop, LinearGradient, Paint, TextAlign};
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::DrawingSurface;
pub use transform::{CoordinateProfile, CoordinateTransform, TransformedSurface};

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::CairoSurface;
