use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::render::{CoordinateTransform, DrawingSurface, TransformedSurface};

/// Stacked surfaces owned by one chart, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerKind {
    /// Axes, gridlines and tick labels.
    Scale,
    /// Bars, lines and wedges.
    Data,
    /// Tooltip indicators and hover highlights.
    Overlay,
}

impl LayerKind {
    pub const ALL: [LayerKind; 3] = [LayerKind::Scale, LayerKind::Data, LayerKind::Overlay];
}

/// One value per [`LayerKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerStack<S> {
    pub scale: S,
    pub data: S,
    pub overlay: S,
}

impl<S> LayerStack<S> {
    #[must_use]
    pub fn new(scale: S, data: S, overlay: S) -> Self {
        Self {
            scale,
            data,
            overlay,
        }
    }

    #[must_use]
    pub fn from_fn(mut make: impl FnMut(LayerKind) -> S) -> Self {
        Self {
            scale: make(LayerKind::Scale),
            data: make(LayerKind::Data),
            overlay: make(LayerKind::Overlay),
        }
    }

    #[must_use]
    pub fn get(&self, kind: LayerKind) -> &S {
        match kind {
            LayerKind::Scale => &self.scale,
            LayerKind::Data => &self.data,
            LayerKind::Overlay => &self.overlay,
        }
    }

    pub fn get_mut(&mut self, kind: LayerKind) -> &mut S {
        match kind {
            LayerKind::Scale => &mut self.scale,
            LayerKind::Data => &mut self.data,
            LayerKind::Overlay => &mut self.overlay,
        }
    }

    #[must_use]
    pub fn map<T>(self, mut f: impl FnMut(LayerKind, S) -> T) -> LayerStack<T> {
        LayerStack {
            scale: f(LayerKind::Scale, self.scale),
            data: f(LayerKind::Data, self.data),
            overlay: f(LayerKind::Overlay, self.overlay),
        }
    }
}

impl<S: DrawingSurface> LayerStack<S> {
    /// Wraps every raw surface with the same coordinate transform.
    #[must_use]
    pub fn transformed(self, transform: CoordinateTransform) -> LayerStack<TransformedSurface<S>> {
        self.map(|_, surface| TransformedSurface::new(surface, transform))
    }
}

impl<S: DrawingSurface> LayerStack<TransformedSurface<S>> {
    pub fn clear_all(&mut self) -> ChartResult<()> {
        for kind in LayerKind::ALL {
            let layer = self.get_mut(kind);
            layer.begin_path();
            layer.clear()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn into_inner(self) -> LayerStack<S> {
        self.map(|_, surface| surface.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::{LayerKind, LayerStack};

    #[test]
    fn layer_stack_orders_scale_data_overlay() {
        let stack = LayerStack::from_fn(|kind| kind);
        assert_eq!(
            LayerKind::ALL.map(|kind| *stack.get(kind)),
            [LayerKind::Scale, LayerKind::Data, LayerKind::Overlay]
        );
    }
}
