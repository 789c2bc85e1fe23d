//! The seam between dataset derivation and an external charting library.
//!
//! The widget owns a [`ChartRenderer`] implementation and an optional mounted
//! chart handle. Re-rendering always unmounts the previous handle before
//! mounting a new one, so a backend never accumulates stale chart instances.

use crate::dataset::series::ChartDataset;
use crate::render::error::RenderError;
use crate::render::options::ChartStyle;

/// A charting backend capable of turning a built dataset into a mounted chart.
///
/// Implementations are pure glue: all series values, axis ranges and labels
/// arrive fully derived, and the style struct carries every display option.
/// `Chart` is whatever handle the backend needs to later destroy the mounted
/// instance (a canvas wrapper, a window id, a no-op unit).
pub trait ChartRenderer {
    type Chart;

    /// Mounts a new chart for `dataset` into the backend's container.
    fn mount(&mut self, dataset: &ChartDataset, style: &ChartStyle) -> Result<Self::Chart, RenderError>;

    /// Destroys a previously mounted chart instance.
    fn unmount(&mut self, chart: Self::Chart);
}

/// A renderer that draws nothing. Useful headlessly and in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl ChartRenderer for NullRenderer {
    type Chart = ();

    fn mount(&mut self, _dataset: &ChartDataset, _style: &ChartStyle) -> Result<(), RenderError> {
        Ok(())
    }

    fn unmount(&mut self, _chart: ()) {}
}
