//! Output types of the dataset builder.

/// The small fixed set of Y axes a series can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisId {
    Temperature,
    Precipitation,
    Pressure,
}

/// One labeled numeric series. `values` is always exactly as long as the
/// label sequence of the dataset it belongs to; a `None` is the explicit
/// "no value" marker and keeps positional alignment instead of dropping the
/// slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<Option<f64>>,
    pub axis: AxisId,
}

impl ChartSeries {
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>, axis: AxisId) -> Self {
        ChartSeries {
            name: name.into(),
            values,
            axis,
        }
    }

    /// Smallest present value, skipping `None` markers.
    pub fn min(&self) -> Option<f64> {
        series_min(&self.values)
    }

    /// Largest present value, skipping `None` markers.
    pub fn max(&self) -> Option<f64> {
        series_max(&self.values)
    }

    /// True when every slot is a `None` marker.
    pub fn is_blank(&self) -> bool {
        self.values.iter().all(|v| v.is_none())
    }
}

/// Min over present values only; `None` for an all-missing series so layout
/// math never sees a NaN.
pub fn series_min(values: &[Option<f64>]) -> Option<f64> {
    values
        .iter()
        .flatten()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, &v| Some(acc.map_or(v, |m: f64| m.min(v))))
}

/// Max over present values only.
pub fn series_max(values: &[Option<f64>]) -> Option<f64> {
    values
        .iter()
        .flatten()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, &v| Some(acc.map_or(v, |m: f64| m.max(v))))
}

/// Inclusive bounds for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

/// Per-axis ranges; an axis with no renderable series stays `None` and must
/// not be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisRanges {
    pub temperature: Option<AxisRange>,
    pub precipitation: Option<AxisRange>,
    pub pressure: Option<AxisRange>,
}

/// Everything a renderer needs for one chart: aligned labels, series, icon
/// sprite URLs and axis ranges. Rebuilt from scratch on every render.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartDataset {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
    /// Icon sprite URL per point, aligned with `labels`; `None` at
    /// placeholder slots and when icons are disabled.
    pub icons: Vec<Option<String>>,
    pub ranges: AxisRanges,
}

impl ChartDataset {
    pub fn series_named(&self, name: &str) -> Option<&ChartSeries> {
        self.series.iter().find(|s| s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_skip_missing_markers() {
        let values = vec![None, Some(3.0), Some(-1.5), None, Some(7.0), None];
        assert_eq!(series_min(&values), Some(-1.5));
        assert_eq!(series_max(&values), Some(7.0));
    }

    #[test]
    fn all_missing_yields_none() {
        let values: Vec<Option<f64>> = vec![None, None];
        assert_eq!(series_min(&values), None);
        assert_eq!(series_max(&values), None);
    }

    #[test]
    fn nan_values_are_excluded_from_statistics() {
        let values = vec![Some(f64::NAN), Some(2.0)];
        assert_eq!(series_min(&values), Some(2.0));
        assert_eq!(series_max(&values), Some(2.0));
    }

    #[test]
    fn blank_detection() {
        let blank = ChartSeries::new("x", vec![None, None], AxisId::Temperature);
        assert!(blank.is_blank());
        let filled = ChartSeries::new("x", vec![None, Some(1.0)], AxisId::Temperature);
        assert!(!filled.is_blank());
    }
}
