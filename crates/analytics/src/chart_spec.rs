//! Render contract: the display configuration that accompanies shaped points.
//!
//! The renderer receives a [`ChartData`] and never reaches back into the
//! analytics stages. It is responsible for empty point lists, legends and
//! for drawing absent keys as gaps.

use serde::Serialize;

use crate::shape::ChartSeriesPoint;

/// Which primitive draws the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// One bar per point per series, side by side.
    GroupedBar,
    /// Series sharing a stack group are drawn on top of each other.
    StackedBar,
    Line,
    /// One axis per point; the first series is the polygon.
    Radar,
}

/// sRGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesColor(pub u8, pub u8, pub u8);

impl SeriesColor {
    pub const GREEN: SeriesColor = SeriesColor(100, 200, 100);
    pub const BLUE: SeriesColor = SeriesColor(100, 150, 255);
    pub const ORANGE: SeriesColor = SeriesColor(255, 180, 50);
    pub const PURPLE: SeriesColor = SeriesColor(180, 130, 255);
    pub const RED: SeriesColor = SeriesColor(255, 100, 100);
    pub const TEAL: SeriesColor = SeriesColor(80, 180, 255);
    pub const GRAY: SeriesColor = SeriesColor(170, 170, 170);

    /// Palette cycled through when a chart has more series than named colors.
    pub const PALETTE: [SeriesColor; 6] = [
        SeriesColor::GREEN,
        SeriesColor::BLUE,
        SeriesColor::ORANGE,
        SeriesColor::PURPLE,
        SeriesColor::RED,
        SeriesColor::TEAL,
    ];

    pub fn palette(index: usize) -> SeriesColor {
        Self::PALETTE[index % Self::PALETTE.len()]
    }
}

/// One plotted series: a point key, its legend label and color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSpec {
    pub key: String,
    pub label: String,
    pub color: SeriesColor,
    /// Series with the same stack id are stacked on each other.
    pub stack: Option<String>,
}

impl SeriesSpec {
    pub fn new(key: &str, label: &str, color: SeriesColor) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            color,
            stack: None,
        }
    }

    pub fn stacked(mut self, stack: &str) -> Self {
        self.stack = Some(stack.to_string());
        self
    }
}

/// Value-axis bounds known ahead of the data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

impl AxisDomain {
    pub const UNIT: AxisDomain = AxisDomain { min: 0.0, max: 1.0 };
    pub const PERCENT: AxisDomain = AxisDomain {
        min: 0.0,
        max: 100.0,
    };

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `value` inside the domain, clamped to `[0, 1]`.
    pub fn normalize(&self, value: f64) -> f64 {
        if self.span() <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / self.span()).clamp(0.0, 1.0)
    }
}

/// Everything the renderer needs besides the points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub kind: ChartKind,
    /// Point key used for the category axis (or radar axis labels).
    pub category_key: String,
    pub series: Vec<SeriesSpec>,
    /// Fixed value domain; `None` lets the renderer derive it from the data.
    pub y_domain: Option<AxisDomain>,
}

impl ChartSpec {
    pub fn new(title: &str, kind: ChartKind, category_key: &str) -> Self {
        Self {
            title: title.to_string(),
            kind,
            category_key: category_key.to_string(),
            series: Vec::new(),
            y_domain: None,
        }
    }

    pub fn with_series(mut self, series: SeriesSpec) -> Self {
        self.series.push(series);
        self
    }

    pub fn with_domain(mut self, domain: AxisDomain) -> Self {
        self.y_domain = Some(domain);
        self
    }
}

/// Shaped points plus their display configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub spec: ChartSpec,
    pub points: Vec<ChartSeriesPoint>,
}

impl ChartData {
    /// Domain to draw with: the fixed one, or `[min(0, data), max(data)]`.
    /// Stacked series contribute their per-point stack totals.
    pub fn value_domain(&self) -> AxisDomain {
        if let Some(domain) = self.spec.y_domain {
            return domain;
        }
        let mut min = 0.0_f64;
        let mut max = 0.0_f64;
        for point in &self.points {
            let mut stacks: Vec<(&str, f64)> = Vec::new();
            for series in &self.spec.series {
                let Some(value) = point.number(&series.key) else {
                    continue;
                };
                match &series.stack {
                    Some(stack) if self.spec.kind == ChartKind::StackedBar => {
                        match stacks.iter_mut().find(|(id, _)| *id == stack.as_str()) {
                            Some((_, total)) => *total += value,
                            None => stacks.push((stack.as_str(), value)),
                        }
                    }
                    _ => {
                        min = min.min(value);
                        max = max.max(value);
                    }
                }
            }
            for (_, total) in stacks {
                min = min.min(total);
                max = max.max(total);
            }
        }
        if max <= min {
            max = min + 1.0;
        }
        AxisDomain::new(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ChartValue;

    fn point(values: &[(&str, f64)]) -> ChartSeriesPoint {
        ChartSeriesPoint {
            fields: values
                .iter()
                .map(|(k, v)| (k.to_string(), ChartValue::Number(*v)))
                .collect(),
        }
    }

    #[test]
    fn test_fixed_domain_wins() {
        let data = ChartData {
            spec: ChartSpec::new("t", ChartKind::Line, "year").with_domain(AxisDomain::UNIT),
            points: vec![point(&[("v", 7.0)])],
        };
        assert_eq!(data.value_domain(), AxisDomain::UNIT);
    }

    #[test]
    fn test_derived_domain_covers_stack_totals() {
        let spec = ChartSpec::new("t", ChartKind::StackedBar, "year")
            .with_series(SeriesSpec::new("a", "A", SeriesColor::GREEN).stacked("s"))
            .with_series(SeriesSpec::new("b", "B", SeriesColor::BLUE).stacked("s"));
        let data = ChartData {
            spec,
            points: vec![point(&[("a", 30.0), ("b", 50.0)]), point(&[("a", 10.0)])],
        };
        let domain = data.value_domain();
        assert_eq!(domain.min, 0.0);
        assert!((domain.max - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_points_domain_is_not_degenerate() {
        let data = ChartData {
            spec: ChartSpec::new("t", ChartKind::GroupedBar, "name"),
            points: Vec::new(),
        };
        let domain = data.value_domain();
        assert!(domain.span() > 0.0);
    }

    #[test]
    fn test_normalize_clamps() {
        let d = AxisDomain::PERCENT;
        assert_eq!(d.normalize(50.0), 0.5);
        assert_eq!(d.normalize(150.0), 1.0);
        assert_eq!(d.normalize(-5.0), 0.0);
        assert_eq!(AxisDomain::new(3.0, 3.0).normalize(3.0), 0.0);
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(SeriesColor::palette(0), SeriesColor::GREEN);
        assert_eq!(SeriesColor::palette(6), SeriesColor::GREEN);
        assert_eq!(SeriesColor::palette(7), SeriesColor::BLUE);
    }
}
