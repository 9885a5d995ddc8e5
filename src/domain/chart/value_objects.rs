/// Value Object - fitted value axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Tight range over `values` widened by `padding_ratio` of the span on
    /// each side. A flat range is widened by ±1 so it never collapses.
    pub fn fit<I>(values: I, padding_ratio: f64) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let (min, max) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
                None => Some((v, v)),
            })?;
        let span = max - min;
        if span <= f64::EPSILON {
            return Some(Self::new(min - 1.0, max + 1.0));
        }
        let pad = span * padding_ratio;
        Some(Self::new(min - pad, max + pad))
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// 0.0 at `min`, 1.0 at `max`
    pub fn normalize(&self, value: f64) -> f64 {
        if self.span() <= f64::EPSILON { 0.5 } else { (value - self.min) / self.span() }
    }

    /// `count` evenly spaced values from min to max inclusive
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![self.min],
            _ => {
                let step = self.span() / (count - 1) as f64;
                (0..count).map(|i| self.min + step * i as f64).collect()
            }
        }
    }
}

/// Value Object - SVG canvas and the plot area inside its margins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
}

impl Default for PlotArea {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 320.0,
            margin_top: 5.0,
            margin_right: 20.0,
            margin_bottom: 30.0,
            margin_left: 60.0,
        }
    }
}

impl PlotArea {
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin_left - self.margin_right).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin_top - self.margin_bottom).max(0.0)
    }

    pub fn left(&self) -> f64 {
        self.margin_left
    }

    pub fn right(&self) -> f64 {
        self.margin_left + self.inner_width()
    }

    pub fn top(&self) -> f64 {
        self.margin_top
    }

    pub fn bottom(&self) -> f64 {
        self.margin_top + self.inner_height()
    }

    /// x for slot `index` of `count`. A single slot sits in the middle.
    pub fn x_at(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.left() + self.inner_width() / 2.0;
        }
        self.left() + self.inner_width() * index as f64 / (count - 1) as f64
    }

    /// y for `value`; larger values sit higher.
    pub fn y_at(&self, value: f64, range: &ValueRange) -> f64 {
        self.bottom() - range.normalize(value) * self.inner_height()
    }
}
