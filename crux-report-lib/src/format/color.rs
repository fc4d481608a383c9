use crate::model::RatingClass;

/// The palette used to signal performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PerformanceColor {
    Green,
    Amber,
    Red,
    Gray,
}

impl PerformanceColor {
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Green => "#4caf50",
            Self::Amber => "#ff9800",
            Self::Red => "#f44336",
            Self::Gray => "#9e9e9e",
        }
    }
}

/// Color for a rating label. Total over all inputs; unknown labels are gray.
#[must_use]
pub fn performance_color(rating: Option<&str>) -> PerformanceColor {
    match RatingClass::classify(rating) {
        RatingClass::Good => PerformanceColor::Green,
        RatingClass::NeedsImprovement => PerformanceColor::Amber,
        RatingClass::Poor => PerformanceColor::Red,
        RatingClass::Other => PerformanceColor::Gray,
    }
}

/// Color band for the share of good experiences in a sample.
#[must_use]
pub fn good_ratio_color(ratio: Option<f64>) -> PerformanceColor {
    match ratio {
        Some(r) if r >= 0.75 => PerformanceColor::Green,
        Some(r) if r >= 0.5 => PerformanceColor::Amber,
        Some(_) => PerformanceColor::Red,
        None => PerformanceColor::Gray,
    }
}
