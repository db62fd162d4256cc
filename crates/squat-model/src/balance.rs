//! Three-zone balance classification of the body COM over the foot.

use serde::{Deserialize, Serialize};

use crate::geometry::Point2;

/// Where the body COM sits horizontally relative to the foot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceZone {
    /// Strictly between ankle and toe.
    Stable,
    /// Strictly between heel and ankle.
    Caution,
    /// Anywhere else, including exactly on the heel, ankle or toe.
    Fall,
}

impl BalanceZone {
    /// Returns the zone name as used in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            BalanceZone::Stable => "stable",
            BalanceZone::Caution => "caution",
            BalanceZone::Fall => "fall",
        }
    }

    /// Short title for display next to the plot.
    pub fn title(&self) -> &'static str {
        match self {
            BalanceZone::Stable => "Stable",
            BalanceZone::Caution => "Caution",
            BalanceZone::Fall => "Fall",
        }
    }

    /// Background color binding: light green, orange, light red.
    pub fn color(&self) -> &'static str {
        match self {
            BalanceZone::Stable => "#90ee90",
            BalanceZone::Caution => "#ffa500",
            BalanceZone::Fall => "#f08080",
        }
    }
}

impl std::fmt::Display for BalanceZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifies `cm_body` on the horizontal axis only.
///
/// Inequalities are strict, so a COM exactly over the ankle or toe (or heel)
/// is `Fall`.
pub fn classify_balance(cm_body: Point2, heel: Point2, ankle: Point2, toe: Point2) -> BalanceZone {
    let x = cm_body.x;
    if ankle.x < x && x < toe.x {
        BalanceZone::Stable
    } else if heel.x < x && x < ankle.x {
        BalanceZone::Caution
    } else {
        BalanceZone::Fall
    }
}

/// Returns true if `cm_body.x` equals the heel, ankle or toe x-coordinate.
pub fn on_support_boundary(cm_body: Point2, heel: Point2, ankle: Point2, toe: Point2) -> bool {
    let x = cm_body.x;
    x == heel.x || x == ankle.x || x == toe.x
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEEL: Point2 = Point2::new(0.0, 0.0);
    const ANKLE: Point2 = Point2::new(10.0, 5.0);
    const TOE: Point2 = Point2::new(30.0, 0.0);

    fn classify(x: f64) -> BalanceZone {
        classify_balance(Point2::new(x, 50.0), HEEL, ANKLE, TOE)
    }

    #[test]
    fn test_zones() {
        assert_eq!(classify(20.0), BalanceZone::Stable);
        assert_eq!(classify(5.0), BalanceZone::Caution);
        assert_eq!(classify(-5.0), BalanceZone::Fall);
        assert_eq!(classify(31.0), BalanceZone::Fall);
    }

    #[test]
    fn test_boundaries_fall() {
        assert_eq!(classify(10.0), BalanceZone::Fall);
        assert_eq!(classify(30.0), BalanceZone::Fall);
        assert_eq!(classify(0.0), BalanceZone::Fall);
    }

    #[test]
    fn test_nan_falls() {
        assert_eq!(classify(f64::NAN), BalanceZone::Fall);
    }

    #[test]
    fn test_vertical_position_ignored() {
        let low = classify_balance(Point2::new(20.0, -100.0), HEEL, ANKLE, TOE);
        assert_eq!(low, BalanceZone::Stable);
    }

    #[test]
    fn test_on_support_boundary() {
        assert!(on_support_boundary(Point2::new(10.0, 1.0), HEEL, ANKLE, TOE));
        assert!(on_support_boundary(Point2::new(0.0, 1.0), HEEL, ANKLE, TOE));
        assert!(!on_support_boundary(Point2::new(10.5, 1.0), HEEL, ANKLE, TOE));
    }

    #[test]
    fn test_color_bindings_distinct() {
        let colors = [
            BalanceZone::Stable.color(),
            BalanceZone::Caution.color(),
            BalanceZone::Fall.color(),
        ];
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }
}
