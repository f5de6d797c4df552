//! Pointer target size minimums.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Target size criterion.
pub enum TargetCriterion {
    /// WCAG 2.5.5 (AAA): 44 by 44 CSS pixels.
    Enhanced,
    /// WCAG 2.5.8 (AA): 24 by 24 CSS pixels.
    Minimum,
}

impl TargetCriterion {
    /// Minimum edge length in CSS pixels.
    pub fn min_edge(self) -> f64 {
        match self {
            Self::Enhanced => 44.0,
            Self::Minimum => 24.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Rendered size of a pointer target in CSS pixels.
pub struct TargetSize {
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl TargetSize {
    /// Size from width and height.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Size of a Tailwind spacing-scale class value (`h-10` is 2.5rem at a 16px root).
    pub fn from_spacing(width_units: f64, height_units: f64) -> Self {
        Self::new(width_units * 4.0, height_units * 4.0)
    }

    /// Whether both edges reach the criterion.
    pub fn meets(&self, criterion: TargetCriterion) -> bool {
        self.width.min(self.height) >= criterion.min_edge()
    }

    /// Pixels to add on each axis to meet the criterion.
    pub fn shortfall(&self, criterion: TargetCriterion) -> (f64, f64) {
        let min = criterion.min_edge();
        ((min - self.width).max(0.0), (min - self.height).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn smaller_edge_decides() {
        let button = TargetSize::new(120.0, 40.0);
        assert!(button.meets(TargetCriterion::Minimum));
        assert!(!button.meets(TargetCriterion::Enhanced));
        assert_eq!(button.shortfall(TargetCriterion::Enhanced), (0.0, 4.0));
    }

    #[test]
    fn spacing_units_are_quarter_rem() {
        assert_eq!(TargetSize::from_spacing(11.0, 11.0), TargetSize::new(44.0, 44.0));
        assert!(TargetSize::from_spacing(11.0, 11.0).meets(TargetCriterion::Enhanced));
        assert!(!TargetSize::from_spacing(5.0, 5.0).meets(TargetCriterion::Minimum));
    }
}
