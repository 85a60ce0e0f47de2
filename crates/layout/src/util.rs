use trellis_types::Edges;

/// Value comparison used by every guarded setter to decide whether a write is a change.
pub trait ChangeDetect {
    /// Returns true if `other` counts as the same value as `self`.
    fn same_as(&self, other: &Self, tolerance: f32) -> bool;
}

impl ChangeDetect for f32 {
    fn same_as(&self, other: &Self, tolerance: f32) -> bool {
        floats_fuzzy_eq(Some(*self), Some(*other), tolerance)
    }
}

impl ChangeDetect for Option<f32> {
    fn same_as(&self, other: &Self, tolerance: f32) -> bool {
        floats_fuzzy_eq(*self, *other, tolerance)
    }
}

impl ChangeDetect for bool {
    fn same_as(&self, other: &Self, _tolerance: f32) -> bool {
        self == other
    }
}

impl ChangeDetect for Edges {
    fn same_as(&self, other: &Self, tolerance: f32) -> bool {
        self.top.same_as(&other.top, tolerance)
            && self.right.same_as(&other.right, tolerance)
            && self.bottom.same_as(&other.bottom, tolerance)
            && self.left.same_as(&other.left, tolerance)
    }
}

/// Float comparison for stored geometry.
/// Handles `Option<f32>` so that `None` (no hint) only matches `None`.
/// A zero tolerance is plain equality, so NaN never matches anything.
pub fn floats_fuzzy_eq(a: Option<f32>, b: Option<f32>, tolerance: f32) -> bool {
    match (a, b) {
        (Some(va), Some(vb)) if tolerance > 0.0 => (va - vb).abs() <= tolerance,
        (Some(va), Some(vb)) => va == vb,
        (None, None) => true,
        _ => false,
    }
}
