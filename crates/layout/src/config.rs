#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Number of node slots reserved up front by a new [`BoxTree`](crate::BoxTree).
    ///
    /// The arena grows on demand, so this only avoids reallocation while a tree
    /// is first being built.
    ///
    /// Defaults to `64`.
    pub initial_capacity: usize,

    /// Largest difference between a stored float and a newly written one that is
    /// still treated as a same-value write.
    ///
    /// - **`0.0`**: exact comparison. Any different value invalidates.
    /// - **Positive values**: arrangement algorithms that accumulate rounding noise
    ///   can rewrite geometry on every pass without invalidating whole subtrees.
    ///
    /// Applies to geometry, spacing and the optional intrinsic hints. Booleans are
    /// always compared exactly.
    ///
    /// Defaults to `0.0`.
    pub change_tolerance: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
            change_tolerance: 0.0,
        }
    }
}
