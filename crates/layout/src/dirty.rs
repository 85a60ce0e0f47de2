/// Invalidation status of a node's computed geometry.
///
/// The external arrangement algorithm drives the `Stale -> InProgress -> Clean`
/// cycle. Geometry changes move nodes back to `Stale`, except that nodes held
/// `InProgress` by a running pass are left alone until that pass releases them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dirty {
    /// Geometry is up to date.
    Clean,
    /// Geometry needs recomputation.
    #[default]
    Stale,
    /// A computation pass currently owns this node.
    InProgress,
}

impl Dirty {
    pub fn is_clean(self) -> bool {
        self == Dirty::Clean
    }

    pub fn is_stale(self) -> bool {
        self == Dirty::Stale
    }

    pub fn is_in_progress(self) -> bool {
        self == Dirty::InProgress
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dirty::Clean => "Clean",
            Dirty::Stale => "Stale",
            Dirty::InProgress => "InProgress",
        }
    }
}

/// Maps the nullable-boolean encoding (`None` = in progress) onto [`Dirty`].
impl From<Option<bool>> for Dirty {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(false) => Dirty::Clean,
            Some(true) => Dirty::Stale,
            None => Dirty::InProgress,
        }
    }
}

impl From<Dirty> for Option<bool> {
    fn from(value: Dirty) -> Self {
        match value {
            Dirty::Clean => Some(false),
            Dirty::Stale => Some(true),
            Dirty::InProgress => None,
        }
    }
}

/// How far a change invalidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// Only the owning node is marked, whatever its current state.
    Local,
    /// The node and all its descendants are marked, skipping nodes in progress.
    Subtree,
}
