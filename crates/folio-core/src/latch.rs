use std::cell::Cell;

/// Allows the relay fetch to be started once; later claims are refused.
///
/// The widget can be unmounted, but the dataset is never re-fetched during
/// the same page load.
#[derive(Debug, Default)]
pub struct FetchLatch {
    claimed: Cell<bool>,
}

impl FetchLatch {
    pub const fn new() -> Self {
        Self {
            claimed: Cell::new(false),
        }
    }

    /// `true` for the first call only.
    #[inline]
    pub fn claim(&self) -> bool {
        !self.claimed.replace(true)
    }

    #[inline]
    pub fn is_claimed(&self) -> bool {
        self.claimed.get()
    }
}
