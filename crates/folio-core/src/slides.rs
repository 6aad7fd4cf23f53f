/// Visual state of one slide relative to the active one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideMark {
    /// Precedes the active slide in document order.
    Faded,
    Active,
    Plain,
}

/// Tracks which slide is active; the DOM side applies the marks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideDeck {
    len: usize,
    active: Option<usize>,
}

impl SlideDeck {
    /// The first slide starts active so the page never shows an empty state.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            active: (len > 0).then_some(0),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Make `index` the active slide and return the full marking.
    pub fn activate(&mut self, index: usize) -> Option<Vec<SlideMark>> {
        if index >= self.len {
            return None;
        }
        self.active = Some(index);
        Some(self.marks())
    }

    pub fn marks(&self) -> Vec<SlideMark> {
        (0..self.len)
            .map(|i| match self.active {
                Some(a) if i < a => SlideMark::Faded,
                Some(a) if i == a => SlideMark::Active,
                _ => SlideMark::Plain,
            })
            .collect()
    }
}
