/// Selected year plus the sorted set of years it may move through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YearCursor {
    selected: i32,
    years: Vec<i32>,
}

impl YearCursor {
    /// `years` need not be sorted or unique.
    pub fn new(selected: i32, mut years: Vec<i32>) -> Self {
        years.sort_unstable();
        years.dedup();
        Self { selected, years }
    }

    #[inline]
    pub fn selected(&self) -> i32 {
        self.selected
    }

    #[inline]
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    #[inline]
    pub fn can_prev(&self) -> bool {
        self.years.first().is_some_and(|&min| self.selected > min)
    }

    #[inline]
    pub fn can_next(&self) -> bool {
        self.years.last().is_some_and(|&max| self.selected < max)
    }

    /// Step to the closest earlier year present, even when the selected year
    /// itself has no data. Returns whether the selection changed.
    pub fn prev(&mut self) -> bool {
        match self.years.iter().rev().find(|&&y| y < self.selected) {
            Some(&y) => {
                self.selected = y;
                true
            }
            None => false,
        }
    }

    /// Step to the closest later year present, even when the selected year
    /// itself has no data. Returns whether the selection changed.
    pub fn next(&mut self) -> bool {
        match self.years.iter().find(|&&y| y > self.selected) {
            Some(&y) => {
                self.selected = y;
                true
            }
            None => false,
        }
    }
}
