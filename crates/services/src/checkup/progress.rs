/// Aggregated view of checkup progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckupProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

impl CheckupProgress {
    /// Answered share in whole percent, 0 for an empty catalog.
    #[must_use]
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let pct = self.answered.min(self.total) * 100 / self.total;
        u8::try_from(pct).unwrap_or(100)
    }
}
