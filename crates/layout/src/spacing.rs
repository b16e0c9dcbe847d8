/// Tracks the vertical extent consumed inside a flow container.
///
/// `usage` never decreases; the next child starts at [`offset`](Self::offset).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpacingAggregator {
    base: f32,
    usage: f32,
}

impl SpacingAggregator {
    pub fn new(base: f32) -> Self {
        Self { base, usage: 0.0 }
    }

    pub fn base(&self) -> f32 {
        self.base
    }

    pub fn usage(&self) -> f32 {
        self.usage
    }

    pub fn offset(&self) -> f32 {
        self.base + self.usage
    }

    /// Adds `amount` to the usage. Negative amounts are ignored.
    pub fn add(&mut self, amount: f32) {
        if amount > 0.0 {
            self.usage += amount;
        } else if amount < 0.0 {
            log::debug!("Ignoring negative spacing of {:.2}pt", amount);
        }
    }

    pub fn reset(&mut self, base: f32) {
        self.base = base;
        self.usage = 0.0;
    }
}
