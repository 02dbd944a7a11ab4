#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

/// State for the navbar cart badge.
#[derive(Clone, Copy, Debug, Default)]
pub struct CartState {
    pub count: u32,
    pub badge_visible: bool,
}

impl CartState {
    /// Apply a successful count fetch. The badge shows only for a non-empty cart.
    pub fn apply_count(&mut self, count: u32) {
        self.count = count;
        self.badge_visible = count > 0;
    }

    /// A failed fetch hides the badge; the stored count keeps its last value.
    pub fn apply_error(&mut self) {
        self.badge_visible = false;
    }
}
