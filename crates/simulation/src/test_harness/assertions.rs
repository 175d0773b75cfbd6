use super::TestCity;

impl TestCity {
    /// Assert every bounded indicator is inside its documented range.
    pub fn assert_indicators_in_range(&self) {
        let state = self.state();
        assert!(
            state.indicators_in_range(),
            "indicator out of range on {}: {state:?}",
            self.clock().formatted()
        );
    }

    pub fn assert_money_above(&self, amount: f64) {
        let money = self.state().money;
        assert!(money > amount, "Expected money > {amount}, got {money}");
    }

    pub fn assert_money_below(&self, amount: f64) {
        let money = self.state().money;
        assert!(money < amount, "Expected money < {amount}, got {money}");
    }

    pub fn assert_connected(&self, x: usize, y: usize) {
        assert!(
            self.is_connected_at(x, y),
            "Expected building at ({x}, {y}) to be connected"
        );
    }

    pub fn assert_not_connected(&self, x: usize, y: usize) {
        assert!(
            !self.is_connected_at(x, y),
            "Expected ({x}, {y}) to be unconnected"
        );
    }
}
