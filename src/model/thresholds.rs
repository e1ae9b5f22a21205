/// Compound-score cut points for token bucketing. Both bounds are strict:
/// a score equal to either bound is neutral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifyThresholds {
    pub positive: f64,
    pub negative: f64,
}

impl ClassifyThresholds {
    pub fn default_v1() -> Self {
        Self {
            positive: 0.1,
            negative: -0.1,
        }
    }
}

impl Default for ClassifyThresholds {
    fn default() -> Self {
        Self::default_v1()
    }
}
