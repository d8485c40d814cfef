/// Inclusive per-channel bounds in 8-bit HSV (H in `[0, 180)`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HsvRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl HsvRange {
    pub fn new(lower: [u8; 3], upper: [u8; 3]) -> Self {
        Self { lower, upper }
    }

    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        (0..3).all(|c| self.lower[c] <= hsv[c] && hsv[c] <= self.upper[c])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case([29, 86, 6], true)]
    #[case([64, 255, 255], true)]
    #[case([60, 255, 255], true)]
    #[case([28, 200, 200], false)]
    #[case([65, 200, 200], false)]
    #[case([40, 85, 200], false)]
    #[case([40, 200, 5], false)]
    fn test_contains_is_inclusive(#[case] hsv: [u8; 3], #[case] expected: bool) {
        let range = HsvRange::new([29, 86, 6], [64, 255, 255]);
        assert_eq!(range.contains(hsv), expected);
    }
}
