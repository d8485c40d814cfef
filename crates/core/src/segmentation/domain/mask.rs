use ndarray::Array2;

pub const SET: u8 = u8::MAX;

/// Binary image where set pixels belong to the target color range.
///
/// Stored as `(row, col)` with values 0 or 255.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    data: Array2<u8>,
}

impl Mask {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: Array2::zeros((height as usize, width as usize)),
        }
    }

    pub fn from_array(data: Array2<u8>) -> Self {
        Self { data }
    }

    /// Builds a mask from a predicate over `(x, y)`.
    pub fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> bool) -> Self {
        let data = Array2::from_shape_fn((height as usize, width as usize), |(row, col)| {
            if f(col as u32, row as u32) {
                SET
            } else {
                0
            }
        });
        Self { data }
    }

    pub fn width(&self) -> u32 {
        self.data.ncols() as u32
    }

    pub fn height(&self) -> u32 {
        self.data.nrows() as u32
    }

    /// Coordinates outside the mask read as unset.
    pub fn is_set(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        self.data
            .get((y as usize, x as usize))
            .is_some_and(|&v| v != 0)
    }

    pub fn set(&mut self, x: u32, y: u32, on: bool) {
        if let Some(v) = self.data.get_mut((y as usize, x as usize)) {
            *v = if on { SET } else { 0 };
        }
    }

    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    pub fn as_array(&self) -> &Array2<u8> {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let mask = Mask::new(5, 3);
        assert_eq!(mask.width(), 5);
        assert_eq!(mask.height(), 3);
        assert_eq!(mask.count(), 0);
    }

    #[test]
    fn test_set_and_read_back() {
        let mut mask = Mask::new(4, 4);
        mask.set(2, 1, true);
        assert!(mask.is_set(2, 1));
        assert!(!mask.is_set(1, 2));
        assert_eq!(mask.as_array()[[1, 2]], SET);
        mask.set(2, 1, false);
        assert_eq!(mask.count(), 0);
    }

    #[test]
    fn test_out_of_bounds_reads_unset() {
        let mask = Mask::from_fn(3, 3, |_, _| true);
        assert!(!mask.is_set(-1, 0));
        assert!(!mask.is_set(0, 3));
        assert!(!mask.is_set(3, 0));
        assert!(mask.is_set(2, 2));
    }

    #[test]
    fn test_from_fn_uses_x_y_order() {
        let mask = Mask::from_fn(4, 2, |x, y| x == 3 && y == 0);
        assert!(mask.is_set(3, 0));
        assert_eq!(mask.count(), 1);
    }
}
