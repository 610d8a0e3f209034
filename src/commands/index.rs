use std::fmt;

/// Position of an entry in a displayed list. Stored zero-based, shown
/// one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index {
    zero_based: usize,
}

impl Index {
    /// `None` for 0.
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        one_based.checked_sub(1).map(Self::from_zero_based)
    }

    pub fn from_zero_based(zero_based: usize) -> Self {
        Self { zero_based }
    }

    pub fn zero_based(&self) -> usize {
        self.zero_based
    }

    pub fn one_based(&self) -> usize {
        self.zero_based + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_based_zero_is_rejected() {
        assert!(Index::from_one_based(0).is_none());
    }

    #[test]
    fn conversions_agree() {
        let index = Index::from_one_based(3).expect("non-zero");
        assert_eq!(index.zero_based(), 2);
        assert_eq!(index, Index::from_zero_based(2));
        assert_eq!(index.to_string(), "3");
    }
}
