//! Nested list numbering
//!
//! A [NestedCounter] is the dotted position ("1.2.3") of the current item inside nested
//! enumerated lists. A fresh counter reads "0": no list has been entered yet.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedCounter {
    levels: Vec<u32>,
}

impl NestedCounter {
    pub fn new() -> Self {
        Self { levels: vec![0] }
    }

    /// Moves to the next item at the current level
    pub fn increment(&mut self) {
        if let Some(last) = self.levels.last_mut() {
            *last += 1;
        }
    }

    /// Enters a nested list: "0" becomes "1", anything else gains a ".1"
    pub fn descend(&mut self) {
        if matches!(self.levels.as_slice(), [0]) {
            self.levels[0] = 1;
        } else {
            self.levels.push(1);
        }
    }

    /// Leaves a nested list, falling back to "0" at the outermost level
    pub fn ascend(&mut self) {
        self.levels.pop();
        if self.levels.is_empty() {
            self.levels.push(0);
        }
    }

    pub fn depth(&self) -> usize {
        self.levels.len()
    }
}

impl Default for NestedCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NestedCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, level) in self.levels.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", level)?;
        }
        Ok(())
    }
}

impl FromStr for NestedCounter {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let levels = s
            .split('.')
            .map(str::parse)
            .collect::<Result<Vec<u32>, _>>()?;
        Ok(Self { levels })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn counter(s: &str) -> NestedCounter {
        s.parse().unwrap()
    }

    #[test]
    fn starts_at_zero() {
        assert_eq!(NestedCounter::new().to_string(), "0");
    }

    #[rstest]
    #[case("0", "1")]
    #[case("2.2", "2.3")]
    #[case("3.4.3", "3.4.4")]
    fn increment(#[case] from: &str, #[case] to: &str) {
        let mut c = counter(from);
        c.increment();
        assert_eq!(c.to_string(), to);
    }

    #[rstest]
    #[case("0", "1")]
    #[case("1", "1.1")]
    #[case("2.3", "2.3.1")]
    fn descend(#[case] from: &str, #[case] to: &str) {
        let mut c = counter(from);
        c.descend();
        assert_eq!(c.to_string(), to);
    }

    #[rstest]
    #[case("1.1", "1")]
    #[case("1", "0")]
    #[case("0", "0")]
    fn ascend(#[case] from: &str, #[case] to: &str) {
        let mut c = counter(from);
        c.ascend();
        assert_eq!(c.to_string(), to);
    }

    #[test]
    fn rejects_non_numeric_levels() {
        assert!("1.x".parse::<NestedCounter>().is_err());
    }
}
