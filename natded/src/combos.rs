use alloc::vec::Vec;

/// Lexicographically ordered `k`-element subsets of `0..n`.
///
/// ~~~
/// use natded::Combinations;
/// let combos: Vec<_> = Combinations::new(4, 2).collect();
/// let expected = vec![[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]];
/// assert_eq!(combos, expected);
/// assert_eq!(Combinations::new(2, 3).count(), 0);
/// ~~~
pub struct Combinations {
    n: usize,
    idx: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        let idx = (0..k).collect();
        let done = k > n;
        Self { n, idx, done }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.idx.clone();
        let k = self.idx.len();
        // rightmost position that has not reached its maximal value
        match (0..k).rev().find(|&i| self.idx[i] < self.n - k + i) {
            Some(i) => {
                self.idx[i] += 1;
                for j in i + 1..k {
                    self.idx[j] = self.idx[j - 1] + 1;
                }
            }
            None => self.done = true,
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binomial() {
        assert_eq!(Combinations::new(6, 3).count(), 20);
        assert_eq!(Combinations::new(5, 1).count(), 5);
        assert_eq!(Combinations::new(3, 3).count(), 1);
    }
}
