use crate::Rewind;
use alloc::vec::Vec;

/// Stack of open subproofs, innermost last.
///
/// Every entry is the line number of the `Show` line that opened the subproof,
/// so the number of entries is the current nesting depth.
#[derive(Debug, Default)]
pub struct Scopes(Vec<usize>);

impl Scopes {
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn push(&mut self, show: usize) {
        self.0.push(show)
    }

    pub fn pop(&mut self) -> Option<usize> {
        self.0.pop()
    }

    pub fn clear(&mut self) {
        self.0.clear()
    }
}

impl Rewind<usize> for Scopes {
    fn rewind(&mut self, depth: usize) {
        assert!(self.0.len() >= depth);
        self.0.truncate(depth)
    }
}
