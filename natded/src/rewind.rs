/// Restore the state of mutable data structures.
///
/// When a conditional derivation fails, the lines and subproofs it opened
/// are discarded by rewinding the proof log and the subproof stack.
/// Such data structures implement `Rewind<T>` if
/// `T` is a cheap and small characterisation of their state,
/// typically their lengths.
pub trait Rewind<T> {
    fn rewind(&mut self, state: T);
}
