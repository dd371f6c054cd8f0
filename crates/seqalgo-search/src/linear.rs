/// Position of the first element equal to `target`, scanning from the front.
///
/// Needs only equality on `T`; the slice does not have to be sorted.
pub fn linear_search<T: PartialEq>(seq: &[T], target: &T) -> Option<usize> {
    seq.iter().position(|x| x == target)
}
