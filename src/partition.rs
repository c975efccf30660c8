/// Splits `items` round-robin into exactly `parts` buckets: element `i` lands
/// in bucket `i % parts`. Buckets borrow from `items`.
///
/// Round-robin rather than contiguous blocks, so every bucket sees a similar
/// cross-section of the input even when it arrives sorted or replicated.
pub fn partition<T>(items: &[T], parts: usize) -> Vec<Vec<&T>> {
    assert!(parts > 0, "partition count must be at least 1");

    let mut buckets: Vec<Vec<&T>> = (0..parts)
        .map(|_| Vec::with_capacity(items.len() / parts + 1))
        .collect();
    for (idx, item) in items.iter().enumerate() {
        buckets[idx % parts].push(item);
    }
    buckets
}
