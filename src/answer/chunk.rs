//! Fixed-size word chunking of the question context.

/// Splits `context` on whitespace and partitions the words into consecutive
/// chunks of `chunk_words` words each; the last chunk may be shorter.
///
/// Chunk order follows word order. A context of N words yields exactly
/// `ceil(N / chunk_words)` chunks; a whitespace-only context yields none.
///
/// # Panics
///
/// Panics if `chunk_words` is zero.
pub fn chunk_words(context: &str, chunk_words: usize) -> Vec<String> {
    assert!(chunk_words > 0, "chunk size must be positive");
    let words: Vec<&str> = context.split_whitespace().collect();
    words.chunks(chunk_words).map(|c| c.join(" ")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_run(n: usize) -> String {
        let words: Vec<String> = (0..n).map(|i| format!("w{i}")).collect();
        words.join(" ")
    }

    #[test]
    fn short_context_is_a_single_chunk() {
        let chunks = chunk_words("one two three", 1000);
        assert_eq!(chunks, vec!["one two three".to_string()]);
    }

    #[test]
    fn chunk_count_is_ceiling_of_word_count() {
        let chunks = chunk_words(&word_run(2500), 1000);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].split_whitespace().count(), 1000);
        assert_eq!(chunks[1].split_whitespace().count(), 1000);
        assert_eq!(chunks[2].split_whitespace().count(), 500);
    }

    #[test]
    fn exact_multiple_fills_every_chunk() {
        let chunks = chunk_words(&word_run(2000), 1000);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1].split_whitespace().count(), 1000);
    }

    #[test]
    fn chunks_preserve_word_order() {
        let chunks = chunk_words("a b c d e", 2);
        assert_eq!(chunks, vec!["a b", "c d", "e"]);
    }

    #[test]
    fn whitespace_only_context_yields_no_chunks() {
        assert!(chunk_words("  \n\t ", 1000).is_empty());
    }
}
