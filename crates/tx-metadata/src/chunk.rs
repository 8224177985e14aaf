//! Splitting oversized text and byte strings into bounded leaves.

use crate::{MetadataLimits, MetadataValue};

/// Split `text` into a `List` of `Text` leaves of at most 64 UTF-8 bytes.
pub fn text_chunks(text: &str) -> MetadataValue {
    text_chunks_with(&MetadataLimits::DEFAULT, text)
}

/// Split `bytes` into a `List` of `Bytes` leaves of at most 64 bytes.
pub fn bytes_chunks(bytes: &[u8]) -> MetadataValue {
    bytes_chunks_with(&MetadataLimits::DEFAULT, bytes)
}

/// Never splits inside a multi-byte code point.
pub fn text_chunks_with(limits: &MetadataLimits, text: &str) -> MetadataValue {
    let max = limits.max_text_len;
    let chunks = chunks_by(
        max,
        text,
        str::len,
        |s| split_utf8(max, s),
        |s| MetadataValue::Text(s.to_owned()),
    );
    MetadataValue::List(chunks)
}

pub fn bytes_chunks_with(limits: &MetadataLimits, bytes: &[u8]) -> MetadataValue {
    let max = limits.max_bytes_len.max(1);
    let chunks = chunks_by(
        max,
        bytes,
        <[u8]>::len,
        |b| b.split_at(max.min(b.len())),
        |b| MetadataValue::Bytes(b.to_vec()),
    );
    MetadataValue::List(chunks)
}

/// Generic chunking engine.
///
/// While the remainder measures more than `max`, `split` peels off a prefix
/// measuring at most `max` and `leaf` turns it into a value. A non-empty
/// tail is emitted last; an empty input yields no leaves.
///
/// `split` must make progress: the prefix it returns must be non-empty.
/// For text, a single character wider than `max` forms its own
/// (over-long) chunk, which range validation then reports.
pub fn chunks_by<'a, T, M, S, L>(
    max: usize,
    input: &'a T,
    measure: M,
    split: S,
    leaf: L,
) -> Vec<MetadataValue>
where
    T: ?Sized,
    M: Fn(&T) -> usize,
    S: Fn(&'a T) -> (&'a T, &'a T),
    L: Fn(&T) -> MetadataValue,
{
    let mut out = Vec::new();
    let mut rest = input;
    while measure(rest) > max {
        let (head, tail) = split(rest);
        debug_assert!(measure(head) > 0);
        out.push(leaf(head));
        rest = tail;
    }
    if measure(rest) > 0 {
        out.push(leaf(rest));
    }
    out
}

// Accumulate whole characters until the next one would overflow `max`.
fn split_utf8(max: usize, s: &str) -> (&str, &str) {
    let mut end = 0;
    for ch in s.chars() {
        let next = end + ch.len_utf8();
        if next > max {
            break;
        }
        end = next;
    }
    if end == 0 {
        end = s.chars().next().map_or(0, char::len_utf8);
    }
    s.split_at(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_lens(v: &MetadataValue) -> Vec<usize> {
        match v {
            MetadataValue::List(items) => items
                .iter()
                .map(|item| match item {
                    MetadataValue::Text(s) => s.len(),
                    other => panic!("expected text chunk, got {other:?}"),
                })
                .collect(),
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn ascii_130_gives_64_64_2() {
        let text = "a".repeat(130);
        assert_eq!(text_lens(&text_chunks(&text)), vec![64, 64, 2]);
    }

    #[test]
    fn empty_input_gives_empty_list() {
        assert_eq!(text_chunks(""), MetadataValue::List(vec![]));
        assert_eq!(bytes_chunks(&[]), MetadataValue::List(vec![]));
    }

    #[test]
    fn short_input_is_still_wrapped() {
        assert_eq!(
            text_chunks("hi"),
            MetadataValue::List(vec![MetadataValue::text("hi")])
        );
        assert_eq!(
            bytes_chunks(&[1; 64]),
            MetadataValue::List(vec![MetadataValue::bytes(vec![1; 64])])
        );
    }

    #[test]
    fn multibyte_char_is_never_split() {
        // 63 ASCII bytes, then a 4-byte emoji that would straddle the boundary.
        let text = format!("{}😀tail", "a".repeat(63));
        let chunks = text_chunks(&text);
        assert_eq!(text_lens(&chunks), vec![63, 8]);
        assert_eq!(
            chunks,
            MetadataValue::List(vec![
                MetadataValue::text("a".repeat(63)),
                MetadataValue::text("😀tail"),
            ])
        );
    }

    #[test]
    fn bytes_split_at_exact_bound() {
        let chunks = bytes_chunks(&[7u8; 129]);
        match chunks {
            MetadataValue::List(items) => {
                let lens: Vec<usize> = items
                    .iter()
                    .map(|i| match i {
                        MetadataValue::Bytes(b) => b.len(),
                        other => panic!("unexpected {other:?}"),
                    })
                    .collect();
                assert_eq!(lens, vec![64, 64, 1]);
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn char_wider_than_bound_still_progresses() {
        let limits = MetadataLimits {
            max_bytes_len: 64,
            max_text_len: 3,
        };
        assert_eq!(
            text_chunks_with(&limits, "😀ab"),
            MetadataValue::List(vec![MetadataValue::text("😀"), MetadataValue::text("ab")])
        );
    }

    #[test]
    fn custom_bound() {
        let limits = MetadataLimits {
            max_bytes_len: 64,
            max_text_len: 3,
        };
        assert_eq!(
            text_chunks_with(&limits, "abcdefg"),
            MetadataValue::List(vec![
                MetadataValue::text("abc"),
                MetadataValue::text("def"),
                MetadataValue::text("g"),
            ])
        );
    }
}
