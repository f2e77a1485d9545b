use crate::{DiffSegment, diffs::backtrace::TaggedToken};

/// Merges maximal runs of consecutive tokens of the same kind into single
/// segments, keeping their order and concatenating their text.
pub fn group_segments<'a, I>(tagged_tokens: I) -> Vec<DiffSegment>
where
    I: IntoIterator<Item = TaggedToken<'a>>,
{
    let mut result: Vec<DiffSegment> = Vec::new();

    for TaggedToken { token, kind } in tagged_tokens {
        match result.last_mut() {
            Some(previous) if previous.kind() == kind => previous.push_str(token.as_str()),
            _ => result.push(DiffSegment::new(kind, token.as_str().to_owned())),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::SegmentKind;

    fn tagged(token: &str, kind: SegmentKind) -> TaggedToken<'_> {
        TaggedToken {
            token: token.into(),
            kind,
        }
    }

    #[test]
    fn test_empty() {
        assert!(group_segments(Vec::new()).is_empty());
    }

    #[test]
    fn test_merges_runs() {
        let segments = group_segments(vec![
            tagged("the", SegmentKind::Unchanged),
            tagged(" ", SegmentKind::Unchanged),
            tagged("very", SegmentKind::Removed),
            tagged(" ", SegmentKind::Removed),
            tagged("quick", SegmentKind::Removed),
            tagged(" ", SegmentKind::Unchanged),
            tagged("fox", SegmentKind::Unchanged),
        ]);

        assert_eq!(
            segments,
            vec![
                DiffSegment::new(SegmentKind::Unchanged, "the ".to_owned()),
                DiffSegment::new(SegmentKind::Removed, "very quick".to_owned()),
                DiffSegment::new(SegmentKind::Unchanged, " fox".to_owned()),
            ]
        );
    }

    #[test]
    fn test_single_token() {
        assert_eq!(
            group_segments(vec![tagged("\t", SegmentKind::Added)]),
            vec![DiffSegment::new(SegmentKind::Added, "\t".to_owned())]
        );
    }
}
