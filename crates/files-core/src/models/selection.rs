use super::FileEntry;

/// Result of the `selectedFiles` getter.
///
/// Callers match on the variant instead of checking a length: an empty
/// selection is its own state, distinct from a list that happens to be
/// short.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SelectedFiles<'a> {
    /// Nothing is selected
    Empty,
    /// Selected entries, in selection order (may contain duplicates)
    NonEmpty(&'a [FileEntry]),
}

impl<'a> SelectedFiles<'a> {
    pub(crate) fn from_slice(selected: &'a [FileEntry]) -> Self {
        if selected.is_empty() {
            Self::Empty
        } else {
            Self::NonEmpty(selected)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Selected entries, or an empty slice.
    pub fn as_slice(&self) -> &'a [FileEntry] {
        match self {
            Self::Empty => &[],
            Self::NonEmpty(files) => files,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slice_is_empty_variant() {
        let selected = SelectedFiles::from_slice(&[]);
        assert_eq!(selected, SelectedFiles::Empty);
        assert!(selected.is_empty());
        assert_eq!(selected.len(), 0);
        assert!(selected.as_slice().is_empty());
    }

    #[test]
    fn test_non_empty_keeps_order() {
        let files = vec![FileEntry::new("/b"), FileEntry::new("/a")];
        let selected = SelectedFiles::from_slice(&files);

        assert!(!selected.is_empty());
        assert_eq!(selected.len(), 2);
        assert_eq!(selected.as_slice()[0].path, "/b");
        assert_eq!(selected.as_slice()[1].path, "/a");
    }
}
