use super::error::PlaybackError;

/// Position in an ordered track list. Moves wrap at both ends; every move is a
/// no-op on an empty list.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct PlaylistCursor {
    index: usize,
    len: usize,
}

impl PlaylistCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current index, `None` when the list is empty.
    pub fn index(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.index)
    }

    pub fn next(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.len;
        Some(self.index)
    }

    pub fn previous(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.index = if self.index == 0 {
            self.len - 1
        } else {
            self.index - 1
        };
        Some(self.index)
    }

    pub fn select(&mut self, index: usize) -> Result<usize, PlaybackError> {
        if index >= self.len {
            return Err(PlaybackError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = index;
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_start() {
        let mut c = PlaylistCursor::new(3);
        c.select(2).unwrap();
        assert_eq!(c.next(), Some(0));
    }

    #[test]
    fn previous_wraps_to_end() {
        let mut c = PlaylistCursor::new(3);
        assert_eq!(c.previous(), Some(2));
    }

    #[test]
    fn previous_then_next_returns_to_start_for_every_index() {
        for len in 1..=6 {
            for start in 0..len {
                let mut c = PlaylistCursor::new(len);
                c.select(start).unwrap();
                c.previous();
                c.next();
                assert_eq!(c.index(), Some(start), "len {len}, start {start}");
                c.next();
                c.previous();
                assert_eq!(c.index(), Some(start), "len {len}, start {start}");
            }
        }
    }

    #[test]
    fn single_track_list_stays_put() {
        let mut c = PlaylistCursor::new(1);
        assert_eq!(c.next(), Some(0));
        assert_eq!(c.previous(), Some(0));
    }

    #[test]
    fn empty_list_moves_are_noops() {
        let mut c = PlaylistCursor::new(0);
        assert_eq!(c.index(), None);
        assert_eq!(c.next(), None);
        assert_eq!(c.previous(), None);
        assert!(matches!(
            c.select(0),
            Err(PlaybackError::OutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn select_out_of_range_keeps_index() {
        let mut c = PlaylistCursor::new(4);
        c.select(1).unwrap();
        assert!(matches!(
            c.select(4),
            Err(PlaybackError::OutOfRange { index: 4, len: 4 })
        ));
        assert_eq!(c.index(), Some(1));
    }
}
