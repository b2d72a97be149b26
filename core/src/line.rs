//! Compaction and merging of a single line.
//!
//! A line is four cells read in traversal order: index 0 is the end tiles
//! compact toward. Every move direction goes through [`resolve_line`], only
//! the traversal differs.

use smallvec::SmallVec;

use crate::*;

/// Two tiles at line indices `sources` combined into `value` at `destination`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LineMerge {
    pub destination: usize,
    pub value: TileValue,
    pub sources: [usize; 2],
}

/// A tile that changed index without merging.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LineSlide {
    pub from: usize,
    pub to: usize,
    pub value: TileValue,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineResolution {
    pub tiles: [TileValue; BOARD_SIZE],
    pub score_gained: Score,
    pub merges: SmallVec<[LineMerge; 2]>,
    pub slides: SmallVec<[LineSlide; 3]>,
}

impl LineResolution {
    pub fn changed_from(&self, line: &[TileValue; BOARD_SIZE]) -> bool {
        self.tiles != *line
    }
}

/// Compacts `line` toward index 0 and merges equal neighbours pairwise.
///
/// Merges are greedy from index 0 and a tile merges at most once, so
/// `[2, 2, 2, 0]` becomes `[4, 2, 0, 0]`. Tiles at [`MAX_TILE`] never merge.
pub fn resolve_line(line: [TileValue; BOARD_SIZE]) -> LineResolution {
    let dense: SmallVec<[(usize, TileValue); BOARD_SIZE]> = line
        .iter()
        .copied()
        .enumerate()
        .filter(|&(_, value)| value != 0)
        .collect();

    let mut resolution = LineResolution {
        tiles: [0; BOARD_SIZE],
        score_gained: 0,
        merges: SmallVec::new(),
        slides: SmallVec::new(),
    };

    let mut destination = 0;
    let mut scan = 0;
    while let Some(&(from, value)) = dense.get(scan) {
        match dense.get(scan + 1) {
            Some(&(behind, next_value)) if next_value == value && value < MAX_TILE => {
                let merged = value * 2;
                resolution.tiles[destination] = merged;
                resolution.score_gained = resolution.score_gained.saturating_add(merged);
                resolution.merges.push(LineMerge {
                    destination,
                    value: merged,
                    sources: [from, behind],
                });
                scan += 2;
            }
            _ => {
                resolution.tiles[destination] = value;
                if from != destination {
                    resolution.slides.push(LineSlide {
                        from,
                        to: destination,
                        value,
                    });
                }
                scan += 1;
            }
        }
        destination += 1;
    }

    resolution
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_line_stays_empty() {
        let resolved = resolve_line([0, 0, 0, 0]);

        assert_eq!(resolved.tiles, [0, 0, 0, 0]);
        assert_eq!(resolved.score_gained, 0);
        assert!(resolved.merges.is_empty());
        assert!(resolved.slides.is_empty());
    }

    #[test]
    fn single_tile_compacts_without_merge() {
        let resolved = resolve_line([0, 0, 8, 0]);

        assert_eq!(resolved.tiles, [8, 0, 0, 0]);
        assert_eq!(resolved.score_gained, 0);
        assert!(resolved.merges.is_empty());
        assert_eq!(
            resolved.slides.as_slice(),
            [LineSlide {
                from: 2,
                to: 0,
                value: 8
            }]
        );
    }

    #[test]
    fn tile_already_in_place_is_unchanged() {
        let line = [4, 0, 0, 0];
        let resolved = resolve_line(line);

        assert_eq!(resolved.tiles, line);
        assert!(!resolved.changed_from(&line));
        assert!(resolved.slides.is_empty());
    }

    #[test]
    fn three_equal_tiles_merge_leading_pair_only() {
        let resolved = resolve_line([2, 2, 2, 0]);

        assert_eq!(resolved.tiles, [4, 2, 0, 0]);
        assert_eq!(resolved.score_gained, 4);
        assert_eq!(
            resolved.merges.as_slice(),
            [LineMerge {
                destination: 0,
                value: 4,
                sources: [0, 1]
            }]
        );
        assert_eq!(
            resolved.slides.as_slice(),
            [LineSlide {
                from: 2,
                to: 1,
                value: 2
            }]
        );
    }

    #[test]
    fn merged_tile_does_not_merge_again() {
        let resolved = resolve_line([2, 2, 4, 0]);

        assert_eq!(resolved.tiles, [4, 4, 0, 0]);
        assert_eq!(resolved.score_gained, 4);
        assert_eq!(resolved.merges.len(), 1);
    }

    #[test]
    fn four_equal_tiles_merge_in_two_pairs() {
        let resolved = resolve_line([2, 2, 2, 2]);

        assert_eq!(resolved.tiles, [4, 4, 0, 0]);
        assert_eq!(resolved.score_gained, 8);
        assert_eq!(
            resolved.merges.as_slice(),
            [
                LineMerge {
                    destination: 0,
                    value: 4,
                    sources: [0, 1]
                },
                LineMerge {
                    destination: 1,
                    value: 4,
                    sources: [2, 3]
                },
            ]
        );
    }

    #[test]
    fn merge_across_gap_records_original_indices() {
        let resolved = resolve_line([0, 16, 0, 16]);

        assert_eq!(resolved.tiles, [32, 0, 0, 0]);
        assert_eq!(resolved.score_gained, 32);
        assert_eq!(resolved.merges[0].sources, [1, 3]);
        assert_eq!(resolved.merges[0].destination, 0);
    }

    #[test]
    fn unequal_full_line_does_not_change() {
        let line = [2, 4, 8, 16];
        let resolved = resolve_line(line);

        assert!(!resolved.changed_from(&line));
        assert_eq!(resolved.score_gained, 0);
    }

    #[test]
    fn largest_tiles_do_not_merge() {
        let resolved = resolve_line([0, MAX_TILE, 0, MAX_TILE]);

        assert_eq!(resolved.tiles, [MAX_TILE, MAX_TILE, 0, 0]);
        assert_eq!(resolved.score_gained, 0);
        assert!(resolved.merges.is_empty());

        let resolved = resolve_line([MAX_TILE / 2, MAX_TILE / 2, 0, 0]);

        assert_eq!(resolved.tiles, [MAX_TILE, 0, 0, 0]);
        assert!(is_tile_value(resolved.tiles[0]));
    }
}
