use crate::layout::Coordinate;

/// Cost of moving one row.
pub const ROW_WEIGHT: i64 = 10;
/// Cost of moving one block, i.e. crossing an aisle.
pub const BLOCK_WEIGHT: i64 = 4;
/// Cost of shifting one seat inside a block.
pub const POSITION_WEIGHT: i64 = 1;

/// Weighted grid distance between two seats.
pub fn distance(a: Coordinate, b: Coordinate) -> i64 {
    ROW_WEIGHT * (a.row - b.row).abs()
        + BLOCK_WEIGHT * (a.block - b.block).abs()
        + POSITION_WEIGHT * (a.position - b.position).abs()
}

/// Same row, same block, neighboring positions.
pub fn is_adjacent(a: Coordinate, b: Coordinate) -> bool {
    a.is_mapped()
        && b.is_mapped()
        && a.row == b.row
        && a.block == b.block
        && (a.position - b.position).abs() == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: i64, block: i64, position: i64) -> Coordinate {
        Coordinate { row, block, position }
    }

    #[test]
    fn test_distance_weights() {
        assert_eq!(distance(at(5, 0, 0), at(5, 0, 0)), 0);
        assert_eq!(distance(at(5, 0, 0), at(5, 0, 1)), 1);
        assert_eq!(distance(at(5, 0, 2), at(5, 1, 0)), 6);
        assert_eq!(distance(at(5, 0, 0), at(6, 0, 0)), 10);
        assert_eq!(distance(at(3, 2, 1), at(1, 0, 0)), 29);
        assert_eq!(distance(at(1, 0, 0), at(3, 2, 1)), 29);
    }

    #[test]
    fn test_unmapped_seats_are_far() {
        let lost = Coordinate::unmapped(5);
        assert_eq!(distance(at(5, 0, 0), lost), 4 * 99 + 99);
        assert!(distance(at(5, 1, 2), lost) > distance(at(9, 1, 2), at(5, 1, 2)));
    }

    #[test]
    fn test_adjacency() {
        assert!(is_adjacent(at(5, 0, 0), at(5, 0, 1)));
        assert!(is_adjacent(at(5, 1, 2), at(5, 1, 1)));

        assert!(!is_adjacent(at(5, 0, 2), at(5, 1, 0)));
        assert!(!is_adjacent(at(5, 0, 0), at(6, 0, 1)));
        assert!(!is_adjacent(at(5, 0, 0), at(5, 0, 2)));
        assert!(!is_adjacent(at(5, 0, 0), at(5, 0, 0)));
        assert!(!is_adjacent(Coordinate::unmapped(5), Coordinate::unmapped(5)));
    }
}
