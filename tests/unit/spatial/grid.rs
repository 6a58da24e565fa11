//! Tests for bounding boxes and lazily populated grid storage

#[cfg(test)]
mod tests {
    use pixel_collapse::spatial::grid::{BoundingBox, SparseGrid};

    // Tests size-based construction and inclusive containment
    // Verified by making max exclusive in from_size
    #[test]
    fn test_bounding_box_from_size() {
        let bounds = BoundingBox::from_size(4, 3);
        assert_eq!(bounds.width(), 4);
        assert_eq!(bounds.height(), 3);
        assert_eq!(bounds.area(), 12);
        assert!(bounds.contains([0, 0]));
        assert!(bounds.contains([3, 2]));
        assert!(!bounds.contains([4, 2]));
        assert!(!bounds.contains([3, 3]));
        assert!(!bounds.contains([-1, 0]));
    }

    // Tests empty boxes contain nothing
    // Verified by removing the max < min guard in width
    #[test]
    fn test_zero_sized_box() {
        let bounds = BoundingBox::from_size(0, 5);
        assert_eq!(bounds.width(), 0);
        assert_eq!(bounds.area(), 0);
        assert!(!bounds.contains([0, 0]));
        assert_eq!(bounds.points().count(), 0);
    }

    // Tests row-major point iteration
    // Verified by swapping the nested iteration order
    #[test]
    fn test_points_row_major() {
        let bounds = BoundingBox::from_size(2, 2);
        let points: Vec<[i32; 2]> = bounds.points().collect();
        assert_eq!(points, vec![[0, 0], [1, 0], [0, 1], [1, 1]]);
    }

    // Tests cells are created lazily and only once
    // Verified by always pushing a new cell in get_or_insert_with
    #[test]
    fn test_sparse_grid_lazy_creation() {
        let mut grid: SparseGrid<u32> = SparseGrid::new(BoundingBox::from_size(10, 10));
        assert!(grid.is_empty());
        assert!(grid.get([3, 4]).is_none());

        if let Some(cell) = grid.get_or_insert_with([3, 4], || 7) {
            *cell += 1;
        }
        let again = grid.get_or_insert_with([3, 4], || 100).copied();

        assert_eq!(again, Some(8));
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.get([3, 4]), Some(&8));
        assert!(grid.get([4, 3]).is_none(), "Transposed coordinate must stay empty");
    }

    // Tests out-of-bounds coordinates are never stored
    // Verified by removing the bounds check from local_index
    #[test]
    fn test_sparse_grid_rejects_out_of_bounds() {
        let mut grid: SparseGrid<u8> = SparseGrid::new(BoundingBox::from_size(2, 2));
        assert!(grid.get_or_insert_with([2, 0], || 1).is_none());
        assert!(grid.get_or_insert_with([0, -1], || 1).is_none());
        assert!(grid.is_empty());
    }

    // Tests iteration reports positions in creation order
    // Verified by storing cells without their coordinates
    #[test]
    fn test_sparse_grid_iter() {
        let mut grid: SparseGrid<char> = SparseGrid::new(BoundingBox::from_size(3, 3));
        let _ = grid.get_or_insert_with([2, 2], || 'a');
        let _ = grid.get_or_insert_with([0, 1], || 'b');
        if let Some(cell) = grid.get_mut([2, 2]) {
            *cell = 'c';
        }

        let cells: Vec<([i32; 2], char)> = grid.iter().map(|(p, c)| (p, *c)).collect();
        assert_eq!(cells, vec![([2, 2], 'c'), ([0, 1], 'b')]);
    }

    // Tests grids over boxes not anchored at the origin
    // Verified by ignoring min when computing the slot index
    #[test]
    fn test_sparse_grid_offset_bounds() {
        let bounds = BoundingBox {
            min: [-2, -2],
            max: [1, 1],
        };
        let mut grid: SparseGrid<i32> = SparseGrid::new(bounds);
        let _ = grid.get_or_insert_with([-2, -2], || 1);
        let _ = grid.get_or_insert_with([1, 1], || 2);
        assert_eq!(grid.get([-2, -2]), Some(&1));
        assert_eq!(grid.get([1, 1]), Some(&2));
        assert_eq!(grid.len(), 2);
    }
}
