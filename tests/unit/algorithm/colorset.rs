//! Tests for `ColorSet` membership, merging, and complements

#[cfg(test)]
mod tests {
    use pixel_collapse::algorithm::colorset::ColorSet;

    // Verifies new ColorSet is empty with count 0
    // Verified by initializing bitset with all bits set to 1
    #[test]
    fn test_new_set_is_empty() {
        let set = ColorSet::new(10);
        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
        assert_eq!(set.capacity(), 10);
    }

    // Tests insertion and containment checking
    // Verified by removing the bit-setting logic from insert
    #[test]
    fn test_insert_and_contains() {
        let mut set = ColorSet::new(10);
        set.insert(5);
        set.insert(5);
        assert!(set.contains(5));
        assert!(!set.contains(3));
        assert_eq!(set.len(), 1);
    }

    // Tests ids beyond the palette are ignored
    // Verified by growing the bitset on out-of-range inserts
    #[test]
    fn test_out_of_range_ids_ignored() {
        let mut set = ColorSet::new(3);
        set.insert(3);
        set.insert(100);
        assert!(set.is_empty());
        assert!(!set.contains(100));
    }

    // Tests merging two sets keeps every member
    // Verified by changing union to intersection
    #[test]
    fn test_union_with() {
        let mut left = ColorSet::new(8);
        left.insert(1);
        left.insert(3);

        let mut right = ColorSet::new(8);
        right.insert(3);
        right.insert(6);

        left.union_with(&right);
        assert_eq!(left.to_vec(), vec![1, 3, 6]);
    }

    // Tests complement merge adds exactly the ids missing from the other set
    // Verified by merging the other set directly instead of its complement
    #[test]
    fn test_union_with_complement() {
        let mut restricted = ColorSet::new(5);
        restricted.insert(0);

        let mut allowed = ColorSet::new(5);
        allowed.insert(0);
        allowed.insert(2);

        restricted.union_with_complement(&allowed);
        assert_eq!(restricted.to_vec(), vec![0, 1, 3, 4]);
    }

    // Tests complement of an empty set covers the whole capacity
    // Verified by iterating only over ids present in the other set
    #[test]
    fn test_complement_of_empty_fills_capacity() {
        let mut set = ColorSet::new(4);
        set.union_with_complement(&ColorSet::new(4));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(set.len(), set.capacity());
        assert_eq!(set.to_string(), "ColorSet(4 colors: [0, 1, 2, 3])");
    }
}
