//! Tests for canvas collapse, neighbour restrictions, and worklist growth

#[cfg(test)]
mod tests {
    use pixel_collapse::algorithm::propagation::Canvas;
    use pixel_collapse::algorithm::selection::ContradictionPolicy;
    use pixel_collapse::analysis::palette::Color;
    use pixel_collapse::analysis::rules::AdjacencyRules;
    use pixel_collapse::io::error::AlgorithmError;
    use pixel_collapse::spatial::direction::Direction;
    use pixel_collapse::spatial::grid::BoundingBox;

    const A: Color = Color::rgba(255, 0, 0, 255);
    const B: Color = Color::rgba(0, 0, 255, 255);
    const UNKNOWN: Color = Color::rgba(1, 2, 3, 4);

    fn segregated_rules() -> AdjacencyRules {
        AdjacencyRules::builder()
            .count(A, 1)
            .count(B, 1)
            .observe_all(A, A)
            .observe_all(B, B)
            .build()
    }

    // Tests a collapsed seed gets a known color and queues in-bounds neighbours
    // Verified by enqueueing all eight neighbours regardless of bounds
    #[test]
    fn test_seed_collapse_enqueues_in_bounds_neighbours() {
        let rules = segregated_rules();
        let mut canvas = Canvas::new(&rules, BoundingBox::from_size(3, 3), 7);

        assert!(canvas.collapse([0, 0]).expect("collapse"));
        let color = canvas.pixel([0, 0]).and_then(|p| p.color());
        assert!(matches!(color, Some(A | B)));
        assert_eq!(canvas.pending(), 3);
        assert_eq!(canvas.collapsed_count(), 1);
    }

    // Tests collapsing the same point twice changes nothing
    // Verified by redrawing the color on repeated collapse
    #[test]
    fn test_collapse_is_idempotent() {
        let rules = segregated_rules();
        let mut canvas = Canvas::new(&rules, BoundingBox::from_size(4, 4), 3);

        assert!(canvas.collapse([1, 1]).expect("first"));
        let first = canvas.pixel([1, 1]).and_then(|p| p.color());
        let pending = canvas.pending();

        assert!(!canvas.collapse([1, 1]).expect("second"));
        assert_eq!(canvas.pixel([1, 1]).and_then(|p| p.color()), first);
        assert_eq!(canvas.pending(), pending);
        assert_eq!(canvas.collapsed_count(), 1);
    }

    // Tests coordinates outside the rectangle are ignored
    // Verified by dropping the bounds check in collapse
    #[test]
    fn test_out_of_bounds_collapse_ignored() {
        let rules = segregated_rules();
        let mut canvas = Canvas::new(&rules, BoundingBox::from_size(2, 2), 3);

        assert!(!canvas.collapse([2, 0]).expect("ignored"));
        assert!(!canvas.collapse([-1, 1]).expect("ignored"));
        assert_eq!(canvas.collapsed_count(), 0);
        assert!(canvas.pixel([2, 0]).is_none());
    }

    // Tests a neighbour's rule is read from its side towards the pixel
    // Verified by looking up the rule in the forward direction
    #[test]
    fn test_restriction_uses_opposite_direction() {
        let rules = AdjacencyRules::builder()
            .count(A, 1)
            .count(B, 1)
            .observe(A, Direction::Right, B)
            .build();

        for seed in 0..20 {
            let mut canvas = Canvas::new(&rules, BoundingBox::from_size(2, 1), seed);
            assert!(canvas.assign([0, 0], A).expect("assign"));
            assert!(canvas.collapse([1, 0]).expect("collapse"));

            let pixel = canvas.pixel([1, 0]).expect("pixel exists");
            assert_eq!(pixel.color(), Some(B));
            assert_eq!(rules.colors_in(pixel.restricted()), vec![A]);
        }
    }

    // Tests neighbours without a rule in the needed direction add no restriction
    // Verified by propagating NoRuleForDirection out of collapse
    #[test]
    fn test_missing_direction_is_unconstrained() {
        let rules = AdjacencyRules::builder()
            .count(A, 1)
            .count(B, 1)
            .observe(A, Direction::Left, A)
            .build();

        let mut canvas = Canvas::new(&rules, BoundingBox::from_size(2, 1), 11);
        assert!(canvas.assign([0, 0], A).expect("assign"));
        assert!(canvas.collapse([1, 0]).expect("collapse"));

        let pixel = canvas.pixel([1, 0]).expect("pixel exists");
        assert!(pixel.restricted().is_empty());
        assert!(pixel.is_collapsed());
    }

    // Tests conflicting neighbours raise a contradiction carrying the position
    // Verified by drawing from the full palette when all colors are restricted
    #[test]
    fn test_contradiction_reports_position() {
        let rules = segregated_rules();
        let mut canvas = Canvas::new(&rules, BoundingBox::from_size(3, 1), 5);

        assert!(canvas.assign([0, 0], A).expect("assign A"));
        assert!(canvas.assign([2, 0], B).expect("assign B"));

        match canvas.collapse([1, 0]) {
            Err(AlgorithmError::NoColorAvailable {
                position,
                restricted,
                known,
            }) => {
                assert_eq!(position, Some([1, 0]));
                assert_eq!(restricted, 2);
                assert_eq!(known, 2);
            }
            other => panic!("Expected contradiction, got {other:?}"),
        }
        assert!(!canvas.is_collapsed([1, 0]));
    }

    // Tests the unconstrained policy fills contradictions and counts them
    // Verified by aborting regardless of the configured policy
    #[test]
    fn test_unconstrained_policy_recovers() {
        let rules = segregated_rules();
        let mut canvas = Canvas::new(&rules, BoundingBox::from_size(3, 1), 5)
            .with_policy(ContradictionPolicy::Unconstrained);

        assert!(canvas.assign([0, 0], A).expect("assign A"));
        assert!(canvas.assign([2, 0], B).expect("assign B"));
        assert!(canvas.collapse([1, 0]).expect("unconstrained draw"));

        assert!(canvas.is_complete());
        assert_eq!(canvas.contradictions(), 1);
    }

    // Tests pinning rejects colors missing from the rule table
    // Verified by accepting any color in assign
    #[test]
    fn test_assign_unknown_color() {
        let rules = segregated_rules();
        let mut canvas = Canvas::new(&rules, BoundingBox::from_size(2, 2), 1);

        assert!(matches!(
            canvas.assign([0, 0], UNKNOWN),
            Err(AlgorithmError::UnknownColor { color }) if color == UNKNOWN
        ));
        assert!(!canvas.assign([9, 9], A).expect("outside is ignored"));
        assert_eq!(canvas.collapsed_count(), 0);
    }

    // Tests stepping drains the worklist and eventually fills the rectangle
    // Verified by skipping the enqueue after a successful collapse
    #[test]
    fn test_step_until_complete() {
        let rules = AdjacencyRules::builder()
            .count(A, 3)
            .observe_all(A, A)
            .build();
        let mut canvas = Canvas::new(&rules, BoundingBox::from_size(5, 4), 9);

        let seed = canvas.create_random_seed_point();
        assert!(canvas.bounds().contains(seed));
        assert!(canvas.collapse(seed).expect("seed"));

        while canvas.step().expect("step").is_some() {}

        assert!(canvas.is_complete());
        assert_eq!(canvas.pending(), 0);
        assert_eq!(canvas.collapsed_pixels().count(), 20);
        assert!(canvas.collapsed_pixels().all(|(_, color)| color == A));
        assert_eq!(canvas.step().expect("empty step"), None);
    }

    // Tests the random seed point always lands inside the rectangle
    // Verified by sampling from an exclusive range on the max edge
    #[test]
    fn test_seed_point_within_bounds() {
        let rules = segregated_rules();
        let bounds = BoundingBox {
            min: [-3, 2],
            max: [-1, 4],
        };
        let mut canvas = Canvas::new(&rules, bounds, 17);

        for _ in 0..200 {
            let point = canvas.create_random_seed_point();
            assert!(bounds.contains(point), "{point:?} outside {bounds:?}");
        }
    }
}
