// src/core/indexing/kdtree/tests/test_accumulator.rs

#[cfg(test)]
mod accumulator_tests {
    use crate::core::indexing::kdtree::{
        Accumulator, NearestNeighbour, NearestNeighbours, WithinRadius,
    };

    #[test]
    fn test_single_best_starts_incomplete() {
        let acc = NearestNeighbour::<[f64; 2]>::new(10.0);
        assert!(acc.incomplete());
        assert_eq!(acc.max_distance_sq(), 10.0);
        assert!(acc.best().is_none());
    }

    #[test]
    fn test_single_best_keeps_strictly_closer() {
        let mut acc = NearestNeighbour::<[f64; 2]>::new(10.0);
        acc.update(&[1.0, 1.0], 4.0);
        assert!(!acc.incomplete());
        assert_eq!(acc.max_distance_sq(), 4.0);

        // Equal distance does not replace the first answer.
        acc.update(&[2.0, 2.0], 4.0);
        assert_eq!(acc.best().unwrap().point, [1.0, 1.0]);

        acc.update(&[3.0, 3.0], 1.0);
        assert_eq!(acc.best().unwrap().point, [3.0, 3.0]);
        assert_eq!(acc.max_distance_sq(), 1.0);

        acc.update(&[4.0, 4.0], 2.0);
        let best = acc.into_neighbour().unwrap();
        assert_eq!(best.point, [3.0, 3.0]);
        assert_eq!(best.distance_sq, 1.0);
    }

    #[test]
    fn test_single_best_rejects_beyond_seed() {
        let mut acc = NearestNeighbour::<[f64; 1]>::new(1.0);
        acc.update(&[5.0], 2.0);
        assert!(acc.incomplete());
        assert!(acc.into_neighbour().is_none());
    }

    #[test]
    fn test_single_best_admits_seed_distance_when_empty() {
        let mut acc = NearestNeighbour::<[f64; 1]>::new(1.0);
        acc.update(&[1.0], 1.0);
        assert!(!acc.incomplete());
        assert_eq!(acc.into_neighbour().unwrap().point, [1.0]);
    }

    #[test]
    fn test_k_best_orders_and_crops() {
        let mut acc = NearestNeighbours::<[f64; 1]>::new(3, 100.0);
        acc.update(&[5.0], 25.0);
        acc.update(&[1.0], 1.0);
        assert!(acc.incomplete());
        assert_eq!(acc.max_distance_sq(), 100.0);

        acc.update(&[3.0], 9.0);
        assert!(!acc.incomplete());
        // Full: threshold is the worst held distance.
        assert_eq!(acc.max_distance_sq(), 25.0);

        acc.update(&[2.0], 4.0);
        assert_eq!(acc.max_distance_sq(), 9.0);

        acc.update(&[4.0], 16.0);
        let distances: Vec<f64> = acc.neighbours().iter().map(|n| n.distance_sq).collect();
        assert_eq!(distances, vec![1.0, 4.0, 9.0]);
        assert_eq!(acc.capacity(), 3);
    }

    #[test]
    fn test_k_best_ties_keep_insertion_order() {
        let mut acc = NearestNeighbours::<[f64; 2]>::new(4, 100.0);
        acc.update(&[1.0, 0.0], 1.0);
        acc.update(&[0.0, 1.0], 1.0);
        acc.update(&[0.0, 0.0], 0.0);
        acc.update(&[-1.0, 0.0], 1.0);

        let points: Vec<[f64; 2]> = acc.into_neighbours().into_iter().map(|n| n.point).collect();
        assert_eq!(
            points,
            vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [-1.0, 0.0]]
        );
    }

    #[test]
    fn test_k_best_full_rejects_equal_to_worst() {
        let mut acc = NearestNeighbours::<[f64; 1]>::new(2, 100.0);
        acc.update(&[1.0], 1.0);
        acc.update(&[2.0], 4.0);
        acc.update(&[-2.0], 4.0);
        let points: Vec<[f64; 1]> = acc.into_neighbours().into_iter().map(|n| n.point).collect();
        assert_eq!(points, vec![[1.0], [2.0]]);
    }

    #[test]
    fn test_k_best_zero_capacity_holds_nothing() {
        let mut acc = NearestNeighbours::<[f64; 1]>::new(0, 100.0);
        assert!(!acc.incomplete());
        acc.update(&[1.0], 1.0);
        assert!(acc.neighbours().is_empty());
    }

    #[test]
    fn test_within_radius_is_strict() {
        let mut acc = WithinRadius::<[f64; 1]>::new(4.0);
        acc.update(&[3.0], 3.0);
        acc.update(&[4.0], 4.0);
        acc.update(&[1.0], 1.0);
        assert!(!acc.incomplete());
        assert_eq!(acc.max_distance_sq(), 4.0);

        let found = acc.into_sorted();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].point, [1.0]);
        assert_eq!(found[1].point, [3.0]);
    }
}
