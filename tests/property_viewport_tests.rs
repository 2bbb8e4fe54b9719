use chart_scrubber::core::{
    Color, CoordinateMapper, PlotSize, SelectionMask, SeriesStore, ViewportController, map_x,
};
use proptest::prelude::*;

fn store_from_steps(steps: &[f64]) -> SeriesStore {
    let mut x = Vec::with_capacity(steps.len() + 1);
    let mut current = 0.0;
    x.push(current);
    for step in steps {
        current += step;
        x.push(current);
    }
    let y = x.iter().map(|value| (value * 0.37).sin() * 100.0).collect();
    SeriesStore::new(x, vec![y], vec![Color::rgb(0.0, 0.5, 1.0)], vec!["s".to_owned()])
        .expect("valid store")
}

proptest! {
    #[test]
    fn boundary_points_are_pinned(
        x_min in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        width in 1.0f64..4096.0
    ) {
        let x_max = x_min + span;
        prop_assert_eq!(map_x(x_min, width, x_min, x_max), 0.0);
        prop_assert_eq!(map_x(x_max, width, x_min, x_max), width);
    }

    #[test]
    fn pixel_round_trip_recovers_every_index(
        steps in prop::collection::vec(0.5f64..50.0, 1..200),
        width in 100.0f64..4096.0
    ) {
        let store = store_from_steps(&steps);
        let mapper = CoordinateMapper::new(&store, PlotSize::new(width, 300.0));
        for index in 0..store.len() {
            let pixel = mapper.index_to_pixel(index).expect("index in range");
            prop_assert_eq!(mapper.pixel_to_index(pixel), index);
        }
    }

    #[test]
    fn accepted_bounds_keep_an_ordered_index_window(
        steps in prop::collection::vec(0.5f64..50.0, 1..200),
        left_ratio in 0.0f64..1.0,
        right_ratio in 0.0f64..1.0
    ) {
        let store = store_from_steps(&steps);
        let selection = SelectionMask::all(1).expect("selection");
        let mut viewport =
            ViewportController::new(&store, &selection, PlotSize::new(800.0, 300.0), 2)
                .expect("viewport");
        let before = viewport.clone();

        let accepted =
            viewport.set_bounds(&store, &selection, left_ratio * 800.0, right_ratio * 800.0);
        if accepted {
            let range = viewport.index_range();
            prop_assert!(range.left < range.right);
            prop_assert!(range.right < store.len());
            prop_assert!(viewport.bounds().span() >= viewport.min_span_px());
        } else {
            prop_assert_eq!(viewport, before);
        }
    }

    #[test]
    fn identical_bounds_give_identical_transforms(
        steps in prop::collection::vec(0.5f64..50.0, 4..200),
        left in 0.0f64..300.0,
        span in 300.0f64..500.0
    ) {
        let store = store_from_steps(&steps);
        let selection = SelectionMask::all(1).expect("selection");
        let mut viewport =
            ViewportController::new(&store, &selection, PlotSize::new(800.0, 300.0), 2)
                .expect("viewport");

        prop_assume!(viewport.set_bounds(&store, &selection, left, left + span));
        let first = viewport.clone();
        prop_assert!(viewport.set_bounds(&store, &selection, 0.0, 800.0));
        prop_assert!(viewport.set_bounds(&store, &selection, left, left + span));
        prop_assert_eq!(viewport, first);
    }
}
