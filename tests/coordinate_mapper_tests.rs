use chart_scrubber::core::{
    Color, CoordinateMapper, PlotSize, SeriesStore, map_x, map_y, pixel_to_x, pixel_to_y,
};

fn scenario_store() -> SeriesStore {
    SeriesStore::new(
        vec![1.0, 2.0, 3.0, 4.0, 5.0],
        vec![vec![100.0, 55.0, 28.0, 99.0, 128.0]],
        vec![Color::rgb(0.2, 0.6, 0.9)],
        vec!["Joined".to_owned()],
    )
    .expect("valid store")
}

#[test]
fn baseline_spreads_even_x_across_width() {
    let store = scenario_store();
    let layout = CoordinateMapper::new(&store, PlotSize::new(500.0, 200.0)).baseline();

    assert_eq!(layout.x_px, vec![0.0, 125.0, 250.0, 375.0, 500.0]);
    let y = &layout.y_px[0];
    assert_eq!(y[4], 0.0);
    assert_eq!(y[2], 200.0);
    approx::assert_relative_eq!(y[0], 56.0, epsilon = 1e-9);
}

#[test]
fn uneven_x_pins_both_ends() {
    let x = [0.3, 1.7, 2.0, 9.9, 10.1];
    for width in [1.0, 333.3, 1919.7] {
        assert_eq!(map_x(x[0], width, x[0], x[4]), 0.0);
        assert_eq!(map_x(x[4], width, x[0], x[4]), width);
    }
}

#[test]
fn every_index_round_trips_through_pixels() {
    let store = SeriesStore::new(
        vec![0.0, 0.5, 3.0, 3.25, 8.0, 13.0],
        vec![vec![1.0; 6]],
        vec![Color::rgb(0.0, 0.0, 0.0)],
        vec!["flat".to_owned()],
    )
    .expect("valid store");
    let mapper = CoordinateMapper::new(&store, PlotSize::new(640.0, 100.0));

    for index in 0..store.len() {
        let pixel = mapper.index_to_pixel(index).expect("index in range");
        assert_eq!(mapper.pixel_to_index(pixel), index);
    }
}

#[test]
fn pixels_outside_the_plot_clamp_to_the_ends() {
    let store = scenario_store();
    let mapper = CoordinateMapper::new(&store, PlotSize::new(500.0, 200.0));
    assert_eq!(mapper.pixel_to_index(-40.0), 0);
    assert_eq!(mapper.pixel_to_index(900.0), 4);
}

#[test]
fn flat_series_maps_to_the_top_edge() {
    let store = SeriesStore::new(
        vec![1.0, 2.0, 3.0],
        vec![vec![7.0, 7.0, 7.0]],
        vec![Color::rgb(1.0, 0.0, 0.0)],
        vec!["flat".to_owned()],
    )
    .expect("valid store");
    let layout = CoordinateMapper::new(&store, PlotSize::new(300.0, 90.0)).baseline();
    assert!(layout.y_px[0].iter().all(|y| *y == 0.0));
}

#[test]
fn single_point_series_sits_on_the_right_edge() {
    let store = SeriesStore::new(
        vec![42.0],
        vec![vec![3.0]],
        vec![Color::rgb(1.0, 0.0, 0.0)],
        vec!["one".to_owned()],
    )
    .expect("valid store");
    let mapper = CoordinateMapper::new(&store, PlotSize::new(300.0, 90.0));
    assert_eq!(mapper.index_to_pixel(0), Some(300.0));
    assert_eq!(mapper.pixel_to_index(10.0), 0);
}

#[test]
fn y_inverse_recovers_values() {
    for value in [28.0, 64.5, 99.0, 128.0] {
        let pixel = map_y(value, 200.0, 28.0, 128.0);
        approx::assert_abs_diff_eq!(pixel_to_y(pixel, 200.0, 28.0, 128.0), value, epsilon = 1e-9);
    }
    approx::assert_abs_diff_eq!(pixel_to_x(250.0, 500.0, 1.0, 5.0), 3.0, epsilon = 1e-12);
}
