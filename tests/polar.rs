use std::collections::BTreeSet;
use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::SeedableRng;

use wavescale::color::ColorToken;
use wavescale::polar::{plot_random_wave, Curve, PolarAxes, PolarSurface, SAMPLE_COUNT};

#[test]
fn returned_color_is_in_palette_and_matches_line() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut axes = PolarAxes::new();
    let color = plot_random_wave(&mut axes, &mut rng);
    assert!(ColorToken::ALL.contains(&color));
    assert_eq!(axes.lines().len(), 1);
    assert_eq!(axes.lines()[0].color, color);
}

#[test]
fn repeated_calls_vary_color() {
    let mut rng = rand::thread_rng();
    let mut axes = PolarAxes::new();
    // Probability of 30 identical draws from 7 colors is 7^-29.
    let colors: BTreeSet<ColorToken> = (0..30).map(|_| plot_random_wave(&mut axes, &mut rng)).collect();
    assert!(colors.len() > 1);
}

#[test]
fn each_call_adds_exactly_one_curve() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut axes = PolarAxes::new();
    for expected in 1..=10 {
        plot_random_wave(&mut axes, &mut rng);
        assert_eq!(axes.lines().len(), expected);
    }
}

#[test]
fn label_angle_is_whole_degree_in_range() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut axes = PolarAxes::new();
    for _ in 0..200 {
        plot_random_wave(&mut axes, &mut rng);
        let angle = axes.rlabel_position();
        assert!((0.0..=180.0).contains(&angle));
        assert_eq!(angle.fract(), 0.0);
    }
}

#[test]
fn curve_is_integer_frequency_sine_over_full_turn() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut axes = PolarAxes::new();
    for _ in 0..50 {
        plot_random_wave(&mut axes, &mut rng);
    }
    let mut frequencies = BTreeSet::new();
    for line in axes.lines() {
        let curve = &line.curve;
        assert_eq!(curve.len(), SAMPLE_COUNT);
        assert_eq!(curve.radius().len(), SAMPLE_COUNT);
        assert_eq!(curve.theta()[0], 0.0);
        assert_eq!(curve.theta()[SAMPLE_COUNT - 1], TAU);
        assert!((1..=10).contains(&curve.frequency()));
        assert_eq!(curve, &Curve::sine(curve.frequency(), SAMPLE_COUNT));
        frequencies.insert(curve.frequency());
    }
    assert!(frequencies.len() > 1);
}

#[test]
fn seeded_generators_draw_identical_waves() {
    let mut first = PolarAxes::new();
    let mut second = PolarAxes::new();
    let a = plot_random_wave(&mut first, &mut StdRng::seed_from_u64(99));
    let b = plot_random_wave(&mut second, &mut StdRng::seed_from_u64(99));
    assert_eq!(a, b);
    assert_eq!(first, second);
}

/// A surface that only counts calls, to exercise the trait seam.
#[derive(Default)]
struct Recorder {
    curves: usize,
    angles: Vec<f64>,
}

impl PolarSurface for Recorder {
    fn add_curve(&mut self, _curve: Curve, _color: ColorToken) {
        self.curves += 1;
    }

    fn set_radial_label_angle(&mut self, degrees: f64) {
        self.angles.push(degrees);
    }
}

#[test]
fn works_through_trait_object() {
    let mut recorder = Recorder::default();
    let surface: &mut dyn PolarSurface = &mut recorder;
    plot_random_wave(surface, &mut StdRng::seed_from_u64(5));
    assert_eq!(recorder.curves, 1);
    assert_eq!(recorder.angles.len(), 1);
}
