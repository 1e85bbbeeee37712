use approx::assert_relative_eq;
use station_coverage::algorithms::{DiffRangeModel, DirectRangeModel};
use station_coverage::processing::GridSampler;
use station_coverage::{
    build_model, compute, CoveragePlanner, ErrorModel, ErrorParameters, GridConfig, Method,
    Point2D, RegionResult, SamplingFrame, Sweep, SweepOptions,
};

const A: Point2D = Point2D { x: -5.0, y: 0.0 };
const B: Point2D = Point2D { x: 5.0, y: 0.0 };

// Station A sits on the origin for the direct-range reference scenario
const REF_A: Point2D = Point2D { x: 0.0, y: 0.0 };
const REF_B: Point2D = Point2D { x: 10.0, y: 0.0 };

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn run_at(a: Point2D, b: Point2D, params: ErrorParameters, grid: GridConfig) -> RegionResult {
    compute(params.method(), a, b, &params, grid).expect("valid parameters")
}

fn run(params: ErrorParameters, grid: GridConfig) -> RegionResult {
    run_at(A, B, params, grid)
}

fn sample_params() -> [ErrorParameters; 3] {
    [
        ErrorParameters::DiffRange { sigma_r_allow: 3.0, sigma_t: 1.0 },
        ErrorParameters::DirectRange { sigma_d: 10.0, sigma_r: 1.0 },
        ErrorParameters::AngleMeasuring { sigma_d: 1.0, sigma_theta: 0.05 },
    ]
}

#[test]
fn points_lie_inside_sampled_disc_and_are_finite() {
    init_logging();
    let grid = GridConfig::new(20, 1.5);
    for params in sample_params() {
        let result = run(params, grid);
        assert!(!result.is_empty(), "{} region unexpectedly empty", params.method());
        for p in result.interior.iter().chain(result.outline.iter()) {
            assert!(p.is_finite(), "{}: non-finite point {:?}", params.method(), p);
            let r = p.radius();
            assert!(r > 0.0);
            assert!(r <= grid.max_radius() + 1e-9, "{}: radius {} outside grid", params.method(), r);
        }
    }
}

#[test]
fn compute_is_idempotent() {
    init_logging();
    let grid = GridConfig::new(15, 0.8);
    for params in sample_params() {
        let first = run(params, grid);
        let second = run(params, grid);
        assert_eq!(first, second);
    }
}

#[test]
fn sequential_sweep_matches_default() {
    init_logging();
    let grid = GridConfig::new(10, 2.0);
    let sequential = CoveragePlanner::new().with_options(SweepOptions { parallel: false });
    for params in sample_params() {
        let expected = run(params, grid);
        let actual = sequential.compute(params.method(), A, B, &params, grid).unwrap();
        assert_eq!(actual, expected);
    }
}

fn assert_monotone(results: &[RegionResult]) {
    for pair in results.windows(2) {
        assert!(
            pair[1].interior.len() >= pair[0].interior.len(),
            "{}: interior shrank from {} to {}",
            pair[0].method,
            pair[0].interior.len(),
            pair[1].interior.len()
        );
        assert!(pair[1].accepted_count() >= pair[0].accepted_count());
    }
}

#[test]
fn relaxing_tolerance_never_shrinks_region() {
    init_logging();
    let grid = GridConfig::new(25, 1.0);

    let direct: Vec<_> = [4.0, 8.0, 15.0, 40.0]
        .iter()
        .map(|&sigma_d| run(ErrorParameters::DirectRange { sigma_d, sigma_r: 1.0 }, grid))
        .collect();
    assert_monotone(&direct);
    assert!(direct[3].accepted_count() > direct[0].accepted_count());

    let diff: Vec<_> = [1.5, 2.5, 4.0, 8.0]
        .iter()
        .map(|&sigma_r_allow| run(ErrorParameters::DiffRange { sigma_r_allow, sigma_t: 1.0 }, grid))
        .collect();
    assert_monotone(&diff);

    let angle: Vec<_> = [0.2, 0.5, 1.0, 3.0]
        .iter()
        .map(|&sigma_d| run(ErrorParameters::AngleMeasuring { sigma_d, sigma_theta: 0.1 }, grid))
        .collect();
    assert_monotone(&angle);
}

#[test]
fn outline_per_ray_bounded_by_runs() {
    init_logging();
    let grid = GridConfig::new(30, 1.0);
    for params in sample_params() {
        let model = build_model(A, B, &params);
        let sweep = Sweep::new(model.as_ref(), grid);
        for angle_index in (1..=3600).step_by(37) {
            let trace = sweep.trace(angle_index);
            assert!(
                trace.outline.len() <= 2 * trace.runs,
                "{} ray {}: {} outline points for {} runs",
                params.method(),
                angle_index,
                trace.outline.len(),
                trace.runs
            );
        }
    }
}

#[test]
fn diff_range_collinear_sample_falls_back() {
    // Stations between the sample and the origin: psi1 = psi2 = 0
    let model = DiffRangeModel::new(Point2D::new(0.0, 2.0), Point2D::new(0.0, 5.0), 2.0, 1.0);
    let sample = Point2D::new(0.0, 10.0);
    assert_eq!(model.coefficient(sample), model.allowed_ratio() + 1.0);
    assert!(!model.classify(sample));
}

#[test]
fn diff_range_markers_include_origin() {
    let params = ErrorParameters::DiffRange { sigma_r_allow: 3.0, sigma_t: 1.0 };
    let result = run(params, GridConfig::new(3, 1.0));
    assert_eq!(result.stations, vec![Point2D::ORIGIN, A, B]);

    let direct = run(ErrorParameters::DirectRange { sigma_d: 10.0, sigma_r: 1.0 }, GridConfig::new(3, 1.0));
    assert_eq!(direct.stations, vec![A, B]);
}

#[test]
fn unreachable_direct_range_threshold_gives_empty_region() {
    init_logging();
    let params = ErrorParameters::DirectRange { sigma_d: 1.0, sigma_r: 1.0 };
    for grid in [GridConfig::new(5, 1.0), GridConfig::new(40, 0.7), GridConfig::new(1, 100.0)] {
        let result = run_at(REF_A, REF_B, params, grid);
        assert!(result.interior.is_empty());
        assert!(result.outline.is_empty());
        assert_eq!(result.stations, vec![REF_A, REF_B]);
    }
}

#[test]
fn direct_range_reference_sample_at_quarter_turn() {
    let params = ErrorParameters::DirectRange { sigma_d: 10.0, sigma_r: 1.0 };
    let grid = GridConfig::new(5, 1.0);

    // Angle index 900 is 90°, radial index 3 is M = (0, 3)
    let sample = GridSampler::new(grid, SamplingFrame::CosSin).point(900, 3);
    assert_relative_eq!(sample.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(sample.y, 3.0, epsilon = 1e-12);

    let cos_alpha: f64 = 9.0 / (3.0 * 109f64.sqrt());
    let expected_sin = (1.0 - cos_alpha * cos_alpha).sqrt();
    let model = DirectRangeModel::new(REF_A, REF_B, 10.0, 1.0);
    assert_relative_eq!(model.sin_alpha(sample).unwrap(), expected_sin, epsilon = 1e-9);
    assert!(expected_sin >= model.sin_alpha_min());

    // Every step on this ray is accepted, so the sample stays interior
    let result = run_at(REF_A, REF_B, params, grid);
    assert!(result.interior.contains(&sample));
    assert!(!result.outline.contains(&sample));
}

#[test]
fn invalid_parameters_are_reported() {
    let bad = [
        (ErrorParameters::DirectRange { sigma_d: 0.0, sigma_r: 1.0 }, GridConfig::new(5, 1.0)),
        (ErrorParameters::DirectRange { sigma_d: 10.0, sigma_r: 1.0 }, GridConfig::new(0, 1.0)),
        (ErrorParameters::DirectRange { sigma_d: 10.0, sigma_r: 1.0 }, GridConfig::new(5, -2.0)),
        (ErrorParameters::AngleMeasuring { sigma_d: 1.0, sigma_theta: -0.1 }, GridConfig::new(5, 1.0)),
        (ErrorParameters::DiffRange { sigma_r_allow: f64::NAN, sigma_t: 1.0 }, GridConfig::new(5, 1.0)),
    ];
    for (params, grid) in bad {
        let err = compute(params.method(), A, B, &params, grid).unwrap_err();
        assert!(err.is_validation_error(), "{:?} accepted", params);
    }
}

#[test]
fn diff_range_station_on_origin_gives_empty_region() {
    let params = ErrorParameters::DiffRange { sigma_r_allow: 3.0, sigma_t: 1.0 };
    let result = run_at(REF_A, REF_B, params, GridConfig::new(8, 1.0));
    assert!(result.is_empty());
    assert_eq!(result.stations, vec![Point2D::ORIGIN, REF_A, REF_B]);
}

#[test]
fn coincident_stations_reject_every_angle_sample() {
    init_logging();
    let params = ErrorParameters::AngleMeasuring { sigma_d: 1.0, sigma_theta: 0.1 };
    let result = compute(Method::AngleMeasuring, B, B, &params, GridConfig::new(10, 1.0)).unwrap();
    assert!(result.is_empty());
}
