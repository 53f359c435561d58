use projectile3d::configuration::config::{InitialConditionsConfig, PlotSettings, SimulationConfig};
use projectile3d::simulation::errors::SimulationError;
use projectile3d::simulation::kinematics::{gravity_vector, position_at};
use projectile3d::simulation::params::Parameters;
use projectile3d::simulation::sampler::{sample_trajectory, TimeSamples};
use projectile3d::simulation::scenario::Scenario;
use projectile3d::simulation::states::{InitialConditions, LaunchState, NVec3};
use projectile3d::visualization::plot::{PlotBounds, PlotScene};

/// Launch from a non-trivial point so every term of the formulas matters
pub fn test_launch() -> LaunchState {
    LaunchState::new(1.5, -2.0, 3.0, 4.0, -1.25, 12.0)
}

/// Default physics parameters for tests
pub fn test_params() -> Parameters {
    Parameters {
        gravity: 9.8,
        sample_count: 200,
    }
}

pub fn initial(t_final: f64) -> InitialConditions {
    InitialConditions {
        launch: test_launch(),
        t_final,
    }
}

pub fn default_scenario() -> Scenario {
    let cfg = SimulationConfig::default();
    Scenario::build_scenario(&cfg, &cfg.defaults)
}

// ==================================================================================
// Kinematics tests
// ==================================================================================

#[test]
fn horizontal_motion_has_no_gravity_term() {
    let launch = test_launch();
    for t in [0.0, 0.1, 1.0, 2.5, 7.3] {
        let p = position_at(&launch, 9.8, t);
        assert_eq!(p.x, 1.5 + 4.0 * t);
        assert_eq!(p.y, -2.0 + -1.25 * t);
    }
}

#[test]
fn vertical_motion_follows_parabola() {
    let launch = test_launch();
    for t in [0.0, 0.5, 1.0, 2.5, 4.0] {
        let p = position_at(&launch, 9.8, t);
        let expected = 3.0 + 12.0 * t - 4.9 * t * t;
        assert!((p.z - expected).abs() < 1e-12, "z({t}) = {}, expected {expected}", p.z);
    }
}

#[test]
fn position_at_zero_is_launch_point() {
    let launch = test_launch();
    assert_eq!(position_at(&launch, 9.8, 0.0), launch.x);
}

#[test]
fn apex_is_reached_at_vz_over_g() {
    let launch = LaunchState::new(0.0, 0.0, 0.0, 0.0, 0.0, 9.8);
    let apex = position_at(&launch, 9.8, 1.0).z;
    assert!((apex - 4.9).abs() < 1e-12);
    assert!(position_at(&launch, 9.8, 0.9).z < apex);
    assert!(position_at(&launch, 9.8, 1.1).z < apex);
}

#[test]
fn gravity_points_down() {
    let g = gravity_vector(9.8);
    assert_eq!(g, NVec3::new(0.0, 0.0, -9.8));
}

#[test]
fn zero_gravity_is_straight_line() {
    let launch = test_launch();
    let p = position_at(&launch, 0.0, 2.0);
    assert!((p - (launch.x + 2.0 * launch.v)).norm() < 1e-12);
}

// ==================================================================================
// Sampler tests
// ==================================================================================

#[test]
fn sampler_returns_configured_count() {
    let trajectory = sample_trajectory(&initial(2.5), &test_params()).unwrap();
    assert_eq!(trajectory.len(), 200);

    let mut params = test_params();
    params.sample_count = 17;
    let trajectory = sample_trajectory(&initial(2.5), &params).unwrap();
    assert_eq!(trajectory.len(), 17);
}

#[test]
fn sampler_spans_zero_to_t_final() {
    let trajectory = sample_trajectory(&initial(2.5), &test_params()).unwrap();
    assert_eq!(trajectory.first().unwrap().t, 0.0);
    assert_eq!(trajectory.last().unwrap().t, 2.5);

    let times: Vec<f64> = trajectory.times().collect();
    assert!(times.windows(2).all(|w| w[1] > w[0]), "times not increasing");
}

#[test]
fn sampler_times_are_evenly_spaced() {
    let times: Vec<f64> = TimeSamples::new(2.0, 5).collect();
    let expected = [0.0, 0.5, 1.0, 1.5, 2.0];
    for (t, e) in times.iter().zip(expected) {
        assert!((t - e).abs() < 1e-12);
    }
}

#[test]
fn sampled_points_match_kinematics() {
    let init = initial(3.0);
    let params = test_params();
    let trajectory = sample_trajectory(&init, &params).unwrap();

    for point in &trajectory {
        assert_eq!(point.x, position_at(&init.launch, params.gravity, point.t));
    }
    assert_eq!(
        trajectory.last().unwrap().x,
        position_at(&init.launch, params.gravity, 3.0)
    );
}

#[test]
fn huge_duration_times_stay_finite_and_increasing() {
    let times: Vec<f64> = TimeSamples::new(1e308, 200).collect();

    assert!(times.iter().all(|t| t.is_finite()));
    assert!(times.windows(2).all(|w| w[1] > w[0]), "times not increasing");
    assert_eq!(times[199], 1e308);
}

#[test]
fn time_samples_are_restartable() {
    let samples = TimeSamples::new(1.0, 10);
    assert_eq!(samples.len(), 10);

    let first: Vec<f64> = samples.clone().collect();
    let second: Vec<f64> = samples.collect();
    assert_eq!(first, second);
}

#[test]
fn zero_duration_repeats_launch_point() {
    let init = initial(0.0);
    let trajectory = sample_trajectory(&init, &test_params()).unwrap();

    assert_eq!(trajectory.len(), 200);
    assert!(trajectory.iter().all(|p| p.t == 0.0 && p.x == init.launch.x));
}

#[test]
fn single_sample_is_launch_point() {
    let mut params = test_params();
    params.sample_count = 1;
    let trajectory = sample_trajectory(&initial(2.5), &params).unwrap();

    assert_eq!(trajectory.len(), 1);
    assert_eq!(trajectory.first().unwrap().t, 0.0);
}

#[test]
fn negative_duration_is_rejected() {
    let err = sample_trajectory(&initial(-1.0), &test_params()).unwrap_err();
    assert_eq!(err, SimulationError::NegativeDuration(-1.0));
}

#[test]
fn non_finite_input_is_rejected() {
    let mut init = initial(1.0);
    init.launch.v.x = f64::NAN;

    match sample_trajectory(&init, &test_params()) {
        Err(SimulationError::NonFinite { field, .. }) => assert_eq!(field, "vx0"),
        other => panic!("expected NonFinite, got {other:?}"),
    }
}

#[test]
fn zero_samples_is_rejected() {
    let mut params = test_params();
    params.sample_count = 0;
    assert_eq!(
        sample_trajectory(&initial(1.0), &params).unwrap_err(),
        SimulationError::NoSamples
    );
}

// ==================================================================================
// Configuration and scenario tests
// ==================================================================================

#[test]
fn default_config_matches_documented_values() {
    let cfg = SimulationConfig::default();
    assert_eq!(cfg.gravity, 9.8);
    assert_eq!(cfg.sample_count, 200);
    assert_eq!(cfg.plot, PlotSettings { velocity_scale: 0.1, gravity_scale: 0.5 });
    assert_eq!(
        cfg.defaults,
        InitialConditionsConfig {
            x0: 0.0,
            y0: 0.0,
            z0: 0.0,
            vx0: 5.0,
            vy0: 3.0,
            vz0: 10.0,
            t_final: 2.5,
        }
    );
}

#[test]
fn config_loads_from_yaml() {
    let yaml = "
gravity: 9.8
sample_count: 50
plot:
  velocity_scale: 0.2
  gravity_scale: 0.5
defaults:
  x0: 1.0
  y0: 0.0
  z0: 0.0
  vx0: 5.0
  vy0: 3.0
  vz0: 10.0
  t_final: 2.5
";
    let cfg: SimulationConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.sample_count, 50);
    assert_eq!(cfg.plot.velocity_scale, 0.2);
    assert_eq!(cfg.defaults.x0, 1.0);
}

#[test]
fn default_scenario_final_position() {
    let scenario = default_scenario();
    assert_eq!(scenario.parameters, Parameters::default());

    let end = scenario.final_position();
    let report = format!("({:.2}, {:.2}, {:.2})", end.x, end.y, end.z);
    assert_eq!(report, "(12.50, 7.50, -5.63)");
}

#[test]
fn scenario_trajectory_uses_config_sample_count() {
    let cfg = SimulationConfig {
        sample_count: 32,
        ..SimulationConfig::default()
    };
    let scenario = Scenario::build_scenario(&cfg, &cfg.defaults);
    assert_eq!(scenario.trajectory().unwrap().len(), 32);
}

// ==================================================================================
// Plot scene tests
// ==================================================================================

#[test]
fn plot_scene_vectors_are_scaled_from_start() {
    let scenario = default_scenario();
    let trajectory = scenario.trajectory().unwrap();
    let scene = PlotScene::build(&scenario, &trajectory, &PlotSettings::default());

    assert_eq!(scene.start, NVec3::zeros());
    assert!((scene.velocity_tip - NVec3::new(0.5, 0.3, 1.0)).norm() < 1e-12);
    assert!((scene.gravity_tip - NVec3::new(0.0, 0.0, -4.9)).norm() < 1e-12);
    assert_eq!(scene.end, scenario.final_position());
    assert_eq!(scene.path.len(), 200);
    assert_eq!(scene.t_final, 2.5);
}

#[test]
fn plot_bounds_enclose_everything_with_equal_axes() {
    let scenario = default_scenario();
    let trajectory = scenario.trajectory().unwrap();
    let scene = PlotScene::build(&scenario, &trajectory, &PlotSettings::default());
    let bounds = scene.bounds;

    for p in scene.path.iter().chain([&scene.velocity_tip, &scene.gravity_tip, &scene.end]) {
        assert!(bounds.contains(p), "{p:?} outside plot bounds");
    }

    let span = bounds.max() - bounds.min();
    assert!((span.x - span.y).abs() < 1e-9);
    assert!((span.y - span.z).abs() < 1e-9);
}

#[test]
fn plot_bounds_of_single_point_do_not_collapse() {
    let p = NVec3::new(2.0, 3.0, 4.0);
    let bounds = PlotBounds::enclosing([p]);
    assert_eq!(bounds.center, p);
    assert_eq!(bounds.half_extent, 1.0);
}

#[test]
fn plot_scene_survives_yaml_handoff() {
    let scenario = default_scenario();
    let trajectory = scenario.trajectory().unwrap();
    let scene = PlotScene::build(&scenario, &trajectory, &PlotSettings::default());

    let yaml = serde_yaml::to_string(&scene).unwrap();
    let decoded: PlotScene = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(decoded.path.len(), scene.path.len());
    assert_eq!(decoded.title, scene.title);
    assert!((decoded.end - scene.end).norm() < 1e-12);
}
