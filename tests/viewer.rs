#![cfg(unix)]

use projectile3d::configuration::config::SimulationConfig;
use projectile3d::simulation::scenario::Scenario;
use projectile3d::visualization::plot::PlotScene;
use projectile3d::visualization::renderer::{RenderError, TrajectoryRenderer, ViewerProcess};

/// Default launch sampled at `sample_count` points
pub fn scene_with(sample_count: usize) -> PlotScene {
    let cfg = SimulationConfig {
        sample_count,
        ..SimulationConfig::default()
    };
    let scenario = Scenario::build_scenario(&cfg, &cfg.defaults);
    let trajectory = scenario.trajectory().unwrap();
    PlotScene::build(&scenario, &trajectory, &cfg.plot)
}

#[test]
fn failing_viewer_reports_exit_status() {
    let mut viewer = ViewerProcess::new("/bin/false");

    match viewer.render(&scene_with(200)) {
        Err(RenderError::ViewerExited(status)) => assert!(!status.success()),
        other => panic!("expected ViewerExited, got {other:?}"),
    }
}

#[test]
fn missing_viewer_is_a_spawn_error() {
    let mut viewer = ViewerProcess::new("/nonexistent/projectile3d-viewer");

    let err = viewer.render(&scene_with(200)).unwrap_err();
    assert!(matches!(err, RenderError::Spawn(_)), "{err:?}");
    assert!(err.to_string().starts_with("could not start the plot viewer"));
}

#[test]
fn viewer_that_ignores_the_scene_is_a_handoff_error() {
    // far more YAML than a pipe buffers, so the write hits a closed pipe
    let mut viewer = ViewerProcess::new("/bin/true");

    let err = viewer.render(&scene_with(20_000)).unwrap_err();
    assert!(matches!(err, RenderError::Handoff(_)), "{err:?}");
    assert!(err.to_string().starts_with("could not send the plot to the viewer"));
}
