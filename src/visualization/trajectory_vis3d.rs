use bevy::log::{Level, LogPlugin};
use bevy::math::primitives::{Cuboid, Sphere};
use bevy::prelude::*;
use bevy::window::{Window, WindowPlugin};

use super::plot::PlotScene;
use crate::simulation::states::NVec3;

const TRAJECTORY_COLOR: Color = Color::srgb(0.15, 0.4, 1.0); // blue
const START_COLOR: Color = Color::srgb(0.1, 0.8, 0.2); // green
const END_COLOR: Color = Color::srgb(0.6, 0.2, 0.8); // purple
const VELOCITY_COLOR: Color = Color::srgb(0.95, 0.15, 0.15); // red
const GRAVITY_COLOR: Color = Color::srgb(1.0, 0.6, 0.0); // orange
const AXIS_COLOR: Color = Color::srgb(0.7, 0.7, 0.7);
const TEXT_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);

/// Camera distance from the plot center, in units of the bounds half extent
const CAMERA_DISTANCE: f32 = 4.5;

/// Initial camera elevation and azimuth (radians)
const CAMERA_PITCH: f32 = 30.0 * std::f32::consts::PI / 180.0;
const CAMERA_YAW: f32 = -60.0 * std::f32::consts::PI / 180.0;

/// Rotation speed for the arrow keys (rad/s) and zoom speed (fraction/s)
const ORBIT_SPEED: f32 = 1.2;
const ZOOM_SPEED: f32 = 0.8;

/// Camera orbiting the plot center with +Z kept up
#[derive(Component)]
struct OrbitCamera {
    focus: Vec3,
    radius: f32,
    yaw: f32,
    pitch: f32,
}

impl OrbitCamera {
    fn transform(&self) -> Transform {
        let offset = Vec3::new(
            self.pitch.cos() * self.yaw.cos(),
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
        ) * self.radius;
        Transform::from_translation(self.focus + offset).looking_at(self.focus, Vec3::Z)
    }
}

/// UI text pinned to a world-space point (axis labels)
#[derive(Component)]
struct AxisLabel(Vec3);

fn to_world(v: &NVec3) -> Vec3 {
    Vec3::new(v.x as f32, v.y as f32, v.z as f32)
}

/// Open the viewer window and block until it is closed
pub fn run_3d(scene: PlotScene) -> AppExit {
    info!("run_3d: starting 3D viewer with {} points", scene.path.len());

    let title = scene.title.clone();
    App::new()
        .insert_resource(scene)
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title,
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level: Level::WARN,
                    filter: "wgpu=error,naga=warn".to_string(),
                    ..default()
                }),
        )
        .add_systems(Startup, setup_3d)
        .add_systems(
            Update,
            (draw_trajectory, orbit_camera, place_axis_labels, close_on_escape),
        )
        .run()
}

/// Startup system: camera, markers, axes and text overlay
fn setup_3d(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scene: Res<PlotScene>,
) {
    let half_extent = scene.bounds.half_extent as f32;

    let orbit = OrbitCamera {
        focus: to_world(&scene.bounds.center),
        radius: CAMERA_DISTANCE * half_extent,
        yaw: CAMERA_YAW,
        pitch: CAMERA_PITCH,
    };
    commands.spawn((
        Camera3dBundle {
            camera: Camera {
                clear_color: ClearColorConfig::Custom(Color::srgb(0.05, 0.05, 0.08)),
                ..default()
            },
            transform: orbit.transform(),
            ..default()
        },
        orbit,
    ));

    // Start and end markers
    let marker_radius = 0.025 * half_extent;
    for (position, color) in [(scene.start, START_COLOR), (scene.end, END_COLOR)] {
        commands.spawn(PbrBundle {
            mesh: meshes.add(Sphere::new(marker_radius).mesh()),
            material: materials.add(StandardMaterial {
                base_color: color,
                unlit: true,
                ..default()
            }),
            transform: Transform::from_translation(to_world(&position)),
            ..default()
        });
    }

    spawn_axes(&mut commands, &mut meshes, &mut materials, &scene);
    spawn_overlay(&mut commands, &scene);
}

/// Per-frame gizmos: trajectory polyline and the two vectors
fn draw_trajectory(mut gizmos: Gizmos, scene: Res<PlotScene>) {
    gizmos.linestrip(scene.path.iter().map(to_world), TRAJECTORY_COLOR);

    let start = to_world(&scene.start);
    gizmos.arrow(start, to_world(&scene.velocity_tip), VELOCITY_COLOR);
    gizmos.arrow(start, to_world(&scene.gravity_tip), GRAVITY_COLOR);
}

fn orbit_camera(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut query: Query<(&mut OrbitCamera, &mut Transform)>,
) {
    let dt = time.delta_seconds();
    let pitch_limit = 89.0_f32.to_radians();

    for (mut orbit, mut transform) in &mut query {
        if keys.pressed(KeyCode::ArrowLeft) {
            orbit.yaw -= ORBIT_SPEED * dt;
        }
        if keys.pressed(KeyCode::ArrowRight) {
            orbit.yaw += ORBIT_SPEED * dt;
        }
        if keys.pressed(KeyCode::ArrowUp) {
            orbit.pitch = (orbit.pitch + ORBIT_SPEED * dt).min(pitch_limit);
        }
        if keys.pressed(KeyCode::ArrowDown) {
            orbit.pitch = (orbit.pitch - ORBIT_SPEED * dt).max(-pitch_limit);
        }
        if keys.any_pressed([KeyCode::Equal, KeyCode::NumpadAdd]) {
            orbit.radius *= 1.0 - ZOOM_SPEED * dt;
        }
        if keys.any_pressed([KeyCode::Minus, KeyCode::NumpadSubtract]) {
            orbit.radius *= 1.0 + ZOOM_SPEED * dt;
        }

        *transform = orbit.transform();
    }
}

/// Keep each axis label over its world-space anchor
fn place_axis_labels(
    camera: Query<(&Camera, &GlobalTransform), With<OrbitCamera>>,
    mut labels: Query<(&AxisLabel, &mut Style, &mut Visibility)>,
) {
    let Ok((camera, camera_transform)) = camera.get_single() else {
        return;
    };

    for (AxisLabel(anchor), mut style, mut visibility) in &mut labels {
        match camera.world_to_viewport(camera_transform, *anchor) {
            Some(screen) => {
                style.left = Val::Px(screen.x);
                style.top = Val::Px(screen.y);
                *visibility = Visibility::Inherited;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
}

fn close_on_escape(
    mut commands: Commands,
    windows: Query<(Entity, &Window)>,
    keys: Res<ButtonInput<KeyCode>>,
) {
    for (entity, window) in &windows {
        if window.focused && keys.just_pressed(KeyCode::Escape) {
            commands.entity(entity).despawn();
        }
    }
}

// =========================================================================================
// Axes along three edges of the equal-aspect bounding cube
// =========================================================================================

fn spawn_axes(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    scene: &PlotScene,
) {
    let origin = to_world(&scene.bounds.min());
    let axis_len = 2.0 * scene.bounds.half_extent as f32;
    let axis_thickness = 0.004 * axis_len;

    let material = materials.add(StandardMaterial {
        base_color: AXIS_COLOR,
        unlit: true,
        ..default()
    });

    let axes = [
        (Vec3::X, Cuboid::new(axis_len, axis_thickness, axis_thickness), "X (m)"),
        (Vec3::Y, Cuboid::new(axis_thickness, axis_len, axis_thickness), "Y (m)"),
        (Vec3::Z, Cuboid::new(axis_thickness, axis_thickness, axis_len), "Z (m)"),
    ];

    for (direction, cuboid, label) in axes {
        // Cuboid is centered at its transform origin, so shift it by half a length
        commands.spawn(PbrBundle {
            mesh: meshes.add(cuboid.mesh()),
            material: material.clone(),
            transform: Transform::from_translation(origin + direction * (0.5 * axis_len)),
            ..default()
        });

        commands.spawn((
            TextBundle::from_section(
                label,
                TextStyle {
                    font_size: 18.0,
                    color: TEXT_COLOR,
                    ..default()
                },
            )
            .with_style(Style {
                position_type: PositionType::Absolute,
                ..default()
            }),
            AxisLabel(origin + direction * (1.05 * axis_len)),
        ));
    }
}

// =========================================================================================
// Title, legend and footer
// =========================================================================================

fn spawn_overlay(commands: &mut Commands, scene: &PlotScene) {
    commands
        .spawn(NodeBundle {
            style: Style {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                top: Val::Px(8.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            ..default()
        })
        .with_children(|parent| {
            parent.spawn(TextBundle::from_section(
                scene.title.clone(),
                TextStyle {
                    font_size: 24.0,
                    color: TEXT_COLOR,
                    ..default()
                },
            ));
        });

    let entries = [
        (TRAJECTORY_COLOR, "Trajectory"),
        (START_COLOR, "Start point"),
        (END_COLOR, "End point"),
        (VELOCITY_COLOR, "Initial velocity"),
        (GRAVITY_COLOR, "Gravity"),
    ];
    let mut sections = Vec::with_capacity(2 * entries.len());
    for (color, label) in entries {
        sections.push(TextSection::new(
            "-- ",
            TextStyle {
                font_size: 16.0,
                color,
                ..default()
            },
        ));
        sections.push(TextSection::new(
            format!("{label}\n"),
            TextStyle {
                font_size: 16.0,
                color: TEXT_COLOR,
                ..default()
            },
        ));
    }
    commands.spawn(TextBundle::from_sections(sections).with_style(Style {
        position_type: PositionType::Absolute,
        top: Val::Px(44.0),
        left: Val::Px(12.0),
        ..default()
    }));

    let (lo, hi) = (scene.bounds.min(), scene.bounds.max());
    let footer = format!(
        "t = 0 .. {} s   X [{:.2}, {:.2}] m   Y [{:.2}, {:.2}] m   Z [{:.2}, {:.2}] m\n\
         arrows: rotate   +/-: zoom   Esc: close",
        scene.t_final, lo.x, hi.x, lo.y, hi.y, lo.z, hi.z
    );
    commands.spawn(
        TextBundle::from_section(
            footer,
            TextStyle {
                font_size: 14.0,
                color: TEXT_COLOR,
                ..default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            bottom: Val::Px(10.0),
            left: Val::Px(12.0),
            ..default()
        }),
    );
}
