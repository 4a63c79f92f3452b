use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

use crate::simulation::scenario::Scenario;
use crate::visualization::layout::half_extent;

#[derive(Component)]
struct BodyIndex(pub usize);

#[derive(Component)]
struct CenterOfMassMarker;

/// World-space → screen-space factor, fitted to the initial layout
#[derive(Resource)]
struct ViewScale(f32);

/// Half-extent of the window area the initial layout is fitted into
const VIEW_HALF_EXTENT: f32 = 350.0;

/// Marker radii follow mass, capped like the scatter sizes
const MAX_MARKER: f32 = 100.0;
const MARKER_SCALE: f32 = 0.05;

/// Open the viewer. With `still` set the initial layout is drawn once and
/// never stepped (a static scatter plot); otherwise one tick runs per frame.
pub fn run_2d(scenario: Scenario, still: bool) {
    println!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.system.bodies.len());

    let extent = half_extent(&scenario.system.bodies, scenario.view.lim);
    let scale = VIEW_HALF_EXTENT / extent as f32;

    let mut app = App::new();
    app.insert_resource(scenario)
        .insert_resource(ViewScale(scale))
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_bodies_system);
    if !still {
        app.add_systems(Update, (physics_step_system, sync_transforms_system).chain());
    }
    app.run();
}

fn setup_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    scale: Res<ViewScale>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    let body_material = materials.add(ColorMaterial::from(Color::srgba(1.0, 1.0, 1.0, 0.5)));
    for (i, body) in scenario.system.bodies.iter().enumerate() {
        let radius_screen = ((body.m as f32).min(MAX_MARKER) * MARKER_SCALE).max(1.0);
        let x = body.x.x as f32 * scale.0;
        let y = body.x.y as f32 * scale.0;

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
                material: body_material.clone(),
                transform: Transform::from_xyz(x, y, 0.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }

    // centre of mass in red, drawn on top
    let com = scenario.system.center_of_mass();
    commands.spawn((
        MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(Circle::new(3.0))),
            material: materials.add(ColorMaterial::from(Color::srgb(1.0, 0.0, 0.0))),
            transform: Transform::from_xyz(com.x as f32 * scale.0, com.y as f32 * scale.0, 1.0),
            ..Default::default()
        },
        CenterOfMassMarker,
    ));
}

// one simulation tick per rendered frame
fn physics_step_system(mut scenario: ResMut<Scenario>) {
    scenario.step();
}

fn sync_transforms_system(
    scenario: Res<Scenario>,
    scale: Res<ViewScale>,
    mut bodies: Query<(&BodyIndex, &mut Transform), Without<CenterOfMassMarker>>,
    mut marker: Query<&mut Transform, With<CenterOfMassMarker>>,
) {
    for (BodyIndex(i), mut transform) in &mut bodies {
        if let Some(b) = scenario.system.bodies.get(*i) {
            transform.translation.x = (b.x.x as f32) * scale.0;
            transform.translation.y = (b.x.y as f32) * scale.0;
        }
    }

    let com = scenario.system.center_of_mass();
    for mut transform in &mut marker {
        transform.translation.x = com.x as f32 * scale.0;
        transform.translation.y = com.y as f32 * scale.0;
    }
}
