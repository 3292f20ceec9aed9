//! Demonstrates property inputs driving a sprite's rotation and scale.
//!
//! Drag a number to scrub it, click it to type a value, or focus it and use
//! the arrow keys.

use bevy::prelude::*;
use feathers_property_inputs::numeric::Bounds;
use feathers_property_inputs::ui::PropertyInputChanged;
use feathers_property_inputs::{
    CompositeKind, PropertyInputConfig, PropertyInputPlugin, spawn_property_input,
};

#[derive(Resource)]
struct DemoInputs {
    rotation: Entity,
    scale: Entity,
}

#[derive(Component)]
struct Spinner;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(PropertyInputPlugin)
        .add_systems(Startup, setup)
        .add_observer(apply_input_change)
        .run();
}

fn setup(mut commands: Commands, config: Res<PropertyInputConfig>) {
    commands.spawn(Camera2d);

    commands.spawn((
        Sprite {
            color: Color::srgb(0.2, 0.6, 1.0),
            custom_size: Some(Vec2::new(80.0, 80.0)),
            ..Default::default()
        },
        Spinner,
        Name::new("Spinner"),
    ));

    let rotation = spawn_property_input(
        &mut commands,
        CompositeKind::Rotation,
        config.props(30.0, Bounds::UNBOUNDED),
        &config,
    );
    let scale = spawn_property_input(
        &mut commands,
        CompositeKind::Percent,
        config.props(1.0, Bounds::new(Some(0.1), Some(3.0))),
        &config,
    );

    commands
        .spawn(Node {
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(6.0),
            padding: UiRect::all(Val::Px(12.0)),
            ..default()
        })
        .add_children(&[rotation, scale]);

    commands.insert_resource(DemoInputs { rotation, scale });
}

fn apply_input_change(
    changed: On<PropertyInputChanged>,
    inputs: Res<DemoInputs>,
    mut spinners: Query<&mut Transform, With<Spinner>>,
) {
    for mut transform in spinners.iter_mut() {
        if changed.source == inputs.rotation {
            transform.rotation = Quat::from_rotation_z((changed.value as f32).to_radians());
        } else if changed.source == inputs.scale {
            transform.scale = Vec3::splat(changed.value as f32);
        }
    }
    info!("{:?} -> {}", changed.source, changed.value);
}
