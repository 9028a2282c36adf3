//! HUD overlay with the view mode label and camera control buttons

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

use super::components::{
    CityWorldResource, MainCamera, ToggleButtonText, ViewButton, ViewModeText,
};
use super::input::restore_overhead_pose;
use crate::simulation::CameraMode;

/// System to setup the HUD overlay
pub fn setup_hud(mut commands: Commands) {
    // Status panel at top-left of screen
    commands
        .spawn((
            Node {
                width: Val::Auto,
                height: Val::Auto,
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                left: Val::Px(10.0),
                padding: UiRect::all(Val::Px(10.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(5.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("View: Overhead"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                ViewModeText,
            ));

            parent.spawn((
                Text::new("C: toggle view  V: switch vehicle"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.7, 0.7)),
            ));
        });

    // Button row at bottom of screen
    commands
        .spawn((Node {
            width: Val::Percent(100.0),
            height: Val::Auto,
            position_type: PositionType::Absolute,
            bottom: Val::Px(20.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            column_gap: Val::Px(10.0),
            ..default()
        },))
        .with_children(|parent| {
            spawn_view_button(
                parent,
                ViewButton::ToggleView,
                "Switch to Car Cam",
                Color::srgb(0.25, 0.35, 0.55),
                true,
            );
            spawn_view_button(
                parent,
                ViewButton::SwitchVehicle,
                "Switch Vehicle",
                Color::srgb(0.35, 0.3, 0.5),
                false,
            );
        });
}

fn spawn_view_button(
    parent: &mut ChildSpawnerCommands,
    action: ViewButton,
    text: &str,
    color: Color,
    toggle_label: bool,
) {
    parent
        .spawn((
            action,
            Button,
            Node {
                padding: UiRect::all(Val::Px(10.0)),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BorderColor::all(Color::WHITE),
            BackgroundColor(color),
        ))
        .with_children(|button| {
            let mut label = button.spawn((
                Text::new(text),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            if toggle_label {
                label.insert(ToggleButtonText);
            }
        });
}

/// System to handle the HUD button clicks
pub fn handle_view_buttons(
    mut city: ResMut<CityWorldResource>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
    mut interaction_query: Query<
        (&Interaction, &ViewButton, &mut BorderColor),
        Changed<Interaction>,
    >,
) {
    for (interaction, button, mut border_color) in interaction_query.iter_mut() {
        match *interaction {
            Interaction::Pressed => match button {
                ViewButton::ToggleView => {
                    let mode = city.0.toggle_view();
                    if mode == CameraMode::Overhead {
                        restore_overhead_pose(&city, &mut camera_query);
                    }
                }
                ViewButton::SwitchVehicle => {
                    city.0.switch_vehicle();
                }
            },
            Interaction::Hovered => {
                *border_color = BorderColor::all(Color::srgb(1.0, 1.0, 0.0));
            }
            Interaction::None => {
                *border_color = BorderColor::all(Color::WHITE);
            }
        }
    }
}
