//! UI overlay: start screen, crosshair, mobile controls
//!
//! Start screen видна пока `SessionPhase::StartScreen`, клик/тап → StartSessionIntent.
//! Mobile controls container показывается только на touch устройстве во время игры.

use bevy::prelude::*;
use outpost_simulation::{ControlAction, ControlInput, Session, StartSessionIntent};

use crate::controls::InputDevice;

pub struct OverlayPlugin;

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_start_screen, spawn_crosshair, spawn_mobile_controls))
            .add_systems(
                Update,
                (
                    start_button_interaction,
                    touch_button_interaction,
                    sync_overlay_visibility,
                ),
            );
    }
}

/// Marker: корень start screen overlay
#[derive(Component)]
struct StartScreen;

#[derive(Component)]
struct StartButton;

#[derive(Component)]
struct Crosshair;

/// Marker: контейнер touch кнопок
#[derive(Component)]
struct MobileControls;

/// Touch кнопка, привязанная к action
#[derive(Component, Debug, Clone, Copy)]
struct TouchButton(ControlAction);

const BUTTON_SIZE: f32 = 64.0;
const BUTTON_IDLE: Color = Color::srgba(1.0, 1.0, 1.0, 0.25);
const BUTTON_ACTIVE: Color = Color::srgba(1.0, 1.0, 1.0, 0.55);

fn spawn_start_screen(mut commands: Commands) {
    commands
        .spawn((
            StartScreen,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            GlobalZIndex(10),
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    StartButton,
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(32.0), Val::Px(16.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.2, 0.35, 0.15)),
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new("Click to play"),
                        TextFont {
                            font_size: 36.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                });
        });
}

fn spawn_crosshair(mut commands: Commands) {
    commands
        .spawn((
            Crosshair,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                display: Display::None,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                Node {
                    width: Val::Px(4.0),
                    height: Val::Px(4.0),
                    ..default()
                },
                BackgroundColor(Color::WHITE),
            ));
        });
}

/// Раскладка: D-pad слева снизу, действия справа снизу
fn spawn_mobile_controls(mut commands: Commands) {
    commands
        .spawn((
            MobileControls,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                bottom: Val::Px(24.0),
                padding: UiRect::horizontal(Val::Px(24.0)),
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::FlexEnd,
                display: Display::None,
                ..default()
            },
        ))
        .with_children(|container| {
            // D-pad (3x3 grid, углы пустые)
            container
                .spawn(Node {
                    display: Display::Grid,
                    grid_template_columns: RepeatedGridTrack::px(3, BUTTON_SIZE),
                    grid_template_rows: RepeatedGridTrack::px(3, BUTTON_SIZE),
                    column_gap: Val::Px(4.0),
                    row_gap: Val::Px(4.0),
                    ..default()
                })
                .with_children(|pad| {
                    let layout = [
                        None,
                        Some((ControlAction::Forward, "^")),
                        None,
                        Some((ControlAction::Left, "<")),
                        None,
                        Some((ControlAction::Right, ">")),
                        None,
                        Some((ControlAction::Backward, "v")),
                        None,
                    ];
                    for cell in layout {
                        match cell {
                            Some((action, label)) => spawn_touch_button(pad, action, label),
                            None => {
                                pad.spawn(Node::default());
                            }
                        }
                    }
                });

            // Action кнопки
            container
                .spawn(Node {
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(8.0),
                    ..default()
                })
                .with_children(|actions| {
                    spawn_touch_button(actions, ControlAction::Shoot, "FIRE");
                    spawn_touch_button(actions, ControlAction::Jump, "JUMP");
                    spawn_touch_button(actions, ControlAction::Run, "RUN");
                    spawn_touch_button(actions, ControlAction::Zoom, "SCOPE");
                });
        });
}

fn spawn_touch_button(parent: &mut ChildSpawnerCommands, action: ControlAction, label: &str) {
    parent
        .spawn((
            TouchButton(action),
            Button,
            Node {
                width: Val::Px(BUTTON_SIZE),
                height: Val::Px(BUTTON_SIZE),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BUTTON_IDLE),
            BorderRadius::all(Val::Px(8.0)),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(label),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

fn start_button_interaction(
    buttons: Query<&Interaction, (Changed<Interaction>, With<StartButton>)>,
    mut starts: EventWriter<StartSessionIntent>,
) {
    for interaction in buttons.iter() {
        if *interaction == Interaction::Pressed {
            starts.write(StartSessionIntent);
        }
    }
}

/// Pressed → press, любой другой переход → release
///
/// Bevy UI focus считает все касания одним pointer: отпускание любого пальца
/// сбрасывает все `Pressed` кнопки, так что удерживать D-pad и одновременно
/// стрелять с тач-экрана нельзя. Поведение как у per-element mouse handlers.
fn touch_button_interaction(
    session: Res<Session>,
    mut buttons: Query<(&Interaction, &TouchButton, &mut BackgroundColor), Changed<Interaction>>,
    mut controls: EventWriter<ControlInput>,
) {
    if !session.is_playing() {
        return;
    }

    for (interaction, button, mut background) in buttons.iter_mut() {
        let pressed = *interaction == Interaction::Pressed;
        controls.write(ControlInput {
            action: button.0,
            pressed,
        });
        background.0 = if pressed { BUTTON_ACTIVE } else { BUTTON_IDLE };
    }
}

fn sync_overlay_visibility(
    session: Res<Session>,
    device: Res<InputDevice>,
    mut start_screens: Query<
        &mut Node,
        (With<StartScreen>, Without<MobileControls>, Without<Crosshair>),
    >,
    mut mobile: Query<&mut Node, (With<MobileControls>, Without<StartScreen>, Without<Crosshair>)>,
    mut crosshairs: Query<
        &mut Node,
        (With<Crosshair>, Without<StartScreen>, Without<MobileControls>),
    >,
) {
    if !session.is_changed() && !device.is_changed() {
        return;
    }

    let playing = session.is_playing();
    let show = |visible: bool| if visible { Display::Flex } else { Display::None };

    for mut node in start_screens.iter_mut() {
        node.display = show(!playing);
    }
    for mut node in mobile.iter_mut() {
        node.display = show(playing && *device == InputDevice::Touch);
    }
    for mut node in crosshairs.iter_mut() {
        node.display = show(playing);
    }
}
