//! Integration tests for the board redraw pass
//!
//! Runs `redraw_board` headless with placeholder mesh and material handles and
//! no piece images, then counts the entities it leaves behind.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use shakmaty::Square;
use uciboard::core::{CorePlugin, GameState};
use uciboard::game::resources::SuggestedMove;
use uciboard::game::system_sets::GameSystems;
use uciboard::game::GamePlugin;
use uciboard::input::BoardClicked;
use uciboard::rendering::{redraw_board, BoardPalette, BoardVisual, PieceSprites};

fn render_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin, AssetPlugin::default()))
        .add_plugins((CorePlugin, GamePlugin))
        .insert_resource(BoardPalette {
            light: Color::WHITE,
            dark: Color::BLACK,
            border: Color::BLACK,
            hint_mesh: Handle::default(),
            hint_material: Handle::default(),
            suggestion_mesh: Handle::default(),
            suggestion_material: Handle::default(),
        })
        .insert_resource(PieceSprites::default())
        .add_systems(Update, redraw_board.in_set(GameSystems::Visual));
    app.update();

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::InGame);
    app.update();
    app.update();
    app
}

fn click(app: &mut App, square: Square) {
    app.world_mut().write_message(BoardClicked(square));
    app.update();
    app.update();
}

fn count_visuals<F: bevy::ecs::query::QueryFilter>(app: &mut App) -> usize {
    let world = app.world_mut();
    world
        .query_filtered::<Entity, (With<BoardVisual>, F)>()
        .iter(world)
        .count()
}

fn dot_count(app: &mut App) -> usize {
    count_visuals::<With<Mesh2d>>(app)
}

fn texts(app: &mut App) -> Vec<String> {
    let world = app.world_mut();
    world
        .query_filtered::<&Text2d, With<BoardVisual>>()
        .iter(world)
        .map(|text| text.0.clone())
        .collect()
}

#[test]
fn test_initial_board_draws_squares_and_letters() {
    let mut app = render_app();

    // Border and fill for each of the 64 squares
    assert_eq!(count_visuals::<With<Sprite>>(&mut app), 128);
    assert_eq!(dot_count(&mut app), 0);

    let texts = texts(&mut app);
    assert_eq!(texts.len(), 33);
    assert!(texts.contains(&"White's turn".to_string()));
    assert_eq!(texts.iter().filter(|t| t.as_str() == "P").count(), 8);
    assert_eq!(texts.iter().filter(|t| t.as_str() == "k").count(), 1);
}

#[test]
fn test_one_dot_per_legal_destination() {
    let mut app = render_app();

    click(&mut app, Square::E2);
    assert_eq!(dot_count(&mut app), 2);

    // Clicking e2 again clears it; the b1 knight then has two squares
    click(&mut app, Square::E2);
    click(&mut app, Square::B1);
    assert_eq!(dot_count(&mut app), 2);

    // An empty square clears the selection and the dots
    click(&mut app, Square::E5);
    assert_eq!(dot_count(&mut app), 0);
}

#[test]
fn test_suggestion_adds_single_marker() {
    let mut app = render_app();

    app.world_mut().insert_resource(SuggestedMove {
        ply: 0,
        squares: Some((Square::G1, Square::F3)),
    });
    app.update();
    assert_eq!(dot_count(&mut app), 1);

    // A hint from an earlier ply is not drawn
    app.world_mut().insert_resource(SuggestedMove {
        ply: 3,
        squares: Some((Square::G1, Square::F3)),
    });
    app.update();
    assert_eq!(dot_count(&mut app), 0);
}

#[test]
fn test_redraw_after_move_updates_status() {
    let mut app = render_app();

    click(&mut app, Square::E2);
    click(&mut app, Square::E4);

    let texts = texts(&mut app);
    assert!(texts.contains(&"Black's turn".to_string()));
    assert_eq!(texts.len(), 33);
    assert_eq!(dot_count(&mut app), 0);
}
