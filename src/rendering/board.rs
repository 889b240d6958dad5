//! Board, piece and marker drawing
//!
//! The picture is rebuilt from scratch whenever anything it shows changes:
//! all [`BoardVisual`] entities are despawned and respawned from the current
//! [`BoardState`], [`Selection`], [`SuggestedMove`] and pending engine search.
//! Nothing drawn survives a pass except the shared [`BoardPalette`] and
//! [`PieceSprites`] handles.

use super::pieces::PieceSprites;
use super::utils::{cell_center, is_light, layer, square_center, BoardVisual, BORDER_WIDTH};
use crate::core::{InGameplay, ScreenScoped, BOARD_SIZE, SQUARE_SIZE};
use crate::game::ai::PendingEngineMove;
use crate::game::resources::{Selection, SuggestedMove};
use crate::game::rules::BoardState;
use bevy::prelude::*;
use shakmaty::{Color as Side, Piece, Square};

/// Radius of the legal-destination markers
pub const HINT_RADIUS: f32 = 10.0;

/// Radius of the engine suggestion marker
pub const SUGGESTION_RADIUS: f32 = 15.0;

const STATUS_FONT_SIZE: f32 = 24.0;
const PIECE_GLYPH_FONT_SIZE: f32 = 48.0;

/// Colours, meshes and materials shared by every redraw
#[derive(Resource, Debug, Clone)]
pub struct BoardPalette {
    pub light: Color,
    pub dark: Color,
    pub border: Color,
    pub hint_mesh: Handle<Mesh>,
    pub hint_material: Handle<ColorMaterial>,
    pub suggestion_mesh: Handle<Mesh>,
    pub suggestion_material: Handle<ColorMaterial>,
}

/// Startup system that builds the [`BoardPalette`]
pub fn setup_board_palette(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.insert_resource(BoardPalette {
        light: Color::srgb_u8(240, 217, 181),
        dark: Color::srgb_u8(181, 136, 99),
        border: Color::BLACK,
        hint_mesh: meshes.add(Circle::new(HINT_RADIUS)),
        hint_material: materials.add(ColorMaterial::from(Color::srgb_u8(0, 0, 255))),
        suggestion_mesh: meshes.add(Circle::new(SUGGESTION_RADIUS)),
        suggestion_material: materials.add(ColorMaterial::from(Color::srgb_u8(255, 0, 0))),
    });
}

/// Status line shown under the board
pub fn status_text(turn: Side, engine_thinking: bool) -> String {
    let side = match turn {
        Side::White => "White",
        Side::Black => "Black",
    };
    if engine_thinking {
        format!("{}'s turn (engine thinking...)", side)
    } else {
        format!("{}'s turn", side)
    }
}

/// Status text colour: the colour of the side to move
pub fn status_color(turn: Side) -> Color {
    match turn {
        Side::White => Color::WHITE,
        Side::Black => Color::BLACK,
    }
}

/// Everything the picture depends on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSignature {
    ply: usize,
    selection: Selection,
    suggestion: Option<Square>,
    engine_thinking: bool,
    missing_sprites: usize,
}

/// System that redraws the board when its inputs change
#[allow(clippy::too_many_arguments)]
pub fn redraw_board(
    mut commands: Commands,
    board: Res<BoardState>,
    selection: Res<Selection>,
    suggestion: Option<Res<SuggestedMove>>,
    pending: Option<Res<PendingEngineMove>>,
    palette: Res<BoardPalette>,
    sprites: Res<PieceSprites>,
    asset_server: Res<AssetServer>,
    visuals: Query<Entity, With<BoardVisual>>,
    mut last: Local<Option<BoardSignature>>,
) {
    let signature = BoardSignature {
        ply: board.ply(),
        selection: selection.clone(),
        suggestion: suggestion.and_then(|s| s.destination_at(board.ply())),
        engine_thinking: pending.is_some_and(|p| p.is_reply_for(board.ply())),
        missing_sprites: sprites.missing_count(&asset_server),
    };

    if !visuals.is_empty() && last.as_ref() == Some(&signature) {
        return;
    }

    if signature.missing_sprites > 0
        && last
            .as_ref()
            .is_none_or(|l| l.missing_sprites != signature.missing_sprites)
    {
        warn!(
            "[ASSETS] {} piece image(s) missing under assets/, drawing letters instead",
            signature.missing_sprites
        );
    }

    for entity in &visuals {
        commands.entity(entity).despawn();
    }

    spawn_squares(&mut commands, &palette);

    for (square, piece) in board.pieces() {
        spawn_piece(&mut commands, &sprites, &asset_server, square, piece);
    }

    for &destination in &signature.selection.destinations {
        commands.spawn((
            Name::new("Move Hint"),
            BoardVisual,
            ScreenScoped(InGameplay),
            Mesh2d(palette.hint_mesh.clone()),
            MeshMaterial2d(palette.hint_material.clone()),
            Transform::from_translation(square_center(destination).extend(layer::HINT)),
        ));
    }

    if let Some(destination) = signature.suggestion {
        commands.spawn((
            Name::new("Engine Suggestion"),
            BoardVisual,
            ScreenScoped(InGameplay),
            Mesh2d(palette.suggestion_mesh.clone()),
            MeshMaterial2d(palette.suggestion_material.clone()),
            Transform::from_translation(square_center(destination).extend(layer::SUGGESTION)),
        ));
    }

    let half_board = BOARD_SIZE as f32 / 2.0;
    commands.spawn((
        Name::new("Status"),
        BoardVisual,
        ScreenScoped(InGameplay),
        Text2d::new(status_text(board.turn(), signature.engine_thinking)),
        TextFont {
            font_size: STATUS_FONT_SIZE,
            ..default()
        },
        TextColor(status_color(board.turn())),
        Transform::from_xyz(0.0, -half_board + STATUS_FONT_SIZE, layer::STATUS),
    ));

    trace!("[RENDER] Board redrawn at ply {}", signature.ply);
    *last = Some(signature);
}

fn spawn_squares(commands: &mut Commands, palette: &BoardPalette) {
    let size = SQUARE_SIZE as f32;
    for row in 0..8 {
        for col in 0..8 {
            let center = cell_center(row, col);
            let fill = if is_light(row, col) {
                palette.light
            } else {
                palette.dark
            };

            commands.spawn((
                Name::new("Square Border"),
                BoardVisual,
                ScreenScoped(InGameplay),
                Sprite::from_color(palette.border, Vec2::splat(size)),
                Transform::from_translation(center.extend(layer::BORDER)),
            ));
            commands.spawn((
                Name::new("Square"),
                BoardVisual,
                ScreenScoped(InGameplay),
                Sprite::from_color(fill, Vec2::splat(size - 2.0 * BORDER_WIDTH)),
                Transform::from_translation(center.extend(layer::SQUARE)),
            ));
        }
    }
}

fn spawn_piece(
    commands: &mut Commands,
    sprites: &PieceSprites,
    asset_server: &AssetServer,
    square: Square,
    piece: Piece,
) {
    let transform = Transform::from_translation(square_center(square).extend(layer::PIECE));

    match sprites.image(piece) {
        Some(image) if !sprites.is_missing(asset_server, piece) => {
            commands.spawn((
                Name::new("Piece"),
                BoardVisual,
                ScreenScoped(InGameplay),
                Sprite {
                    image: image.clone(),
                    custom_size: Some(Vec2::splat(SQUARE_SIZE as f32)),
                    ..default()
                },
                transform,
            ));
        }
        _ => {
            commands.spawn((
                Name::new("Piece"),
                BoardVisual,
                ScreenScoped(InGameplay),
                Text2d::new(piece.char().to_string()),
                TextFont {
                    font_size: PIECE_GLYPH_FONT_SIZE,
                    ..default()
                },
                TextColor(status_color(piece.color)),
                transform,
            ));
        }
    }
}
