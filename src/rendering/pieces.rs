//! Piece image cache
//!
//! Twelve images, one per colour and role, loaded once at startup from
//! `assets/{index}.png`. The index follows the classic sprite-sheet
//! order: white rook, knight, bishop, queen, king, pawn (0..=5), then the same
//! for black (6..=11).

use bevy::asset::LoadState;
use bevy::prelude::*;
use shakmaty::{Color as Side, Piece, Role};

/// Handles for all piece images
///
/// The default holds no images, so every piece is drawn as its letter.
#[derive(Resource, Debug, Clone, Default)]
pub struct PieceSprites {
    images: Vec<Handle<Image>>,
}

/// Sprite-sheet index of `piece`
pub fn piece_index(piece: Piece) -> usize {
    let role = match piece.role {
        Role::Rook => 0,
        Role::Knight => 1,
        Role::Bishop => 2,
        Role::Queen => 3,
        Role::King => 4,
        Role::Pawn => 5,
    };
    match piece.color {
        Side::White => role,
        Side::Black => role + 6,
    }
}

fn sprite_path(index: usize) -> String {
    format!("{}.png", index)
}

/// Asset path of the image for `piece`
pub fn piece_asset_path(piece: Piece) -> String {
    sprite_path(piece_index(piece))
}

impl PieceSprites {
    pub fn load(asset_server: &AssetServer) -> Self {
        let images = (0..12)
            .map(|index| asset_server.load(sprite_path(index)))
            .collect();
        Self { images }
    }

    pub fn image(&self, piece: Piece) -> Option<&Handle<Image>> {
        self.images.get(piece_index(piece))
    }

    /// Whether the image for `piece` failed to load
    pub fn is_missing(&self, asset_server: &AssetServer, piece: Piece) -> bool {
        self.image(piece).is_none_or(|handle| {
            matches!(
                asset_server.get_load_state(handle.id()),
                Some(LoadState::Failed(_))
            )
        })
    }

    /// Number of images that failed to load
    pub fn missing_count(&self, asset_server: &AssetServer) -> usize {
        self.images
            .iter()
            .filter(|handle| {
                matches!(
                    asset_server.get_load_state(handle.id()),
                    Some(LoadState::Failed(_))
                )
            })
            .count()
    }
}

/// Startup system that loads the piece images
pub fn load_piece_sprites(mut commands: Commands, asset_server: Res<AssetServer>) {
    info!("[ASSETS] Loading piece images from assets/");
    commands.insert_resource(PieceSprites::load(&asset_server));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_order() {
        let white_rook = Piece {
            color: Side::White,
            role: Role::Rook,
        };
        let white_pawn = Piece {
            color: Side::White,
            role: Role::Pawn,
        };
        let black_king = Piece {
            color: Side::Black,
            role: Role::King,
        };
        let black_pawn = Piece {
            color: Side::Black,
            role: Role::Pawn,
        };

        assert_eq!(piece_index(white_rook), 0);
        assert_eq!(piece_index(white_pawn), 5);
        assert_eq!(piece_index(black_king), 10);
        assert_eq!(piece_index(black_pawn), 11);
        assert_eq!(piece_asset_path(black_pawn), "11.png");
    }
}
