//! Centralized error types for the runner.
//!
//! This module defines all error types used throughout the application,
//! providing a consistent error handling approach.

/// Main error type for the runner.
///
/// This is the primary error type that should be used in public APIs.
/// It can represent any error that can occur during game operation.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Texture error: {0}")]
    Texture(#[from] TextureError),

    #[error("Animation error: {0}")]
    Animation(#[from] AnimationError),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Errors related to the sprite sheet and its atlas.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum TextureError {
    #[error("Failed to load texture: {0}")]
    LoadFailed(String),

    #[error("Texture not found in atlas: {0}")]
    AtlasTileNotFound(String),

    #[error("Rendering failed: {0}")]
    RenderFailed(String),
}

/// Errors raised while building sprite animations.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum AnimationError {
    #[error("An animation needs at least one frame")]
    EmptyFrames,
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
