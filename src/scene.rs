use std::collections::BTreeMap;

use thiserror::Error;
use tracing::warn;

use crate::collision::Bounds;

/// Opaque identifier for an element owned by the visual layer.
/// Game entities only store it and hand it back to the [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VisualHandle(pub(crate) u32);

/// Image resources a visual element can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Player,
    Enemy,
    Laser,
    EnemyLaser,
}

impl Sprite {
    /// Size of the image before any `set_width` call
    pub fn natural_size(&self) -> (f32, f32) {
        match self {
            Sprite::Player => (100.0, 100.0),
            Sprite::Enemy => (100.0, 100.0),
            Sprite::Laser => (5.0, 20.0),
            Sprite::EnemyLaser => (5.0, 20.0),
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            Sprite::Player => 'A',
            Sprite::Enemy => 'W',
            Sprite::Laser => '|',
            Sprite::EnemyLaser => '!',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("no visual element for handle {0:?}")]
    UnknownHandle(VisualHandle),
    #[error("invalid width {0} for visual element")]
    InvalidWidth(f32),
}

/// The visual layer the game logic draws through.
pub trait Scene {
    /// Creates an element bound to `sprite` and attaches it to the scene
    fn spawn(&mut self, sprite: Sprite) -> VisualHandle;

    /// Moves the element's top-left corner to `(x, y)`
    fn set_position(&mut self, handle: VisualHandle, x: f32, y: f32) -> Result<(), SceneError>;

    /// Sets the element's width; its height follows the image's aspect ratio
    fn set_width(&mut self, handle: VisualHandle, width: f32) -> Result<(), SceneError>;

    fn remove(&mut self, handle: VisualHandle) -> Result<(), SceneError>;

    /// Current bounding rectangle of the element, if it still exists
    fn bounds(&self, handle: VisualHandle) -> Option<Bounds>;
}

/// Positions an element, logging instead of failing when the handle is stale.
pub fn place<S: Scene>(scene: &mut S, handle: VisualHandle, x: f32, y: f32) {
    if let Err(err) = scene.set_position(handle, x, y) {
        warn!(%err, "failed to position visual element");
    }
}

pub fn resize<S: Scene>(scene: &mut S, handle: VisualHandle, width: f32) {
    if let Err(err) = scene.set_width(handle, width) {
        warn!(%err, "failed to resize visual element");
    }
}

pub fn despawn<S: Scene>(scene: &mut S, handle: VisualHandle) {
    if let Err(err) = scene.remove(handle) {
        warn!(%err, "failed to remove visual element");
    }
}

/// A single drawable element of a [`SpriteScene`]
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteNode {
    pub sprite: Sprite,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl SpriteNode {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }
}

/// In-memory scene graph. The terminal renderer draws it every frame.
#[derive(Debug, Default)]
pub struct SpriteScene {
    nodes: BTreeMap<VisualHandle, SpriteNode>,
    next_id: u32,
}

impl SpriteScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, handle: VisualHandle) -> Option<&SpriteNode> {
        self.nodes.get(&handle)
    }

    /// Elements in creation order
    pub fn nodes(&self) -> impl Iterator<Item = &SpriteNode> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node_mut(&mut self, handle: VisualHandle) -> Result<&mut SpriteNode, SceneError> {
        self.nodes
            .get_mut(&handle)
            .ok_or(SceneError::UnknownHandle(handle))
    }
}

impl Scene for SpriteScene {
    fn spawn(&mut self, sprite: Sprite) -> VisualHandle {
        let handle = VisualHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        let (width, height) = sprite.natural_size();
        self.nodes.insert(
            handle,
            SpriteNode {
                sprite,
                x: 0.0,
                y: 0.0,
                width,
                height,
            },
        );
        handle
    }

    fn set_position(&mut self, handle: VisualHandle, x: f32, y: f32) -> Result<(), SceneError> {
        let node = self.node_mut(handle)?;
        node.x = x;
        node.y = y;
        Ok(())
    }

    fn set_width(&mut self, handle: VisualHandle, width: f32) -> Result<(), SceneError> {
        if !width.is_finite() || width <= 0.0 {
            return Err(SceneError::InvalidWidth(width));
        }
        let node = self.node_mut(handle)?;
        let (natural_width, natural_height) = node.sprite.natural_size();
        node.width = width;
        node.height = natural_height * width / natural_width;
        Ok(())
    }

    fn remove(&mut self, handle: VisualHandle) -> Result<(), SceneError> {
        self.nodes
            .remove(&handle)
            .map(|_| ())
            .ok_or(SceneError::UnknownHandle(handle))
    }

    fn bounds(&self, handle: VisualHandle) -> Option<Bounds> {
        self.nodes.get(&handle).map(SpriteNode::bounds)
    }
}
