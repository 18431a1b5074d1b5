//! The contract between the scene and whatever actually draws it.
//!
//! The scene never touches a graphics API. It drives a [`ShaderSink`] with a
//! view, a projection and then, per part of every placed feature, a model
//! transform, a colour, an optional texture and a draw call.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geometry the renderer must be able to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshKind {
    /// Unit cube centred on the origin.
    Cube,
    /// Unit quad on the XZ plane at y = 0.
    QuadXZ,
    /// The pond's circle fan, already in world space. See `CityScene::pond_mesh`.
    PondFan,
}

/// Texture slots the scene may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TextureSlot {
    /// Office facade.
    Building,
    /// Tower facade.
    Tower,
    /// Skyscraper facade.
    Skyscraper,
    /// Asphalt with lane markings.
    Road,
    /// Water surface.
    Pond,
}

impl TextureSlot {
    /// Every slot, in load order.
    pub const ALL: [TextureSlot; 5] = [
        TextureSlot::Building,
        TextureSlot::Tower,
        TextureSlot::Skyscraper,
        TextureSlot::Road,
        TextureSlot::Pond,
    ];
}

/// A model transform: scale, then rotate about +Y, then translate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space translation.
    pub translation: [f32; 3],
    /// Rotation about the vertical axis, in degrees.
    pub yaw_degrees: f32,
    /// Per-axis scale.
    pub scale: [f32; 3],
}

impl Transform {
    /// Translate by `translation` after scaling by `scale`.
    pub const fn new(translation: [f32; 3], scale: [f32; 3]) -> Self {
        Transform {
            translation,
            yaw_degrees: 0.0,
            scale,
        }
    }

    /// The same transform with a rotation about +Y.
    pub const fn rotated_y(mut self, degrees: f32) -> Self {
        self.yaw_degrees = degrees;
        self
    }
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
}

/// Receiver of the scene's draw submissions.
///
/// State set through the setters sticks until changed, like shader uniforms.
pub trait ShaderSink {
    /// Camera eye and look-at target.
    fn set_view(&mut self, eye: [f32; 3], target: [f32; 3]);
    /// Projection for the frame.
    fn set_projection(&mut self, projection: Projection);
    /// Model transform for the next draws.
    fn set_model(&mut self, model: &Transform);
    /// Base colour, RGB in `[0, 1]`.
    fn set_color(&mut self, rgb: [f32; 3]);
    /// Texture for the next draws; `None` draws flat colour.
    fn set_texture(&mut self, texture: Option<TextureSlot>);
    /// Whether `slot` has a loaded texture behind it.
    fn has_texture(&self, slot: TextureSlot) -> bool;
    /// Submit one draw of `mesh` with the current state.
    fn draw(&mut self, mesh: MeshKind);
}
