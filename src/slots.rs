//! Binding slots shared with the shaders.
//!
//! Every set below is its own binding namespace, so the same number showing up in two
//! different sets is fine (`BufferIndex::Vertices` and `TextureIndex::BaseColor` are both 0).
//! Inside one set values must be unique.

use crate::error::{InteropError, Result};

/// Common view over every slot set. Used by the shader header generator and the layout report.
pub trait SlotEnum: Copy + Sized + 'static {
  /// Prefix of the generated shader constants, e.g. `BUFFER_INDEX`.
  const SET_NAME: &'static str;
  /// Every slot, in declaration order.
  const ALL: &'static [Self];

  fn index(self) -> u32;

  /// Shader-side name of the slot, without the set prefix.
  fn name(self) -> &'static str;

  /// Name of the generated shader constant, e.g. `BUFFER_INDEX_UNIFORMS`.
  fn constant_name(self) -> String {
    format!("{}_{}", Self::SET_NAME, self.name())
  }

  fn values_are_distinct() -> bool {
    let values: Vec<u32> = Self::ALL.iter().map(|slot| slot.index()).collect();
    values
      .iter()
      .enumerate()
      .all(|(i, value)| !values[i + 1..].contains(value))
  }
}

macro_rules! slot_set {
  (
    $(#[$meta:meta])*
    pub enum $name:ident as $set:literal {
      $( $(#[$vmeta:meta])* $variant:ident = $value:literal => $glsl:literal, )+
    }
  ) => {
    $(#[$meta])*
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    #[repr(u32)]
    pub enum $name {
      $( $(#[$vmeta])* $variant = $value, )+
    }

    impl SlotEnum for $name {
      const SET_NAME: &'static str = $set;
      const ALL: &'static [Self] = &[$(Self::$variant,)+];

      fn index(self) -> u32 {
        self as u32
      }

      fn name(self) -> &'static str {
        match self {
          $( Self::$variant => $glsl, )+
        }
      }
    }

    impl TryFrom<u32> for $name {
      type Error = InteropError;

      fn try_from(value: u32) -> Result<Self> {
        match value {
          $( $value => Ok(Self::$variant), )+
          _ => Err(InteropError::UnknownSlot { set: $set, value }),
        }
      }
    }
  };
}

slot_set! {
  /// Buffer slots of the lit-mesh path. Uniform-ish buffers start at 11 so they never
  /// collide with per-draw vertex buffers bound from 0.
  pub enum BufferIndex as "BUFFER_INDEX" {
    Vertices = 0 => "VERTICES",
    Uniforms = 11 => "UNIFORMS",
    Lights = 12 => "LIGHTS",
    FragmentUniforms = 13 => "FRAGMENT_UNIFORMS",
    Materials = 14 => "MATERIALS",
  }
}

slot_set! {
  /// Vertex buffer slots of the simple quad path (post-processing, debug quads).
  pub enum VertexInputIndex as "VERTEX_INPUT_INDEX" {
    Vertices = 0 => "VERTICES",
    AspectRatio = 1 => "ASPECT_RATIO",
  }
}

slot_set! {
  /// Texture slots of the simple quad path.
  pub enum TextureInputIndex as "TEXTURE_INPUT_INDEX" {
    Color = 0 => "COLOR",
  }
}

slot_set! {
  /// Shader input locations of the mesh attribute streams.
  pub enum VertexAttribute as "ATTRIBUTE" {
    Position = 0 => "POSITION",
    Normal = 1 => "NORMAL",
    Uv = 2 => "UV",
    Tangent = 3 => "TANGENT",
    Bitangent = 4 => "BITANGENT",
    Color = 5 => "COLOR",
  }
}

slot_set! {
  /// Material texture slots.
  pub enum TextureIndex as "TEXTURE" {
    BaseColor = 0 => "BASE_COLOR",
    Normal = 1 => "NORMAL",
  }
}
