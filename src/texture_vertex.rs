use std::mem::{offset_of, size_of};

use ash;
use ash::vk;
use bytemuck;
use glam::{vec2, Vec2};

use crate::slots::{VertexAttribute, VertexInputIndex};

/// Textured vertex of the simple quad path. Used by the post-processing full-screen quad.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct TextureVertex {
  pub position: Vec2,
  /// uv, (0,0) is the top-left texel
  pub texcoord: Vec2,
}
unsafe impl bytemuck::Zeroable for TextureVertex {}
unsafe impl bytemuck::Pod for TextureVertex {}

const _: () = assert!(size_of::<TextureVertex>() == 16);
const _: () = assert!(offset_of!(TextureVertex, texcoord) == 8);

impl TextureVertex {
  const BINDINGS_DESC: [vk::VertexInputBindingDescription; 1] =
    [vk::VertexInputBindingDescription {
      binding: VertexInputIndex::Vertices as u32,
      input_rate: vk::VertexInputRate::VERTEX,
      stride: size_of::<TextureVertex>() as u32,
    }];

  const ATTRIBUTES_DESC: [vk::VertexInputAttributeDescription; 2] = [
    vk::VertexInputAttributeDescription {
      binding: VertexInputIndex::Vertices as u32,
      location: VertexAttribute::Position as u32,
      format: vk::Format::R32G32_SFLOAT,
      offset: offset_of!(TextureVertex, position) as u32,
    },
    vk::VertexInputAttributeDescription {
      binding: VertexInputIndex::Vertices as u32,
      location: VertexAttribute::Uv as u32,
      format: vk::Format::R32G32_SFLOAT,
      offset: offset_of!(TextureVertex, texcoord) as u32,
    },
  ];

  /// Two triangles covering the whole screen in NDC. Texture v grows downwards.
  pub const FULLSCREEN_QUAD: [TextureVertex; 6] = [
    TextureVertex::new(vec2(1.0, -1.0), vec2(1.0, 1.0)),
    TextureVertex::new(vec2(-1.0, -1.0), vec2(0.0, 1.0)),
    TextureVertex::new(vec2(-1.0, 1.0), vec2(0.0, 0.0)),
    //
    TextureVertex::new(vec2(1.0, -1.0), vec2(1.0, 1.0)),
    TextureVertex::new(vec2(-1.0, 1.0), vec2(0.0, 0.0)),
    TextureVertex::new(vec2(1.0, 1.0), vec2(1.0, 0.0)),
  ];

  pub const fn new(position: Vec2, texcoord: Vec2) -> TextureVertex {
    TextureVertex { position, texcoord }
  }

  /// Unit square, corners in order: bottom-left, bottom-right, top-right, top-left.
  /// Texcoords equal positions.
  pub fn unit_quad() -> [TextureVertex; 4] {
    [
      TextureVertex::new(vec2(0.0, 0.0), vec2(0.0, 0.0)),
      TextureVertex::new(vec2(1.0, 0.0), vec2(1.0, 0.0)),
      TextureVertex::new(vec2(1.0, 1.0), vec2(1.0, 1.0)),
      TextureVertex::new(vec2(0.0, 1.0), vec2(0.0, 1.0)),
    ]
  }

  pub fn get_bindings_descriptions() -> [vk::VertexInputBindingDescription; 1] {
    Self::BINDINGS_DESC
  }

  pub fn get_attributes_descriptions() -> [vk::VertexInputAttributeDescription; 2] {
    Self::ATTRIBUTES_DESC
  }

  pub fn get_vertex_description() -> vk::PipelineVertexInputStateCreateInfo {
    vk::PipelineVertexInputStateCreateInfo::builder()
      .vertex_attribute_descriptions(&Self::ATTRIBUTES_DESC)
      .vertex_binding_descriptions(&Self::BINDINGS_DESC)
      .build()
  }
}
