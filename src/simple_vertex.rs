use std::mem::{offset_of, size_of};

use ash;
use ash::vk;
use bytemuck;
use glam::{vec2, Vec2, Vec4};

use crate::slots::{VertexAttribute, VertexInputIndex};

/// Flat-colored vertex of the simple quad path.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct SimpleVertex {
  pub position: Vec2,
  /// `vec4` members are 16-byte aligned on the shader side
  pub(crate) _padding: Vec2,
  /// RGBA
  pub color: Vec4,
}
unsafe impl bytemuck::Zeroable for SimpleVertex {}
unsafe impl bytemuck::Pod for SimpleVertex {}

const _: () = assert!(size_of::<SimpleVertex>() == 32);
const _: () = assert!(offset_of!(SimpleVertex, color) == 16);

impl SimpleVertex {
  const BINDINGS_DESC: [vk::VertexInputBindingDescription; 1] =
    [vk::VertexInputBindingDescription {
      binding: VertexInputIndex::Vertices as u32,
      input_rate: vk::VertexInputRate::VERTEX,
      stride: size_of::<SimpleVertex>() as u32,
    }];

  const ATTRIBUTES_DESC: [vk::VertexInputAttributeDescription; 2] = [
    vk::VertexInputAttributeDescription {
      binding: VertexInputIndex::Vertices as u32,
      location: VertexAttribute::Position as u32,
      format: vk::Format::R32G32_SFLOAT,
      offset: offset_of!(SimpleVertex, position) as u32,
    },
    vk::VertexInputAttributeDescription {
      binding: VertexInputIndex::Vertices as u32,
      location: VertexAttribute::Color as u32,
      format: vk::Format::R32G32B32A32_SFLOAT,
      offset: offset_of!(SimpleVertex, color) as u32,
    },
  ];

  pub fn new(position: Vec2, color: Vec4) -> SimpleVertex {
    SimpleVertex {
      position,
      _padding: Vec2::ZERO,
      color,
    }
  }

  /// Right triangle in the corner of the unit square, one color for all vertices.
  pub fn triangle(color: Vec4) -> [SimpleVertex; 3] {
    [
      SimpleVertex::new(vec2(0.0, 0.0), color),
      SimpleVertex::new(vec2(1.0, 0.0), color),
      SimpleVertex::new(vec2(0.0, 1.0), color),
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
