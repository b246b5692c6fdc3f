//! Memory layouts and binding slots shared by the Breakout renderer and its shaders.
//!
//! Everything copied across the CPU/GPU boundary is declared here once:
//! - slot numbers used to bind buffers, textures and vertex attributes ([`slots`])
//! - the per-frame uniform record ([`FrameUniformsUBO`])
//! - vertex records of the simple quad path ([`SimpleVertex`], [`TextureVertex`])
//!
//! The shader side is generated from the same declarations ([`shader_header`]).
//! There is no versioning or negotiation: both sides must be built from this crate.

pub mod config;
pub mod descriptors;
mod effects_clock;
mod error;
mod frame_uniforms_ubo;
mod gpu_types;
mod layout_report;
pub mod shader_header;
mod simple_vertex;
pub mod slots;
mod texture_vertex;
mod uniform_ring;
mod utils;

pub use self::config::Config;
pub use self::effects_clock::*;
pub use self::error::*;
pub use self::frame_uniforms_ubo::*;
pub use self::gpu_types::*;
pub use self::layout_report::*;
pub use self::simple_vertex::*;
pub use self::slots::{
  BufferIndex, SlotEnum, TextureIndex, TextureInputIndex, VertexAttribute, VertexInputIndex,
};
pub use self::texture_vertex::*;
pub use self::uniform_ring::*;
