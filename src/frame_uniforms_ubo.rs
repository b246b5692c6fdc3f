use std::mem::{align_of, offset_of, size_of};

use bytemuck;
use glam::{Mat4, Vec2};

use crate::{
  config::Config,
  error::{InteropError, Result},
  gpu_types::{sample_offsets, Bool32, Kernel3x3, DEFAULT_SAMPLE_OFFSET_STEP},
  utils::align_up,
};

/// Full-screen effects toggled by the game. Independent, any combination is valid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PostFxEffects {
  /// edge detection + circular screen scroll
  pub chaos: bool,
  /// screen flipped on both axes, colors inverted
  pub confuse: bool,
  /// small time-based wobble + blur
  pub shake: bool,
}

/// Per-frame uniforms, bound at `BufferIndex::Uniforms` (vertex stage) and
/// `BufferIndex::FragmentUniforms` (fragment stage).
///
/// Field order is frozen: both matrices, then the three effect flags together, then `time`,
/// then the three 3x3 kernels. With 4-byte booleans nothing needs implicit padding, so the
/// std430 declaration on the shader side produces the very same offsets.
/// Must match `FrameUniforms` in the generated shader header.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct FrameUniformsUBO {
  /// column-major
  pub projection_matrix: Mat4,
  /// column-major
  pub model_view_matrix: Mat4,
  // effects
  pub chaos: Bool32,
  pub confuse: Bool32,
  pub shake: Bool32,
  /// seconds since start, drives effect animation
  pub time: f32,
  // 3x3 kernels, see `Kernel3x3` for the tap order
  pub offsets: Kernel3x3<Vec2>,
  pub edge_kernel: Kernel3x3<i32>,
  pub blur_kernel: Kernel3x3<f32>,
}

unsafe impl bytemuck::Zeroable for FrameUniformsUBO {}
unsafe impl bytemuck::Pod for FrameUniformsUBO {}

const _: () = assert!(
  size_of::<FrameUniformsUBO>() == 288,
  "FrameUniformsUBO must be exactly 288 bytes for GPU compatibility"
);
const _: () = assert!(align_of::<FrameUniformsUBO>() == 16);
const _: () = assert!(offset_of!(FrameUniformsUBO, projection_matrix) == 0);
const _: () = assert!(offset_of!(FrameUniformsUBO, model_view_matrix) == 64);
const _: () = assert!(offset_of!(FrameUniformsUBO, chaos) == 128);
const _: () = assert!(offset_of!(FrameUniformsUBO, confuse) == 132);
const _: () = assert!(offset_of!(FrameUniformsUBO, shake) == 136);
const _: () = assert!(offset_of!(FrameUniformsUBO, time) == 140);
const _: () = assert!(offset_of!(FrameUniformsUBO, offsets) == 144);
const _: () = assert!(offset_of!(FrameUniformsUBO, edge_kernel) == 216);
const _: () = assert!(offset_of!(FrameUniformsUBO, blur_kernel) == 252);

impl FrameUniformsUBO {
  pub const SIZE: usize = size_of::<FrameUniformsUBO>();
  /// Size rounded up to `Config::UNIFORM_ALIGNMENT`, the stride between per-frame copies
  pub const ALIGNED_SIZE: usize = align_up(Self::SIZE, Config::UNIFORM_ALIGNMENT);

  pub fn new(config: &Config, model_view_matrix: Mat4, effects: PostFxEffects, time: f32) -> Self {
    let postfx = &config.postfx;

    FrameUniformsUBO {
      projection_matrix: config.projection_matrix(),
      model_view_matrix,
      chaos: effects.chaos.into(),
      confuse: effects.confuse.into(),
      shake: effects.shake.into(),
      time,
      offsets: sample_offsets(postfx.sample_offset_step),
      edge_kernel: postfx.edge_kernel,
      blur_kernel: postfx.blur_kernel,
    }
  }

  pub fn effects(&self) -> PostFxEffects {
    PostFxEffects {
      chaos: self.chaos.get(),
      confuse: self.confuse.get(),
      shake: self.shake.get(),
    }
  }

  pub fn set_effects(&mut self, effects: PostFxEffects) {
    self.chaos = effects.chaos.into();
    self.confuse = effects.confuse.into();
    self.shake = effects.shake.into();
  }

  pub fn with_effects(mut self, effects: PostFxEffects) -> Self {
    self.set_effects(effects);
    self
  }

  pub fn as_bytes(&self) -> &[u8] {
    bytemuck::bytes_of(self)
  }

  /// Read back a record written by `as_bytes`. `bytes` does not need to be aligned.
  pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
    if bytes.len() != Self::SIZE {
      return Err(InteropError::SizeMismatch {
        record: "FrameUniformsUBO",
        expected: Self::SIZE,
        actual: bytes.len(),
      });
    }
    Ok(bytemuck::pod_read_unaligned(bytes))
  }
}

impl Default for FrameUniformsUBO {
  fn default() -> Self {
    FrameUniformsUBO {
      projection_matrix: Mat4::IDENTITY,
      model_view_matrix: Mat4::IDENTITY,
      chaos: Bool32::FALSE,
      confuse: Bool32::FALSE,
      shake: Bool32::FALSE,
      time: 0.0,
      offsets: sample_offsets(DEFAULT_SAMPLE_OFFSET_STEP),
      edge_kernel: Kernel3x3::EDGE_DETECT,
      blur_kernel: Kernel3x3::GAUSSIAN_BLUR,
    }
  }
}
