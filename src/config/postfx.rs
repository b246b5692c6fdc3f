use crate::gpu_types::{Kernel3x3, DEFAULT_SAMPLE_OFFSET_STEP};

/// Settings of the full-screen effects pass (chaos/confuse/shake).
pub struct PostFxCfg {
  /// Distance between kernel taps, in UV units
  pub sample_offset_step: f32,
  pub edge_kernel: Kernel3x3<i32>,
  pub blur_kernel: Kernel3x3<f32>,
  /// How long the screen shakes after a solid block hit, in seconds
  pub shake_duration: f32,
}

impl Default for PostFxCfg {
  fn default() -> Self {
    Self {
      sample_offset_step: DEFAULT_SAMPLE_OFFSET_STEP,
      edge_kernel: Kernel3x3::EDGE_DETECT,
      blur_kernel: Kernel3x3::GAUSSIAN_BLUR,
      shake_duration: 0.05,
    }
  }
}
