use glam::Mat4;

pub use self::{camera::*, postfx::*};

pub mod camera;
pub mod postfx;

pub struct Config {
  // window
  pub window_width: f32,
  pub window_height: f32,
  pub camera: CameraConfig,
  /// How many frames the CPU may record ahead of the GPU. Each gets its own uniform copy.
  pub frames_in_flight: usize,
  /// Dynamic uniform offsets have to be multiples of this. 256 is the worst case across drivers.
  pub uniform_alignment: usize,
  // postfx
  pub postfx: PostFxCfg,
}

impl Config {
  pub const FRAMES_IN_FLIGHT: usize = 3;
  pub const UNIFORM_ALIGNMENT: usize = 256;

  pub fn new() -> Config {
    let window_width = 800.0;
    let window_height = 600.0;

    Config {
      window_width,
      window_height,
      camera: CameraConfig::for_viewport(window_width, window_height),
      frames_in_flight: Self::FRAMES_IN_FLIGHT,
      uniform_alignment: Self::UNIFORM_ALIGNMENT,
      postfx: PostFxCfg::default(),
    }
  }

  pub fn projection_matrix(&self) -> Mat4 {
    self.camera.projection_matrix()
  }
}

impl Default for Config {
  fn default() -> Self {
    Self::new()
  }
}
