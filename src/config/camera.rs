use glam::Mat4;

/// 2D orthographic camera. Origin in the top-left corner, +y down, units are pixels.
pub struct CameraConfig {
  pub left: f32,
  pub right: f32,
  pub top: f32,
  pub bottom: f32,
  pub z_near: f32,
  pub z_far: f32,
}

impl CameraConfig {
  pub fn for_viewport(width: f32, height: f32) -> Self {
    Self {
      left: 0.0,
      right: width,
      top: 0.0,
      bottom: height,
      z_near: -1.0,
      z_far: 1.0,
    }
  }

  pub fn projection_matrix(&self) -> Mat4 {
    Mat4::orthographic_rh(
      self.left,
      self.right,
      self.bottom,
      self.top,
      self.z_near,
      self.z_far,
    )
  }
}

impl Default for CameraConfig {
  fn default() -> Self {
    Self::for_viewport(800.0, 600.0)
  }
}
