use std::time::Instant;

use log::debug;

use crate::{frame_uniforms_ubo::PostFxEffects, utils::get_simple_type_name};

pub type FrameIdx = u64;

/// Feeds the time-dependent parts of `FrameUniformsUBO`:
/// - `time`, seconds since the clock started. Never goes backwards
/// - frame index, selects the `UniformRing` slot
/// - effect flags, incl. the shake that switches itself off after a while
pub struct EffectsClock {
  frame_idx: FrameIdx,
  started_at: Instant,
  /// Seconds of shake left. Shake is on while > 0.
  shake_time: f32,
  chaos: bool,
  confuse: bool,
}

impl EffectsClock {
  pub fn new() -> Self {
    Self {
      frame_idx: 0,
      started_at: Instant::now(),
      shake_time: 0.0,
      chaos: false,
      confuse: false,
    }
  }

  pub fn frame_idx(&self) -> FrameIdx {
    self.frame_idx
  }

  /// Advance to the next frame, returns its index.
  pub fn mark_start_frame(&mut self) -> FrameIdx {
    match self.frame_idx.checked_add(1) {
      Some(e) => self.frame_idx = e,
      _ => panic!(
        "Integer overflow in {}.mark_start_frame(). How long did the app run?!",
        get_simple_type_name::<Self>()
      ),
    }
    self.frame_idx
  }

  /// Value for `FrameUniformsUBO::time`
  pub fn elapsed_seconds(&self) -> f32 {
    self.started_at.elapsed().as_secs_f32()
  }

  pub fn set_chaos(&mut self, enabled: bool) {
    self.chaos = enabled;
  }

  pub fn set_confuse(&mut self, enabled: bool) {
    self.confuse = enabled;
  }

  /// Shake for `duration` seconds. Re-triggering restarts the countdown.
  pub fn trigger_shake(&mut self, duration: f32) {
    debug!("Shake for {}s", duration);
    self.shake_time = duration.max(0.0);
  }

  /// Count down the shake timer by `dt` seconds.
  pub fn tick(&mut self, dt: f32) {
    if self.shake_time > 0.0 {
      self.shake_time = (self.shake_time - dt).max(0.0);
    }
  }

  pub fn effects(&self) -> PostFxEffects {
    PostFxEffects {
      chaos: self.chaos,
      confuse: self.confuse,
      shake: self.shake_time > 0.0,
    }
  }
}

impl Default for EffectsClock {
  fn default() -> Self {
    Self::new()
  }
}
