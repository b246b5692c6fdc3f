use log::{debug, info, trace};

use crate::{
  config::Config,
  error::{InteropError, Result},
  frame_uniforms_ubo::FrameUniformsUBO,
  utils::{align_up, get_simple_type_name},
};

/// One `FrameUniformsUBO` copy per frame-in-flight, packed into a single mapped buffer
/// at aligned strides. Bind it as a dynamic uniform buffer with the returned offset.
///
/// The CPU only ever writes the slot of the frame it is recording. The slot is not touched
/// again until `frames_in_flight` frames later, by which time the GPU is done reading it
/// (the frame fence guarantees that, not us).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UniformRing {
  frames_in_flight: usize,
  /// Bytes between consecutive copies
  stride: usize,
  byte_size: usize,
}

impl UniformRing {
  pub fn new(frames_in_flight: usize, alignment: usize) -> Result<Self> {
    if !alignment.is_power_of_two() {
      return Err(InteropError::BadAlignment(alignment));
    }
    if frames_in_flight == 0 {
      return Err(InteropError::NoFramesInFlight);
    }

    let stride = align_up(FrameUniformsUBO::SIZE, alignment);
    let byte_size =
      stride
        .checked_mul(frames_in_flight)
        .ok_or(InteropError::RingTooLarge {
          frames_in_flight,
          stride,
        })?;
    // dynamic offsets are 32-bit on the Vulkan side
    let last_offset = stride * (frames_in_flight - 1);
    u32::try_from(last_offset).map_err(|_| InteropError::OffsetOutOfRange(last_offset))?;

    let ring = Self {
      frames_in_flight,
      stride,
      byte_size,
    };
    info!(
      "Creating {} ({} frames in flight, stride {} bytes, {} bytes total)",
      get_simple_type_name::<Self>(),
      frames_in_flight,
      ring.stride,
      ring.byte_size()
    );
    Ok(ring)
  }

  pub fn from_config(config: &Config) -> Result<Self> {
    Self::new(config.frames_in_flight, config.uniform_alignment)
  }

  pub fn frames_in_flight(&self) -> usize {
    self.frames_in_flight
  }

  pub fn stride(&self) -> usize {
    self.stride
  }

  /// Size of the buffer that has to be allocated for the whole ring
  pub fn byte_size(&self) -> usize {
    self.byte_size
  }

  pub fn slot_for_frame(&self, frame_idx: u64) -> usize {
    (frame_idx % self.frames_in_flight as u64) as usize
  }

  pub fn offset_for_frame(&self, frame_idx: u64) -> usize {
    self.slot_for_frame(frame_idx) * self.stride
  }

  /// Copy `uniforms` into this frame's slot. Returns the dynamic offset to bind.
  pub fn write(
    &self,
    mapped: &mut [u8],
    frame_idx: u64,
    uniforms: &FrameUniformsUBO,
  ) -> Result<u32> {
    self.check_buffer(mapped.len())?;

    let offset = self.offset_for_frame(frame_idx);
    let bytes = uniforms.as_bytes();
    mapped[offset..offset + bytes.len()].copy_from_slice(bytes);
    trace!(
      "Wrote {} bytes of uniforms for frame {} at offset {}",
      bytes.len(),
      frame_idx,
      offset
    );

    u32::try_from(offset).map_err(|_| InteropError::OffsetOutOfRange(offset))
  }

  /// Read back what `write` stored for this frame.
  pub fn read(&self, mapped: &[u8], frame_idx: u64) -> Result<FrameUniformsUBO> {
    self.check_buffer(mapped.len())?;

    let offset = self.offset_for_frame(frame_idx);
    FrameUniformsUBO::from_bytes(&mapped[offset..offset + FrameUniformsUBO::SIZE])
  }

  fn check_buffer(&self, len: usize) -> Result<()> {
    if len < self.byte_size() {
      debug!(
        "Mapped buffer of {} bytes is too small for the uniform ring",
        len
      );
      return Err(InteropError::BufferTooSmall {
        required: self.byte_size(),
        actual: len,
      });
    }
    Ok(())
  }
}
