/// Round `value` up to the next multiple of `alignment`. `alignment` has to be a power of two.
pub const fn align_up(value: usize, alignment: usize) -> usize {
  (value + alignment - 1) & !(alignment - 1)
}

/// `breakout_interop::frame_uniforms_ubo::FrameUniformsUBO` -> `FrameUniformsUBO`
pub fn get_simple_type_name<T>() -> &'static str {
  let name = std::any::type_name::<T>();
  match name.rsplit_once("::") {
    Some((_, simple)) => simple,
    None => name,
  }
}
