use ash;
use ash::vk;
use log::trace;

use crate::{
  error::{InteropError, Result},
  slots::{BufferIndex, SlotEnum, TextureIndex, TextureInputIndex},
};

/// Create layout for a single uniform buffer object.
/// That layout will be one of layouts gathered in DescriptorSetLayout.
pub fn create_ubo_binding(
  binding: u32,
  stage_flags: vk::ShaderStageFlags,
) -> vk::DescriptorSetLayoutBinding {
  vk::DescriptorSetLayoutBinding::builder()
    .binding(binding)
    .descriptor_type(vk::DescriptorType::UNIFORM_BUFFER_DYNAMIC)
    .descriptor_count(1)
    .stage_flags(stage_flags)
    .build()
}

/// Create layout for a single texture/sampler object.
/// That layout will be one of layouts gathered in DescriptorSetLayout.
pub fn create_texture_binding(
  binding: u32,
  stage_flags: vk::ShaderStageFlags,
) -> vk::DescriptorSetLayoutBinding {
  vk::DescriptorSetLayoutBinding::builder()
    .binding(binding)
    .descriptor_type(vk::DescriptorType::COMBINED_IMAGE_SAMPLER)
    .descriptor_count(1)
    .stage_flags(stage_flags)
    .build()
}

/// Sprites and text: frame uniforms in the vertex stage, atlas in the fragment stage.
pub fn sprite_bindings() -> Vec<vk::DescriptorSetLayoutBinding> {
  vec![
    create_ubo_binding(BufferIndex::Uniforms.index(), vk::ShaderStageFlags::VERTEX),
    create_texture_binding(
      TextureIndex::BaseColor.index(),
      vk::ShaderStageFlags::FRAGMENT,
    ),
  ]
}

/// Full-screen effects pass. Frame uniforms go to both stages, each under its own slot,
/// plus the offscreen scene color.
pub fn post_process_bindings() -> Vec<vk::DescriptorSetLayoutBinding> {
  vec![
    create_ubo_binding(BufferIndex::Uniforms.index(), vk::ShaderStageFlags::VERTEX),
    create_ubo_binding(
      BufferIndex::FragmentUniforms.index(),
      vk::ShaderStageFlags::FRAGMENT,
    ),
    create_texture_binding(
      TextureInputIndex::Color.index(),
      vk::ShaderStageFlags::FRAGMENT,
    ),
  ]
}

/// Inside one descriptor set every binding number has to be unique.
pub fn validate_bindings(bindings: &[vk::DescriptorSetLayoutBinding]) -> Result<()> {
  for (i, binding) in bindings.iter().enumerate() {
    trace!(
      "Binding {} -> {:?} ({:?})",
      binding.binding,
      binding.descriptor_type,
      binding.stage_flags
    );
    if bindings[i + 1..].iter().any(|b| b.binding == binding.binding) {
      return Err(InteropError::BindingCollision {
        binding: binding.binding,
      });
    }
  }
  Ok(())
}
