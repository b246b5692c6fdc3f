use breakout_interop::{
  shader_header::generate_glsl_header, Bool32, BufferIndex, Config, EffectsClock,
  FrameUniformsUBO, Kernel3x3, PostFxEffects, RecordLayout, SimpleVertex, SlotEnum,
  TextureIndex, TextureInputIndex, TextureVertex, UniformRing, VertexAttribute,
  VertexInputIndex,
};
use glam::{vec2, vec4, Mat4, Vec2};

fn gaussian() -> Kernel3x3<f32> {
  Kernel3x3::from_rows([
    [1.0 / 16.0, 2.0 / 16.0, 1.0 / 16.0],
    [2.0 / 16.0, 4.0 / 16.0, 2.0 / 16.0],
    [1.0 / 16.0, 2.0 / 16.0, 1.0 / 16.0],
  ])
}

#[test]
fn all_slot_sets_are_internally_distinct() {
  assert!(BufferIndex::values_are_distinct());
  assert!(VertexInputIndex::values_are_distinct());
  assert!(TextureInputIndex::values_are_distinct());
  assert!(VertexAttribute::values_are_distinct());
  assert!(TextureIndex::values_are_distinct());
}

#[test]
fn uniforms_survive_a_trip_through_gpu_memory() {
  let mut offsets = [Vec2::ZERO; 9];
  for (i, offset) in offsets.iter_mut().enumerate() {
    *offset = vec2(i as f32 * 0.01, 0.0);
  }
  let uniforms = FrameUniformsUBO {
    projection_matrix: Mat4::IDENTITY,
    model_view_matrix: Mat4::IDENTITY,
    chaos: true.into(),
    confuse: false.into(),
    shake: false.into(),
    time: 1.5,
    offsets: Kernel3x3::new(offsets),
    edge_kernel: Kernel3x3::new([-1, -1, -1, -1, 8, -1, -1, -1, -1]),
    blur_kernel: gaussian(),
  };
  assert!(uniforms.edge_kernel.is_edge_detector());
  assert!(uniforms.blur_kernel.is_normalized(1e-6));

  // mapped buffer of a 3-frame ring, frame 4 lands in slot 1
  let ring = UniformRing::from_config(&Config::new()).unwrap();
  let mut mapped = vec![0u8; ring.byte_size()];
  let offset = ring.write(&mut mapped, 4, &uniforms).unwrap();
  assert_eq!(offset as usize, FrameUniformsUBO::ALIGNED_SIZE);

  let read = ring.read(&mapped, 4).unwrap();
  assert_eq!(read.projection_matrix, uniforms.projection_matrix);
  assert_eq!(read.model_view_matrix, uniforms.model_view_matrix);
  assert_eq!(read.chaos, Bool32::TRUE);
  assert_eq!(read.confuse, Bool32::FALSE);
  assert_eq!(read.shake, Bool32::FALSE);
  assert_eq!(read.time, 1.5);
  for i in 0..9 {
    assert_eq!(read.offsets[i], uniforms.offsets[i]);
    assert_eq!(read.edge_kernel[i], uniforms.edge_kernel[i]);
    assert_eq!(read.blur_kernel[i], uniforms.blur_kernel[i]);
  }
}

#[test]
fn uniform_layout_is_identical_across_constructions() {
  let a = FrameUniformsUBO::default();
  let b = FrameUniformsUBO::new(
    &Config::new(),
    Mat4::IDENTITY,
    PostFxEffects::default(),
    0.0,
  );
  assert_eq!(a.as_bytes().len(), b.as_bytes().len());
  assert_eq!(RecordLayout::frame_uniforms(), RecordLayout::frame_uniforms());
  assert_eq!(RecordLayout::frame_uniforms().size, FrameUniformsUBO::SIZE);
}

#[test]
fn triangle_and_quad_scenario() {
  let red = vec4(1.0, 0.0, 0.0, 1.0);
  let triangle = SimpleVertex::triangle(red);
  let tri_bytes: &[u8] = bytemuck::cast_slice(&triangle);
  assert_eq!(tri_bytes.len(), 3 * RecordLayout::simple_vertex().size);
  assert_eq!(triangle[2].position, vec2(0.0, 1.0));

  let quad = TextureVertex::unit_quad();
  let quad_bytes: &[u8] = bytemuck::cast_slice(&quad);
  assert_eq!(quad_bytes.len(), 4 * RecordLayout::texture_vertex().size);

  let layout = RecordLayout::texture_vertex();
  let names: Vec<&str> = layout.fields.iter().map(|f| f.name).collect();
  assert_eq!(names, vec!["position", "texcoord"]);
}

#[test]
fn clock_drives_uniform_effects() {
  let config = Config::new();
  let mut clock = EffectsClock::new();
  clock.set_confuse(true);
  clock.trigger_shake(config.postfx.shake_duration);

  let frame = clock.mark_start_frame();
  let uniforms = FrameUniformsUBO::new(
    &config,
    Mat4::IDENTITY,
    clock.effects(),
    clock.elapsed_seconds(),
  );
  assert_eq!(frame, 1);
  assert!(uniforms.confuse.get());
  assert!(uniforms.shake.get());
  assert!(!uniforms.chaos.get());

  clock.tick(1.0);
  let uniforms = uniforms.with_effects(clock.effects());
  assert!(!uniforms.shake.get());
}

#[test]
fn generated_header_binds_uniforms_at_shared_slots() {
  let header = generate_glsl_header().unwrap();
  for (slot, block) in [
    (BufferIndex::Uniforms, "FrameUniformsVertex"),
    (BufferIndex::FragmentUniforms, "FrameUniformsFragment"),
  ] {
    let decl = format!(
      "layout(std430, set = 0, binding = {}) uniform {} {{",
      slot.index(),
      block
    );
    assert!(header.contains(&decl), "missing: {}", decl);
  }
  assert!(header.contains("#extension GL_EXT_scalar_block_layout : require"));

  for layout in [RecordLayout::simple_vertex(), RecordLayout::texture_vertex()] {
    assert!(header.contains(&format!("struct {} {{", layout.name)));
  }
}
