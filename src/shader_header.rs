//! GLSL side of the contract, generated from the Rust records so the two cannot drift.
//! Shaders `#include` the output instead of redeclaring anything by hand.

use std::fmt::Write;

use crate::{
  error::Result,
  layout_report::RecordLayout,
  slots::{
    BufferIndex, SlotEnum, TextureIndex, TextureInputIndex, VertexAttribute, VertexInputIndex,
  },
};

const INCLUDE_GUARD: &str = "BREAKOUT_INTEROP_GLSL";
/// std430 on uniform blocks, the same packing `#[repr(C)]` gives `FrameUniformsUBO`
const UNIFORM_BLOCK_EXTENSION: &str = "GL_EXT_scalar_block_layout";
const DESCRIPTOR_SET: u32 = 0;

pub fn generate_glsl_header() -> Result<String> {
  let mut out = String::new();

  writeln!(out, "// Generated by rs-breakout-interop. Do not edit.")?;
  writeln!(out, "#ifndef {}", INCLUDE_GUARD)?;
  writeln!(out, "#define {}", INCLUDE_GUARD)?;
  writeln!(out, "#extension {} : require", UNIFORM_BLOCK_EXTENSION)?;

  write_slot_set::<BufferIndex>(&mut out)?;
  write_slot_set::<VertexInputIndex>(&mut out)?;
  write_slot_set::<TextureInputIndex>(&mut out)?;
  write_slot_set::<VertexAttribute>(&mut out)?;
  write_slot_set::<TextureIndex>(&mut out)?;

  writeln!(out)?;
  writeln!(out, "// Flags are uint, test with != 0u.")?;
  let frame_uniforms = RecordLayout::frame_uniforms();
  writeln!(out)?;
  write_uniform_block(
    &mut out,
    &frame_uniforms,
    BufferIndex::Uniforms,
    "FrameUniformsVertex",
    "frame_vs",
  )?;
  writeln!(out)?;
  write_uniform_block(
    &mut out,
    &frame_uniforms,
    BufferIndex::FragmentUniforms,
    "FrameUniformsFragment",
    "frame_fs",
  )?;

  for record in [RecordLayout::simple_vertex(), RecordLayout::texture_vertex()] {
    writeln!(out)?;
    write_struct(&mut out, &record)?;
  }

  writeln!(out)?;
  writeln!(out, "#endif // {}", INCLUDE_GUARD)?;
  Ok(out)
}

fn write_slot_set<S: SlotEnum>(out: &mut String) -> Result<()> {
  writeln!(out)?;
  for slot in S::ALL {
    writeln!(out, "const uint {} = {}u;", slot.constant_name(), slot.index())?;
  }
  Ok(())
}

fn write_uniform_block(
  out: &mut String,
  record: &RecordLayout,
  slot: BufferIndex,
  block_name: &str,
  instance_name: &str,
) -> Result<()> {
  writeln!(out, "// {}, size {}", record.name, record.size)?;
  writeln!(
    out,
    "layout(std430, set = {}, binding = {}) uniform {} {{",
    DESCRIPTOR_SET,
    slot.index(),
    block_name
  )?;
  write_members(out, record)?;
  writeln!(out, "}} {};", instance_name)?;
  Ok(())
}

fn write_struct(out: &mut String, record: &RecordLayout) -> Result<()> {
  writeln!(out, "// size {}, align {}", record.size, record.align)?;
  writeln!(out, "struct {} {{", record.name)?;
  write_members(out, record)?;
  writeln!(out, "}};")?;
  Ok(())
}

fn write_members(out: &mut String, record: &RecordLayout) -> Result<()> {
  for field in &record.fields {
    match field.array_len {
      Some(len) => writeln!(
        out,
        "  {} {}[{}]; // offset {}",
        field.glsl_type, field.name, len, field.offset
      )?,
      None => writeln!(
        out,
        "  {} {}; // offset {}",
        field.glsl_type, field.name, field.offset
      )?,
    }
  }
  Ok(())
}
