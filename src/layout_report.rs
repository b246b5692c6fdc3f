use std::fmt;
use std::mem::{align_of, offset_of, size_of, size_of_val};

use bytemuck::Zeroable;

use crate::{
  frame_uniforms_ubo::FrameUniformsUBO, simple_vertex::SimpleVertex,
  texture_vertex::TextureVertex,
};

/// One member of a shared record, as both sides have to see it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldLayout {
  pub name: &'static str,
  /// Element type in the shader declaration
  pub glsl_type: &'static str,
  /// `Some(n)` for fixed-size arrays
  pub array_len: Option<usize>,
  pub offset: usize,
  pub size: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordLayout {
  pub name: &'static str,
  pub size: usize,
  pub align: usize,
  pub fields: Vec<FieldLayout>,
}

macro_rules! field_layout {
  ($record:ty, $field:ident, $glsl:literal) => {
    field_layout!($record, $field, $glsl, None)
  };
  ($record:ty, $field:ident, $glsl:literal, $len:expr) => {{
    let record = <$record>::zeroed();
    FieldLayout {
      name: stringify!($field),
      glsl_type: $glsl,
      array_len: $len,
      offset: offset_of!($record, $field),
      size: size_of_val(&record.$field),
    }
  }};
}

impl RecordLayout {
  pub fn frame_uniforms() -> Self {
    Self {
      name: "FrameUniforms",
      size: size_of::<FrameUniformsUBO>(),
      align: align_of::<FrameUniformsUBO>(),
      fields: vec![
        field_layout!(FrameUniformsUBO, projection_matrix, "mat4"),
        field_layout!(FrameUniformsUBO, model_view_matrix, "mat4"),
        field_layout!(FrameUniformsUBO, chaos, "uint"),
        field_layout!(FrameUniformsUBO, confuse, "uint"),
        field_layout!(FrameUniformsUBO, shake, "uint"),
        field_layout!(FrameUniformsUBO, time, "float"),
        field_layout!(FrameUniformsUBO, offsets, "vec2", Some(9)),
        field_layout!(FrameUniformsUBO, edge_kernel, "int", Some(9)),
        field_layout!(FrameUniformsUBO, blur_kernel, "float", Some(9)),
      ],
    }
  }

  pub fn simple_vertex() -> Self {
    Self {
      name: "SimpleVertex",
      size: size_of::<SimpleVertex>(),
      align: align_of::<SimpleVertex>(),
      fields: vec![
        field_layout!(SimpleVertex, position, "vec2"),
        field_layout!(SimpleVertex, _padding, "vec2"),
        field_layout!(SimpleVertex, color, "vec4"),
      ],
    }
  }

  pub fn texture_vertex() -> Self {
    Self {
      name: "TextureVertex",
      size: size_of::<TextureVertex>(),
      align: align_of::<TextureVertex>(),
      fields: vec![
        field_layout!(TextureVertex, position, "vec2"),
        field_layout!(TextureVertex, texcoord, "vec2"),
      ],
    }
  }

  pub fn all() -> Vec<Self> {
    vec![
      Self::frame_uniforms(),
      Self::simple_vertex(),
      Self::texture_vertex(),
    ]
  }

  pub fn field(&self, name: &str) -> Option<&FieldLayout> {
    self.fields.iter().find(|f| f.name == name)
  }

  /// Every byte belongs to a declared field, in declaration order. Anything else means
  /// a compiler inserted padding the other side may not agree on.
  pub fn is_tightly_packed(&self) -> bool {
    let mut expected_offset = 0;
    for field in &self.fields {
      if field.offset != expected_offset {
        return false;
      }
      expected_offset += field.size;
    }
    expected_offset == self.size
  }
}

impl fmt::Display for RecordLayout {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(
      f,
      "{} (size {}, align {}):",
      self.name, self.size, self.align
    )?;
    for field in &self.fields {
      let ty = match field.array_len {
        Some(len) => format!("{}[{}]", field.glsl_type, len),
        None => field.glsl_type.to_string(),
      };
      writeln!(
        f,
        "  {:>4} {:>4}  {:<10} {}",
        field.offset, field.size, ty, field.name
      )?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn frame_uniforms_have_documented_shape() {
    let layout = RecordLayout::frame_uniforms();
    let mat4s = layout.fields.iter().filter(|f| f.glsl_type == "mat4");
    assert!(mat4s.clone().all(|f| f.size == 16 * 4));
    assert_eq!(mat4s.count(), 2);
    let flags = layout.fields.iter().filter(|f| f.glsl_type == "uint");
    assert_eq!(flags.count(), 3);
    let arrays: Vec<&FieldLayout> = layout
      .fields
      .iter()
      .filter(|f| f.array_len.is_some())
      .collect();
    assert_eq!(arrays.len(), 3);
    assert!(arrays.iter().all(|f| f.array_len == Some(9)));

    assert_eq!(layout.field("offsets").map(|f| f.size), Some(9 * 8));
    assert_eq!(layout.field("edge_kernel").map(|f| f.size), Some(9 * 4));
    assert_eq!(layout.field("blur_kernel").map(|f| f.size), Some(9 * 4));
    assert_eq!(layout.field("time").map(|f| f.offset), Some(140));
  }

  #[test]
  fn every_record_is_tightly_packed() {
    for layout in RecordLayout::all() {
      assert!(layout.is_tightly_packed(), "{}", layout);
    }
  }

  #[test]
  fn gap_is_detected() {
    let mut layout = RecordLayout::texture_vertex();
    layout.fields.remove(0);
    assert!(!layout.is_tightly_packed());
  }

  #[test]
  fn report_lists_fields_in_order() {
    let text = RecordLayout::texture_vertex().to_string();
    let position = text.find("position").unwrap();
    let texcoord = text.find("texcoord").unwrap();
    assert!(position < texcoord);
    assert!(text.starts_with("TextureVertex (size 16, align"));
  }
}
