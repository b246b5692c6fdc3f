use log::{error, info};

use breakout_interop::{
  shader_header::generate_glsl_header, BufferIndex, RecordLayout, SlotEnum, TextureIndex,
  TextureInputIndex, VertexAttribute, VertexInputIndex,
};

// Usage:
//   rs-breakout-interop          - log record layouts and slot tables
//   rs-breakout-interop --glsl   - print the shader header to stdout
//     (e.g. `rs-breakout-interop --glsl > assets/shaders/interop.glsl`)

fn main() {
  if let Err(e) = init_logger() {
    eprintln!("Could not initialize logger: {}", e);
    std::process::exit(1);
  }

  let emit_glsl = std::env::args().skip(1).any(|arg| arg == "--glsl");
  if emit_glsl {
    match generate_glsl_header() {
      Ok(header) => print!("{}", header),
      Err(e) => {
        error!("{}", e);
        std::process::exit(1);
      }
    }
    return;
  }

  info!("-- Records --");
  for layout in RecordLayout::all() {
    let packed = if layout.is_tightly_packed() {
      "no implicit padding"
    } else {
      "HAS IMPLICIT PADDING"
    };
    info!("{}\n  -> {}", layout, packed);
  }

  info!("-- Slots --");
  log_slot_set::<BufferIndex>();
  log_slot_set::<VertexInputIndex>();
  log_slot_set::<TextureInputIndex>();
  log_slot_set::<VertexAttribute>();
  log_slot_set::<TextureIndex>();
}

fn init_logger() -> Result<(), log::SetLoggerError> {
  simple_logger::SimpleLogger::new().init()?;
  log::set_max_level(log::LevelFilter::Info);
  Ok(())
}

fn log_slot_set<S: SlotEnum + std::fmt::Debug>() {
  let distinct = if S::values_are_distinct() {
    "ok"
  } else {
    "DUPLICATE VALUES"
  };
  info!("{} ({}):", S::SET_NAME, distinct);
  for slot in S::ALL {
    info!("  {:>2} {:?}", slot.index(), slot);
  }
}
