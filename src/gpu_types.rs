use std::fmt;
use std::ops::Index;

use bytemuck;
use glam::{vec2, Vec2};

/// Offset between neighbouring taps of the post-processing kernels, in UV units.
pub const DEFAULT_SAMPLE_OFFSET_STEP: f32 = 1.0 / 300.0;

/// Boolean as the shaders see it: a full 32-bit word, 0 or 1.
/// Never use `bool` inside a shared record, its size is not the same on both sides.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Bool32(u32);

unsafe impl bytemuck::Zeroable for Bool32 {}
unsafe impl bytemuck::Pod for Bool32 {}

impl Bool32 {
  pub const FALSE: Bool32 = Bool32(0);
  pub const TRUE: Bool32 = Bool32(1);

  pub const fn new(value: bool) -> Self {
    Bool32(value as u32)
  }

  /// Shaders test `!= 0`, so do we.
  pub const fn get(self) -> bool {
    self.0 != 0
  }

  pub const fn raw(self) -> u32 {
    self.0
  }
}

impl From<bool> for Bool32 {
  fn from(value: bool) -> Self {
    Bool32::new(value)
  }
}

impl From<Bool32> for bool {
  fn from(value: Bool32) -> Self {
    value.get()
  }
}

impl fmt::Debug for Bool32 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.get())
  }
}

/// 3x3 convolution kernel stored row-major:
///
/// ```text
/// 0 1 2     (-1,-1) (0,-1) (1,-1)
/// 3 4 5  =  (-1, 0) (0, 0) (1, 0)
/// 6 7 8     (-1, 1) (0, 1) (1, 1)
/// ```
///
/// Index `i` is the same spatial tap in every kernel of a record, so `offsets[i]`,
/// `edge_kernel[i]` and `blur_kernel[i]` always describe the same neighbour.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(transparent)]
pub struct Kernel3x3<T>(pub [T; 9]);

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Kernel3x3<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Kernel3x3<T> {}

impl<T: Copy> Kernel3x3<T> {
  pub const SIDE: usize = 3;
  pub const LEN: usize = 9;

  pub const fn new(taps: [T; 9]) -> Self {
    Kernel3x3(taps)
  }

  pub fn from_rows(rows: [[T; 3]; 3]) -> Self {
    let [r0, r1, r2] = rows;
    Kernel3x3([
      r0[0], r0[1], r0[2], //
      r1[0], r1[1], r1[2], //
      r2[0], r2[1], r2[2],
    ])
  }

  /// Panics if `row` or `col` is outside `0..3`.
  pub fn at(&self, row: usize, col: usize) -> T {
    assert!(
      row < Self::SIDE && col < Self::SIDE,
      "Kernel3x3 tap ({}, {}) out of range",
      row,
      col
    );
    self.0[row * Self::SIDE + col]
  }

  pub fn as_array(&self) -> &[T; 9] {
    &self.0
  }

  pub fn iter(&self) -> std::slice::Iter<'_, T> {
    self.0.iter()
  }

  pub fn map<U>(self, f: impl FnMut(T) -> U) -> Kernel3x3<U> {
    Kernel3x3(self.0.map(f))
  }
}

/// Spatial position `(dx, dy)` of tap `i`, +y pointing down the rows.
pub fn kernel_tap(i: usize) -> (i32, i32) {
  assert!(i < 9, "Kernel3x3 has 9 taps, asked for {}", i);
  ((i % 3) as i32 - 1, (i / 3) as i32 - 1)
}

impl<T> Index<usize> for Kernel3x3<T> {
  type Output = T;

  fn index(&self, i: usize) -> &T {
    &self.0[i]
  }
}

impl<T> IntoIterator for Kernel3x3<T> {
  type Item = T;
  type IntoIter = std::array::IntoIter<T, 9>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}

impl Kernel3x3<i32> {
  #[rustfmt::skip]
  pub const EDGE_DETECT: Kernel3x3<i32> = Kernel3x3([
    -1, -1, -1,
    -1,  8, -1,
    -1, -1, -1,
  ]);

  pub fn sum(&self) -> i32 {
    self.0.iter().sum()
  }

  /// Edge detectors return 0 on flat regions, so their weights sum to 0.
  pub fn is_edge_detector(&self) -> bool {
    self.sum() == 0
  }
}

impl Kernel3x3<f32> {
  #[rustfmt::skip]
  pub const GAUSSIAN_BLUR: Kernel3x3<f32> = Kernel3x3([
    1.0 / 16.0, 2.0 / 16.0, 1.0 / 16.0,
    2.0 / 16.0, 4.0 / 16.0, 2.0 / 16.0,
    1.0 / 16.0, 2.0 / 16.0, 1.0 / 16.0,
  ]);

  pub fn sum(&self) -> f32 {
    self.0.iter().sum()
  }

  /// Blur keeps overall brightness only if the weights sum to 1.
  pub fn is_normalized(&self, epsilon: f32) -> bool {
    (self.sum() - 1.0).abs() <= epsilon
  }
}

/// UV offsets of the 3x3 taps. Row 0 samples above the center, hence the flipped y.
pub fn sample_offsets(step: f32) -> Kernel3x3<Vec2> {
  let mut taps = [Vec2::ZERO; 9];
  for (i, tap) in taps.iter_mut().enumerate() {
    let (dx, dy) = kernel_tap(i);
    *tap = vec2(dx as f32 * step, -(dy as f32) * step);
  }
  Kernel3x3(taps)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bool32_is_one_word() {
    assert_eq!(std::mem::size_of::<Bool32>(), 4);
    assert_eq!(std::mem::align_of::<Bool32>(), 4);
    assert_eq!(Bool32::from(true).raw(), 1);
    assert_eq!(Bool32::from(false).raw(), 0);
  }

  #[test]
  fn bool32_reads_any_nonzero_as_true() {
    let b: Bool32 = bytemuck::cast(7u32);
    assert!(b.get());
    let b: Bool32 = bytemuck::cast(0u32);
    assert!(!bool::from(b));
  }

  #[test]
  fn kernel_is_row_major() {
    let k = Kernel3x3::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    assert_eq!(k.as_array(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(k.at(0, 2), 3);
    assert_eq!(k.at(2, 0), 7);
    assert_eq!(k[4], 5);
  }

  #[test]
  #[should_panic]
  fn kernel_at_rejects_out_of_range() {
    Kernel3x3::EDGE_DETECT.at(3, 0);
  }

  #[test]
  fn kernel_taps_cover_the_neighbourhood() {
    assert_eq!(kernel_tap(0), (-1, -1));
    assert_eq!(kernel_tap(4), (0, 0));
    assert_eq!(kernel_tap(5), (1, 0));
    assert_eq!(kernel_tap(8), (1, 1));
  }

  #[test]
  fn edge_kernel_sums_to_zero() {
    assert_eq!(Kernel3x3::EDGE_DETECT.sum(), 0);
    assert!(Kernel3x3::EDGE_DETECT.is_edge_detector());
    assert!(!Kernel3x3::new([0, 0, 0, 0, 1, 0, 0, 0, 0]).is_edge_detector());
  }

  #[test]
  fn blur_kernel_is_normalized() {
    assert!(Kernel3x3::GAUSSIAN_BLUR.is_normalized(1e-6));
    assert!(!Kernel3x3::new([1.0f32; 9]).is_normalized(1e-6));
  }

  #[test]
  fn center_weights_dominate() {
    assert_eq!(Kernel3x3::EDGE_DETECT.at(1, 1), 8);
    assert_eq!(Kernel3x3::GAUSSIAN_BLUR.at(1, 1), 0.25);
  }

  #[test]
  fn sample_offsets_follow_kernel_order() {
    let step = DEFAULT_SAMPLE_OFFSET_STEP;
    let offsets = sample_offsets(step);
    assert_eq!(offsets[0], vec2(-step, step));
    assert_eq!(offsets[1], vec2(0.0, step));
    assert_eq!(offsets[2], vec2(step, step));
    assert_eq!(offsets[3], vec2(-step, 0.0));
    assert_eq!(offsets[4], Vec2::ZERO);
    assert_eq!(offsets[5], vec2(step, 0.0));
    assert_eq!(offsets[6], vec2(-step, -step));
    assert_eq!(offsets[7], vec2(0.0, -step));
    assert_eq!(offsets[8], vec2(step, -step));
  }
}
