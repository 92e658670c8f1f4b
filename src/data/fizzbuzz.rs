//! The FizzBuzz classification task: predict which of four labels an integer
//! gets from its 10-bit binary encoding.

use std::ops::RangeInclusive;

use ndarray::Array2;

use crate::math::tensor::Tensor;

pub const INPUT_BITS: usize = 10;
pub const NUM_CLASSES: usize = 4;

/// Class indices, in one-hot column order.
pub const NUMBER: usize = 0;
pub const FIZZ: usize = 1;
pub const BUZZ: usize = 2;
pub const FIZZBUZZ: usize = 3;

/// Bits of `x`, least significant first.
pub fn binary_encode(x: u32) -> [f64; INPUT_BITS] {
    let mut bits = [0.0; INPUT_BITS];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = ((x >> i) & 1) as f64;
    }
    bits
}

pub fn class_of(x: u32) -> usize {
    if x % 15 == 0 {
        FIZZBUZZ
    } else if x % 5 == 0 {
        BUZZ
    } else if x % 3 == 0 {
        FIZZ
    } else {
        NUMBER
    }
}

pub fn fizz_buzz_encode(x: u32) -> [f64; NUM_CLASSES] {
    let mut one_hot = [0.0; NUM_CLASSES];
    one_hot[class_of(x)] = 1.0;
    one_hot
}

/// What FizzBuzz prints for `x` when it falls in `class`.
pub fn label(x: u32, class: usize) -> String {
    match class {
        FIZZ => "fizz".to_string(),
        BUZZ => "buzz".to_string(),
        FIZZBUZZ => "fizzbuzz".to_string(),
        _ => x.to_string(),
    }
}

/// Inputs (n × 10) and one-hot targets (n × 4) for every integer in `range`.
pub fn dataset(range: RangeInclusive<u32>) -> (Tensor, Tensor) {
    let xs: Vec<u32> = range.collect();
    let inputs = Array2::from_shape_fn((xs.len(), INPUT_BITS), |(r, c)| binary_encode(xs[r])[c]);
    let targets = Array2::from_shape_fn((xs.len(), NUM_CLASSES), |(r, c)| fizz_buzz_encode(xs[r])[c]);
    (inputs, targets)
}
