//! Operands pass through `black_box` so the faulting operation is evaluated at
//! run time; the overflow checks enabled in every profile then trap it.

use std::hint::black_box;

pub fn undefined_shifts() {
    let mut i: i32 = black_box(32);
    i <<= black_box(i32::BITS);
    black_box(i);
}

pub fn signed_integer_overflow() {
    let mut k: i32 = black_box(0x7fff_ffff);
    k += 1;
    black_box(k);
}

pub fn division_by_zero(x: i32) {
    let i = x / black_box(x - x);
    black_box(i);
}
