use std::hint::black_box;
use std::mem::MaybeUninit;
use std::sync::atomic::Ordering;

use crate::triggers::global::STALE_SLOT;

pub fn stack_buffer_overflow(overflow: usize) {
    let mut stack_array = MaybeUninit::<[i32; 100]>::uninit();
    let base = stack_array.as_mut_ptr() as *mut i32;
    unsafe {
        base.add(1).write(0);
        let sbo = *base.add(100 + overflow);
        black_box(sbo);
    }
}

/// Never returns. The frame buffer keeps every call from being folded into a
/// loop.
#[allow(unconditional_recursion)]
pub fn stack_overflow() {
    let frame = [0u8; 64];
    black_box(&frame);
    stack_overflow();
    black_box(&frame);
}

pub fn stack_use_after_scope() {
    {
        let mut x: i32 = 0;
        STALE_SLOT.store(black_box(&mut x as *mut i32), Ordering::SeqCst);
    }
    let p = STALE_SLOT.load(Ordering::SeqCst);
    unsafe { *p = 5 };
}
