use std::hint::black_box;
use std::ptr;
use std::sync::atomic::AtomicPtr;

const GLOBAL_ARRAY_LEN: usize = 100;

const fn global_array_init() -> [i32; GLOBAL_ARRAY_LEN] {
    let mut array = [0; GLOBAL_ARRAY_LEN];
    array[0] = -1;
    array
}

static mut GLOBAL_ARRAY: [i32; GLOBAL_ARRAY_LEN] = global_array_init();

/// Holds the address of a local after its scope has ended.
pub(crate) static STALE_SLOT: AtomicPtr<i32> = AtomicPtr::new(ptr::null_mut());

pub fn global_buffer_overflow(overflow: usize) {
    unsafe {
        let base = ptr::addr_of!(GLOBAL_ARRAY) as *const i32;
        let gbo = *base.add(GLOBAL_ARRAY_LEN + overflow);
        black_box(gbo);
    }
}
