use std::hint::black_box;
use std::mem::MaybeUninit;
use std::ptr;

use libc::c_char;

/// The source buffer is never initialized either.
pub fn null_point_deref() {
    let buf = MaybeUninit::<[c_char; 255]>::uninit();
    let dst: *mut c_char = black_box(ptr::null_mut());
    unsafe {
        libc::strcpy(dst, buf.as_ptr() as *const c_char);
    }
}

pub fn null_deref_read() {
    let p: *const i32 = black_box(ptr::null());
    let value = unsafe { ptr::read_volatile(p) };
    print!("{}", value);
}

pub fn null_deref_write() {
    let p: *mut i32 = black_box(ptr::null_mut());
    unsafe { ptr::write_volatile(p, 1) };
}
