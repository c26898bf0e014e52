use std::alloc::{GlobalAlloc, Layout, System};
use std::hint::black_box;

use crate::crashme_debug;

#[cfg(feature = "asan")]
extern "C" {
    fn __sanitizer_annotate_contiguous_container(
        beg: *const libc::c_void,
        end: *const libc::c_void,
        old_mid: *const libc::c_void,
        new_mid: *const libc::c_void,
    );
}

/// Marks `[len, capacity)` of `v` as off-limits to ASan, the way an
/// instrumented C++ `std::vector` does for its spare capacity.
#[cfg(feature = "asan")]
fn annotate_spare_capacity<T>(v: &Vec<T>) {
    let beg = v.as_ptr() as *const libc::c_void;
    unsafe {
        let end = v.as_ptr().add(v.capacity()) as *const libc::c_void;
        let mid = v.as_ptr().add(v.len()) as *const libc::c_void;
        __sanitizer_annotate_contiguous_container(beg, end, end, mid);
    }
}

#[cfg(feature = "asan")]
fn release_spare_capacity<T>(v: &Vec<T>) {
    let beg = v.as_ptr() as *const libc::c_void;
    unsafe {
        let end = v.as_ptr().add(v.capacity()) as *const libc::c_void;
        let mid = v.as_ptr().add(v.len()) as *const libc::c_void;
        __sanitizer_annotate_contiguous_container(beg, end, mid, end);
    }
}

#[cfg(not(feature = "asan"))]
fn annotate_spare_capacity<T>(_v: &Vec<T>) {}

#[cfg(not(feature = "asan"))]
fn release_spare_capacity<T>(_v: &Vec<T>) {}

pub fn double_free() {
    let layout = unsafe { Layout::from_size_align_unchecked(1, 1) };
    unsafe {
        let ptr = System.alloc(layout);
        ptr.write(b'a');
        System.dealloc(ptr, layout);
        System.dealloc(ptr, layout);
    }
}

pub fn heap_buffer_overflow(overflow: usize) {
    let layout = unsafe { Layout::from_size_align_unchecked(10, 1) };
    unsafe {
        let arr = System.alloc(layout);
        let hbo = *arr.add(10 + overflow);
        black_box(hbo);
    }
}

/// Reads inside the vector's allocation but past its length. `v[3]` would be
/// caught by the bounds check, the raw element pointer is only visible to a
/// memory checker that tracks the initialized part of the buffer.
pub fn container_overflow() -> i64 {
    let mut v: Vec<i64> = Vec::new();
    v.push(0);
    v.push(1);
    v.push(2);
    assert!(v.capacity() >= 4);
    assert_eq!(v.len(), 3);
    crashme_debug!("container capacity {} length {}", v.capacity(), v.len());
    annotate_spare_capacity(&v);
    let p = v.as_ptr();
    let value = unsafe { black_box(*p.add(3)) };
    release_spare_capacity(&v);
    value
}

pub fn heap_use_after_free() {
    let array: *mut [i32] = Box::into_raw(vec![0i32; 100].into_boxed_slice());
    unsafe {
        drop(Box::from_raw(array));
        let huaf = *(array as *const i32).add(1);
        black_box(huaf);
    }
}
