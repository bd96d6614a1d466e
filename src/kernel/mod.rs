//! Kernel layer: one function per `(DistanceKind, ElementEncoding)` pair,
//! exposed to the dispatch table through a single raw-pointer ABI.
//!
//! Every kernel is implemented against a safe, typed slice. The raw-pointer
//! entry point required by [`KernelFn`] cannot get there via
//! `slice::from_raw_parts`: that requires the data pointer to be properly
//! aligned for the element type even when the slice is empty, and callers of
//! this ABI (a SQL extension handing in a pointer partway into a BLOB, for
//! instance) make no such promise. The `kernel_entry!`/`kernel_entry_bit!`
//! macros below instead read each element out with `ptr::read_unaligned`
//! into an owned, naturally aligned buffer before calling the typed kernel.

pub mod scalar;
pub mod simd;

/// The ABI every dispatch-table entry implements: two read-only buffers and
/// a logical length, returning a single f32 result. Mirrors the
/// `fn(const void* a, const void* b, int n) -> f32` contract expected by the
/// surrounding retrieval extension.
///
/// # Safety
///
/// Callers must ensure `a` and `b` each point to at least
/// `encoding.buffer_len(n)` readable bytes, and that `n >= 0`. Neither
/// pointer needs to be aligned for the element type it logically holds.
pub type KernelFn = unsafe fn(a: *const u8, b: *const u8, n: i32) -> f32;

/// Wraps a typed `fn(&[T], &[T]) -> f32` kernel into the raw-pointer
/// [`KernelFn`] ABI for element encodings with a fixed per-element size.
macro_rules! kernel_entry {
    ($name:ident, $elem:ty, $f:path) => {
        /// # Safety
        ///
        /// See [`crate::kernel::KernelFn`].
        pub unsafe fn $name(a: *const u8, b: *const u8, n: i32) -> f32 {
            debug_assert!(n >= 0, "kernel received a negative length: {n}");
            debug_assert!(!a.is_null() && !b.is_null(), "kernel received a null buffer");
            let n = n as usize;
            let elem_size = std::mem::size_of::<$elem>();
            // SAFETY: caller guarantees `a`/`b` point to `n * size_of::<$elem>()`
            // readable bytes (KernelFn's contract). `read_unaligned` makes no
            // alignment demand on the source pointer, unlike
            // `slice::from_raw_parts`, so this holds even for a pointer that
            // isn't naturally aligned for `$elem`.
            let mut a_buf: Vec<$elem> = Vec::with_capacity(n);
            let mut b_buf: Vec<$elem> = Vec::with_capacity(n);
            for i in 0..n {
                a_buf.push(a.add(i * elem_size).cast::<$elem>().read_unaligned());
                b_buf.push(b.add(i * elem_size).cast::<$elem>().read_unaligned());
            }
            $f(&a_buf, &b_buf)
        }
    };
}

/// Wraps a typed `fn(&[u8], &[u8], usize) -> f32` kernel (taking the packed
/// byte buffer plus the logical bit count) into the [`KernelFn`] ABI.
///
/// Unlike [`kernel_entry!`], this one can build its slices with
/// `slice::from_raw_parts` directly: `u8` has an alignment of 1, so any
/// pointer is "aligned" for it, even a dangling `NonNull::dangling()` used
/// with a zero byte length.
macro_rules! kernel_entry_bit {
    ($name:ident, $f:path) => {
        /// # Safety
        ///
        /// See [`crate::kernel::KernelFn`].
        pub unsafe fn $name(a: *const u8, b: *const u8, n: i32) -> f32 {
            debug_assert!(n >= 0, "kernel received a negative length: {n}");
            debug_assert!(!a.is_null() && !b.is_null(), "kernel received a null buffer");
            let n = n as usize;
            let byte_len = n.div_ceil(8);
            // SAFETY: caller guarantees `a`/`b` point to `ceil(n/8)` readable bytes.
            let a = std::slice::from_raw_parts(a, byte_len);
            let b = std::slice::from_raw_parts(b, byte_len);
            $f(a, b, n)
        }
    };
}

pub(crate) use kernel_entry;
pub(crate) use kernel_entry_bit;
