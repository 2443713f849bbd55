use anyhow::bail;
use log::debug;

use crate::compiler::zip_map::add_zip::AddZipMap;
use crate::init::config::Config;
use crate::kernel;
use crate::runtime::start::start;

/// Writes `c[i] = a[i] + b[i]` for every `i` in `[0, n)` using the default
/// [`Config`]. Elements of `c` past `n` are left alone.
///
/// # Panics
///
/// If `a`, `b` or `c` holds fewer than `n` elements. Nothing is written in
/// that case.
pub fn vector_add(a: &[f32], b: &[f32], c: &mut [f32], n: usize) {
    vector_add_with(&Config::default(), a, b, c, n);
}

/// [`vector_add`] with explicit thread count, serial threshold and pinning.
pub fn vector_add_with(config: &Config, a: &[f32], b: &[f32], c: &mut [f32], n: usize) {
    assert!(a.len() >= n, "vector_add: a holds {} elements, n is {}", a.len(), n);
    assert!(b.len() >= n, "vector_add: b holds {} elements, n is {}", b.len(), n);
    assert!(c.len() >= n, "vector_add: c holds {} elements, n is {}", c.len(), n);
    unsafe { vector_add_raw(a.as_ptr(), b.as_ptr(), c.as_mut_ptr(), n, config) }
}

/// Adds three slices of equal length, reporting a mismatch instead of
/// panicking. `c` is untouched on error.
pub fn try_vector_add(a: &[f32], b: &[f32], c: &mut [f32]) -> anyhow::Result<()> {
    if a.len() != b.len() || a.len() != c.len() {
        bail!(
            "vector_add: length mismatch (a = {}, b = {}, c = {})",
            a.len(),
            b.len(),
            c.len()
        );
    }
    vector_add(a, b, c, a.len());
    Ok(())
}

/// Pointer form of [`vector_add_with`].
///
/// # Safety
///
/// When `n > 0`, `a` and `b` must be valid for reads and `c` valid for
/// writes of `n` elements, and `c` must not overlap `a` or `b`.
pub unsafe fn vector_add_raw(a: *const f32, b: *const f32, c: *mut f32, n: usize, config: &Config) {
    if n == 0 {
        return;
    }
    debug_assert!(!a.is_null() && !b.is_null() && !c.is_null(), "vector_add: null buffer");

    let thread_num = config.threads().min(n);
    if thread_num == 1 || n < config.serial_threshold {
        debug!("vector_add: {} elements on the caller thread", n);
        kernel::generic::add::add(a, b, c, n);
        return;
    }

    debug!("vector_add: {} elements across {} threads", n, thread_num);
    let operator = AddZipMap::new(a, b, c, n, thread_num);
    start(thread_num, config.pin_threads, |thread_id| operator.run(thread_id));
}
