use std::os::raw::c_int;

use crate::init::config::Config;
use crate::vector_add::vector_add_raw;

/// C entry point: `void cpu_vector_add(const float *A, const float *B, float *C, int N)`.
///
/// A negative `n` writes nothing.
///
/// # Safety
///
/// Same contract as [`vector_add_raw`]: for `n > 0` the three buffers must
/// hold at least `n` floats and `c` must not overlap the inputs.
#[no_mangle]
pub unsafe extern "C" fn cpu_vector_add(a: *const f32, b: *const f32, c: *mut f32, n: c_int) {
    let Ok(n) = usize::try_from(n) else {
        return;
    };
    vector_add_raw(a, b, c, n, &Config::default());
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cpu_vector_add() {
        let a = [1.0f32, 2.0, 3.0];
        let b = [4.0f32, 5.0, 6.0];
        let mut c = [0.0f32; 3];
        unsafe { cpu_vector_add(a.as_ptr(), b.as_ptr(), c.as_mut_ptr(), 3) };
        assert_eq!(c, [5.0, 7.0, 9.0]);
    }

    #[test]
    fn test_negative_length_is_noop() {
        let a = [1.0f32; 4];
        let b = [1.0f32; 4];
        let mut c = [0.5f32; 4];
        unsafe { cpu_vector_add(a.as_ptr(), b.as_ptr(), c.as_mut_ptr(), -3) };
        assert_eq!(c, [0.5; 4]);
    }
}
