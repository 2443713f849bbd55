// per-chunk body of an element-wise binary operator
pub trait ZipMapTrait<T> {
    // the pointers address `length` elements of each buffer
    unsafe fn compute(&self, input_ptr1: *const T, input_ptr2: *const T, output_ptr: *mut T, length: usize);
}
