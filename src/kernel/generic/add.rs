use std::ops::Add;
use std::slice;

// output[i] = input1[i] + input2[i] for i in [0, length)
// all three pointers must address at least `length` elements and the output
// range must not overlap either input
pub unsafe fn add<T>(input_ptr1: *const T, input_ptr2: *const T, output_ptr: *mut T, length: usize)
where
    T: Copy + Add<Output = T>,
{
    if length == 0 {
        return;
    }
    let input1 = slice::from_raw_parts(input_ptr1, length);
    let input2 = slice::from_raw_parts(input_ptr2, length);
    let output = slice::from_raw_parts_mut(output_ptr, length);
    add_slice(input1, input2, output);
}

// single threaded element-wise add over the common prefix of the three slices
pub fn add_slice<T>(input1: &[T], input2: &[T], output: &mut [T])
where
    T: Copy + Add<Output = T>,
{
    for ((x, y), z) in input1.iter().zip(input2).zip(output.iter_mut()) {
        *z = *x + *y;
    }
}
