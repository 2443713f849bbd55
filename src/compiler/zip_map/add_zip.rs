use log::trace;
use num_traits::Float;

use super::zip_map_trait::ZipMapTrait;
use crate::compiler::assign::assign;
use crate::init::send_sync_ptr::{ConstPtr, MutPtr};
use crate::kernel;

/// `output[i] = input1[i] + input2[i]` over `length` elements, split across
/// `cpu_num` threads. Each thread calls [`AddZipMap::run`] with its own id.
#[derive(Clone)]
pub struct AddZipMap<T> {
    ptr1: ConstPtr<T>,
    ptr2: ConstPtr<T>,
    output_ptr: MutPtr<T>,
    length: usize,
    cpu_num: usize,
}

impl<T> AddZipMap<T>
where
    T: Float,
{
    // the three buffers must hold `length` elements and stay alive and
    // unaliased until every `run` call has returned
    pub unsafe fn new(
        ptr1: *const T,
        ptr2: *const T,
        output_ptr: *mut T,
        length: usize,
        cpu_num: usize,
    ) -> Self {
        debug_assert!(cpu_num != 0);
        Self {
            ptr1: ConstPtr::new(ptr1),
            ptr2: ConstPtr::new(ptr2),
            output_ptr: MutPtr::new(output_ptr),
            length,
            cpu_num,
        }
    }

    pub fn cpu_num(&self) -> usize {
        self.cpu_num
    }

    pub fn run(&self, thread_id: usize) {
        if let Some((begin, end)) = assign(self.length, self.cpu_num, thread_id) {
            trace!("thread_id: {}, begin: {}, end: {}", thread_id, begin, end);
            unsafe {
                self.compute(
                    self.ptr1.add(begin),
                    self.ptr2.add(begin),
                    self.output_ptr.add(begin),
                    end - begin,
                );
            }
        }
    }
}

impl<T> ZipMapTrait<T> for AddZipMap<T>
where
    T: Float,
{
    unsafe fn compute(&self, input_ptr1: *const T, input_ptr2: *const T, output_ptr: *mut T, length: usize) {
        kernel::generic::add::add(input_ptr1, input_ptr2, output_ptr, length);
    }
}

#[cfg(test)]
mod test {
    use approx::assert_ulps_eq;
    use std::thread;
    use super::*;

    #[test]
    fn test_add_zip() {
        let length = 131;
        let input_data1: Vec<f32> = (0..length).map(|x| x as f32).collect();
        let input_data2: Vec<f32> = vec![1.0; length];
        let results: Vec<f32> = (1..=length).map(|x| x as f32).collect();
        let mut output_data: Vec<f32> = vec![0.0; length];

        let thread_num = 4;
        let operator = unsafe {
            AddZipMap::new(input_data1.as_ptr(), input_data2.as_ptr(), output_data.as_mut_ptr(), length, thread_num)
        };
        for i in 0..thread_num {
            operator.run(i);
        }
        assert_ulps_eq!(output_data[..], results[..], max_ulps = 4);
    }

    #[test]
    fn test_add_zip_threads() {
        let length = 1000;
        let input_data1: Vec<f64> = (0..length).map(|x| x as f64 * 0.5).collect();
        let input_data2: Vec<f64> = (0..length).map(|x| x as f64 * 1.5).collect();
        let results: Vec<f64> = (0..length).map(|x| x as f64 * 2.0).collect();
        let mut output_data: Vec<f64> = vec![0.0; length];

        let thread_num = 7;
        let operator = unsafe {
            AddZipMap::new(input_data1.as_ptr(), input_data2.as_ptr(), output_data.as_mut_ptr(), length, thread_num)
        };
        thread::scope(|s| {
            for i in 0..thread_num {
                let operator = &operator;
                s.spawn(move || operator.run(i));
            }
        });
        assert_ulps_eq!(output_data[..], results[..], max_ulps = 4);
    }

    #[test]
    fn test_more_threads_than_elements() {
        let input_data1 = [1.0f32, 2.0, 3.0];
        let input_data2 = [4.0f32, 5.0, 6.0];
        let mut output_data = [0.0f32; 3];
        let operator = unsafe {
            AddZipMap::new(input_data1.as_ptr(), input_data2.as_ptr(), output_data.as_mut_ptr(), 3, 8)
        };
        for i in 0..operator.cpu_num() {
            operator.run(i);
        }
        assert_eq!(output_data, [5.0, 7.0, 9.0]);
    }
}
