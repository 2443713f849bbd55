// raw buffer pointers handed to worker threads
// every worker only touches the range `assign` gives it, so no two threads
// ever write the same element through a MutPtr
pub struct ConstPtr<T> {
    pub ptr: *const T,
}
unsafe impl<T> Sync for ConstPtr<T> {}
unsafe impl<T> Send for ConstPtr<T> {}

impl<T> Copy for ConstPtr<T> {}

impl<T> Clone for ConstPtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> ConstPtr<T> {
    pub fn new(ptr: *const T) -> Self {
        Self { ptr }
    }

    pub unsafe fn add(self, offset: usize) -> *const T {
        self.ptr.add(offset)
    }
}

pub struct MutPtr<T> {
    pub ptr: *mut T,
}
unsafe impl<T> Sync for MutPtr<T> {}
unsafe impl<T> Send for MutPtr<T> {}

impl<T> Copy for MutPtr<T> {}

impl<T> Clone for MutPtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> MutPtr<T> {
    pub fn new(ptr: *mut T) -> Self {
        Self { ptr }
    }

    pub unsafe fn add(self, offset: usize) -> *mut T {
        self.ptr.add(offset)
    }
}

#[cfg(test)]
mod test {
    use std::thread;
    use super::*;

    #[test]
    fn test_disjoint_writes() {
        let input = vec![1.0f32; 8];
        let mut output = vec![0.0f32; 8];
        let src = ConstPtr::new(input.as_ptr());
        let dst = MutPtr::new(output.as_mut_ptr());
        thread::scope(|s| {
            for half in 0..2 {
                s.spawn(move || {
                    for i in half * 4..(half + 1) * 4 {
                        unsafe { dst.add(i).write(src.add(i).read() + half as f32) };
                    }
                });
            }
        });
        assert_eq!(output, [1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.0]);
    }
}
