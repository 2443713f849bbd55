//! Element-wise `f32` vector addition, forked across the available cores
//! and joined before returning.
//!
//! ```
//! let a = [1.0f32, 2.0, 3.0];
//! let b = [4.0f32, 5.0, 6.0];
//! let mut c = [0.0f32; 3];
//! vadd::vector_add(&a, &b, &mut c, 3);
//! assert_eq!(c, [5.0, 7.0, 9.0]);
//! ```
pub mod bench;
pub mod compiler;
pub mod ffi;
pub mod init;
pub mod kernel;
pub mod runtime;

mod vector_add;

pub use init::config::Config;
pub use vector_add::{try_vector_add, vector_add, vector_add_raw, vector_add_with};
