pub mod catalog;
pub mod error;
pub mod io;
pub mod rng;

pub mod dset;

pub mod backtrack;
pub mod binary_search;
pub mod bits;
pub mod dp;
pub mod graph;
pub mod greedy;
pub mod hashing;
pub mod heap;
pub mod intervals;
pub mod linked_list;
pub mod sliding_window;
pub mod stack;
pub mod string;
pub mod tree;
pub mod two_pointers;

pub use error::{Error, Result};
