mod chain;
mod chain_all;
mod elements;
mod filter;
mod fuse;
mod map;
mod zip;
mod zip_all;

pub use chain::*;
pub use chain_all::*;
pub use elements::*;
pub use filter::*;
pub use fuse::*;
pub use map::*;
pub use zip::*;
pub use zip_all::*;
