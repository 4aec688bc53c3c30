//! Source scanner adapters.

mod descriptor;

pub use descriptor::{DESCRIPTOR_SUFFIXES, DescriptorScanner};
