pub mod exporter;
#[cfg(test)]
pub mod memory;
pub mod repository;
pub mod tokener;
