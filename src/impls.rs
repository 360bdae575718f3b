pub mod sheets;
pub mod storers;
pub mod tokener;
