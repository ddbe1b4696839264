pub mod commit;
pub mod committers;
pub mod repository;
pub mod result;
