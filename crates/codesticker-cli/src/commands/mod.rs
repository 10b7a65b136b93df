pub mod create;
pub mod scan;
