pub mod findings;
pub mod pii;
pub mod scan;
