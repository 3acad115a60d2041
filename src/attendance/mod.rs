pub mod aggregate;
pub mod toggle;

pub use aggregate::Month;
