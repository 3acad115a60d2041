pub mod bill;
pub mod employee;
pub mod notification;
pub mod product;
