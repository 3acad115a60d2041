pub mod bill;
pub mod employee;
pub mod product;

pub use bill::BillStore;
pub use employee::EmployeeStore;
pub use product::ProductStore;
