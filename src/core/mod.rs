pub mod finance_manager;
pub mod services;
pub mod utils;

pub use finance_manager::FinanceManager;
