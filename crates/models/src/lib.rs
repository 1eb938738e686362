pub mod errors;
pub mod db;
pub mod country;
pub mod office;
pub mod employee;
pub mod role;
pub mod address;
pub mod issue;
pub mod comment;
pub mod comment_employee;

#[cfg(test)]
mod tests;
