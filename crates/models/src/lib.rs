pub mod errors;
pub mod db;
pub mod department;
pub mod employee;

#[cfg(test)]
mod tests;
