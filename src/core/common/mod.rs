pub mod error;
pub use error::OxikdError;

#[cfg(test)]
mod tests {
    mod error_tests;
}
