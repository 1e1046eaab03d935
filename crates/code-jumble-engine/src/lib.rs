pub mod editing;
pub mod io;
pub mod models;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{commands::*, jumble::*, registry::*, session::*, snapshot::*};
pub use io::*;
pub use models::exercise::*;
