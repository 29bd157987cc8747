// TDD Katas - Core Library
// Exposes every exercise for use in the CLI, the greeting server, and tests

pub mod integers;
pub mod iteration;
pub mod arrays;
pub mod hello;
pub mod maps;
pub mod pointers;
pub mod shapes;
pub mod injection;

// Re-export commonly used types
pub use integers::add;
pub use iteration::{repeat, repeat_manual};
pub use arrays::{sum, sum_all, sum_all_tails};
pub use hello::{hello, Language};
pub use maps::{Dictionary, DictionaryError};
pub use pointers::{Bitcoin, Wallet, WalletError};
pub use shapes::{perimeter, Circle, Rectangle, Shape, Triangle};
pub use injection::{greet, greeting};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
