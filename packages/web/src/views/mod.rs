mod shell;
pub use shell::Shell;

mod pages;
pub use pages::{Community, Discover, Home, NotFound, Search};
