pub mod actions;
pub mod analysis;
pub mod fundamentals;
pub mod history;
pub mod info;
pub mod macros;
pub mod news;
pub mod snapshot;

pub mod util;
