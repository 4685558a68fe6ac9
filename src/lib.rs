pub mod banner;
pub mod consts;
pub mod engine;
pub mod registry;
pub mod repl;
