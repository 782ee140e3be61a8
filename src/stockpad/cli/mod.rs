mod args;
mod handlers;
mod print;

pub use handlers::run;
