pub mod animation;
pub mod debounce;
pub mod scheduler;
