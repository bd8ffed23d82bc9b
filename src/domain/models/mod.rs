pub mod management;
pub mod slot;
pub mod template;
