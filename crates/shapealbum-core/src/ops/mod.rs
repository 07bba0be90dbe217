pub mod shape_ops;
pub mod store;

pub use store::AlbumStore;
