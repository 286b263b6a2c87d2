pub mod store;

pub use store::Catalog;
