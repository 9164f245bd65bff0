mod accuracy;
mod move_catalog;
mod move_category;
mod move_data;

pub use accuracy::Accuracy;
pub use move_catalog::MoveCatalog;
pub use move_category::MoveCategory;
pub use move_data::MoveData;
