mod category;
mod inquiry;
mod pagination;
mod product;

pub use category::*;
pub use inquiry::*;
pub use pagination::*;
pub use product::*;
