mod overall;
pub use overall::overall_similarity;

mod recommend;
pub use recommend::recommendations;

mod signals;

pub mod store;
