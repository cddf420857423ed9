pub mod interest;
pub mod profile;
pub mod skill_level;
pub mod user_interest;
pub mod user_skill;
pub mod user_swipe;

pub use user_swipe::SwipeAction;
