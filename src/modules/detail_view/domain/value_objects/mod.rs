pub mod anime_id;
pub mod view_state;

pub use anime_id::AnimeId;
pub use view_state::{DetailTab, ViewState};
