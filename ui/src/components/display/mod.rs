pub mod char_counter;
pub mod loading_indicator;
pub mod success_toast;

pub use char_counter::*;
pub use loading_indicator::*;
pub use success_toast::*;
