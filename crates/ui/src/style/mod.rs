mod buttons;
mod format;
mod layout;
mod palette;

pub use buttons::{
    about_community_law_style, about_style, community_law_services_style, redo_style,
    start_checkup_style,
};
pub use format::{DESKTOP_MIN_WIDTH, Format, ParseFormatError, TABLET_MIN_WIDTH};
pub use layout::{BoxLayout, Layout};
pub use palette::{BLACK, ROUGE, WHITE};
