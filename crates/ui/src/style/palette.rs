pub const ROUGE: &str = "#b62645";
pub const WHITE: &str = "#ffffff";
pub const BLACK: &str = "#000000";
