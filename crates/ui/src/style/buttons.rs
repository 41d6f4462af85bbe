//! Inline style strings for the styled buttons.

use super::format::Format;
use super::layout::BoxLayout;
use super::palette::{BLACK, ROUGE, WHITE};

const BASE_BUTTON: &str = "font-family: 'Museo Sans Cyrl 900', sans-serif; font-weight: 900; \
border-radius: 5px; max-width: 450px; display: inline-block; box-sizing: border-box; \
text-decoration-line: none; text-align: center; cursor: pointer;";

fn box_style(layout: &BoxLayout) -> String {
    let mut style = format!(
        "width: {}; margin: {}; padding: {};",
        layout.width, layout.margin, layout.padding
    );
    if let Some(height) = layout.height {
        style.push_str(&format!(" height: {height};"));
    }
    style
}

#[must_use]
pub fn start_checkup_style(format: Format) -> String {
    format!(
        "{BASE_BUTTON} {} border: none; background-color: {ROUGE}; color: {WHITE}; font-size: 20px;",
        box_style(&format.layout().start_checkup)
    )
}

#[must_use]
pub fn about_community_law_style(format: Format) -> String {
    format!(
        "{BASE_BUTTON} {} color: {BLACK}; background-color: transparent; border: 3px solid {WHITE}; font-size: 16px;",
        box_style(&format.layout().about_community_law)
    )
}

#[must_use]
pub fn community_law_services_style(format: Format) -> String {
    format!(
        "{BASE_BUTTON} {} color: {BLACK}; background-color: transparent; border: 3px solid {WHITE}; font-size: 16px;",
        box_style(&format.layout().community_law_services)
    )
}

#[must_use]
pub fn about_style(format: Format) -> String {
    format!(
        "{} border-radius: 5px; border: solid 3px {WHITE}; font-family: 'Museo Sans Cyrl 900', sans-serif; font-size: 16px;",
        box_style(&format.layout().about)
    )
}

#[must_use]
pub fn redo_style(format: Format) -> String {
    format!(
        "{} border-radius: 5px; border: solid 3px {WHITE}; font-family: Helvetica; font-size: 20px; \
font-weight: 900; text-align: center; color: {ROUGE}; text-decoration: none;",
        box_style(&format.layout().redo)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_button_uses_rouge_and_format_margin() {
        let style = start_checkup_style(Format::Mobile);
        assert!(style.contains("background-color: #b62645"));
        assert!(style.contains("margin: 0 0 32px 0;"));
    }

    #[test]
    fn redo_button_carries_height_only_when_set() {
        let desktop = redo_style(Format::Desktop);
        assert!(desktop.contains("width: 920px;"));
        assert!(desktop.contains("height: 78px;"));

        let home = community_law_services_style(Format::Desktop);
        assert!(!home.contains("height:"));
    }
}
