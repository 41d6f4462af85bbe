//! Fixed layout constants per [`Format`].

use super::format::Format;

/// Box metrics for one button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxLayout {
    pub width: &'static str,
    pub height: Option<&'static str>,
    pub margin: &'static str,
    pub padding: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub start_checkup: BoxLayout,
    pub about_community_law: BoxLayout,
    pub community_law_services: BoxLayout,
    pub about: BoxLayout,
    pub redo: BoxLayout,
}

const DESKTOP: Layout = Layout {
    start_checkup: BoxLayout {
        width: "100%",
        height: None,
        margin: "0 auto 60px auto",
        padding: "30px 0",
    },
    about_community_law: BoxLayout {
        width: "calc(50% - 10px)",
        height: None,
        margin: "0 10px 0 0",
        padding: "20px 0",
    },
    community_law_services: BoxLayout {
        width: "calc(50% - 10px)",
        height: None,
        margin: "0 0 0 10px",
        padding: "20px 0",
    },
    about: BoxLayout {
        width: "450px",
        height: Some("58px"),
        margin: "0",
        padding: "0",
    },
    redo: BoxLayout {
        width: "920px",
        height: Some("78px"),
        margin: "auto",
        padding: "39px 0 0 0",
    },
};

const TABLET: Layout = Layout {
    start_checkup: BoxLayout {
        width: "100%",
        height: None,
        margin: "0 auto 32px auto",
        padding: "30px 0",
    },
    about_community_law: DESKTOP.about_community_law,
    community_law_services: DESKTOP.community_law_services,
    about: BoxLayout {
        width: "260px",
        height: Some("58px"),
        margin: "0",
        padding: "0",
    },
    redo: BoxLayout {
        width: "310px",
        height: Some("24px"),
        margin: "auto",
        padding: "28px 26px 26px",
    },
};

const MOBILE: Layout = Layout {
    start_checkup: BoxLayout {
        width: "100%",
        height: None,
        margin: "0 0 32px 0",
        padding: "30px 0",
    },
    about_community_law: BoxLayout {
        width: "100%",
        height: None,
        margin: "0 0 15px 0",
        padding: "20px 0",
    },
    community_law_services: BoxLayout {
        width: "100%",
        height: None,
        margin: "0 0",
        padding: "20px 0",
    },
    about: TABLET.about,
    redo: TABLET.redo,
};

impl Format {
    #[must_use]
    pub fn layout(self) -> &'static Layout {
        match self {
            Format::Desktop => &DESKTOP,
            Format::Tablet => &TABLET,
            Format::Mobile => &MOBILE,
        }
    }
}
