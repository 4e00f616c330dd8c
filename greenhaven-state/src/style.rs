use crate::content::Icon;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavStyle {
    Transparent,
    Opaque,
}

impl NavStyle {
    pub fn from_compact(compact: bool) -> Self {
        if compact {
            NavStyle::Opaque
        } else {
            NavStyle::Transparent
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            NavStyle::Transparent => {
                "fixed w-full z-50 transition-all duration-300 bg-transparent"
            }
            NavStyle::Opaque => {
                "fixed w-full z-50 transition-all duration-300 bg-black/90 backdrop-blur-md"
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PanelStyle {
    Collapsed,
    Expanded,
}

impl PanelStyle {
    pub fn from_open(open: bool) -> Self {
        if open {
            PanelStyle::Expanded
        } else {
            PanelStyle::Collapsed
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            PanelStyle::Collapsed => {
                "md:hidden transition-all duration-300 max-h-0 opacity-0 pointer-events-none overflow-hidden bg-black/95 backdrop-blur-md"
            }
            PanelStyle::Expanded => {
                "md:hidden transition-all duration-300 max-h-screen opacity-100 overflow-hidden bg-black/95 backdrop-blur-md"
            }
        }
    }

    /// A collapsed panel is hidden from assistive tech as well as from the pointer.
    pub fn aria_hidden(&self) -> &'static str {
        match self {
            PanelStyle::Collapsed => "true",
            PanelStyle::Expanded => "false",
        }
    }
}

pub fn menu_button_icon(open: bool) -> Icon {
    if open {
        Icon::Close
    } else {
        Icon::Menu
    }
}

#[cfg(test)]
mod tests {
    use super::{menu_button_icon, NavStyle, PanelStyle};
    use crate::content::Icon;

    #[test]
    fn nav_style_follows_compact_flag() {
        assert_eq!(NavStyle::from_compact(false), NavStyle::Transparent);
        assert_eq!(NavStyle::from_compact(true), NavStyle::Opaque);
        assert!(NavStyle::Transparent.class().contains("bg-transparent"));
        assert!(NavStyle::Opaque.class().contains("backdrop-blur-md"));
        assert!(!NavStyle::Opaque.class().contains("bg-transparent"));
    }

    #[test]
    fn panel_style_follows_menu_flag() {
        let collapsed = PanelStyle::from_open(false);
        let expanded = PanelStyle::from_open(true);
        assert_eq!(collapsed, PanelStyle::Collapsed);
        assert_eq!(expanded, PanelStyle::Expanded);

        assert!(collapsed.class().contains("max-h-0"));
        assert!(collapsed.class().contains("pointer-events-none"));
        assert_eq!(collapsed.aria_hidden(), "true");

        assert!(expanded.class().contains("max-h-screen"));
        assert!(!expanded.class().contains("pointer-events-none"));
        assert_eq!(expanded.aria_hidden(), "false");
    }

    #[test]
    fn menu_icon() {
        assert_eq!(menu_button_icon(false), Icon::Menu);
        assert_eq!(menu_button_icon(true), Icon::Close);
    }
}
