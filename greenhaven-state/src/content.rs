use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strum::{AsRefStr, EnumIter, IntoStaticStr};
use thiserror::Error;
use tracing::{debug, trace};

const EMBEDDED_CONTENT: &str = include_str!("../content/green_haven.json");

#[derive(
    Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash, AsRefStr, IntoStaticStr, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Icon {
    Leaf,
    ShoppingBasket,
    Shovel,
    Phone,
    Mail,
    MapPin,
    ChevronRight,
    ArrowRight,
    Menu,
    Close,
    Instagram,
    Facebook,
    Twitter,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct Brand {
    pub name: String,
    pub legal_name: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct NavItem {
    pub label: String,
}

impl NavItem {
    pub fn anchor(&self) -> String {
        anchor_for(&self.label)
    }

    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct Hero {
    pub anchor: String,
    pub headline: Vec<String>,
    pub tagline: String,
    pub primary_action: String,
    pub secondary_action: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct Feature {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct Product {
    pub image: String,
    pub name: String,
    pub price: String,
    pub tag: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct SectionHeading {
    pub anchor: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct ContactEntry {
    pub icon: Icon,
    pub text: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct SocialLink {
    pub icon: Icon,
    pub href: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

/// Every piece of copy the landing page shows, in display order.
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct SiteContent {
    pub brand: Brand,
    pub navigation: Vec<NavItem>,
    pub hero: Hero,
    pub features_anchor: String,
    pub features: Vec<Feature>,
    pub products_heading: SectionHeading,
    pub products: Vec<Product>,
    pub product_action: String,
    pub contact_heading: SectionHeading,
    pub contacts: Vec<ContactEntry>,
    pub social_links: Vec<SocialLink>,
    pub legal_links: Vec<FooterLink>,
    pub copyright: String,
}

impl SiteContent {
    /// The Green Haven copy compiled into the crate.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        debug!(
            "content loaded: {} nav items, {} features, {} products",
            content.navigation.len(),
            content.features.len(),
            content.products.len()
        );
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.navigation.is_empty() {
            return Err(ContentError::EmptyNavigation);
        }

        let mut nav_anchors = HashSet::with_capacity(self.navigation.len());
        for (index, item) in self.navigation.iter().enumerate() {
            if item.label.trim().is_empty() {
                return Err(ContentError::EmptyLabel { index });
            }
            let anchor = item.anchor();
            if !nav_anchors.insert(anchor.clone()) {
                return Err(ContentError::DuplicateAnchor(anchor));
            }
        }

        let mut section_anchors = HashSet::new();
        for (section, anchor) in self.section_anchors() {
            if anchor.trim().is_empty() {
                return Err(ContentError::EmptyAnchor { section });
            }
            if !section_anchors.insert(anchor) {
                return Err(ContentError::DuplicateAnchor(anchor.to_string()));
            }
        }

        if let Some(index) = self.social_links.iter().position(|l| l.href.is_empty()) {
            return Err(ContentError::EmptyHref {
                table: "social",
                index,
            });
        }
        if let Some(index) = self.legal_links.iter().position(|l| l.href.is_empty()) {
            return Err(ContentError::EmptyHref {
                table: "legal",
                index,
            });
        }

        Ok(())
    }

    /// Links shared by the desktop and the mobile menu.
    pub fn nav_links(&self) -> Vec<NavLink> {
        self.navigation
            .iter()
            .map(|item| NavLink {
                label: item.label.clone(),
                href: item.href(),
            })
            .collect()
    }

    pub fn section_anchors(&self) -> [(&'static str, &str); 4] {
        [
            ("hero", self.hero.anchor.as_str()),
            ("features", self.features_anchor.as_str()),
            ("products", self.products_heading.anchor.as_str()),
            ("contact", self.contact_heading.anchor.as_str()),
        ]
    }

    /// Navigation anchors that no section on the page carries.
    pub fn unresolved_anchors(&self) -> Vec<String> {
        let sections = self.section_anchors();
        self.navigation
            .iter()
            .map(NavItem::anchor)
            .filter(|anchor| {
                let found = sections.iter().any(|(_, s)| *s == anchor.as_str());
                trace!("anchor #{} resolved: {}", anchor, found);
                !found
            })
            .collect()
    }
}

pub fn anchor_for(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<String>>()
        .join("-")
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("failed to parse content: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("navigation has no items")]
    EmptyNavigation,

    #[error("navigation item {index} has an empty label")]
    EmptyLabel { index: usize },

    #[error("anchor \"{0}\" is declared more than once")]
    DuplicateAnchor(String),

    #[error("{section} section has an empty anchor")]
    EmptyAnchor { section: &'static str },

    #[error("{table} link {index} has an empty href")]
    EmptyHref { table: &'static str, index: usize },
}
