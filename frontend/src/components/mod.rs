// Reusable components live here.

pub mod article_card;
pub mod article_view;
pub mod error_banner;
pub mod favorite_button;
pub mod field;
pub mod filter_bar;
pub mod footer;
pub mod layout;
pub mod loading_spinner;
pub mod modal;
pub mod navbar;
pub mod pagination;
pub mod raw_html;
pub mod sidebar;
pub mod theme_toggle;
pub mod toast;
