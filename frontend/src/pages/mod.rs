pub mod admin_article_preview;
pub mod admin_articles;
pub mod admin_categories;
pub mod article_detail;
pub mod article_form;
pub mod draft_preview;
pub mod favorites;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
pub mod user_articles;
