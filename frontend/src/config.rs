//! Build-time configuration for the front-end.

use blogdesk_shared::list_query::{ListConfig, SearchParam};

// API base URL - 编译时从环境变量读取
// 部署时通过 BLOGDESK_API_BASE 覆盖
pub const API_BASE: &str = match option_env!("BLOGDESK_API_BASE") {
    Some(url) => url,
    None => "https://test-fe.mysellerpintar.com/api",
};

/// Delay between a success toast and the redirect that follows it.
pub const REDIRECT_DELAY_MS: u32 = 2_000;

pub const TOAST_DISMISS_MS: u32 = 3_000;

pub const ADMIN_ARTICLES: ListConfig = ListConfig::new(10);

pub const ADMIN_CATEGORIES: ListConfig = ListConfig::new(10);

/// The reader list filters by title on the server.
pub const USER_ARTICLES: ListConfig = ListConfig::new(9)
    .with_search_param(SearchParam::Title)
    .with_page_sizes(&[5, 10, 25, 50]);

/// Category dropdowns load one large page instead of paginating.
pub const CATEGORY_OPTIONS_LIMIT: usize = 100;

/// Pool size used to pick "other articles" on detail screens.
pub const RELATED_POOL_LIMIT: usize = 10;
pub const RELATED_LIMIT: usize = 3;

pub const TABLE_TITLE_CHARS: usize = 30;
pub const CARD_TITLE_CHARS: usize = 20;
pub const CARD_EXCERPT_CHARS: usize = 100;
pub const BADGE_CHARS: usize = 10;
