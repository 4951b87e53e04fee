pub mod common {
    pub const BRAND_NAME: &str = "Blog genzet";
    pub const TAGLINE: &str = "Your daily dose of design insights!";
    pub const LOADING: &str = "Loading...";
    pub const CANCEL: &str = "Cancel";
    pub const DELETE: &str = "Delete";
    pub const EDIT: &str = "Edit";
    pub const PREVIEW: &str = "Preview";
    pub const SAVE: &str = "Save Changes";
    pub const UNKNOWN_CATEGORY: &str = "Unknown";
    pub const UNKNOWN_AUTHOR: &str = "Unknown author";
    pub const BY_TEMPLATE: &str = "{} · Created by {}";
    pub const BACK: &str = "Back";
}

pub mod theme_toggle {
    pub const SWITCH_TO_LIGHT: &str = "Switch to light mode";
    pub const SWITCH_TO_DARK: &str = "Switch to dark mode";
}

pub mod loading_spinner {
    pub const SR_LABEL: &str = "Loading...";
}

pub mod pagination {
    pub const ARIA_NAV: &str = "Pagination";
    pub const ARIA_PREV: &str = "Previous page";
    pub const ARIA_NEXT: &str = "Next page";
    pub const PREV: &str = "Previous";
    pub const NEXT: &str = "Next";
    pub const ARIA_GOTO_PAGE_TEMPLATE: &str = "Go to page {}";
    pub const PAGE_SIZE_LABEL: &str = "Per page";
}

pub mod error_banner {
    pub const TITLE: &str = "Something went wrong";
    pub const CLOSE_ARIA: &str = "Dismiss error";
    pub const RETRY: &str = "Try again";
}

pub mod toast {
    pub const REGION_ARIA: &str = "Notifications";
    pub const CLOSE_ARIA: &str = "Dismiss notification";
}

pub mod modal {
    pub const CLOSE_ARIA: &str = "Close dialog";
}

pub mod filter_bar {
    pub const ALL_CATEGORIES: &str = "All Categories";
    pub const SELECT_CATEGORY: &str = "Select category";
    pub const CLEAR_SEARCH_ARIA: &str = "Clear search";
}

pub mod nav {
    pub const ARTICLES: &str = "Articles";
    pub const CATEGORY: &str = "Category";
    pub const LOGOUT: &str = "Logout";
    pub const MY_ACCOUNT: &str = "My Account";
    pub const MY_FAVORITES: &str = "My Favorites";
    pub const SIDEBAR_ARIA: &str = "Admin navigation";
    pub const ACCOUNT_MENU_ARIA: &str = "Account menu";
    pub const LOGOUT_CONFIRM_TITLE: &str = "Logout";
    pub const LOGOUT_CONFIRM_BODY: &str = "Are you sure you want to log out?";
    pub const LOGOUT_CONFIRM: &str = "Yes, log out";
}

pub mod footer {
    pub const COPYRIGHT: &str = "© 2025 Blog genzet. All rights reserved.";
}

pub mod login {
    pub const TITLE: &str = "Login";
    pub const USERNAME: &str = "Username";
    pub const USERNAME_PLACEHOLDER: &str = "Input username";
    pub const PASSWORD: &str = "Password";
    pub const PASSWORD_PLACEHOLDER: &str = "Input password";
    pub const SHOW_PASSWORD: &str = "Show Password";
    pub const HIDE_PASSWORD: &str = "Hide Password";
    pub const SUBMIT: &str = "Login";
    pub const SUBMITTING: &str = "Logging in...";
    pub const FAILED: &str = "Invalid username or password. Please try again.";
    pub const NO_ACCOUNT: &str = "Don't have an account?";
    pub const REGISTER_LINK: &str = "Register";
}

pub mod register {
    pub const TITLE: &str = "Register";
    pub const ROLE: &str = "Role";
    pub const SELECT_ROLE: &str = "Select role";
    pub const SUBMIT: &str = "Register";
    pub const SUBMITTING: &str = "Registering...";
    pub const SUCCESS: &str = "Registration successful! Please log in.";
    pub const FAILED: &str = "Registration failed on the server.";
    pub const HAVE_ACCOUNT: &str = "Already have an account?";
    pub const LOGIN_LINK: &str = "Login";
}

pub mod admin_articles {
    pub const PAGE_TITLE: &str = "Articles";
    pub const TOTAL_TEMPLATE: &str = "Total Articles : {}";
    pub const SEARCH_PLACEHOLDER: &str = "Search articles";
    pub const ADD: &str = "+ Add Articles";
    pub const COL_THUMBNAIL: &str = "Thumbnails";
    pub const COL_TITLE: &str = "Title";
    pub const COL_CATEGORY: &str = "Category";
    pub const COL_CREATED: &str = "Created At";
    pub const COL_ACTION: &str = "Action";
    pub const EMPTY: &str = "No articles found.";
    pub const LOADING: &str = "Loading articles...";
    pub const DELETE_TITLE: &str = "Delete Article";
    pub const DELETE_BODY_TEMPLATE: &str =
        "Deleting \u{201c}{}\u{201d} is permanent and cannot be undone. Continue?";
    pub const DELETED: &str = "Article has been deleted.";
}

pub mod article_form {
    pub const CREATE_TITLE: &str = "Create Article";
    pub const EDIT_TITLE: &str = "Edit Article";
    pub const THUMBNAIL: &str = "Thumbnail";
    pub const PICK_FILE: &str = "Click to select a file";
    pub const FILE_HINT: &str = "Support File Type : jpg or png";
    pub const CHANGE_FILE: &str = "Changes";
    pub const REMOVE_FILE: &str = "Delete";
    pub const TITLE_LABEL: &str = "Title";
    pub const TITLE_PLACEHOLDER: &str = "Input title";
    pub const CATEGORY_LABEL: &str = "Category";
    pub const CATEGORY_HINT: &str = "The existing category list can be seen in the category menu";
    pub const CONTENT_LABEL: &str = "Content";
    pub const CONTENT_PLACEHOLDER: &str = "Type a content...";
    pub const WORD_COUNT_TEMPLATE: &str = "{} Words";
    pub const UPLOAD: &str = "Upload";
    pub const UPLOADING: &str = "Saving...";
    pub const PREVIEW: &str = "Preview";
    pub const LOADING: &str = "Loading article data...";
    pub const LOAD_FAILED: &str = "Could not load article data. Please try again later.";
    pub const CREATED: &str = "Article has been created successfully.";
    pub const UPDATED: &str = "Article has been updated successfully.";
    pub const CREATE_FAILED: &str =
        "An error occurred while creating the article. Please try again.";
    pub const UPDATE_FAILED: &str = "An unexpected error occurred. Please try again.";
    pub const UPLOAD_FAILED: &str = "The thumbnail could not be uploaded. Please try again.";
    pub const CATEGORIES_FAILED: &str = "Could not load categories.";
}

pub mod preview {
    pub const OTHER_ARTICLES: &str = "Other Articles";
    pub const NO_OTHER: &str = "No articles available with same category.";
    pub const NOT_FOUND: &str = "Article not found or failed to load.";
    pub const LOADING: &str = "Loading article...";
    pub const BACK_TO_LIST: &str = "Back to articles";
    pub const DRAFT_BANNER: &str = "Preview · not published yet";
    pub const BACK_TO_EDIT: &str = "Back to edit";
    pub const PUBLISH: &str = "Publish";
    pub const PUBLISHING: &str = "Publishing...";
    pub const NO_DRAFT: &str = "There is no draft to preview.";
    pub const INVALID_DRAFT: &str = "Some fields are missing. Go back to edit to fix them.";
}

pub mod categories {
    pub const PAGE_TITLE: &str = "Category";
    pub const TOTAL_TEMPLATE: &str = "Total Category : {}";
    pub const SEARCH_PLACEHOLDER: &str = "Search categories...";
    pub const ADD: &str = "+ Add Category";
    pub const COL_CATEGORY: &str = "Category";
    pub const COL_CREATED: &str = "Created At";
    pub const COL_ACTION: &str = "Action";
    pub const EMPTY: &str = "No Categories available.";
    pub const LOADING: &str = "Loading categories...";
    pub const ADD_TITLE: &str = "Add Category";
    pub const EDIT_TITLE: &str = "Edit Category";
    pub const DELETE_TITLE: &str = "Delete Category";
    pub const DELETE_BODY_TEMPLATE: &str = "Are you sure you want to delete {}?";
    pub const NAME_LABEL: &str = "Category";
    pub const NAME_PLACEHOLDER: &str = "Category name";
    pub const ADD_SUBMIT: &str = "Add";
    pub const CREATED: &str = "Category has been added.";
    pub const UPDATED: &str = "Category has been updated.";
    pub const DELETED: &str = "Category has been deleted.";
}

pub mod profile {
    pub const PAGE_TITLE: &str = "User Profile";
    pub const TITLE: &str = "User Profile";
    pub const USERNAME: &str = "Username";
    pub const PASSWORD: &str = "Password";
    pub const PASSWORD_MASK: &str = "••••••••";
    pub const ROLE: &str = "Role";
    pub const BACK_ADMIN: &str = "Back To Dashboard";
    pub const BACK_USER: &str = "Back to home";
    pub const LOAD_FAILED: &str = "Could not load your profile.";
}

pub mod user_articles {
    pub const HERO_KICKER: &str = "Blog genzet";
    pub const HERO_TITLE: &str = "The Journal : Design Resources, Interviews, and Industry News";
    pub const SEARCH_PLACEHOLDER: &str = "Search articles by title...";
    pub const SHOWING_TEMPLATE: &str = "Showing: {} of {} articles";
    pub const EMPTY: &str = "No articles available.";
    pub const LOADING: &str = "Loading articles...";
    pub const FAVORITE_ADD: &str = "Add to favorites";
    pub const FAVORITE_REMOVE: &str = "Remove from favorites";
    pub const FAVORITE_ADDED: &str = "Added to favorites.";
    pub const FAVORITE_REMOVED: &str = "Removed from favorites.";
}

pub mod favorites {
    pub const TITLE: &str = "My Favorites";
    pub const EMPTY: &str = "No favorites yet.";
    pub const REMOVE: &str = "Remove";
    pub const CLEAR_ALL: &str = "Clear all";
    pub const CLEAR_TITLE: &str = "Clear favorites";
    pub const CLEAR_BODY: &str = "Remove every saved article from your favorites?";
    pub const COUNT_TEMPLATE: &str = "{} saved articles";
}

pub mod not_found {
    pub const TITLE: &str = "404 - Page not found";
    pub const BODY: &str = "Sorry, the page you are looking for does not exist.";
    pub const HOME: &str = "Back to home";
}
