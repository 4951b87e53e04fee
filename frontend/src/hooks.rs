use std::{future::Future, rc::Rc};

use blogdesk_shared::{
    debounce::Debouncer,
    error::ApiError,
    list_query::{ListConfig, ListQuery, Page},
    pagination,
    request_seq::RequestSeq,
    Article, Category, Profile,
};
use gloo_timers::callback::Timeout;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api,
    components::article_view::Related,
    config::{CATEGORY_OPTIONS_LIMIT, RELATED_LIMIT, RELATED_POOL_LIMIT},
    context::{sign_out, use_session, SessionContext},
    router::Route,
};

/// Follow `value`, but only after it stopped changing for `window_ms`.
///
/// Every change pushes a ticket into a [`Debouncer`] and re-arms the timer;
/// dropping the previous `Timeout` cancels it, and only the newest ticket can
/// settle.
#[hook]
pub fn use_debounced<T>(value: T, window_ms: u32) -> T
where
    T: Clone + PartialEq + 'static,
{
    let settled = use_state_eq(|| value.clone());
    let debouncer = use_mut_ref(|| Debouncer::new(window_ms));
    let timer = use_mut_ref(|| None::<Timeout>);

    {
        let settled = settled.clone();
        let debouncer = debouncer.clone();
        let timer = timer.clone();
        use_effect_with(value, move |value| {
            let ticket = debouncer.borrow_mut().push(value.clone());
            let window = debouncer.borrow().window_ms();
            let pending = Timeout::new(window, move || {
                let next = debouncer.borrow_mut().settle(ticket);
                if let Some(next) = next {
                    settled.set(next);
                }
            });
            *timer.borrow_mut() = Some(pending);
            || ()
        });
    }

    use_effect_with((), move |_| {
        move || {
            timer.borrow_mut().take();
            debouncer.borrow_mut().cancel();
        }
    });

    (*settled).clone()
}

/// Everything a list screen renders and the callbacks that change it.
#[derive(Clone, PartialEq)]
pub struct ListHandle<T: PartialEq> {
    /// Query as currently reflected in the URL.
    pub query: ListQuery,
    /// Text in the search box, ahead of the debounced URL value.
    pub search_input: String,
    /// Items on the current page.
    pub items: Rc<Vec<T>>,
    /// Total number of matching items.
    pub total: usize,
    /// Current page number.
    pub page: usize,
    /// Items per page.
    pub page_size: usize,
    /// Total number of pages.
    pub total_pages: usize,
    /// Whether a fetch is in flight.
    pub loading: bool,
    /// Error message from the last fetch, if any.
    pub error: Option<String>,
    /// Called when the search input changes.
    pub on_search: Callback<String>,
    /// Called when the category filter changes.
    pub on_category: Callback<Option<String>>,
    /// Called to switch page.
    pub on_page: Callback<usize>,
    /// Called to change the page size.
    pub on_page_size: Callback<usize>,
    /// Called to refetch the current page.
    pub reload: Callback<()>,
}

fn replace_query(navigator: Option<&Navigator>, route: Option<&Route>, query: &ListQuery) {
    let (Some(navigator), Some(route)) = (navigator, route) else {
        return;
    };
    if let Err(err) = navigator.replace_with_query(route, query) {
        web_sys::console::error_1(&format!("failed to update list query: {:?}", err).into());
    }
}

/// URL-driven list state shared by every paginated screen.
///
/// Search text is debounced before it reaches the URL; category, page and
/// page-size changes rewrite it at once. Any URL change triggers a fetch, and
/// each fetch holds a request token so a slow response can never overwrite
/// the result of a newer one.
#[hook]
pub fn use_list_query<T, F, Fut>(config: ListConfig, fetcher: F) -> ListHandle<T>
where
    T: Clone + PartialEq + 'static,
    F: Fn(ListQuery, ListConfig) -> Fut + 'static,
    Fut: Future<Output = Result<Page<T>, ApiError>> + 'static,
{
    let location = use_location();
    let navigator = use_navigator();
    let route = use_route::<Route>();

    let query = location
        .as_ref()
        .and_then(|loc| loc.query::<ListQuery>().ok())
        .unwrap_or_default()
        .normalized();

    let latest_query = use_mut_ref(ListQuery::default);
    *latest_query.borrow_mut() = query.clone();

    let search_input = use_state(|| query.search.clone());
    // The page on screen and the query it was fetched for; `None` after a
    // failure.
    let page = use_state(|| (None::<ListQuery>, Rc::new(Page::<T>::default())));
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let reload_key = use_state(|| 0_u32);
    let request_seq = use_mut_ref(RequestSeq::default);

    // Back/forward navigation changes the URL without typing; mirror it into
    // the box.
    {
        let search_input = search_input.clone();
        use_effect_with(query.search.clone(), move |search| {
            if search_input.trim() != search.as_str() {
                search_input.set(search.clone());
            }
            || ()
        });
    }

    let debounced_search = use_debounced((*search_input).clone(), config.debounce_ms);
    {
        let latest_query = latest_query.clone();
        let navigator = navigator.clone();
        let route = route.clone();
        use_effect_with(debounced_search, move |search| {
            let next = latest_query.borrow().with_search(search);
            if let Some(next) = next {
                replace_query(navigator.as_ref(), route.as_ref(), &next);
            }
            || ()
        });
    }

    {
        let page = page.clone();
        let loading = loading.clone();
        let error = error.clone();
        let request_seq = request_seq.clone();
        use_effect_with((query.clone(), *reload_key), move |(query, _)| {
            let token = request_seq.borrow_mut().begin();
            loading.set(true);
            let request = fetcher(query.clone(), config);
            let loaded_for = query.clone();
            {
                let request_seq = request_seq.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = request.await;
                    if !request_seq.borrow().is_current(token) {
                        web_sys::console::debug_1(&"dropping superseded list response".into());
                        return;
                    }
                    match result {
                        Ok(next) => {
                            page.set((Some(loaded_for), Rc::new(next)));
                            error.set(None);
                        },
                        Err(err) => {
                            web_sys::console::error_1(
                                &format!("failed to load list: {}", err).into(),
                            );
                            page.set((None, Rc::new(Page::default())));
                            error.set(Some(err.user_message()));
                        },
                    }
                    loading.set(false);
                });
            }
            move || request_seq.borrow_mut().invalidate()
        });
    }

    let (loaded_for, loaded) = (*page).clone();
    let page_size = query.page_size(&config);
    let total_pages = pagination::total_pages(loaded.total, page_size);
    let current_page = query.page();

    // A page past the end (stale link, shrinking result set) snaps back once
    // the total for this very query is known.
    {
        let navigator = navigator.clone();
        let route = route.clone();
        use_effect_with(
            (loaded_for, query.clone(), total_pages),
            move |(loaded_for, query, total)| {
                let next = loaded_for
                    .as_ref()
                    .and_then(|loaded_for| query.clamped(loaded_for, *total));
                if let Some(next) = next {
                    replace_query(navigator.as_ref(), route.as_ref(), &next);
                }
                || ()
            },
        );
    }

    let on_search = {
        let search_input = search_input.clone();
        Callback::from(move |value: String| search_input.set(value))
    };

    let on_category = {
        let latest_query = latest_query.clone();
        let navigator = navigator.clone();
        let route = route.clone();
        Callback::from(move |category: Option<String>| {
            let next = latest_query.borrow().with_category(category);
            if let Some(next) = next {
                replace_query(navigator.as_ref(), route.as_ref(), &next);
            }
        })
    };

    let on_page = {
        let latest_query = latest_query.clone();
        let navigator = navigator.clone();
        let route = route.clone();
        Callback::from(move |page: usize| {
            let next = latest_query.borrow().with_page(page.min(total_pages));
            replace_query(navigator.as_ref(), route.as_ref(), &next);
        })
    };

    let on_page_size = {
        let latest_query = latest_query.clone();
        Callback::from(move |size: usize| {
            let next = latest_query.borrow().with_page_size(size);
            replace_query(navigator.as_ref(), route.as_ref(), &next);
        })
    };

    let reload = {
        let reload_key = reload_key.clone();
        Callback::from(move |_| reload_key.set(reload_key.wrapping_add(1)))
    };

    ListHandle {
        query,
        search_input: (*search_input).clone(),
        items: Rc::new(loaded.items.clone()),
        total: loaded.total,
        page: current_page.min(total_pages),
        page_size,
        total_pages,
        loading: *loading,
        error: (*error).clone(),
        on_search,
        on_category,
        on_page,
        on_page_size,
        reload,
    }
}

/// Profile of the signed-in user; `None` until loaded or when the request
/// fails.
#[hook]
pub fn use_profile() -> Option<Profile> {
    let session = use_session();
    let profile = use_state(|| None::<Profile>);

    {
        let profile = profile.clone();
        use_effect_with(session.token().map(str::to_string), move |token| {
            if token.is_some() {
                wasm_bindgen_futures::spawn_local(async move {
                    match api::fetch_profile().await {
                        Ok(loaded) => profile.set(Some(loaded)),
                        Err(err) => {
                            web_sys::console::error_1(
                                &format!("failed to load profile: {}", err).into(),
                            );
                        },
                    }
                });
            } else {
                profile.set(None);
            }
            || ()
        });
    }

    (*profile).clone()
}

/// Categories for filter dropdowns and the article form's select.
#[derive(Clone, PartialEq)]
pub struct CategoryOptions {
    /// Loaded categories.
    pub items: Rc<Vec<Category>>,
    /// Whether the categories are still loading.
    pub loading: bool,
    /// Error message if loading failed.
    pub error: Option<String>,
}

#[hook]
pub fn use_category_options() -> CategoryOptions {
    let state = use_state(|| CategoryOptions {
        items: Rc::new(Vec::new()),
        loading: true,
        error: None,
    });

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let next = match api::fetch_category_options(CATEGORY_OPTIONS_LIMIT).await {
                    Ok(items) => CategoryOptions {
                        items: Rc::new(items),
                        loading: false,
                        error: None,
                    },
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("failed to load categories: {}", err).into(),
                        );
                        CategoryOptions {
                            items: Rc::new(Vec::new()),
                            loading: false,
                            error: Some(err.user_message()),
                        }
                    },
                };
                state.set(next);
            });
            || ()
        });
    }

    (*state).clone()
}

/// Loading state of a single article.
#[derive(Clone, PartialEq)]
pub enum ArticleState {
    /// Fetch in progress.
    Loading,
    /// Article loaded.
    Loaded(Rc<Article>),
    /// Server reported 404.
    NotFound,
    /// Any other failure, with a user-facing message.
    Failed(String),
}

/// One article by id. A 404 is reported separately from other failures.
#[hook]
pub fn use_article(id: String) -> ArticleState {
    let state = use_state(|| ArticleState::Loading);
    let request_seq = use_mut_ref(RequestSeq::default);

    {
        let state = state.clone();
        use_effect_with(id, move |id| {
            let token = request_seq.borrow_mut().begin();
            state.set(ArticleState::Loading);
            let id = id.clone();
            let guard = request_seq.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = api::fetch_article(&id).await;
                if !guard.borrow().is_current(token) {
                    return;
                }
                let next = match result {
                    Ok(article) => ArticleState::Loaded(Rc::new(article)),
                    Err(ApiError::NotFound) => ArticleState::NotFound,
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("failed to load article {}: {}", id, err).into(),
                        );
                        ArticleState::Failed(err.user_message())
                    },
                };
                state.set(next);
            });
            move || request_seq.borrow_mut().invalidate()
        });
    }

    (*state).clone()
}

/// Other articles from the same category as `article`, refetched whenever
/// the article changes.
#[hook]
pub fn use_related(article: Option<Article>) -> Related {
    let related = use_state(|| Related::Loading);
    let request_seq = use_mut_ref(RequestSeq::default);

    {
        let related = related.clone();
        use_effect_with(article, move |article| {
            let token = request_seq.borrow_mut().begin();
            if let Some(article) = article.clone() {
                related.set(Related::Loading);
                let request_seq = request_seq.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result =
                        api::fetch_related(&article, RELATED_POOL_LIMIT, RELATED_LIMIT).await;
                    if !request_seq.borrow().is_current(token) {
                        return;
                    }
                    match result {
                        Ok(items) => related.set(Related::Loaded(Rc::new(items))),
                        Err(err) => {
                            web_sys::console::error_1(
                                &format!("failed to load related articles: {}", err).into(),
                            );
                            related.set(Related::Failed);
                        },
                    }
                });
            }
            move || request_seq.borrow_mut().invalidate()
        });
    }

    (*related).clone()
}

/// Clears the session cookies and context, then goes to the login page.
#[hook]
pub fn use_logout() -> Callback<()> {
    let session = use_context::<SessionContext>();
    let navigator = use_navigator();

    Callback::from(move |_| {
        match session.as_ref() {
            Some(ctx) => sign_out(ctx),
            None => crate::browser::clear_session(),
        }
        if let Some(navigator) = navigator.as_ref() {
            navigator.replace(&Route::Login);
        }
    })
}

/// Automatically scroll the viewport to the top whenever the current route
/// changes.
#[hook]
pub fn use_scroll_to_top() {
    let location = use_location();

    use_effect_with(location, move |location| {
        if location.is_some() {
            scroll_window_to_top();
        }

        || ()
    });
}

fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
