use blogdesk_shared::guard::{evaluate, Destination, GuardDecision};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{
        layout::{AdminLayout, UserLayout},
        toast::ToastHost,
    },
    context::use_session,
    i18n::current::{admin_articles, article_form, categories, profile},
    pages,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,

    #[at("/admin/articles")]
    AdminArticles,
    #[at("/admin/articles/add")]
    AdminArticleAdd,
    #[at("/admin/articles/edit/:id")]
    AdminArticleEdit { id: String },
    #[at("/admin/articles/preview-draft")]
    AdminDraftPreview,
    #[at("/admin/articles/preview/:id")]
    AdminArticlePreview { id: String },
    #[at("/admin/categories")]
    AdminCategories,
    #[at("/admin/profile")]
    AdminProfile,

    #[at("/user/articles")]
    UserArticles,
    #[at("/user/articles/favorites")]
    UserFavorites,
    #[at("/user/articles/:id")]
    UserArticleDetail { id: String },
    #[at("/user/profile")]
    UserProfile,

    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Login => Route::Login,
            Destination::AdminHome => Route::AdminArticles,
            Destination::UserHome => Route::UserArticles,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RouteGateProps {
    pub children: Html,
}

/// Runs the route guard for the current path before anything renders.
#[function_component(RouteGate)]
pub fn route_gate(props: &RouteGateProps) -> Html {
    let location = use_location();
    let session = use_session();
    let path = location
        .as_ref()
        .map(|loc| loc.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    match evaluate(&path, &session) {
        GuardDecision::Allow => props.children.clone(),
        GuardDecision::Redirect(destination) => {
            let to = Route::from(destination);
            html! { <Redirect<Route> {to} /> }
        },
    }
}

fn switch(route: Route) -> Html {
    match route {
        // Reached only with a token whose role is unknown.
        Route::Root | Route::Login => html! { <pages::login::LoginPage /> },
        Route::Register => html! { <pages::register::RegisterPage /> },

        Route::AdminArticles => html! {
            <AdminLayout title={admin_articles::PAGE_TITLE}>
                <pages::admin_articles::AdminArticlesPage />
            </AdminLayout>
        },
        Route::AdminArticleAdd => html! {
            <AdminLayout title={admin_articles::PAGE_TITLE}>
                <pages::article_form::ArticleFormPage />
            </AdminLayout>
        },
        Route::AdminArticleEdit {
            id,
        } => html! {
            <AdminLayout title={admin_articles::PAGE_TITLE}>
                <pages::article_form::ArticleFormPage id={Some(id)} />
            </AdminLayout>
        },
        Route::AdminDraftPreview => html! {
            <AdminLayout title={article_form::PREVIEW}>
                <pages::draft_preview::DraftPreviewPage />
            </AdminLayout>
        },
        Route::AdminArticlePreview {
            id,
        } => html! {
            <AdminLayout title={article_form::PREVIEW}>
                <pages::admin_article_preview::AdminArticlePreviewPage {id} />
            </AdminLayout>
        },
        Route::AdminCategories => html! {
            <AdminLayout title={categories::PAGE_TITLE}>
                <pages::admin_categories::AdminCategoriesPage />
            </AdminLayout>
        },
        Route::AdminProfile => html! {
            <AdminLayout title={profile::PAGE_TITLE}>
                <pages::profile::ProfilePage back={Route::AdminArticles} />
            </AdminLayout>
        },

        Route::UserArticles => html! {
            <UserLayout>
                <pages::user_articles::UserArticlesPage />
            </UserLayout>
        },
        Route::UserFavorites => html! {
            <UserLayout>
                <pages::favorites::FavoritesPage />
            </UserLayout>
        },
        Route::UserArticleDetail {
            id,
        } => html! {
            <UserLayout>
                <pages::article_detail::ArticleDetailPage {id} />
            </UserLayout>
        },
        Route::UserProfile => html! {
            <UserLayout>
                <pages::profile::ProfilePage back={Route::UserArticles} />
            </UserLayout>
        },

        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <RouteGate>
                <Switch<Route> render={switch} />
            </RouteGate>
            <ToastHost />
        </BrowserRouter>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_destinations_are_real_routes() {
        for destination in [Destination::Login, Destination::AdminHome, Destination::UserHome] {
            let route = Route::from(destination);
            assert_eq!(route.to_path(), destination.path());
        }
    }

    #[test]
    fn static_segments_win_over_ids() {
        assert_eq!(Route::recognize("/user/articles/favorites"), Some(Route::UserFavorites));
        assert_eq!(Route::recognize("/admin/articles/preview-draft"), Some(Route::AdminDraftPreview));
        assert_eq!(
            Route::recognize("/user/articles/42"),
            Some(Route::UserArticleDetail {
                id: "42".to_string()
            })
        );
    }
}
