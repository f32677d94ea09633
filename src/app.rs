//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::route_guard::RouteGuard;
use crate::net::types::Role;
use crate::pages::{
    admin_dashboard::AdminDashboardPage, browse::BrowsePage, home::HomePage, login::LoginPage,
    pet_detail::PetDetailPage, seller_dashboard::SellerDashboardPage, wishlist::WishlistPage,
};
use crate::policy;
use crate::state::session::provide_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store context and sets up client-side routing; every
/// protected route wraps its page in [`RouteGuard`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let _session = provide_session();

    // A role whose landing page denies itself would redirect forever; catch
    // the misconfiguration at startup instead of in production navigation.
    debug_assert!(policy::table_is_consistent());

    view! {
        <Stylesheet id="leptos" href="/pkg/pawmart.css"/>
        <Title text="Pawmart"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=BrowsePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("pets") view=BrowsePage/>
                    <Route path=(StaticSegment("pets"), ParamSegment("id")) view=PetDetailPage/>
                    <Route
                        path=StaticSegment("home")
                        view=|| {
                            view! {
                                <RouteGuard>
                                    <HomePage/>
                                </RouteGuard>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("wishlist")
                        view=|| {
                            view! {
                                <RouteGuard>
                                    <WishlistPage/>
                                </RouteGuard>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("seller"), StaticSegment("dashboard"))
                        view=|| {
                            view! {
                                <RouteGuard allowed_roles=vec![Role::Seller]>
                                    <SellerDashboardPage/>
                                </RouteGuard>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("dashboard"))
                        view=|| {
                            view! {
                                <RouteGuard allowed_roles=vec![Role::Admin]>
                                    <AdminDashboardPage/>
                                </RouteGuard>
                            }
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
