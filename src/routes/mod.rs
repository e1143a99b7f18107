mod dashboard;
mod login;
mod not_found;
mod submit_request;

pub(crate) use dashboard::DashboardPage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use submit_request::SubmitRequestPage;

use crate::features::auth::RequireAuth;
use crate::features::guard::NavigationGuard;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route
                path=path!("/")
                view=|| {
                    view! {
                        <NavigationGuard>
                            <RequireAuth>
                                <DashboardPage />
                            </RequireAuth>
                        </NavigationGuard>
                    }
                }
            />
            <Route path=path!("/login") view=LoginPage />
            <Route
                path=path!("/submit-request")
                view=|| {
                    view! {
                        <NavigationGuard>
                            <RequireAuth>
                                <SubmitRequestPage />
                            </RequireAuth>
                        </NavigationGuard>
                    }
                }
            />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
