//! Admin dashboard: the account roster.

use leptos::prelude::*;

use crate::state::session::use_session;

/// Admin dashboard page listing every account with role and verification
/// status.
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = use_session();
    let users = LocalResource::new(move || crate::net::api::fetch_admin_users(session));

    view! {
        <div class="admin-page">
            <h1>"Accounts"</h1>
            <Suspense fallback=move || view! { <p>"Loading accounts..."</p> }>
                {move || {
                    users
                        .get()
                        .map(|list| {
                            view! {
                                <table class="admin-page__table">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Email"</th>
                                            <th>"Role"</th>
                                            <th>"Verified"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|user| {
                                                let role_class =
                                                    format!("role-badge role-badge--{}", user.role.as_str());
                                                view! {
                                                    <tr>
                                                        <td>{user.display_name}</td>
                                                        <td>{user.email}</td>
                                                        <td>
                                                            <span class=role_class>{user.role.as_str()}</span>
                                                        </td>
                                                        <td>{if user.is_verified { "\u{2713}" } else { "\u{2014}" }}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
