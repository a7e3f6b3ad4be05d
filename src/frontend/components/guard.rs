use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::{Loading, MainLayout};
use crate::frontend::session::use_session;
use crate::models::Role;
use crate::services::access::{evaluate, Access, LOGIN_PATH};

/// Renders `children` only for a signed-in user holding `role` (any role when
/// unset). Anonymous visitors are sent to the login page.
#[component]
pub fn RequireAuth(#[prop(optional)] role: Option<Role>, children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    move || {
        if !session.is_ready() {
            return view! { <Loading label="Checking your session..."/> }.into_any();
        }

        match evaluate(session.session().as_ref(), role) {
            Access::Granted => children().into_any(),
            Access::LoginRequired => view! { <Redirect path=LOGIN_PATH/> }.into_any(),
            Access::Denied { required, actual } => view! {
                <AccessDenied required=required actual=actual/>
            }
            .into_any(),
        }
    }
}

#[component]
pub fn AccessDenied(required: Role, actual: Role) -> impl IntoView {
    view! {
        <MainLayout>
            <div class="max-w-lg mx-auto py-24 text-center">
                <p class="text-6xl mb-6">"🔒"</p>
                <h1 class="text-3xl font-bold text-white mb-3">"Access denied"</h1>
                <p class="text-slate-400 mb-8">
                    {format!(
                        "This area is reserved for the {} role. You are signed in as {}.",
                        required.label(),
                        actual.label()
                    )}
                </p>
                <a href="/" class="btn-primary">"Back to home"</a>
            </div>
        </MainLayout>
    }
}
