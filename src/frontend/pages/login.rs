use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::frontend::components::{
    AuthLayout, Button, EmailInput, ErrorSlot, InfoAlert, PasswordInput,
};
use crate::frontend::session::use_session;
use crate::services::access::home_for;
use crate::services::auth;
use crate::services::validation::LoginForm;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let token_expired = move || query.with(|q| q.get("tokenExpired").is_some_and(|v| v == "true"));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        pending.set(true);

        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();

        spawn_local(async move {
            match auth::login(&session.public_client(), &form).await {
                Ok(signed_in) => {
                    let home = home_for(signed_in.role());
                    session.sign_in(signed_in);
                    navigate(home, Default::default());
                }
                Err(e) => {
                    log::warn!("Login failed: {e}");
                    error.set(Some(e.to_string()));
                    pending.set(false);
                }
            }
        });
    };

    view! {
        <AuthLayout title="Welcome back" subtitle="Sign in to manage your trips">
            <Show when=token_expired>
                <InfoAlert message="Your session has expired. Please sign in again."/>
            </Show>
            <ErrorSlot error=error/>

            <form class="space-y-6" on:submit=on_submit novalidate>
                <EmailInput label="Email" value=email/>
                <PasswordInput label="Password" value=password/>
                <Button loading=pending loading_text="Signing in..." full_width=true>
                    "Sign In"
                </Button>
            </form>

            <p class="text-center text-slate-400 mt-6">
                "Don't have an account? "
                <a href="/register" class="text-teal-300 hover:text-teal-200 font-medium">"Sign up"</a>
            </p>
        </AuthLayout>
    }
}
