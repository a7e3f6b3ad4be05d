use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::frontend::components::{
    AuthLayout, Button, EmailInput, ErrorSlot, PasswordInput, TextInput,
};
use crate::frontend::session::use_session;
use crate::services::access::home_for;
use crate::services::auth;
use crate::services::validation::{RegisterForm, MIN_PASSWORD_LENGTH};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        pending.set(true);

        let form = RegisterForm {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        let navigate = navigate.clone();

        spawn_local(async move {
            match auth::register(&session.public_client(), &form).await {
                Ok(registered) => {
                    let home = home_for(registered.role());
                    session.sign_in(registered);
                    navigate(home, Default::default());
                }
                Err(e) => {
                    log::warn!("Registration failed: {e}");
                    error.set(Some(e.to_string()));
                    pending.set(false);
                }
            }
        });
    };

    view! {
        <AuthLayout title="Create your account" subtitle="Start planning your next journey">
            <ErrorSlot error=error/>

            <form class="space-y-5" on:submit=on_submit novalidate>
                <div class="grid grid-cols-2 gap-4">
                    <TextInput label="First name" name="first_name" value=first_name required=true/>
                    <TextInput label="Last name" name="last_name" value=last_name required=true/>
                </div>
                <EmailInput label="Email" value=email/>
                <PasswordInput
                    label="Password"
                    hint=format!("At least {MIN_PASSWORD_LENGTH} characters")
                    value=password
                />
                <PasswordInput label="Confirm password" name="confirm_password" value=confirm_password/>
                <Button loading=pending loading_text="Creating account..." full_width=true>
                    "Create Account"
                </Button>
            </form>

            <p class="text-center text-slate-400 mt-6">
                "Already have an account? "
                <a href="/login" class="text-teal-300 hover:text-teal-200 font-medium">"Sign in"</a>
            </p>
        </AuthLayout>
    }
}
