use leptos::prelude::*;

use super::dashboard::{Dashboard, Tab};
use crate::api::Scope;
use crate::frontend::components::{MainLayout, RequireAuth};
use crate::models::Role;

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <RequireAuth role=Role::Admin>
            <MainLayout>
                <Dashboard title="Administration" scope=Scope::Admin tabs=Tab::ADMIN/>
            </MainLayout>
        </RequireAuth>
    }
}
