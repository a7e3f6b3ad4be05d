use leptos::prelude::*;

use super::dashboard::{Dashboard, Tab};
use crate::api::Scope;
use crate::frontend::components::{MainLayout, RequireAuth};
use crate::models::Role;

#[component]
pub fn ManagerPage() -> impl IntoView {
    view! {
        <RequireAuth role=Role::Manager>
            <MainLayout>
                <Dashboard title="Manager dashboard" scope=Scope::Manager tabs=Tab::MANAGER/>
            </MainLayout>
        </RequireAuth>
    }
}
