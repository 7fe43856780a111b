use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{
    api::{ApiClient, Role},
    components::guard::{RequireAuth, RequireRole},
    pages::{
        audit_log::AuditLogPage, dashboard::DashboardPage, document_verify::DocumentVerifyPage,
        documents::DocumentsPage, extract::ExtractPage, login::LoginPage, users::UsersPage,
    },
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/extract",
    "/documents",
    "/documents/:id",
    "/audit",
    "/users",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/", "/extract", "/documents", "/documents/:id"];

pub const ADMIN_ROUTE_PATHS: &[&str] = &["/audit", "/users"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/login"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_meta_context();
    view! {
        <Title text="SecureDoc Console"/>
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/" view=ProtectedDashboard/>
                    <Route path="/extract" view=ProtectedExtract/>
                    <Route path="/documents" view=ProtectedDocuments/>
                    <Route path="/documents/:id" view=ProtectedDocumentVerify/>
                    <Route path="/audit" view=AdminAuditLog/>
                    <Route path="/users" view=AdminUsers/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedExtract() -> impl IntoView {
    view! { <RequireAuth><ExtractPage/></RequireAuth> }
}

#[component]
fn ProtectedDocuments() -> impl IntoView {
    view! { <RequireAuth><DocumentsPage/></RequireAuth> }
}

/// Re-creates the page whenever `:id` changes.
#[component]
fn ProtectedDocumentVerify() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());
    view! {
        <RequireAuth>
            {move || view! { <DocumentVerifyPage id=id()/> }}
        </RequireAuth>
    }
}

#[component]
fn AdminAuditLog() -> impl IntoView {
    view! { <RequireRole role=Role::Admin><AuditLogPage/></RequireRole> }
}

#[component]
fn AdminUsers() -> impl IntoView {
    view! { <RequireRole role=Role::Admin><UsersPage/></RequireRole> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn route_paths_include_admin_routes() {
        for path in ADMIN_ROUTE_PATHS {
            assert!(ROUTE_PATHS.contains(path));
        }
    }

    #[test]
    fn every_route_has_exactly_one_access_class() {
        let mut seen: HashSet<&str> = HashSet::new();
        for path in PROTECTED_ROUTE_PATHS
            .iter()
            .chain(ADMIN_ROUTE_PATHS)
            .chain(PUBLIC_ROUTE_PATHS)
        {
            assert!(seen.insert(path), "route classified twice: {}", path);
        }
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(seen, all);
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
