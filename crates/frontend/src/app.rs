use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::data::QueryCache;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // Process-wide services; the list cache may only be mutated through its
    // own invalidation primitive (submit completion and optimistic delete).
    provide_context(QueryCache::new());
    provide_context(ModalStackService::new());
    provide_context(ToastService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
