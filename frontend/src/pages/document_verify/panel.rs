use crate::components::layout::{Layout, LoadingSpinner};
use crate::pages::document_verify::{
    components::{PdfViewer, VerifyFields},
    utils::DOCUMENTS_PATH,
    view_model::use_verify_view_model,
};
use leptos::*;

#[component]
pub fn DocumentVerifyPage(#[prop(optional, into)] id: Option<String>) -> impl IntoView {
    let vm = use_verify_view_model();

    create_effect(move |_| {
        let id = id.clone();
        spawn_local(async move {
            if vm.load(id).await {
                vm.load_pdf().await;
            }
        });
    });
    on_cleanup(move || vm.release_pdf());

    let on_reprocess = Callback::new(move |_| {
        spawn_local(async move {
            if vm.reprocess().await {
                vm.load_pdf().await;
            }
        });
    });
    let on_finalize = Callback::new(move |_| {
        spawn_local(async move {
            vm.finalize().await;
        });
    });
    let on_excel = Callback::new(move |_| spawn_local(vm.download_excel()));
    let pdf = Signal::derive(move || vm.pdf.get());

    view! {
        <Layout>
            <div class="space-y-4">
                <a href=DOCUMENTS_PATH class="text-sm text-blue-600 hover:underline">"← 문서 목록으로"</a>
                <Show
                    when=move || vm.document.with(Option::is_some)
                    fallback=|| view! { <LoadingSpinner /> }
                >
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                        <PdfViewer state=pdf />
                        <VerifyFields
                            vm=vm
                            on_reprocess=on_reprocess
                            on_finalize=on_finalize
                            on_excel=on_excel
                        />
                    </div>
                </Show>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Role;
    use crate::pages::document_verify::view_model::VerifyViewModel;
    use crate::state::auth::AuthProvider;
    use crate::test_support::helpers::{document, session_with_role, test_client};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn shows_spinner_until_document_arrives() {
        let api = test_client(None, Some(session_with_role(Role::User))).api;
        let html = render_to_string(move || {
            provide_context(api);
            view! { <AuthProvider><DocumentVerifyPage id="7" /></AuthProvider> }
        });
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("검증 완료"));
    }

    #[test]
    fn low_confidence_document_flags_amount() {
        let api = test_client(None, Some(session_with_role(Role::User))).api;
        let html = render_to_string(move || {
            let vm = VerifyViewModel::new_with_client(api.clone());
            let mut doc = document(7, "DOC-7", "lease.pdf");
            doc.confidence = Some(45.0);
            vm.form.set(crate::pages::document_verify::utils::VerifyForm::from_document(&doc));
            vm.document.set(Some(doc));
            provide_context(vm);
            provide_context(api);
            view! { <AuthProvider><DocumentVerifyPage id="7" /></AuthProvider> }
        });
        assert!(html.contains("DOC-7 / lease.pdf"));
        assert!(html.contains("Confidence: 45%"));
        assert!(html.contains("border-red-400"));
        assert!(html.contains("신뢰도가 낮습니다"));
        assert!(html.contains("검증 완료"));
    }
}
