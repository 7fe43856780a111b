use crate::api::ApiError;
use leptos::*;

/// Inline banner for the last failed request. Unauthorized errors are not shown; the page is leaving.
#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    let visible = move || error.with(|e| e.as_ref().is_some_and(|e| !e.is_unauthorized()));
    view! {
        <Show when=visible fallback=|| ()>
            <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.to_string()).unwrap_or_default()}</div>
                {move || error.get().and_then(|e| match e {
                    ApiError::Server { status, .. } => Some(view! {
                        <div class="text-xs opacity-75">{format!("{} ({})", e.code(), status)}</div>
                    }),
                    _ => None,
                })}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn inline_error_renders_server_status() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::Server {
                status: 404,
                message: "문서를 찾을 수 없습니다".into(),
            }));
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(html.contains("문서를 찾을 수 없습니다"));
        assert!(html.contains("SERVER_ERROR (404)"));
    }

    #[test]
    fn inline_error_hides_unauthorized() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::Unauthorized { status: 401 }));
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(!html.contains("세션이 만료"));
    }
}
