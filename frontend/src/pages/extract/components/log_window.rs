use crate::pages::extract::utils::ExtractState;
use leptos::*;

#[component]
pub fn LogWindow(state: RwSignal<ExtractState>) -> impl IntoView {
    view! {
        <div class="bg-slate-900 rounded-lg p-4 h-48 overflow-y-auto font-mono text-xs space-y-1">
            {move || {
                state.with(|s| {
                    s.logs
                        .iter()
                        .map(|line| view! { <div class=line.class()>{line.text()}</div> })
                        .collect_view()
                })
            }}
        </div>
    }
}
