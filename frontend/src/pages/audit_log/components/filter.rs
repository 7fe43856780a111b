use crate::pages::audit_log::utils::{action_label, ACTIONS};
use leptos::*;

#[component]
pub fn ActionFilter(
    #[prop(into)] selected: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="border border-slate-300 rounded-md px-3 py-2 text-sm"
            prop:value=move || selected.get()
            on:change=move |ev| on_change.call(event_target_value(&ev))
        >
            <option value="">"전체 활동"</option>
            {ACTIONS
                .iter()
                .map(|action| view! { <option value=*action>{action_label(action)}</option> })
                .collect_view()}
        </select>
    }
}
