use crate::pages::login::view_model::FormMessage;
use leptos::*;

#[component]
pub fn FormMessageLine(message: RwSignal<Option<FormMessage>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some) fallback=|| ()>
            <p class=move || message.with(|m| m.as_ref().map(FormMessage::class).unwrap_or_default())>
                {move || message.with(|m| m.as_ref().map(|m| m.text().to_string()).unwrap_or_default())}
            </p>
        </Show>
    }
}
