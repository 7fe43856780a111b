use crate::pages::extract::view_model::ExtractViewModel;
use crate::utils::download::read_file_bytes;
use leptos::*;
use web_sys::{File, HtmlInputElement};

fn start_upload(vm: ExtractViewModel, file: File) {
    if !vm.accept_file(&file.name(), &file.type_(), file.size()) {
        return;
    }
    spawn_local(async move {
        match read_file_bytes(&file).await {
            Ok(bytes) => vm.upload(file.name(), bytes),
            Err(err) => vm.read_failed(&err),
        }
    });
}

#[component]
pub fn UploadArea(vm: ExtractViewModel) -> impl IntoView {
    let input_ref = create_node_ref::<html::Input>();
    let (dragging, set_dragging) = create_signal(false);
    let pending = vm.upload_action.pending();

    let on_change = move |ev: ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            start_upload(vm, file);
        }
        input.set_value("");
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        set_dragging.set(false);
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        match file {
            Some(file) => start_upload(vm, file),
            None => {
                vm.accept_file("", "", 0.0);
            }
        }
    };

    view! {
        <div
            class="bg-white shadow rounded-lg p-6"
            on:dragenter=move |ev: ev::DragEvent| {
                ev.prevent_default();
                set_dragging.set(true);
            }
            on:dragover=move |ev: ev::DragEvent| {
                ev.prevent_default();
                set_dragging.set(true);
            }
            on:dragleave=move |ev: ev::DragEvent| {
                ev.prevent_default();
                set_dragging.set(false);
            }
            on:drop=on_drop
        >
            <input
                node_ref=input_ref
                type="file"
                accept="application/pdf"
                class="hidden"
                on:change=on_change
            />
            <button
                class=move || {
                    if dragging.get() {
                        "w-full py-10 border-2 border-dashed rounded-lg text-slate-600 border-blue-500 bg-blue-200"
                    } else {
                        "w-full py-10 border-2 border-dashed rounded-lg text-slate-600 border-slate-300 hover:bg-slate-50"
                    }
                }
                disabled=pending
                on:click=move |_| {
                    if let Some(input) = input_ref.get() {
                        input.click();
                    }
                }
            >
                {move || if pending.get() { "분석 중..." } else { "PDF 파일을 선택하거나 여기로 끌어다 놓으세요" }}
            </button>
        </div>
    }
}
