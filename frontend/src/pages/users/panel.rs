use crate::api::UserAccount;
use crate::components::layout::Layout;
use crate::pages::users::{
    actions::{change_role, create_user, toggle_enabled},
    components::{AddUserDialog, RoleDialog, UsersTable},
    view_model::use_users_view_model,
};
use leptos::*;

#[component]
pub fn UsersPage() -> impl IntoView {
    let vm = use_users_view_model();

    create_effect(move |_| spawn_local(vm.reload()));

    let on_role = Callback::new(move |user: UserAccount| vm.open_role_change(&user));
    let on_toggle = Callback::new(move |(id, enabled): (i64, bool)| {
        spawn_local(async move {
            toggle_enabled(vm, id, enabled).await;
        });
    });
    let on_role_confirm = Callback::new(move |_| {
        spawn_local(async move {
            change_role(vm).await;
        });
    });
    let on_role_cancel = Callback::new(move |_| vm.close_role_change());
    let on_add_confirm = Callback::new(move |_| {
        spawn_local(async move {
            create_user(vm).await;
        });
    });
    let on_add_cancel = Callback::new(move |_| vm.close_add());

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex items-end justify-between">
                    <div>
                        <h1 class="text-2xl font-bold text-slate-900">"사용자 관리"</h1>
                        <p class="mt-1 text-sm text-slate-600">
                            {move || format!("전체 사용자 {}명", vm.total())}
                        </p>
                    </div>
                    <div class="flex gap-2">
                        <input
                            type="search"
                            placeholder="사용자 검색"
                            class="border border-slate-300 rounded-md px-3 py-2 text-sm"
                            prop:value=move || vm.search.get()
                            on:input=move |ev| vm.search.set(event_target_value(&ev))
                        />
                        <button
                            class="px-4 py-2 rounded-md text-sm bg-blue-600 text-white hover:bg-blue-700"
                            on:click=move |_| vm.open_add()
                        >
                            "사용자 추가"
                        </button>
                    </div>
                </div>
                <UsersTable vm=vm on_role=on_role on_toggle=on_toggle />
            </div>
            <RoleDialog change=vm.role_change on_cancel=on_role_cancel on_confirm=on_role_confirm />
            <AddUserDialog
                open=vm.add_open
                form=vm.new_user
                on_cancel=on_add_cancel
                on_confirm=on_add_confirm
            />
        </Layout>
    }
}
