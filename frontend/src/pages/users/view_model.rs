use super::repository::UsersRepository;
use super::utils::{filter_users, NewUserForm, RoleChange};
use crate::api::{ApiClient, UserAccount};
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsersState {
    Loading,
    Loaded(Vec<UserAccount>),
    Failed,
}

#[derive(Clone, Copy)]
pub struct UsersViewModel {
    pub users: RwSignal<UsersState>,
    pub search: RwSignal<String>,
    pub new_user: RwSignal<NewUserForm>,
    pub add_open: RwSignal<bool>,
    pub role_change: RwSignal<Option<RoleChange>>,
    repository: StoredValue<UsersRepository>,
}

impl UsersViewModel {
    pub fn new_with_client(client: ApiClient) -> Self {
        Self {
            users: create_rw_signal(UsersState::Loading),
            search: create_rw_signal(String::new()),
            new_user: create_rw_signal(NewUserForm::default()),
            add_open: create_rw_signal(false),
            role_change: create_rw_signal(None),
            repository: store_value(UsersRepository::new_with_client(client)),
        }
    }

    pub fn repository(&self) -> UsersRepository {
        self.repository.get_value()
    }

    pub async fn reload(self) {
        let state = match self.repository().fetch_all().await {
            Ok(users) => UsersState::Loaded(users),
            Err(err) => {
                log::error!("failed to load users: {}", err);
                UsersState::Failed
            }
        };
        self.users.set(state);
    }

    /// Users matching the search box. `None` while loading or after a failure.
    pub fn visible(&self) -> Option<Vec<UserAccount>> {
        let search = self.search.get();
        self.users.with(|state| match state {
            UsersState::Loaded(users) => Some(filter_users(users, &search)),
            _ => None,
        })
    }

    pub fn total(&self) -> usize {
        self.users.with(|state| match state {
            UsersState::Loaded(users) => users.len(),
            _ => 0,
        })
    }

    pub fn open_add(&self) {
        self.new_user.set(NewUserForm::default());
        self.add_open.set(true);
    }

    pub fn close_add(&self) {
        self.add_open.set(false);
    }

    pub fn open_role_change(&self, user: &UserAccount) {
        self.role_change.set(Some(RoleChange::for_user(user)));
    }

    pub fn close_role_change(&self) {
        self.role_change.set(None);
    }
}

pub fn use_users_view_model() -> UsersViewModel {
    match use_context::<UsersViewModel>() {
        Some(vm) => vm,
        None => {
            let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
            let vm = UsersViewModel::new_with_client(api);
            provide_context(vm);
            vm
        }
    }
}
