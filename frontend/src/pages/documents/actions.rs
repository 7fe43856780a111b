use leptos::{SignalUpdate, SignalWithUntracked};
use super::utils::{
    delete_selected_confirm, DELETE_ALL_CONFIRM, DELETE_ALL_FINAL_CONFIRM, DELETE_DONE_MESSAGE,
    DELETE_FAILED_MESSAGE, DELETE_ONE_CONFIRM, NOTHING_SELECTED_MESSAGE,
};
use super::view_model::DocumentsViewModel;
use crate::api::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteScope {
    One(String),
    Selected,
    All,
}

/// Confirms, deletes, drops the deleted ids from the selection and reloads.
/// Returns `Ok(false)` when nothing was deleted because the user backed out.
pub async fn delete_documents(vm: DocumentsViewModel, scope: DeleteScope) -> Result<bool, ApiError> {
    let repository = vm.repository();
    let navigator = repository.client().navigator();

    let confirmed = match &scope {
        DeleteScope::One(_) => navigator.confirm(DELETE_ONE_CONFIRM),
        DeleteScope::Selected => {
            let count = vm.selection.with_untracked(|s| s.len());
            if count == 0 {
                navigator.alert(NOTHING_SELECTED_MESSAGE);
                return Ok(false);
            }
            navigator.confirm(&delete_selected_confirm(count))
        }
        DeleteScope::All => {
            navigator.confirm(DELETE_ALL_CONFIRM) && navigator.confirm(DELETE_ALL_FINAL_CONFIRM)
        }
    };
    if !confirmed {
        return Ok(false);
    }

    let selected = vm.selection.with_untracked(|s| s.ids());
    let result = match &scope {
        DeleteScope::One(doc_id) => repository.delete_one(doc_id).await,
        DeleteScope::Selected => repository.delete_many(&selected).await,
        DeleteScope::All => repository.delete_all().await,
    };

    match result {
        Ok(response) => {
            log::info!("deleted documents ({:?}): {:?}", scope, response.count);
            vm.selection.update(|s| match &scope {
                DeleteScope::One(doc_id) => s.remove_many([doc_id]),
                DeleteScope::Selected => s.remove_many(&selected),
                DeleteScope::All => s.clear(),
            });
            navigator.alert(
                response
                    .message
                    .as_deref()
                    .filter(|m| !m.is_empty())
                    .unwrap_or(DELETE_DONE_MESSAGE),
            );
            vm.reload().await;
            Ok(true)
        }
        Err(err) => {
            if !err.is_unauthorized() {
                navigator.alert(&err.clone().with_fallback(DELETE_FAILED_MESSAGE).to_string());
            }
            Err(err)
        }
    }
}
