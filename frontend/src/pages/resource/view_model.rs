use std::marker::PhantomData;

use leptos::*;

use super::{utils::MessageState, EditableResource};
use crate::{
    api::{ApiClient, ApiError},
    utils::search::filter_by_key,
};

/// Record under edit in the modal.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection<F> {
    pub id: String,
    pub form: F,
}

pub struct ResourceViewModel<R: EditableResource> {
    pub records: RwSignal<Vec<R::Record>>,
    pub search_term: RwSignal<String>,
    pub form: RwSignal<R::Form>,
    pub selected: RwSignal<Option<Selection<R::Form>>>,
    pub confirming_delete: RwSignal<bool>,
    pub loading: RwSignal<bool>,
    pub submitting: RwSignal<bool>,
    pub message: RwSignal<MessageState>,
    api: StoredValue<ApiClient>,
    _kind: PhantomData<fn() -> R>,
}

impl<R: EditableResource> Clone for ResourceViewModel<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: EditableResource> Copy for ResourceViewModel<R> {}

impl<R: EditableResource> ResourceViewModel<R> {
    pub fn new(api: ApiClient) -> Self {
        Self {
            records: create_rw_signal(Vec::new()),
            search_term: create_rw_signal(String::new()),
            form: create_rw_signal(R::Form::default()),
            selected: create_rw_signal(None),
            confirming_delete: create_rw_signal(false),
            loading: create_rw_signal(false),
            submitting: create_rw_signal(false),
            message: create_rw_signal(MessageState::default()),
            api: store_value(api),
            _kind: PhantomData,
        }
    }

    /// Records matching the current search term, recomputed from the full list.
    pub fn filtered(&self) -> Signal<Vec<R::Record>> {
        let records = self.records;
        let term = self.search_term;
        Signal::derive(move || {
            let term = term.get();
            records.with(|list| filter_by_key(list, &term, R::search_key))
        })
    }

    pub fn is_modal_open(&self) -> bool {
        self.selected.with(Option::is_some)
    }

    /// Reactive read of one create-form field.
    pub fn form_field(&self, read: fn(&R::Form) -> &str) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| read(f).to_string()))
    }

    pub fn form_setter(&self, write: fn(&mut R::Form, String)) -> Callback<String> {
        let form = self.form;
        Callback::new(move |value: String| form.update(|f| write(f, value)))
    }

    /// Reactive read of one field of the record open in the modal.
    pub fn selected_field(&self, read: fn(&R::Form) -> &str) -> Signal<String> {
        let selected = self.selected;
        Signal::derive(move || {
            selected.with(|s| s.as_ref().map(|s| read(&s.form).to_string()).unwrap_or_default())
        })
    }

    pub fn selected_setter(&self, write: fn(&mut R::Form, String)) -> Callback<String> {
        let selected = self.selected;
        Callback::new(move |value: String| {
            selected.update(|s| {
                if let Some(selection) = s.as_mut() {
                    write(&mut selection.form, value);
                }
            })
        })
    }

    pub async fn refresh(self) -> Result<(), ApiError> {
        self.loading.set(true);
        let result = self.api.get_value().list::<R>().await;
        self.loading.set(false);
        match result {
            Ok(list) => {
                self.records.set(list);
                Ok(())
            }
            Err(err) => {
                log::error!("failed to load {}: {}", R::COLLECTION, err);
                self.message
                    .update(|msg| msg.set_error(err.user_message(R::TEXT.load_failed)));
                Err(err)
            }
        }
    }

    pub async fn submit(self) -> Result<(), ApiError> {
        let draft = match R::draft_from_form(&self.form.get_untracked()) {
            Ok(draft) => draft,
            Err(err) => {
                self.message
                    .update(|msg| msg.set_error(err.user_message(R::TEXT.create_failed)));
                return Err(err);
            }
        };
        self.submitting.set(true);
        let result = self.api.get_value().create::<R>(&draft).await;
        self.submitting.set(false);
        match result {
            Ok(()) => {
                self.form.set(R::Form::default());
                self.message.update(|msg| msg.set_success(R::TEXT.created));
                let _ = self.refresh().await;
                Ok(())
            }
            Err(err) => {
                self.message
                    .update(|msg| msg.set_error(err.user_message(R::TEXT.create_failed)));
                Err(err)
            }
        }
    }

    /// Opens the modal on a fresh copy; stale banners from the page are dropped.
    pub fn select(&self, record: &R::Record) {
        self.confirming_delete.set(false);
        self.message.update(MessageState::clear);
        self.selected.set(Some(Selection {
            id: R::record_id(record),
            form: R::form_from_record(record),
        }));
    }

    pub fn close_modal(&self) {
        self.confirming_delete.set(false);
        self.selected.set(None);
    }

    pub async fn save_selected(self) -> Result<(), ApiError> {
        let Some(selection) = self.selected.get_untracked() else {
            return Ok(());
        };
        let draft = match R::draft_from_form(&selection.form) {
            Ok(draft) => draft,
            Err(err) => {
                self.message
                    .update(|msg| msg.set_error(err.user_message(R::TEXT.update_failed)));
                return Err(err);
            }
        };
        self.submitting.set(true);
        let result = self
            .api
            .get_value()
            .update::<R>(&selection.id, &draft)
            .await;
        self.submitting.set(false);
        match result {
            Ok(()) => {
                self.close_modal();
                self.message.update(|msg| msg.set_success(R::TEXT.updated));
                let _ = self.refresh().await;
                Ok(())
            }
            Err(err) => {
                self.message
                    .update(|msg| msg.set_error(err.user_message(R::TEXT.update_failed)));
                Err(err)
            }
        }
    }

    /// Opens the confirmation; nothing is sent until [`Self::confirm_delete`].
    pub fn request_delete(&self) {
        if self.is_modal_open() {
            self.confirming_delete.set(true);
        }
    }

    /// Dismisses the confirmation and keeps the modal open.
    pub fn cancel_delete(&self) {
        self.confirming_delete.set(false);
    }

    pub async fn confirm_delete(self) -> Result<(), ApiError> {
        self.confirming_delete.set(false);
        let Some(selection) = self.selected.get_untracked() else {
            return Ok(());
        };
        self.submitting.set(true);
        let result = self.api.get_value().remove::<R>(&selection.id).await;
        self.submitting.set(false);
        match result {
            Ok(()) => {
                self.close_modal();
                self.message.update(|msg| msg.set_success(R::TEXT.deleted));
                let _ = self.refresh().await;
                Ok(())
            }
            Err(err) => {
                self.message
                    .update(|msg| msg.set_error(err.user_message(R::TEXT.delete_failed)));
                Err(err)
            }
        }
    }
}

/// View model bound to the client in context, loading once on mount.
pub fn use_resource_view_model<R: EditableResource>() -> ResourceViewModel<R> {
    let vm = ResourceViewModel::<R>::new(crate::state::session::use_api_client());
    create_effect(move |_| {
        spawn_local(async move {
            let _ = vm.refresh().await;
        });
    });
    vm
}
