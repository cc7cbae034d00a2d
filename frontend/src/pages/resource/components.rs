use leptos::*;

use super::{utils::MessageState, view_model::ResourceViewModel, EditableResource};
use crate::components::{
    confirm_dialog::ConfirmDialog,
    layout::{ErrorMessage, LoadingSpinner, SuccessMessage},
};

pub const INPUT_CLASS: &str = "w-full p-2 border rounded";
const HEADER_CELL_CLASS: &str = "border p-2 text-left";
const CELL_CLASS: &str = "border p-2";

#[component]
pub fn MessageBanner(message: RwSignal<MessageState>) -> impl IntoView {
    move || {
        let state = message.get();
        if let Some(error) = state.error {
            view! { <ErrorMessage message=error/> }.into_view()
        } else if let Some(success) = state.success {
            view! { <SuccessMessage message=success/> }.into_view()
        } else {
            ().into_view()
        }
    }
}

#[component]
pub fn FormInput(
    #[prop(into)] name: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] list: Option<&'static str>,
) -> impl IntoView {
    view! {
        <input
            type=input_type
            name=name
            placeholder=placeholder
            list=list
            required=true
            class=INPUT_CLASS
            prop:value=move || value.get()
            on:input=move |ev| on_input.call(event_target_value(&ev))
        />
    }
}

/// `<select>` over a fixed set of string values.
#[component]
pub fn FormSelect(
    #[prop(into)] name: String,
    options: &'static [&'static str],
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    view! {
        <select
            name=name
            required=true
            class=INPUT_CLASS
            prop:value=move || value.get()
            on:change=move |ev| on_change.call(event_target_value(&ev))
        >
            {placeholder.map(|text| view! { <option value="">{text}</option> })}
            {options
                .iter()
                .map(|option| {
                    view! {
                        <option value=*option selected=move || value.get() == *option>
                            {*option}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

pub fn create_form<R, F, V>(vm: ResourceViewModel<R>, fields: F) -> impl IntoView
where
    R: EditableResource,
    F: FnOnce() -> V,
    V: IntoView,
{
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let _ = vm.submit().await;
        });
    };
    view! {
        <section class="mb-6">
            <h2 class="text-2xl font-semibold mb-4">{R::TEXT.form_title}</h2>
            <form on:submit=on_submit class="grid grid-cols-1 md:grid-cols-2 gap-4">
                {fields()}
                <button
                    type="submit"
                    class="col-span-1 md:col-span-2 bg-blue-500 hover:bg-blue-600 text-white py-2 rounded disabled:opacity-50"
                    disabled=move || vm.submitting.get()
                >
                    {R::TEXT.submit_label}
                </button>
            </form>
        </section>
    }
}

pub fn search_box<R: EditableResource>(vm: ResourceViewModel<R>) -> impl IntoView {
    view! {
        <section class="mb-6">
            <h3 class="text-xl font-semibold mb-2">{R::TEXT.search_title}</h3>
            <input
                type="search"
                placeholder="Search by Employee ID"
                class="p-2 border rounded w-full sm:w-64"
                prop:value=move || vm.search_term.get()
                on:input=move |ev| vm.search_term.set(event_target_value(&ev))
            />
        </section>
    }
}

/// Spinner row while loading, a "not found" row when nothing matches,
/// otherwise one clickable row per filtered record.
pub fn records_table<R: EditableResource>(vm: ResourceViewModel<R>) -> impl IntoView {
    let filtered = vm.filtered();
    let column_count = R::COLUMNS.len().to_string();
    let body = move || {
        if vm.loading.get() {
            return view! {
                <tr>
                    <td colspan=column_count.clone() class="py-4">
                        <LoadingSpinner label=R::TEXT.loading/>
                    </td>
                </tr>
            }
            .into_view();
        }
        let rows = filtered.get();
        if rows.is_empty() {
            return view! {
                <tr>
                    <td colspan=column_count.clone() class="text-center py-4 text-red-500 font-medium">
                        {R::TEXT.empty}
                    </td>
                </tr>
            }
            .into_view();
        }
        rows.into_iter()
            .map(|record| {
                let cells = R::cells(&record)
                    .into_iter()
                    .map(|cell| view! { <td class=CELL_CLASS>{cell}</td> })
                    .collect_view();
                view! {
                    <tr class="cursor-pointer hover:bg-gray-100" on:click=move |_| vm.select(&record)>
                        {cells}
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <section>
            <h3 class="text-xl font-semibold mb-2">{R::TEXT.list_title}</h3>
            <div class="overflow-x-auto">
                <table class="w-full table-auto border-collapse bg-white">
                    <thead>
                        <tr class="bg-gray-200">
                            {R::COLUMNS
                                .iter()
                                .map(|column| view! { <th class=HEADER_CELL_CLASS>{*column}</th> })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            </div>
        </section>
    }
}

/// Edit overlay for the selected record, with Update / Delete / Cancel and
/// the delete confirmation layered on top.
pub fn edit_modal<R, F, V>(vm: ResourceViewModel<R>, fields: F) -> impl IntoView
where
    R: EditableResource,
    F: Fn() -> V + 'static,
    V: IntoView,
{
    let open = create_memo(move |_| vm.is_modal_open());
    let modal_error = move || {
        vm.message
            .get()
            .error
            .map(|error| view! { <ErrorMessage message=error/> })
    };
    let on_update = move |_: ev::MouseEvent| {
        spawn_local(async move {
            let _ = vm.save_selected().await;
        });
    };
    let on_confirm = Callback::new(move |_: ()| {
        spawn_local(async move {
            let _ = vm.confirm_delete().await;
        });
    });
    let on_cancel_delete = Callback::new(move |_: ()| vm.cancel_delete());

    move || {
        open.get().then(|| {
            view! {
                <div class="fixed inset-0 flex items-center justify-center backdrop-blur-sm bg-white/40 z-50">
                    <div
                        class="bg-white p-6 rounded-lg shadow-xl w-[90%] sm:w-[400px] space-y-2"
                        role="dialog"
                        aria-modal="true"
                    >
                        <h2 class="text-xl font-semibold mb-4">{R::TEXT.modal_title}</h2>
                        {modal_error}
                        {fields()}
                        <div class="flex justify-between mt-4">
                            <button
                                type="button"
                                class="bg-green-500 hover:bg-green-600 text-white px-4 py-2 rounded disabled:opacity-50"
                                disabled=move || vm.submitting.get()
                                on:click=on_update
                            >
                                "Update"
                            </button>
                            <button
                                type="button"
                                class="bg-red-500 hover:bg-red-600 text-white px-4 py-2 rounded"
                                on:click=move |_| vm.request_delete()
                            >
                                "Delete"
                            </button>
                            <button
                                type="button"
                                class="bg-gray-300 hover:bg-gray-400 px-4 py-2 rounded"
                                on:click=move |_| vm.close_modal()
                            >
                                "Cancel"
                            </button>
                        </div>
                    </div>
                    <ConfirmDialog
                        is_open=Signal::derive(move || vm.confirming_delete.get())
                        title="Confirm delete"
                        message=R::TEXT.confirm_delete
                        on_confirm=on_confirm
                        on_cancel=on_cancel_delete
                        confirm_label="Delete"
                        destructive=true
                    />
                </div>
            }
        })
    }
}

/// Heading, banner, create form, search box, table and edit modal in one
/// page body.
pub fn resource_page<R, FF, FV, MF, MV>(
    vm: ResourceViewModel<R>,
    form_fields: FF,
    modal_fields: MF,
) -> impl IntoView
where
    R: EditableResource,
    FF: FnOnce() -> FV,
    FV: IntoView,
    MF: Fn() -> MV + 'static,
    MV: IntoView,
{
    view! {
        <div class="p-4 max-w-6xl mx-auto bg-white rounded shadow">
            <MessageBanner message=vm.message/>
            {create_form(vm, form_fields)}
            {search_box(vm)}
            {records_table(vm)}
            {edit_modal(vm, modal_fields)}
        </div>
    }
}
