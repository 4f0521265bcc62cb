use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::relay_alerts;
use crate::features::reminder::ReminderField;
use crate::state::AppState;

#[component]
pub fn CaseReminderPanel() -> impl IntoView {
    let state = expect_context::<AppState>();
    relay_alerts(state.reminder);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        state.save_reminder();
    };

    view! {
        <form id="reminder-form" class="glass-panel rounded-2xl p-6 grid grid-cols-1 md:grid-cols-2 gap-4" on:submit=on_submit>
            <ReminderInput id="rem-title" label="Case title" field=ReminderField::CaseTitle input_type="text" />
            <ReminderInput id="rem-date" label="Due date" field=ReminderField::DueDate input_type="date" />
            <ReminderInput id="rem-recipient" label="Client email" field=ReminderField::Recipient input_type="email" />
            <ReminderInput id="rem-sender" label="Sender email" field=ReminderField::Sender input_type="email" />
            <label class="md:col-span-2 text-xs text-slate-400 space-y-1">
                <span>"Notes"</span>
                <textarea
                    id="rem-notes"
                    rows="3"
                    class="w-full rounded-xl bg-slate-900 border border-slate-700 p-3 text-sm text-white"
                    prop:value=move || state.reminder.with(|r| r.field(ReminderField::Notes).to_string())
                    on:input=move |ev| state.set_reminder_field(ReminderField::Notes, event_target_value(&ev))
                />
            </label>
            <button type="submit" class="md:col-span-2 rounded-xl bg-blue-600 py-3 text-sm font-medium text-white">
                {move || state.reminder.with(|r| r.button_label())}
            </button>
        </form>
    }
}

#[component]
fn ReminderInput(
    id: &'static str,
    label: &'static str,
    field: ReminderField,
    input_type: &'static str,
) -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <label class="text-xs text-slate-400 space-y-1">
            <span>{label}</span>
            <input
                id=id
                type=input_type
                required=true
                class="w-full rounded-xl bg-slate-900 border border-slate-700 px-3 py-2 text-sm text-white"
                prop:value=move || state.reminder.with(|r| r.field(field).to_string())
                on:input=move |ev| state.set_reminder_field(field, event_target_value(&ev))
            />
        </label>
    }
}
