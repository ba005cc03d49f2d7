//! Input fields shared by the create form and the edit panel.

use dioxus::prelude::*;
use tracker_core::{Field, FormErrors, JobForm, JobStatus, suggest_places};

/// Props for JobFields component.
#[derive(Props, Clone, PartialEq)]
pub struct JobFieldsProps {
    /// Current form values.
    pub form: JobForm,
    /// Inline validation messages.
    pub errors: FormErrors,
    /// Prefix for element ids, so two forms can share a page.
    pub id_prefix: String,
    /// Whether inputs are disabled.
    #[props(default = false)]
    pub disabled: bool,
    /// Callback with the whole form after any field changes.
    pub on_change: EventHandler<JobForm>,
}

/// Controlled inputs for every editable job field.
#[component]
pub fn JobFields(props: JobFieldsProps) -> Element {
    let on_change = props.on_change;
    let current = props.form.clone();
    let edit = move |apply: fn(&mut JobForm, String)| {
        let form = current.clone();
        move |e: FormEvent| {
            let mut next = form.clone();
            apply(&mut next, e.value());
            on_change.call(next);
        }
    };

    let form = &props.form;
    let status_value = form.status.map(|s| s.as_str()).unwrap_or_default();
    let places_id = format!("{}-places", props.id_prefix);
    let places = suggest_places(&form.place);
    let title_error = props.errors.message(Field::Title);
    let company_error = props.errors.message(Field::Company);
    let salary_error = props.errors.message(Field::Salary);
    let date_error = props.errors.message(Field::DateApplied);

    rsx! {
        div { class: "form-group",
            label { "Title *" }
            input {
                r#type: "text",
                value: "{form.title}",
                disabled: props.disabled,
                oninput: edit(|f, v| f.title = v),
            }
            if let Some(msg) = title_error {
                span { class: "field-error", "{msg}" }
            }
        }

        div { class: "form-group",
            label { "Company *" }
            input {
                r#type: "text",
                value: "{form.company}",
                disabled: props.disabled,
                oninput: edit(|f, v| f.company = v),
            }
            if let Some(msg) = company_error {
                span { class: "field-error", "{msg}" }
            }
        }

        div { class: "form-group",
            label { "Status" }
            select {
                value: "{status_value}",
                disabled: props.disabled,
                onchange: edit(|f, v| f.status = v.parse().ok()),

                option { value: "", "—" }
                for status in JobStatus::ALL {
                    option { value: status.as_str(), {status.label()} }
                }
            }
        }

        div { class: "form-group",
            label { "Place" }
            input {
                r#type: "text",
                list: "{places_id}",
                value: "{form.place}",
                disabled: props.disabled,
                oninput: edit(|f, v| f.place = v),
            }
            datalist { id: "{places_id}",
                for place in places {
                    option { value: place }
                }
            }
        }

        div { class: "form-group",
            label { "Salary" }
            input {
                r#type: "text",
                value: "{form.salary}",
                disabled: props.disabled,
                oninput: edit(|f, v| f.salary = v),
            }
            if let Some(msg) = salary_error {
                span { class: "field-error", "{msg}" }
            }
        }

        div { class: "form-group",
            label { "Source" }
            input {
                r#type: "text",
                value: "{form.source}",
                disabled: props.disabled,
                oninput: edit(|f, v| f.source = v),
            }
        }

        div { class: "form-group",
            label { "Date applied" }
            input {
                r#type: "date",
                value: "{form.date_applied}",
                disabled: props.disabled,
                oninput: edit(|f, v| f.date_applied = v),
            }
            if let Some(msg) = date_error {
                span { class: "field-error", "{msg}" }
            }
        }

        div { class: "form-group",
            label { "Notes" }
            textarea {
                rows: 3,
                value: "{form.notes}",
                disabled: props.disabled,
                oninput: edit(|f, v| f.notes = v),
            }
        }
    }
}
