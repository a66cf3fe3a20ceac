use std::path::Path;

use dioxus::prelude::*;

use super::{use_data_source, use_language_marker};
use crate::components::{use_toaster, ToastKind};
use crate::data::{validate_upload_name, FetchOutcome, FileUpload};
use crate::t;

/// Desktop file engines report full paths; browsers report bare names.
fn display_name(picked: &str) -> String {
    Path::new(picked)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| picked.to_string())
}

#[component]
pub fn UploadSurvey() -> Element {
    let _lang = use_language_marker();
    let source = use_data_source();
    let toaster = use_toaster();
    let mut selected = use_signal(|| None::<FileUpload>);
    let mut busy = use_signal(|| false);

    let on_pick = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(picked) = engine.files().into_iter().next() else {
            return;
        };
        let name = display_name(&picked);
        if validate_upload_name(&name).is_err() {
            selected.set(None);
            toaster.push(ToastKind::Error, t!("upload-invalid-type", name = name));
            return;
        }
        match engine.read_file(&picked).await {
            Some(bytes) => match FileUpload::new(name, bytes) {
                Ok(upload) => selected.set(Some(upload)),
                Err(err) => toaster.push(ToastKind::Error, err.to_string()),
            },
            None => toaster.push(ToastKind::Error, t!("upload-read-failed", name = name)),
        }
    };

    let on_submit = move |_: MouseEvent| {
        let source = source.clone();
        async move {
            let Some(upload) = selected() else {
                return;
            };
            let name = upload.file_name.clone();
            busy.set(true);
            match source.upload_file(upload).await {
                FetchOutcome::Success(receipt) => {
                    tracing::info!(file = %name, message = ?receipt.message, "survey uploaded");
                    selected.set(None);
                    toaster.push(ToastKind::Success, t!("upload-success", name = name));
                }
                FetchOutcome::NotFound => {
                    toaster.push(ToastKind::Error, t!("upload-failed", name = name));
                }
                FetchOutcome::Error(err) => {
                    tracing::warn!(file = %name, "upload failed: {err}");
                    toaster.push(ToastKind::Error, t!("upload-failed", name = name));
                }
            }
            busy.set(false);
        }
    };

    let selected_name = selected.read().as_ref().map(|u| u.file_name.clone());
    let can_submit = selected_name.is_some() && !busy();

    rsx! {
        section { class: "page page-upload",
            h1 { {t!("upload-title")} }
            p { class: "page__lead", {t!("upload-intro")} }
            div { class: "card upload-form",
                label { class: "upload-form__picker",
                    span { {t!("upload-choose")} }
                    input {
                        r#type: "file",
                        accept: ".xlsx",
                        multiple: false,
                        onchange: on_pick,
                    }
                }
                if let Some(name) = selected_name {
                    p { class: "upload-form__selected", {t!("upload-selected", name = name)} }
                }
                button {
                    class: "button button--primary",
                    r#type: "button",
                    disabled: !can_submit,
                    onclick: on_submit,
                    if busy() {
                        {t!("upload-in-progress")}
                    } else {
                        {t!("upload-submit")}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_strips_directories() {
        assert_eq!(display_name("/home/me/wave2.xlsx"), "wave2.xlsx");
        assert_eq!(display_name("wave2.xlsx"), "wave2.xlsx");
    }
}
