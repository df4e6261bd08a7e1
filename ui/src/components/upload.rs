//! Cloudinary upload widget
//!
//! The widget script (`https://upload-widget.cloudinary.com/global/all.js`)
//! is loaded by `index.html` and exposes a global `cloudinary` object.

use crate::state::AppState;
use folio::upload::{handle_widget_event, UploadOptions, WidgetResult};
use leptos::prelude::*;
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    type UploadWidget;

    #[wasm_bindgen(catch, js_namespace = cloudinary, js_name = createUploadWidget)]
    fn create_upload_widget(
        options: &JsValue,
        callback: &Closure<dyn FnMut(JsValue, JsValue)>,
    ) -> Result<UploadWidget, JsValue>;

    #[wasm_bindgen(method)]
    fn open(this: &UploadWidget);
}

/// JS value to JSON through the browser's own serializer.
fn to_json(value: &JsValue) -> Option<Value> {
    if value.is_null() || value.is_undefined() {
        return None;
    }
    let text = js_sys::JSON::stringify(value).ok()?.as_string()?;
    serde_json::from_str(&text).ok()
}

fn build_widget(options: &UploadOptions, on_upload: Callback<String>) -> Option<UploadWidget> {
    let options = serde_json::to_string(options)
        .ok()
        .and_then(|json| js_sys::JSON::parse(&json).ok())?;

    let callback = Closure::<dyn FnMut(JsValue, JsValue)>::new(move |error: JsValue, result: JsValue| {
        let error = to_json(&error);
        let result = to_json(&result).and_then(|v| serde_json::from_value::<WidgetResult>(v).ok());
        handle_widget_event(error.as_ref(), result.as_ref(), |url| on_upload.run(url));
    });

    match create_upload_widget(&options, &callback) {
        Ok(widget) => {
            // The widget calls back for as long as the page lives
            callback.forget();
            Some(widget)
        }
        Err(e) => {
            tracing::error!("Cloudinary upload widget unavailable: {:?}", e);
            None
        }
    }
}

/// Image field backed by the upload widget.
///
/// `image_url` is only ever changed through `on_upload`, with the hosted URL
/// of a successful upload.
#[component]
pub fn ImageUpload(
    #[prop(into)] image_url: Signal<String>,
    on_upload: Callback<String>,
    #[prop(default = "Project Image *")] label: &'static str,
) -> impl IntoView {
    let state = expect_context::<AppState>();
    let hint = state.upload.hint();
    let widget: Rc<RefCell<Option<UploadWidget>>> = Rc::new(RefCell::new(None));

    let open_widget = move |_| {
        let mut slot = widget.borrow_mut();
        if slot.is_none() {
            *slot = build_widget(&state.upload, on_upload);
        }
        if let Some(widget) = slot.as_ref() {
            widget.open();
        }
    };
    let has_image = move || !image_url.get().trim().is_empty();

    view! {
        <div>
            <label class="block text-sm font-semibold text-gray-700 mb-2">{label}</label>

            <Show when=has_image>
                <div class="mb-3">
                    <img
                        src=move || image_url.get()
                        alt="Image preview"
                        class="w-full h-48 object-cover rounded-lg border-2 border-gray-300"
                    />
                </div>
            </Show>

            <button
                type="button"
                on:click=open_widget
                class="w-full px-4 py-3 border-2 border-dashed border-blue-400 bg-blue-50 text-blue-600 rounded-lg hover:bg-blue-100 transition-colors font-semibold"
            >
                {move || if has_image() { "Upload Different Image" } else { "Upload Image" }}
            </button>

            <p class="text-xs text-gray-500 mt-2">{hint}</p>
        </div>
    }
}
