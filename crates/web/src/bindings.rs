//! Entry points called from the page's buttons.

use goofycoin_client::{ClientConfig, DispatchOutcome, FormController};
use goofycoin_core::SelectList;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::dom::DomForm;
use crate::options::{receiver_options, user_options};

/// WASM entry point, run when the module loads.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
}

fn controller() -> FormController {
    FormController::new(ClientConfig::default())
}

/// Echo a value to the browser console.
fn console_log<T: Serialize + ?Sized>(value: &T) {
    match serde_wasm_bindgen::to_value(value) {
        Ok(js) => web_sys::console::log_1(&js),
        Err(e) => web_sys::console::error_1(&JsValue::from_str(&e.to_string())),
    }
}

/// Validate the create-user form and, if valid, POST the new user.
///
/// Returns immediately; the request completes in the background and its
/// outcome is only logged.
#[wasm_bindgen(js_name = createUser)]
pub fn create_user() {
    let Some(mut form) = DomForm::from_window() else {
        return;
    };
    if let Ok(task) = controller().create_user(&mut form) {
        spawn_local(async move {
            let outcome: DispatchOutcome = task.await;
            console_log(&outcome);
        });
    }
}

/// Validate the create-coin form and echo the draft to the console.
#[wasm_bindgen(js_name = createCoin)]
pub fn create_coin() {
    let Some(mut form) = DomForm::from_window() else {
        return;
    };
    if let Ok(draft) = controller().create_coin(&mut form) {
        console_log(&draft);
    }
}

/// Validate the transfer form and echo the draft to the console.
#[wasm_bindgen(js_name = createTx)]
pub fn create_tx() {
    let Some(mut form) = DomForm::from_window() else {
        return;
    };
    if let Ok(draft) = controller().create_tx(&mut form) {
        console_log(&draft);
    }
}

/// Reload the user and receiver lists from the backend.
#[wasm_bindgen(js_name = refreshUsers)]
pub fn refresh_users() {
    let Some(form) = DomForm::from_window() else {
        return;
    };
    let task = controller().fetch_users();

    spawn_local(async move {
        let users = match task.await {
            Ok(users) => users,
            Err(e) => {
                web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
                return;
            }
        };

        let filled = form
            .set_options(SelectList::SelectUser, &user_options(&users))
            .and_then(|()| form.set_options(SelectList::Receiver, &receiver_options(&users)));
        if let Err(e) = filled {
            web_sys::console::error_1(&e);
        }
    });
}
