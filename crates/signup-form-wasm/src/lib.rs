//! Signup Form WASM
//!
//! WebAssembly bindings for the signup form controller.
//! The page renders inputs and forwards their events here; this side owns
//! the values, the error messages and the submit event.

use serde::Serialize;
use signup_form::{FormConfig, FormController, Gender, SubmitOutcome, Violation};
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// Maps become plain objects so hosts can read `errors.firstName`.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Form controller exposed to JavaScript
///
/// # Example (JavaScript)
/// ```javascript
/// const form = new SignupForm();
/// form.onSubmit(values => console.log("Form Submitted", values));
///
/// input.addEventListener("input", e => form.setField(e.target.name, e.target.value));
/// checkbox.addEventListener("change", e => form.toggleInterest(e.target.name, e.target.checked));
/// formEl.addEventListener("submit", e => {
///     e.preventDefault();
///     render(form.submit());
/// });
/// ```
#[wasm_bindgen]
pub struct SignupForm {
    inner: FormController,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl SignupForm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> SignupForm {
        SignupForm {
            inner: FormController::new(),
        }
    }

    /// Build a form from a TOML configuration document
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(toml: &str) -> Result<SignupForm, JsValue> {
        let config = FormConfig::from_toml_str(toml).map_err(|e| js_error(format!("{:#}", e)))?;
        Ok(SignupForm {
            inner: FormController::with_config(config),
        })
    }

    /// Change handler for text inputs, the date input and the gender select
    #[wasm_bindgen(js_name = setField)]
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), JsValue> {
        self.inner.set_field(name, value).map_err(js_error)
    }

    /// Change handler for the interest checkboxes
    #[wasm_bindgen(js_name = toggleInterest)]
    pub fn toggle_interest(&mut self, tag: &str, checked: bool) {
        self.inner.toggle_interest(tag, checked);
    }

    #[wasm_bindgen(js_name = togglePasswordVisibility)]
    pub fn toggle_password_visibility(&mut self) {
        self.inner.toggle_password_visibility();
    }

    /// Shared flag for the password and confirm-password inputs
    #[wasm_bindgen(getter, js_name = showPassword)]
    pub fn show_password(&self) -> bool {
        self.inner.show_password()
    }

    /// Current values, keyed by input name
    pub fn values(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.values())
    }

    /// Current error messages, keyed by input name
    pub fn errors(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.errors())
    }

    /// Validate everything and return the new error object (empty on success)
    pub fn submit(&mut self) -> Result<JsValue, JsValue> {
        if let SubmitOutcome::Rejected(errors) = self.inner.submit() {
            web_sys::console::debug_1(&JsValue::from_str(&errors.to_string()));
        }
        to_js(self.inner.errors())
    }

    /// Every violation of the current values, without touching the error object
    pub fn violations(&self) -> Result<JsValue, JsValue> {
        let violations: Vec<Violation> = self.inner.rules().check(self.inner.values());
        to_js(&violations)
    }

    /// Register a callback invoked with the values after a successful submit
    #[wasm_bindgen(js_name = onSubmit)]
    pub fn on_submit(&mut self, callback: js_sys::Function) {
        self.inner.on_submit(move |values| {
            let payload = match to_js(values) {
                Ok(payload) => payload,
                Err(e) => {
                    web_sys::console::error_1(&e);
                    return;
                }
            };
            if let Err(e) = callback.call1(&JsValue::NULL, &payload) {
                web_sys::console::error_1(&e);
            }
        });
    }

    /// Checkbox options for the interests group
    #[wasm_bindgen(js_name = interestOptions)]
    pub fn interest_options(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.config().choices.interests)
    }

    /// Options for the gender select
    #[wasm_bindgen(js_name = genderOptions)]
    pub fn gender_options(&self) -> Result<JsValue, JsValue> {
        let options: Vec<&str> = Gender::ALL.iter().map(|g| g.as_str()).collect();
        to_js(&options)
    }
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    signup_validation::is_valid_email(email)
}
