//! Global handler for authorization failures.
//!
//! Components never check for 401s themselves: the client wrapper calls
//! [`notify_unauthorized`] and whatever handler the application registered
//! decides how to get the user back to the sign-in screen. Without a
//! registered handler the default is a hard location change.

use crate::config::AuthConfig;
use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    static UNAUTHORIZED_HANDLER: RefCell<Option<Rc<dyn Fn()>>> = const { RefCell::new(None) };
}

/// Register the handler invoked on any authorization failure.
pub fn set_unauthorized_handler(handler: Rc<dyn Fn()>) {
    UNAUTHORIZED_HANDLER.with(|cb| {
        *cb.borrow_mut() = Some(handler);
    });
}

/// Remove the registered handler.
pub fn clear_unauthorized_handler() {
    UNAUTHORIZED_HANDLER.with(|cb| {
        *cb.borrow_mut() = None;
    });
}

/// Invoke the registered handler, or redirect to the login screen if none
/// is registered.
pub fn notify_unauthorized() {
    let handled = UNAUTHORIZED_HANDLER.with(|cb| {
        if let Some(handler) = cb.borrow().as_ref() {
            handler();
            true
        } else {
            false
        }
    });

    if !handled {
        redirect_to_login();
    }
}

/// Client-side navigation to the sign-in screen.
pub fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(AuthConfig::LOGIN_PATH);
    }
}
