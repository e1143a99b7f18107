//! Post-logout navigation guard for protected pages.
//!
//! Once per protected page instance the guard marks the tab with a
//! sessionStorage flag, reacts to the server's `logged_out` cookie by clearing
//! that flag and leaving for the login page, and then pins the user to the
//! current history entry: a duplicate entry is pushed so the first back action
//! has somewhere harmless to land, every `popstate` is answered with a forward
//! step, and a back-forward cache restore forces a network reload so the
//! server re-checks the session instead of the browser replaying stale DOM.
//!
//! This is a UX deterrent only. The API must reject unauthenticated requests
//! on its own; nothing here can stop a client that disables storage or
//! history APIs.

mod cookie;
mod decision;

use leptos::prelude::*;

/// Wraps a protected page and installs the guard once on mount.
#[component]
pub fn NavigationGuard(children: Children) -> impl IntoView {
    install_guard();

    view! { {children()} }
}

#[cfg(target_arch = "wasm32")]
fn install_guard() {
    use crate::app_lib::config::AppConfig;
    use leptos::ev;
    use leptos_dom::helpers::window_event_listener;

    let Some(window) = web_sys::window() else {
        return;
    };

    let observed = decision::evaluate(
        logout_cookie(&window).as_deref(),
        session_flag_present(&window),
    );
    apply_flag_update(&window, observed.flag);
    if observed.redirect_to_login {
        let login_path = AppConfig::load().login_path;
        log::debug!("logout cookie detected, leaving for {login_path}");
        if window.location().set_href(&login_path).is_err() {
            log::warn!("navigation guard could not redirect to the login page");
        }
    }

    push_duplicate_entry(&window);

    let pageshow = window_event_listener(ev::pageshow, |event| {
        if decision::must_reload(event.persisted()) {
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        }
    });
    // Reserved hook point for cleanup or telemetry before the page is left.
    let beforeunload = window_event_listener(ev::beforeunload, |_| {});
    let popstate = window_event_listener(ev::popstate, |_| {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.go_with_delta(decision::BACK_NAVIGATION_RESPONSE);
            }
        }
    });

    on_cleanup(move || {
        pageshow.remove();
        beforeunload.remove();
        popstate.remove();
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn install_guard() {}

/// Reads the `logged_out` cookie, treating any failure as "absent".
#[cfg(target_arch = "wasm32")]
fn logout_cookie(window: &web_sys::Window) -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = window.document()?;
    let header = document.dyn_ref::<web_sys::HtmlDocument>()?.cookie().ok()?;
    cookie::cookie_value(&header, decision::LOGGED_OUT_COOKIE)
}

#[cfg(target_arch = "wasm32")]
fn session_flag_present(window: &web_sys::Window) -> bool {
    window
        .session_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(decision::SESSION_FLAG_KEY).ok().flatten())
        .is_some()
}

#[cfg(target_arch = "wasm32")]
fn apply_flag_update(window: &web_sys::Window, update: decision::FlagUpdate) {
    let Some(storage) = window.session_storage().ok().flatten() else {
        return;
    };
    let result = match update {
        decision::FlagUpdate::Set => {
            storage.set_item(decision::SESSION_FLAG_KEY, decision::SESSION_FLAG_VALUE)
        }
        decision::FlagUpdate::Clear => storage.remove_item(decision::SESSION_FLAG_KEY),
        decision::FlagUpdate::Keep => Ok(()),
    };
    if result.is_err() {
        log::debug!("sessionStorage rejected the session flag update");
    }
}

/// Duplicates the current entry at the top of the history stack so the next
/// back action stays on this page.
#[cfg(target_arch = "wasm32")]
fn push_duplicate_entry(window: &web_sys::Window) {
    use wasm_bindgen::JsValue;

    let Ok(history) = window.history() else {
        return;
    };
    let Ok(href) = window.location().href() else {
        return;
    };
    let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&href));
}
