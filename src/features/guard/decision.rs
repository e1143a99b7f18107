//! Pure decision core for the post-logout navigation guard. Everything here is
//! a function of plain values so it can be unit-tested without a DOM; the
//! browser shell in the parent module applies the results to storage, history,
//! and location.

/// Cookie the server sets once per logout.
pub const LOGGED_OUT_COOKIE: &str = "logged_out";
/// Cookie value that signals the session ended. Exact, case-sensitive match.
pub const LOGGED_OUT_VALUE: &str = "true";
/// Tab-local sessionStorage key marking "this tab has seen a protected page".
pub const SESSION_FLAG_KEY: &str = "authenticated";
/// Stored value of the session flag. Only presence matters.
pub const SESSION_FLAG_VALUE: &str = "true";

/// How many history entries to move on a detected back navigation. Each back
/// step is answered by one forward step, trapping the user on the current
/// entry.
pub const BACK_NAVIGATION_RESPONSE: i32 = 1;

/// What to do with the tab-local session flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlagUpdate {
    Set,
    Clear,
    Keep,
}

/// Outcome of inspecting the logout cookie and the session flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuardDecision {
    pub flag: FlagUpdate,
    pub redirect_to_login: bool,
}

/// Decides the guard's setup actions from the ambient signals it observed.
///
/// A `logged_out` cookie holding exactly `"true"` means the session ended:
/// the flag is cleared and the browser must navigate to the login page. Any
/// other value, or no cookie at all, is the normal path: the flag is set if
/// missing and the page proceeds.
pub fn evaluate(cookie_value: Option<&str>, flag_present: bool) -> GuardDecision {
    if cookie_value == Some(LOGGED_OUT_VALUE) {
        return GuardDecision {
            flag: FlagUpdate::Clear,
            redirect_to_login: true,
        };
    }

    GuardDecision {
        flag: if flag_present {
            FlagUpdate::Keep
        } else {
            FlagUpdate::Set
        },
        redirect_to_login: false,
    }
}

/// A page redisplayed from the back-forward cache must be refetched from the
/// network so server-side auth checks run again; a fresh load is left alone.
pub fn must_reload(persisted: bool) -> bool {
    persisted
}

#[cfg(test)]
mod tests {
    use super::{BACK_NAVIGATION_RESPONSE, FlagUpdate, evaluate, must_reload};

    #[test]
    fn absent_cookie_sets_missing_flag_without_redirect() {
        let decision = evaluate(None, false);
        assert_eq!(decision.flag, FlagUpdate::Set);
        assert!(!decision.redirect_to_login);
    }

    #[test]
    fn absent_cookie_keeps_existing_flag() {
        // Running setup again in the same tab must not toggle the flag.
        let decision = evaluate(None, true);
        assert_eq!(decision.flag, FlagUpdate::Keep);
        assert!(!decision.redirect_to_login);
    }

    #[test]
    fn logged_out_cookie_clears_flag_and_redirects() {
        for flag_present in [false, true] {
            let decision = evaluate(Some("true"), flag_present);
            assert_eq!(decision.flag, FlagUpdate::Clear);
            assert!(decision.redirect_to_login);
        }
    }

    #[test]
    fn cookie_match_is_exact_and_case_sensitive() {
        for value in ["True", "TRUE", "false", "", " true", "true "] {
            let decision = evaluate(Some(value), false);
            assert_eq!(decision.flag, FlagUpdate::Set);
            assert!(!decision.redirect_to_login, "value {value:?} must not redirect");
        }
    }

    #[test]
    fn only_persisted_page_shows_trigger_a_reload() {
        assert!(must_reload(true));
        assert!(!must_reload(false));
    }

    #[test]
    fn back_navigation_is_answered_by_one_forward_step() {
        assert_eq!(BACK_NAVIGATION_RESPONSE, 1);
    }
}
