use chrono::Utc;
use leptos::*;

use crate::{
    state::session::{use_session, SessionStore},
    utils::{
        navigation::navigate_to,
        token::{authorize, AuthDecision},
    },
};

/// Renders `children` only while the stored token is present and unexpired.
///
/// The check runs on every render against the current clock. A rejected token
/// is dropped from the session before the redirect.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let token = session.token_signal();
    let decision = create_memo(move |_| authorize(token.get().as_deref(), Utc::now()));
    let redirected = store_value(false);

    create_effect(move |_| {
        let decision = decision.get();
        if decision.is_allowed() || redirected.get_value() {
            return;
        }
        redirected.set_value(true);
        leave_protected_route(&decision, &session);
    });

    view! {
        <Show when=move || should_render_children(&decision.get()) fallback=|| ()>
            {children()}
        </Show>
    }
}

/// Drops a rejected token and sends the browser to the login page.
fn leave_protected_route(decision: &AuthDecision, session: &SessionStore) {
    let AuthDecision::Redirect { to, reason } = decision else {
        return;
    };
    match reason {
        Some(reason) => {
            log::warn!("discarding session token: {}", reason);
            session.clear_token();
        }
        None => log::info!("no session, redirecting to {}", to),
    }
    navigate_to(to);
}

fn should_render_children(decision: &AuthDecision) -> bool {
    decision.is_allowed()
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::{leave_protected_route, RequireAuth};
    use crate::test_support::helpers::{expired_token, provide_session, valid_token};
    use crate::test_support::ssr::render_to_string;
    use crate::test_support::with_runtime;
    use crate::utils::{navigation::recorded, token::authorize};
    use chrono::Utc;
    use leptos::*;

    fn redirect_for(token: &str) -> (Option<String>, Vec<String>) {
        with_runtime(|| {
            recorded::take();
            let session = provide_session(Some(token));
            let decision = authorize(session.token().as_deref(), Utc::now());
            leave_protected_route(&decision, &session);
            (session.token(), recorded::take())
        })
    }

    #[test]
    fn expired_token_is_cleared_and_redirected() {
        let (token, navigations) = redirect_for(&expired_token());
        assert_eq!(token, None);
        assert_eq!(navigations, vec!["/login".to_string()]);
    }

    #[test]
    fn undecodable_token_is_cleared_and_redirected() {
        let (token, navigations) = redirect_for("abc.def.ghi");
        assert_eq!(token, None);
        assert_eq!(navigations, vec!["/login".to_string()]);
    }

    #[test]
    fn live_token_stays_put() {
        let live = valid_token();
        let (token, navigations) = redirect_for(&live);
        assert_eq!(token, Some(live));
        assert!(navigations.is_empty());
    }

    fn guarded(token: Option<String>) -> String {
        render_to_string(move || {
            provide_session(token.as_deref());
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        })
    }

    #[test]
    fn require_auth_renders_children_for_live_token() {
        assert!(guarded(Some(valid_token())).contains("protected-content"));
    }

    #[test]
    fn require_auth_hides_children_without_token() {
        assert!(!guarded(None).contains("protected-content"));
    }

    #[test]
    fn require_auth_hides_children_for_expired_token() {
        assert!(!guarded(Some(expired_token())).contains("protected-content"));
    }

    #[test]
    fn require_auth_hides_children_for_undecodable_token() {
        assert!(!guarded(Some("abc.def.ghi".into())).contains("protected-content"));
    }
}
