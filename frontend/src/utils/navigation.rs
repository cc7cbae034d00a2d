/// Hard navigation to an in-app path.
///
/// The browser build assigns `location.href`; the host build has no window,
/// so tests read back the recorded targets instead.
pub fn navigate_to(path: &str) {
    log::debug!("navigating to {}", path);

    #[cfg(target_arch = "wasm32")]
    {
        match web_sys::window() {
            Some(window) => {
                if window.location().set_href(path).is_err() {
                    log::error!("failed to navigate to {}", path);
                }
            }
            None => log::error!("no window available for navigation"),
        }
    }

    #[cfg(all(test, not(target_arch = "wasm32")))]
    recorded::push(path);
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn records_navigation_targets_in_order() {
        recorded::take();
        navigate_to("/login");
        navigate_to("/");
        assert_eq!(recorded::take(), vec!["/login".to_string(), "/".to_string()]);
        assert!(recorded::take().is_empty());
    }
}
