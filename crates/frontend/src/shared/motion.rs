use web_sys::window;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// `true` when the user asked the OS to minimise animations.
pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Inline style for the staggered fade-up of hero items (`@keyframes fade-up`).
pub fn stagger_style(index: usize, step_ms: u32, base_delay_ms: u32) -> String {
    let delay = base_delay_ms + step_ms * index as u32;
    format!("animation: fade-up 0.3s ease-out {}ms both;", delay)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_style() {
        assert_eq!(
            stagger_style(0, 100, 100),
            "animation: fade-up 0.3s ease-out 100ms both;"
        );
        assert_eq!(
            stagger_style(3, 100, 100),
            "animation: fade-up 0.3s ease-out 400ms both;"
        );
    }
}
