//! Effect Math
//!
//! The numbers behind the visual effects, kept apart from the DOM.

/// Reveal stagger per element, seconds
const STAGGER_STEP_S: f64 = 0.1;
/// Tilt sensitivity: degrees = pixels from centre / this
const TILT_DIVISOR: f64 = 20.0;
/// Parallax speed per `.shape` index
const PARALLAX_STEP: f64 = 0.1;
/// Frames in a counter animation
pub const COUNTER_STEPS: u32 = 50;
/// Total counter animation time, ms
pub const COUNTER_DURATION_MS: u32 = 2000;
/// Navbar switches to its compact style past this scroll offset
pub const NAVBAR_SCROLLED_AFTER: f64 = 100.0;
/// A section counts as current once scrolled within this distance of its top
pub const SECTION_LEAD: f64 = 200.0;
/// Anchor scrolling stops this far above the target (fixed navbar)
pub const ANCHOR_OFFSET: i32 = 80;

pub const TILT_RESET: &str = "perspective(1000px) rotateX(0) rotateY(0) scale3d(1, 1, 1)";

/// `transition-delay` for the `index`th revealed element
pub fn stagger_delay(index: usize) -> String {
    format!("{:.1}s", index as f64 * STAGGER_STEP_S)
}

/// Card transform for a pointer at (`x`, `y`) inside a `width` x `height` box
pub fn tilt_transform(x: f64, y: f64, width: f64, height: f64) -> String {
    let rotate_x = (y - height / 2.0) / TILT_DIVISOR;
    let rotate_y = (width / 2.0 - x) / TILT_DIVISOR;
    format!(
        "perspective(1000px) rotateX({}deg) rotateY({}deg) scale3d(1.02, 1.02, 1.02)",
        rotate_x, rotate_y
    )
}

/// Pointer position as percentages of the card box
pub fn glow_position(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (50.0, 50.0);
    }
    (x / width * 100.0, y / height * 100.0)
}

/// Vertical shift for the `index`th parallax shape
pub fn parallax_transform(scrolled: f64, index: usize) -> String {
    let speed = (index as f64 + 1.0) * PARALLAX_STEP;
    format!("translateY({}px)", scrolled * speed)
}

/// Values shown by a counting-up animation, one per frame, ending at `target`
pub fn counter_steps(target: u32) -> impl Iterator<Item = u32> {
    (1..=COUNTER_STEPS).map(move |i| (u64::from(target) * u64::from(i) / u64::from(COUNTER_STEPS)) as u32)
}

/// Id of the last section whose top (minus the lead) has been scrolled past
pub fn active_section<'a>(sections: &'a [(String, f64)], scroll_y: f64) -> Option<&'a str> {
    sections
        .iter()
        .filter(|(_, top)| scroll_y >= top - SECTION_LEAD)
        .last()
        .map(|(id, _)| id.as_str())
}

/// Add `token` to a whitespace list; `None` if it is already there
pub fn add_token(existing: Option<&str>, token: &str) -> Option<String> {
    let existing = existing.unwrap_or("");
    if existing.split_whitespace().any(|t| t == token) {
        return None;
    }
    if existing.trim().is_empty() {
        Some(token.to_string())
    } else {
        Some(format!("{} {}", existing.trim(), token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_is_a_tenth_per_index() {
        assert_eq!(stagger_delay(0), "0.0s");
        assert_eq!(stagger_delay(3), "0.3s");
        assert_eq!(stagger_delay(12), "1.2s");
    }

    #[test]
    fn tilt_is_flat_at_centre() {
        assert_eq!(
            tilt_transform(100.0, 50.0, 200.0, 100.0),
            "perspective(1000px) rotateX(0deg) rotateY(0deg) scale3d(1.02, 1.02, 1.02)"
        );
    }

    #[test]
    fn tilt_leans_toward_pointer() {
        // top-left corner: tip the top edge back, turn left edge in
        assert_eq!(
            tilt_transform(0.0, 0.0, 200.0, 100.0),
            "perspective(1000px) rotateX(-2.5deg) rotateY(5deg) scale3d(1.02, 1.02, 1.02)"
        );
    }

    #[test]
    fn glow_percentages() {
        assert_eq!(glow_position(50.0, 25.0, 200.0, 100.0), (25.0, 25.0));
        assert_eq!(glow_position(10.0, 10.0, 0.0, 100.0), (50.0, 50.0));
    }

    #[test]
    fn parallax_speeds_up_per_shape() {
        assert_eq!(parallax_transform(100.0, 0), "translateY(10px)");
        assert_eq!(parallax_transform(100.0, 1), "translateY(20px)");
    }

    #[test]
    fn counter_ends_on_target() {
        let steps: Vec<u32> = counter_steps(100).collect();
        assert_eq!(steps.len(), COUNTER_STEPS as usize);
        assert_eq!(steps[0], 2);
        assert_eq!(*steps.last().unwrap(), 100);
        assert!(steps.windows(2).all(|w| w[0] <= w[1]));

        let small: Vec<u32> = counter_steps(3).collect();
        assert_eq!(small[0], 0);
        assert_eq!(*small.last().unwrap(), 3);
    }

    #[test]
    fn active_section_follows_scroll() {
        let sections = vec![
            ("home".to_string(), 0.0),
            ("about".to_string(), 800.0),
            ("projects".to_string(), 1600.0),
        ];
        assert_eq!(active_section(&sections, 0.0), Some("home"));
        assert_eq!(active_section(&sections, 599.0), Some("home"));
        assert_eq!(active_section(&sections, 600.0), Some("about"));
        assert_eq!(active_section(&sections, 5000.0), Some("projects"));
        assert_eq!(active_section(&[("late".to_string(), 900.0)], 0.0), None);
    }

    #[test]
    fn tokens_are_claimed_once() {
        assert_eq!(add_token(None, "reveal").as_deref(), Some("reveal"));
        assert_eq!(add_token(Some("reveal"), "tilt").as_deref(), Some("reveal tilt"));
        assert_eq!(add_token(Some("reveal tilt"), "tilt"), None);
        assert_eq!(add_token(Some("  "), "glow").as_deref(), Some("glow"));
    }
}
