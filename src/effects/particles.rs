//! Background Particles

use wasm_bindgen::JsValue;
use web_sys::Document;

const CONTAINER_ID: &str = "particles-container";
const KEYFRAMES_ID: &str = "particle-keyframes";

const COLORS: &[&str] = &["#00f0ff", "#7b2dff", "#ff00ea", "#00ff88"];

const KEYFRAMES: &str = "
    @keyframes particleFloat {
        0%, 100% { transform: translateY(0) translateX(0) scale(1); opacity: 0.3; }
        25% { transform: translateY(-30px) translateX(20px) scale(1.1); opacity: 0.6; }
        50% { transform: translateY(-50px) translateX(-10px) scale(0.9); opacity: 0.4; }
        75% { transform: translateY(-20px) translateX(-30px) scale(1.05); opacity: 0.5; }
    }
";

/// Randomised look of one particle
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleStyle {
    /// px, 1..5
    pub size: f64,
    /// % of viewport
    pub x: f64,
    pub y: f64,
    /// s, 10..30
    pub duration: f64,
    /// s, 0..5
    pub delay: f64,
    /// 0.2..0.7
    pub opacity: f64,
    pub color: &'static str,
}

impl ParticleStyle {
    /// Draw from `rand`, which yields values in `[0, 1)`
    pub fn random(mut rand: impl FnMut() -> f64) -> Self {
        let size = rand() * 4.0 + 1.0;
        let x = rand() * 100.0;
        let y = rand() * 100.0;
        let duration = rand() * 20.0 + 10.0;
        let delay = rand() * 5.0;
        let color_index = ((rand() * COLORS.len() as f64) as usize).min(COLORS.len() - 1);
        let opacity = rand() * 0.5 + 0.2;
        Self {
            size,
            x,
            y,
            duration,
            delay,
            opacity,
            color: COLORS[color_index],
        }
    }

    pub fn css(&self) -> String {
        format!(
            "position: fixed; width: {size}px; height: {size}px; background: {color}; border-radius: 50%; \
             left: {x}%; top: {y}%; opacity: {opacity}; box-shadow: 0 0 {glow}px {color}; \
             animation: particleFloat {duration}s ease-in-out {delay}s infinite; pointer-events: none;",
            size = self.size,
            color = self.color,
            x = self.x,
            y = self.y,
            opacity = self.opacity,
            glow = self.size * 2.0,
            duration = self.duration,
            delay = self.delay,
        )
    }
}

/// Fill `#particles-container` with `count` floating dots
pub fn spawn(document: &Document, count: usize) -> Result<(), JsValue> {
    let Some(container) = document.get_element_by_id(CONTAINER_ID) else {
        return Ok(());
    };
    inject_keyframes(document)?;

    for _ in 0..count {
        let style = ParticleStyle::random(js_sys::Math::random);
        let particle = document.create_element("div")?;
        particle.set_class_name("particle");
        particle.set_attribute("style", &style.css())?;
        container.append_child(&particle)?;
    }
    Ok(())
}

fn inject_keyframes(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(KEYFRAMES_ID).is_some() {
        return Ok(());
    }
    let Some(head) = document.head() else {
        return Ok(());
    };
    let style = document.create_element("style")?;
    style.set_id(KEYFRAMES_ID);
    style.set_text_content(Some(KEYFRAMES));
    head.append_child(&style)?;
    Ok(())
}
