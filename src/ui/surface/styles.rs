// SPDX-License-Identifier: MPL-2.0
//! Shared style sheet and class names.
//!
//! The sheet is injected once per document, keyed by [`STYLE_BLOCK_ID`].
//! Entry animations depend on the container's position class: toasts slide
//! in from the anchored side and settle once they carry [`class::VISIBLE`].

use super::Surface;

/// Id of the `<style>` element holding [`STYLES`].
pub const STYLE_BLOCK_ID: &str = "toast-rack-styles";

/// Class names shared by the style sheet and the manager.
pub mod class {
    /// Fixed-position container holding every toast.
    pub const CONTAINER: &str = "toast-container";
    /// A single toast.
    pub const TOAST: &str = "toast";
    /// Marker that moves a toast into its visible state.
    pub const VISIBLE: &str = "toast-visible";
    /// Icon slot inside a toast.
    pub const ICON: &str = "toast-icon";
    /// Message slot inside a toast.
    pub const MESSAGE: &str = "toast-message";
}

pub const STYLES: &str = r#"
.toast-container {
    position: fixed;
    display: flex;
    flex-direction: column;
    gap: 10px;
    z-index: 9999;
    pointer-events: none;
}

.toast-pos-top-right { top: 20px; right: 20px; align-items: flex-end; }
.toast-pos-bottom-right { bottom: 20px; right: 20px; align-items: flex-end; }
.toast-pos-top-left { top: 20px; left: 20px; align-items: flex-start; }
.toast-pos-bottom-left { bottom: 20px; left: 20px; align-items: flex-start; }
.toast-pos-top-center { top: 20px; left: 50%; transform: translateX(-50%); align-items: center; }
.toast-pos-bottom-center { bottom: 20px; left: 50%; transform: translateX(-50%); align-items: center; }

.toast {
    display: flex;
    align-items: center;
    min-width: 300px;
    max-width: 450px;
    padding: 12px 16px;
    background: #ffffff;
    border-radius: 8px;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
    border-left: 4px solid transparent;
    pointer-events: auto;
    font-size: 14px;
    color: #333;
    cursor: pointer;
    opacity: 0;
    transition: opacity 0.3s ease, transform 0.3s cubic-bezier(0.2, 0.8, 0.2, 1);
}

.toast-icon { width: 20px; height: 20px; margin-right: 12px; flex-shrink: 0; }
.toast-success { border-left-color: #10b981; } .toast-success .toast-icon { color: #10b981; }
.toast-error { border-left-color: #ef4444; } .toast-error .toast-icon { color: #ef4444; }
.toast-warning { border-left-color: #f59e0b; } .toast-warning .toast-icon { color: #f59e0b; }
.toast-info { border-left-color: #3b82f6; } .toast-info .toast-icon { color: #3b82f6; }

.toast-pos-top-right .toast, .toast-pos-bottom-right .toast { transform: translateX(30px); }
.toast-pos-top-left .toast, .toast-pos-bottom-left .toast { transform: translateX(-30px); }
.toast-pos-top-center .toast { transform: translateY(-30px); }
.toast-pos-bottom-center .toast { transform: translateY(30px); }

.toast.toast-visible {
    opacity: 1;
    transform: translate(0, 0) !important;
}
"#;

/// Injects [`STYLES`] into the document head unless already present.
///
/// Returns `true` if a new style block was created.
pub fn inject<S: Surface>(surface: &mut S) -> bool {
    if surface.element_by_id(STYLE_BLOCK_ID).is_some() {
        return false;
    }
    let block = surface.create_element("style");
    surface.set_id(block, STYLE_BLOCK_ID);
    surface.set_text(block, STYLES);
    surface.append_to_head(block);
    true
}
