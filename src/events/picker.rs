use crate::core::Preset;
use crate::dom;
use crate::viewer::SharedState;
use fnv::FnvHashMap;
use std::rc::Rc;
use web_sys as web;

/// Preset buttons plus the shared state they drive.
pub struct Picker {
    buttons: FnvHashMap<Preset, web::Element>,
    root: Option<web::Element>,
    state: SharedState,
}

impl Picker {
    /// Render one button per preset into `container` and wire the clicks.
    pub fn build(
        document: &web::Document,
        container: &web::Element,
        state: SharedState,
    ) -> anyhow::Result<Rc<Picker>> {
        container.set_inner_html("");
        _ = container.set_attribute("role", "group");
        _ = container.set_attribute("aria-label", "Lighting preset");

        let mut buttons = FnvHashMap::default();
        for preset in Preset::ALL {
            let btn = document
                .create_element("button")
                .map_err(|e| anyhow::anyhow!("create button: {:?}", e))?;
            _ = btn.set_attribute("type", "button");
            _ = btn.set_attribute("data-preset", preset.name());
            _ = btn.set_attribute("aria-pressed", "false");
            btn.set_class_name("preset-button");
            btn.set_text_content(Some(preset.label()));
            container
                .append_child(&btn)
                .map_err(|e| anyhow::anyhow!("append button: {:?}", e))?;
            buttons.insert(preset, btn);
        }

        let picker = Rc::new(Picker {
            buttons,
            root: document.document_element(),
            state,
        });
        for (preset, btn) in &picker.buttons {
            let preset = *preset;
            let p = picker.clone();
            dom::add_click_listener(btn, move || {
                p.select(preset);
            });
            let enter = btn.clone();
            dom::listen(btn, "pointerenter", move |_: web::PointerEvent| {
                _ = enter.class_list().add_1("is-hover");
            });
            let leave = btn.clone();
            dom::listen(btn, "pointerleave", move |_: web::PointerEvent| {
                _ = leave.class_list().remove_1("is-hover");
            });
        }
        Ok(picker)
    }

    /// Select `preset`. Returns false when it was already active.
    pub fn select(&self, preset: Preset) -> bool {
        if !self.state.borrow_mut().preset.select(preset) {
            return false;
        }
        self.sync_dom(preset);
        log::info!("[preset] {}", preset);
        true
    }

    /// Mirror `preset` into button states and the page accent colour.
    pub fn sync_dom(&self, preset: Preset) {
        for (p, btn) in &self.buttons {
            let active = *p == preset;
            _ = btn.class_list().toggle_with_force("is-active", active);
            _ = btn.set_attribute("aria-pressed", if active { "true" } else { "false" });
        }
        if let Some(root) = &self.root {
            let env = preset.environment();
            dom::set_style(root, "--accent", env.accent);
            _ = root.set_attribute("data-preset", preset.name());
        }
    }
}
