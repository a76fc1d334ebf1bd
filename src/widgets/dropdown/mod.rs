//! Balance dropdown component.
//!
//! [`BalanceDropDown`] is a mounted instance of the widget: it owns the
//! open/close state, the panel height animation and a pointer subscription
//! for outside-click dismissal. Mount it against the host's [`PointerHub`];
//! dropping it (or calling [`BalanceDropDown::unmount`]) releases the
//! subscription.
//!
//! # Example
//!
//! ```
//! use balance_dropdown::{DropDownConfig, PointerHub, widgets::BalanceDropDown};
//!
//! let hub = PointerHub::new();
//! let mut dropdown = BalanceDropDown::mount(DropDownConfig::default(), &hub);
//! assert_eq!(hub.listener_count(), 1);
//!
//! let command = dropdown.toggle();
//! assert_eq!(command.target, 9);
//!
//! dropdown.unmount();
//! assert_eq!(hub.listener_count(), 0);
//! ```

mod controller;
mod view;

use std::{cell::RefCell, rc::Rc, time::Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    widgets::Widget,
};

pub use controller::{HeightCommand, HitRegion, InteractionController, PanelState};
pub use view::{DropDownLayout, DropDownView, font_emphasis, row_at};

use crate::{
    animation::HeightAnimation,
    config::DropDownConfig,
    constants::ROW_HEIGHT,
    format::{NumberLocale, format_balance},
    pointer::{PointerHub, Subscription},
};

// ============================================================================
// Events
// ============================================================================

/// What a pointer interaction inside the widget did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropDownEvent {
    /// The summary control was activated.
    Toggled(PanelState),
    /// A panel row was activated; the panel collapses.
    Selected { index: usize, label: String },
}

// ============================================================================
// Shared state
// ============================================================================

/// State reachable from both the component and its pointer listener.
#[derive(Debug)]
struct Core {
    controller: InteractionController,
    animation: HeightAnimation,
    region: HitRegion,
    hovered: Option<usize>,
}

impl Core {
    fn apply(&mut self, command: HeightCommand, now: Instant) {
        self.animation.retarget(command.target, now);
        if command.target == 0 {
            self.hovered = None;
        }
    }
}

// ============================================================================
// BalanceDropDown
// ============================================================================

/// A mounted balance dropdown.
#[derive(Debug)]
pub struct BalanceDropDown {
    config: DropDownConfig,
    locale: NumberLocale,
    core: Rc<RefCell<Core>>,
    subscription: Subscription,
}

impl BalanceDropDown {
    /// Mount the widget and subscribe to outside pointer activations.
    ///
    /// The props are validated once here; issues are logged and never fatal.
    #[must_use]
    pub fn mount(config: DropDownConfig, hub: &PointerHub) -> Self {
        let config = config.normalized();
        let core = Rc::new(RefCell::new(Core {
            controller: InteractionController::new(config.items.len(), ROW_HEIGHT),
            animation: HeightAnimation::default(),
            region: HitRegion::default(),
            hovered: None,
        }));

        let weak = Rc::downgrade(&core);
        let subscription = hub.subscribe(move |position| {
            let Some(core) = weak.upgrade() else {
                return;
            };
            let mut guard = core.borrow_mut();
            let core = &mut *guard;
            if let Some(command) = core.controller.dismiss_at(position, &core.region) {
                tracing::debug!(
                    "outside activation at ({}, {}) collapsed the panel",
                    position.x,
                    position.y
                );
                core.apply(command, Instant::now());
            }
        });
        tracing::debug!("balance dropdown mounted with {} rows", config.items.len());

        Self {
            config,
            locale: NumberLocale::default(),
            core,
            subscription,
        }
    }

    /// Use `locale` for balance formatting.
    #[must_use]
    pub fn with_locale(mut self, locale: NumberLocale) -> Self {
        self.locale = locale;
        self
    }

    /// Replace the height animation (e.g. a zero-duration one to disable motion).
    #[must_use]
    pub fn with_animation(self, animation: HeightAnimation) -> Self {
        self.core.borrow_mut().animation = animation;
        self
    }

    /// Release the pointer subscription and discard the interaction state.
    pub fn unmount(self) {
        tracing::debug!(
            "balance dropdown unmounted (listener {})",
            self.subscription.id()
        );
    }

    #[must_use]
    pub const fn config(&self) -> &DropDownConfig {
        &self.config
    }

    #[must_use]
    pub const fn locale(&self) -> NumberLocale {
        self.locale
    }

    /// New props from the host. An open panel re-targets to the new row count.
    pub fn set_config(&mut self, config: DropDownConfig) {
        self.config = config.normalized();
        let mut core = self.core.borrow_mut();
        if let Some(command) = core.controller.set_item_count(self.config.items.len()) {
            core.apply(command, Instant::now());
        }
        core.hovered = None;
    }

    #[must_use]
    pub fn state(&self) -> PanelState {
        self.core.borrow().controller.state()
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.state().is_expanded()
    }

    /// Height the panel is animating toward.
    #[must_use]
    pub fn target_height(&self) -> u16 {
        self.core.borrow().animation.target()
    }

    /// Panel height displayed at `now`.
    #[must_use]
    pub fn panel_height_at(&self, now: Instant) -> u16 {
        self.core.borrow().animation.height_at(now)
    }

    /// Whether a height transition is still running at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        !self.core.borrow().animation.is_settled(now)
    }

    /// Region painted by the last render.
    #[must_use]
    pub fn region(&self) -> HitRegion {
        self.core.borrow().region
    }

    /// Row under the pointer, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.core.borrow().hovered
    }

    /// The formatted balance shown in the summary.
    #[must_use]
    pub fn balance_text(&self) -> String {
        format_balance(&self.config.balance, &self.config.currency, self.locale)
    }

    /// Activate the summary control.
    pub fn toggle(&mut self) -> HeightCommand {
        self.toggle_at(Instant::now())
    }

    /// Activate the summary control at `now`.
    pub fn toggle_at(&mut self, now: Instant) -> HeightCommand {
        let mut core = self.core.borrow_mut();
        let command = core.controller.toggle();
        core.apply(command, now);
        command
    }

    /// Handle a mouse event that may land inside the widget.
    ///
    /// Outside activations are handled by the pointer subscription; this
    /// only reacts to presses and movement within the rendered region.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> Option<DropDownEvent> {
        self.handle_mouse_at(event, Instant::now())
    }

    /// [`BalanceDropDown::handle_mouse`] at an explicit time.
    pub fn handle_mouse_at(&mut self, event: MouseEvent, now: Instant) -> Option<DropDownEvent> {
        let position = Position::new(event.column, event.row);
        let mut guard = self.core.borrow_mut();
        let core = &mut *guard;

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if core.region.summary.contains(position) {
                    let command = core.controller.toggle();
                    core.apply(command, now);
                    return Some(DropDownEvent::Toggled(core.controller.state()));
                }

                if !core.controller.is_expanded() {
                    return None;
                }
                let index = row_at(core.region.panel, position, self.config.items.len())?;
                let label = self.config.items.get(index)?.clone();
                if let Some(command) = core.controller.collapse() {
                    core.apply(command, now);
                }
                tracing::debug!("row {index} ({label}) selected");
                Some(DropDownEvent::Selected { index, label })
            }
            MouseEventKind::Moved => {
                core.hovered = if core.controller.is_expanded() {
                    row_at(core.region.panel, position, self.config.items.len())
                } else {
                    None
                };
                None
            }
            _ => None,
        }
    }

    /// Render the frame displayed at `now` and record the painted region.
    ///
    /// The recorded region is the summary box plus the visible panel only.
    /// Blank cells of `area` beside the right-aligned summary count as
    /// outside, since the host draws other content there.
    pub fn render_at(&self, area: Rect, buf: &mut Buffer, now: Instant) {
        let balance = self.balance_text();
        let layout = DropDownLayout::compute(area, &balance, &self.config);

        let (panel_height, expanded, hovered) = {
            let mut core = self.core.borrow_mut();
            let panel_height = core.animation.height_at(now).min(layout.panel.height);
            core.region = HitRegion {
                summary: layout.summary,
                panel: Rect {
                    height: panel_height,
                    ..layout.panel
                },
            };
            (panel_height, core.controller.is_expanded(), core.hovered)
        };

        DropDownView {
            config: &self.config,
            balance: &balance,
            layout,
            panel_height,
            expanded,
            hovered,
        }
        .render(area, buf);
    }
}

impl Widget for &BalanceDropDown {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_at(area, buf, Instant::now());
    }
}

// ============================================================================
// Tests
// ============================================================================
