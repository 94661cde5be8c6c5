//! Seat Layout Editor
//!
//! Attaches drag handling to the server-rendered seat map, keeps the save
//! control and status line in sync with the layout state, and guards page
//! unload while moves are unsaved.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{bind_pointer_drag, create_drag_signals, current_position, DragSignals};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{BeforeUnloadEvent, Element, HtmlButtonElement, HtmlElement, MouseEvent};

use crate::commands;
use crate::context::AdminContext;
use crate::dom;
use crate::error::AdminError;
use crate::layout::LayoutState;
use crate::models::SeatPosition;

pub const MAP_ID: &str = "map";
pub const SAVE_BUTTON_ID: &str = "save-btn";
pub const STATUS_ID: &str = "status";
pub const SEAT_SELECTOR: &str = ".seat-admin";
const SEAT_ID_ATTRIBUTE: &str = "data-id";

const DISABLED_CLASS: &str = "opacity-50";
const HIGHLIGHT_CLASSES: [&str; 3] = ["ring-2", "ring-blue-400", "animate-pulse"];

/// One editor per seat map
#[derive(Clone, Copy)]
pub struct SeatLayoutEditor {
    ctx: AdminContext,
    pub state: RwSignal<LayoutState>,
    drag: DragSignals,
}

impl SeatLayoutEditor {
    /// Attach to `#map` if the page has one
    pub fn attach(ctx: AdminContext) -> Result<Option<Self>, AdminError> {
        let document = dom::document()?;
        let Some(map) = document.get_element_by_id(MAP_ID) else {
            return Ok(None);
        };

        let editor = Self {
            ctx,
            state: RwSignal::new(LayoutState::default()),
            drag: create_drag_signals(),
        };

        let seats = editor.bind_seats(&map);
        log::info!("[LAYOUT] Seat editor attached to {} seats", seats);

        match document
            .get_element_by_id(SAVE_BUTTON_ID)
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        {
            Some(button) => editor.bind_save_button(button, map),
            None => log::warn!("[LAYOUT] #{} missing, positions cannot be saved", SAVE_BUTTON_ID),
        }
        if let Some(status) = document.get_element_by_id(STATUS_ID) {
            editor.bind_status_line(status);
        }
        editor.bind_unload_guard()?;

        Ok(Some(editor))
    }

    fn bind_seats(&self, map: &Element) -> usize {
        let seats: Vec<HtmlElement> = dom::query_all(map, SEAT_SELECTOR);
        for seat in &seats {
            let key = seat.get_attribute(SEAT_ID_ATTRIBUTE).unwrap_or_default();
            let state = self.state;
            bind_pointer_drag(self.drag, key, seat, map, move |id, el| {
                let code = dom::trimmed_text(el);
                log::debug!("[LAYOUT] Seat {} ({}) moved", code, id);
                state.update(|s| s.seat_moved(&code));
            });
        }
        seats.len()
    }

    /// Mirror `save_enabled`/`save_highlighted` onto the button and save on click
    fn bind_save_button(&self, button: HtmlButtonElement, map: Element) {
        let state = self.state;
        let target = button.clone();
        Effect::new(move |_| {
            let (enabled, highlighted) = state.with(|s| (s.save_enabled(), s.save_highlighted()));
            target.set_disabled(!enabled);
            let classes = target.class_list();
            let _ = classes.toggle_with_force(DISABLED_CLASS, !enabled);
            for class in HIGHLIGHT_CLASSES {
                let _ = classes.toggle_with_force(class, highlighted);
            }
        });

        let editor = *self;
        let on_click = Closure::<dyn Fn(MouseEvent)>::new(move |_: MouseEvent| {
            editor.save(map.clone());
        });
        let _ = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }

    fn bind_status_line(&self, status: Element) {
        let state = self.state;
        Effect::new(move |_| {
            let status_value = state.with(|s| s.status.clone());
            if let (Some(icon), Some(message)) = (status_value.icon(), status_value.message()) {
                status.set_inner_html(icon);
                let _ = status.append_with_str_1(&message);
            }
        });
    }

    /// Native "leave site?" prompt while moves are unsaved
    fn bind_unload_guard(&self) -> Result<(), AdminError> {
        let state = self.state;
        let on_unload = Closure::<dyn Fn(BeforeUnloadEvent)>::new(move |ev: BeforeUnloadEvent| {
            if state.with_untracked(|s| s.dirty) {
                ev.prevent_default();
                ev.set_return_value("");
            }
        });
        dom::window()?
            .add_event_listener_with_callback("beforeunload", on_unload.as_ref().unchecked_ref())
            .map_err(|_| AdminError::Dom("failed to bind beforeunload".to_string()))?;
        on_unload.forget();
        Ok(())
    }

    /// Persist every seat's current position in one request
    pub fn save(&self, map: Element) {
        if !self.state.try_update(|s| s.begin_save()).unwrap_or(false) {
            return;
        }
        let positions = snapshot_positions(&map);
        let url = self.ctx.save_positions_url();
        let csrf = self.ctx.csrf_token();
        let state = self.state;

        spawn_local(async move {
            let result = commands::save_positions(&url, &positions, csrf.as_deref()).await;
            match &result {
                Ok(response) if response.ok => {
                    log::info!("[LAYOUT] Saved {} seat positions", response.updated)
                }
                Ok(response) => log::warn!("[LAYOUT] Save rejected: {:?}", response.error),
                Err(err) => log::error!("[LAYOUT] Save failed: {}", err),
            }
            state.update(|s| s.finish_save(result));
        });
    }
}

/// Id and rounded pixel position of every seat on the map, in document order
pub fn snapshot_positions(map: &Element) -> Vec<SeatPosition> {
    dom::query_all::<HtmlElement>(map, SEAT_SELECTOR)
        .iter()
        .map(|seat| {
            let id = seat.get_attribute(SEAT_ID_ATTRIBUTE).unwrap_or_default();
            let position = current_position(seat);
            SeatPosition::from_pixels(id, position.x, position.y)
        })
        .collect()
}
