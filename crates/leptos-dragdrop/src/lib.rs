//! Leptos DragDrop Utilities
//!
//! Free-position dragging for absolutely placed elements using pointer events.
//! The dragged element captures the pointer and is kept inside its container.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, PointerEvent};

/// A point in CSS pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in CSS pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Drag state signals
#[derive(Clone, Copy)]
pub struct DragSignals {
    /// Key of the element currently holding the pointer
    pub active_read: ReadSignal<Option<String>>,
    pub active_write: WriteSignal<Option<String>>,
    /// Pointer offset from the element's top-left corner at grab time
    pub grab_read: ReadSignal<Point>,
    pub grab_write: WriteSignal<Point>,
}

pub fn create_drag_signals() -> DragSignals {
    let (active_read, active_write) = signal(None::<String>);
    let (grab_read, grab_write) = signal(Point::default());
    DragSignals {
        active_read,
        active_write,
        grab_read,
        grab_write,
    }
}

impl DragSignals {
    /// Whether `key` is the element being dragged
    pub fn is_active(&self, key: &str) -> bool {
        self.active_read
            .with_untracked(|active| active.as_deref() == Some(key))
    }

    /// End the drag for `key`. Returns false when `key` was not being dragged.
    pub fn release(&self, key: &str) -> bool {
        if !self.is_active(key) {
            return false;
        }
        self.active_write.set(None);
        true
    }
}

// ========================
// Geometry
// ========================

/// Offset of the pointer from an element's top-left corner
pub fn grab_offset(pointer: Point, element_origin: Point) -> Point {
    Point::new(pointer.x - element_origin.x, pointer.y - element_origin.y)
}

/// Element position relative to the container for the given pointer,
/// clamped to `[0, container - element]` on both axes.
pub fn clamp_to_container(
    pointer: Point,
    container_origin: Point,
    grab: Point,
    container: Size,
    element: Size,
) -> Point {
    let x = pointer.x - container_origin.x - grab.x;
    let y = pointer.y - container_origin.y - grab.y;
    Point::new(
        clamp_axis(x, container.width - element.width),
        clamp_axis(y, container.height - element.height),
    )
}

fn clamp_axis(value: f64, max: f64) -> f64 {
    value.min(max).max(0.0)
}

/// Parse a CSS pixel length such as `"130.5px"`
pub fn parse_px(value: &str) -> Option<f64> {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value).trim();
    number.parse::<f64>().ok().filter(|n| n.is_finite())
}

// ========================
// DOM
// ========================

/// Write `position` to the element's inline `left`/`top`
pub fn place(element: &HtmlElement, position: Point) {
    let style = element.style();
    let _ = style.set_property("left", &format!("{}px", position.x));
    let _ = style.set_property("top", &format!("{}px", position.y));
}

/// Current position from inline `left`/`top`, falling back to the
/// rendered offset for an axis without a usable inline value.
pub fn current_position(element: &HtmlElement) -> Point {
    let style = element.style();
    let left = style.get_property_value("left").ok().and_then(|v| parse_px(&v));
    let top = style.get_property_value("top").ok().and_then(|v| parse_px(&v));
    Point::new(
        left.unwrap_or_else(|| f64::from(element.offset_left())),
        top.unwrap_or_else(|| f64::from(element.offset_top())),
    )
}

/// Create pointerdown handler: captures the pointer and records the grab offset
pub fn make_on_pointerdown(
    drag: DragSignals,
    key: String,
    element: HtmlElement,
) -> impl Fn(PointerEvent) + 'static {
    move |ev: PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let _ = element.set_pointer_capture(ev.pointer_id());
        let rect = element.get_bounding_client_rect();
        let pointer = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
        drag.grab_write.set(grab_offset(pointer, Point::new(rect.left(), rect.top())));
        drag.active_write.set(Some(key.clone()));

        let style = element.style();
        let _ = style.set_property("cursor", "grabbing");
        let _ = style.set_property("z-index", "100");
    }
}

/// Create pointermove handler: moves the active element inside the container
pub fn make_on_pointermove(
    drag: DragSignals,
    key: String,
    element: HtmlElement,
    container: Element,
) -> impl Fn(PointerEvent) + 'static {
    move |ev: PointerEvent| {
        if !drag.is_active(&key) {
            return;
        }
        let bounds = container.get_bounding_client_rect();
        let position = clamp_to_container(
            Point::new(f64::from(ev.client_x()), f64::from(ev.client_y())),
            Point::new(bounds.left(), bounds.top()),
            drag.grab_read.get_untracked(),
            Size::new(bounds.width(), bounds.height()),
            Size::new(f64::from(element.offset_width()), f64::from(element.offset_height())),
        );
        place(&element, position);
    }
}

/// Create pointerup handler: releases capture and reports the drop
pub fn make_on_pointerup<F>(
    drag: DragSignals,
    key: String,
    element: HtmlElement,
    on_drop: F,
) -> impl Fn(PointerEvent) + 'static
where
    F: Fn(&str, &HtmlElement) + 'static,
{
    move |ev: PointerEvent| {
        if !drag.release(&key) {
            return;
        }
        let _ = element.release_pointer_capture(ev.pointer_id());
        reset_style(&element);
        on_drop(&key, &element);
    }
}

/// Create pointercancel/lostpointercapture handler: ends the drag without a drop
pub fn make_on_pointercancel(
    drag: DragSignals,
    key: String,
    element: HtmlElement,
) -> impl Fn(PointerEvent) + 'static {
    move |_ev: PointerEvent| {
        if drag.release(&key) {
            reset_style(&element);
        }
    }
}

fn reset_style(element: &HtmlElement) {
    let style = element.style();
    let _ = style.set_property("cursor", "grab");
    let _ = style.remove_property("z-index");
}

/// Bind pointerdown/move/up/cancel on `element` so it can be dragged inside `container`
pub fn bind_pointer_drag<F>(
    drag: DragSignals,
    key: String,
    element: &HtmlElement,
    container: &Element,
    on_drop: F,
) where
    F: Fn(&str, &HtmlElement) + 'static,
{
    let on_down = Closure::<dyn Fn(PointerEvent)>::new(make_on_pointerdown(
        drag,
        key.clone(),
        element.clone(),
    ));
    let on_move = Closure::<dyn Fn(PointerEvent)>::new(make_on_pointermove(
        drag,
        key.clone(),
        element.clone(),
        container.clone(),
    ));
    let on_up = Closure::<dyn Fn(PointerEvent)>::new(make_on_pointerup(
        drag,
        key.clone(),
        element.clone(),
        on_drop,
    ));
    let on_cancel = Closure::<dyn Fn(PointerEvent)>::new(make_on_pointercancel(
        drag,
        key,
        element.clone(),
    ));

    let _ = element.add_event_listener_with_callback("pointerdown", on_down.as_ref().unchecked_ref());
    let _ = element.add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref());
    let _ = element.add_event_listener_with_callback("pointerup", on_up.as_ref().unchecked_ref());
    for event in ["pointercancel", "lostpointercapture"] {
        let _ = element.add_event_listener_with_callback(event, on_cancel.as_ref().unchecked_ref());
    }
    on_down.forget();
    on_move.forget();
    on_up.forget();
    on_cancel.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: Size = Size { width: 600.0, height: 400.0 };
    const SEAT: Size = Size { width: 40.0, height: 30.0 };

    #[test]
    fn test_clamp_inside_container() {
        let origin = Point::new(100.0, 50.0);
        let grab = Point::new(10.0, 5.0);
        let pos = clamp_to_container(Point::new(240.0, 102.0), origin, grab, MAP, SEAT);
        assert_eq!(pos, Point::new(130.0, 47.0));
    }

    #[test]
    fn test_clamp_past_edges() {
        let origin = Point::new(100.0, 50.0);
        let grab = Point::new(10.0, 5.0);

        let top_left = clamp_to_container(Point::new(-500.0, -500.0), origin, grab, MAP, SEAT);
        assert_eq!(top_left, Point::new(0.0, 0.0));

        let bottom_right = clamp_to_container(Point::new(5000.0, 5000.0), origin, grab, MAP, SEAT);
        assert_eq!(bottom_right, Point::new(560.0, 370.0));
    }

    #[test]
    fn test_clamp_holds_along_a_drag_path() {
        let origin = Point::new(20.0, 20.0);
        let grab = Point::new(35.0, 25.0);
        let mut pointer = Point::new(-300.0, 900.0);
        while pointer.x < 1200.0 {
            let pos = clamp_to_container(pointer, origin, grab, MAP, SEAT);
            assert!(pos.x >= 0.0 && pos.x <= MAP.width - SEAT.width);
            assert!(pos.y >= 0.0 && pos.y <= MAP.height - SEAT.height);
            pointer.x += 37.5;
            pointer.y -= 23.0;
        }
    }

    #[test]
    fn test_clamp_element_larger_than_container() {
        let big = Size::new(800.0, 500.0);
        let pos = clamp_to_container(Point::new(300.0, 300.0), Point::default(), Point::default(), MAP, big);
        assert_eq!(pos, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_grab_offset() {
        let grab = grab_offset(Point::new(150.0, 80.0), Point::new(140.0, 60.0));
        assert_eq!(grab, Point::new(10.0, 20.0));
    }

    #[test]
    fn test_release_ends_only_the_active_drag() {
        let drag = create_drag_signals();
        drag.active_write.set(Some("41".to_string()));

        assert!(!drag.release("42"));
        assert!(drag.is_active("41"));

        assert!(drag.release("41"));
        assert!(!drag.is_active("41"));
        assert!(!drag.release("41"));
    }

    #[test]
    fn test_parse_px() {
        assert_eq!(parse_px("130px"), Some(130.0));
        assert_eq!(parse_px(" 47.6px "), Some(47.6));
        assert_eq!(parse_px("12"), Some(12.0));
        assert_eq!(parse_px(""), None);
        assert_eq!(parse_px("auto"), None);
    }
}
