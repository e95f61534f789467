use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::error;
use rand::rngs::ThreadRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

use super::audio::SoundBank;
use super::config::{WINDOW_HEIGHT, WINDOW_WIDTH};
use super::render;
use super::state::SandboxState;
use super::types::{InputEvent, Key, Point};

/// Shared between the frame loop and the DOM listeners; everything runs on the UI thread.
struct Runtime {
	state: SandboxState,
	sounds: SoundBank,
	rng: ThreadRng,
}

impl Runtime {
	fn dispatch(&mut self, event: InputEvent) {
		if let Some(cue) = self.state.handle(event, &mut self.rng) {
			self.sounds.play(cue);
		}
	}
}

#[component]
pub fn SandboxCanvas(
	/// Click distance within which a vertex can be picked by the edge tool.
	#[prop(default = Some(18.0))]
	hit_radius: Option<f64>,
	/// Ignore `hit_radius` and always pick the nearest vertex.
	#[prop(default = false)]
	unbounded_hit: bool,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let runtime: Rc<RefCell<Option<Runtime>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let keydown_cb: Rc<RefCell<Option<Closure<dyn FnMut(KeyboardEvent)>>>> =
		Rc::new(RefCell::new(None));
	let pagehide_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (runtime_init, animate_init, keydown_init, pagehide_init) = (
		runtime.clone(),
		animate.clone(),
		keydown_cb.clone(),
		pagehide_cb.clone(),
	);
	let hit_radius = if unbounded_hit { None } else { hit_radius };

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			error!("no window available");
			return;
		};

		canvas.set_width(WINDOW_WIDTH as u32);
		canvas.set_height(WINDOW_HEIGHT as u32);

		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(ctx)) => match ctx.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => {
					error!("canvas context is not 2d");
					return;
				}
			},
			_ => {
				error!("could not acquire a 2d canvas context");
				return;
			}
		};
		*runtime_init.borrow_mut() = Some(Runtime {
			state: SandboxState::new(WINDOW_WIDTH, WINDOW_HEIGHT, hit_radius),
			sounds: SoundBank::load(),
			rng: rand::thread_rng(),
		});

		let runtime_key = runtime_init.clone();
		*keydown_init.borrow_mut() = Some(Closure::new(move |ev: KeyboardEvent| {
			let key = Key::from_dom(&ev.key());
			let ctrl = ev.ctrl_key() || ev.meta_key();
			if !key.is_bound(ctrl) {
				return;
			}
			ev.prevent_default();
			if let Some(ref mut rt) = *runtime_key.borrow_mut() {
				rt.dispatch(InputEvent::KeyPressed { key, ctrl });
			}
		}));
		if let Some(ref cb) = *keydown_init.borrow() {
			let _ = window.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
		}

		let runtime_hide = runtime_init.clone();
		*pagehide_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut rt) = *runtime_hide.borrow_mut() {
				rt.dispatch(InputEvent::Closed);
			}
		}));
		if let Some(ref cb) = *pagehide_init.borrow() {
			let _ = window.add_event_listener_with_callback("pagehide", cb.as_ref().unchecked_ref());
		}

		let (runtime_anim, animate_inner) = (runtime_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let open = match *runtime_anim.borrow() {
				Some(ref rt) => {
					render::render(&rt.state, &ctx);
					rt.state.is_open()
				}
				None => true,
			};
			if !open {
				return;
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let local_point = move |ev: &MouseEvent| -> Option<Point> {
		let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
		let rect = canvas.get_bounding_client_rect();
		Some(Point::new(
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		))
	};

	let runtime_md = runtime.clone();
	let on_mousedown = move |ev: MouseEvent| {
		// left button only
		if ev.button() != 0 {
			return;
		}
		let Some(p) = local_point(&ev) else {
			return;
		};
		if let Some(ref mut rt) = *runtime_md.borrow_mut() {
			rt.dispatch(InputEvent::LeftClick(p));
		}
	};

	let runtime_mm = runtime.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(p) = local_point(&ev) else {
			return;
		};
		if let Some(ref mut rt) = *runtime_mm.borrow_mut() {
			rt.dispatch(InputEvent::MouseMoved(p));
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="sandbox-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:contextmenu=|ev: MouseEvent| ev.prevent_default()
			style="display: block; cursor: crosshair;"
		/>
	}
}
