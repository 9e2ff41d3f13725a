use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use neo_site_core::ParticleField;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};
use yew::prelude::*;

use crate::context::use_site;
use crate::dom;

type FrameCallback = Closure<dyn FnMut(f64)>;
type FrameSlot = Rc<RefCell<Option<FrameCallback>>>;

/// Stops the frame loop when dropped.
struct Animation {
    alive: Rc<Cell<bool>>,
}

impl Drop for Animation {
    fn drop(&mut self) {
        self.alive.set(false);
    }
}

fn request_frame(win: &Window, slot: &FrameSlot) {
    if let Some(cb) = slot.borrow().as_ref()
        && let Err(err) = win.request_animation_frame(cb.as_ref().unchecked_ref())
    {
        log::warn!("animation frame refused: {}", dom::js_error_message(&err));
    }
}

/// Match the backing store to the displayed size; returns the drawable size.
fn fit(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let width = u32::try_from(canvas.client_width()).unwrap_or(0);
    let height = u32::try_from(canvas.client_height()).unwrap_or(0);
    if canvas.width() != width {
        canvas.set_width(width);
    }
    if canvas.height() != height {
        canvas.set_height(height);
    }
    (f64::from(width), f64::from(height))
}

fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField, elapsed_s: f64, w: f64, h: f64) {
    ctx.clear_rect(0.0, 0.0, w, h);
    for p in field.project(elapsed_s, w, h) {
        let [r, g, b] = p.rgb;
        ctx.set_fill_style_str(&format!("rgba({r}, {g}, {b}, 0.8)"));
        ctx.begin_path();
        if ctx.arc(p.x, p.y, p.size, 0.0, TAU).is_ok() {
            ctx.fill();
        }
    }
}

fn start(canvas: &NodeRef, points: usize) -> Option<Animation> {
    let win = dom::window()?;
    let el = canvas.cast::<HtmlCanvasElement>()?;
    let ctx = match el.get_context("2d") {
        Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok()?,
        Ok(None) => {
            log::warn!("2d canvas unsupported, hero backdrop disabled");
            return None;
        }
        Err(err) => {
            log::warn!("hero canvas unavailable: {}", dom::js_error_message(&err));
            return None;
        }
    };

    let mut rng = ChaCha8Rng::seed_from_u64(dom::entropy_seed());
    let field = ParticleField::new(points, &mut rng);
    let alive = Rc::new(Cell::new(true));
    let slot: FrameSlot = Rc::new(RefCell::new(None));

    let callback = {
        let alive = alive.clone();
        let slot = slot.clone();
        let win = win.clone();
        let mut origin: Option<f64> = None;
        FrameCallback::new(move |ts: f64| {
            if !alive.get() {
                // Breaks the self-reference so the closure is freed.
                let _ = slot.borrow_mut().take();
                return;
            }
            let start = *origin.get_or_insert(ts);
            let (w, h) = fit(&el);
            draw(&ctx, &field, (ts - start) / 1000.0, w, h);
            request_frame(&win, &slot);
        })
    };
    *slot.borrow_mut() = Some(callback);
    request_frame(&win, &slot);
    Some(Animation { alive })
}

/// Rotating point cloud behind the hero copy.
#[function_component(HeroCanvas)]
pub fn hero_canvas() -> Html {
    let points = use_site().map_or(1500, |ctx| ctx.config.hero_points);
    let canvas = use_node_ref();
    {
        let canvas = canvas.clone();
        use_effect_with(points, move |&points| {
            let animation = start(&canvas, points);
            move || drop(animation)
        });
    }
    html! {
        <canvas id="heroCanvas" class="hero__canvas" aria-hidden="true" ref={canvas}></canvas>
    }
}
