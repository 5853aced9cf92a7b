use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlCanvasElement, HtmlElement, Window};

use super::three::{self, Object3D};
use super::timeline::{scroll_progress, ScenePose, ScrollRange, ScrollTimeline, ScrubFollower};
use crate::config;
use crate::dom;
use crate::error::SetupError;
use crate::frame_loop::{frame_delta, FrameLoop};

pub const CANVAS_ID: &str = "bg-canvas";
pub const STAR_COUNT: usize = 5_000;
pub const STARFIELD_SPAN: f32 = 50.0;
pub const MAX_PIXEL_RATIO: f64 = 2.0;

const FOV: f32 = 75.0;
const NEAR: f32 = 0.1;
const FAR: f32 = 1000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub texture: &'static str,
    pub scale: f32,
    pub position: [f32; 3],
}

pub const ROCKET: Sprite = Sprite {
    texture: "rocket.png",
    scale: 1.0,
    position: [0.0, -4.0, 1.0],
};
pub const EARTH: Sprite = Sprite {
    texture: "earth.png",
    scale: 5.0,
    position: [0.0, -5.0, 0.0],
};
pub const MOON: Sprite = Sprite {
    texture: "moon.png",
    scale: 4.0,
    position: [0.0, 10.0, -5.0],
};

#[derive(Serialize)]
struct PointsMaterialParams {
    size: f32,
    color: u32,
}

/// Flat `[x, y, z, x, y, z, ...]` buffer of `count` points, each coordinate
/// drawn from `random() ∈ [0, 1)` and spread over `[-span/2, span/2)`.
pub fn star_positions(count: usize, span: f32, mut random: impl FnMut() -> f32) -> Vec<f32> {
    (0..count * 3).map(|_| (random() - 0.5) * span).collect()
}

pub fn pixel_ratio(device_pixel_ratio: f64) -> f64 {
    device_pixel_ratio.min(MAX_PIXEL_RATIO)
}

pub fn aspect_ratio(width: f64, height: f64) -> f32 {
    if height <= 0.0 {
        1.0
    } else {
        (width / height) as f32
    }
}

fn js_object(entries: &[(&str, &JsValue)]) -> Result<JsValue, SetupError> {
    let object = js_sys::Object::new();
    for (key, value) in entries {
        js_sys::Reflect::set(&object, &JsValue::from_str(key), value)?;
    }
    Ok(object.into())
}

pub struct SpaceScene {
    scene: three::Scene,
    camera: three::PerspectiveCamera,
    renderer: three::WebGLRenderer,
    rocket: three::Mesh,
    stars: three::Points,
}

impl SpaceScene {
    /// Builds the scene on `#bg-canvas`, or reports why it can't.
    pub fn new(window: &Window, document: &Document) -> Result<Self, SetupError> {
        if !three::is_available() {
            return Err(SetupError::Unavailable("THREE"));
        }
        let canvas = document
            .get_element_by_id(CANVAS_ID)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or(SetupError::MissingElement("#bg-canvas"))?;

        let (width, height) = dom::viewport(window);
        let scene = three::Scene::new();
        let camera = three::PerspectiveCamera::new(FOV, aspect_ratio(width, height), NEAR, FAR);

        let renderer = three::WebGLRenderer::new(&js_object(&[
            ("canvas", &JsValue::from(canvas)),
            ("alpha", &JsValue::TRUE),
            ("antialias", &JsValue::TRUE),
        ])?)?;

        let loader = three::TextureLoader::new();
        let build_sprite = |sprite: &Sprite| -> Result<three::Mesh, SetupError> {
            let texture = loader.load(&config::asset_url(sprite.texture));
            texture.set_mag_filter(three::NEAREST_FILTER);
            texture.set_min_filter(three::NEAREST_FILTER);
            let material = three::MeshBasicMaterial::new(&js_object(&[
                ("map", &JsValue::from(texture)),
                ("transparent", &JsValue::TRUE),
            ])?);
            let mesh = three::Mesh::new(&three::PlaneGeometry::new(1.0, 1.0), &material);
            mesh.scale().set(sprite.scale, sprite.scale, sprite.scale);
            let [x, y, z] = sprite.position;
            mesh.position().set(x, y, z);
            Ok(mesh)
        };
        let rocket = build_sprite(&ROCKET)?;
        let earth = build_sprite(&EARTH)?;
        let moon = build_sprite(&MOON)?;

        let positions = star_positions(STAR_COUNT, STARFIELD_SPAN, || js_sys::Math::random() as f32);
        let geometry = three::BufferGeometry::new();
        let buffer = js_sys::Float32Array::from(positions.as_slice());
        geometry.set_attribute("position", &three::BufferAttribute::new(&buffer, 3));
        let params = serde_wasm_bindgen::to_value(&PointsMaterialParams {
            size: 0.02,
            color: 0xAAAAAA,
        })
        .map_err(|e| SetupError::Js(e.to_string()))?;
        let stars = three::Points::new(&geometry, &three::PointsMaterial::new(&params));

        let objects: [&Object3D; 4] = [&rocket, &earth, &moon, &stars];
        for object in objects {
            scene.add(object);
        }

        let space = Self {
            scene,
            camera,
            renderer,
            rocket,
            stars,
        };
        space.resize(window);
        space.apply(&ScenePose::INITIAL);
        Ok(space)
    }

    pub fn apply(&self, pose: &ScenePose) {
        let p = pose.rocket_position;
        self.rocket.position().set(p.x, p.y, p.z);
        let r = pose.rocket_rotation;
        self.rocket.rotation().set(r.x, r.y, r.z);
        let c = pose.camera_position;
        self.camera.position().set(c.x, c.y, c.z);
        let s = pose.stars_position;
        self.stars.position().set(s.x, s.y, s.z);
    }

    pub fn resize(&self, window: &Window) {
        let (width, height) = dom::viewport(window);
        self.camera.set_aspect(aspect_ratio(width, height));
        self.camera.update_projection_matrix();
        self.renderer.set_size(width, height);
        self.renderer.set_pixel_ratio(pixel_ratio(window.device_pixel_ratio()));
    }

    pub fn render(&self) {
        self.renderer.render(&self.scene, &self.camera);
    }
}

fn content_range(window: &Window, content: &HtmlElement) -> ScrollRange {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let rect = content.get_bounding_client_rect();
    let (_, viewport_height) = dom::viewport(window);
    ScrollRange::for_content(rect.top() + scroll_y, rect.height(), viewport_height)
}

struct ScrubState {
    timeline: ScrollTimeline,
    follower: ScrubFollower,
    last_frame: Option<f64>,
}

/// The running background: scene, scroll scrubbing, resize handling and the
/// render loop. Dropping it stops all of them.
pub struct Background {
    _resize: EventListener,
    _frames: FrameLoop,
}

impl Background {
    pub fn install(window: &Window, document: &Document, space: SpaceScene) -> Result<Self, SetupError> {
        let content = dom::query_one(document, "main")?;
        let space = Rc::new(space);

        let target_progress = {
            let window = window.clone();
            move || scroll_progress(window.scroll_y().unwrap_or(0.0), content_range(&window, &content))
        };

        let state = Rc::new(RefCell::new(ScrubState {
            timeline: ScrollTimeline::launch(),
            follower: ScrubFollower::new(target_progress(), ScrubFollower::DEFAULT_LAG_SECS),
            last_frame: None,
        }));

        let resize_space = space.clone();
        let resize_window = window.clone();
        let resize = EventListener::new(window, "resize", move |_| {
            resize_space.resize(&resize_window);
        });

        let frames = FrameLoop::start(move |now| {
            let mut state = state.borrow_mut();
            let dt = frame_delta(state.last_frame, now);
            state.last_frame = Some(now);
            let progress = state.follower.step(target_progress(), dt);
            space.apply(&state.timeline.pose(progress));
            space.render();
        });

        log::info!("background scene running with {} stars", STAR_COUNT);
        Ok(Self {
            _resize: resize,
            _frames: frames,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_fill_a_cube_centred_on_the_origin() {
        let mut seed = 0u32;
        let mut lcg = || {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (seed >> 8) as f32 / (1u32 << 24) as f32
        };
        let positions = star_positions(STAR_COUNT, STARFIELD_SPAN, &mut lcg);
        assert_eq!(positions.len(), STAR_COUNT * 3);
        assert!(positions.iter().all(|v| (-25.0..25.0).contains(v)));
        assert!(positions.iter().any(|v| *v < -20.0));
        assert!(positions.iter().any(|v| *v > 20.0));
    }

    #[test]
    fn extreme_random_values_map_to_the_cube_faces() {
        assert_eq!(star_positions(1, 50.0, || 0.0), vec![-25.0; 3]);
        assert_eq!(star_positions(1, 50.0, || 0.5), vec![0.0; 3]);
    }

    #[test]
    fn pixel_ratio_is_capped_at_two() {
        assert_eq!(pixel_ratio(1.0), 1.0);
        assert_eq!(pixel_ratio(1.5), 1.5);
        assert_eq!(pixel_ratio(3.0), 2.0);
    }

    #[test]
    fn aspect_survives_a_collapsed_viewport() {
        assert!((aspect_ratio(1920.0, 1080.0) - 16.0 / 9.0).abs() < 1e-6);
        assert_eq!(aspect_ratio(800.0, 0.0), 1.0);
    }

    #[test]
    fn sprites_start_where_the_timeline_expects() {
        assert_eq!(ROCKET.position, ScenePose::INITIAL.rocket_position.to_array());
        assert!(EARTH.scale > MOON.scale && MOON.scale > ROCKET.scale);
    }
}
