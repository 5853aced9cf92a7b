//! Bindings for the slice of three.js the background scene uses. The library
//! is loaded from a `<script>` tag and exposed as the global `THREE`.

use wasm_bindgen::prelude::*;

/// `THREE.NearestFilter`
pub const NEAREST_FILTER: u32 = 1003;

/// Whether the page loaded three.js.
pub fn is_available() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("THREE")).unwrap_or(false)
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = THREE)]
    pub type Scene;

    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new() -> Scene;

    #[wasm_bindgen(method)]
    pub fn add(this: &Scene, object: &Object3D);

    #[wasm_bindgen(js_namespace = THREE)]
    pub type Object3D;

    #[wasm_bindgen(method, getter)]
    pub fn position(this: &Object3D) -> Vector3;

    #[wasm_bindgen(method, getter)]
    pub fn rotation(this: &Object3D) -> Euler;

    #[wasm_bindgen(method, getter)]
    pub fn scale(this: &Object3D) -> Vector3;

    #[wasm_bindgen(js_namespace = THREE)]
    pub type Vector3;

    #[wasm_bindgen(method)]
    pub fn set(this: &Vector3, x: f32, y: f32, z: f32) -> Vector3;

    #[wasm_bindgen(js_namespace = THREE)]
    pub type Euler;

    #[wasm_bindgen(method)]
    pub fn set(this: &Euler, x: f32, y: f32, z: f32) -> Euler;

    #[wasm_bindgen(extends = Object3D, js_namespace = THREE)]
    pub type PerspectiveCamera;

    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> PerspectiveCamera;

    #[wasm_bindgen(method, setter)]
    pub fn set_aspect(this: &PerspectiveCamera, aspect: f32);

    #[wasm_bindgen(method, js_name = updateProjectionMatrix)]
    pub fn update_projection_matrix(this: &PerspectiveCamera);

    #[wasm_bindgen(js_namespace = THREE)]
    pub type WebGLRenderer;

    #[wasm_bindgen(constructor, catch, js_namespace = THREE)]
    pub fn new(parameters: &JsValue) -> Result<WebGLRenderer, JsValue>;

    #[wasm_bindgen(method, js_name = setSize)]
    pub fn set_size(this: &WebGLRenderer, width: f64, height: f64);

    #[wasm_bindgen(method, js_name = setPixelRatio)]
    pub fn set_pixel_ratio(this: &WebGLRenderer, ratio: f64);

    #[wasm_bindgen(method)]
    pub fn render(this: &WebGLRenderer, scene: &Scene, camera: &PerspectiveCamera);

    #[wasm_bindgen(js_namespace = THREE)]
    pub type TextureLoader;

    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new() -> TextureLoader;

    #[wasm_bindgen(method)]
    pub fn load(this: &TextureLoader, url: &str) -> Texture;

    #[wasm_bindgen(js_namespace = THREE)]
    pub type Texture;

    #[wasm_bindgen(method, setter = magFilter)]
    pub fn set_mag_filter(this: &Texture, filter: u32);

    #[wasm_bindgen(method, setter = minFilter)]
    pub fn set_min_filter(this: &Texture, filter: u32);

    #[wasm_bindgen(js_namespace = THREE)]
    pub type MeshBasicMaterial;

    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(parameters: &JsValue) -> MeshBasicMaterial;

    #[wasm_bindgen(js_namespace = THREE)]
    pub type PlaneGeometry;

    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(width: f32, height: f32) -> PlaneGeometry;

    #[wasm_bindgen(extends = Object3D, js_namespace = THREE)]
    pub type Mesh;

    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(geometry: &PlaneGeometry, material: &MeshBasicMaterial) -> Mesh;

    #[wasm_bindgen(js_namespace = THREE)]
    pub type BufferGeometry;

    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new() -> BufferGeometry;

    #[wasm_bindgen(method, js_name = setAttribute)]
    pub fn set_attribute(this: &BufferGeometry, name: &str, attribute: &BufferAttribute);

    #[wasm_bindgen(js_namespace = THREE)]
    pub type BufferAttribute;

    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(array: &js_sys::Float32Array, item_size: u32) -> BufferAttribute;

    #[wasm_bindgen(js_namespace = THREE)]
    pub type PointsMaterial;

    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(parameters: &JsValue) -> PointsMaterial;

    #[wasm_bindgen(extends = Object3D, js_namespace = THREE)]
    pub type Points;

    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(geometry: &BufferGeometry, material: &PointsMaterial) -> Points;
}
